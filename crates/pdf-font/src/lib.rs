pub mod error;
pub mod fixed_metrics_font;
pub mod font;
pub mod font_metrics;
pub mod true_type_font;
