#![deny(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::panic)]

pub mod error;
pub mod placed_span;
pub mod rich_text;
pub mod shaping;
pub mod span;
pub mod style;
pub mod widget;

pub use error::LayoutError;
pub use rich_text::{RichText, TextAlign, TextDirection};
pub use span::{InlineSpan, TextSpan, WidgetSpan};
pub use style::TextStyle;
pub use widget::{BoxConstraints, LayoutContext, Widget};
