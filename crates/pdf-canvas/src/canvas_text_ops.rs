use std::sync::Arc;

use pdf_content_stream::TextParams;
use pdf_font::font::Font;

use crate::{canvas::Canvas, error::CanvasError};

impl Canvas<'_> {
    /// Shows `text` in `font` at `size` points with the baseline starting at
    /// (`x`, `y`).
    ///
    /// Registers the font on the page, then emits
    /// `BT x y Td  /F{n} size Tf [+ text state]  [<encoded>] TJ  ET`.
    pub fn draw_string(
        &mut self,
        font: &Arc<dyn Font>,
        size: f32,
        text: &str,
        x: f32,
        y: f32,
        params: &TextParams,
    ) -> Result<(), CanvasError> {
        if !size.is_finite() || size <= 0.0 {
            return Err(CanvasError::InvalidFontSize(size));
        }
        let name = self.resources.add_font(font);

        self.content.begin_text();
        self.content.move_text_position(x, y)?;
        self.content.set_font(&name, size, params)?;

        let mut encoded = Vec::new();
        font.put_text(&mut encoded, text);
        self.content.show_text(&encoded);
        self.content.end_text();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pdf_content_stream::TextParams;
    use pdf_font::{fixed_metrics_font::FixedMetricsFont, font::Font};
    use pdf_page::page::Page;

    use crate::canvas::Canvas;

    fn mono() -> Arc<dyn Font> {
        Arc::new(FixedMetricsFont::new("Mono", 0.6, 0.8, -0.2))
    }

    #[test]
    fn draw_string_registers_and_shows() {
        let mut page = Page::new(200.0, 200.0);
        let mut canvas = Canvas::for_page(&mut page);
        let font = mono();
        canvas
            .draw_string(&font, 12.0, "Hi", 10.0, 20.0, &TextParams::default())
            .unwrap();
        assert_eq!(
            core::str::from_utf8(page.content.bytes()).unwrap(),
            "BT\n10 20 Td\n/F0 12 Tf\n[(Hi)] TJ\nET\n"
        );
        assert_eq!(page.resources.fonts().len(), 1);
    }

    #[test]
    fn non_positive_size_is_rejected() {
        let mut page = Page::new(200.0, 200.0);
        let mut canvas = Canvas::for_page(&mut page);
        let font = mono();
        let result = canvas.draw_string(&font, 0.0, "Hi", 0.0, 0.0, &TextParams::default());
        assert!(result.is_err());
        assert!(page.content.bytes().is_empty());
    }
}
