use embedded_graphics::{
    Drawable,
    mono_font::{MonoTextStyle, ascii::FONT_10X20},
    pixelcolor::Rgb888,
    prelude::{Point, Primitive, Size},
    primitives::Rectangle,
    text::Text,
};

use super::geom::Rect;
use super::view::{RenderQueue, UiContext, View};

/// Bordered rectangular button with a centred label, as it sits in the
/// bottom bar.
pub struct BarButton<'a> {
    pub label: &'a str,
    pub fill: Rgb888,
    pub border: Rgb888,
    pub border_width: u32,
    pub text: Rgb888,
}

impl View for BarButton<'_> {
    fn render(&mut self, ctx: &mut UiContext<'_>, rect: Rect, rq: &mut RenderQueue) {
        Rectangle::new(
            Point::new(rect.x, rect.y),
            Size::new(rect.w as u32, rect.h as u32),
        )
        .into_styled(embedded_graphics::primitives::PrimitiveStyle::with_fill(
            self.fill,
        ))
        .draw(ctx.buffers)
        .ok();

        Rectangle::new(
            Point::new(rect.x, rect.y),
            Size::new(rect.w as u32, rect.h as u32),
        )
        .into_styled(embedded_graphics::primitives::PrimitiveStyle::with_stroke(
            self.border,
            self.border_width,
        ))
        .draw(ctx.buffers)
        .ok();

        // FONT_10X20 cells are 10 wide, baseline roughly 14 into the glyph.
        let label_style = MonoTextStyle::new(&FONT_10X20, self.text);
        let label_width = self.label.len() as i32 * 10;
        let text_x = rect.x + (rect.w - label_width) / 2;
        let text_y = rect.y + (rect.h + 14) / 2;
        Text::new(self.label, Point::new(text_x, text_y), label_style)
            .draw(ctx.buffers)
            .ok();

        rq.push(rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::Framebuffer;
    use embedded_graphics::prelude::RgbColor;

    const TEAL: Rgb888 = Rgb888::new(0x00, 0x8B, 0x8B);

    #[test]
    fn fill_border_and_label_are_painted() {
        let mut fb = Framebuffer::new();
        let mut rq = RenderQueue::default();
        let rect = Rect::new(100, 100, 120, 40);
        let mut view = BarButton {
            label: "Menu",
            fill: TEAL,
            border: Rgb888::WHITE,
            border_width: 3,
            text: Rgb888::WHITE,
        };
        view.render(&mut UiContext { buffers: &mut fb }, rect, &mut rq);
        // Border pixel on the top edge, fill inside it.
        assert_eq!(fb.pixel_at(110, 100), Some(Rgb888::WHITE));
        assert_eq!(fb.pixel_at(110, 110), Some(TEAL));
        // Some label pixel is white in the middle band.
        let band_has_text = (rect.x..rect.right())
            .any(|x| fb.pixel_at(x, rect.y + rect.h / 2) == Some(Rgb888::WHITE));
        assert!(band_has_text);
        assert_eq!(rq.bounds(), Some(rect));
    }
}
