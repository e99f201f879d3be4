use embedded_graphics::pixelcolor::Rgb888;

use crate::framebuffer::Framebuffer;

use super::geom::Rect;
use super::view::{RenderQueue, UiContext, View};

/// Round option button with a centred 1-bit icon. `opacity` below 1.0 mixes
/// the button into whatever is already in the frame, which is how the
/// show/hide and dismiss fades are drawn.
pub struct CircleButton<'a> {
    pub fill: Rgb888,
    pub icon: &'a [u8],
    pub icon_size: u32,
    pub icon_color: Rgb888,
    pub opacity: f32,
}

impl View for CircleButton<'_> {
    fn render(&mut self, ctx: &mut UiContext<'_>, rect: Rect, rq: &mut RenderQueue) {
        let alpha = (self.opacity.clamp(0.0, 1.0) * 255.0) as u8;
        if alpha == 0 {
            return;
        }

        let center = rect.center();
        let r = rect.w.min(rect.h) / 2;
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                let dx = x - center.x;
                let dy = y - center.y;
                if dx * dx + dy * dy < r * r {
                    ctx.buffers.blend_pixel(x, y, self.fill, alpha);
                }
            }
        }

        let icon_x = center.x - self.icon_size as i32 / 2;
        let icon_y = center.y - self.icon_size as i32 / 2;
        draw_icon_mask(
            ctx.buffers,
            icon_x,
            icon_y,
            self.icon_size,
            self.icon_size,
            self.icon,
            self.icon_color,
            alpha,
        );
        rq.push(rect);
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_icon_mask(
    frame: &mut Framebuffer,
    x: i32,
    y: i32,
    width: u32,
    height: u32,
    mask: &[u8],
    color: Rgb888,
    alpha: u8,
) {
    for row in 0..height {
        for col in 0..width {
            let idx = (row * width + col) as usize;
            let byte = idx / 8;
            let bit = 7 - (idx % 8);
            if byte < mask.len() && (mask[byte] >> bit) & 0x01 == 1 {
                frame.blend_pixel(x + col as i32, y + row as i32, color, alpha);
            }
        }
    }
}
