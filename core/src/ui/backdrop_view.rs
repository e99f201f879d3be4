use embedded_graphics::pixelcolor::Rgb888;

use crate::assets::ImageData;

use super::geom::Rect;
use super::view::{RenderQueue, UiContext, View};

/// Wallpaper behind the whole screen. Scale-to-fill: the image covers
/// `region` completely and the overflowing axis is cropped about the centre.
pub struct BackdropView<'a> {
    pub image: Option<&'a ImageData>,
    /// Area the wallpaper maps onto. `render` may be asked to repaint any
    /// sub-rect of it without disturbing the mapping.
    pub region: Rect,
    pub fallback: Rgb888,
}

impl View for BackdropView<'_> {
    fn render(&mut self, ctx: &mut UiContext<'_>, rect: Rect, rq: &mut RenderQueue) {
        let Some(clip) = rect.intersection(&self.region) else {
            return;
        };
        match self.image {
            Some(image) if image.width > 0 && image.height > 0 => {
                self.render_fill(ctx, image, clip)
            }
            _ => {
                for y in clip.y..clip.bottom() {
                    for x in clip.x..clip.right() {
                        ctx.buffers.set_pixel(x, y, self.fallback);
                    }
                }
            }
        }
        rq.push(clip);
    }
}

impl BackdropView<'_> {
    fn render_fill(&self, ctx: &mut UiContext<'_>, image: &ImageData, clip: Rect) {
        let region_w = self.region.w.max(1) as u64;
        let region_h = self.region.h.max(1) as u64;
        let img_w = image.width.max(1) as u64;
        let img_h = image.height.max(1) as u64;

        // Opposite choice to letterboxing: the short axis matches the region
        // and the long one spills past the edges.
        let (scaled_w, scaled_h) = if img_w * region_h > img_h * region_w {
            ((img_w * region_h / img_h).max(1), region_h)
        } else {
            (region_w, (img_h * region_w / img_w).max(1))
        };

        let offset_x = (self.region.w - scaled_w as i32) / 2;
        let offset_y = (self.region.h - scaled_h as i32) / 2;

        for y in clip.y..clip.bottom() {
            let local_y = (y - self.region.y - offset_y) as u64;
            let src_y = (local_y * img_h / scaled_h).min(img_h - 1) as u32;
            for x in clip.x..clip.right() {
                let local_x = (x - self.region.x - offset_x) as u64;
                let src_x = (local_x * img_w / scaled_w).min(img_w - 1) as u32;
                if let Some(color) = image.pixel(src_x, src_y) {
                    ctx.buffers.set_pixel(x, y, color);
                }
            }
        }
    }
}
