use crate::framebuffer::Framebuffer;
use crate::ui::geom::Rect;

pub const WIDTH: usize = 480;
pub const HEIGHT: usize = 800;

/// Output seam for the panel behind the framebuffer. `region` is in logical
/// coordinates for the frame's current rotation; implementations only need
/// to push those pixels, not the whole frame.
pub trait Display {
    fn present(&mut self, frame: &Framebuffer, region: Rect);
}
