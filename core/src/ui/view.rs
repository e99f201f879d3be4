extern crate alloc;

use alloc::vec::Vec;

use crate::display::Display;
use crate::framebuffer::Framebuffer;

use super::geom::Rect;

pub struct UiContext<'a> {
    pub buffers: &'a mut Framebuffer,
}

pub trait View {
    fn render(&mut self, ctx: &mut UiContext<'_>, rect: Rect, rq: &mut RenderQueue);
}

/// Damage collected while views render. Flushed as one region per frame.
#[derive(Default)]
pub struct RenderQueue {
    rects: Vec<Rect>,
}

impl RenderQueue {
    pub fn push(&mut self, rect: Rect) {
        self.rects.push(rect);
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    pub fn bounds(&self) -> Option<Rect> {
        let mut rects = self.rects.iter();
        let first = *rects.next()?;
        Some(rects.fold(first, |acc, r| acc.union(r)))
    }

    pub fn clear(&mut self) {
        self.rects.clear();
    }
}

pub fn flush_queue(display: &mut impl Display, frame: &Framebuffer, rq: &mut RenderQueue) {
    if let Some(bounds) = rq.bounds() {
        display.present(frame, bounds);
    }
    rq.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_covers_all_pushed_rects() {
        let mut rq = RenderQueue::default();
        assert_eq!(rq.bounds(), None);
        rq.push(Rect::new(10, 10, 5, 5));
        rq.push(Rect::new(0, 20, 5, 5));
        assert_eq!(rq.bounds(), Some(Rect::new(0, 10, 15, 15)));
        rq.clear();
        assert!(rq.is_empty());
    }
}
