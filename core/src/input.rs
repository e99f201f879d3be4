use embedded_graphics::prelude::Point;

/// Largest finger travel that still counts as a tap.
const TAP_MAX_SLOP: i32 = 12;
/// Leftward travel needed before a release classifies as a swipe.
const SWIPE_MIN_DX: i32 = 40;
/// Vertical drift allowed in a horizontal swipe.
const SWIPE_MAX_CROSS: i32 = 50;
/// Swipes are quick. Anything held longer is a drag and classifies as nothing.
const SWIPE_MAX_MS: u32 = 600;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gesture {
    /// Press and release without travel. Carries the release point.
    Tap { at: Point },
    /// Quick leftward stroke. Carries the press point, which is what the
    /// screen hit-tests against.
    SwipeLeft { start: Point },
}

/// Per-frame touch sampling with edge detection, `Some(point)` while the
/// finger (or mouse button) is down.
#[derive(Clone, Copy, Default)]
pub struct TouchState {
    current: Option<Point>,
    previous: Option<Point>,
    pressed_at: Option<Point>,
    held_ms: u32,
}

impl TouchState {
    pub fn update(&mut self, sample: Option<Point>, elapsed_ms: u32) {
        self.previous = self.current;
        self.current = sample;
        match (self.previous, self.current) {
            (None, Some(point)) => {
                self.pressed_at = Some(point);
                self.held_ms = 0;
            }
            (Some(_), Some(_)) => {
                self.held_ms = self.held_ms.saturating_add(elapsed_ms);
            }
            (Some(end), None) => {
                if let Some(start) = self.pressed_at {
                    log::trace!(
                        "Touch released: start={:?} end={:?} held={}ms",
                        start,
                        end,
                        self.held_ms
                    );
                }
            }
            (None, None) => {}
        }
    }

    pub fn is_down(&self) -> bool {
        self.current.is_some()
    }

    pub fn position(&self) -> Option<Point> {
        self.current
    }

    /// Classifies the stroke that just ended. Only returns `Some` on the
    /// frame the release edge was observed.
    pub fn gesture(&self) -> Option<Gesture> {
        if self.current.is_some() {
            return None;
        }
        let end = self.previous?;
        let start = self.pressed_at?;
        let dx = end.x - start.x;
        let dy = end.y - start.y;
        if dx <= -SWIPE_MIN_DX && dy.abs() <= SWIPE_MAX_CROSS && self.held_ms <= SWIPE_MAX_MS {
            return Some(Gesture::SwipeLeft { start });
        }
        if dx.abs() <= TAP_MAX_SLOP && dy.abs() <= TAP_MAX_SLOP {
            return Some(Gesture::Tap { at: end });
        }
        None
    }
}
