/// Smoothstep easing, gentle at both ends.
fn ease_in_out(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

/// One running opacity ramp, advanced by the frame loop in milliseconds.
#[derive(Debug, Clone, Copy)]
pub struct Fade {
    from: f32,
    to: f32,
    elapsed_ms: u32,
    duration_ms: u32,
}

impl Fade {
    pub fn new(from: f32, to: f32, duration_ms: u32) -> Self {
        Self {
            from,
            to,
            elapsed_ms: 0,
            duration_ms,
        }
    }

    pub fn advance(&mut self, elapsed_ms: u32) {
        self.elapsed_ms = self
            .elapsed_ms
            .saturating_add(elapsed_ms)
            .min(self.duration_ms);
    }

    pub fn value(&self) -> f32 {
        if self.duration_ms == 0 || self.elapsed_ms >= self.duration_ms {
            return self.to;
        }
        let t = self.elapsed_ms as f32 / self.duration_ms as f32;
        self.from + (self.to - self.from) * ease_in_out(t)
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn finished(&self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramps_between_endpoints() {
        let mut fade = Fade::new(0.0, 1.0, 200);
        assert_eq!(fade.value(), 0.0);
        assert_eq!(fade.target(), 1.0);
        fade.advance(100);
        assert!(fade.value() > 0.49 && fade.value() < 0.51);
        assert!(!fade.finished());
        fade.advance(100);
        assert_eq!(fade.value(), 1.0);
        assert!(fade.finished());
    }

    #[test]
    fn eases_slow_in_and_out() {
        let mut fade = Fade::new(0.0, 1.0, 200);
        fade.advance(20);
        // First tenth of the ramp moves well under a tenth of the way.
        assert!(fade.value() < 0.05);
        fade.advance(160);
        assert!(fade.value() > 0.95);
    }

    #[test]
    fn overshoot_clamps_at_target() {
        let mut fade = Fade::new(1.0, 0.0, 300);
        fade.advance(10_000);
        assert_eq!(fade.value(), 0.0);
        assert!(fade.finished());
    }

    #[test]
    fn zero_duration_is_instant() {
        let fade = Fade::new(0.0, 1.0, 0);
        assert_eq!(fade.value(), 1.0);
        assert!(fade.finished());
    }
}
