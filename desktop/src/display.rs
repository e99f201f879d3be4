use embedded_graphics::prelude::Point;
use finch_core::{
    display::{Display, HEIGHT, WIDTH},
    framebuffer::Framebuffer,
    input::TouchState,
    ui::Rect,
};

pub struct MinifbDisplay {
    display_buffer: Vec<u32>,
    window: minifb::Window,
    touch: TouchState,
}

impl MinifbDisplay {
    pub fn new(window: minifb::Window) -> Self {
        Self {
            display_buffer: vec![0; WIDTH * HEIGHT],
            window,
            touch: TouchState::default(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.window.is_open() && !self.window.is_key_down(minifb::Key::Escape)
    }

    fn update_display(&mut self) {
        self.window
            .update_with_buffer(&self.display_buffer, WIDTH, HEIGHT)
            .unwrap();
    }

    /// Pumps the window and turns the left mouse button into the touch
    /// sample stream the core consumes.
    pub fn update(&mut self, elapsed_ms: u32) {
        self.window.update();
        let sample = if self.window.get_mouse_down(minifb::MouseButton::Left) {
            self.window
                .get_mouse_pos(minifb::MouseMode::Clamp)
                .map(|(x, y)| Point::new(x as i32, y as i32))
        } else {
            None
        };
        self.touch.update(sample, elapsed_ms);
    }

    pub fn touch(&self) -> &TouchState {
        &self.touch
    }
}

impl Display for MinifbDisplay {
    fn present(&mut self, frame: &Framebuffer, region: Rect) {
        let words = frame.as_words();
        for y in region.y..region.bottom() {
            for x in region.x..region.right() {
                if let Some((nx, ny)) = frame.map_point(x, y) {
                    let index = ny * WIDTH + nx;
                    self.display_buffer[index] = words[index];
                }
            }
        }
        self.update_display();
    }
}
