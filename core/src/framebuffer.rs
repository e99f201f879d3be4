extern crate alloc;

use alloc::{vec, vec::Vec};
use embedded_graphics::{Pixel, pixelcolor::Rgb888, prelude::{DrawTarget, OriginDimensions, RgbColor, Size}};

pub const WIDTH: usize = 480;
pub const HEIGHT: usize = 800;
pub const BUFFER_SIZE: usize = WIDTH * HEIGHT;

/// Display rotation/orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    /// No rotation (portrait, 480x800)
    Rotate0,
    /// 90° clockwise (landscape, 800x480)
    Rotate90,
    /// 180° rotation (portrait upside-down, 480x800)
    Rotate180,
    /// 270° clockwise / 90° counter-clockwise (landscape, 800x480)
    Rotate270,
}

/// Full-colour frame store, one 0x00RRGGBB word per native pixel.
pub struct Framebuffer {
    words: Vec<u32>,
    rotation: Rotation,
}

fn pack(color: Rgb888) -> u32 {
    ((color.r() as u32) << 16) | ((color.g() as u32) << 8) | color.b() as u32
}

fn unpack(word: u32) -> Rgb888 {
    Rgb888::new(
        ((word >> 16) & 0xFF) as u8,
        ((word >> 8) & 0xFF) as u8,
        (word & 0xFF) as u8,
    )
}

impl Framebuffer {
    pub fn new() -> Self {
        // Clear screen to white
        Self {
            words: vec![0x00FF_FFFF; BUFFER_SIZE],
            rotation: Rotation::Rotate0,
        }
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn set_rotation(&mut self, rotation: Rotation) {
        self.rotation = rotation;
    }

    /// Native-order pixel words, row major, for blitting to a real display.
    pub fn as_words(&self) -> &[u32] {
        &self.words
    }

    /// Maps a logical point to native buffer coordinates for the current
    /// rotation. Returns None when the point is off screen.
    pub fn map_point(&self, x: i32, y: i32) -> Option<(usize, usize)> {
        let size = self.size();
        if x < 0 || y < 0 || x as u32 >= size.width || y as u32 >= size.height {
            return None;
        }
        let (x, y) = match self.rotation {
            Rotation::Rotate0 => (x as usize, y as usize),
            Rotation::Rotate90 => (y as usize, HEIGHT - 1 - x as usize),
            Rotation::Rotate180 => (WIDTH - 1 - x as usize, HEIGHT - 1 - y as usize),
            Rotation::Rotate270 => (WIDTH - 1 - y as usize, x as usize),
        };
        if x < WIDTH && y < HEIGHT {
            Some((x, y))
        } else {
            None
        }
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgb888) {
        if let Some((x, y)) = self.map_point(x, y) {
            self.words[y * WIDTH + x] = pack(color);
        }
    }

    pub fn pixel_at(&self, x: i32, y: i32) -> Option<Rgb888> {
        let (x, y) = self.map_point(x, y)?;
        Some(unpack(self.words[y * WIDTH + x]))
    }

    /// Mixes `color` over the stored pixel. Alpha 0xFF overwrites, 0 leaves
    /// the pixel untouched.
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Rgb888, alpha: u8) {
        if alpha == 0 {
            return;
        }
        if alpha == 0xFF {
            self.set_pixel(x, y, color);
            return;
        }
        let Some(under) = self.pixel_at(x, y) else {
            return;
        };
        let a = alpha as u32;
        let mix = |src: u8, dst: u8| ((src as u32 * a + dst as u32 * (255 - a)) / 255) as u8;
        let blended = Rgb888::new(
            mix(color.r(), under.r()),
            mix(color.g(), under.g()),
            mix(color.b(), under.b()),
        );
        self.set_pixel(x, y, blended);
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        match self.rotation {
            Rotation::Rotate0 | Rotation::Rotate180 => Size::new(WIDTH as u32, HEIGHT as u32),
            Rotation::Rotate90 | Rotation::Rotate270 => Size::new(HEIGHT as u32, WIDTH as u32),
        }
    }
}

impl DrawTarget for Framebuffer {
    type Color = Rgb888;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            self.set_pixel(coord.x, coord.y, color);
        }
        Ok(())
    }
}
