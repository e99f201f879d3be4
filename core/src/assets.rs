extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use embedded_graphics::pixelcolor::Rgb888;

#[derive(Clone, Debug)]
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>, // 8-bit RGB, row-major
}

impl ImageData {
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb888> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 3;
        let rgb = self.pixels.get(idx..idx + 3)?;
        Some(Rgb888::new(rgb[0], rgb[1], rgb[2]))
    }
}

#[derive(Clone, Debug)]
pub enum AssetError {
    Io,
    Decode,
    Unsupported,
    Message(String),
}

/// Host side hands the screen its artwork through this seam. The desktop
/// shell reads files, firmware would pull from flash.
pub trait AssetSource {
    fn load_wallpaper(&mut self) -> Result<ImageData, AssetError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use embedded_graphics::prelude::RgbColor;

    #[test]
    fn pixel_reads_row_major_rgb() {
        let image = ImageData {
            width: 2,
            height: 2,
            pixels: vec![
                255, 0, 0, /* */ 0, 255, 0, //
                0, 0, 255, /* */ 10, 20, 30,
            ],
        };
        assert_eq!(image.pixel(0, 0), Some(Rgb888::RED));
        assert_eq!(image.pixel(1, 0), Some(Rgb888::GREEN));
        assert_eq!(image.pixel(0, 1), Some(Rgb888::BLUE));
        assert_eq!(image.pixel(1, 1), Some(Rgb888::new(10, 20, 30)));
        assert_eq!(image.pixel(2, 0), None);
        assert_eq!(image.pixel(0, 2), None);
    }

    #[test]
    fn huge_dimensions_do_not_wrap_the_index() {
        let image = ImageData {
            width: u32::MAX,
            height: 2,
            pixels: vec![9; 30],
        };
        // Row 1 starts far past the buffer, not back inside it.
        assert_eq!(image.pixel(5, 1), None);
        assert_eq!(image.pixel(1, 0), Some(Rgb888::new(9, 9, 9)));
    }
}
