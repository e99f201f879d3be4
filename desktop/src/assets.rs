use std::fs;
use std::path::{Path, PathBuf};

use finch_core::assets::{AssetError, AssetSource, ImageData};

/// Loads the wallpaper from a file on disk, decoding whatever format the
/// image crate recognises.
pub struct DesktopAssetSource {
    wallpaper_path: PathBuf,
}

impl DesktopAssetSource {
    pub fn new<P: AsRef<Path>>(wallpaper_path: P) -> Self {
        Self {
            wallpaper_path: wallpaper_path.as_ref().to_path_buf(),
        }
    }
}

impl AssetSource for DesktopAssetSource {
    fn load_wallpaper(&mut self) -> Result<ImageData, AssetError> {
        let data = fs::read(&self.wallpaper_path).map_err(|_| AssetError::Io)?;
        let image = image::load_from_memory(&data).map_err(|_| AssetError::Decode)?;
        let rgb = image.to_rgb8();
        Ok(ImageData {
            width: rgb.width(),
            height: rgb.height(),
            pixels: rgb.into_raw(),
        })
    }
}
