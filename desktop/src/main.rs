use std::time::Instant;

use finch_core::{
    application::Application,
    display::{HEIGHT, WIDTH},
    framebuffer::Framebuffer,
};

use crate::assets::DesktopAssetSource;
use crate::display::MinifbDisplay;

mod assets;
mod display;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Finch desktop application started");

    let wallpaper_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "wallpaper.png".to_string());

    let mut window = minifb::Window::new(
        "Finch Desktop",
        WIDTH,
        HEIGHT,
        minifb::WindowOptions::default(),
    )
    .unwrap_or_else(|e| {
        panic!("Unable to open window: {}", e);
    });

    window.set_target_fps(60);

    let mut frame = Framebuffer::new();
    let mut source = DesktopAssetSource::new(&wallpaper_path);
    let mut display = MinifbDisplay::new(window);
    let mut application = Application::new(&mut frame, &mut source);

    let mut last_frame = Instant::now();
    while display.is_open() {
        let now = Instant::now();
        let elapsed_ms = now.duration_since(last_frame).as_millis() as u32;
        last_frame = now;

        display.update(elapsed_ms);
        application.update(display.touch(), elapsed_ms);
        application.draw(&mut display);
    }
}
