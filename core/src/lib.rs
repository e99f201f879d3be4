#![no_std]

pub mod anim;
pub mod application;
pub mod assets;
pub mod display;
pub mod framebuffer;
pub mod input;
pub mod menu;
pub mod ui;
