extern crate alloc;

use alloc::vec::Vec;

use embedded_graphics::{
    Drawable,
    pixelcolor::Rgb888,
    prelude::{OriginDimensions, Point, Primitive, Size},
    primitives::Rectangle,
};

mod generated_icons {
    include!(concat!(env!("OUT_DIR"), "/icons.rs"));
}

use crate::{
    anim::Fade,
    assets::{AssetSource, ImageData},
    framebuffer::{Framebuffer, Rotation},
    input::{Gesture, TouchState},
    menu::{EntryEffect, EntryIntent, MenuCommand, MenuController, OptionId},
    ui::{BackdropView, BarButton, CircleButton, Rect, RenderQueue, UiContext, View, flush_queue},
};

const BAR_HEIGHT: i32 = 60;
const MENU_BUTTON_RIGHT_INSET: i32 = 30;
const MENU_BUTTON_TOP_PAD: i32 = 8;
const MENU_BUTTON_BOTTOM_INSET: i32 = 12;
const MENU_BUTTON_BORDER: u32 = 3;
const OPTION_SIZE: i32 = 70;
const OPTION_GAP: i32 = 5;
const STACK_BOTTOM_GAP: i32 = 20;
const TOGGLE_FADE_MS: u32 = 200;
const DISMISS_FADE_MS: u32 = 300;

const TEAL: Rgb888 = Rgb888::new(0x00, 0x8B, 0x8B);
const WHITE: Rgb888 = Rgb888::new(0xFF, 0xFF, 0xFF);
const BACKDROP_FALLBACK: Rgb888 = Rgb888::new(0xF2, 0xF2, 0xF7);

/// On-screen state of one option button. Lives past its menu entry while the
/// removal fade plays out, flagged `dying` until it is dropped.
struct EntryVisual {
    id: OptionId,
    opacity: f32,
    fade: Option<Fade>,
    dying: bool,
}

pub struct Application<'a> {
    dirty: bool,
    needs_full: bool,
    frame: &'a mut Framebuffer,
    menu: MenuController,
    visuals: Vec<EntryVisual>,
    wallpaper: Option<ImageData>,
}

impl<'a> Application<'a> {
    pub fn new(frame: &'a mut Framebuffer, source: &mut impl AssetSource) -> Self {
        frame.set_rotation(Rotation::Rotate0);
        let wallpaper = match source.load_wallpaper() {
            Ok(image) => {
                log::info!("Wallpaper loaded: {}x{}", image.width, image.height);
                Some(image)
            }
            Err(err) => {
                log::warn!("No wallpaper: {:?}, falling back to a flat backdrop", err);
                None
            }
        };
        Application {
            dirty: true,
            needs_full: true,
            frame,
            menu: MenuController::new(),
            visuals: Vec::new(),
            wallpaper,
        }
    }

    pub fn menu(&self) -> &MenuController {
        &self.menu
    }

    pub fn update(&mut self, touch: &TouchState, elapsed_ms: u32) {
        if self.step_fades(elapsed_ms) {
            self.dirty = true;
        }
        if let Some(gesture) = touch.gesture() {
            if let Some(command) = self.command_for(gesture) {
                self.dispatch(command);
            }
        }
    }

    /// Single entry point for menu mutations, whether they come from touch
    /// hit-testing or somewhere else.
    pub fn dispatch(&mut self, command: MenuCommand) {
        let intents = self.menu.apply(command);
        self.apply_intents(&intents);
    }

    fn apply_intents(&mut self, intents: &[EntryIntent]) {
        for intent in intents {
            match intent.effect {
                EntryEffect::Show => {
                    let visual = self.visual_entry(intent.id);
                    visual.fade = Some(Fade::new(visual.opacity, 1.0, TOGGLE_FADE_MS));
                }
                EntryEffect::Hide => {
                    if let Some(visual) = self.find_visual(intent.id) {
                        visual.fade = Some(Fade::new(visual.opacity, 0.0, TOGGLE_FADE_MS));
                    }
                }
                EntryEffect::Remove => {
                    if let Some(visual) = self.find_visual(intent.id) {
                        visual.dying = true;
                        visual.fade = Some(Fade::new(visual.opacity, 0.0, DISMISS_FADE_MS));
                    }
                }
            }
        }
        if !intents.is_empty() {
            self.dirty = true;
        }
    }

    fn visual_entry(&mut self, id: OptionId) -> &mut EntryVisual {
        if let Some(index) = self.visuals.iter().position(|visual| visual.id == id) {
            return &mut self.visuals[index];
        }
        self.visuals.push(EntryVisual {
            id,
            opacity: 0.0,
            fade: None,
            dying: false,
        });
        self.visuals.last_mut().unwrap()
    }

    fn find_visual(&mut self, id: OptionId) -> Option<&mut EntryVisual> {
        self.visuals
            .iter_mut()
            .find(|visual| visual.id == id && !visual.dying)
    }

    /// Advances all running fades and drops ghosts whose removal fade just
    /// ended. Returns true when anything moved.
    fn step_fades(&mut self, elapsed_ms: u32) -> bool {
        let mut changed = false;
        for visual in &mut self.visuals {
            if let Some(fade) = &mut visual.fade {
                fade.advance(elapsed_ms);
                visual.opacity = fade.value();
                if fade.finished() {
                    visual.fade = None;
                }
                changed = true;
            }
        }
        let before = self.visuals.len();
        self.visuals
            .retain(|visual| !(visual.dying && visual.fade.is_none()));
        changed || self.visuals.len() != before
    }

    fn command_for(&self, gesture: Gesture) -> Option<MenuCommand> {
        match gesture {
            Gesture::Tap { at } => {
                if self.menu_button_rect().contains(at) {
                    return Some(MenuCommand::Toggle);
                }
                None
            }
            Gesture::SwipeLeft { start } => {
                let count = self.visuals.len();
                for (index, visual) in self.visuals.iter().enumerate() {
                    if visual.dying || !self.slot_rect(index, count).contains(start) {
                        continue;
                    }
                    // Hidden buttons do not take touches.
                    let interactive = self
                        .menu
                        .entries()
                        .iter()
                        .any(|entry| entry.id == visual.id && entry.visible);
                    if interactive {
                        return Some(MenuCommand::Dismiss(visual.id));
                    }
                }
                None
            }
        }
    }

    pub fn draw(&mut self, display: &mut impl crate::display::Display) {
        if !self.dirty {
            return;
        }
        self.dirty = false;

        let full = self.needs_full;
        self.needs_full = false;

        let wallpaper_rect = self.wallpaper_rect();
        let bar = self.bar_rect();
        let button = self.menu_button_rect();
        let stack = self.stack_rect();
        let count = self.visuals.len();
        let slots: Vec<Rect> = (0..count).map(|i| self.slot_rect(i, count)).collect();

        let mut rq = RenderQueue::default();
        let mut ctx = UiContext {
            buffers: self.frame,
        };

        let mut backdrop = BackdropView {
            image: self.wallpaper.as_ref(),
            region: wallpaper_rect,
            fallback: BACKDROP_FALLBACK,
        };
        backdrop.render(&mut ctx, if full { wallpaper_rect } else { stack }, &mut rq);

        if full {
            Rectangle::new(
                Point::new(bar.x, bar.y),
                Size::new(bar.w as u32, bar.h as u32),
            )
            .into_styled(embedded_graphics::primitives::PrimitiveStyle::with_fill(
                TEAL,
            ))
            .draw(ctx.buffers)
            .ok();
            rq.push(bar);

            let mut menu_button = BarButton {
                label: "Menu",
                fill: TEAL,
                border: WHITE,
                border_width: MENU_BUTTON_BORDER,
                text: WHITE,
            };
            menu_button.render(&mut ctx, button, &mut rq);
        }

        for (index, visual) in self.visuals.iter().enumerate() {
            let mut circle = CircleButton {
                fill: TEAL,
                icon: icon_for(visual.id),
                icon_size: generated_icons::ICON_SIZE,
                icon_color: WHITE,
                opacity: visual.opacity,
            };
            circle.render(&mut ctx, slots[index], &mut rq);
        }

        flush_queue(display, self.frame, &mut rq);

        if self.visuals.iter().any(|visual| visual.fade.is_some()) {
            self.dirty = true;
        }
    }

    fn bar_rect(&self) -> Rect {
        let size = self.frame.size();
        let width = size.width as i32;
        let height = size.height as i32;
        Rect::new(0, height - BAR_HEIGHT, width, BAR_HEIGHT)
    }

    fn menu_button_rect(&self) -> Rect {
        let bar = self.bar_rect();
        let width = bar.w / 4;
        let height = BAR_HEIGHT - MENU_BUTTON_TOP_PAD - MENU_BUTTON_BOTTOM_INSET;
        Rect::new(
            bar.right() - MENU_BUTTON_RIGHT_INSET - width,
            bar.y + MENU_BUTTON_TOP_PAD,
            width,
            height,
        )
    }

    fn wallpaper_rect(&self) -> Rect {
        let size = self.frame.size();
        Rect::new(0, 0, size.width as i32, size.height as i32 - BAR_HEIGHT)
    }

    /// Column the option stack can ever occupy, sized for the full spawn
    /// count. Animation frames repaint exactly this region.
    fn stack_rect(&self) -> Rect {
        let slot_count = OptionId::ALL.len() as i32;
        let bottom = self.menu_button_rect().y - STACK_BOTTOM_GAP;
        let height = slot_count * OPTION_SIZE + (slot_count - 1) * OPTION_GAP;
        let center_x = self.menu_button_rect().center().x;
        Rect::new(
            center_x - OPTION_SIZE / 2,
            bottom - height,
            OPTION_SIZE,
            height,
        )
    }

    /// Bottom-anchored stack: the last slot hugs the gap above the menu
    /// button and shorter stacks start lower down.
    fn slot_rect(&self, index: usize, count: usize) -> Rect {
        let bottom = self.menu_button_rect().y - STACK_BOTTOM_GAP;
        let below = (count - index) as i32;
        let gaps = (count - 1 - index) as i32;
        let top = bottom - below * OPTION_SIZE - gaps * OPTION_GAP;
        let center_x = self.menu_button_rect().center().x;
        Rect::new(center_x - OPTION_SIZE / 2, top, OPTION_SIZE, OPTION_SIZE)
    }
}

fn icon_for(id: OptionId) -> &'static [u8] {
    match id {
        OptionId::Settings => generated_icons::ICON_SETTINGS_MASK,
        OptionId::Home => generated_icons::ICON_HOME_MASK,
        OptionId::Search => generated_icons::ICON_SEARCH_MASK,
        OptionId::Time => generated_icons::ICON_TIME_MASK,
        OptionId::Content => generated_icons::ICON_CONTENT_MASK,
    }
}
