extern crate alloc;

use alloc::vec::Vec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionId {
    Settings,
    Home,
    Search,
    Time,
    Content,
}

impl OptionId {
    /// Spawn order, top of the stack first.
    pub const ALL: [OptionId; 5] = [
        OptionId::Settings,
        OptionId::Home,
        OptionId::Search,
        OptionId::Time,
        OptionId::Content,
    ];

    pub fn label(self) -> &'static str {
        match self {
            OptionId::Settings => "settings",
            OptionId::Home => "home",
            OptionId::Search => "search",
            OptionId::Time => "time",
            OptionId::Content => "content",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub is_open: bool,
    /// Set once the option entries have been created. They are created on
    /// the first open and never again, so dismissed options stay gone.
    pub spawned: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionEntry {
    pub id: OptionId,
    pub visible: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuCommand {
    Toggle,
    Dismiss(OptionId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryEffect {
    /// Fade the entry in.
    Show,
    /// Fade the entry out but keep it around.
    Hide,
    /// Fade the entry out and drop it for good.
    Remove,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntryIntent {
    pub id: OptionId,
    pub effect: EntryEffect,
}

/// Owns the open/closed state and the surviving option entries. Every
/// mutation goes through [`MenuCommand`] and comes back out as the list of
/// per-entry effects the screen should animate.
pub struct MenuController {
    state: MenuState,
    entries: Vec<OptionEntry>,
}

impl MenuController {
    pub fn new() -> Self {
        Self {
            state: MenuState::default(),
            entries: Vec::new(),
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    pub fn entries(&self) -> &[OptionEntry] {
        &self.entries
    }

    pub fn apply(&mut self, command: MenuCommand) -> Vec<EntryIntent> {
        match command {
            MenuCommand::Toggle => self.toggle(),
            MenuCommand::Dismiss(id) => self.dismiss(id).into_iter().collect(),
        }
    }

    pub fn toggle(&mut self) -> Vec<EntryIntent> {
        self.state.is_open = !self.state.is_open;
        if self.state.is_open {
            self.ensure_spawned();
            let intents: Vec<EntryIntent> = self
                .entries
                .iter_mut()
                .map(|entry| {
                    entry.visible = true;
                    EntryIntent {
                        id: entry.id,
                        effect: EntryEffect::Show,
                    }
                })
                .collect();
            log::info!("Menu opened: {} options", intents.len());
            intents
        } else {
            let intents: Vec<EntryIntent> = self
                .entries
                .iter_mut()
                .map(|entry| {
                    entry.visible = false;
                    EntryIntent {
                        id: entry.id,
                        effect: EntryEffect::Hide,
                    }
                })
                .collect();
            log::info!("Menu closed");
            intents
        }
    }

    /// Permanently removes an option. Returns None when the option was never
    /// spawned or is already gone, which callers treat as a quiet no-op.
    pub fn dismiss(&mut self, id: OptionId) -> Option<EntryIntent> {
        let Some(index) = self.entries.iter().position(|entry| entry.id == id) else {
            log::trace!("Dismiss ignored, option not present: {:?}", id);
            return None;
        };
        self.entries.remove(index);
        log::info!("Dismissed option: {:?}", id);
        Some(EntryIntent {
            id,
            effect: EntryEffect::Remove,
        })
    }

    fn ensure_spawned(&mut self) {
        if self.state.spawned {
            return;
        }
        self.state.spawned = true;
        self.entries = OptionId::ALL
            .iter()
            .map(|&id| OptionEntry { id, visible: false })
            .collect();
        log::info!("Spawned {} menu options", self.entries.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn ids(entries: &[OptionEntry]) -> Vec<OptionId> {
        entries.iter().map(|entry| entry.id).collect()
    }

    fn effects(intents: &[EntryIntent]) -> Vec<EntryEffect> {
        intents.iter().map(|intent| intent.effect).collect()
    }

    #[test]
    fn toggle_flips_open_state_each_time() {
        let mut menu = MenuController::new();
        assert!(!menu.is_open());
        for round in 1..=5 {
            menu.toggle();
            assert_eq!(menu.is_open(), round % 2 == 1);
        }
    }

    #[test]
    fn first_open_spawns_all_options_in_order() {
        let mut menu = MenuController::new();
        assert!(menu.entries().is_empty());
        let intents = menu.toggle();
        assert_eq!(ids(menu.entries()), OptionId::ALL.to_vec());
        assert_eq!(
            intents
                .iter()
                .map(|intent| intent.id)
                .collect::<Vec<_>>(),
            OptionId::ALL.to_vec()
        );
        assert!(effects(&intents).iter().all(|e| *e == EntryEffect::Show));
        assert!(menu.state().spawned);
    }

    #[test]
    fn reopening_does_not_spawn_again() {
        let mut menu = MenuController::new();
        menu.toggle();
        menu.toggle();
        let intents = menu.toggle();
        assert_eq!(menu.entries().len(), 5);
        assert_eq!(intents.len(), 5);
        assert!(effects(&intents).iter().all(|e| *e == EntryEffect::Show));
    }

    #[test]
    fn closing_hides_but_keeps_entries() {
        let mut menu = MenuController::new();
        menu.toggle();
        let intents = menu.toggle();
        assert!(!menu.is_open());
        assert_eq!(menu.entries().len(), 5);
        assert!(menu.entries().iter().all(|entry| !entry.visible));
        assert!(effects(&intents).iter().all(|e| *e == EntryEffect::Hide));
    }

    #[test]
    fn dismiss_removes_exactly_one_entry() {
        let mut menu = MenuController::new();
        menu.toggle();
        let intent = menu.dismiss(OptionId::Search);
        assert_eq!(
            intent,
            Some(EntryIntent {
                id: OptionId::Search,
                effect: EntryEffect::Remove,
            })
        );
        assert_eq!(
            ids(menu.entries()),
            vec![
                OptionId::Settings,
                OptionId::Home,
                OptionId::Time,
                OptionId::Content,
            ]
        );
    }

    #[test]
    fn dismiss_is_idempotent_and_quiet() {
        let mut menu = MenuController::new();
        menu.toggle();
        assert!(menu.dismiss(OptionId::Time).is_some());
        assert!(menu.dismiss(OptionId::Time).is_none());
        assert_eq!(menu.entries().len(), 4);
    }

    #[test]
    fn dismiss_before_first_open_is_a_no_op() {
        let mut menu = MenuController::new();
        assert!(menu.dismiss(OptionId::Home).is_none());
        menu.toggle();
        // Nothing was spawned yet, so nothing could be removed.
        assert_eq!(menu.entries().len(), 5);
    }

    #[test]
    fn dismissed_options_never_come_back() {
        let mut menu = MenuController::new();
        menu.toggle();
        menu.dismiss(OptionId::Time);
        menu.toggle();
        let intents = menu.toggle();
        assert_eq!(
            ids(menu.entries()),
            vec![
                OptionId::Settings,
                OptionId::Home,
                OptionId::Search,
                OptionId::Content,
            ]
        );
        assert_eq!(intents.len(), 4);
        assert!(intents.iter().all(|intent| intent.id != OptionId::Time));
    }

    #[test]
    fn dismissing_everything_leaves_a_working_toggle() {
        let mut menu = MenuController::new();
        menu.toggle();
        for id in OptionId::ALL {
            menu.dismiss(id);
        }
        assert!(menu.entries().is_empty());
        let intents = menu.toggle();
        assert!(!menu.is_open());
        assert!(intents.is_empty());
        let intents = menu.toggle();
        assert!(menu.is_open());
        // Spawn happened once, an empty set stays empty.
        assert!(intents.is_empty());
    }

    #[test]
    fn commands_route_to_the_same_operations() {
        let mut menu = MenuController::new();
        let intents = menu.apply(MenuCommand::Toggle);
        assert_eq!(intents.len(), 5);
        let intents = menu.apply(MenuCommand::Dismiss(OptionId::Content));
        assert_eq!(
            intents,
            vec![EntryIntent {
                id: OptionId::Content,
                effect: EntryEffect::Remove,
            }]
        );
        assert!(menu.apply(MenuCommand::Dismiss(OptionId::Content)).is_empty());
    }

    #[test]
    fn labels_match_asset_names() {
        let labels: Vec<&str> = OptionId::ALL.iter().map(|id| id.label()).collect();
        assert_eq!(labels, vec!["settings", "home", "search", "time", "content"]);
    }
}
