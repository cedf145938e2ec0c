//! Shared shirt state - pure data plus an explicit subscriber list
//!
//! The store is owned by the app actor and mutated only inside its message
//! loop, so no locking is involved. Every mutation goes through
//! [`Store::update`], which publishes a snapshot to all live subscribers
//! synchronously before returning. Subscribers are how the rendering
//! surface (and tests) observe changes.

use tokio::sync::mpsc;

use crate::constants::{DEFAULT_COLOR, PLACEHOLDER_DECAL};
use crate::decals::{DecalSlot, FilterTab};

/// Which screen is currently shown
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Screen {
    #[default]
    Intro,
    Customizing,
}

/// The shirt being customized - shared across all views
#[derive(Clone, Debug, PartialEq)]
pub struct ShirtState {
    pub screen: Screen,
    /// Primary shirt color as a hex string, e.g. "#0CAFFF"
    pub color: String,
    /// Whether the logo decal is visible
    pub logo_texture: bool,
    /// Whether the full-wrap decal is visible
    pub full_texture: bool,
    /// Logo decal image reference (asset path or data URI)
    pub logo_decal: String,
    /// Full-wrap decal image reference (asset path or data URI)
    pub full_decal: String,
}

impl Default for ShirtState {
    fn default() -> Self {
        ShirtState {
            screen: Screen::Intro,
            color: String::from(DEFAULT_COLOR),
            logo_texture: true,
            full_texture: false,
            logo_decal: String::from(PLACEHOLDER_DECAL),
            full_decal: String::from(PLACEHOLDER_DECAL),
        }
    }
}

impl ShirtState {
    pub fn decal(&self, slot: DecalSlot) -> &str {
        match slot {
            DecalSlot::Logo => &self.logo_decal,
            DecalSlot::Full => &self.full_decal,
        }
    }

    pub fn set_decal(&mut self, slot: DecalSlot, image: String) {
        match slot {
            DecalSlot::Logo => self.logo_decal = image,
            DecalSlot::Full => self.full_decal = image,
        }
    }

    /// Whether the given filter tab is currently active
    pub fn filter_active(&self, tab: FilterTab) -> bool {
        match tab {
            FilterTab::Logo => self.logo_texture,
            FilterTab::FullTexture => self.full_texture,
        }
    }

    pub fn set_filter(&mut self, tab: FilterTab, active: bool) {
        match tab {
            FilterTab::Logo => self.logo_texture = active,
            FilterTab::FullTexture => self.full_texture = active,
        }
    }
}

/// Shared state container with publish-on-mutation notification
pub struct Store {
    state: ShirtState,
    subscribers: Vec<mpsc::UnboundedSender<ShirtState>>,
}

impl Store {
    pub fn new() -> Self {
        Store {
            state: ShirtState::default(),
            subscribers: Vec::new(),
        }
    }

    /// Read access for any view
    pub fn state(&self) -> &ShirtState {
        &self.state
    }

    /// Register an observer. Each mutation delivers a fresh snapshot.
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<ShirtState> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.push(tx);
        rx
    }

    /// Apply a mutation and notify all subscribers synchronously
    pub fn update(&mut self, mutate: impl FnOnce(&mut ShirtState)) {
        mutate(&mut self.state);
        self.publish();
    }

    fn publish(&mut self) {
        let snapshot = &self.state;
        self.subscribers.retain(|tx| tx.send(snapshot.clone()).is_ok());
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_intro_state() {
        let state = ShirtState::default();
        assert_eq!(state.screen, Screen::Intro);
        assert_eq!(state.color, DEFAULT_COLOR);
        assert!(state.logo_texture);
        assert!(!state.full_texture);
        assert_eq!(state.logo_decal, PLACEHOLDER_DECAL);
        assert_eq!(state.full_decal, PLACEHOLDER_DECAL);
    }

    #[test]
    fn update_is_visible_immediately() {
        let mut store = Store::new();
        store.update(|s| s.color = String::from("#EFBD4E"));
        assert_eq!(store.state().color, "#EFBD4E");
    }

    #[test]
    fn every_mutation_notifies_all_subscribers() {
        let mut store = Store::new();
        let mut first = store.subscribe();
        let mut second = store.subscribe();

        store.update(|s| s.screen = Screen::Customizing);
        store.update(|s| s.full_texture = true);

        for rx in [&mut first, &mut second] {
            let snap = rx.try_recv().unwrap();
            assert_eq!(snap.screen, Screen::Customizing);
            assert!(!snap.full_texture);
            let snap = rx.try_recv().unwrap();
            assert!(snap.full_texture);
            assert!(rx.try_recv().is_err());
        }
    }

    #[test]
    fn dropped_subscribers_are_pruned() {
        let mut store = Store::new();
        let rx = store.subscribe();
        drop(rx);
        store.update(|s| s.logo_texture = false);
        assert!(store.subscribers.is_empty());
    }

    #[test]
    fn texture_flags_are_independent() {
        let mut state = ShirtState::default();
        state.set_filter(FilterTab::FullTexture, true);
        assert!(state.logo_texture);
        assert!(state.full_texture);
        state.set_filter(FilterTab::Logo, false);
        assert!(!state.logo_texture);
        assert!(state.full_texture);
    }
}
