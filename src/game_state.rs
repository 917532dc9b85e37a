//! Game mode state machine
//!
//! A single enumerated mode gates what runs each tick. The mode is owned by
//! `ModeController` and only changes through its transition methods, so no
//! subsystem can scribble on it directly.

/// The four top-level modes of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Initial state while setup (entity placement, music start) runs.
    Downloading,
    /// Title/menu screen; gameplay suspended.
    Menu,
    /// Normal gameplay; entities update every tick.
    Playing,
    /// Gameplay frozen but the scene still renders.
    Paused,
}

/// Owns the current mode and enforces legal transitions.
///
/// Illegal transition requests (e.g. pausing from the menu) are ignored
/// rather than treated as errors; input mapping lives outside the core and
/// may fire at any time.
pub struct ModeController {
    current: GameMode,
}

impl ModeController {
    pub fn new() -> Self {
        ModeController {
            current: GameMode::Downloading,
        }
    }

    pub fn current(&self) -> GameMode {
        self.current
    }

    /// Entity updates only run during normal gameplay.
    pub fn updates_enabled(&self) -> bool {
        self.current == GameMode::Playing
    }

    /// Downloading -> Playing, once setup has completed.
    pub fn finish_setup(&mut self) {
        if self.current == GameMode::Downloading {
            self.transition(GameMode::Playing);
        }
    }

    /// Playing -> Menu.
    pub fn open_menu(&mut self) {
        if self.current == GameMode::Playing {
            self.transition(GameMode::Menu);
        }
    }

    /// Menu -> Playing.
    pub fn close_menu(&mut self) {
        if self.current == GameMode::Menu {
            self.transition(GameMode::Playing);
        }
    }

    /// Playing <-> Paused.
    pub fn toggle_pause(&mut self) {
        match self.current {
            GameMode::Playing => self.transition(GameMode::Paused),
            GameMode::Paused => self.transition(GameMode::Playing),
            _ => {}
        }
    }

    fn transition(&mut self, next: GameMode) {
        log::info!("game mode: {:?} -> {:?}", self.current, next);
        self.current = next;
    }
}

impl Default for ModeController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_in_downloading() {
        let modes = ModeController::new();
        assert_eq!(modes.current(), GameMode::Downloading);
        assert!(!modes.updates_enabled());
    }

    #[test]
    fn setup_completion_enters_playing() {
        let mut modes = ModeController::new();
        modes.finish_setup();
        assert_eq!(modes.current(), GameMode::Playing);
        assert!(modes.updates_enabled());
    }

    #[test]
    fn pause_toggles_only_from_gameplay() {
        let mut modes = ModeController::new();
        modes.toggle_pause(); // still downloading, ignored
        assert_eq!(modes.current(), GameMode::Downloading);

        modes.finish_setup();
        modes.toggle_pause();
        assert_eq!(modes.current(), GameMode::Paused);
        assert!(!modes.updates_enabled());

        modes.toggle_pause();
        assert_eq!(modes.current(), GameMode::Playing);
    }

    #[test]
    fn menu_round_trip() {
        let mut modes = ModeController::new();
        modes.finish_setup();
        modes.open_menu();
        assert_eq!(modes.current(), GameMode::Menu);
        assert!(!modes.updates_enabled());

        modes.toggle_pause(); // not legal from menu
        assert_eq!(modes.current(), GameMode::Menu);

        modes.close_menu();
        assert_eq!(modes.current(), GameMode::Playing);
    }

    #[test]
    fn finish_setup_is_one_shot() {
        let mut modes = ModeController::new();
        modes.finish_setup();
        modes.toggle_pause();
        modes.finish_setup(); // already past downloading, ignored
        assert_eq!(modes.current(), GameMode::Paused);
    }
}
