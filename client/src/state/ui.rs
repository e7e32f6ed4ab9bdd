//! Local UI chrome state (theme, navigation menu).

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::dark_mode;

/// UI state for the navbar and theme.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    /// Collapsed mobile navigation is expanded.
    pub menu_open: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self { dark_mode: dark_mode::DEFAULT_DARK, menu_open: false }
    }
}

impl UiState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Collapse the menu after a navigation.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}
