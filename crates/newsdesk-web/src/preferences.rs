//! Session-wide presentation preferences
//!
//! The theme flag and drawer state are initialised from configuration when
//! the server starts and live until it stops. They are never persisted.

use crate::components::palette::Palette;
use newsdesk_core::config::UiConfig;
use parking_lot::RwLock;
use serde::Serialize;

/// Flags every render function receives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UiPreferences {
    /// Dark palette instead of the light one
    pub dark_mode: bool,
    /// Navigation drawer expanded
    pub drawer_open: bool,
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self {
            dark_mode: false,
            drawer_open: true,
        }
    }
}

impl UiPreferences {
    /// Initial preferences from configuration
    #[must_use]
    pub const fn from_config(ui: &UiConfig) -> Self {
        Self {
            dark_mode: ui.dark_mode,
            drawer_open: ui.drawer_open,
        }
    }

    /// Palette selected by the theme flag
    #[must_use]
    pub const fn palette(self) -> &'static Palette {
        if self.dark_mode {
            &Palette::DARK
        } else {
            &Palette::LIGHT
        }
    }
}

/// Shared, mutable holder of [`UiPreferences`]
#[derive(Debug, Default)]
pub struct PreferenceStore {
    current: RwLock<UiPreferences>,
}

impl PreferenceStore {
    /// Store starting at `initial`
    #[must_use]
    pub const fn new(initial: UiPreferences) -> Self {
        Self {
            current: RwLock::new(initial),
        }
    }

    /// Current preferences
    #[must_use]
    pub fn get(&self) -> UiPreferences {
        *self.current.read()
    }

    /// Flip the theme flag, returning the new preferences
    pub fn toggle_dark_mode(&self) -> UiPreferences {
        let mut current = self.current.write();
        current.dark_mode = !current.dark_mode;
        *current
    }

    /// Flip the drawer flag, returning the new preferences
    pub fn toggle_drawer(&self) -> UiPreferences {
        let mut current = self.current.write();
        current.drawer_open = !current.drawer_open;
        *current
    }
}
