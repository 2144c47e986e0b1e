//! Colour scheme preference shared by every page of the site.

use serde::{Deserialize, Serialize};

/// localStorage key the preference persists under.
pub const STORAGE_KEY: &str = "theme";

/// Class toggled on the body element while dark mode is active.
pub const DARK_CLASS: &str = "dark";

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Light
    }
}

impl Theme {
    /// Stable token used in storage, "light" or "dark".
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Interpret a stored value; anything other than "dark" means light.
    pub fn from_stored(stored: Option<&str>) -> Self {
        match stored {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    /// Theme selected by the toggle control's checked state.
    pub fn from_checked(checked: bool) -> Self {
        if checked { Theme::Dark } else { Theme::Light }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Checked state the toggle control shows for this theme.
    pub fn checked(self) -> bool {
        self.is_dark()
    }

    /// Whether [`DARK_CLASS`] belongs on the body element.
    pub fn class_active(self) -> bool {
        self.is_dark()
    }
}
