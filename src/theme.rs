use std::fmt;

use serde::{Deserialize, Serialize};

/// Local storage key the theme preference is persisted under.
pub const THEME_STORAGE_KEY: &str = "portfolio-theme";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Picks the value matching the active theme.
    pub fn pick<T>(self, light: T, dark: T) -> T {
        match self {
            Self::Light => light,
            Self::Dark => dark,
        }
    }

    pub fn page_background(self) -> &'static str {
        self.pick("bg-light-bg", "bg-dark-bg")
    }

    pub fn heading_gradient(self) -> &'static str {
        self.pick(
            "linear-gradient(135deg, #0f172a 0%, #182E6F 100%)",
            "linear-gradient(135deg, #8b5cf6 0%, #3b82f6 100%)",
        )
    }

    pub fn accent(self) -> &'static str {
        self.pick("#182E6F", "#3b82f6")
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
