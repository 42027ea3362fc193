//! Theme selection model.
//!
//! # Responsibility
//! - Define the closed set of named visual styles a host can apply.
//! - Parse stored theme names leniently.
//!
//! # Invariants
//! - Unrecognized or absent stored values fall back to the default theme.
//! - Theme choice persists independently of task data.

use std::fmt::{Display, Formatter};

/// Named visual style applied by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Blue,
}

impl Theme {
    /// Every selectable theme, in display order.
    pub const ALL: [Self; 3] = [Self::Light, Self::Dark, Self::Blue];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Blue => "blue",
        }
    }

    /// Parses a theme name; returns `None` for unknown values.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "blue" => Some(Self::Blue),
            _ => None,
        }
    }

    /// Parses a stored theme name, falling back to the default when the value
    /// is not recognized.
    pub fn parse_or_default(value: &str) -> Self {
        Self::parse(value).unwrap_or_default()
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
