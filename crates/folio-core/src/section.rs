//! Navigation sections.

use std::{fmt, str::FromStr};

use crate::error::CoreError;

/// A top-level section of the portfolio, in navigation order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Home,
    Resume,
    Projects,
    Contact,
}

impl Section {
    /// All sections in the order the sidebar lists them.
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::Resume,
        Section::Projects,
        Section::Contact,
    ];

    /// Navigation label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Resume => "Resume",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

    /// URL path segment, empty for the home section.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Home => "",
            Self::Resume => "resume",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    /// Site-relative URL of the section.
    #[must_use]
    pub fn url(self) -> String {
        format!("/{}", self.slug())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Section {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().trim_matches('/');
        Self::ALL
            .into_iter()
            .find(|section| {
                section.slug().eq_ignore_ascii_case(wanted)
                    || section.label().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| CoreError::UnknownSection(s.to_string()))
    }
}
