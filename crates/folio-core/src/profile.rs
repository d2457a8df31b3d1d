//! Profile, highlight and project records.
//!
//! These are loaded once from `config.toml` and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// Placeholder shown for a project without a title.
pub const UNTITLED_PROJECT: &str = "Untitled Project";

/// The person the portfolio is about.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Display name.
    pub name: String,

    /// Job title shown under the name.
    #[serde(default)]
    pub role: String,

    /// Free-form location.
    #[serde(default)]
    pub location: String,

    /// Contact address; also the `mailto:` target of contact drafts.
    pub email: String,

    /// LinkedIn profile URL.
    #[serde(default)]
    pub linkedin: Option<String>,

    /// GitHub profile URL.
    #[serde(default)]
    pub github: Option<String>,

    /// Summary paragraph for the home section.
    #[serde(default)]
    pub blurb: String,
}

impl Profile {
    /// External profile links as `(label, url)` pairs, skipping empty ones.
    pub fn links(&self) -> Vec<(&'static str, &str)> {
        [
            ("LinkedIn", self.linkedin.as_deref()),
            ("GitHub", self.github.as_deref()),
        ]
        .into_iter()
        .filter_map(|(label, url)| non_empty(url).map(|u| (label, u)))
        .collect()
    }
}

/// A highlight card on the home section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub title: String,
    pub body: String,
}

/// A project card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// Comma separated technology list, rendered verbatim.
    #[serde(default)]
    pub tech: String,

    #[serde(default)]
    pub repo_url: Option<String>,

    #[serde(default)]
    pub demo_url: Option<String>,
}

impl Project {
    /// Title, or the placeholder when the key is absent. A present but
    /// blank title is shown as written.
    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(UNTITLED_PROJECT)
    }

    #[must_use]
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    /// Repository URL; an empty string counts as unset.
    #[must_use]
    pub fn repo_url(&self) -> Option<&str> {
        non_empty(self.repo_url.as_deref())
    }

    /// Live demo URL; an empty string counts as unset.
    #[must_use]
    pub fn demo_url(&self) -> Option<&str> {
        non_empty(self.demo_url.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
