//! Markdown resume rendering using pulldown-cmark.

use std::path::Path;

use pulldown_cmark::{Options, Parser, html};
use tracing::{debug, warn};

/// Message shown to visitors when the markdown resume exists but cannot be read.
pub const UNREADABLE_MESSAGE: &str = "Could not read the Markdown resume file.";

/// State of the optional markdown resume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkdownResume {
    /// No markdown resume was provided.
    Absent,
    /// Rendered HTML.
    Rendered(String),
    /// The file exists but could not be read as UTF-8 text.
    Unreadable,
}

/// Markdown to HTML renderer.
#[derive(Debug, Clone, Copy)]
pub struct MarkdownRenderer {
    options: Options,
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownRenderer {
    /// Create a renderer with tables, footnotes, strikethrough and task lists.
    #[must_use]
    pub fn new() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_FOOTNOTES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);

        Self { options }
    }

    #[must_use]
    pub fn render(&self, source: &str) -> String {
        let parser = Parser::new_ext(source, self.options);
        let mut out = String::with_capacity(source.len() * 3 / 2);
        html::push_html(&mut out, parser);
        out
    }

    /// Load and render the markdown resume at `path`.
    pub fn load_resume(&self, path: &Path) -> MarkdownResume {
        if !path.exists() {
            debug!(path = %path.display(), "no markdown resume");
            return MarkdownResume::Absent;
        }

        match std::fs::read_to_string(path) {
            Ok(source) => MarkdownResume::Rendered(self.render(&source)),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read markdown resume");
                MarkdownResume::Unreadable
            }
        }
    }
}
