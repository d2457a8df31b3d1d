//! Folio Generator Library
//!
//! Turns a [`folio_core::Config`] and an asset directory into HTML pages.
//!
//! # Modules
//!
//! - [`template`] - `{{ variable }}` interpolation and the built-in templates
//! - [`html`] - HTML fragments (cards, sidebar, section bodies)
//! - [`markdown`] - Markdown resume rendering
//! - [`render`] - Full-page rendering with per-section failure isolation
//! - [`build`] - Static export orchestration

pub mod build;
pub mod html;
pub mod markdown;
pub mod render;
pub mod template;

pub use build::{BuildStats, Builder};
pub use html::{ContactForm, HtmlGenerator};
pub use markdown::{MarkdownRenderer, MarkdownResume};
pub use render::{RenderedPage, SiteRenderer};
pub use template::{Template, TemplateContext, TemplateRegistry};
