//! Full-page rendering.
//!
//! Each render re-reads the asset directory: the resume resolver, the avatar
//! and the markdown resume are consulted on every call. A failing section body
//! is replaced by an error callout so the sidebar, navigation and footer still
//! render.

use std::path::{Path, PathBuf};

use folio_core::{Config, ContactDraft, ResumeAsset, ResumeResolver, Section, load_avatar};
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    html::{CalloutKind, ContactForm, HtmlGenerator, PdfStatus, ResumeView, callout},
    markdown::{MarkdownRenderer, MarkdownResume},
    template::{self, TemplateError, escape_html},
};

/// Page rendering errors.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The page shell itself failed to render.
    #[error("template error: {0}")]
    Template(#[from] TemplateError),
}

/// Result type for page rendering.
pub type Result<T> = std::result::Result<T, RenderError>;

/// A rendered page.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    /// Section the page shows; `None` for the not-found page.
    pub section: Option<Section>,
    pub html: String,
    /// Problems that were contained inside a section.
    pub warnings: Vec<String>,
}

/// Renders complete pages for a site rooted at a directory.
#[derive(Debug, Clone)]
pub struct SiteRenderer {
    html: HtmlGenerator,
    markdown: MarkdownRenderer,
    site_root: PathBuf,
}

impl SiteRenderer {
    /// Create a renderer. Asset paths in `config` are resolved against `site_root`.
    #[must_use]
    pub fn new(config: Config, site_root: impl Into<PathBuf>) -> Self {
        Self {
            html: HtmlGenerator::new(config),
            markdown: MarkdownRenderer::new(),
            site_root: site_root.into(),
        }
    }

    /// Choose how the contact section composes drafts.
    #[must_use]
    pub fn with_contact_form(mut self, contact_form: ContactForm) -> Self {
        self.html = self.html.with_contact_form(contact_form);
        self
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        self.html.config()
    }

    #[must_use]
    pub fn site_root(&self) -> &Path {
        &self.site_root
    }

    #[must_use]
    pub fn resolver(&self) -> ResumeResolver {
        ResumeResolver::from_config(&self.config().assets, &self.site_root)
    }

    /// Resolve the resume for download.
    pub fn resume_asset(&self) -> folio_core::Result<Option<ResumeAsset>> {
        self.resolver().resolve()
    }

    /// Resolve everything the resume section needs.
    pub fn resume_view(&self) -> ResumeView {
        let pdf = match self.resume_asset() {
            Ok(Some(asset)) => PdfStatus::Available(asset),
            Ok(None) => PdfStatus::Missing,
            Err(e) => {
                warn!(error = %e, "resume unavailable for this view");
                PdfStatus::Failed(e.to_string())
            }
        };

        let markdown = self
            .markdown
            .load_resume(&self.config().assets.markdown_resume_path(&self.site_root));

        ResumeView { pdf, markdown }
    }

    /// Render `section`. `draft` is only used by the contact section.
    pub fn render(&self, section: Section, draft: Option<&ContactDraft>) -> Result<RenderedPage> {
        debug!(%section, "rendering section");
        let mut warnings = Vec::new();

        let body = match self.section_body(section, draft, &mut warnings) {
            Ok(body) => body,
            Err(e) => {
                warn!(%section, error = %e, "section failed to render");
                warnings.push(format!("{section}: {e}"));
                callout(
                    CalloutKind::Error,
                    &escape_html(&format!("The {section} section could not be rendered.")),
                )
            }
        };

        let html = self.wrap(Some(section), &body)?;
        Ok(RenderedPage {
            section: Some(section),
            html,
            warnings,
        })
    }

    /// Render the page shown for an unknown section name.
    pub fn render_not_found(&self, requested: &str) -> Result<RenderedPage> {
        let body = self.html.not_found_section(requested)?;
        let html = self.wrap(None, &body)?;
        Ok(RenderedPage {
            section: None,
            html,
            warnings: Vec::new(),
        })
    }

    fn wrap(&self, active: Option<Section>, body: &str) -> Result<String> {
        let avatar = load_avatar(&self.config().assets.avatar_path(&self.site_root));
        Ok(self.html.page(active, body, avatar.as_ref())?)
    }

    fn section_body(
        &self,
        section: Section,
        draft: Option<&ContactDraft>,
        warnings: &mut Vec<String>,
    ) -> template::Result<String> {
        match section {
            Section::Home => self.html.home_section(),
            Section::Projects => self.html.projects_section(),
            Section::Contact => self.html.contact_section(draft),
            Section::Resume => {
                let view = self.resume_view();
                if let PdfStatus::Failed(message) = &view.pdf {
                    warnings.push(format!("resume: {message}"));
                }
                if view.markdown == MarkdownResume::Unreadable {
                    warnings.push("resume: markdown resume is unreadable".to_string());
                }
                self.html.resume_section(&view)
            }
        }
    }
}
