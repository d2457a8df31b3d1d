//! HTML fragments for the portfolio sections.

use chrono::{Datelike, Local};
use folio_core::{
    Avatar, Config, ContactDraft, Profile, Project, ResumeAsset, Section,
    contact::SUBJECT_PREFIX,
};
use tracing::debug;

use crate::{
    markdown::{MarkdownResume, UNREADABLE_MESSAGE},
    template::{Result, TemplateContext, TemplateRegistry, escape_html},
};

/// Separator between the repository and demo links of a project.
pub const LINK_SEPARATOR: &str = " • ";

/// Where the resume download is served from, in both the export and the preview host.
pub const RESUME_DOWNLOAD_URL: &str = "/resume.pdf";

/// Visual style of a [`callout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalloutKind {
    Info,
    Success,
    Warning,
    Error,
}

impl CalloutKind {
    fn class(self) -> &'static str {
        match self {
            Self::Info => "callout-info",
            Self::Success => "callout-success",
            Self::Warning => "callout-warning",
            Self::Error => "callout-error",
        }
    }
}

/// Message shown above a freshly composed draft link.
pub const DRAFT_CREATED_MESSAGE: &str = "Draft created. Click below to open your email client.";

/// How the contact form turns its fields into a draft.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContactForm {
    /// Posts to `/contact`; the preview host renders the draft link.
    #[default]
    Server,
    /// Composes the draft in the browser, for static hosting.
    Client,
}

/// Builds the same subject and body as [`ContactDraft`] in the browser.
const CLIENT_DRAFT_SCRIPT: &str = r#"<script>
document.querySelectorAll("form[data-recipient]").forEach(function (form) {
    form.addEventListener("submit", function (event) {
        event.preventDefault();
        var field = function (name) { return form.elements.namedItem(name).value; };
        var name = field("name");
        var body = ["From: " + name, "Email: " + field("email"), "", field("message")].join("\n");
        var href = "mailto:" + form.dataset.recipient
            + "?subject=" + encodeURIComponent(form.dataset.subjectPrefix + name)
            + "&body=" + encodeURIComponent(body);
        var out = form.parentNode.querySelector(".contact-draft");
        out.innerHTML = "";
        var note = document.createElement("div");
        note.className = "callout callout-success";
        note.setAttribute("role", "status");
        note.textContent = form.dataset.created;
        var link = document.createElement("a");
        link.className = "button";
        link.href = href;
        link.textContent = "Open Email Draft";
        var p = document.createElement("p");
        p.appendChild(link);
        out.appendChild(note);
        out.appendChild(p);
    });
});
</script>"#;

/// Outcome of resolving the PDF resume for one view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PdfStatus {
    Available(ResumeAsset),
    /// Neither the canonical file nor the fallback exists.
    Missing,
    /// Resolution failed; the message is shown inside the resume section.
    Failed(String),
}

/// Everything the resume section shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeView {
    pub pdf: PdfStatus,
    pub markdown: MarkdownResume,
}

/// Renders section bodies and the page shell from the site configuration.
#[derive(Debug, Clone)]
pub struct HtmlGenerator {
    templates: TemplateRegistry,
    config: Config,
    contact_form: ContactForm,
}

impl HtmlGenerator {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self::with_templates(config, TemplateRegistry::new())
    }

    /// Create a generator with custom templates.
    #[must_use]
    pub fn with_templates(config: Config, templates: TemplateRegistry) -> Self {
        Self {
            templates,
            config,
            contact_form: ContactForm::default(),
        }
    }

    /// Choose how the contact form composes drafts.
    #[must_use]
    pub fn with_contact_form(mut self, contact_form: ContactForm) -> Self {
        self.contact_form = contact_form;
        self
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// A card. All arguments are markup.
    pub fn card(&self, title: &str, body: &str, footer: &str) -> Result<String> {
        let ctx = TemplateContext::new()
            .with_var("title", title)
            .with_var("body", body)
            .with_optional("footer", footer);
        self.templates.render("card", &ctx)
    }

    /// A project card with its technology and link footer.
    pub fn project_card(&self, project: &Project) -> Result<String> {
        self.card(
            &escape_html(project.title()),
            &escape_html(project.description()),
            &project_footer(project),
        )
    }

    pub fn home_section(&self) -> Result<String> {
        let profile = &self.config.profile;

        let highlights = self
            .config
            .highlights
            .iter()
            .map(|h| self.card(&escape_html(&h.title), &escape_html(&h.body), ""))
            .collect::<Result<Vec<_>>>()?
            .join("\n");

        let tags: String = self
            .config
            .glance_tags
            .iter()
            .map(|tag| format!(r#"<span class="tag">{}</span>"#, escape_html(tag)))
            .collect();

        let ctx = TemplateContext::new()
            .with_text("name", &profile.name)
            .with_text("role", &profile.role)
            .with_text("blurb", &profile.blurb)
            .with_optional("highlights", highlights)
            .with_optional("tags", tags)
            .with_text("email", &profile.email)
            .with_text("location", &profile.location);

        self.templates.render("home", &ctx)
    }

    /// Project cards in configuration order.
    pub fn projects_section(&self) -> Result<String> {
        let cards = self
            .config
            .projects
            .iter()
            .map(|p| self.project_card(p))
            .collect::<Result<Vec<_>>>()?
            .join("\n");

        let ctx = TemplateContext::new().with_optional("cards", cards);
        self.templates.render("projects", &ctx)
    }

    pub fn resume_section(&self, view: &ResumeView) -> Result<String> {
        let resume = match &view.pdf {
            PdfStatus::Available(asset) => {
                let mut html = format!(
                    r#"<a class="button" href="{RESUME_DOWNLOAD_URL}" download="{}" type="{}">Download PDF</a>"#,
                    folio_core::resume::DOWNLOAD_FILE_NAME,
                    folio_core::resume::RESUME_MIME,
                );
                if self.config.assets.embed_preview {
                    html.push_str(&format!(
                        "\n<iframe class=\"resume-preview\" title=\"Resume preview\" src=\"{}\"></iframe>",
                        asset.data_uri()
                    ));
                }
                html
            }
            PdfStatus::Missing => {
                let assets = &self.config.assets;
                callout(
                    CalloutKind::Info,
                    &escape_html(&format!(
                        "Place resume PDF at ./{}/{} to enable download and preview.",
                        assets.dir.display(),
                        assets.resume
                    )),
                )
            }
            PdfStatus::Failed(message) => callout(
                CalloutKind::Error,
                &escape_html(&format!("The resume could not be prepared: {message}")),
            ),
        };

        let markdown = match &view.markdown {
            MarkdownResume::Absent => String::new(),
            MarkdownResume::Rendered(html) => html.clone(),
            MarkdownResume::Unreadable => callout(CalloutKind::Warning, UNREADABLE_MESSAGE),
        };

        let ctx = TemplateContext::new()
            .with_var("resume", resume)
            .with_optional("markdown", markdown);
        self.templates.render("resume", &ctx)
    }

    /// The contact form, followed by the draft link when one was submitted.
    pub fn contact_section(&self, draft: Option<&ContactDraft>) -> Result<String> {
        let email = &self.config.profile.email;

        let form_attrs = match self.contact_form {
            ContactForm::Server => r#"method="post" action="/contact""#.to_string(),
            ContactForm::Client => format!(
                r#"data-recipient="{}" data-subject-prefix="{}" data-created="{}""#,
                escape_html(email),
                escape_html(SUBJECT_PREFIX),
                escape_html(DRAFT_CREATED_MESSAGE)
            ),
        };

        let mut ctx = TemplateContext::new()
            .with_text("email", email)
            .with_text("direct_mailto", &format!("mailto:{email}"))
            .with_var("form_attrs", form_attrs);

        if self.contact_form == ContactForm::Client {
            ctx.insert("script", CLIENT_DRAFT_SCRIPT);
        }

        if let Some(draft) = draft {
            let mailto = draft.mailto(email);
            debug!(len = mailto.len(), "composed contact draft");

            ctx = ctx
                .with_text("name", &draft.name)
                .with_text("visitor_email", &draft.email)
                .with_text("message", &draft.message)
                .with_var(
                    "draft",
                    format!(
                        "{}\n<p><a class=\"button\" href=\"{}\">Open Email Draft</a></p>",
                        callout(CalloutKind::Success, DRAFT_CREATED_MESSAGE),
                        escape_html(&mailto)
                    ),
                );
        }

        self.templates.render("contact", &ctx)
    }

    pub fn not_found_section(&self, requested: &str) -> Result<String> {
        let ctx = TemplateContext::new().with_text("requested", requested);
        self.templates.render("not_found", &ctx)
    }

    /// Wrap a section body in the page shell.
    ///
    /// `active` marks the current entry in the sidebar; `None` marks nothing.
    pub fn page(
        &self,
        active: Option<Section>,
        content: &str,
        avatar: Option<&Avatar>,
    ) -> Result<String> {
        let profile = &self.config.profile;

        let ctx = TemplateContext::new()
            .with_text("lang", &self.config.site.language)
            .with_text("title", &self.config.page_title())
            .with_text("owner", &profile.name)
            .with_var("favicon", favicon_uri(&self.config.site.icon))
            .with_optional("avatar", avatar.map(avatar_html).unwrap_or_default())
            .with_var("nav", nav_html(active))
            .with_optional("links", links_html(profile))
            .with_var("content", content)
            .with_var("year", Local::now().year().to_string());

        self.templates.render("base", &ctx)
    }
}

/// Footer of a project card.
///
/// The technology string, then the available links joined by
/// [`LINK_SEPARATOR`]. With no links the footer is the technology string
/// alone; with no technology string it is the links alone.
pub fn project_footer(project: &Project) -> String {
    let links = [("Repo", project.repo_url()), ("Demo", project.demo_url())]
        .into_iter()
        .filter_map(|(label, url)| {
            url.map(|u| {
                format!(
                    r#"<a href="{}" target="_blank" rel="noopener">{label}</a>"#,
                    escape_html(u)
                )
            })
        })
        .collect::<Vec<_>>()
        .join(LINK_SEPARATOR);

    let tech = escape_html(&project.tech);
    match (tech.is_empty(), links.is_empty()) {
        (_, true) => tech,
        (true, false) => links,
        (false, false) => format!("{tech} — {links}"),
    }
}

/// A highlighted message box. `message` is markup.
pub fn callout(kind: CalloutKind, message: &str) -> String {
    format!(
        r#"<div class="callout {}" role="status">{message}</div>"#,
        kind.class()
    )
}

fn nav_html(active: Option<Section>) -> String {
    let items = Section::ALL
        .into_iter()
        .map(|section| {
            let current = if Some(section) == active {
                r#" class="active" aria-current="page""#
            } else {
                ""
            };
            format!(
                r#"<li><a href="{}"{current}>{}</a></li>"#,
                section.url(),
                section.label()
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("<ul>\n{items}\n</ul>")
}

fn links_html(profile: &Profile) -> String {
    let links = profile.links();
    if links.is_empty() {
        return String::new();
    }

    let items: String = links
        .into_iter()
        .map(|(label, url)| format!(r#"<li><a href="{}">{label}</a></li>"#, escape_html(url)))
        .collect();
    format!("<ul>{items}</ul>")
}

fn avatar_html(avatar: &Avatar) -> String {
    format!(
        r#"<div class="avatar"><img src="{}" alt="profile"></div>"#,
        avatar.data_uri()
    )
}

fn favicon_uri(icon: &str) -> String {
    format!(
        "data:image/svg+xml,<svg xmlns=%22http://www.w3.org/2000/svg%22 viewBox=%220 0 100 100%22><text y=%22.9em%22 font-size=%2290%22>{}</text></svg>",
        escape_html(icon)
    )
}
