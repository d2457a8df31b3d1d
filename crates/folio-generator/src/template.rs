//! HTML templates for the portfolio.
//!
//! Placeholders are written `{{ name }}`; `{{ name? }}` renders as empty when
//! the variable is missing. Values are inserted verbatim, so anything that did
//! not originate as markup must go through [`TemplateContext::with_text`] or
//! [`escape_html`] first. Inserted values are never re-scanned for
//! placeholders.

use std::collections::HashMap;

use thiserror::Error;

/// Template rendering errors.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Missing required variable.
    #[error("missing required variable `{variable}` in template `{template}`")]
    MissingVariable { template: String, variable: String },

    /// Template not found.
    #[error("template not found: {0}")]
    NotFound(String),

    /// Invalid template syntax.
    #[error("invalid template syntax in `{template}`: {message}")]
    InvalidSyntax { template: String, message: String },
}

/// Result type for template operations.
pub type Result<T> = std::result::Result<T, TemplateError>;

/// Variables available to a template.
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    variables: HashMap<String, String>,
}

impl TemplateContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a raw markup value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(key.into(), value.into());
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert plain text, HTML-escaped.
    #[must_use]
    pub fn with_text(self, key: impl Into<String>, text: &str) -> Self {
        self.with_var(key, escape_html(text))
    }

    /// Insert a raw value only when it is non-empty.
    #[must_use]
    pub fn with_optional(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        if !value.is_empty() {
            self.insert(key, value);
        }
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }
}

/// A named template.
#[derive(Debug, Clone)]
pub struct Template {
    name: String,
    content: String,
}

impl Template {
    #[must_use]
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render the template with the given context.
    pub fn render(&self, context: &TemplateContext) -> Result<String> {
        let source = self.content.as_str();
        let mut out = String::with_capacity(source.len());
        let mut rest = source;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after_open = &rest[start + 2..];
            let end = after_open
                .find("}}")
                .ok_or_else(|| TemplateError::InvalidSyntax {
                    template: self.name.clone(),
                    message: "unclosed {{ delimiter".to_string(),
                })?;

            let placeholder = after_open[..end].trim();
            let (var_name, optional) = match placeholder.strip_suffix('?') {
                Some(stripped) => (stripped.trim(), true),
                None => (placeholder, false),
            };

            if var_name.is_empty() {
                return Err(TemplateError::InvalidSyntax {
                    template: self.name.clone(),
                    message: "empty placeholder".to_string(),
                });
            }

            match context.get(var_name) {
                Some(value) => out.push_str(value),
                None if optional => {}
                None => {
                    return Err(TemplateError::MissingVariable {
                        template: self.name.clone(),
                        variable: var_name.to_string(),
                    });
                }
            }

            rest = &after_open[end + 2..];
        }

        out.push_str(rest);
        Ok(out)
    }
}

/// Registry of named templates.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: HashMap<String, Template>,
}

impl TemplateRegistry {
    /// Create a registry holding the built-in templates.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self::default();
        registry.register_defaults();
        registry
    }

    fn register_defaults(&mut self) {
        self.register(Template::new("base", DEFAULT_BASE_TEMPLATE));
        self.register(Template::new("card", DEFAULT_CARD_TEMPLATE));
        self.register(Template::new("home", DEFAULT_HOME_TEMPLATE));
        self.register(Template::new("resume", DEFAULT_RESUME_TEMPLATE));
        self.register(Template::new("projects", DEFAULT_PROJECTS_TEMPLATE));
        self.register(Template::new("contact", DEFAULT_CONTACT_TEMPLATE));
        self.register(Template::new("not_found", DEFAULT_NOT_FOUND_TEMPLATE));
    }

    /// Register a template, replacing any with the same name.
    pub fn register(&mut self, template: Template) {
        self.templates.insert(template.name().to_string(), template);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }

    /// Render a named template with the given context.
    pub fn render(&self, name: &str, context: &TemplateContext) -> Result<String> {
        let template = self
            .get(name)
            .ok_or_else(|| TemplateError::NotFound(name.to_string()))?;
        template.render(context)
    }
}

/// Escape text for use in element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Page shell: sidebar navigation, main column, footer.
pub const DEFAULT_BASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="{{ lang }}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ title }}</title>
    <meta name="author" content="{{ owner }}">
    <link rel="icon" href="{{ favicon }}">
    <style>
        :root {
            --color-bg: #FFFFFF;
            --color-sidebar: #F0F2F6;
            --color-text: #31333F;
            --color-muted: rgba(49, 51, 63, 0.6);
            --color-primary: #FF4B4B;
            --color-border: rgba(0, 0, 0, 0.07);
        }

        *, *::before, *::after { box-sizing: border-box; }
        * { margin: 0; padding: 0; }

        body {
            font-family: 'Source Sans Pro', system-ui, -apple-system, sans-serif;
            line-height: 1.6;
            color: var(--color-text);
            background: var(--color-bg);
        }

        .layout { display: flex; min-height: 100vh; }

        .sidebar {
            width: 16rem;
            flex-shrink: 0;
            background: var(--color-sidebar);
            padding: 2rem 1.25rem;
        }

        .avatar { display: flex; justify-content: center; align-items: center; padding: 8px 0; }
        .avatar img {
            width: 123px;
            height: 123px;
            object-fit: cover;
            border-radius: 50%;
            border: 1px solid rgba(0, 0, 0, 0.08);
        }

        .nav-label { font-size: 0.875rem; margin: 1rem 0 0.5rem; }
        .section-nav ul, .links ul { list-style: none; }
        .section-nav li { margin-bottom: 0.25rem; }
        .section-nav a { color: var(--color-text); text-decoration: none; }
        .section-nav a::before { content: "○ "; color: var(--color-muted); }
        .section-nav a.active { font-weight: 600; }
        .section-nav a.active::before { content: "● "; color: var(--color-primary); }
        .sidebar h2 { font-size: 1.5rem; margin: 2rem 0 0.5rem; }

        main { flex: 1; padding: 3rem 4rem; max-width: 1200px; }
        h1 { font-size: 2.75rem; margin-bottom: 0.5rem; }
        h2 { font-size: 2rem; margin-bottom: 1rem; }
        h3 { font-size: 1.5rem; margin: 1.25rem 0 0.5rem; }
        p { margin-bottom: 1rem; }
        a { color: var(--color-primary); }
        hr { border: none; border-top: 1px solid var(--color-border); margin: 2rem 0 1rem; }
        .caption { font-size: 0.875rem; color: var(--color-muted); }

        .columns { display: flex; gap: 3rem; }
        .column-main { flex: 2; }
        .column-side { flex: 1; }

        .card {
            background: #ffffff;
            border: 1px solid var(--color-border);
            padding: 1rem 1.25rem;
            border-radius: 14px;
            box-shadow: 0 1px 2px rgba(0, 0, 0, 0.04);
        }
        .card + .card { margin-top: 0.75rem; }
        .card-title { font-weight: 700; font-size: 1.05rem; margin-bottom: 0.25rem; }
        .card-body { opacity: 0.9; }
        .card-footer { margin-top: 0.5rem; font-size: 0.92rem; opacity: 0.8; }
        .tag {
            display: inline-block;
            padding: 0.15rem 0.5rem;
            border-radius: 999px;
            border: 1px solid rgba(0, 0, 0, 0.1);
            font-size: 0.8rem;
            margin-right: 0.25rem;
        }

        .callout { padding: 1rem; border-radius: 0.5rem; margin-bottom: 1rem; }
        .callout-info { background: #E8F0FE; }
        .callout-success { background: #E6F4EA; }
        .callout-warning { background: #FFF8E1; }
        .callout-error { background: #FDECEA; }

        .button {
            display: inline-block;
            padding: 0.4rem 0.9rem;
            border: 1px solid rgba(49, 51, 63, 0.2);
            border-radius: 0.5rem;
            color: var(--color-text);
            background: #ffffff;
            text-decoration: none;
            font: inherit;
            cursor: pointer;
            margin-bottom: 1rem;
        }
        .button:hover { border-color: var(--color-primary); color: var(--color-primary); }

        .resume-preview { width: 100%; height: 900px; border: none; }

        .contact-form { display: flex; flex-direction: column; gap: 0.75rem; max-width: 40rem; margin-bottom: 1rem; }
        .contact-form label { display: flex; flex-direction: column; font-size: 0.875rem; }
        .contact-form input, .contact-form textarea {
            font: inherit;
            padding: 0.5rem;
            border: 1px solid rgba(49, 51, 63, 0.2);
            border-radius: 0.5rem;
            background: var(--color-sidebar);
        }
        .contact-form textarea { height: 160px; }
        .contact-form .button { align-self: flex-start; }

        @media (max-width: 800px) {
            .layout, .columns { flex-direction: column; }
            .sidebar { width: 100%; }
            main { padding: 2rem 1.25rem; }
        }
    </style>
</head>
<body>
    <div class="layout">
        <aside class="sidebar">
            {{ avatar? }}
            <nav class="section-nav" aria-label="Sections">
                <p class="nav-label">Go to</p>
                {{ nav }}
            </nav>
            <h2>Links</h2>
            <div class="links">{{ links? }}</div>
        </aside>
        <main>
            {{ content }}
            <hr>
            <p class="caption">&copy; {{ year }} {{ owner }}. Built with Rust.</p>
        </main>
    </div>
</body>
</html>"##;

/// Generic card.
pub const DEFAULT_CARD_TEMPLATE: &str = r#"<div class="card">
    <div class="card-title">{{ title }}</div>
    <div class="card-body">{{ body }}</div>
    <div class="card-footer">{{ footer? }}</div>
</div>"#;

/// Home section.
pub const DEFAULT_HOME_TEMPLATE: &str = r#"<div class="columns">
    <div class="column-main">
        <h1>{{ name }}</h1>
        <h3>{{ role? }}</h3>
        <p>{{ blurb? }}</p>
        <h3>Highlights</h3>
        {{ highlights? }}
    </div>
    <div class="column-side">
        <h3>At a glance</h3>
        <div class="tags">{{ tags? }}</div>
        <h3>Contact</h3>
        <p>{{ email }}</p>
        <p>{{ location? }}</p>
    </div>
</div>"#;

/// Resume section.
pub const DEFAULT_RESUME_TEMPLATE: &str = r#"<h2>Resume</h2>
{{ resume? }}
<div class="markdown-resume">{{ markdown? }}</div>"#;

/// Projects section.
pub const DEFAULT_PROJECTS_TEMPLATE: &str = r#"<h2>Projects</h2>
{{ cards? }}"#;

/// Contact section.
pub const DEFAULT_CONTACT_TEMPLATE: &str = r#"<h2>Contact</h2>
<p class="caption">Use the form or email me directly at <a href="{{ direct_mailto }}">{{ email }}</a>.</p>
<form class="contact-form" {{ form_attrs }}>
    <label>Name <input type="text" name="name" value="{{ name? }}"></label>
    <label>Email <input type="text" name="email" value="{{ visitor_email? }}"></label>
    <label>Message <textarea name="message">{{ message? }}</textarea></label>
    <button class="button" type="submit">Generate Email Draft</button>
</form>
<div class="contact-draft">{{ draft? }}</div>
{{ script? }}"#;

/// Body shown for an unknown section.
pub const DEFAULT_NOT_FOUND_TEMPLATE: &str = r#"<h2>Not found</h2>
<p>There is no section called <code>{{ requested }}</code>. Pick one from the sidebar.</p>"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_simple_render() {
        let template = Template::new("test", "Hello, {{ name }}!");
        let ctx = TemplateContext::new().with_var("name", "World");

        assert_eq!(template.render(&ctx).unwrap(), "Hello, World!");
    }

    #[test]
    fn test_template_optional_variable() {
        let template = Template::new("test", "Hello{{ suffix? }}!");

        assert_eq!(template.render(&TemplateContext::new()).unwrap(), "Hello!");

        let ctx = TemplateContext::new().with_var("suffix", ", World");
        assert_eq!(template.render(&ctx).unwrap(), "Hello, World!");
    }

    #[test]
    fn test_template_missing_required_variable() {
        let template = Template::new("greeting", "Hello, {{ name }}!");

        let err = template.render(&TemplateContext::new()).unwrap_err();
        assert!(matches!(err, TemplateError::MissingVariable { .. }));
        assert!(err.to_string().contains("greeting"));
    }

    #[test]
    fn test_template_unclosed_delimiter() {
        let template = Template::new("broken", "Hello, {{ name");
        let ctx = TemplateContext::new().with_var("name", "x");

        assert!(matches!(
            template.render(&ctx),
            Err(TemplateError::InvalidSyntax { .. })
        ));
    }

    #[test]
    fn test_values_are_not_rescanned() {
        let template = Template::new("test", "{{ a }}|{{ b }}");
        let ctx = TemplateContext::new()
            .with_var("a", "{{ b }}")
            .with_var("b", "B");

        assert_eq!(template.render(&ctx).unwrap(), "{{ b }}|B");
    }

    #[test]
    fn test_with_text_escapes() {
        let ctx = TemplateContext::new().with_text("t", r#"<b>"R&D"</b>"#);
        assert_eq!(ctx.get("t"), Some("&lt;b&gt;&quot;R&amp;D&quot;&lt;/b&gt;"));
    }

    #[test]
    fn test_with_optional_skips_empty() {
        let ctx = TemplateContext::new()
            .with_optional("a", "")
            .with_optional("b", "x");
        assert!(ctx.get("a").is_none());
        assert_eq!(ctx.get("b"), Some("x"));
    }

    #[test]
    fn test_template_registry() {
        let registry = TemplateRegistry::new();

        for name in ["base", "card", "home", "resume", "projects", "contact", "not_found"] {
            let template = registry.get(name).unwrap_or_else(|| panic!("missing {name}"));
            assert_eq!(template.name(), name);
        }
        assert!(registry.get("nonexistent").is_none());
        assert!(matches!(
            registry.render("nonexistent", &TemplateContext::new()),
            Err(TemplateError::NotFound(_))
        ));
    }

    #[test]
    fn test_register_replaces_by_name() {
        let mut registry = TemplateRegistry::new();
        registry.register(Template::new("card", "{{ title }}"));

        let ctx = TemplateContext::new().with_var("title", "T");
        assert_eq!(registry.render("card", &ctx).unwrap(), "T");
        assert_eq!(registry.get("card").unwrap().name(), "card");
    }

    #[test]
    fn test_render_card_without_footer() {
        let registry = TemplateRegistry::new();
        let ctx = TemplateContext::new()
            .with_var("title", "T")
            .with_var("body", "B");

        let html = registry.render("card", &ctx).unwrap();
        assert!(html.contains(r#"<div class="card-title">T</div>"#));
        assert!(html.contains(r#"<div class="card-footer"></div>"#));
    }
}
