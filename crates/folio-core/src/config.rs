//! Site configuration management.
//!
//! Everything the site shows is described in one `config.toml`, loaded once
//! at startup and passed around by reference.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    error::{CoreError, Result},
    profile::{Highlight, Profile, Project},
};

/// Starter configuration written by `folio new`.
pub const SAMPLE_CONFIG: &str = r#"glance_tags = ["Fabric", "Spark", "Delta", "Power BI"]

[site]
title = "Steven Rolka — Portfolio"
icon = "📁"

[profile]
name = "Steven Rolka"
role = "Senior BI / Data Engineer"
location = "Midwest, USA"
email = "rolka.steven@outlook.com"
linkedin = "https://www.linkedin.com/in/steven-rolka"
github = "https://github.com/Strolka520"
blurb = "I design and build analytics platforms, dimensional models, and metadata-driven pipelines. This portfolio highlights selected projects and my experience in Microsoft Fabric, Spark, and Streamlit."

[[highlights]]
title = "Enterprise Data Fabric"
body = "Led design and implementation of a medallion architecture with metadata-driven pipelines, improving reliability and time-to-insight."

[[highlights]]
title = "DataNexus Platform"
body = "Built a Streamlit portal for BI engineering workflows (discovery, ingestion requests, and schema drift detection)."

[[projects]]
title = "Mortgage Rates Explorer"
description = "Interactive dashboards showing mortgage rate trends at national, regional, state, and local levels."
tech = "Python, Streamlit, Pandas, Plotly"

[[projects]]
title = "Housing Price Trends"
description = "Analysis of house price movements across geographies, with visualization of affordability indices."
tech = "Python, Streamlit, SQL, Power BI"

[[projects]]
title = "Big Company Data (Twitter, Amazon, GitHub)"
description = "Data ingestion and analysis pipelines using APIs from Twitter, Amazon, and GitHub to uncover trends."
tech = "APIs, Python, Streamlit, Spark"

[[projects]]
title = "Microsoft Fabric Insights (Medium Article)"
description = "Medium-style writeup and demo project based on prior Fabric presentation work, scrubbed for public sharing."
tech = "Microsoft Fabric, Delta, PySpark"

[[projects]]
title = "AI Chatbot Prototype"
description = "Exploratory chatbot built with Python and Streamlit, showcasing conversational AI integration."
tech = "Python, Streamlit, OpenAI API"

[assets]
dir = "assets"
resume = "resume.pdf"
fallback_resume = "Steven_Rolka_Resume.pdf"
markdown_resume = "Steven_Rolka_Resume.md"
avatar = "profile.png"
embed_preview = true

[build]
output_dir = "public"

[server]
port = 8501
"#;

/// Main configuration structure for Folio.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings.
    #[serde(default)]
    pub site: SiteConfig,

    /// The person behind the portfolio.
    pub profile: Profile,

    /// Highlight cards on the home section.
    #[serde(default)]
    pub highlights: Vec<Highlight>,

    /// Skill pills under "At a glance".
    #[serde(default)]
    pub glance_tags: Vec<String>,

    /// Projects, in display order.
    #[serde(default)]
    pub projects: Vec<Project>,

    /// Asset file locations.
    #[serde(default)]
    pub assets: AssetsConfig,

    /// Static build settings.
    #[serde(default)]
    pub build: BuildConfig,

    /// Preview server settings.
    #[serde(default)]
    pub server: ServerConfig,
}

/// Site-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Browser tab title. Defaults to "<name> — Portfolio".
    #[serde(default)]
    pub title: Option<String>,

    /// Emoji used as favicon.
    #[serde(default = "default_icon")]
    pub icon: String,

    /// `lang` attribute of the page.
    #[serde(default = "default_language")]
    pub language: String,
}

/// Locations of operator-provided files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetsConfig {
    /// Asset directory, relative to the site root.
    #[serde(default = "default_assets_dir")]
    pub dir: PathBuf,

    /// Canonical resume file name.
    #[serde(default = "default_resume")]
    pub resume: String,

    /// Alternately named upload copied into the canonical location.
    #[serde(default = "default_fallback_resume")]
    pub fallback_resume: String,

    /// Plain-text resume rendered below the PDF.
    #[serde(default = "default_markdown_resume")]
    pub markdown_resume: String,

    /// Circular avatar shown in the sidebar.
    #[serde(default = "default_avatar")]
    pub avatar: String,

    /// Whether to inline the PDF as an `<iframe>` preview.
    #[serde(default = "default_true")]
    pub embed_preview: bool,
}

/// Build configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Output directory for the static export.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

/// Preview server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_icon() -> String {
    "📁".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from("assets")
}

fn default_resume() -> String {
    "resume.pdf".to_string()
}

fn default_fallback_resume() -> String {
    "Steven_Rolka_Resume.pdf".to_string()
}

fn default_markdown_resume() -> String {
    "Steven_Rolka_Resume.md".to_string()
}

fn default_avatar() -> String {
    "profile.png".to_string()
}

fn default_true() -> bool {
    true
}

fn default_output_dir() -> String {
    "public".to_string()
}

fn default_port() -> u16 {
    8501
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: None,
            icon: default_icon(),
            language: default_language(),
        }
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            dir: default_assets_dir(),
            resume: default_resume(),
            fallback_resume: default_fallback_resume(),
            markdown_resume: default_markdown_resume(),
            avatar: default_avatar(),
            embed_preview: true,
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

impl AssetsConfig {
    /// Asset directory resolved against `site_root` (absolute dirs win).
    #[must_use]
    pub fn dir_in(&self, site_root: &Path) -> PathBuf {
        site_root.join(&self.dir)
    }

    #[must_use]
    pub fn markdown_resume_path(&self, site_root: &Path) -> PathBuf {
        self.dir_in(site_root).join(&self.markdown_resume)
    }

    #[must_use]
    pub fn avatar_path(&self, site_root: &Path) -> PathBuf {
        self.dir_in(site_root).join(&self.avatar)
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content).map_err(|e| match e {
            CoreError::Toml(source) => CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                source,
            ),
            other => other,
        })?;
        Ok(config)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration, letting `FOLIO__`-prefixed environment variables
    /// override file values (e.g. `FOLIO__SERVER__PORT=9000`).
    pub fn load_with_env(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix("FOLIO").separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.profile.name.trim().is_empty() {
            return Err(CoreError::config("profile.name cannot be empty"));
        }

        if self.profile.email.trim().is_empty() {
            return Err(CoreError::config("profile.email cannot be empty"));
        }

        if !self.profile.email.contains('@') {
            tracing::warn!(email = %self.profile.email, "profile.email does not look like an address");
        }

        Ok(())
    }

    /// Browser tab title.
    #[must_use]
    pub fn page_title(&self) -> String {
        self.site
            .title
            .clone()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| format!("{} — Portfolio", self.profile.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> &'static str {
        r#"
glance_tags = ["Fabric", "Spark"]

[site]
title = "Ann — Work"
language = "de"

[profile]
name = "Ann"
role = "Engineer"
email = "ann@x.com"
github = "https://github.com/ann"

[[highlights]]
title = "Platform"
body = "Built it."

[[projects]]
title = "First"
description = "One"
tech = "Rust"
repo_url = "https://a"

[[projects]]
title = "Second"

[assets]
dir = "static"
embed_preview = false

[build]
output_dir = "dist"

[server]
port = 9000
"#
    }

    #[test]
    fn test_load_config() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("config.toml");
        std::fs::write(&config_path, sample_config()).expect("write");

        let config = Config::load(&config_path).expect("load config");

        assert_eq!(config.page_title(), "Ann — Work");
        assert_eq!(config.site.language, "de");
        assert_eq!(config.profile.role, "Engineer");
        assert_eq!(config.highlights.len(), 1);
        assert_eq!(config.glance_tags, vec!["Fabric", "Spark"]);
        assert_eq!(config.projects.len(), 2);
        assert_eq!(config.projects[0].repo_url(), Some("https://a"));
        assert_eq!(config.projects[1].title(), "Second");
        assert_eq!(config.assets.dir, PathBuf::from("static"));
        assert_eq!(config.assets.resume, "resume.pdf");
        assert!(!config.assets.embed_preview);
        assert_eq!(config.build.output_dir, "dist");
        assert_eq!(config.server.port, 9000);
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::from_toml(
            r#"
[profile]
name = "Ann"
email = "ann@x.com"
"#,
        )
        .expect("parse");

        assert_eq!(config.page_title(), "Ann — Portfolio");
        assert_eq!(config.site.icon, "📁");
        assert_eq!(config.assets.dir, PathBuf::from("assets"));
        assert_eq!(config.assets.fallback_resume, "Steven_Rolka_Resume.pdf");
        assert_eq!(config.assets.avatar, "profile.png");
        assert!(config.assets.embed_preview);
        assert_eq!(config.build.output_dir, "public");
        assert_eq!(config.server.port, 8501);
        assert!(config.projects.is_empty());
    }

    #[test]
    fn test_asset_paths() {
        let assets = AssetsConfig::default();
        let root = Path::new("/site");
        assert_eq!(assets.dir_in(root), PathBuf::from("/site/assets"));
        assert_eq!(
            assets.avatar_path(root),
            PathBuf::from("/site/assets/profile.png")
        );
        assert_eq!(
            assets.markdown_resume_path(root),
            PathBuf::from("/site/assets/Steven_Rolka_Resume.md")
        );
    }

    #[test]
    fn test_config_validation_empty_name() {
        let result = Config::from_toml(
            r#"
[profile]
name = ""
email = "ann@x.com"
"#,
        );
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("name cannot be empty")
        );
    }

    #[test]
    fn test_sample_config_parses() {
        let config = Config::from_toml(SAMPLE_CONFIG).expect("sample config");
        assert_eq!(config.profile.name, "Steven Rolka");
        assert_eq!(config.page_title(), "Steven Rolka — Portfolio");
        assert_eq!(config.highlights.len(), 2);
        assert_eq!(config.projects.len(), 5);
        assert_eq!(config.projects[0].title(), "Mortgage Rates Explorer");
        assert!(config.projects.iter().all(|p| p.repo_url().is_none()));
        assert_eq!(config.glance_tags.len(), 4);
    }

    #[test]
    fn test_config_not_found() {
        let result = Config::load(Path::new("/nonexistent/config.toml"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not found"));
    }

    #[test]
    fn test_load_with_env_reads_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("config.toml");
        std::fs::write(&config_path, sample_config()).expect("write");

        let config = Config::load_with_env(&config_path).expect("load config");
        assert_eq!(config.profile.name, "Ann");
        assert_eq!(config.projects.len(), 2);
    }
}
