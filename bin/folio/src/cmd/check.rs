//! Check command - validate configuration and assets

use std::path::Path;

use color_eyre::eyre::{Result, bail};
use folio_core::{Config, ResumeResolver, UNTITLED_PROJECT, load_avatar};

use super::site_root;

/// Validation result.
#[derive(Debug, Default)]
struct ValidationResult {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the check command.
///
/// Validates the configuration and reports the state of the asset directory.
/// Nothing on disk is modified: a fallback resume is reported, not copied.
pub fn run(config_path: &Path, strict: bool) -> Result<()> {
    tracing::info!(?config_path, strict, "Checking configuration and assets");

    let mut result = ValidationResult::default();

    println!("Checking configuration...");
    let config = match Config::load_with_env(config_path) {
        Ok(c) => {
            println!("  ✓ Configuration valid");
            Some(c)
        }
        Err(e) => {
            result.add_error(format!("Configuration error: {e}"));
            println!("  ✗ Configuration invalid: {e}");
            None
        }
    };

    if let Some(ref cfg) = config {
        let root = site_root(config_path);

        println!("\nChecking assets...");
        report_resume(cfg, &root);
        result.warnings.extend(asset_warnings(cfg, &root));

        println!("\nChecking configuration values...");
        result.warnings.extend(config_warnings(cfg));
    }

    println!();
    println!("Summary:");
    println!("  Errors:   {}", result.errors.len());
    println!("  Warnings: {}", result.warnings.len());

    if result.has_errors() {
        println!();
        println!("Errors:");
        for err in &result.errors {
            println!("  ✗ {err}");
        }
    }

    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &result.warnings {
            println!("  ⚠ {warn}");
        }
    }

    if result.has_errors() {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    if strict && result.has_warnings() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            result.warnings.len()
        );
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}

/// Quick asset validation for build/serve commands.
///
/// Returns non-fatal problems with the operator-provided files.
pub fn asset_warnings(config: &Config, root: &Path) -> Vec<String> {
    let mut warnings = Vec::new();
    let resolver = ResumeResolver::from_config(&config.assets, root);

    if resolver.dir().exists() && !resolver.dir().is_dir() {
        warnings.push(format!(
            "{} is not a directory; the resume cannot be resolved",
            resolver.dir().display()
        ));
        return warnings;
    }

    if !resolver.canonical_path().is_file() && !resolver.fallback_path().is_file() {
        warnings.push(format!(
            "No resume PDF at {} or {}; the resume section will show a placeholder",
            resolver.canonical_path().display(),
            resolver.fallback_path().display()
        ));
    }

    let markdown = config.assets.markdown_resume_path(root);
    if markdown.exists() && std::fs::read_to_string(&markdown).is_err() {
        warnings.push(format!(
            "{} exists but is not readable UTF-8 text",
            markdown.display()
        ));
    }

    let avatar = config.assets.avatar_path(root);
    if avatar.exists() && load_avatar(&avatar).is_none() {
        warnings.push(format!(
            "{} exists but cannot be shown; the sidebar will omit it",
            avatar.display()
        ));
    }

    warnings
}

/// Non-fatal problems with configuration values.
fn config_warnings(config: &Config) -> Vec<String> {
    let mut warnings = Vec::new();

    if !config.profile.email.contains('@') {
        warnings.push(format!(
            "profile.email '{}' does not look like an address",
            config.profile.email
        ));
    }

    for (i, project) in config.projects.iter().enumerate() {
        if project.title() == UNTITLED_PROJECT {
            warnings.push(format!(
                "projects[{i}] has no title and will show as '{UNTITLED_PROJECT}'"
            ));
        }
    }

    warnings
}

fn report_resume(config: &Config, root: &Path) {
    let resolver = ResumeResolver::from_config(&config.assets, root);

    if resolver.canonical_path().is_file() {
        println!("  ✓ Resume: {}", resolver.canonical_path().display());
    } else if resolver.fallback_path().is_file() {
        println!(
            "  ✓ Resume: {} (copied to {} on first use)",
            resolver.fallback_path().display(),
            config.assets.resume
        );
    }

    let markdown = config.assets.markdown_resume_path(root);
    if markdown.is_file() {
        println!("  ✓ Markdown resume: {}", markdown.display());
    }

    let avatar = config.assets.avatar_path(root);
    if avatar.is_file() {
        println!("  ✓ Avatar: {}", avatar.display());
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use folio_core::SAMPLE_CONFIG;
    use tempfile::TempDir;

    use super::*;

    fn site(toml: &str) -> TempDir {
        let root = TempDir::new().unwrap();
        fs::write(root.path().join("config.toml"), toml).unwrap();
        root
    }

    #[test]
    fn test_missing_resume_is_a_warning() {
        let root = site(SAMPLE_CONFIG);
        let config = Config::load(&root.path().join("config.toml")).unwrap();

        let warnings = asset_warnings(&config, root.path());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("No resume PDF"));
    }

    #[test]
    fn test_fallback_resume_satisfies_check_without_copying() {
        let root = site(SAMPLE_CONFIG);
        let assets = root.path().join("assets");
        fs::create_dir_all(&assets).unwrap();
        fs::write(assets.join("Steven_Rolka_Resume.pdf"), b"%PDF").unwrap();
        let config = Config::load(&root.path().join("config.toml")).unwrap();

        assert!(asset_warnings(&config, root.path()).is_empty());
        run(&root.path().join("config.toml"), true).unwrap();
        assert!(!assets.join("resume.pdf").exists());
    }

    #[test]
    fn test_asset_path_that_is_a_file() {
        let root = site(SAMPLE_CONFIG);
        fs::write(root.path().join("assets"), b"").unwrap();
        let config = Config::load(&root.path().join("config.toml")).unwrap();

        let warnings = asset_warnings(&config, root.path());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("not a directory"));
    }

    #[test]
    fn test_untitled_project_warns() {
        let config = Config::from_toml(
            r#"
[profile]
name = "Ann"
email = "ann@x.com"

[[projects]]
tech = "Rust"
"#,
        )
        .unwrap();

        let warnings = config_warnings(&config);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("projects[0]"));
    }

    #[test]
    fn test_strict_mode_fails_on_warnings() {
        let root = site(SAMPLE_CONFIG);
        let config_path = root.path().join("config.toml");

        assert!(run(&config_path, false).is_ok());
        assert!(run(&config_path, true).is_err());
    }

    #[test]
    fn test_invalid_config_fails() {
        let root = site("[profile]\nname = \"\"\nemail = \"a@b\"\n");
        assert!(run(&root.path().join("config.toml"), false).is_err());
    }
}
