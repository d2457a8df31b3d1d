//! New command - scaffold a portfolio site

use std::{fs, path::Path};

use color_eyre::eyre::{Result, WrapErr, bail};
use folio_core::{SAMPLE_CONFIG, config::AssetsConfig};

/// Run the new command.
///
/// Writes a starter `config.toml` and an empty asset directory into `dir`.
/// An existing config is only replaced with `force`.
pub fn run(dir: &Path, force: bool) -> Result<()> {
    tracing::info!(?dir, force, "Creating new site");

    let config_path = dir.join("config.toml");
    if config_path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        );
    }

    fs::create_dir_all(dir).wrap_err("Failed to create site directory")?;
    fs::write(&config_path, SAMPLE_CONFIG).wrap_err("Failed to write config.toml")?;

    let assets = AssetsConfig::default();
    let assets_dir = assets.dir_in(dir);
    fs::create_dir_all(&assets_dir).wrap_err("Failed to create asset directory")?;

    tracing::info!(?config_path, "Created new site");
    println!("Created: {}", config_path.display());
    println!("Created: {}/", assets_dir.display());
    println!();
    println!(
        "  Drop your resume at {} to enable download and preview.",
        assets_dir.join(&assets.resume).display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use folio_core::Config;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_new_site_is_loadable() {
        let dir = TempDir::new().unwrap();
        let site = dir.path().join("me");

        run(&site, false).unwrap();

        assert!(site.join("assets").is_dir());
        let config = Config::load(&site.join("config.toml")).unwrap();
        assert_eq!(config.profile.name, "Steven Rolka");
    }

    #[test]
    fn test_new_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.toml"), "custom").unwrap();

        assert!(run(dir.path(), false).is_err());
        assert_eq!(
            fs::read_to_string(dir.path().join("config.toml")).unwrap(),
            "custom"
        );
    }

    #[test]
    fn test_new_force_overwrites() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.toml"), "custom").unwrap();

        run(dir.path(), true).unwrap();

        assert_eq!(
            fs::read_to_string(dir.path().join("config.toml")).unwrap(),
            SAMPLE_CONFIG
        );
    }
}
