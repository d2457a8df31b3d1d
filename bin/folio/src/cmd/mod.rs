//! Command implementations.

pub mod build;
pub mod check;
pub mod new;
pub mod serve;

use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr};
use folio_core::Config;

/// Load `config_path` with `FOLIO__` environment overrides applied.
///
/// Returns the configuration and the site root: the directory holding the
/// config file, against which asset and output paths resolve.
pub fn load_site(config_path: &Path) -> Result<(Config, PathBuf)> {
    let config = Config::load_with_env(config_path).wrap_err("Failed to load configuration")?;
    tracing::debug!(?config, "Loaded configuration");
    Ok((config, site_root(config_path)))
}

/// Directory the site lives in.
pub fn site_root(config_path: &Path) -> PathBuf {
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_root_of_bare_file_name() {
        assert_eq!(site_root(Path::new("config.toml")), PathBuf::from("."));
    }

    #[test]
    fn test_site_root_of_nested_config() {
        assert_eq!(
            site_root(Path::new("sites/me/config.toml")),
            PathBuf::from("sites/me")
        );
    }
}
