//! Build command - exports the static site

use std::{path::Path, time::Instant};

use color_eyre::eyre::{Result, WrapErr};
use folio_generator::Builder;

use super::{check::asset_warnings, load_site};

/// Run the build command.
///
/// Renders every section into `output`, or `build.output_dir` under the site
/// root when no output is given.
pub fn run(config_path: &Path, output: Option<&Path>) -> Result<()> {
    let start = Instant::now();
    tracing::info!(?config_path, ?output, "Starting build");

    let (config, root) = load_site(config_path)?;

    let warnings = asset_warnings(&config, &root);
    if !warnings.is_empty() {
        println!();
        println!("  Warnings:");
        for warn in &warnings {
            println!("  ⚠ {warn}");
        }
        println!();
    }

    let output = match output {
        Some(dir) => dir.to_path_buf(),
        None => root.join(&config.build.output_dir),
    };

    let stats = Builder::new(config, &root, &output)
        .build()
        .wrap_err("Build failed")?;

    let duration = start.elapsed();

    println!();
    println!("  Build completed successfully!");
    println!();
    println!("  Pages:      {}", stats.pages);
    println!("  Assets:     {}", stats.assets);
    println!();
    println!("  Duration:   {:.2}s", duration.as_secs_f64());
    println!("  Output:     {}", output.display());
    println!();

    for warning in &stats.warnings {
        println!("  ⚠ {warning}");
    }

    tracing::info!(?stats, ?duration, "Build completed successfully");

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use folio_core::SAMPLE_CONFIG;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_build_into_configured_output() {
        let root = TempDir::new().unwrap();
        let config_path = root.path().join("config.toml");
        fs::write(&config_path, SAMPLE_CONFIG).unwrap();

        run(&config_path, None).unwrap();

        assert!(root.path().join("public/index.html").exists());
        assert!(root.path().join("public/contact/index.html").exists());
    }

    #[test]
    fn test_build_into_explicit_output() {
        let root = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        let config_path = root.path().join("config.toml");
        fs::write(&config_path, SAMPLE_CONFIG).unwrap();

        run(&config_path, Some(output.path())).unwrap();

        assert!(output.path().join("resume/index.html").exists());
        assert!(!root.path().join("public").exists());
    }

    #[test]
    fn test_build_missing_config_fails() {
        let root = TempDir::new().unwrap();
        assert!(run(&root.path().join("config.toml"), None).is_err());
    }
}
