//! Static export.
//!
//! Renders every section to its own `index.html` and copies the resolved
//! resume next to them.

use std::{
    fs,
    path::{Path, PathBuf},
    time::Instant,
};

use folio_core::{Config, Section};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    html::{ContactForm, RESUME_DOWNLOAD_URL},
    render::{RenderError, SiteRenderer},
};

/// Build errors.
#[derive(Debug, Error)]
pub enum BuildError {
    /// IO error.
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Page rendering error.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// Refusing to clean a directory that holds the site root or its assets.
    #[error("output directory {0} contains the site root or its asset directory")]
    UnsafeOutput(PathBuf),
}

impl BuildError {
    fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for build operations.
pub type Result<T> = std::result::Result<T, BuildError>;

/// Build statistics.
#[derive(Debug, Clone, Default)]
pub struct BuildStats {
    /// Number of pages written.
    pub pages: usize,

    /// Number of non-HTML files written.
    pub assets: usize,

    /// Problems contained inside individual sections.
    pub warnings: Vec<String>,

    /// Build duration in milliseconds.
    pub duration_ms: u64,
}

/// Static site builder.
#[derive(Debug)]
pub struct Builder {
    renderer: SiteRenderer,
    output_dir: PathBuf,
}

impl Builder {
    /// Create a builder for the site at `site_root`, writing to `output_dir`.
    ///
    /// Exported pages have no server behind them, so the contact form
    /// composes its draft in the browser.
    #[must_use]
    pub fn new(config: Config, site_root: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            renderer: SiteRenderer::new(config, site_root).with_contact_form(ContactForm::Client),
            output_dir: output_dir.into(),
        }
    }

    /// Execute the full build.
    pub fn build(&self) -> Result<BuildStats> {
        let start = Instant::now();
        let mut stats = BuildStats::default();

        info!(
            root = %self.renderer.site_root().display(),
            output = %self.output_dir.display(),
            "starting build"
        );

        self.clean_output()?;

        for section in Section::ALL {
            let page = self.renderer.render(section, None)?;
            let path = self.page_path(section);
            write_file(&path, page.html.as_bytes())?;
            debug!(path = %path.display(), "wrote page");

            stats.pages += 1;
            stats.warnings.extend(page.warnings);
        }

        stats.assets += self.write_resume(&mut stats.warnings)?;

        stats.duration_ms = start.elapsed().as_millis() as u64;

        info!(
            pages = stats.pages,
            assets = stats.assets,
            warnings = stats.warnings.len(),
            duration_ms = stats.duration_ms,
            "build complete"
        );

        Ok(stats)
    }

    /// Output file for a section.
    #[must_use]
    pub fn page_path(&self, section: Section) -> PathBuf {
        let slug = section.slug();
        if slug.is_empty() {
            self.output_dir.join("index.html")
        } else {
            self.output_dir.join(slug).join("index.html")
        }
    }

    fn clean_output(&self) -> Result<()> {
        let root = self.renderer.site_root();
        let assets = self.renderer.config().assets.dir_in(root);
        if is_within(root, &self.output_dir) || is_within(&assets, &self.output_dir) {
            return Err(BuildError::UnsafeOutput(self.output_dir.clone()));
        }

        if self.output_dir.exists() {
            debug!(dir = %self.output_dir.display(), "cleaning output directory");
            fs::remove_dir_all(&self.output_dir)
                .map_err(|e| BuildError::io(&self.output_dir, e))?;
        }
        fs::create_dir_all(&self.output_dir).map_err(|e| BuildError::io(&self.output_dir, e))
    }

    /// Copy the resolved resume to the download location. Returns files written.
    fn write_resume(&self, warnings: &mut Vec<String>) -> Result<usize> {
        match self.renderer.resume_asset() {
            Ok(Some(asset)) => {
                let path = self
                    .output_dir
                    .join(RESUME_DOWNLOAD_URL.trim_start_matches('/'));
                write_file(&path, &asset.bytes)?;
                info!(path = %path.display(), bytes = asset.bytes.len(), "wrote resume download");
                Ok(1)
            }
            Ok(None) => {
                debug!("no resume to export");
                Ok(0)
            }
            Err(e) => {
                warn!(error = %e, "skipping resume download");
                // The resume page usually reported the same failure already.
                if !warnings.iter().any(|w| w.starts_with("resume:")) {
                    warnings.push(format!("resume: {e}"));
                }
                Ok(0)
            }
        }
    }
}

/// Whether `inner` is `outer` or lies beneath it. Paths that do not exist yet
/// are compared lexically.
fn is_within(inner: &Path, outer: &Path) -> bool {
    match (fs::canonicalize(inner), fs::canonicalize(outer)) {
        (Ok(inner), Ok(outer)) => inner.starts_with(outer),
        _ => match (std::path::absolute(inner), std::path::absolute(outer)) {
            (Ok(inner), Ok(outer)) => inner.starts_with(outer),
            _ => false,
        },
    }
}

fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| BuildError::io(parent, e))?;
    }
    fs::write(path, contents).map_err(|e| BuildError::io(path, e))
}
