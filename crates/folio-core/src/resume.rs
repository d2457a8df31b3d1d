//! Resume asset resolution.
//!
//! Decides which resume file is served, bootstraps the canonical file from an
//! operator upload when needed, and exposes the bytes in raw and base64 form.
//! The resolver keeps no memory between calls: every resume view runs
//! [`ResumeResolver::resolve`] from the top.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use base64::{Engine, engine::general_purpose::STANDARD};
use tracing::{debug, info};

use crate::{
    config::AssetsConfig,
    error::{CoreError, Result},
};

/// File name offered to visitors when downloading the resume.
pub const DOWNLOAD_FILE_NAME: &str = "resume.pdf";

/// MIME type of the served resume.
pub const RESUME_MIME: &str = "application/pdf";

/// What [`ResumeResolver::ensure_canonical_present`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The canonical file was already there and was left alone.
    AlreadyPresent,
    /// The fallback upload was copied into the canonical location.
    Copied { bytes: u64 },
    /// Neither file exists; there is no resume to serve.
    Unavailable,
}

/// A servable resume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeAsset {
    /// Raw PDF bytes for the download affordance.
    pub bytes: Vec<u8>,
    /// Standard base64 of `bytes` for inline embedding.
    pub base64: String,
}

impl ResumeAsset {
    /// `data:` URI suitable for an `<iframe>` or `<embed>` source.
    #[must_use]
    pub fn data_uri(&self) -> String {
        format!("data:{RESUME_MIME};base64,{}", self.base64)
    }
}

/// Resolves the canonical resume inside an asset directory.
#[derive(Debug, Clone)]
pub struct ResumeResolver {
    dir: PathBuf,
    canonical: PathBuf,
    fallback: PathBuf,
}

impl ResumeResolver {
    /// Create a resolver for `dir` with the given canonical and fallback file names.
    pub fn new(
        dir: impl Into<PathBuf>,
        canonical_name: impl AsRef<Path>,
        fallback_name: impl AsRef<Path>,
    ) -> Self {
        let dir = dir.into();
        Self {
            canonical: dir.join(canonical_name),
            fallback: dir.join(fallback_name),
            dir,
        }
    }

    /// Create a resolver from the `[assets]` configuration, rooted at `site_root`.
    pub fn from_config(assets: &AssetsConfig, site_root: &Path) -> Self {
        Self::new(
            assets.dir_in(site_root),
            &assets.resume,
            &assets.fallback_resume,
        )
    }

    /// The asset directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the canonical resume.
    #[must_use]
    pub fn canonical_path(&self) -> &Path {
        &self.canonical
    }

    /// Path of the fallback upload.
    #[must_use]
    pub fn fallback_path(&self) -> &Path {
        &self.fallback
    }

    /// Create the asset directory and any missing parents.
    pub fn ensure_directory(&self) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| CoreError::asset(&self.dir, e))
    }

    /// Copy the fallback upload into the canonical location if the canonical
    /// file is missing.
    ///
    /// The canonical file is never overwritten. The copy is staged in a
    /// temporary file inside the asset directory and moved into place
    /// without clobbering, so a half-written canonical file is never visible.
    pub fn ensure_canonical_present(&self) -> Result<CopyOutcome> {
        if self.canonical.exists() {
            return Ok(CopyOutcome::AlreadyPresent);
        }
        if !self.fallback.exists() {
            debug!(fallback = %self.fallback.display(), "no resume available");
            return Ok(CopyOutcome::Unavailable);
        }

        let bytes = load_bytes(&self.fallback)?;

        let mut staged =
            tempfile::NamedTempFile::new_in(&self.dir).map_err(|e| CoreError::asset(&self.dir, e))?;
        staged
            .write_all(&bytes)
            .and_then(|()| staged.as_file().sync_all())
            .map_err(|e| CoreError::asset(staged.path(), e))?;

        match staged.persist_noclobber(&self.canonical) {
            Ok(_) => {
                info!(
                    from = %self.fallback.display(),
                    to = %self.canonical.display(),
                    bytes = bytes.len(),
                    "copied fallback resume into place"
                );
                Ok(CopyOutcome::Copied {
                    bytes: bytes.len() as u64,
                })
            }
            // Someone else materialized it first; theirs wins.
            Err(e) if e.error.kind() == std::io::ErrorKind::AlreadyExists => {
                Ok(CopyOutcome::AlreadyPresent)
            }
            Err(e) => Err(CoreError::asset(&self.canonical, e.error)),
        }
    }

    /// Run the full resolution sequence and load the canonical resume.
    ///
    /// Returns `Ok(None)` when neither the canonical nor the fallback file
    /// exists.
    pub fn resolve(&self) -> Result<Option<ResumeAsset>> {
        self.ensure_directory()?;
        self.ensure_canonical_present()?;

        if !self.canonical.exists() {
            return Ok(None);
        }

        let bytes = load_bytes(&self.canonical)?;
        let base64 = encode_base64(&bytes);
        debug!(path = %self.canonical.display(), bytes = bytes.len(), "resolved resume");

        Ok(Some(ResumeAsset { bytes, base64 }))
    }
}

/// Read the whole file at `path`.
pub fn load_bytes(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| CoreError::asset(path, e))
}

/// Standard, padded base64.
#[must_use]
pub fn encode_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn resolver(root: &Path) -> ResumeResolver {
        ResumeResolver::new(root.join("assets"), "resume.pdf", "Steven_Rolka_Resume.pdf")
    }

    fn dir_listing(dir: &Path) -> Vec<String> {
        let mut names: Vec<_> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_base64_round_trip() {
        let samples: [&[u8]; 4] = [b"", b"f", b"%PDF-1.7\n\x00\xff\xfe", &[0u8; 1024]];
        for bytes in samples {
            let encoded = encode_base64(bytes);
            assert_eq!(STANDARD.decode(encoded).unwrap(), bytes);
        }
        assert_eq!(encode_base64(b"Man"), "TWFu");
        assert_eq!(encode_base64(b"Ma"), "TWE=");
    }

    #[test]
    fn test_ensure_directory_creates_parents_and_is_idempotent() {
        let root = TempDir::new().unwrap();
        let resolver = ResumeResolver::new(root.path().join("a/b/assets"), "r.pdf", "f.pdf");

        resolver.ensure_directory().unwrap();
        assert!(resolver.dir().is_dir());
        resolver.ensure_directory().unwrap();
        assert!(resolver.dir().is_dir());
    }

    #[test]
    fn test_fallback_copied_when_canonical_missing() {
        let root = TempDir::new().unwrap();
        let resolver = resolver(root.path());
        resolver.ensure_directory().unwrap();
        fs::write(resolver.fallback_path(), b"fallback-pdf").unwrap();

        let outcome = resolver.ensure_canonical_present().unwrap();

        assert_eq!(outcome, CopyOutcome::Copied { bytes: 12 });
        assert_eq!(fs::read(resolver.canonical_path()).unwrap(), b"fallback-pdf");
        assert!(resolver.fallback_path().exists());
        // No staging file is left behind.
        assert_eq!(
            dir_listing(resolver.dir()),
            vec!["Steven_Rolka_Resume.pdf", "resume.pdf"]
        );
    }

    #[test]
    fn test_canonical_never_overwritten() {
        let root = TempDir::new().unwrap();
        let resolver = resolver(root.path());
        resolver.ensure_directory().unwrap();
        fs::write(resolver.canonical_path(), b"operator").unwrap();
        fs::write(resolver.fallback_path(), b"upload").unwrap();

        let outcome = resolver.ensure_canonical_present().unwrap();

        assert_eq!(outcome, CopyOutcome::AlreadyPresent);
        assert_eq!(fs::read(resolver.canonical_path()).unwrap(), b"operator");
    }

    #[test]
    fn test_neither_file_leaves_directory_untouched() {
        let root = TempDir::new().unwrap();
        let resolver = resolver(root.path());
        resolver.ensure_directory().unwrap();

        let outcome = resolver.ensure_canonical_present().unwrap();

        assert_eq!(outcome, CopyOutcome::Unavailable);
        assert!(dir_listing(resolver.dir()).is_empty());
    }

    #[test]
    fn test_repeated_runs_copy_once() {
        let root = TempDir::new().unwrap();
        let resolver = resolver(root.path());
        resolver.ensure_directory().unwrap();
        fs::write(resolver.fallback_path(), b"v1").unwrap();

        assert!(matches!(
            resolver.ensure_canonical_present().unwrap(),
            CopyOutcome::Copied { .. }
        ));
        fs::write(resolver.fallback_path(), b"v2").unwrap();
        assert_eq!(
            resolver.ensure_canonical_present().unwrap(),
            CopyOutcome::AlreadyPresent
        );
        assert_eq!(fs::read(resolver.canonical_path()).unwrap(), b"v1");
    }

    #[test]
    fn test_load_bytes_missing_file() {
        let root = TempDir::new().unwrap();
        let err = load_bytes(&root.path().join("missing.pdf")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_resolve_from_fallback() {
        let root = TempDir::new().unwrap();
        let resolver = resolver(root.path());
        fs::create_dir_all(resolver.dir()).unwrap();
        fs::write(resolver.fallback_path(), b"%PDF").unwrap();

        let asset = resolver.resolve().unwrap().expect("resume available");

        assert_eq!(asset.bytes, b"%PDF");
        assert_eq!(asset.base64, "JVBERg==");
        assert_eq!(asset.data_uri(), "data:application/pdf;base64,JVBERg==");
    }

    #[test]
    fn test_resolve_creates_directory_and_returns_none() {
        let root = TempDir::new().unwrap();
        let resolver = resolver(root.path());

        assert!(resolver.resolve().unwrap().is_none());
        assert!(resolver.dir().is_dir());
    }

    #[test]
    fn test_resolve_fails_when_directory_is_a_file() {
        let root = TempDir::new().unwrap();
        fs::write(root.path().join("assets"), b"not a dir").unwrap();
        let resolver = resolver(root.path());

        let err = resolver.resolve().unwrap_err();
        assert!(err.to_string().contains("assets"));
    }
}
