//! Best-effort avatar loading.

use std::path::Path;

use tracing::debug;

use crate::resume::encode_base64;

/// An avatar image ready to be inlined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Avatar {
    pub mime: &'static str,
    pub base64: String,
}

impl Avatar {
    #[must_use]
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime, self.base64)
    }
}

/// Load the avatar at `path`.
///
/// Any failure, including a missing file, yields `None`: a page without an
/// avatar is still a complete page.
pub fn load_avatar(path: &Path) -> Option<Avatar> {
    match std::fs::read(path) {
        Ok(bytes) if !bytes.is_empty() => Some(Avatar {
            mime: mime_for(path),
            base64: encode_base64(&bytes),
        }),
        Ok(_) => {
            debug!(path = %path.display(), "avatar file is empty, skipping");
            None
        }
        Err(e) => {
            debug!(path = %path.display(), error = %e, "avatar unavailable, skipping");
            None
        }
    }
}

fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "image/png",
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_load_png_avatar() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("profile.png");
        std::fs::write(&path, b"\x89PNG").unwrap();

        let avatar = load_avatar(&path).unwrap();
        assert_eq!(avatar.mime, "image/png");
        assert!(avatar.data_uri().starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_missing_avatar_is_none() {
        let dir = TempDir::new().unwrap();
        assert!(load_avatar(&dir.path().join("profile.png")).is_none());
    }

    #[test]
    fn test_directory_in_place_of_avatar_is_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("profile.png");
        std::fs::create_dir(&path).unwrap();
        assert!(load_avatar(&path).is_none());
    }

    #[test]
    fn test_mime_from_extension() {
        assert_eq!(mime_for(Path::new("me.JPG")), "image/jpeg");
        assert_eq!(mime_for(Path::new("me.svg")), "image/svg+xml");
        assert_eq!(mime_for(Path::new("me")), "image/png");
    }
}
