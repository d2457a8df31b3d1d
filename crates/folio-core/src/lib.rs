//! Folio Core Library
//!
//! Configuration, profile records, resume asset resolution and contact drafts
//! for the Folio portfolio site.

pub mod avatar;
pub mod config;
pub mod contact;
pub mod error;
pub mod profile;
pub mod resume;
pub mod section;

pub use avatar::{Avatar, load_avatar};
pub use config::{Config, SAMPLE_CONFIG};
pub use contact::ContactDraft;
pub use error::{CoreError, Result};
pub use profile::{Highlight, Profile, Project, UNTITLED_PROJECT};
pub use resume::{CopyOutcome, ResumeAsset, ResumeResolver, encode_base64};
pub use section::Section;
