pub mod config;
pub mod error;
pub mod git;
pub mod notes;
pub mod tagger;
pub mod ui;
pub mod version;

pub use error::{ReleaseTagError, Result};
