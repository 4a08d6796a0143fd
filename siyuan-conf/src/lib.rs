//! Configuration model for the SiYuan kernel.
//!
//! This crate provides the typed, JSON-persisted configuration sections
//! the kernel and the front-end share. It includes:
//!
//! - Appearance: theme and icon selection with version pinning
//! - Editor: rendering, history, reference and layout preferences
//! - Repo: data-repo key, index retention policy and storage directory
//! - A swappable workspace root used for directory resolution
//! - The sibling document the three sections are persisted in

pub mod appearance;
pub mod defaults;
pub mod document;
pub mod editor;
pub mod error;
pub mod markdown;
pub mod repo;
mod types;
pub mod workspace;

// Re-export main types for convenience
pub use appearance::{Appearance, AppearanceTheme};
pub use document::ConfDocument;
pub use editor::{
    DEFAULT_DYNAMIC_LOAD_BLOCKS, EXPAND_ALL, Editor, MAX_DYNAMIC_LOAD_BLOCKS,
    MIN_DYNAMIC_LOAD_BLOCKS,
};
pub use error::{ConfigError, Result};
pub use markdown::{MarkdownSettings, SharedMarkdown};
pub use repo::{Repo, RepoKey};
pub use types::{CloseButtonBehavior, FloatWindowMode, Mode};
pub use workspace::WorkspaceDir;
