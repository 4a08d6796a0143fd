//! The document the three sections are persisted in together.
//!
//! Covers:
//! - `load` (missing file yields defaults, loaded sections are normalized)
//! - `save` (pretty JSON, atomic write, owner-only permissions on unix)

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::appearance::Appearance;
use crate::editor::Editor;
use crate::error::Result;
use crate::repo::Repo;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfDocument {
    #[serde(default)]
    pub appearance: Appearance,

    #[serde(default)]
    pub editor: Editor,

    #[serde(default)]
    pub repo: Repo,
}

impl ConfDocument {
    /// Load the document at `path`, or defaults if it does not exist yet.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("Config file not found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        log::info!("Loading config from {:?}", path);

        // The repo key lives in this file.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Ok(metadata) = fs::metadata(path) {
                let mode = metadata.permissions().mode();
                if mode & 0o044 != 0 {
                    log::warn!(
                        "Config file {:?} is readable by group or others (mode {:04o}). \
                         Run: chmod 600 {:?}",
                        path,
                        mode & 0o777,
                        path,
                    );
                }
            }
        }

        let contents = fs::read_to_string(path)?;
        let mut doc: ConfDocument = serde_json::from_str(&contents)?;
        doc.normalize();
        Ok(doc)
    }

    /// Save the document to `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;

        // Atomic save: write to temp file then rename to prevent corruption on crash
        let temp_path = path.with_extension("json.tmp");
        if let Err(e) = write_private(&temp_path, json.as_bytes())
            .and_then(|()| fs::rename(&temp_path, path))
        {
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }

        log::info!("Config saved to {:?}", path);
        Ok(())
    }

    pub fn normalize(&mut self) {
        self.editor.normalize();
        self.repo.normalize();
    }
}

/// Write `bytes` to a file only the owner can read, from the moment it is created.
fn write_private(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
        options.mode(0o600);
        let mut file = options.open(path)?;
        // A leftover temp file keeps its old mode; `mode` only applies on create.
        file.set_permissions(fs::Permissions::from_mode(0o600))?;
        file.write_all(bytes)?;
        file.sync_all()
    }
    #[cfg(not(unix))]
    {
        let mut file = options.open(path)?;
        file.write_all(bytes)?;
        file.sync_all()
    }
}
