//! Preferences file management.
//!
//! [`PrefsStore`] owns the on-disk JSON file and an in-memory mirror of its
//! contents. Every setter writes through immediately; readers never touch
//! the filesystem.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct PrefsData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    background_color: Option<String>,
}

/// Write-through store for the client's persisted preferences.
#[derive(Debug)]
pub struct PrefsStore {
    path: PathBuf,
    data: PrefsData,
}

impl PrefsStore {
    /// Open (or create) the default preferences file.
    ///
    /// The file is placed in the platform-appropriate data directory:
    /// - Linux:   `~/.local/share/linkmark/prefs.json`
    /// - macOS:   `~/Library/Application Support/org.linkmark.linkmark/prefs.json`
    /// - Windows: `{FOLDERID_RoamingAppData}\linkmark\linkmark\data\prefs.json`
    pub fn new() -> Result<Self> {
        let project_dirs =
            ProjectDirs::from("org", "linkmark", "linkmark").ok_or(StoreError::NoDataDir)?;

        let data_dir = project_dirs.data_dir();
        std::fs::create_dir_all(data_dir)?;

        let path = data_dir.join("prefs.json");

        tracing::info!(path = %path.display(), "opening preferences store");

        Self::open_at(&path)
    }

    /// Open (or create) a preferences file at an explicit path.
    ///
    /// This is useful for tests and for embedding the store inside custom
    /// directory layouts.
    pub fn open_at(path: &Path) -> Result<Self> {
        let data = if path.exists() {
            let raw = std::fs::read_to_string(path)?;
            serde_json::from_str(&raw)?
        } else {
            PrefsData::default()
        };

        Ok(Self {
            path: path.to_path_buf(),
            data,
        })
    }

    /// The stored session token, if any.
    pub fn token(&self) -> Option<&str> {
        self.data.token.as_deref()
    }

    /// Persist the session token.
    pub fn set_token(&mut self, token: &str) -> Result<()> {
        self.data.token = Some(token.to_string());
        self.save()
    }

    /// The stored background color, if any.
    pub fn background(&self) -> Option<&str> {
        self.data.background_color.as_deref()
    }

    /// Persist the background color.
    pub fn set_background(&mut self, color: &str) -> Result<()> {
        self.data.background_color = Some(color.to_string());
        self.save()
    }

    /// Remove every stored preference.
    ///
    /// Scoped to linkmark's own file; nothing else on disk is touched.
    pub fn clear(&mut self) -> Result<()> {
        self.data = PrefsData::default();
        self.save()
    }

    fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.data)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}
