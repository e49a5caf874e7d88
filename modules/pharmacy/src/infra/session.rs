//! Persisted session state: a small JSON file playing the role the
//! browser's local storage plays for the web client. The sync layer
//! only ever reads it through the `SessionProvider` capability.

use std::path::PathBuf;

use anyhow::{Context, Result};
use synckit::{Credential, SessionProvider};

pub struct FileSession {
    path: PathBuf,
}

impl FileSession {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store a credential, e.g. after a login flow.
    pub fn save(&self, credential: &Credential) -> Result<()> {
        let text = serde_json::to_string_pretty(credential)?;
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating {}", dir.display()))?;
        }
        std::fs::write(&self.path, text)
            .with_context(|| format!("writing session file {}", self.path.display()))
    }

    /// Drop the stored credential (logout).
    pub fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => {
                Err(e).with_context(|| format!("removing session file {}", self.path.display()))
            }
        }
    }
}

impl SessionProvider for FileSession {
    /// A missing or unreadable file is simply "no session"; the guard
    /// turns that into a redirect, never an error.
    fn current(&self) -> Option<Credential> {
        let text = std::fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&text).ok()
    }
}
