// SPDX-License-Identifier: Apache-2.0

//! The session gate.
//!
//! At most one authenticated identity, held in memory and mirrored to a JSON
//! file so it survives console restarts the way the original survived page
//! reloads. Admin commands pass through [`SessionStore::gate`] first; without
//! a stored session they are redirected to login instead of reaching the API.

use elimu_api::AdminUserDto;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Session {
    pub user: AdminUserDto,
    pub token: String,
}

/// Outcome of the gate check. `RedirectToLogin` is a state transition, not an
/// error: the caller prints where to go and stops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gate {
    Authenticated(Session),
    RedirectToLogin,
}

#[derive(Debug)]
pub enum SessionError {
    Io(std::io::Error),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "session store: {e}"),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<std::io::Error> for SessionError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    #[must_use]
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join("session.json"),
        }
    }

    /// A corrupt session file is discarded, matching the original's handling
    /// of unparseable local storage.
    #[must_use]
    pub fn load(&self) -> Option<Session> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(_) => {
                let _ = std::fs::remove_file(&self.path);
                None
            }
        }
    }

    pub fn save(&self, session: &Session) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(session)
            .map_err(|e| SessionError::Io(std::io::Error::other(e)))?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }

    pub fn clear(&self) -> Result<(), SessionError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    #[must_use]
    pub fn gate(&self) -> Gate {
        match self.load() {
            Some(session) => Gate::Authenticated(session),
            None => Gate::RedirectToLogin,
        }
    }
}
