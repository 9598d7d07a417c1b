//! Bearer-token persistence.
//!
//! The session is a single opaque token stored in `session.toml` next to the
//! application config, with restricted permissions (0600) on unix. The token
//! is written on login, removed on sign-out, and read at startup; it is never
//! validated client-side and never logged.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tokio::{
    fs::{OpenOptions, create_dir_all, read_to_string, remove_file},
    io::AsyncWriteExt,
};

/// Errors that can occur while reading or writing the persisted session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// An I/O error occurred while reading, writing, or removing the session file.
    #[error("failed to access session file: {0}")]
    IoError(#[from] std::io::Error),
    /// The session file contains invalid TOML.
    #[error("failed to deserialize session: {0}")]
    DeserializeError(#[from] toml::de::Error),
    /// Failed to serialize the session to TOML.
    #[error("failed to serialize session: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

/// On-disk shape of the session file.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
struct SessionFile {
    token: Option<String>,
}

/// The single owning instance of the bearer token.
///
/// Constructed against an explicit file path so tests can point it at a
/// temporary directory instead of the user's config directory.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
    token: Option<String>,
}

impl SessionStore {
    /// Loads the session from the given path. A missing file simply means no
    /// one is logged in.
    pub async fn load(path: PathBuf) -> Result<Self, SessionError> {
        if !path.exists() {
            return Ok(Self { path, token: None });
        }

        let contents = read_to_string(&path).await?;
        let file: SessionFile = toml::from_str(&contents)?;
        Ok(Self {
            path,
            token: file.token,
        })
    }

    /// The stored bearer token. An empty string counts as no token, so a
    /// hand-emptied session file behaves like a sign-out.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|token| !token.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Stores a new token and persists it. The in-memory token is updated
    /// even when persisting fails, so the session stays usable for this run.
    pub async fn set_token(&mut self, token: String) -> Result<(), SessionError> {
        self.token = Some(token);
        self.persist().await
    }

    /// Clears the token and removes the session file.
    pub async fn clear(&mut self) -> Result<(), SessionError> {
        self.token = None;
        if self.path.exists() {
            remove_file(&self.path).await?;
        }
        Ok(())
    }

    async fn persist(&self) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            create_dir_all(parent).await?;
        }

        let contents = toml::to_string_pretty(&SessionFile {
            token: self.token.clone(),
        })?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)
            .await?;
        file.write_all(contents.as_bytes()).await?;
        file.sync_all().await?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            tokio::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600)).await?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::*;

    fn temp_session_path(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before UNIX_EPOCH")
            .as_nanos();
        std::env::temp_dir().join(format!(
            "annota-session-{label}-{}-{nanos}.toml",
            std::process::id()
        ))
    }

    /// Test: a stored token survives a reload from the same path.
    #[tokio::test]
    async fn test_token_round_trip() {
        let path = temp_session_path("round-trip");

        let mut store = SessionStore::load(path.clone()).await.unwrap();
        assert_eq!(store.token(), None);
        assert!(!store.is_authenticated());

        store.set_token("abc".to_string()).await.unwrap();
        assert_eq!(store.token(), Some("abc"));

        let reloaded = SessionStore::load(path.clone()).await.unwrap();
        assert_eq!(reloaded.token(), Some("abc"));
        assert!(reloaded.is_authenticated());

        remove_file(&path).await.unwrap();
    }

    /// Test: clearing removes both the in-memory token and the file.
    #[tokio::test]
    async fn test_clear_removes_file() {
        let path = temp_session_path("clear");

        let mut store = SessionStore::load(path.clone()).await.unwrap();
        store.set_token("abc".to_string()).await.unwrap();
        assert!(path.exists());

        store.clear().await.unwrap();
        assert_eq!(store.token(), None);
        assert!(!path.exists());

        let reloaded = SessionStore::load(path).await.unwrap();
        assert_eq!(reloaded.token(), None);
    }

    /// Test: an empty token string is treated as no session.
    #[tokio::test]
    async fn test_empty_token_counts_as_absent() {
        let path = temp_session_path("empty");

        let mut store = SessionStore::load(path.clone()).await.unwrap();
        store.set_token(String::new()).await.unwrap();
        assert_eq!(store.token(), None);
        assert!(!store.is_authenticated());

        store.clear().await.unwrap();
    }

    /// Test: the session file is not world-readable.
    #[cfg(unix)]
    #[tokio::test]
    async fn test_session_file_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let path = temp_session_path("permissions");

        let mut store = SessionStore::load(path.clone()).await.unwrap();
        store.set_token("abc".to_string()).await.unwrap();

        let mode = tokio::fs::metadata(&path).await.unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);

        store.clear().await.unwrap();
    }
}
