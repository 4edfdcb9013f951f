/**
 * Token Persistence
 *
 * The session token outlives the process so a restart restores the session,
 * the same role localStorage played for the original client. The file-backed
 * store keeps the token under the user's config directory; the in-memory
 * store backs tests.
 */

use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

/// Persistence for the session token
pub trait TokenStore {
    /// Persist the token, replacing any previous one
    fn save(&self, token: &str) -> io::Result<()>;

    /// The persisted token, if any
    fn load(&self) -> Option<String>;

    /// Drop the persisted token; clearing an empty store is not an error
    fn clear(&self) -> io::Result<()>;
}

/// File-backed token store under the user config directory
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Store at the default location, `<config dir>/devlink/session.token`
    ///
    /// `None` when the platform has no config directory.
    pub fn new() -> Option<Self> {
        let mut path = dirs::config_dir()?;
        path.push("devlink");
        path.push("session.token");
        Some(Self::at(path))
    }

    /// Store at an explicit path
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }
}

impl TokenStore for FileTokenStore {
    fn save(&self, token: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token)
    }

    fn load(&self) -> Option<String> {
        let raw = fs::read_to_string(&self.path).ok()?;
        let token = raw.trim();
        if token.is_empty() {
            return None;
        }
        Some(token.to_string())
    }

    fn clear(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}

/// In-memory token store for tests
#[derive(Default)]
pub struct MemoryTokenStore {
    slot: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn save(&self, token: &str) -> io::Result<()> {
        *self.slot.lock().unwrap() = Some(token.to_string());
        Ok(())
    }

    fn load(&self) -> Option<String> {
        self.slot.lock().unwrap().clone()
    }

    fn clear(&self) -> io::Result<()> {
        *self.slot.lock().unwrap() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.load(), None);

        store.save("Bearer abc").unwrap();
        assert_eq!(store.load().as_deref(), Some("Bearer abc"));

        store.clear().unwrap();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::at(dir.path().join("session.token"));

        assert_eq!(store.load(), None);

        store.save("Bearer abc").unwrap();
        assert_eq!(store.load().as_deref(), Some("Bearer abc"));

        // A second save replaces the first
        store.save("Bearer def").unwrap();
        assert_eq!(store.load().as_deref(), Some("Bearer def"));

        store.clear().unwrap();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_file_store_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::at(dir.path().join("nested/dir/session.token"));

        store.save("Bearer abc").unwrap();
        assert_eq!(store.load().as_deref(), Some("Bearer abc"));
    }

    #[test]
    fn test_clearing_an_empty_store_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::at(dir.path().join("session.token"));
        assert!(store.clear().is_ok());
    }

    #[test]
    fn test_blank_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.token");
        fs::write(&path, "  \n").unwrap();

        let store = FileTokenStore::at(path);
        assert_eq!(store.load(), None);
    }
}
