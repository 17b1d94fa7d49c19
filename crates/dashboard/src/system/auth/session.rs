use contracts::system::auth::UserInfo;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::AuthError;

/// Хранилище текущей сессии (один пользователь)
pub trait SessionStore: Send + Sync {
    fn load(&self) -> Result<Option<UserInfo>, AuthError>;
    fn save(&self, user: &UserInfo) -> Result<(), AuthError>;
    fn clear(&self) -> Result<(), AuthError>;
}

/// Сессия в JSON-файле
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<UserInfo>, AuthError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&self.path)?;
        let user = serde_json::from_str(&contents)?;
        Ok(Some(user))
    }

    fn save(&self, user: &UserInfo) -> Result<(), AuthError> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(&self.path, serde_json::to_string(user)?)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), AuthError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Сессия в памяти (тесты и одноразовый запуск)
#[derive(Default)]
pub struct MemorySessionStore {
    user: Mutex<Option<UserInfo>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<UserInfo>> {
        self.user.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<UserInfo>, AuthError> {
        Ok(self.slot().clone())
    }

    fn save(&self, user: &UserInfo) -> Result<(), AuthError> {
        *self.slot() = Some(user.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), AuthError> {
        *self.slot() = None;
        Ok(())
    }
}
