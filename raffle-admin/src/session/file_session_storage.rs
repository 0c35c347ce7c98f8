use super::{Error, SessionStorage};
use std::{
    collections::BTreeMap,
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::{Mutex, PoisonError},
};

///
/// Session persisted as a JSON object in a single file.
///
/// Every write rewrites the whole file, sessions hold only a few keys.
///
pub struct FileSessionStorage {
    path: PathBuf,
    items: Mutex<BTreeMap<String, String>>,
}

impl FileSessionStorage {
    ///
    /// Loads existing session. Missing file means empty session.
    ///
    /// ### Errors
    /// - [Error::Io] when file exists but cannot be read
    /// - [Error::Json] when file content is not a JSON object of strings
    ///
    pub fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref().to_path_buf();

        let items = match std::fs::read(&path) {
            Ok(content) if content.is_empty() => BTreeMap::new(),
            Ok(content) => serde_json::from_slice(&content)?,
            Err(err) if err.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(err.into()),
        };
        tracing::debug!(path = %path.display(), keys = items.len(), "opened session file");

        Ok(Self {
            path,
            items: Mutex::new(items),
        })
    }

    fn persist(&self, items: &BTreeMap<String, String>) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_vec_pretty(items)?;
        std::fs::write(&self.path, content)?;

        Ok(())
    }
}

impl SessionStorage for FileSessionStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, Error> {
        let items = self.items.lock().unwrap_or_else(PoisonError::into_inner);

        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), Error> {
        let mut items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        items.insert(key.to_string(), value.to_string());

        self.persist(&items)
    }

    fn remove_item(&self, key: &str) -> Result<(), Error> {
        let mut items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        if items.remove(key).is_none() {
            return Ok(());
        }

        self.persist(&items)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::session::{ACCESS_TOKEN_KEY, ASSOCIATION_ID_KEY};

    #[test]
    fn open_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();

        let storage = FileSessionStorage::open(dir.path().join("session.json")).unwrap();

        assert_eq!(storage.get_item(ACCESS_TOKEN_KEY).unwrap(), None);
    }

    #[test]
    fn items_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");

        {
            let storage = FileSessionStorage::open(&path).unwrap();
            storage.set_item(ACCESS_TOKEN_KEY, "token").unwrap();
            storage.set_item(ASSOCIATION_ID_KEY, "7").unwrap();
            storage.remove_item(ACCESS_TOKEN_KEY).unwrap();
        }

        let storage = FileSessionStorage::open(&path).unwrap();
        assert_eq!(storage.get_item(ACCESS_TOKEN_KEY).unwrap(), None);
        assert_eq!(
            storage.get_item(ASSOCIATION_ID_KEY).unwrap().as_deref(),
            Some("7")
        );
    }

    #[test]
    fn open_corrupted_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, b"[1, 2, 3]").unwrap();

        let result = FileSessionStorage::open(&path);

        assert!(matches!(result, Err(Error::Json(_))));
    }
}
