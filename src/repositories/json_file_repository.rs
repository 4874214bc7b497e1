use crate::error::{StorageError, StorageResult};
use crate::models::AddressBook;
use crate::repositories::traits::BookRepository;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Version tag written into every saved book.
pub const FORMAT_VERSION: u32 = 1;

/// On-disk envelope around the book's records.
#[derive(Deserialize)]
struct StoredBook {
    version: u32,
    contacts: AddressBook,
}

/// Book repository backed by a single JSON file.
///
/// Saves go to a sibling temporary file that is then renamed over the
/// target, so an interrupted write leaves the previous book intact.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository that reads and writes `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl BookRepository for JsonFileRepository {
    fn load(&self) -> StorageResult<AddressBook> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(
                    "No address book at {}, starting empty",
                    self.path.display()
                );
                return Ok(AddressBook::new());
            }
            Err(e) => {
                tracing::error!("Failed to read {}: {:?}", self.path.display(), e);
                return Err(self.io_error(e));
            }
        };

        let stored: StoredBook = serde_json::from_str(&raw)?;
        if stored.version != FORMAT_VERSION {
            return Err(StorageError::UnsupportedVersion {
                found: stored.version,
                expected: FORMAT_VERSION,
            });
        }

        tracing::info!(
            "Loaded {} contacts from {}",
            stored.contacts.len(),
            self.path.display()
        );
        Ok(stored.contacts)
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        #[derive(Serialize)]
        struct StoredBookRef<'a> {
            version: u32,
            contacts: &'a AddressBook,
        }

        let body = serde_json::to_string_pretty(&StoredBookRef {
            version: FORMAT_VERSION,
            contacts: book,
        })?;

        let temp = self.temp_path();
        fs::write(&temp, body).map_err(|e| self.io_error(e))?;
        if let Err(e) = fs::rename(&temp, &self.path) {
            tracing::error!("Failed to replace {}: {:?}", self.path.display(), e);
            let _ = fs::remove_file(&temp);
            return Err(self.io_error(e));
        }

        tracing::debug!("Saved {} contacts to {}", book.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("absent.json"));

        let book = repo.load().unwrap();
        assert!(book.is_empty());
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("nested/deeper/book.json"));

        let mut book = AddressBook::new();
        book.add_record(Record::new("John").unwrap());
        repo.save(&book).unwrap();

        assert!(repo.path().exists());
        assert!(!repo.temp_path().exists());
    }

    #[test]
    fn test_failed_replace_removes_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("book.json");
        // A non-empty directory in the way makes the final rename fail.
        fs::create_dir(&target).unwrap();
        fs::write(target.join("keep"), "x").unwrap();

        let repo = JsonFileRepository::new(&target);
        let err = repo.save(&AddressBook::new()).unwrap_err();

        assert!(matches!(err, StorageError::Io { .. }));
        assert!(!repo.temp_path().exists());
        assert!(target.join("keep").exists());
    }

    #[test]
    fn test_temp_path_is_sibling() {
        let repo = JsonFileRepository::new("/data/addressbook.json");
        assert_eq!(
            repo.temp_path(),
            PathBuf::from("/data/addressbook.json.tmp")
        );
    }

    #[test]
    fn test_load_rejects_unknown_version() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.json");
        fs::write(&path, r#"{"version": 99, "contacts": []}"#).unwrap();

        let err = JsonFileRepository::new(&path).load().unwrap_err();
        assert!(matches!(
            err,
            StorageError::UnsupportedVersion {
                found: 99,
                expected: FORMAT_VERSION
            }
        ));
    }

    #[test]
    fn test_load_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.json");
        fs::write(&path, "not json at all").unwrap();

        let err = JsonFileRepository::new(&path).load().unwrap_err();
        assert!(matches!(err, StorageError::Json(_)));
    }

    #[test]
    fn test_load_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = JsonFileRepository::new(dir.path()).load().unwrap_err();
        assert!(matches!(err, StorageError::Io { .. }));
    }
}
