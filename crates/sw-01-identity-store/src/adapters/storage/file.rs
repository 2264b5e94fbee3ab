use crate::domain::{PersistenceError, WhitelistDocument};
use crate::ports::outbound::DocumentStorage;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// JSON file storage for the whitelist document.
///
/// Writes go to a sibling temp file which is fsynced and then renamed over
/// the target, so the document on disk is always either the old or the new
/// mapping.
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Default location, relative to the server working directory.
    pub const DEFAULT_PATH: &'static str = "mods/swhitelist/whitelist.json";

    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling of the target with `.tmp` appended, never the target itself.
    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn write_temp(&self, temp_path: &Path, bytes: &[u8]) -> io::Result<()> {
        let mut file = fs::File::create(temp_path)?;
        file.write_all(bytes)?;
        file.sync_all()?;
        fs::rename(temp_path, &self.path)
    }

    fn write_error(&self, source: io::Error) -> PersistenceError {
        PersistenceError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

impl Default for JsonFileStorage {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PATH)
    }
}

impl DocumentStorage for JsonFileStorage {
    fn load(&self) -> Result<Option<WhitelistDocument>, PersistenceError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(PersistenceError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        tracing::debug!(
            "[sw-01] Read whitelist document {} ({} bytes)",
            self.path.display(),
            bytes.len()
        );

        WhitelistDocument::from_json_slice(&bytes)
            .map(Some)
            .map_err(|e| PersistenceError::Corrupt {
                path: self.path.clone(),
                message: e.to_string(),
            })
    }

    fn save(&self, document: &WhitelistDocument) -> Result<(), PersistenceError> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| PersistenceError::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let bytes = document
            .to_json_bytes()
            .map_err(|e| PersistenceError::Serialize(e.to_string()))?;

        // Write atomically via temp file
        let temp_path = self.temp_path();
        if let Err(e) = self.write_temp(&temp_path, &bytes) {
            let _ = fs::remove_file(&temp_path);
            return Err(self.write_error(e));
        }

        tracing::debug!(
            "[sw-01] Wrote {} entries to {}",
            document.len(),
            self.path.display()
        );
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
