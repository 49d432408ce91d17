use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File-backed key-value store. Each key maps to one file under the root
/// directory; values are read whole and written whole.
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Create the root directory if it does not exist yet.
    pub fn ensure_root(&self) -> io::Result<()> {
        fs::create_dir_all(&self.root)
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    /// Read the value under `key`. A missing key is not an error.
    pub fn get(&self, key: &str) -> io::Result<Option<String>> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Overwrite the value under `key`.
    pub fn set(&self, key: &str, value: &str) -> io::Result<()> {
        self.ensure_root()?;
        fs::write(self.key_path(key), value)
    }
}
