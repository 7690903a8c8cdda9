use super::DataStore;
use crate::book::AddressBook;
use crate::error::{Result, RolodexError};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

pub const DEFAULT_DATA_FILE: &str = "contacts.json";

pub struct FileStore {
    root: PathBuf,
    data_file: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            data_file: DEFAULT_DATA_FILE.to_string(),
        }
    }

    pub fn with_data_file(mut self, name: &str) -> Self {
        self.data_file = name.to_string();
        self
    }

    pub fn data_path(&self) -> PathBuf {
        self.root.join(&self.data_file)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(RolodexError::Io)?;
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<AddressBook> {
        let path = self.data_path();
        if !path.exists() {
            debug!(path = %path.display(), "no snapshot yet, starting empty");
            return Ok(AddressBook::new());
        }
        let content = fs::read_to_string(&path).map_err(RolodexError::Io)?;
        let book: AddressBook =
            serde_json::from_str(&content).map_err(RolodexError::Serialization)?;
        debug!(path = %path.display(), contacts = book.len(), "loaded address book");
        Ok(book)
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        self.ensure_dir()?;
        let path = self.data_path();
        let content = serde_json::to_string_pretty(book).map_err(RolodexError::Serialization)?;

        // Atomic write
        let tmp_file = self.root.join(format!(".{}.tmp", self.data_file));
        fs::write(&tmp_file, content).map_err(RolodexError::Io)?;
        fs::rename(&tmp_file, &path).map_err(RolodexError::Io)?;

        debug!(path = %path.display(), contacts = book.len(), "saved address book");
        Ok(())
    }
}
