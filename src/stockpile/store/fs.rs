use super::InventoryStore;
use crate::error::{Result, StockError};
use crate::inventory::Inventory;
use crate::sheet;
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed store: one CSV file inside a data directory.
pub struct FileStore {
    data_dir: PathBuf,
    file_name: String,
}

impl FileStore {
    pub fn new(data_dir: PathBuf, file_name: impl Into<String>) -> Self {
        Self {
            data_dir,
            file_name: file_name.into(),
        }
    }

    pub fn data_file(&self) -> PathBuf {
        self.data_dir.join(&self.file_name)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(StockError::Io)?;
        }
        Ok(())
    }
}

impl InventoryStore for FileStore {
    fn load(&self) -> Result<Inventory> {
        let path = self.data_file();
        if !path.exists() {
            return Ok(Inventory::new());
        }
        let products = sheet::read_file(&path)?;
        Inventory::from_products(products)
    }

    fn save(&mut self, inventory: &Inventory) -> Result<()> {
        self.ensure_dir(&self.data_dir)?;
        sheet::write_file(self.data_file(), inventory.products())
    }

    fn data_path(&self) -> Result<PathBuf> {
        Ok(self.data_file())
    }
}
