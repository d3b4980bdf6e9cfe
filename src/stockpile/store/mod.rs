//! # Storage Layer
//!
//! The [`InventoryStore`] trait is the persistence boundary. A backend
//! materializes the full [`Inventory`] at the start of an operation and
//! rewrites it in full after a successful mutation — there is no
//! incremental or append persistence, by design of the file format.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, a CSV file (`estoque.csv` by
//!   default) inside the data directory.
//! - [`memory::MemoryStore`]: in-memory storage for fast, isolated tests.
//!
//! A missing data file is not an error: it loads as an empty inventory, so
//! the first registration bootstraps the file.

use crate::error::Result;
use crate::inventory::Inventory;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

pub trait InventoryStore {
    /// Load the full inventory. A missing backing file yields an empty
    /// inventory; a malformed one fails the load as a whole.
    fn load(&self) -> Result<Inventory>;

    /// Persist the full inventory, replacing whatever was stored before.
    fn save(&mut self, inventory: &Inventory) -> Result<()>;

    /// Path of the backing file, for file-based stores.
    fn data_path(&self) -> Result<PathBuf>;
}
