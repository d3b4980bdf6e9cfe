//! # API Facade
//!
//! The single entry point for all stockpile operations, regardless of the
//! UI driving them. The facade dispatches to the command layer and returns
//! structured [`CmdResult`] values; it does no I/O formatting of its own.
//!
//! `StockApi<S: InventoryStore>` is generic over the storage backend:
//! production uses `StockApi<FileStore>`, tests use `StockApi<MemoryStore>`.

use crate::commands;
use crate::error::Result;
use crate::store::InventoryStore;
use rust_decimal::Decimal;
use std::path::PathBuf;

pub struct StockApi<S: InventoryStore> {
    store: S,
    data_dir: PathBuf,
}

impl<S: InventoryStore> StockApi<S> {
    pub fn new(store: S, data_dir: PathBuf) -> Self {
        Self { store, data_dir }
    }

    pub fn register(&mut self, name: &str, quantity: u32, price: Decimal) -> Result<CmdResult> {
        commands::register::run(&mut self.store, name, quantity, price)
    }

    pub fn sell(&mut self, id: u32, quantity: u32) -> Result<CmdResult> {
        commands::sell::run(&mut self.store, id, quantity)
    }

    pub fn restock(&mut self, id: u32, quantity: u32) -> Result<CmdResult> {
        commands::restock::run(&mut self.store, id, quantity)
    }

    pub fn list(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn find(&self, term: &str) -> Result<CmdResult> {
        commands::find::run(&self.store, term)
    }

    pub fn export(&self, path: PathBuf) -> Result<CmdResult> {
        commands::export::run(&self.store, path)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.data_dir, action)
    }

    /// Path of the persisted spreadsheet, for external opening.
    pub fn data_path(&self) -> Result<PathBuf> {
        self.store.data_path()
    }

    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
