use super::InventoryStore;
use crate::error::{Result, StockError};
use crate::inventory::Inventory;
use crate::model::Product;
use std::path::PathBuf;

/// In-memory store used by tests. No persistence beyond the struct itself.
#[derive(Debug, Default)]
pub struct MemoryStore {
    products: Vec<Product>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl InventoryStore for MemoryStore {
    fn load(&self) -> Result<Inventory> {
        Inventory::from_products(self.products.clone())
    }

    fn save(&mut self, inventory: &Inventory) -> Result<()> {
        self.products = inventory.products().cloned().collect();
        Ok(())
    }

    fn data_path(&self) -> Result<PathBuf> {
        Err(StockError::Store(
            "In-memory store has no backing file".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn save_and_load_round_trip() {
        let mut store = MemoryStore::new();
        let mut inv = Inventory::new();
        inv.register("Widget", 4, Decimal::from_str("2.50").unwrap())
            .unwrap();
        store.save(&inv).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.get(1).unwrap().name, "Widget");
    }

    #[test]
    fn has_no_data_path() {
        assert!(MemoryStore::new().data_path().is_err());
    }
}
