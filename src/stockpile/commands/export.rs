use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::sheet;
use crate::store::InventoryStore;
use std::path::PathBuf;

/// Writes the inventory to a second spreadsheet file, distinct from the
/// persisted one. Only created on explicit request.
pub fn run<S: InventoryStore>(store: &S, path: PathBuf) -> Result<CmdResult> {
    let inventory = store.load()?;

    if inventory.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("No products to export."));
        return Ok(result);
    }

    sheet::write_file(&path, inventory.products())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exported {} products to {}",
        inventory.len(),
        path.display()
    )));
    Ok(result.with_paths(vec![path]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::register;
    use crate::store::memory::MemoryStore;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn writes_a_readable_spreadsheet() {
        let mut store = MemoryStore::new();
        register::run(&mut store, "Widget", 10, Decimal::from_str("2.50").unwrap()).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("estoque_exportado.csv");
        let result = run(&store, path.clone()).unwrap();

        assert_eq!(result.paths, vec![path.clone()]);
        let products = sheet::read_file(&path).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Widget");
    }

    #[test]
    fn empty_inventory_skips_the_file() {
        let store = MemoryStore::new();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("estoque_exportado.csv");

        let result = run(&store, path.clone()).unwrap();
        assert!(result.paths.is_empty());
        assert!(!path.exists());
    }
}
