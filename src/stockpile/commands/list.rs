use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::InventoryStore;

pub fn run<S: InventoryStore>(store: &S) -> Result<CmdResult> {
    let inventory = store.load()?;
    let listed: Vec<_> = inventory.products().cloned().collect();

    let mut result = CmdResult::default().with_listed_products(listed);
    if result.listed_products.is_empty() {
        result.add_message(CmdMessage::info("No products registered."));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::register;
    use crate::store::memory::MemoryStore;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn lists_products_in_id_order() {
        let mut store = MemoryStore::new();
        register::run(&mut store, "Widget", 10, Decimal::from_str("2.50").unwrap()).unwrap();
        register::run(&mut store, "Gadget", 3, Decimal::from_str("19.99").unwrap()).unwrap();

        let result = run(&store).unwrap();
        let ids: Vec<u32> = result.listed_products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn empty_store_reports_a_message() {
        let store = MemoryStore::new();
        let result = run(&store).unwrap();
        assert!(result.listed_products.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
