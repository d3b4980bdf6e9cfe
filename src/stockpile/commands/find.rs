use crate::commands::CmdResult;
use crate::error::{Result, StockError};
use crate::store::InventoryStore;

/// Looks a product up by id or name. A term that parses as a number is
/// treated as an id; anything else is a case-insensitive name lookup.
pub fn run<S: InventoryStore>(store: &S, term: &str) -> Result<CmdResult> {
    let inventory = store.load()?;

    let found = match term.trim().parse::<u32>() {
        Ok(id) => inventory.get(id),
        Err(_) => inventory.find_by_name(term.trim()),
    };

    match found {
        Some(product) => Ok(CmdResult::default().with_listed_products(vec![product.clone()])),
        None => Err(StockError::NotFound(term.trim().to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::register;
    use crate::store::memory::MemoryStore;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn seeded_store() -> MemoryStore {
        let mut store = MemoryStore::new();
        register::run(&mut store, "Widget", 10, Decimal::from_str("2.50").unwrap()).unwrap();
        register::run(&mut store, "Gadget", 3, Decimal::from_str("19.99").unwrap()).unwrap();
        store
    }

    #[test]
    fn numeric_term_finds_by_id() {
        let store = seeded_store();
        let result = run(&store, "2").unwrap();
        assert_eq!(result.listed_products[0].name, "Gadget");
    }

    #[test]
    fn text_term_finds_by_name_case_insensitively() {
        let store = seeded_store();
        let result = run(&store, "widget").unwrap();
        assert_eq!(result.listed_products[0].id, 1);
    }

    #[test]
    fn unknown_term_is_not_found() {
        let store = seeded_store();
        assert!(matches!(
            run(&store, "Sprocket"),
            Err(StockError::NotFound(_))
        ));
        assert!(matches!(run(&store, "99"), Err(StockError::NotFound(_))));
    }
}
