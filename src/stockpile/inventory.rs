//! The in-memory record store and its identifier generator.
//!
//! [`Inventory`] owns every product for one run of the application. Records
//! are keyed by their numeric id in a `BTreeMap`, so iteration is always
//! id-ascending. Ids are handed out by a monotonic counter seeded from the
//! highest id present at load time, and a failed registration never
//! consumes an id.
//!
//! Persistence is not this module's concern: a store backend (see
//! [`crate::store`]) loads an `Inventory` at the start of an operation and
//! writes the whole thing back after a successful mutation.

use crate::error::{Result, StockError};
use crate::model::Product;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
pub struct Inventory {
    products: BTreeMap<u32, Product>,
    next_id: u32,
}

impl Inventory {
    pub fn new() -> Self {
        Self {
            products: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Builds an inventory from previously persisted records, seeding the
    /// id counter to `max(existing ids) + 1`.
    pub fn from_products(products: Vec<Product>) -> Result<Self> {
        let mut map = BTreeMap::new();
        for product in products {
            let id = product.id;
            if map.insert(id, product).is_some() {
                return Err(StockError::Store(format!(
                    "Duplicate id {} in persisted data",
                    id
                )));
            }
        }
        let next_id = match map.keys().max() {
            Some(&max) => max.checked_add(1).ok_or_else(|| {
                StockError::Store("Identifier space exhausted in persisted data".to_string())
            })?,
            None => 1,
        };
        Ok(Self {
            products: map,
            next_id,
        })
    }

    /// Registers a new product and returns its assigned id.
    ///
    /// Fails with `DuplicateName` on a case-insensitive name collision and
    /// with `Validation` on an empty name or negative price. No id is
    /// consumed by a failed registration.
    pub fn register(&mut self, name: &str, quantity: u32, price: Decimal) -> Result<u32> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StockError::Validation("Name cannot be empty".into()));
        }
        if price.is_sign_negative() {
            return Err(StockError::Validation(format!(
                "Price cannot be negative: {}",
                price
            )));
        }
        if let Some(existing) = self.find_by_name(name) {
            return Err(StockError::DuplicateName(existing.name.clone()));
        }

        let id = self.next_id;
        let next_id = id
            .checked_add(1)
            .ok_or_else(|| StockError::Store("Identifier space exhausted".to_string()))?;
        self.products
            .insert(id, Product::new(id, name.to_string(), quantity, price));
        self.next_id = next_id;
        Ok(id)
    }

    pub fn get(&self, id: u32) -> Option<&Product> {
        self.products.get(&id)
    }

    /// First match in id order, comparing names case-insensitively.
    pub fn find_by_name(&self, name: &str) -> Option<&Product> {
        self.products.values().find(|p| p.matches_name(name))
    }

    /// Records a sale, decrementing stock. The decrement is all-or-nothing:
    /// an overdraw leaves the quantity untouched.
    pub fn sell(&mut self, id: u32, quantity: u32) -> Result<u32> {
        let product = self
            .products
            .get_mut(&id)
            .ok_or_else(|| StockError::NotFound(id.to_string()))?;
        if quantity > product.quantity {
            return Err(StockError::InsufficientStock {
                requested: quantity,
                available: product.quantity,
            });
        }
        product.quantity -= quantity;
        Ok(product.quantity)
    }

    /// Adds stock and returns the new quantity. Fails with `Validation`
    /// if the addition would overflow the stock counter, leaving the
    /// quantity untouched.
    pub fn restock(&mut self, id: u32, quantity: u32) -> Result<u32> {
        let product = self
            .products
            .get_mut(&id)
            .ok_or_else(|| StockError::NotFound(id.to_string()))?;
        let current = product.quantity;
        let new_quantity = current.checked_add(quantity).ok_or_else(|| {
            StockError::Validation(format!(
                "Restock of {} would overflow the current stock of {}",
                quantity, current
            ))
        })?;
        product.quantity = new_quantity;
        Ok(new_quantity)
    }

    /// All products, id-ascending.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn price(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn register_assigns_sequential_ids_from_one() {
        let mut inv = Inventory::new();
        assert_eq!(inv.register("A", 1, price("1.00")).unwrap(), 1);
        assert_eq!(inv.register("B", 1, price("1.00")).unwrap(), 2);
        assert_eq!(inv.register("C", 1, price("1.00")).unwrap(), 3);
    }

    #[test]
    fn register_rejects_duplicate_name_case_insensitively() {
        let mut inv = Inventory::new();
        inv.register("Widget", 10, price("2.50")).unwrap();
        let err = inv.register("WIDGET", 5, price("1.00")).unwrap_err();
        assert!(matches!(err, StockError::DuplicateName(_)));
        // The store is untouched and no id was consumed.
        assert_eq!(inv.len(), 1);
        assert_eq!(inv.register("Gadget", 1, price("1.00")).unwrap(), 2);
    }

    #[test]
    fn register_rejects_empty_name_and_negative_price() {
        let mut inv = Inventory::new();
        assert!(matches!(
            inv.register("   ", 1, price("1.00")),
            Err(StockError::Validation(_))
        ));
        assert!(matches!(
            inv.register("Widget", 1, price("-0.01")),
            Err(StockError::Validation(_))
        ));
        assert!(inv.is_empty());
    }

    #[test]
    fn sell_decrements_stock() {
        let mut inv = Inventory::new();
        let id = inv.register("Widget", 10, price("2.50")).unwrap();
        assert_eq!(inv.sell(id, 4).unwrap(), 6);
        assert_eq!(inv.get(id).unwrap().quantity, 6);
    }

    #[test]
    fn sell_rejects_overdraw_without_partial_decrement() {
        let mut inv = Inventory::new();
        let id = inv.register("Widget", 6, price("2.50")).unwrap();
        let err = inv.sell(id, 100).unwrap_err();
        assert!(matches!(
            err,
            StockError::InsufficientStock {
                requested: 100,
                available: 6
            }
        ));
        assert_eq!(inv.get(id).unwrap().quantity, 6);
    }

    #[test]
    fn sell_unknown_id_is_not_found() {
        let mut inv = Inventory::new();
        assert!(matches!(inv.sell(42, 1), Err(StockError::NotFound(_))));
    }

    #[test]
    fn restock_increments_unconditionally() {
        let mut inv = Inventory::new();
        let id = inv.register("Widget", 6, price("2.50")).unwrap();
        assert_eq!(inv.restock(id, 5).unwrap(), 11);
        assert!(matches!(inv.restock(99, 5), Err(StockError::NotFound(_))));
    }

    #[test]
    fn restock_rejects_overflow_and_leaves_stock_unchanged() {
        let mut inv = Inventory::new();
        let id = inv.register("Widget", 2, price("2.50")).unwrap();
        let err = inv.restock(id, u32::MAX).unwrap_err();
        assert!(matches!(err, StockError::Validation(_)));
        assert_eq!(inv.get(id).unwrap().quantity, 2);
        // Up to the counter's capacity still works.
        assert_eq!(inv.restock(id, u32::MAX - 2).unwrap(), u32::MAX);
    }

    #[test]
    fn find_by_name_returns_first_in_id_order() {
        let mut inv = Inventory::new();
        inv.register("Bolt M3", 1, price("0.10")).unwrap();
        inv.register("Bolt M4", 1, price("0.12")).unwrap();
        assert_eq!(inv.find_by_name("bolt m4").unwrap().id, 2);
        assert!(inv.find_by_name("bolt").is_none());
    }

    #[test]
    fn from_products_seeds_id_counter_past_max() {
        let products = vec![
            Product::new(3, "C".into(), 1, price("1.00")),
            Product::new(7, "G".into(), 1, price("1.00")),
        ];
        let mut inv = Inventory::from_products(products).unwrap();
        assert_eq!(inv.register("New", 1, price("1.00")).unwrap(), 8);
    }

    #[test]
    fn from_products_rejects_duplicate_ids() {
        let products = vec![
            Product::new(1, "A".into(), 1, price("1.00")),
            Product::new(1, "B".into(), 1, price("1.00")),
        ];
        assert!(matches!(
            Inventory::from_products(products),
            Err(StockError::Store(_))
        ));
    }

    #[test]
    fn from_products_rejects_an_exhausted_id_space() {
        let products = vec![Product::new(u32::MAX, "Last".into(), 1, price("1.00"))];
        assert!(matches!(
            Inventory::from_products(products),
            Err(StockError::Store(_))
        ));
    }

    #[test]
    fn register_fails_cleanly_when_ids_run_out() {
        let products = vec![Product::new(u32::MAX - 1, "Last".into(), 1, price("1.00"))];
        let mut inv = Inventory::from_products(products).unwrap();
        let err = inv.register("One Too Many", 1, price("1.00")).unwrap_err();
        assert!(matches!(err, StockError::Store(_)));
        assert_eq!(inv.len(), 1);
    }

    #[test]
    fn products_iterates_in_id_order() {
        let products = vec![
            Product::new(9, "Z".into(), 1, price("1.00")),
            Product::new(2, "A".into(), 1, price("1.00")),
            Product::new(5, "M".into(), 1, price("1.00")),
        ];
        let inv = Inventory::from_products(products).unwrap();
        let ids: Vec<u32> = inv.products().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 5, 9]);
    }
}
