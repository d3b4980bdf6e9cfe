use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::InventoryStore;

pub fn run<S: InventoryStore>(store: &mut S, id: u32, quantity: u32) -> Result<CmdResult> {
    let mut inventory = store.load()?;
    let new_quantity = inventory.restock(id, quantity)?;
    store.save(&inventory)?;

    let product = inventory
        .get(id)
        .expect("restocked product must be present")
        .clone();
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Stock updated: {} now has {} units.",
        product.name, new_quantity
    )));
    Ok(result.with_affected_products(vec![product]))
}
