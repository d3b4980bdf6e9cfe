use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::InventoryStore;

pub fn run<S: InventoryStore>(store: &mut S, id: u32, quantity: u32) -> Result<CmdResult> {
    let mut inventory = store.load()?;
    let remaining = inventory.sell(id, quantity)?;
    store.save(&inventory)?;

    let product = inventory
        .get(id)
        .expect("sold product must be present")
        .clone();
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Sale recorded: {} x {}. {} units remaining.",
        quantity, product.name, remaining
    )));
    Ok(result.with_affected_products(vec![product]))
}
