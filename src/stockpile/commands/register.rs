use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::InventoryStore;
use rust_decimal::Decimal;

pub fn run<S: InventoryStore>(
    store: &mut S,
    name: &str,
    quantity: u32,
    price: Decimal,
) -> Result<CmdResult> {
    let mut inventory = store.load()?;
    let id = inventory.register(name, quantity, price)?;
    store.save(&inventory)?;

    let product = inventory
        .get(id)
        .expect("registered product must be present")
        .clone();
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Product registered: {} (id {})",
        product.name, id
    )));
    Ok(result.with_affected_products(vec![product]))
}
