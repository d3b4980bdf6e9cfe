use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single inventory record.
///
/// The serde renames are the on-disk column contract of the spreadsheet
/// file; see [`crate::sheet`]. The field names are kept from the legacy
/// format for compatibility with files written by earlier versions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "Id")]
    pub id: u32,
    #[serde(rename = "Nome")]
    pub name: String,
    #[serde(rename = "Quantidade")]
    pub quantity: u32,
    #[serde(rename = "Preço")]
    pub price: Decimal,
}

impl Product {
    pub fn new(id: u32, name: String, quantity: u32, price: Decimal) -> Self {
        Self {
            id,
            name,
            quantity,
            price,
        }
    }

    /// Case-insensitive name comparison, used for uniqueness and search.
    /// Names are stored case-preserving.
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

impl std::fmt::Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{} {} ({} in stock, {:.2} each)",
            self.id, self.name, self.quantity, self.price
        )
    }
}
