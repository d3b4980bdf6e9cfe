//! # Spreadsheet Codec
//!
//! Reads and writes the tabular inventory file. The format is CSV with a
//! fixed header of `Id, Nome, Quantidade, Preço`, one row per product.
//! The column names come from the legacy file format and are kept so files
//! written by earlier versions of the tool stay readable.
//!
//! The codec is all-or-nothing on read: any row that fails to parse fails
//! the whole load. Writes replace the entire table; there is no append or
//! partial update.

use crate::error::{Result, StockError};
use crate::model::Product;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Serializes products to CSV, header first.
pub fn write<'a, W, I>(writer: W, products: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Product>,
{
    let mut wtr = csv::Writer::from_writer(writer);
    for product in products {
        wtr.serialize(product).map_err(StockError::Sheet)?;
    }
    wtr.flush().map_err(StockError::Io)?;
    Ok(())
}

/// Deserializes products from CSV. A malformed row surfaces as a single
/// load-level error; nothing is returned partially.
pub fn read<R: Read>(reader: R) -> Result<Vec<Product>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut products = Vec::new();
    for row in rdr.deserialize() {
        let product: Product = row.map_err(StockError::Sheet)?;
        products.push(product);
    }
    Ok(products)
}

pub fn write_file<'a, P, I>(path: P, products: I) -> Result<()>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = &'a Product>,
{
    let file = File::create(path).map_err(StockError::Io)?;
    write(file, products)
}

pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Vec<Product>> {
    let file = File::open(path).map_err(StockError::Io)?;
    read(file)
}
