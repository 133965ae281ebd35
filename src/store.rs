//! CSV persistence for the catalog and cash balance.
//!
//! One row per product, columns `product,quantity,purchase_price,sale_price,
//! cash`. The cash value rides along on every row and is read from the first
//! one; an empty catalog is saved as a single cash-only row so the balance
//! survives the round trip.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Money;
use crate::model::{Catalog, Product};

/// Errors from loading or saving the persisted store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to open store: {0}")]
    Open(csv::Error),

    #[error("line {line}: malformed row: {source}")]
    Row { line: usize, source: csv::Error },

    #[error("line {line}: invalid {field} value '{value}'")]
    Field {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("line {line}: missing {field}")]
    MissingField { line: usize, field: &'static str },

    #[error("line {line}: duplicate product '{product}'")]
    DuplicateProduct { line: usize, product: String },

    #[error("failed to write store: {0}")]
    Write(csv::Error),
}

/// Persisted row. All fields are kept as strings so parse failures can be
/// reported with the exact field and line.
#[derive(Debug, Deserialize, Serialize)]
struct Row {
    product: String,
    quantity: String,
    purchase_price: String,
    sale_price: String,
    cash: String,
}

fn parse_money(value: &str, line: usize, field: &'static str) -> Result<Money, StoreError> {
    if value.is_empty() {
        return Err(StoreError::MissingField { line, field });
    }
    value.parse().map_err(|_| StoreError::Field {
        line,
        field,
        value: value.to_string(),
    })
}

fn parse_quantity(value: &str, line: usize) -> Result<u32, StoreError> {
    if value.is_empty() {
        return Err(StoreError::MissingField {
            line,
            field: "quantity",
        });
    }
    value.parse().map_err(|_| StoreError::Field {
        line,
        field: "quantity",
        value: value.to_string(),
    })
}

/// Load the persisted catalog and cash balance.
///
/// Returns `Ok(None)` when no store exists yet (a fresh start, not an
/// error). Malformed rows fail with a line-numbered [`StoreError`]; the
/// caller decides how to recover.
pub fn load(path: impl AsRef<Path>) -> Result<Option<(Catalog, Money)>, StoreError> {
    let reader = match csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path.as_ref())
    {
        Ok(reader) => reader,
        Err(e) => {
            if let csv::ErrorKind::Io(io) = e.kind() {
                if io.kind() == std::io::ErrorKind::NotFound {
                    return Ok(None);
                }
            }
            return Err(StoreError::Open(e));
        }
    };

    let mut catalog = Catalog::new();
    let mut cash = None;

    for (idx, result) in reader.into_deserialize::<Row>().enumerate() {
        let line = idx + 2; // 1-indexed, skip header
        let row = result.map_err(|source| StoreError::Row { line, source })?;

        if cash.is_none() && !row.cash.is_empty() {
            cash = Some(parse_money(&row.cash, line, "cash")?);
        }

        if row.product.is_empty() {
            // A cash-only row (empty catalog). Stray values in the other
            // columns mean the row is not what it claims to be.
            if !row.quantity.is_empty()
                || !row.purchase_price.is_empty()
                || !row.sale_price.is_empty()
            {
                return Err(StoreError::MissingField {
                    line,
                    field: "product",
                });
            }
            continue;
        }

        if catalog.get(&row.product).is_some() {
            return Err(StoreError::DuplicateProduct {
                line,
                product: row.product,
            });
        }

        let quantity = parse_quantity(&row.quantity, line)?;
        let purchase_price = parse_money(&row.purchase_price, line, "purchase_price")?;
        let sale_price = parse_money(&row.sale_price, line, "sale_price")?;
        catalog.insert(Product::new(row.product, quantity, purchase_price, sale_price));
    }

    match cash {
        Some(cash) => Ok(Some((catalog, cash))),
        // A header-only file carries no data at all.
        None if catalog.is_empty() => Ok(None),
        None => Err(StoreError::MissingField {
            line: 2,
            field: "cash",
        }),
    }
}

/// Save the catalog and cash balance, replacing any previous store.
/// Called once, at orderly shutdown.
pub fn save(catalog: &Catalog, cash: Money, path: impl AsRef<Path>) -> Result<(), StoreError> {
    let mut writer = csv::Writer::from_path(path.as_ref()).map_err(StoreError::Write)?;

    if catalog.is_empty() {
        writer
            .serialize(Row {
                product: String::new(),
                quantity: String::new(),
                purchase_price: String::new(),
                sale_price: String::new(),
                cash: cash.to_string(),
            })
            .map_err(StoreError::Write)?;
    }

    for product in catalog.iter() {
        writer
            .serialize(Row {
                product: product.name.clone(),
                quantity: product.quantity.to_string(),
                purchase_price: product.purchase_price.to_string(),
                sale_price: product.sale_price.to_string(),
                cash: cash.to_string(),
            })
            .map_err(StoreError::Write)?;
    }

    writer.flush().map_err(|e| StoreError::Write(e.into()))?;
    Ok(())
}
