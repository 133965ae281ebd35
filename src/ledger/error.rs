//! Error types for ledger operations.

use thiserror::Error;

use crate::Money;

/// Error returned by the mutating operations of
/// [`InventoryLedger`](super::InventoryLedger).
#[derive(Debug, Error)]
pub enum LedgerError {
    /// A withdrawal or purchase exceeds the available cash.
    #[error("insufficient funds: available ${available}, requested ${requested}")]
    InsufficientFunds { available: Money, requested: Money },

    /// Sale of an unknown product, or of more units than are in stock.
    /// `in_stock` is zero for unknown products.
    #[error("product '{product}' unavailable: {in_stock} in stock, {requested} requested")]
    ProductUnavailable {
        product: String,
        in_stock: u32,
        requested: u32,
    },
}
