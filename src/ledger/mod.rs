//! The bookkeeping core.
//!
//! [`InventoryLedger`] owns the product catalog and the cash balance and
//! keeps them consistent across purchases and sales. Every mutation is
//! guarded: an operation either applies in full or leaves the ledger
//! untouched.

use tracing::info;

use crate::Money;
use crate::model::{Catalog, Product};

mod error;
pub use error::LedgerError;

/// The inventory ledger: catalog plus cash balance, with guarded mutation.
///
/// There is exactly one instance per session; the interactive loop holds no
/// business state of its own.
#[derive(Debug, Default)]
pub struct InventoryLedger {
    catalog: Catalog,
    cash: Money,
}

impl InventoryLedger {
    /// Fresh ledger with an empty catalog and the given starting cash.
    pub fn new(initial_cash: Money) -> Self {
        Self {
            catalog: Catalog::new(),
            cash: initial_cash,
        }
    }

    /// Ledger restored from persisted state.
    pub fn with_state(catalog: Catalog, cash: Money) -> Self {
        Self { catalog, cash }
    }

    /// Current cash balance.
    pub fn cash(&self) -> Money {
        self.cash
    }

    /// Catalog entries in insertion order. An empty iterator is a valid
    /// state, distinct from "no data loaded".
    pub fn stock(&self) -> impl Iterator<Item = &Product> + '_ {
        self.catalog.iter()
    }

    /// Credit cash. Deposits cannot fail.
    pub fn deposit_cash(&mut self, amount: Money) {
        self.cash += amount;
        info!(amount = %amount, cash = %self.cash, "cash deposited");
    }

    /// Debit cash. Fails without mutating when `amount` exceeds the
    /// balance, so cash never goes negative.
    pub fn withdraw_cash(&mut self, amount: Money) -> Result<(), LedgerError> {
        if amount > self.cash {
            return Err(LedgerError::InsufficientFunds {
                available: self.cash,
                requested: amount,
            });
        }
        self.cash -= amount;
        info!(amount = %amount, cash = %self.cash, "cash withdrawn");
        Ok(())
    }

    /// Receive `quantity` units of a product, paying
    /// `quantity * purchase_price` out of the cash balance.
    ///
    /// The funds check happens before the catalog is touched, so a failed
    /// purchase changes neither stock nor cash. For a product already in
    /// the catalog the quantity is merged and the recorded prices are kept;
    /// the newly supplied prices only determine the cost of this purchase.
    ///
    /// Returns the total cost on success.
    pub fn add_stock(
        &mut self,
        name: &str,
        quantity: u32,
        purchase_price: Money,
        sale_price: Money,
    ) -> Result<Money, LedgerError> {
        // Zero units is a no-op: no cost, and no empty catalog entry.
        if quantity == 0 {
            return Ok(Money::default());
        }

        let cost = purchase_price * quantity;
        self.withdraw_cash(cost)?;

        match self.catalog.get_mut(name) {
            Some(product) => product.quantity += quantity,
            None => self
                .catalog
                .insert(Product::new(name, quantity, purchase_price, sale_price)),
        }

        info!(product = name, quantity, cost = %cost, "stock added");
        Ok(cost)
    }

    /// Sell `quantity` units of a product, depositing
    /// `quantity * sale_price` into the cash balance.
    ///
    /// Fails with [`LedgerError::ProductUnavailable`] when the product is
    /// unknown or under-stocked; nothing is mutated on failure. Returns the
    /// revenue on success.
    pub fn sell_stock(&mut self, name: &str, quantity: u32) -> Result<Money, LedgerError> {
        let revenue = {
            let Some(product) = self.catalog.get_mut(name) else {
                return Err(LedgerError::ProductUnavailable {
                    product: name.to_string(),
                    in_stock: 0,
                    requested: quantity,
                });
            };
            if product.quantity < quantity {
                return Err(LedgerError::ProductUnavailable {
                    product: name.to_string(),
                    in_stock: product.quantity,
                    requested: quantity,
                });
            }
            product.quantity -= quantity;
            product.sale_price * quantity
        };

        self.deposit_cash(revenue);
        info!(product = name, quantity, revenue = %revenue, "stock sold");
        Ok(revenue)
    }

    /// Hand the state back for persistence at shutdown.
    pub fn into_state(self) -> (Catalog, Money) {
        (self.catalog, self.cash)
    }
}
