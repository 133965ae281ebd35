pub mod console;
pub mod ledger;
pub mod model;
pub mod money;
pub mod store;

pub use ledger::{InventoryLedger, LedgerError};
pub use model::{Catalog, Product};
pub use money::Money;
