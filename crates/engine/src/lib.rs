//! Expense store.
//!
//! [`Engine`] keeps expenses in the `expenses` table and copies every insert
//! to a [`MirrorLog`]. [`OwnerListing`] and [`OwnerReport`] are read views
//! over the table; [`SessionTotals`] is the running total a front end keeps
//! for the lifetime of its process.

pub use error::EngineError;
pub use expenses::{
    CATEGORIES, CATEGORY_PLACEHOLDER, Expense, ExpenseRecord, NewExpense,
    PAYMENT_METHOD_PLACEHOLDER, PAYMENT_METHODS,
};
pub use mirror::{DEFAULT_MIRROR_PATH, MirrorLog};
pub use ops::{Engine, EngineBuilder};
pub use reports::{OwnerListing, OwnerReport};
pub use session::SessionTotals;

mod error;
mod expenses;
mod mirror;
mod ops;
mod reports;
mod session;
mod util;

type ResultEngine<T> = Result<T, EngineError>;
