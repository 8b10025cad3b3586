use thiserror::Error;

use super::types::{Currency, Slot};

/// Errors that can arise while trading, converting or equipping.
#[derive(Debug, Error)]
pub enum EconomyError {
    /// Bad argument to an economy or console operation (e.g. the reset color).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Not enough coin or gem to cover a purchase or conversion.
    #[error("not enough {currency}: need {needed}, have {available}")]
    InsufficientFunds {
        currency: Currency,
        needed: f64,
        available: f64,
    },

    /// The player level is below the item's requirement.
    #[error("locked! need level {required_level} and above")]
    LockedItem { required_level: u32 },

    /// Equipment has to be bought before it can be worn.
    #[error("not bought yet: {0}")]
    NotOwned(String),

    /// Returned when a catalog key does not exist.
    #[error("unknown item: {0}")]
    UnknownItem(String),

    /// The item exists but belongs to the other equipment slot.
    #[error("item {key} is not a {expected}")]
    WrongSlot { key: String, expected: Slot },

    /// Wrapper around IO errors from the console sink.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for economy operations.
pub type EconomyResult<T> = Result<T, EconomyError>;
