//! Economy model: currencies, equipment, the shop and the player actor.
//!
//! Every equipment record lives in a [`Catalog`] and is addressed by key.
//! [`Shop`] and [`Cat`] operations borrow the catalog for one call at a time.

pub mod cat;
pub mod catalog;
pub mod errors;
pub mod player;
pub mod shop;
pub mod types;

pub use cat::{Cat, EMPTY_SLOT_LABEL};
pub use catalog::{Catalog, NINJA_SUIT, NINJA_SWORD, SNAKE_SWORD};
pub use errors::{EconomyError, EconomyResult};
pub use player::{PlayerInfo, GEM_COIN_TRADE, HELP_HEALTH_THRESHOLD};
pub use shop::{Purchase, Shop};
pub use types::*;
