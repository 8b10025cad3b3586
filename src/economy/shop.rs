//! Shop: validates and executes purchases against a player's coin.
//!
//! The shop holds no state of its own. Item state lives in the
//! [`Catalog`], coin lives in [`PlayerInfo`].

use log::{info, warn};
use std::io::Write;

use super::catalog::Catalog;
use super::errors::{EconomyError, EconomyResult};
use super::player::PlayerInfo;
use super::types::{Currency, ItemInfo};
use crate::logutil::{escape_log, Color, Console};

/// Outcome of a successful [`Shop::buy`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Purchase {
    /// The item was already owned; nothing was charged.
    AlreadyOwned,
    Bought { price: f64 },
}

pub struct Shop;

impl Shop {
    /// Buy the catalog item stored under `key`.
    pub fn buy<W: Write>(
        catalog: &mut Catalog,
        key: &str,
        player: &mut PlayerInfo,
        console: &mut Console<W>,
    ) -> EconomyResult<Purchase> {
        let item = catalog.info_mut(key)?;
        Self::buy_item(item, player, console)
    }

    /// Purchase rule for a single item.
    ///
    /// Reaching the required level unlocks the item even when the purchase
    /// then fails for lack of coin; the unlock is never rolled back.
    pub fn buy_item<W: Write>(
        item: &mut ItemInfo,
        player: &mut PlayerInfo,
        console: &mut Console<W>,
    ) -> EconomyResult<Purchase> {
        if item.is_owned {
            return Ok(Purchase::AlreadyOwned);
        }
        if item.need_level_to_buy <= player.level {
            item.is_locked = false;
        }
        if item.is_locked {
            console.log(Color::Red, "[ FAILED ]")?;
            warn!(
                "Purchase of {} refused: level {} < {}",
                escape_log(&item.label),
                player.level,
                item.need_level_to_buy
            );
            return Err(EconomyError::LockedItem {
                required_level: item.need_level_to_buy,
            });
        }
        if !player.can_afford(item.price) {
            console.log(Color::Red, "[ FAILED ]")?;
            warn!(
                "Purchase of {} refused: price {} > coin {}",
                escape_log(&item.label),
                item.price,
                player.coin
            );
            return Err(EconomyError::InsufficientFunds {
                currency: Currency::Coin,
                needed: item.price,
                available: player.coin,
            });
        }

        player.coin -= item.price;
        item.is_owned = true;
        info!(
            "Bought {} for {} coin ({} left)",
            escape_log(&item.label),
            item.price,
            player.coin
        );
        Ok(Purchase::Bought { price: item.price })
    }

    /// One line per catalog item, in key order.
    pub fn listing(catalog: &Catalog) -> Vec<String> {
        let mut lines = Vec::new();

        if catalog.is_empty() {
            lines.push("No items for sale.".to_string());
            return lines;
        }

        for (idx, (key, item)) in catalog.iter().enumerate() {
            let info = item.info();
            let status = if info.is_owned {
                "owned"
            } else if info.is_locked {
                "locked"
            } else {
                "for sale"
            };
            let equipped = if info.is_enable { ", equipped" } else { "" };
            lines.push(format!(
                "{}. {} [{}] {} coin, lvl {} - {}{}",
                idx + 1,
                key,
                item.slot(),
                info.price,
                info.need_level_to_buy,
                status,
                equipped
            ));
        }

        lines
    }
}
