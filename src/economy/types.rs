//! Core economy records: currencies, item state and equipment.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Currencies & Slots
// ============================================================================

/// The two currencies a player holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Currency {
    /// Primary spendable currency.
    Coin,
    /// Secondary currency; only spendable after conversion to coin.
    Gem,
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Currency::Coin => write!(f, "coin"),
            Currency::Gem => write!(f, "gem"),
        }
    }
}

/// Equipment slot an item occupies on the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Sword,
    Suit,
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Sword => write!(f, "sword"),
            Slot::Suit => write!(f, "suit"),
        }
    }
}

// ============================================================================
// Item State
// ============================================================================

/// Commercial and state attributes of a purchasable item.
///
/// `is_owned` and `is_locked` change through [`Shop`](crate::economy::Shop);
/// `is_enable` changes when a [`Cat`](crate::economy::Cat) equips or unequips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemInfo {
    pub price: f64,
    pub is_owned: bool,
    pub is_locked: bool,
    #[serde(default)]
    pub need_level_to_buy: u32,
    #[serde(default)]
    pub is_enable: bool,
    pub label: String,
}

impl ItemInfo {
    /// A shop item that is not yet owned and starts locked.
    pub fn for_sale(label: impl Into<String>, price: f64, need_level_to_buy: u32) -> Self {
        Self {
            price,
            is_owned: false,
            is_locked: true,
            need_level_to_buy,
            is_enable: false,
            label: label.into(),
        }
    }

    /// Starter gear handed out for free.
    pub fn starter(label: impl Into<String>) -> Self {
        Self {
            price: 0.0,
            is_owned: true,
            is_locked: false,
            need_level_to_buy: 0,
            is_enable: false,
            label: label.into(),
        }
    }

    /// Builder-style setter for the enabled flag.
    pub fn enabled(mut self, is_enable: bool) -> Self {
        self.is_enable = is_enable;
        self
    }
}

// ============================================================================
// Equipment
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwordKind {
    Ninja,
    Snake,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuitKind {
    Ninja,
}

/// A sword. Stats are fixed once the catalog is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sword {
    pub kind: SwordKind,
    pub power: f64,
    pub speed: f64,
    /// Attack interval in milliseconds (informational only).
    pub per_attack_ms: u64,
    pub info: ItemInfo,
}

/// A suit. `strength` is fixed once the catalog is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suit {
    pub kind: SuitKind,
    pub strength: f64,
    pub info: ItemInfo,
}

/// Any item the shop can stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "slot", rename_all = "snake_case")]
pub enum Equipment {
    Sword(Sword),
    Suit(Suit),
}

impl Equipment {
    pub fn slot(&self) -> Slot {
        match self {
            Equipment::Sword(_) => Slot::Sword,
            Equipment::Suit(_) => Slot::Suit,
        }
    }

    pub fn info(&self) -> &ItemInfo {
        match self {
            Equipment::Sword(sword) => &sword.info,
            Equipment::Suit(suit) => &suit.info,
        }
    }

    /// Only the item state is mutable; kind and stats are not reachable here.
    pub fn info_mut(&mut self) -> &mut ItemInfo {
        match self {
            Equipment::Sword(sword) => &mut sword.info,
            Equipment::Suit(suit) => &mut suit.info,
        }
    }

    pub fn label(&self) -> &str {
        &self.info().label
    }

    pub fn is_owned(&self) -> bool {
        self.info().is_owned
    }

    pub fn as_sword(&self) -> Option<&Sword> {
        match self {
            Equipment::Sword(sword) => Some(sword),
            Equipment::Suit(_) => None,
        }
    }

    pub fn as_suit(&self) -> Option<&Suit> {
        match self {
            Equipment::Suit(suit) => Some(suit),
            Equipment::Sword(_) => None,
        }
    }
}
