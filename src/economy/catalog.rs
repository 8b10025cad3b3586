//! Item catalog: the single owner of every equipment record.
//!
//! Shop and Cat operations address items by key and borrow the catalog for
//! the duration of one operation, so every mutation site goes through here.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::errors::{EconomyError, EconomyResult};
use super::types::{Equipment, ItemInfo, Slot, Suit, SuitKind, Sword, SwordKind};

pub const NINJA_SWORD: &str = "ninja_sword";
pub const SNAKE_SWORD: &str = "snake_sword";
pub const NINJA_SUIT: &str = "ninja_suit";

/// Key -> equipment mapping, iterated in key order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    items: BTreeMap<String, Equipment>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock shop: two swords and one suit.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog.insert(
            NINJA_SWORD,
            Equipment::Sword(Sword {
                kind: SwordKind::Ninja,
                power: 12.0,
                speed: 10.0,
                per_attack_ms: 1000,
                info: ItemInfo::starter(NINJA_SWORD).enabled(true),
            }),
        );
        catalog.insert(
            SNAKE_SWORD,
            Equipment::Sword(Sword {
                kind: SwordKind::Snake,
                power: 15.0,
                speed: 12.0,
                per_attack_ms: 1000,
                info: ItemInfo::for_sale(SNAKE_SWORD, 200_000.0, 3),
            }),
        );
        catalog.insert(
            NINJA_SUIT,
            Equipment::Suit(Suit {
                kind: SuitKind::Ninja,
                strength: 20.0,
                info: ItemInfo::starter(NINJA_SUIT),
            }),
        );
        catalog
    }

    /// Insert or replace an item, returning the previous one.
    pub fn insert(&mut self, key: impl Into<String>, item: Equipment) -> Option<Equipment> {
        self.items.insert(key.into(), item)
    }

    pub fn get(&self, key: &str) -> EconomyResult<&Equipment> {
        self.items
            .get(key)
            .ok_or_else(|| EconomyError::UnknownItem(key.to_string()))
    }

    pub fn get_mut(&mut self, key: &str) -> EconomyResult<&mut Equipment> {
        self.items
            .get_mut(key)
            .ok_or_else(|| EconomyError::UnknownItem(key.to_string()))
    }

    /// Look up an item and require it to occupy `slot`.
    pub fn get_in_slot(&self, key: &str, slot: Slot) -> EconomyResult<&Equipment> {
        let item = self.get(key)?;
        if item.slot() != slot {
            return Err(wrong_slot(key, slot));
        }
        Ok(item)
    }

    pub fn sword(&self, key: &str) -> EconomyResult<&Sword> {
        match self.get(key)? {
            Equipment::Sword(sword) => Ok(sword),
            Equipment::Suit(_) => Err(wrong_slot(key, Slot::Sword)),
        }
    }

    pub fn suit(&self, key: &str) -> EconomyResult<&Suit> {
        match self.get(key)? {
            Equipment::Suit(suit) => Ok(suit),
            Equipment::Sword(_) => Err(wrong_slot(key, Slot::Suit)),
        }
    }

    pub fn info_mut(&mut self, key: &str) -> EconomyResult<&mut ItemInfo> {
        self.get_mut(key).map(Equipment::info_mut)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.items.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Equipment)> {
        self.items.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Keys of every item that occupies `slot`.
    pub fn keys_in_slot(&self, slot: Slot) -> impl Iterator<Item = &str> {
        self.iter()
            .filter(move |(_, item)| item.slot() == slot)
            .map(|(key, _)| key)
    }

    pub fn owned(&self) -> impl Iterator<Item = (&str, &Equipment)> {
        self.iter().filter(|(_, item)| item.is_owned())
    }

    pub fn owned_count(&self) -> usize {
        self.owned().count()
    }
}

impl FromIterator<(String, Equipment)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (String, Equipment)>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

fn wrong_slot(key: &str, expected: Slot) -> EconomyError {
    EconomyError::WrongSlot {
        key: key.to_string(),
        expected,
    }
}
