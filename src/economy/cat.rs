//! The player actor: a cat with a wallet, a suit and a sword.

use log::{debug, info};
use std::io::Write;

use super::catalog::Catalog;
use super::errors::{EconomyError, EconomyResult};
use super::player::PlayerInfo;
use super::shop::{Purchase, Shop};
use super::types::{Equipment, Slot, Suit, Sword};
use crate::logutil::{escape_log, Color, Console};

/// Label reported for an empty equipment slot.
pub const EMPTY_SLOT_LABEL: &str = "nothing";

/// A player together with the catalog keys of its equipped gear.
///
/// A slot holds `Some(key)` exactly while the Cat has that item enabled;
/// disabling the equipped item empties the slot.
#[derive(Debug, Clone)]
pub struct Cat {
    pub info: PlayerInfo,
    suit: Option<String>,
    sword: Option<String>,
}

impl Cat {
    /// Create a Cat wearing `suit_key` and holding `sword_key`.
    ///
    /// Both items must already be owned. On success both are enabled and
    /// every other item in those slots is disabled.
    pub fn new<W: Write>(
        info: PlayerInfo,
        suit_key: &str,
        sword_key: &str,
        catalog: &mut Catalog,
        console: &mut Console<W>,
    ) -> EconomyResult<Self> {
        let suit = catalog.get_in_slot(suit_key, Slot::Suit)?;
        let sword = catalog.get_in_slot(sword_key, Slot::Sword)?;
        for item in [sword, suit] {
            if !item.is_owned() {
                console.log(Color::Red, "[ FAILED ] Not bought yet!")?;
                return Err(EconomyError::NotOwned(item.label().to_string()));
            }
        }

        for (slot, equipped) in [(Slot::Suit, suit_key), (Slot::Sword, sword_key)] {
            let keys: Vec<String> = catalog.keys_in_slot(slot).map(str::to_string).collect();
            for key in keys {
                catalog.info_mut(&key)?.is_enable = key == equipped;
            }
        }
        debug!(
            "Cat ready with {} and {}",
            escape_log(sword_key),
            escape_log(suit_key)
        );

        Ok(Self {
            info,
            suit: Some(suit_key.to_string()),
            sword: Some(sword_key.to_string()),
        })
    }

    pub fn suit_key(&self) -> Option<&str> {
        self.suit.as_deref()
    }

    pub fn sword_key(&self) -> Option<&str> {
        self.sword.as_deref()
    }

    /// The equipped sword, `None` for an empty slot. A key the catalog
    /// does not hold as a sword is an error.
    pub fn equipped_sword<'c>(&self, catalog: &'c Catalog) -> EconomyResult<Option<&'c Sword>> {
        self.sword.as_deref().map(|key| catalog.sword(key)).transpose()
    }

    pub fn equipped_suit<'c>(&self, catalog: &'c Catalog) -> EconomyResult<Option<&'c Suit>> {
        self.suit.as_deref().map(|key| catalog.suit(key)).transpose()
    }

    /// Report an attack with the equipped gear and return the status line.
    pub fn attack<W: Write>(
        &self,
        catalog: &Catalog,
        console: &mut Console<W>,
    ) -> EconomyResult<String> {
        if self.info.is_need_help() {
            console.log(Color::Yellow, "[ WARN ] Go home!")?;
        }
        let sword = self
            .equipped_sword(catalog)?
            .map_or(EMPTY_SLOT_LABEL, |s| s.info.label.as_str());
        let suit = self
            .equipped_suit(catalog)?
            .map_or(EMPTY_SLOT_LABEL, |s| s.info.label.as_str());

        let line = format!(
            "[ HEALTH {}% ] attack with {} and {}",
            self.info.health, sword, suit
        );
        console.line(&line)?;
        Ok(line)
    }

    /// Buy an item with this Cat's coin.
    pub fn buy<W: Write>(
        &mut self,
        catalog: &mut Catalog,
        key: &str,
        console: &mut Console<W>,
    ) -> EconomyResult<Purchase> {
        Shop::buy(catalog, key, &mut self.info, console)
    }

    /// Flip an item's enabled flag, equipping it when it turns on.
    /// Returns the new flag.
    pub fn toggle_enable<W: Write>(
        &mut self,
        catalog: &mut Catalog,
        key: &str,
        console: &mut Console<W>,
    ) -> EconomyResult<bool> {
        let slot = catalog.get(key)?.slot();
        self.toggle_in_slot(slot, catalog, key, console)
    }

    pub fn toggle_enable_sword<W: Write>(
        &mut self,
        catalog: &mut Catalog,
        key: &str,
        console: &mut Console<W>,
    ) -> EconomyResult<bool> {
        self.toggle_in_slot(Slot::Sword, catalog, key, console)
    }

    pub fn toggle_enable_suit<W: Write>(
        &mut self,
        catalog: &mut Catalog,
        key: &str,
        console: &mut Console<W>,
    ) -> EconomyResult<bool> {
        self.toggle_in_slot(Slot::Suit, catalog, key, console)
    }

    fn toggle_in_slot<W: Write>(
        &mut self,
        slot: Slot,
        catalog: &mut Catalog,
        key: &str,
        console: &mut Console<W>,
    ) -> EconomyResult<bool> {
        let item = catalog.get_in_slot(key, slot)?.info();
        if !item.is_enable && !item.is_owned {
            console.log(Color::Red, "[ FAILED ] Not bought yet!")?;
            return Err(EconomyError::NotOwned(item.label.clone()));
        }

        let enabled = !item.is_enable;
        catalog.info_mut(key)?.is_enable = enabled;

        let current = match slot {
            Slot::Sword => &mut self.sword,
            Slot::Suit => &mut self.suit,
        };
        if enabled {
            if let Some(previous) = current.replace(key.to_string()) {
                if previous != key {
                    if let Ok(prev) = catalog.info_mut(&previous) {
                        prev.is_enable = false;
                    }
                }
            }
            info!("Equipped {} as {}", escape_log(key), slot);
        } else if current.as_deref() == Some(key) {
            *current = None;
            info!("Unequipped {}; {} slot is empty", escape_log(key), slot);
        }
        Ok(enabled)
    }

    pub fn owned_items_count(catalog: &Catalog) -> usize {
        let count = catalog.owned_count();
        debug!("{} of {} catalog items owned", count, catalog.len());
        count
    }

    pub fn owned_items(catalog: &Catalog) -> impl Iterator<Item = &Equipment> {
        catalog.owned().map(|(_, item)| item)
    }
}
