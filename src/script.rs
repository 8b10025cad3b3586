//! The demo run: one cat, one shopping trip, one attack.

use log::info;
use std::io::Write;

use crate::config::Config;
use crate::economy::{Cat, EconomyResult, Purchase};
use crate::logutil::{escape_log, Color, Console};

/// Final state reported by [`run_demo`].
#[derive(Debug, Clone, PartialEq)]
pub struct DemoOutcome {
    pub coin: f64,
    pub gem: f64,
    pub health: u32,
    pub purchase: Purchase,
    pub owned_items: usize,
    pub attack_line: String,
}

/// Run the fixed sequence: create the cat, convert every gem to coin, buy
/// the configured item, equip it, print the wallet and attack.
///
/// The first failure aborts the run.
pub fn run_demo<W: Write>(config: &Config, console: &mut Console<W>) -> EconomyResult<DemoOutcome> {
    let mut catalog = config.items.clone();
    let loadout = &config.loadout;

    let mut cat = Cat::new(
        config.player_info(),
        &loadout.suit,
        &loadout.sword,
        &mut catalog,
        console,
    )?;

    let converted = cat.info.convert_all_gem(console)?;
    info!("Converted all gem into {} coin", converted);

    let purchase = cat.buy(&mut catalog, &loadout.purchase, console)?;
    if let Purchase::Bought { .. } = purchase {
        let label = catalog.get(&loadout.purchase)?.label().to_string();
        console.log(Color::Green, &format!("[ OK ] bought {}", label))?;
    }

    // Toggling an already-equipped item would take it off again.
    if !catalog.get(&loadout.purchase)?.info().is_enable {
        cat.toggle_enable(&mut catalog, &loadout.purchase, console)?;
    }

    console.line(&format!("coin = {:?}", cat.info.coin))?;
    console.line(&format!("gem = {:?}", cat.info.gem))?;

    let attack_line = cat.attack(&catalog, console)?;
    let owned_items = Cat::owned_items_count(&catalog);
    info!(
        "Run finished with {} owned items, attack: {}",
        owned_items,
        escape_log(&attack_line)
    );

    Ok(DemoOutcome {
        coin: cat.info.coin,
        gem: cat.info.gem,
        health: cat.info.health,
        purchase,
        owned_items,
        attack_line,
    })
}
