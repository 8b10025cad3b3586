//! Shop purchase rules: idempotence, level unlock and coin gating.

use catshop::economy::{
    Catalog, Currency, EconomyError, ItemInfo, PlayerInfo, Purchase, Shop, SNAKE_SWORD,
};
use catshop::logutil::Console;

#[test]
fn test_buying_owned_item_twice_charges_once() {
    let mut catalog = Catalog::builtin();
    let mut player = PlayerInfo::new(5, 200_000.0, 0.0, 100);
    let mut console = Console::buffer();

    let first = Shop::buy(&mut catalog, SNAKE_SWORD, &mut player, &mut console).unwrap();
    assert_eq!(first, Purchase::Bought { price: 200_000.0 });
    assert_eq!(player.coin, 0.0);

    player.coin = 500_000.0;
    let second = Shop::buy(&mut catalog, SNAKE_SWORD, &mut player, &mut console).unwrap();
    assert_eq!(second, Purchase::AlreadyOwned);
    assert_eq!(player.coin, 500_000.0);
    assert!(console.output().is_empty());
}

#[test]
fn test_owned_item_skips_every_check() {
    // Owned but still flagged locked and priced out of reach: still a no-op
    let mut item = ItemInfo {
        is_owned: true,
        ..ItemInfo::for_sale("relic", 1_000_000.0, 99)
    };
    let mut player = PlayerInfo::new(1, 0.0, 0.0, 100);
    let mut console = Console::buffer();

    let outcome = Shop::buy_item(&mut item, &mut player, &mut console).unwrap();
    assert_eq!(outcome, Purchase::AlreadyOwned);
    assert!(item.is_locked);
}

#[test]
fn test_unaffordable_item_stays_unowned() {
    let mut catalog = Catalog::builtin();
    let mut player = PlayerInfo::new(5, 175_000.0, 500.0, 100);
    let mut console = Console::buffer();

    let err = Shop::buy(&mut catalog, SNAKE_SWORD, &mut player, &mut console).unwrap_err();

    assert!(matches!(
        err,
        EconomyError::InsufficientFunds {
            currency: Currency::Coin,
            ..
        }
    ));
    let info = catalog.get(SNAKE_SWORD).unwrap().info();
    assert!(!info.is_owned);
    assert_eq!(player.coin, 175_000.0);
    assert_eq!(console.output(), "[ FAILED ]\n");
}

#[test]
fn test_level_too_low_is_locked() {
    let mut catalog = Catalog::builtin();
    let mut player = PlayerInfo::new(2, 1_000_000.0, 0.0, 100);
    let mut console = Console::buffer();

    let err = Shop::buy(&mut catalog, SNAKE_SWORD, &mut player, &mut console).unwrap_err();

    assert!(matches!(err, EconomyError::LockedItem { required_level: 3 }));
    assert_eq!(err.to_string(), "locked! need level 3 and above");
    let info = catalog.get(SNAKE_SWORD).unwrap().info();
    assert!(info.is_locked);
    assert!(!info.is_owned);
    assert_eq!(player.coin, 1_000_000.0);
    assert_eq!(console.output(), "[ FAILED ]\n");
}

#[test]
fn test_locked_failure_is_red_on_colored_console() {
    let mut item = ItemInfo::for_sale("relic", 10.0, 9);
    let mut player = PlayerInfo::new(1, 100.0, 0.0, 100);
    let mut console = Console::new(Vec::new(), true);

    let err = Shop::buy_item(&mut item, &mut player, &mut console).unwrap_err();

    assert!(matches!(err, EconomyError::LockedItem { required_level: 9 }));
    let out = String::from_utf8(console.into_inner()).unwrap();
    assert_eq!(out, "\x1b[1;31m[ FAILED ]\x1b[0m\n");
}

#[test]
fn test_unlock_persists_when_purchase_fails_on_price() {
    let mut catalog = Catalog::builtin();
    let mut player = PlayerInfo::new(3, 10.0, 0.0, 100);
    let mut console = Console::buffer();

    let err = Shop::buy(&mut catalog, SNAKE_SWORD, &mut player, &mut console).unwrap_err();
    assert!(matches!(err, EconomyError::InsufficientFunds { .. }));

    let info = catalog.get(SNAKE_SWORD).unwrap().info();
    assert!(!info.is_locked, "level requirement met, unlock must stick");
    assert!(!info.is_owned);

    // Once unlocked, a lower-level player no longer hits the lock
    let mut rookie = PlayerInfo::new(0, 10.0, 0.0, 100);
    let err = Shop::buy(&mut catalog, SNAKE_SWORD, &mut rookie, &mut console).unwrap_err();
    assert!(matches!(err, EconomyError::InsufficientFunds { .. }));
}

#[test]
fn test_exact_coin_is_enough() {
    let mut item = ItemInfo::for_sale("cape", 150.0, 0);
    let mut player = PlayerInfo::new(0, 150.0, 0.0, 100);
    let mut console = Console::buffer();

    let outcome = Shop::buy_item(&mut item, &mut player, &mut console).unwrap();

    assert_eq!(outcome, Purchase::Bought { price: 150.0 });
    assert!(item.is_owned);
    assert!(!item.is_locked);
    assert_eq!(player.coin, 0.0);
}
