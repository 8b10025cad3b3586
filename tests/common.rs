//! Shared fixtures for the integration tests.

use catshop::economy::{
    Catalog, Equipment, ItemInfo, PlayerInfo, Suit, SuitKind, Sword, SwordKind,
};

/// The demo player: level 5, 175 000 coin, 500 gem, full health.
#[allow(dead_code)]
pub fn demo_player() -> PlayerInfo {
    PlayerInfo::new(5, 175_000.0, 500.0, 100)
}

/// A sword record with the given item state.
#[allow(dead_code)]
pub fn sword(info: ItemInfo) -> Equipment {
    Equipment::Sword(Sword {
        kind: SwordKind::Snake,
        power: 15.0,
        speed: 12.0,
        per_attack_ms: 1000,
        info,
    })
}

/// A suit record with the given item state.
#[allow(dead_code)]
pub fn suit(info: ItemInfo) -> Equipment {
    Equipment::Suit(Suit {
        kind: SuitKind::Ninja,
        strength: 20.0,
        info,
    })
}

/// Built-in catalog plus a second owned sword, `spare_sword`.
#[allow(dead_code)]
pub fn catalog_with_spare_sword() -> Catalog {
    let mut catalog = Catalog::builtin();
    catalog.insert("spare_sword", sword(ItemInfo::starter("spare_sword")));
    catalog
}
