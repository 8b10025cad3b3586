//! Loading, writing and validating configuration files.

use catshop::config::Config;
use catshop::economy::{Slot, SwordKind};
use catshop::logutil::ColorMode;
use tempfile::tempdir;

#[test]
fn test_default_config_file_reloads_identically() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("catshop.toml");

    Config::create_default(&path).unwrap();
    let loaded = Config::load(&path).unwrap();

    assert_eq!(loaded, Config::default());
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    let config = Config::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());

    assert!(Config::load(dir.path().join("absent.toml")).is_err());
}

#[test]
fn test_write_default_keeps_existing_file_unless_forced() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("catshop.toml");

    Config::write_default(&path, false).unwrap();
    assert_eq!(Config::load(&path).unwrap(), Config::default());

    std::fs::write(&path, "[player]\nlevel = 1\n").unwrap();
    let err = Config::write_default(&path, false).unwrap_err();
    assert!(err.to_string().contains("already exists"));
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "[player]\nlevel = 1\n"
    );

    Config::write_default(&path, true).unwrap();
    assert_eq!(Config::load(&path).unwrap(), Config::default());
}

#[test]
fn test_custom_catalog_and_console() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("catshop.toml");
    std::fs::write(
        &path,
        r#"
[player]
level = 1
coin = 0.0
gem = 2.0
health = 50

[loadout]
suit = "rags"
sword = "stick"
purchase = "fang"

[console]
color = "never"

[logging]
level = "debug"
file = "catshop.log"

[items.rags]
slot = "suit"
kind = "ninja"
strength = 1.0

[items.rags.info]
price = 0.0
is_owned = true
is_locked = false
label = "rags"

[items.stick]
slot = "sword"
kind = "ninja"
power = 1.0
speed = 1.0
per_attack_ms = 500

[items.stick.info]
price = 0.0
is_owned = true
is_locked = false
is_enable = true
label = "stick"

[items.fang]
slot = "sword"
kind = "snake"
power = 3.0
speed = 2.0
per_attack_ms = 800

[items.fang.info]
price = 100.0
is_owned = false
is_locked = true
need_level_to_buy = 1
label = "fang"
"#,
    )
    .unwrap();

    let config = Config::load(&path).unwrap();

    assert_eq!(config.console.color, ColorMode::Never);
    assert_eq!(config.logging.file.as_deref(), Some("catshop.log"));
    assert_eq!(config.items.len(), 3);
    let fang = config.items.sword("fang").unwrap();
    assert_eq!(fang.kind, SwordKind::Snake);
    assert_eq!(fang.info.need_level_to_buy, 1);
    assert_eq!(config.items.get("rags").unwrap().slot(), Slot::Suit);
}

#[test]
fn test_loadout_must_resolve_in_catalog() {
    let err = Config::from_toml(
        r#"
[player]
level = 5
coin = 0.0
gem = 0.0
health = 100

[loadout]
suit = "ninja_suit"
sword = "ninja_sword"
purchase = "golden_sword"
"#,
    )
    .unwrap_err();

    assert!(err.to_string().contains("golden_sword"));
}

#[test]
fn test_malformed_file_reports_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "[player\nlevel = ").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(err.to_string().contains("broken.toml"));
}
