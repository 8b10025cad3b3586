//! # Catshop - a tiny in-game economy
//!
//! A cat owns equipment (swords and suits) bought from a shop with two
//! currencies. Coin is spent directly; gem has to be converted first, at
//! [`economy::GEM_COIN_TRADE`] coin per gem.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use catshop::config::Config;
//! use catshop::logutil::{ColorMode, Console};
//! use catshop::script::run_demo;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::load_or_default("catshop.toml")?;
//!     let mut console = Console::stdout(ColorMode::Auto);
//!     let outcome = run_demo(&config, &mut console)?;
//!     assert_eq!(outcome.gem, 0.0);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`economy`] - items, catalog, player wallet, shop and the cat actor
//! - [`script`] - the fixed demo run
//! - [`config`] - TOML configuration and validation
//! - [`logutil`] - colored console lines and log sanitizing

pub mod config;
pub mod economy;
pub mod logutil;
pub mod script;
