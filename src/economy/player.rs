//! Player economy state and the gem exchange.

use log::{debug, warn};
use std::io::Write;

use super::errors::{EconomyError, EconomyResult};
use super::types::Currency;
use crate::logutil::{Color, Console};

/// Coin received per gem.
pub const GEM_COIN_TRADE: f64 = 50.0;

/// Below this health the player should stop fighting.
pub const HELP_HEALTH_THRESHOLD: u32 = 20;

/// Mutable economic and health state of a player.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerInfo {
    pub level: u32,
    pub coin: f64,
    pub gem: f64,
    /// Percent, 0-100 by convention; not clamped.
    pub health: u32,
    converted_coin: f64,
}

impl PlayerInfo {
    pub fn new(level: u32, coin: f64, gem: f64, health: u32) -> Self {
        Self {
            level,
            coin,
            gem,
            health,
            converted_coin: 0.0,
        }
    }

    pub fn is_need_help(&self) -> bool {
        self.health < HELP_HEALTH_THRESHOLD
    }

    /// Coin produced by the most recent successful conversion.
    pub fn converted_coin(&self) -> f64 {
        self.converted_coin
    }

    pub fn can_afford(&self, price: f64) -> bool {
        price <= self.coin
    }

    /// Trade `amount` gem for `amount × GEM_COIN_TRADE` coin.
    ///
    /// Nothing changes on failure; gem is checked before it is debited.
    pub fn convert_gem_to_coin<W: Write>(
        &mut self,
        amount: f64,
        console: &mut Console<W>,
    ) -> EconomyResult<f64> {
        if !amount.is_finite() || amount < 0.0 {
            console.log(Color::Red, "[ FAILED ]")?;
            return Err(EconomyError::InvalidArgument(format!(
                "gem amount must be a non-negative number, got {}",
                amount
            )));
        }
        if self.gem < amount {
            console.log(Color::Red, "[ FAILED ]")?;
            warn!("Gem conversion refused: need {}, have {}", amount, self.gem);
            return Err(EconomyError::InsufficientFunds {
                currency: Currency::Gem,
                needed: amount,
                available: self.gem,
            });
        }

        self.gem -= amount;
        self.converted_coin = amount * GEM_COIN_TRADE;
        self.coin += self.converted_coin;
        debug!(
            "Converted {} gem into {} coin (coin now {})",
            amount, self.converted_coin, self.coin
        );
        Ok(self.converted_coin)
    }

    /// Convert the whole gem balance.
    pub fn convert_all_gem<W: Write>(&mut self, console: &mut Console<W>) -> EconomyResult<f64> {
        let all = self.gem;
        self.convert_gem_to_coin(all, console)
    }
}
