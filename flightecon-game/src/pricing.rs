//! Optimal ticket prices as linear functions of route distance.
use serde::{Deserialize, Serialize};

use crate::constants::{
    CARGO_EASY_H, CARGO_EASY_L, CARGO_REALISM_H, CARGO_REALISM_L, PAX_EASY_F, PAX_EASY_J,
    PAX_EASY_Y, PAX_REALISM_F, PAX_REALISM_J, PAX_REALISM_Y, VIP_BASE_MULTIPLIER, VIP_DISCOUNT,
    VIP_F, VIP_J, VIP_Y,
};
use crate::numbers::{floor_cents, trunc_f64_to_u32};
use crate::settings::GameMode;

/// Passenger ticket prices in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PaxTicket {
    pub y: u32,
    pub j: u32,
    pub f: u32,
}

impl PaxTicket {
    #[must_use]
    pub fn from_optimal(distance: f64, mode: GameMode) -> Self {
        let (y, j, f) = match mode {
            GameMode::Easy => (PAX_EASY_Y, PAX_EASY_J, PAX_EASY_F),
            GameMode::Realism => (PAX_REALISM_Y, PAX_REALISM_J, PAX_REALISM_F),
        };
        Self {
            y: linear_price(y, distance),
            j: linear_price(j, distance),
            f: linear_price(f, distance),
        }
    }

    /// VIP cabins sell the same three classes at a mode-independent premium.
    #[must_use]
    pub fn vip_from_optimal(distance: f64) -> Self {
        Self {
            y: vip_price(VIP_Y, distance),
            j: vip_price(VIP_J, distance),
            f: vip_price(VIP_F, distance),
        }
    }
}

/// Cargo prices per lb, floored to the cent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct CargoTicket {
    pub l: f64,
    pub h: f64,
}

impl CargoTicket {
    #[must_use]
    pub fn from_optimal(distance: f64, mode: GameMode) -> Self {
        let (l, h) = match mode {
            GameMode::Easy => (CARGO_EASY_L, CARGO_EASY_H),
            GameMode::Realism => (CARGO_REALISM_L, CARGO_REALISM_H),
        };
        Self {
            l: floor_cents(l.0 * distance + l.1),
            h: floor_cents(h.0 * distance + h.1),
        }
    }
}

/// Ticket prices for whichever cabin layout the aircraft carries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ticket {
    Pax(PaxTicket),
    Cargo(CargoTicket),
    Vip(PaxTicket),
}

fn linear_price((slope, intercept): (f64, f64), distance: f64) -> u32 {
    trunc_f64_to_u32(slope * distance + intercept)
}

fn vip_price((markup, slope, intercept): (f64, f64, f64), distance: f64) -> u32 {
    trunc_f64_to_u32(markup * VIP_BASE_MULTIPLIER * (slope * distance + intercept))
        .saturating_sub(VIP_DISCOUNT)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EQUATOR_10_DEG: f64 = 1_111.949_266_445_587_2;

    #[test]
    fn easy_pax_prices_truncate() {
        let ticket = PaxTicket::from_optimal(EQUATOR_10_DEG, GameMode::Easy);
        assert_eq!(ticket, PaxTicket { y: 674, j: 1563, f: 2684 });
    }

    #[test]
    fn realism_pax_prices_are_lower() {
        let easy = PaxTicket::from_optimal(5_000.0, GameMode::Easy);
        let realism = PaxTicket::from_optimal(5_000.0, GameMode::Realism);
        assert_eq!(realism, PaxTicket { y: 1813, j: 3778, f: 5828 });
        assert!(realism.y < easy.y && realism.j < easy.j && realism.f < easy.f);
    }

    #[test]
    fn cargo_prices_floor_to_cents() {
        let ticket = CargoTicket::from_optimal(1_000.0, GameMode::Easy);
        assert!((ticket.l - 1.80).abs() < 1e-9, "l = {}", ticket.l);
        assert!((ticket.h - 0.97).abs() < 1e-9, "h = {}", ticket.h);
    }

    #[test]
    fn vip_prices_carry_premium() {
        let vip = PaxTicket::vip_from_optimal(EQUATOR_10_DEG);
        let pax = PaxTicket::from_optimal(EQUATOR_10_DEG, GameMode::Easy);
        assert_eq!(vip.y, 1309);
        assert!(vip.j > pax.j && vip.f > pax.f);
    }
}
