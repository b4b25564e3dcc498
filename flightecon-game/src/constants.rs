//! Centralized economy and tuning constants for flightecon route math.
//!
//! These values reproduce the game economy. Keeping them together ensures
//! that pricing or thresholds can only be adjusted via reviewed code
//! changes rather than through external data files.

// Route gates ----------------------------------------------------------------
pub(crate) const MIN_ROUTE_DISTANCE: f64 = 100.0;
pub(crate) const REDUCED_CONTRIBUTION_DISTANCE: f64 = 1_000.0;
pub(crate) const MAX_RANGE_MULTIPLIER: f64 = 2.0;

// Speed ----------------------------------------------------------------------
pub(crate) const EASY_SPEED_MULTIPLIER: f64 = 1.5;
pub(crate) const REALISM_SPEED_MULTIPLIER: f64 = 1.0;

// Pax ticket pricing: price = trunc(slope * distance + intercept) -------------
pub(crate) const PAX_EASY_Y: (f64, f64) = (0.44, 185.0);
pub(crate) const PAX_EASY_J: (f64, f64) = (0.864, 602.8);
pub(crate) const PAX_EASY_F: (f64, f64) = (1.272, 1_270.0);
pub(crate) const PAX_REALISM_Y: (f64, f64) = (0.33, 163.0);
pub(crate) const PAX_REALISM_J: (f64, f64) = (0.648, 538.0);
pub(crate) const PAX_REALISM_F: (f64, f64) = (0.954, 1_058.0);

// Cargo ticket pricing: price = floor(slope * distance + intercept) / 100 ----
pub(crate) const CARGO_EASY_L: (f64, f64) = (0.094_828_372_458_125_2, 85.204_543_264_237_7);
pub(crate) const CARGO_EASY_H: (f64, f64) = (0.068_966_357_764_027_5, 28.298_112_427_289_3);
pub(crate) const CARGO_REALISM_L: (f64, f64) = (0.077_632_182_203_937_4, 85.056_760_036_780_7);
pub(crate) const CARGO_REALISM_H: (f64, f64) = (0.051_774_279_940_924_8, 24.636_991_539_641_4);

// VIP ticket pricing: price = trunc(markup * VIP_BASE_MULTIPLIER * (slope * d + intercept)) - 2
pub(crate) const VIP_BASE_MULTIPLIER: f64 = 1.7489;
pub(crate) const VIP_Y: (f64, f64, f64) = (1.22, 0.4, 170.0);
pub(crate) const VIP_J: (f64, f64, f64) = (1.20, 0.8, 560.0);
pub(crate) const VIP_F: (f64, f64, f64) = (1.17, 1.2, 1_200.0);
pub(crate) const VIP_DISCOUNT: u32 = 2;

// Pax allocation thresholds (km) ---------------------------------------------
pub(crate) const EASY_FJY_BELOW: f64 = 14_425.0;
pub(crate) const EASY_FYJ_BELOW: f64 = 14_812.5;
pub(crate) const EASY_YFJ_BELOW: f64 = 15_200.0;
pub(crate) const REALISM_FJY_BELOW: f64 = 13_888.888_8;
pub(crate) const REALISM_JFY_BELOW: f64 = 15_694.444_4;
pub(crate) const REALISM_JYF_BELOW: f64 = 17_500.0;

// Cargo ----------------------------------------------------------------------
/// Large cargo occupies more room per unit of weight than heavy cargo.
pub(crate) const CARGO_L_SPACE_FACTOR: f64 = 0.7;
pub(crate) const CARGO_L_LBS_PER_Y_PAX: f64 = 1_000.0;
pub(crate) const CARGO_H_LBS_PER_J_PAX: f64 = 1_000.0;
pub(crate) const CARGO_CO2_L_DIVISOR: f64 = 1_000.0;
pub(crate) const CARGO_CO2_H_DIVISOR: f64 = 500.0;

// Costs ----------------------------------------------------------------------
pub(crate) const MODIFICATION_FACTOR: f64 = 0.9;
pub(crate) const FUEL_CI_DIVISOR: f64 = 500.0;
pub(crate) const FUEL_CI_BASE: f64 = 0.6;
pub(crate) const CO2_CI_DIVISOR: f64 = 2_000.0;
pub(crate) const CO2_CI_BASE: f64 = 0.9;
pub(crate) const REPAIR_COST_FRACTION: f64 = 0.0075;
pub(crate) const UNIT_PRICE_DIVISOR: f64 = 1_000.0;

// Load estimation ------------------------------------------------------------
pub(crate) const LOAD_AUTOPRICE_STOPOVER: f64 = 0.008_585_5;
pub(crate) const LOAD_AUTOPRICE_DIRECT: f64 = 0.009_043_5;
pub(crate) const LOAD_MANUAL_STOPOVER: f64 = 0.009_031_2;
pub(crate) const LOAD_MANUAL_DIRECT: f64 = 0.009_526_5;

// Reference optimizer --------------------------------------------------------
pub(crate) const REFERENCE_LOAD_COEFFICIENT: f64 = 0.009_089_716_043_24;
pub(crate) const MAX_PLANES_PER_ROUTE: u32 = 20;
pub(crate) const CARGO_SWEEP_STEPS: u32 = 100;

// Settings caps --------------------------------------------------------------
pub(crate) const MAX_FUEL_TRAINING: u8 = 3;
pub(crate) const MAX_CO2_TRAINING: u8 = 5;
pub(crate) const MAX_CARGO_TRAINING_PCT: u8 = 6;
pub(crate) const MAX_WEAR_TRAINING: u8 = 5;
pub(crate) const MAX_FUEL_PRICE: f64 = 3_000.0;
pub(crate) const MAX_CO2_PRICE: f64 = 200.0;
pub(crate) const MAX_COST_INDEX: u8 = 200;
