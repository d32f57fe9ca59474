pub mod projection;

pub use projection::{
    EstimateError, NetworkStats, Projection, StateKind, mine_projection, stake_projection,
};

/// Expected blocks per day (one block per minute on average).
pub const BLOCKS_PER_DAY: f64 = 720.0;

pub const DAYS_PER_WEEK: f64 = 7.0;

/// Average calendar year, leap days included.
pub const DAYS_PER_YEAR: f64 = 365.25;

pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Divisor applied per unit step when scaling hash rates.
pub const HASH_UNIT_STEP: f64 = 1024.0;
