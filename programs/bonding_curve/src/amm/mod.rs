//! # Automated Market Maker core
//!
//! The deterministic accounting engine behind every instruction:
//!
//! - [`math`] — checked `u64` arithmetic with `u128` intermediates
//! - [`curve`] — constant-product buy/sell quoting with fee-on-input
//! - [`liquidity`] — provider share minting and proportional settlement
//!
//! Every function here is a pure mapping from integers to integers. The
//! Solana runtime serializes instructions that touch the same accounts, so
//! the engine needs no locking of its own, and unit tests exercise it
//! without a test validator.

pub mod curve;
pub mod liquidity;
pub mod math;

pub use curve::*;
pub use liquidity::*;
