//! Account state for the bonding curve program

pub mod config;
pub mod pool;

pub use config::*;
pub use pool::*;
