//! Instruction handlers for the bonding curve program
//!
//! - `initialize` / `update_configuration` - fee policy (admin only)
//! - `create_token` - deterministic mint with genesis supply
//! - `create_pool` - empty per-pair reserve ledger
//! - `add_liquidity` / `remove_liquidity` - provider share accounting
//! - `buy` / `sell` - constant-product trades
//! - `quotes` - view-only pricing

pub mod add_liquidity;
pub mod buy;
pub mod create_pool;
pub mod create_token;
pub mod initialize;
pub mod quotes;
pub mod remove_liquidity;
pub mod sell;

pub use add_liquidity::*;
pub use buy::*;
pub use create_pool::*;
pub use create_token::*;
pub use initialize::*;
pub use quotes::*;
pub use remove_liquidity::*;
pub use sell::*;
