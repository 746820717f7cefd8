//! Deployment-wide constants.

/// Basis-point denominator used for every fee computation.
pub const FEE_DENOMINATOR: u64 = 10_000;

/// Decimals for every mint created through `create_token`.
pub const TOKEN_DECIMALS: u8 = 9;

/// Genesis supply minted to the creator, in whole tokens.
pub const GENESIS_SUPPLY: u64 = 1_000_000_000;
