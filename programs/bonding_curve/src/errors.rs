//! Error taxonomy for the bonding curve program.
//!
//! Every instruction is fail-atomic: on any of these errors the transaction
//! is rolled back and persisted state is left untouched.

use anchor_lang::prelude::*;

#[error_code]
pub enum CurveError {
    #[msg("Configuration already initialized")]
    AlreadyInitialized,

    #[msg("Caller is not the configuration admin")]
    Unauthorized,

    #[msg("Fee rate out of bounds (max 10000 basis points)")]
    InvalidFeeRate,

    #[msg("A token with this identifier already exists for this creator")]
    DuplicateToken,

    #[msg("Pool already exists for this token pair")]
    PoolAlreadyExists,

    #[msg("Pool has no liquidity on one or both sides")]
    ZeroLiquidity,

    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    #[msg("Deposit does not match the current reserve ratio")]
    RatioMismatch,

    #[msg("Insufficient liquidity shares")]
    InsufficientShares,

    #[msg("Insufficient funds for transfer")]
    InsufficientFunds,

    #[msg("Trade too small to produce any output")]
    InsufficientOutput,

    #[msg("Output below the caller's minimum")]
    SlippageExceeded,

    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,

    #[msg("Arithmetic underflow")]
    ArithmeticUnderflow,

    #[msg("Division by zero")]
    DivisionByZero,

    #[msg("Protocol is paused")]
    ProtocolPaused,
}
