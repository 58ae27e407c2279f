use anchor_lang::prelude::*;

#[error_code]
pub enum LedgerError {
    #[msg("Not authorized")]
    Unauthorized,

    #[msg("Pool is already initialized")]
    AlreadyInitialized,

    #[msg("A server with this id is already registered")]
    DuplicateServerId,

    #[msg("Server id must be 1-32 printable ASCII characters")]
    InvalidId,

    #[msg("Server is not active")]
    ServerInactive,

    #[msg("Invalid uptime percentage")]
    InvalidMetric,

    #[msg("Invalid amount")]
    InvalidAmount,

    #[msg("Lamport transfer failed")]
    TransferFailed,

    #[msg("No pending rewards to claim")]
    NothingToClaim,

    #[msg("Claim cooldown period active")]
    ClaimCooldownActive,

    #[msg("Insufficient reward pool balance")]
    InsufficientPoolFunds,

    #[msg("Program is paused")]
    ProgramPaused,

    #[msg("Rewards are not stale yet")]
    RewardsNotStale,

    #[msg("Server belongs to a different pool")]
    PoolMismatch,

    #[msg("Invalid configuration value")]
    InvalidConfig,

    #[msg("Arithmetic overflow")]
    Overflow,

    #[msg("Arithmetic underflow")]
    Underflow,
}
