use anchor_lang::prelude::*;

/// Event emitted when a server is registered
#[event]
pub struct ServerRegistered {
    /// The server id
    pub server_id: String,

    /// The wallet entitled to the server's rewards
    pub wallet_address: Pubkey,

    /// Unix timestamp when event occurred
    pub timestamp: i64,
}

/// Event emitted alongside registration with the end of the grace period
#[event]
pub struct GracePeriodStarted {
    pub server_id: String,
    pub end_timestamp: i64,
}

/// Event emitted when metrics are accepted for a server
#[event]
pub struct MetricsUpdated {
    /// The server id
    pub server_id: String,

    /// Reported uptime percentage
    pub uptime: u8,

    /// Tasks completed in the reporting window
    pub tasks_completed: u64,

    /// Lamports accrued by this submission
    pub points: u64,

    /// Pending rewards after accrual
    pub pending_rewards: u64,

    /// Unix timestamp when event occurred
    pub timestamp: i64,
}

/// Event emitted when the pool authority funds the pool
#[event]
pub struct RewardsDeposited {
    /// Lamports deposited
    pub amount: u64,

    /// The pool balance after the deposit
    pub new_balance: u64,
}

/// Event emitted when a server owner claims pending rewards
#[event]
pub struct RewardsClaimed {
    /// The server id
    pub server_id: String,

    /// The wallet that received the lamports
    pub wallet_address: Pubkey,

    /// Lamports paid out
    pub reward_amount: u64,

    /// The pool balance after the payout
    pub pool_balance: u64,

    /// Unix timestamp when event occurred
    pub timestamp: i64,
}

/// Event emitted when idle pending rewards are released back to the pool
#[event]
pub struct RewardsReclaimed {
    pub server_id: String,
    pub amount: u64,
}

/// Event emitted when a server is deactivated
#[event]
pub struct ServerDeregistered {
    pub server_id: String,
}

/// Event emitted when a server changes owner
#[event]
pub struct ServerReassigned {
    pub server_id: String,
    pub old_owner: Pubkey,
    pub new_owner: Pubkey,
}

/// Event emitted when a server's metrics authority changes
#[event]
pub struct ServerAuthorityChanged {
    pub server_id: String,
    pub old_authority: Pubkey,
    pub new_authority: Pubkey,
}

/// Event emitted when the pool is paused or resumed
#[event]
pub struct PauseToggled {
    pub paused: bool,
}

/// Event emitted when pool administration is handed over
#[event]
pub struct AuthorityTransferred {
    pub old_authority: Pubkey,
    pub new_authority: Pubkey,
}

/// Event emitted when the timing configuration changes
#[event]
pub struct ConfigUpdated {
    pub claim_cooldown: i64,
    pub stale_reward_period: i64,
}
