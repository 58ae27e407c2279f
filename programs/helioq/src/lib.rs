use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;


use instructions::*;

declare_id!("4jpGDc9FUDqn3tEL5e7LXt2ek9TqhDbe8GEeczzvupW3");

#[program]
pub mod helioq {
    use super::*;

    // ===== INITIALIZATION =====

    /// Create the reward pool; the signer becomes its authority
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::handler(ctx)
    }

    // ===== SERVER INSTRUCTIONS =====

    /// Register a server under a unique id
    /// The owner defaults to the signer
    pub fn register_server(
        ctx: Context<RegisterServer>,
        server_id: String,
        owner: Option<Pubkey>,
    ) -> Result<()> {
        instructions::register_server::handler(ctx, server_id, owner)
    }

    /// Report server metrics and accrue rewards
    pub fn submit_metrics(
        ctx: Context<SubmitMetrics>,
        uptime: u8,
        tasks_completed: u64,
        points: u64,
    ) -> Result<()> {
        instructions::submit_metrics::handler(ctx, uptime, tasks_completed, points)
    }

    /// Pay out pending rewards to the server owner
    pub fn claim_rewards(ctx: Context<ClaimRewards>) -> Result<()> {
        instructions::claim_rewards::handler(ctx)
    }

    /// Stop accepting metrics for a server
    pub fn deactivate_server(ctx: Context<DeactivateServer>) -> Result<()> {
        instructions::deactivate_server::handler(ctx)
    }

    // ===== POOL INSTRUCTIONS =====

    /// Fund the reward pool
    pub fn deposit_rewards(ctx: Context<DepositRewards>, amount: u64) -> Result<()> {
        instructions::deposit_rewards::handler(ctx, amount)
    }

    /// Move an active server to a new owner
    pub fn reassign_server(ctx: Context<ReassignServer>) -> Result<()> {
        instructions::reassign_server::handler(ctx)
    }

    /// Release pending rewards of a server that went idle
    pub fn reclaim_stale_rewards(ctx: Context<ReclaimStaleRewards>) -> Result<()> {
        instructions::reclaim_stale_rewards::handler(ctx)
    }

    // ===== ADMIN INSTRUCTIONS =====

    /// Pause or resume the pool
    pub fn set_paused(ctx: Context<SetPaused>, args: SetPausedArgs) -> Result<()> {
        instructions::set_paused::handler(ctx, args)
    }

    /// Hand pool administration to a new authority
    pub fn set_authority(ctx: Context<SetAuthority>, args: SetAuthorityArgs) -> Result<()> {
        instructions::set_authority::handler(ctx, args)
    }

    /// Delegate metrics reporting for one server
    pub fn set_server_authority(
        ctx: Context<SetServerAuthority>,
        args: SetServerAuthorityArgs,
    ) -> Result<()> {
        instructions::set_server_authority::handler(ctx, args)
    }

    /// Update claim cooldown and stale reward period
    pub fn update_config(
        ctx: Context<UpdateConfig>,
        claim_cooldown: Option<i64>,
        stale_reward_period: Option<i64>,
    ) -> Result<()> {
        instructions::update_config::handler(ctx, claim_cooldown, stale_reward_period)
    }
}
