use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::LedgerError;
use crate::events::RewardsReclaimed;
use crate::state::*;
use crate::utils::{authorize, Capability};

#[derive(Accounts)]
pub struct ReclaimStaleRewards<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [POOL],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,

    #[account(
        mut,
        has_one = pool @ LedgerError::PoolMismatch,
    )]
    pub server: Account<'info, Server>,
}

/// Releases an idle server's pending rewards. The lamports never left the
/// pool, so only the obligation is dropped.
pub fn handler(ctx: Context<ReclaimStaleRewards>) -> Result<()> {
    authorize(
        Capability::PoolAuthority,
        &ctx.accounts.authority.key(),
        &ctx.accounts.pool,
        None,
    )?;

    let clock = Clock::get()?;
    let pool = &mut ctx.accounts.pool;
    let server = &mut ctx.accounts.server;

    let amount = server.reclaim_stale(&clock, pool)?;

    emit!(RewardsReclaimed {
        server_id: server.id.clone(),
        amount,
    });

    msg!("Reclaimed {} stale lamports from {}", amount, server.id);

    Ok(())
}
