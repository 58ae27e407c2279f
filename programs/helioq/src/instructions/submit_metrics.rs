use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::LedgerError;
use crate::events::MetricsUpdated;
use crate::state::*;
use crate::utils::{authorize, Capability};

#[derive(Accounts)]
pub struct SubmitMetrics<'info> {
    pub signer: Signer<'info>,

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

pub fn handler(
    ctx: Context<SubmitMetrics>,
    uptime: u8,
    tasks_completed: u64,
    points: u64,
) -> Result<()> {
    authorize(
        Capability::ServerOperator,
        &ctx.accounts.signer.key(),
        &ctx.accounts.pool,
        Some(&*ctx.accounts.server),
    )?;

    let clock = Clock::get()?;
    let pool = &mut ctx.accounts.pool;
    let server = &mut ctx.accounts.server;

    let pending_rewards = server.accrue(uptime, tasks_completed, points, &clock, pool)?;

    emit!(MetricsUpdated {
        server_id: server.id.clone(),
        uptime,
        tasks_completed,
        points,
        pending_rewards,
        timestamp: clock.unix_timestamp,
    });

    if !pool.is_solvent() {
        msg!("Pool is short {} lamports of pending rewards", pool.shortfall());
    }

    Ok(())
}
