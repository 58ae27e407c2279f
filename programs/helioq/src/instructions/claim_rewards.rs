use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::LedgerError;
use crate::events::RewardsClaimed;
use crate::state::*;
use crate::utils::{authorize, transfer_lamports_safe, Capability};

#[derive(Accounts)]
pub struct ClaimRewards<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

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

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<ClaimRewards>) -> Result<()> {
    authorize(
        Capability::ServerOwner,
        &ctx.accounts.owner.key(),
        &ctx.accounts.pool,
        Some(&*ctx.accounts.server),
    )?;

    let clock = Clock::get()?;
    let pool = &mut ctx.accounts.pool;
    let server = &mut ctx.accounts.server;

    // Ledger is settled before lamports leave the pool
    let amount = server.claim(&clock, pool)?;

    transfer_lamports_safe(
        &pool.to_account_info(),
        &ctx.accounts.owner.to_account_info(),
        amount,
    )?;

    emit!(RewardsClaimed {
        server_id: server.id.clone(),
        wallet_address: ctx.accounts.owner.key(),
        reward_amount: amount,
        pool_balance: pool.reward_pool,
        timestamp: clock.unix_timestamp,
    });

    msg!("Claimed {} lamports ({:.4} SOL) for {}", amount, amount as f64 / ONE_SOL as f64, server.id);

    Ok(())
}
