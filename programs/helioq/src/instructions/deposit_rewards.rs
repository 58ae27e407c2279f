use anchor_lang::prelude::*;
use crate::constants::*;
use crate::events::RewardsDeposited;
use crate::state::*;
use crate::utils::{authorize, transfer_sol_cpi, Capability};

#[derive(Accounts)]
pub struct DepositRewards<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [POOL],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<DepositRewards>, amount: u64) -> Result<()> {
    authorize(
        Capability::PoolAuthority,
        &ctx.accounts.authority.key(),
        &ctx.accounts.pool,
        None,
    )?;

    let new_balance = ctx.accounts.pool.deposit(amount)?;

    // Credit and transfer commit together or not at all
    transfer_sol_cpi(
        ctx.accounts.authority.to_account_info(),
        ctx.accounts.pool.to_account_info(),
        ctx.accounts.system_program.to_account_info(),
        amount,
    )?;

    emit!(RewardsDeposited {
        amount,
        new_balance,
    });

    msg!("Deposited {} lamports ({:.4} SOL)", amount, amount as f64 / ONE_SOL as f64);

    Ok(())
}
