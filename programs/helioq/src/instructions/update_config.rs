use anchor_lang::prelude::*;
use crate::constants::*;
use crate::events::ConfigUpdated;
use crate::state::*;
use crate::utils::{authorize, Capability};

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [POOL],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
}

pub fn handler(
    ctx: Context<UpdateConfig>,
    claim_cooldown: Option<i64>,
    stale_reward_period: Option<i64>,
) -> Result<()> {
    authorize(
        Capability::PoolAuthority,
        &ctx.accounts.authority.key(),
        &ctx.accounts.pool,
        None,
    )?;

    let pool = &mut ctx.accounts.pool;
    pool.update_config(claim_cooldown, stale_reward_period)?;

    emit!(ConfigUpdated {
        claim_cooldown: pool.claim_cooldown,
        stale_reward_period: pool.stale_reward_period,
    });

    msg!("Pool config updated");

    Ok(())
}
