use anchor_lang::prelude::*;
use crate::constants::*;
use crate::events::PauseToggled;
use crate::state::*;
use crate::utils::{authorize, Capability};

#[derive(Accounts)]
pub struct SetPaused<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [POOL],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
}

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct SetPausedArgs {
    pub paused: bool,
}

pub fn handler(ctx: Context<SetPaused>, args: SetPausedArgs) -> Result<()> {
    authorize(
        Capability::PoolAuthority,
        &ctx.accounts.authority.key(),
        &ctx.accounts.pool,
        None,
    )?;

    ctx.accounts.pool.paused = args.paused;

    emit!(PauseToggled {
        paused: args.paused,
    });

    Ok(())
}
