use anchor_lang::prelude::*;
use crate::constants::*;
use crate::state::*;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init_if_needed,
        payer = authority,
        space = Pool::LEN,
        seeds = [POOL],
        bump,
    )]
    pub pool: Account<'info, Pool>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let pool = &mut ctx.accounts.pool;

    // An existing pool keeps its authority and balance
    pool.initialize(authority, ctx.bumps.pool)?;

    msg!("Reward pool initialized, authority {}", authority);

    Ok(())
}
