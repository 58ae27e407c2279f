use anchor_lang::prelude::*;
use crate::constants::*;
use crate::events::AuthorityTransferred;
use crate::state::*;
use crate::utils::{authorize, Capability};

#[derive(Accounts)]
pub struct SetAuthority<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [POOL],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
}

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct SetAuthorityArgs {
    pub new_authority: Pubkey,
}

pub fn handler(ctx: Context<SetAuthority>, args: SetAuthorityArgs) -> Result<()> {
    authorize(
        Capability::PoolAuthority,
        &ctx.accounts.authority.key(),
        &ctx.accounts.pool,
        None,
    )?;

    let old_authority = ctx.accounts.pool.transfer_authority(args.new_authority)?;

    emit!(AuthorityTransferred {
        old_authority,
        new_authority: args.new_authority,
    });

    msg!("Pool authority transferred from {} to {}", old_authority, args.new_authority);

    Ok(())
}
