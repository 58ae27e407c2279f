use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::LedgerError;
use crate::events::ServerAuthorityChanged;
use crate::state::*;
use crate::utils::{authorize, Capability};

#[derive(Accounts)]
pub struct SetServerAuthority<'info> {
    pub authority: Signer<'info>,

    #[account(
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

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct SetServerAuthorityArgs {
    pub new_authority: Pubkey,
}

pub fn handler(ctx: Context<SetServerAuthority>, args: SetServerAuthorityArgs) -> Result<()> {
    authorize(
        Capability::PoolAuthority,
        &ctx.accounts.authority.key(),
        &ctx.accounts.pool,
        None,
    )?;

    let server = &mut ctx.accounts.server;
    let old_authority = server.delegate(args.new_authority)?;

    emit!(ServerAuthorityChanged {
        server_id: server.id.clone(),
        old_authority,
        new_authority: args.new_authority,
    });

    Ok(())
}
