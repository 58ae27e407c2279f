use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::LedgerError;
use crate::events::ServerReassigned;
use crate::state::*;
use crate::utils::{authorize, Capability};

#[derive(Accounts)]
pub struct ReassignServer<'info> {
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

    /// CHECK: The new owner can be any wallet
    pub new_owner: UncheckedAccount<'info>,
}

pub fn handler(ctx: Context<ReassignServer>) -> Result<()> {
    authorize(
        Capability::PoolAuthority,
        &ctx.accounts.authority.key(),
        &ctx.accounts.pool,
        None,
    )?;
    ctx.accounts.pool.require_not_paused()?;

    let new_owner = ctx.accounts.new_owner.key();
    let server = &mut ctx.accounts.server;
    let old_owner = server.reassign(new_owner)?;

    emit!(ServerReassigned {
        server_id: server.id.clone(),
        old_owner,
        new_owner,
    });

    msg!("Server {} reassigned from {} to {}", server.id, old_owner, new_owner);

    Ok(())
}
