use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::LedgerError;
use crate::events::ServerDeregistered;
use crate::state::*;
use crate::utils::{authorize, Capability};

#[derive(Accounts)]
pub struct DeactivateServer<'info> {
    pub signer: Signer<'info>,

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

pub fn handler(ctx: Context<DeactivateServer>) -> Result<()> {
    authorize(
        Capability::ServerOperator,
        &ctx.accounts.signer.key(),
        &ctx.accounts.pool,
        Some(&*ctx.accounts.server),
    )?;
    ctx.accounts.pool.require_not_paused()?;

    let server = &mut ctx.accounts.server;

    if server.deactivate() {
        emit!(ServerDeregistered {
            server_id: server.id.clone(),
        });
        msg!("Server {} deactivated", server.id);
    } else {
        msg!("Server {} already inactive", server.id);
    }

    Ok(())
}
