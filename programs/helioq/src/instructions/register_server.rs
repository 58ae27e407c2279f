use anchor_lang::prelude::*;
use crate::constants::*;
use crate::events::{GracePeriodStarted, ServerRegistered};
use crate::state::*;

#[derive(Accounts)]
#[instruction(server_id: String)]
pub struct RegisterServer<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        mut,
        seeds = [POOL],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,

    /// Same id, same address: a second registration finds the first record.
    #[account(
        init_if_needed,
        payer = signer,
        space = Server::LEN,
        seeds = [SERVER, pool.key().as_ref(), &server_seed(&server_id)],
        bump,
    )]
    pub server: Account<'info, Server>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<RegisterServer>,
    server_id: String,
    owner: Option<Pubkey>,
) -> Result<()> {
    let clock = Clock::get()?;
    let pool_key = ctx.accounts.pool.key();
    let owner = owner.unwrap_or_else(|| ctx.accounts.signer.key());

    let pool = &mut ctx.accounts.pool;
    let server = &mut ctx.accounts.server;

    server.register(server_id, pool, pool_key, owner, &clock, ctx.bumps.server)?;

    emit!(ServerRegistered {
        server_id: server.id.clone(),
        wallet_address: server.owner,
        timestamp: clock.unix_timestamp,
    });

    emit!(GracePeriodStarted {
        server_id: server.id.clone(),
        end_timestamp: server.grace_period_end,
    });

    msg!("Server {} registered for {}", server.id, server.owner);

    Ok(())
}
