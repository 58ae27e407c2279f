use anchor_lang::prelude::*;
use crate::errors::LedgerError;
use crate::state::{Pool, Server};

/// A privilege an instruction requires from its signer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Capability {
    /// Funds the pool and administers it.
    PoolAuthority,
    /// Receives the server's rewards.
    ServerOwner,
    /// The server's explicit metrics delegate, if one was set.
    ServerAuthority,
    /// Either the server's delegate or the current pool authority.
    ServerOperator,
}

pub fn holds(capability: Capability, caller: &Pubkey, pool: &Pool, server: Option<&Server>) -> bool {
    match capability {
        Capability::PoolAuthority => pool.authority == *caller,
        Capability::ServerOwner => server.map_or(false, |s| s.owner == *caller),
        Capability::ServerAuthority => {
            server.map_or(false, |s| s.has_delegate() && s.authority == *caller)
        }
        Capability::ServerOperator => {
            holds(Capability::ServerAuthority, caller, pool, server)
                || holds(Capability::PoolAuthority, caller, pool, server)
        }
    }
}

/// Fails with `Unauthorized` unless `caller` holds `capability`.
pub fn authorize(
    capability: Capability,
    caller: &Pubkey,
    pool: &Pool,
    server: Option<&Server>,
) -> Result<()> {
    require!(
        holds(capability, caller, pool, server),
        LedgerError::Unauthorized
    );
    Ok(())
}
