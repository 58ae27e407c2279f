use anchor_lang::prelude::*;
use crate::constants::{DEFAULT_CLAIM_COOLDOWN, DEFAULT_STALE_REWARD_PERIOD};
use crate::errors::LedgerError;

/// The administered reward pool. The PDA itself holds the reward lamports
/// on top of its rent-exempt minimum.
#[account]
#[derive(Default)]
pub struct Pool {
    /// The address that funds the pool and administers servers.
    pub authority: Pubkey,

    /// Lamports available for payout.
    pub reward_pool: u64,

    /// Sum of pending rewards across all servers of this pool.
    pub total_pending: u64,

    /// Lifetime lamports deposited.
    pub total_deposited: u64,

    /// Lifetime lamports paid out to server owners.
    pub total_claimed: u64,

    /// Number of servers registered against this pool.
    pub server_count: u64,

    /// Minimum seconds between two claims of the same server.
    pub claim_cooldown: i64,

    /// Seconds without metrics after which pending rewards may be reclaimed.
    pub stale_reward_period: i64,

    /// Circuit breaker.
    pub paused: bool,

    pub bump: u8,
}

impl Pool {
    pub const LEN: usize = 8 + // discriminator
        32 + // authority
        8 + // reward_pool
        8 + // total_pending
        8 + // total_deposited
        8 + // total_claimed
        8 + // server_count
        8 + // claim_cooldown
        8 + // stale_reward_period
        1 + // paused
        1; // bump

    pub fn is_initialized(&self) -> bool {
        self.authority != Pubkey::default()
    }

    pub fn initialize(&mut self, authority: Pubkey, bump: u8) -> Result<()> {
        require!(!self.is_initialized(), LedgerError::AlreadyInitialized);

        self.authority = authority;
        self.reward_pool = 0;
        self.total_pending = 0;
        self.total_deposited = 0;
        self.total_claimed = 0;
        self.server_count = 0;
        self.claim_cooldown = DEFAULT_CLAIM_COOLDOWN;
        self.stale_reward_period = DEFAULT_STALE_REWARD_PERIOD;
        self.paused = false;
        self.bump = bump;
        Ok(())
    }

    pub fn require_not_paused(&self) -> Result<()> {
        require!(!self.paused, LedgerError::ProgramPaused);
        Ok(())
    }

    /// Hands administration to `new_authority`. Servers carry no copy of the
    /// pool authority, so the previous key loses every right at once.
    /// Returns the previous authority.
    pub fn transfer_authority(&mut self, new_authority: Pubkey) -> Result<Pubkey> {
        // The default key marks an uninitialized pool
        require!(new_authority != Pubkey::default(), LedgerError::InvalidConfig);

        let old_authority = self.authority;
        self.authority = new_authority;
        Ok(old_authority)
    }

    /// Credits a deposit. Returns the new pool balance.
    pub fn deposit(&mut self, amount: u64) -> Result<u64> {
        self.require_not_paused()?;
        require!(amount > 0, LedgerError::InvalidAmount);

        let reward_pool = self.reward_pool.checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        let total_deposited = self.total_deposited.checked_add(amount)
            .ok_or(LedgerError::Overflow)?;

        self.reward_pool = reward_pool;
        self.total_deposited = total_deposited;
        Ok(reward_pool)
    }

    /// Records a new obligation towards a server.
    pub fn accrue(&mut self, amount: u64) -> Result<()> {
        self.total_pending = self.total_pending.checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        Ok(())
    }

    /// Drops an obligation without paying it out.
    pub fn release(&mut self, amount: u64) -> Result<()> {
        self.total_pending = self.total_pending.checked_sub(amount)
            .ok_or(LedgerError::Underflow)?;
        Ok(())
    }

    pub fn can_cover(&self, amount: u64) -> bool {
        self.reward_pool >= amount
    }

    /// Debits a payout from the pool and settles the matching obligation.
    /// Nothing is written unless every step succeeds.
    pub fn pay_out(&mut self, amount: u64) -> Result<()> {
        require!(self.can_cover(amount), LedgerError::InsufficientPoolFunds);

        let total_pending = self.total_pending.checked_sub(amount)
            .ok_or(LedgerError::Underflow)?;
        let total_claimed = self.total_claimed.checked_add(amount)
            .ok_or(LedgerError::Overflow)?;

        self.reward_pool -= amount;
        self.total_pending = total_pending;
        self.total_claimed = total_claimed;
        Ok(())
    }

    /// Obligations not yet backed by deposits.
    pub fn shortfall(&self) -> u64 {
        self.total_pending.saturating_sub(self.reward_pool)
    }

    pub fn is_solvent(&self) -> bool {
        self.shortfall() == 0
    }

    pub fn update_config(
        &mut self,
        claim_cooldown: Option<i64>,
        stale_reward_period: Option<i64>,
    ) -> Result<()> {
        if let Some(cooldown) = claim_cooldown {
            require!(cooldown > 0, LedgerError::InvalidConfig);
        }
        if let Some(period) = stale_reward_period {
            require!(period > 0, LedgerError::InvalidConfig);
        }

        if let Some(cooldown) = claim_cooldown {
            self.claim_cooldown = cooldown;
        }
        if let Some(period) = stale_reward_period {
            self.stale_reward_period = period;
        }
        Ok(())
    }
}
