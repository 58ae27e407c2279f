use anchor_lang::prelude::*;
use solana_nostd_keccak::hashv;
use super::Pool;
use crate::constants::{GRACE_PERIOD, MAX_SERVER_ID_LEN, MAX_UPTIME};
use crate::errors::LedgerError;

/// Per-server ledger entry.
#[account]
#[derive(Default)]
pub struct Server {
    /// Caller-chosen identifier, unique per pool.
    pub id: String,

    /// The pool this server draws rewards from.
    pub pool: Pubkey,

    /// The wallet entitled to claim this server's rewards.
    pub owner: Pubkey,

    /// Delegate allowed to submit metrics and deactivate, besides the current
    /// pool authority. The default key means no delegate.
    pub authority: Pubkey,

    /// Whether metrics are accepted for this server.
    pub active: bool,

    /// The time this server was registered.
    pub registered_at: i64,

    /// End of the onboarding grace period.
    pub grace_period_end: i64,

    /// Lamports accrued but not yet claimed.
    pub pending_rewards: u64,

    /// The last time metrics were accepted.
    pub last_metrics_update: i64,

    /// Uptime percentage of the last accepted report.
    pub last_uptime: u8,

    /// Tasks reported over the server's lifetime.
    pub total_tasks: u64,

    /// The last time rewards were claimed (0 if never).
    pub last_claim_at: i64,

    /// Lamports paid out over the server's lifetime.
    pub lifetime_claimed: u64,

    pub bump: u8,
}

/// Seed component derived from a server id. Hashing keeps the seed within
/// the 32 byte limit and maps every id to exactly one address per pool.
pub fn server_seed(server_id: &str) -> [u8; 32] {
    hashv(&[server_id.as_bytes()])
}

pub fn validate_server_id(server_id: &str) -> Result<()> {
    require!(
        !server_id.is_empty() && server_id.len() <= MAX_SERVER_ID_LEN,
        LedgerError::InvalidId
    );
    require!(
        server_id.bytes().all(|b| b.is_ascii_graphic()),
        LedgerError::InvalidId
    );
    Ok(())
}

impl Server {
    pub const LEN: usize = 8 + // discriminator
        (4 + MAX_SERVER_ID_LEN) + // id
        32 + // pool
        32 + // owner
        32 + // authority
        1 + // active
        8 + // registered_at
        8 + // grace_period_end
        8 + // pending_rewards
        8 + // last_metrics_update
        1 + // last_uptime
        8 + // total_tasks
        8 + // last_claim_at
        8 + // lifetime_claimed
        1; // bump

    pub fn is_registered(&self) -> bool {
        self.pool != Pubkey::default()
    }

    pub fn has_delegate(&self) -> bool {
        self.authority != Pubkey::default()
    }

    pub fn register(
        &mut self,
        server_id: String,
        pool: &mut Pool,
        pool_key: Pubkey,
        owner: Pubkey,
        clock: &Clock,
        bump: u8,
    ) -> Result<()> {
        pool.require_not_paused()?;
        validate_server_id(&server_id)?;
        require!(!self.is_registered(), LedgerError::DuplicateServerId);

        let server_count = pool.server_count.checked_add(1)
            .ok_or(LedgerError::Overflow)?;
        let grace_period_end = clock.unix_timestamp.checked_add(GRACE_PERIOD)
            .ok_or(LedgerError::Overflow)?;

        self.id = server_id;
        self.pool = pool_key;
        self.owner = owner;
        self.authority = Pubkey::default();
        self.active = true;
        self.registered_at = clock.unix_timestamp;
        self.grace_period_end = grace_period_end;
        self.pending_rewards = 0;
        self.last_metrics_update = 0;
        self.last_uptime = 0;
        self.total_tasks = 0;
        self.last_claim_at = 0;
        self.lifetime_claimed = 0;
        self.bump = bump;

        pool.server_count = server_count;
        Ok(())
    }

    /// Applies a metrics report and accrues `points` lamports.
    /// Returns the new pending balance.
    pub fn accrue(
        &mut self,
        uptime: u8,
        tasks_completed: u64,
        points: u64,
        clock: &Clock,
        pool: &mut Pool,
    ) -> Result<u64> {
        pool.require_not_paused()?;
        require!(self.active, LedgerError::ServerInactive);
        require!(uptime <= MAX_UPTIME, LedgerError::InvalidMetric);

        let pending_rewards = self.pending_rewards.checked_add(points)
            .ok_or(LedgerError::Overflow)?;
        let total_tasks = self.total_tasks.checked_add(tasks_completed)
            .ok_or(LedgerError::Overflow)?;

        pool.accrue(points)?;

        self.pending_rewards = pending_rewards;
        self.total_tasks = total_tasks;
        self.last_uptime = uptime;
        self.last_metrics_update = clock.unix_timestamp;
        Ok(pending_rewards)
    }

    /// The point the claim cooldown runs from.
    pub fn cooldown_anchor(&self) -> i64 {
        self.last_claim_at.max(self.registered_at)
    }

    /// Seconds left before the next claim is allowed.
    pub fn cooldown_remaining(&self, now: i64, claim_cooldown: i64) -> i64 {
        let elapsed = now.saturating_sub(self.cooldown_anchor());
        claim_cooldown.saturating_sub(elapsed).max(0)
    }

    /// Settles the pending balance against the pool. Returns the lamports
    /// to pay the owner. Checks run in order and nothing is written unless
    /// all of them pass.
    pub fn claim(&mut self, clock: &Clock, pool: &mut Pool) -> Result<u64> {
        pool.require_not_paused()?;
        let amount = self.pending_rewards;
        require!(amount > 0, LedgerError::NothingToClaim);
        require!(
            self.cooldown_remaining(clock.unix_timestamp, pool.claim_cooldown) == 0,
            LedgerError::ClaimCooldownActive
        );
        require!(pool.can_cover(amount), LedgerError::InsufficientPoolFunds);

        let lifetime_claimed = self.lifetime_claimed.checked_add(amount)
            .ok_or(LedgerError::Overflow)?;

        pool.pay_out(amount)?;

        self.pending_rewards = 0;
        self.last_claim_at = clock.unix_timestamp;
        self.lifetime_claimed = lifetime_claimed;
        Ok(amount)
    }

    /// Returns false if the server was already inactive.
    pub fn deactivate(&mut self) -> bool {
        let was_active = self.active;
        self.active = false;
        was_active
    }

    /// Replaces the metrics delegate. Returns the previous one.
    pub fn delegate(&mut self, new_authority: Pubkey) -> Result<Pubkey> {
        require!(new_authority != Pubkey::default(), LedgerError::InvalidConfig);

        let old_authority = self.authority;
        self.authority = new_authority;
        Ok(old_authority)
    }

    /// Hands the server to a new owner. Returns the previous owner.
    pub fn reassign(&mut self, new_owner: Pubkey) -> Result<Pubkey> {
        require!(self.active, LedgerError::ServerInactive);

        let old_owner = self.owner;
        self.owner = new_owner;
        Ok(old_owner)
    }

    /// The last time anything happened on this server.
    pub fn last_activity(&self) -> i64 {
        self.last_metrics_update
            .max(self.last_claim_at)
            .max(self.registered_at)
    }

    /// Drops pending rewards that sat untouched for the pool's stale period.
    /// The lamports stay in the pool. Returns the amount released.
    pub fn reclaim_stale(&mut self, clock: &Clock, pool: &mut Pool) -> Result<u64> {
        pool.require_not_paused()?;
        let amount = self.pending_rewards;
        require!(amount > 0, LedgerError::NothingToClaim);

        let idle = clock.unix_timestamp.saturating_sub(self.last_activity());
        require!(idle >= pool.stale_reward_period, LedgerError::RewardsNotStale);

        pool.release(amount)?;
        self.pending_rewards = 0;
        Ok(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;
    use crate::constants::{DEFAULT_CLAIM_COOLDOWN, DEFAULT_STALE_REWARD_PERIOD, ONE_DAY_SECONDS, ONE_SOL};

    const T0: i64 = 1_700_000_000;

    fn clock_at(unix_timestamp: i64) -> Clock {
        Clock {
            unix_timestamp,
            ..Clock::default()
        }
    }

    fn setup() -> (Pool, Server) {
        let mut pool = Pool::default();
        pool.initialize(Pubkey::new_unique(), 255).unwrap();

        let mut server = Server::default();
        server
            .register(
                "node-eu-1".to_string(),
                &mut pool,
                Pubkey::new_unique(),
                Pubkey::new_unique(),
                &clock_at(T0),
                254,
            )
            .unwrap();
        (pool, server)
    }

    #[test]
    fn test_server_size() {
        let mut server = Server::default();
        server.id = "x".repeat(MAX_SERVER_ID_LEN);
        let bytes = server.try_to_vec().unwrap();
        assert_eq!(bytes.len() + 8, Server::LEN);
    }

    #[test]
    fn test_validate_server_id() {
        assert!(validate_server_id("test-server-1").is_ok());
        assert!(validate_server_id(&"a".repeat(MAX_SERVER_ID_LEN)).is_ok());

        for bad in ["", "has space", "tab\tid", "ünïcode"] {
            assert_eq!(
                validate_server_id(bad).unwrap_err(),
                Error::from(LedgerError::InvalidId),
                "{bad:?} should be rejected"
            );
        }
        assert_eq!(
            validate_server_id(&"a".repeat(MAX_SERVER_ID_LEN + 1)).unwrap_err(),
            Error::from(LedgerError::InvalidId)
        );
    }

    #[test]
    fn test_server_seed_is_stable_and_distinct() {
        assert_eq!(server_seed("alpha"), server_seed("alpha"));
        assert_ne!(server_seed("alpha"), server_seed("alpha "));
    }

    #[test]
    fn test_register_initial_state() {
        let (pool, server) = setup();
        assert!(server.active);
        assert_eq!(server.pending_rewards, 0);
        assert_eq!(server.last_claim_at, 0);
        assert_eq!(server.authority, Pubkey::default());
        assert!(!server.has_delegate());
        assert_eq!(server.registered_at, T0);
        assert_eq!(server.grace_period_end, T0 + GRACE_PERIOD);
        assert_eq!(pool.server_count, 1);
    }

    #[test]
    fn test_register_duplicate_keeps_first_record() {
        let (mut pool, mut server) = setup();
        let first_owner = server.owner;

        let err = server
            .register(
                "node-eu-1".to_string(),
                &mut pool,
                Pubkey::new_unique(),
                Pubkey::new_unique(),
                &clock_at(T0 + 10),
                1,
            )
            .unwrap_err();
        assert_eq!(err, Error::from(LedgerError::DuplicateServerId));
        assert_eq!(server.owner, first_owner);
        assert_eq!(server.registered_at, T0);
        assert_eq!(pool.server_count, 1);
    }

    #[test]
    fn test_accrue_increments() {
        let (mut pool, mut server) = setup();
        server.accrue(99, 10, ONE_SOL, &clock_at(T0 + 1), &mut pool).unwrap();
        let pending = server.accrue(97, 5, 250, &clock_at(T0 + 2), &mut pool).unwrap();

        assert_eq!(pending, ONE_SOL + 250);
        assert_eq!(server.pending_rewards, ONE_SOL + 250);
        assert_eq!(server.total_tasks, 15);
        assert_eq!(server.last_uptime, 97);
        assert_eq!(server.last_metrics_update, T0 + 2);
        assert_eq!(pool.total_pending, ONE_SOL + 250);
    }

    #[test]
    fn test_accrue_rejects_bad_uptime() {
        let (mut pool, mut server) = setup();
        let err = server.accrue(101, 1, 10, &clock_at(T0), &mut pool).unwrap_err();
        assert_eq!(err, Error::from(LedgerError::InvalidMetric));
        assert_eq!(server.pending_rewards, 0);
        assert_eq!(pool.total_pending, 0);
    }

    #[test]
    fn test_accrue_rejects_inactive() {
        let (mut pool, mut server) = setup();
        assert!(server.deactivate());
        let err = server.accrue(50, 1, 10, &clock_at(T0), &mut pool).unwrap_err();
        assert_eq!(err, Error::from(LedgerError::ServerInactive));
        assert_eq!(pool.total_pending, 0);
    }

    #[test]
    fn test_accrue_overflow_is_atomic() {
        let (mut pool, mut server) = setup();
        server.accrue(99, 0, u64::MAX, &clock_at(T0), &mut pool).unwrap();
        let err = server.accrue(99, 0, 1, &clock_at(T0 + 1), &mut pool).unwrap_err();
        assert_eq!(err, Error::from(LedgerError::Overflow));
        assert_eq!(server.pending_rewards, u64::MAX);
        assert_eq!(server.last_metrics_update, T0);
        assert_eq!(pool.total_pending, u64::MAX);
    }

    #[test]
    fn test_accrue_task_overflow_is_atomic() {
        let (mut pool, mut server) = setup();
        server.accrue(99, u64::MAX, 5, &clock_at(T0), &mut pool).unwrap();
        let err = server.accrue(98, 1, 5, &clock_at(T0 + 1), &mut pool).unwrap_err();
        assert_eq!(err, Error::from(LedgerError::Overflow));
        assert_eq!(server.total_tasks, u64::MAX);
        assert_eq!(server.pending_rewards, 5);
        assert_eq!(server.last_uptime, 99);
        assert_eq!(pool.total_pending, 5);
    }

    #[test]
    fn test_claim_nothing_to_claim_wins_over_cooldown() {
        let (mut pool, mut server) = setup();
        pool.deposit(ONE_SOL).unwrap();
        let err = server.claim(&clock_at(T0), &mut pool).unwrap_err();
        assert_eq!(err, Error::from(LedgerError::NothingToClaim));
    }

    #[test]
    fn test_claim_after_registration_waits_for_cooldown() {
        let (mut pool, mut server) = setup();
        server.accrue(99, 10, ONE_SOL, &clock_at(T0), &mut pool).unwrap();
        pool.deposit(2 * ONE_SOL).unwrap();

        let just_before = T0 + DEFAULT_CLAIM_COOLDOWN - 1;
        let err = server.claim(&clock_at(just_before), &mut pool).unwrap_err();
        assert_eq!(err, Error::from(LedgerError::ClaimCooldownActive));
        assert_eq!(server.cooldown_remaining(just_before, pool.claim_cooldown), 1);
        assert_eq!(server.pending_rewards, ONE_SOL);
        assert_eq!(pool.reward_pool, 2 * ONE_SOL);

        let paid = server
            .claim(&clock_at(T0 + DEFAULT_CLAIM_COOLDOWN), &mut pool)
            .unwrap();
        assert_eq!(paid, ONE_SOL);
        assert_eq!(server.pending_rewards, 0);
        assert_eq!(server.last_claim_at, T0 + DEFAULT_CLAIM_COOLDOWN);
        assert_eq!(server.lifetime_claimed, ONE_SOL);
        assert_eq!(pool.reward_pool, ONE_SOL);
        assert_eq!(pool.total_pending, 0);
    }

    #[test]
    fn test_metrics_reports_do_not_postpone_claim() {
        let (mut pool, mut server) = setup();
        pool.deposit(ONE_SOL).unwrap();

        let mut now = T0;
        while now < T0 + DEFAULT_CLAIM_COOLDOWN {
            server.accrue(99, 1, 10, &clock_at(now), &mut pool).unwrap();
            now += ONE_DAY_SECONDS;
        }
        let last_report = T0 + DEFAULT_CLAIM_COOLDOWN - 1;
        server.accrue(99, 1, 10, &clock_at(last_report), &mut pool).unwrap();

        let paid = server
            .claim(&clock_at(T0 + DEFAULT_CLAIM_COOLDOWN), &mut pool)
            .unwrap();
        assert_eq!(paid, 80);
        assert_eq!(server.last_metrics_update, last_report);
    }

    #[test]
    fn test_claim_cooldown_restarts_after_claim() {
        let (mut pool, mut server) = setup();
        pool.deposit(10 * ONE_SOL).unwrap();
        let first = T0 + DEFAULT_CLAIM_COOLDOWN;

        server.accrue(99, 1, ONE_SOL, &clock_at(T0), &mut pool).unwrap();
        server.claim(&clock_at(first), &mut pool).unwrap();

        server.accrue(99, 1, ONE_SOL, &clock_at(first + 5), &mut pool).unwrap();
        let err = server
            .claim(&clock_at(first + DEFAULT_CLAIM_COOLDOWN - 1), &mut pool)
            .unwrap_err();
        assert_eq!(err, Error::from(LedgerError::ClaimCooldownActive));
        assert_eq!(pool.reward_pool, 9 * ONE_SOL);

        server
            .claim(&clock_at(first + DEFAULT_CLAIM_COOLDOWN), &mut pool)
            .unwrap();
        assert_eq!(pool.reward_pool, 8 * ONE_SOL);
    }

    #[test]
    fn test_claim_insufficient_pool_changes_nothing() {
        let (mut pool, mut server) = setup();
        server.accrue(99, 1, 3 * ONE_SOL, &clock_at(T0), &mut pool).unwrap();
        pool.deposit(ONE_SOL).unwrap();

        let err = server
            .claim(&clock_at(T0 + DEFAULT_CLAIM_COOLDOWN), &mut pool)
            .unwrap_err();
        assert_eq!(err, Error::from(LedgerError::InsufficientPoolFunds));
        assert_eq!(server.pending_rewards, 3 * ONE_SOL);
        assert_eq!(server.last_claim_at, 0);
        assert_eq!(pool.reward_pool, ONE_SOL);
        assert_eq!(pool.total_pending, 3 * ONE_SOL);
    }

    #[test]
    fn test_claim_allowed_after_deactivation() {
        let (mut pool, mut server) = setup();
        server.accrue(99, 1, 500, &clock_at(T0), &mut pool).unwrap();
        pool.deposit(500).unwrap();
        server.deactivate();

        let paid = server
            .claim(&clock_at(T0 + DEFAULT_CLAIM_COOLDOWN), &mut pool)
            .unwrap();
        assert_eq!(paid, 500);
        assert_eq!(pool.reward_pool, 0);
        assert!(!server.active);
    }

    #[test]
    fn test_deactivate_is_idempotent() {
        let (_, mut server) = setup();
        assert!(server.deactivate());
        assert!(!server.deactivate());
        assert!(!server.active);
    }

    #[test]
    fn test_delegate_replaces_previous() {
        let (_, mut server) = setup();
        let first = Pubkey::new_unique();
        let second = Pubkey::new_unique();

        assert_eq!(server.delegate(first).unwrap(), Pubkey::default());
        assert_eq!(server.delegate(second).unwrap(), first);
        assert_eq!(server.authority, second);

        let err = server.delegate(Pubkey::default()).unwrap_err();
        assert_eq!(err, Error::from(LedgerError::InvalidConfig));
        assert_eq!(server.authority, second);
    }

    #[test]
    fn test_reassign() {
        let (_, mut server) = setup();
        let old = server.owner;
        let new_owner = Pubkey::new_unique();
        assert_eq!(server.reassign(new_owner).unwrap(), old);
        assert_eq!(server.owner, new_owner);

        server.deactivate();
        let err = server.reassign(Pubkey::new_unique()).unwrap_err();
        assert_eq!(err, Error::from(LedgerError::ServerInactive));
        assert_eq!(server.owner, new_owner);
    }

    #[test]
    fn test_reclaim_stale() {
        let (mut pool, mut server) = setup();
        pool.deposit(ONE_SOL).unwrap();
        server.accrue(99, 1, 700, &clock_at(T0 + 100), &mut pool).unwrap();

        let too_early = T0 + 100 + DEFAULT_STALE_REWARD_PERIOD - 1;
        let err = server.reclaim_stale(&clock_at(too_early), &mut pool).unwrap_err();
        assert_eq!(err, Error::from(LedgerError::RewardsNotStale));
        assert_eq!(server.pending_rewards, 700);

        let released = server
            .reclaim_stale(&clock_at(too_early + 1), &mut pool)
            .unwrap();
        assert_eq!(released, 700);
        assert_eq!(server.pending_rewards, 0);
        assert_eq!(pool.total_pending, 0);
        assert_eq!(pool.reward_pool, ONE_SOL);

        let err = server
            .reclaim_stale(&clock_at(too_early + 2), &mut pool)
            .unwrap_err();
        assert_eq!(err, Error::from(LedgerError::NothingToClaim));
    }
}
