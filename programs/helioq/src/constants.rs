/// One SOL, denominated in lamports.
pub const ONE_SOL: u64 = 1_000_000_000;

/// The number of seconds in one day.
pub const ONE_DAY_SECONDS: i64 = 24 * 60 * 60;

/// Default minimum time between two successful claims of the same server (7 days).
/// A freshly registered server waits one full interval before its first claim.
pub const DEFAULT_CLAIM_COOLDOWN: i64 = 7 * ONE_DAY_SECONDS;

/// Default idle time after which pending rewards may be reclaimed by the pool authority (365 days).
pub const DEFAULT_STALE_REWARD_PERIOD: i64 = 365 * ONE_DAY_SECONDS;

/// Grace period granted to a newly registered server (7 days).
pub const GRACE_PERIOD: i64 = 7 * ONE_DAY_SECONDS;

/// Maximum length of a server id, in bytes.
pub const MAX_SERVER_ID_LEN: usize = 32;

/// Highest accepted uptime score (percent).
pub const MAX_UPTIME: u8 = 100;

/// The seed of the pool account PDA.
pub const POOL: &[u8] = b"pool";

/// The seed of the server account PDA.
pub const SERVER: &[u8] = b"server";
