// Server instructions
pub mod register_server;
pub mod submit_metrics;
pub mod claim_rewards;
pub mod deactivate_server;

// Pool instructions
pub mod initialize;
pub mod deposit_rewards;
pub mod reassign_server;
pub mod reclaim_stale_rewards;

// Admin instructions
pub mod set_paused;
pub mod set_authority;
pub mod set_server_authority;
pub mod update_config;

// Glob re-exports are needed for Anchor macro to generate client accounts
// The ambiguous `handler` name is intentional - each module has its own handler
#[allow(ambiguous_glob_reexports)]
pub use register_server::*;
#[allow(ambiguous_glob_reexports)]
pub use submit_metrics::*;
#[allow(ambiguous_glob_reexports)]
pub use claim_rewards::*;
#[allow(ambiguous_glob_reexports)]
pub use deactivate_server::*;
#[allow(ambiguous_glob_reexports)]
pub use initialize::*;
#[allow(ambiguous_glob_reexports)]
pub use deposit_rewards::*;
#[allow(ambiguous_glob_reexports)]
pub use reassign_server::*;
#[allow(ambiguous_glob_reexports)]
pub use reclaim_stale_rewards::*;
#[allow(ambiguous_glob_reexports)]
pub use set_paused::*;
#[allow(ambiguous_glob_reexports)]
pub use set_authority::*;
#[allow(ambiguous_glob_reexports)]
pub use set_server_authority::*;
#[allow(ambiguous_glob_reexports)]
pub use update_config::*;
