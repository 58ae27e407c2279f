pub mod pool;
pub mod server;

pub use pool::*;
pub use server::*;
