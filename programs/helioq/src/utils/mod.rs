pub mod authority;
pub mod transfer;

pub use authority::*;
pub use transfer::*;
