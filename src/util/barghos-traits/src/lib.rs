//! Value-level helpers shared by every cell type: empty-value sentinels, tolerance-aware equality,
//! the explicit value configuration, and hashing utilities.

mod approx;
mod config;
mod hash;
mod sentinel;

pub use approx::*;
pub use config::*;
pub use hash::*;
pub use sentinel::*;
