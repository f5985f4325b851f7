pub mod core;
pub mod referral;
mod trace;

pub use core::CoreResolver;
pub use referral::{select_next_nameserver, NextNameserver};
