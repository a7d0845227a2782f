//! Carrier module: members and bridge states.
//!
//! This is the foundational layer. No other kernel module is imported here.

pub mod member;
pub mod state;
