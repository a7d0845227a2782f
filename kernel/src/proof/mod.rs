//! Proof module: canonical hashing of bridge states.

pub mod hash;
