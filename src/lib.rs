//! CLI Bowling (workspace facade crate).
//!
//! This package keeps the public `cli_bowling::{core,term,types}` paths
//! stable while the implementation lives in dedicated crates under
//! `crates/`.

pub use cli_bowling_core as core;
pub use cli_bowling_term as term;
pub use cli_bowling_types as types;
