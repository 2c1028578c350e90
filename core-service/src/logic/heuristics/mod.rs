//! Heuristics Module
//!
//! Two independent rule sets scoring the URL text directly:
//! - `simple`: pattern hits, length, parameter count (suspicious when > 50)
//! - `advanced`: host and structure checks with reasons (suspicious when >= 50)
//!
//! Every rule is evaluated; contributions are summed and clamped to 100.

pub mod types;
pub mod rules;
pub mod simple;
pub mod advanced;

pub use types::{HeuristicResult, RiskLevel};
pub use simple::simple_heuristic;
pub use advanced::advanced_heuristic;
