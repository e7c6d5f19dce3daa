//! Evaluation module for Shashki positions
//!
//! This module provides the static evaluator used at the search horizon.
//! The evaluation considers:
//! - Material, with kings worth more in the opening
//! - Tempo and pending captures
//! - Small stalemated armies
//! - Men close to promotion or guarding the back rank

pub mod heuristic;
pub mod verdict;
pub mod weights;

pub use heuristic::{evaluate, is_opening, terminal_for};
pub use verdict::Verdict;
pub use weights::Weights;
