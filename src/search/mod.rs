//! Search module for Shashki AI
//!
//! Contains fixed-depth minimax with alpha-beta pruning over the rules
//! engine's make/unmake pair.

pub mod alphabeta;

pub use alphabeta::{SearchResult, SearchType, Searcher};
