//! Top-level module for the word-prediction system.
//!
//! This module provides the first-order word-adjacency model and the
//! generation modes built on it:
//! - Word/occurrence statistics (`WordStat`)
//! - The adjacency model (`AdjacencyModel`)
//! - A high-level generation interface (`Generator`)

/// High-level interface exposing the three output modes over an adjacency
/// model: ranked top-K successors, greedy chain, and weighted-random chain.
pub mod generator;

/// First-order word-adjacency model.
///
/// Maps each observed word to the table of words that followed it, with
/// occurrence counts. Supports single-pass construction, ranked top-K
/// queries, and merging of partial models.
pub mod adjacency;

/// A (word, occurrence-count) pair with the total order used for ranking.
pub mod word_stat;
