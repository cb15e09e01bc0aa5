//! First-order word-prediction library.
//!
//! This crate predicts the most likely word(s) following a seed word in a
//! text corpus, using word-adjacency statistics. It provides:
//! - A generic array-backed max-priority-queue
//! - A word-adjacency model built in one pass over the corpus
//! - Ranked top-K, greedy-chain, and weighted-random-chain generation
//!
//! Corpus reading and token normalization are kept internal; callers hand
//! the library a corpus path (or a token stream) and consume ranked pairs
//! or generated word sequences.

/// Generic binary max-heap used for ranking and greedy selection.
pub mod heap;

/// Adjacency model, word statistics and generation logic.
pub mod model;

/// I/O utilities (file loading, token normalization).
///
/// Not exposed
pub(crate) mod io;
