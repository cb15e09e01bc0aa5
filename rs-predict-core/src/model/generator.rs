use std::collections::HashMap;
use std::path::Path;

use rand::Rng;

use crate::heap::BinaryMaxHeap;
use crate::model::adjacency::AdjacencyModel;
use crate::model::word_stat::WordStat;

/// High-level interface over an adjacency model, exposing the three output
/// modes.
///
/// # Responsibilities
/// - Ranked mode: top-K successors of the seed in descending rank order
/// - Greedy chain: always advance to the most frequent successor
/// - Weighted chain: advance to a successor sampled proportionally to its
///   occurrence count
///
/// Both chain modes share the dead-end policy: a word with no recorded
/// successors is still emitted on its own step, and the walk resets to the
/// seed for the *next* step. A seed absent from the corpus is therefore a
/// permanent dead-end and yields `k` repetitions of itself.
///
/// Per-predecessor successor structures (heaps for greedy, flattened count
/// lists for weighted) are built lazily on first visit and cached for the
/// remainder of that single call, then discarded.
#[derive(Debug)]
pub struct Generator {
	model: AdjacencyModel,
}

impl Generator {
	/// Creates a generator over an already-built model.
	pub fn from_model(model: AdjacencyModel) -> Self {
		Self { model }
	}

	/// Creates a generator by building the model from a corpus file.
	///
	/// # Errors
	/// Returns an error if the corpus cannot be read.
	pub fn from_file<P: AsRef<Path>>(filepath: P) -> Result<Self, Box<dyn std::error::Error>> {
		Ok(Self {
			model: AdjacencyModel::from_file(filepath)?,
		})
	}

	/// Returns the underlying adjacency model.
	pub fn model(&self) -> &AdjacencyModel {
		&self.model
	}

	/// Ranked mode: the up-to-`k` most frequent successors of `seed` in
	/// descending rank order. Empty if the seed never appears as a
	/// predecessor.
	pub fn ranked(&self, seed: &str, k: usize) -> Vec<WordStat> {
		self.model.top_k_successors(seed, k)
	}

	/// Greedy chain mode: exactly `k` words, always advancing to the
	/// tie-broken most frequent successor of the current word.
	///
	/// The per-predecessor heap is built once and only peeked, never
	/// extracted, so repeated visits to the same predecessor are stable.
	pub fn greedy_chain(&self, seed: &str, k: usize) -> Vec<String> {
		let mut heaps: HashMap<String, BinaryMaxHeap<WordStat>> = HashMap::new();
		let mut out = Vec::with_capacity(k);
		let mut current = seed.to_owned();

		for _ in 0..k {
			let next = self.model.successors_of(&current).map(|table| {
				let heap = heaps
					.entry(current.clone())
					.or_insert_with(|| BinaryMaxHeap::from_collection(table.values().cloned()));
				// The table is never empty, so the peek cannot fail
				heap.peek().map(|top| top.word().to_owned()).ok()
			});

			out.push(current);
			current = match next.flatten() {
				Some(word) => word,
				None => seed.to_owned(),
			};
		}

		out
	}

	/// Weighted chain mode: exactly `k` words, advancing to a successor
	/// sampled with probability proportional to its occurrence count.
	pub fn weighted_chain(&self, seed: &str, k: usize) -> Vec<String> {
		self.weighted_chain_rng(seed, k, &mut rand::rng())
	}

	/// Weighted chain with a caller-supplied source of randomness.
	fn weighted_chain_rng<R: Rng>(&self, seed: &str, k: usize, rng: &mut R) -> Vec<String> {
		let mut tables: HashMap<String, (Vec<(String, usize)>, usize)> = HashMap::new();
		let mut out = Vec::with_capacity(k);
		let mut current = seed.to_owned();

		for _ in 0..k {
			let next = self.model.successors_of(&current).map(|table| {
				let (pairs, total) = tables.entry(current.clone()).or_insert_with(|| {
					let pairs: Vec<(String, usize)> = table
						.values()
						.map(|stat| (stat.word().to_owned(), stat.occurrence()))
						.collect();
					let total = pairs.iter().map(|(_, count)| count).sum();
					(pairs, total)
				});

				let value = rng.random_range(0..*total);
				// A draw below the total always lands in some interval
				pick_by_value(pairs, value).map(str::to_owned)
			});

			out.push(current);
			current = match next.flatten() {
				Some(word) => word,
				None => seed.to_owned(),
			};
		}

		out
	}
}

/// Selects the pair whose half-open cumulative-count interval contains
/// `value`.
///
/// Walking the list, each pair with count `c` owns the interval
/// `[running, running + c)`. Count-proportional sampling without floating
/// point: a uniform draw in `[0, total)` selects each word with probability
/// `count / total`.
///
/// Returns `None` only if `value` is at or beyond the total count.
fn pick_by_value(pairs: &[(String, usize)], value: usize) -> Option<&str> {
	let mut running = 0;
	for (word, count) in pairs {
		if value < running + count {
			return Some(word);
		}
		running += count;
	}
	None
}

#[cfg(test)]
mod tests {
	use super::*;

	fn generator_from(text: &str) -> Generator {
		Generator::from_model(AdjacencyModel::from_tokens(
			text.split_whitespace().map(str::to_owned),
		))
	}

	#[test]
	fn greedy_chain_follows_most_frequent_successor() {
		let generator = generator_from("hello world hello world");
		assert_eq!(
			generator.greedy_chain("hello", 4),
			vec!["hello", "world", "hello", "world"]
		);
	}

	#[test]
	fn greedy_chain_prefers_higher_counts() {
		// After "the": cat x2, dog x1; after "cat": sat x2
		let generator = generator_from("the cat sat the dog sat the cat sat");
		assert_eq!(generator.greedy_chain("the", 3), vec!["the", "cat", "sat"]);
	}

	#[test]
	fn greedy_chain_breaks_ties_by_smallest_word() {
		// "b" and "a" both follow "x" once: tie goes to "a"
		let generator = generator_from("x b x a y");
		assert_eq!(generator.greedy_chain("x", 2), vec!["x", "a"]);
	}

	#[test]
	fn dead_end_emits_word_then_resets_to_seed() {
		// "end" has no successors: it is emitted, then the walk restarts
		let generator = generator_from("start end");
		assert_eq!(
			generator.greedy_chain("start", 5),
			vec!["start", "end", "start", "end", "start"]
		);
	}

	#[test]
	fn unknown_seed_loops_on_itself() {
		let generator = generator_from("z");
		assert_eq!(generator.greedy_chain("z", 4), vec!["z", "z", "z", "z"]);
		assert_eq!(generator.weighted_chain("z", 4), vec!["z", "z", "z", "z"]);
		assert!(generator.ranked("z", 4).is_empty());
	}

	#[test]
	fn ranked_delegates_to_model() {
		let generator = generator_from("a b a c a b");
		let ranked = generator.ranked("a", 2);
		assert_eq!(ranked.len(), 2);
		assert_eq!(ranked[0].word(), "b");
		assert_eq!(ranked[0].occurrence(), 2);
		assert_eq!(ranked[1].word(), "c");
	}

	#[test]
	fn weighted_chain_emits_exactly_k_known_words() {
		let generator = generator_from("a b a c b a c a b c");
		let chain = generator.weighted_chain("a", 50);
		assert_eq!(chain.len(), 50);
		assert_eq!(chain[0], "a");
		assert!(chain.iter().all(|w| ["a", "b", "c"].contains(&w.as_str())));
	}

	#[test]
	fn weighted_chain_with_single_successor_is_deterministic() {
		let generator = generator_from("ping pong ping pong ping");
		assert_eq!(
			generator.weighted_chain("ping", 4),
			vec!["ping", "pong", "ping", "pong"]
		);
	}

	#[test]
	fn interval_selection_is_count_proportional() {
		// 9 occurrences of "world" vs 1 of "x"
		let pairs = vec![("world".to_owned(), 9), ("x".to_owned(), 1)];
		for value in 0..9 {
			assert_eq!(pick_by_value(&pairs, value), Some("world"), "value {}", value);
		}
		assert_eq!(pick_by_value(&pairs, 9), Some("x"));
		assert_eq!(pick_by_value(&pairs, 10), None);
	}

	#[test]
	fn interval_selection_covers_interior_pairs() {
		let pairs = vec![
			("a".to_owned(), 2),
			("b".to_owned(), 3),
			("c".to_owned(), 1),
		];
		assert_eq!(pick_by_value(&pairs, 0), Some("a"));
		assert_eq!(pick_by_value(&pairs, 1), Some("a"));
		assert_eq!(pick_by_value(&pairs, 2), Some("b"));
		assert_eq!(pick_by_value(&pairs, 4), Some("b"));
		assert_eq!(pick_by_value(&pairs, 5), Some("c"));
	}
}
