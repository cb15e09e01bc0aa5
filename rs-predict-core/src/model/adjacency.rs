use std::collections::HashMap;
use std::path::Path;
use std::sync::mpsc;
use std::thread;

use crate::heap::BinaryMaxHeap;
use crate::io::{read_file, tokenize};
use crate::model::word_stat::WordStat;

/// First-order word-adjacency model.
///
/// For each word observed in the corpus, stores the table of words that
/// followed it at least once, each with its running occurrence count.
///
/// ## Responsibilities
/// - Accumulate adjacency counts during a single forward scan
/// - Answer successor lookups and ranked top-K queries
/// - Merge with a partial model built over another corpus slice
///
/// ## Invariants
/// - Every stored occurrence count is >= 1
/// - A word never observed as a predecessor has no table at all
///   ("seen with zero successors" cannot occur by construction)
#[derive(Clone, Debug, Default)]
pub struct AdjacencyModel {
	successors: HashMap<String, HashMap<String, WordStat>>,
}

impl AdjacencyModel {
	/// Creates an empty model.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds the model from a normalized token stream in one forward scan.
	///
	/// Records one adjacency per consecutive token pair; O(N) in the stream
	/// length.
	pub fn from_tokens<I: IntoIterator<Item = String>>(tokens: I) -> Self {
		let mut model = Self::new();
		let mut previous: Option<String> = None;

		for token in tokens {
			if let Some(prev) = previous {
				model.record_adjacency(&prev, &token);
			}
			previous = Some(token);
		}
		model
	}

	/// Builds the model from a corpus file.
	///
	/// Reads and tokenizes the file, then splits the token stream into chunks
	/// scanned on separate threads and merges the partial models. Chunks
	/// overlap by one token so every consecutive pair is counted exactly once;
	/// the resulting counts are identical to a sequential scan.
	///
	/// # Errors
	/// Returns an error if the file cannot be read. This is the only failure
	/// point of a request; generation itself cannot fail once the model is
	/// built.
	pub fn from_file<P: AsRef<Path>>(filepath: P) -> Result<Self, Box<dyn std::error::Error>> {
		let lines = read_file(&filepath)?;
		let tokens = tokenize(&lines);
		if tokens.len() < 2 {
			return Ok(Self::new());
		}

		let cpus = num_cpus::get();
		let factor = 8;
		let chunks = cpus * factor;
		let chunk_size = (tokens.len() + chunks - 1) / chunks;

		let (tx, rx) = mpsc::channel();
		for start in (0..tokens.len()).step_by(chunk_size) {
			// One token of overlap: the chunk owns predecessors
			// [start, start + chunk_size), the extra token only closes
			// the last pair.
			let end = (start + chunk_size + 1).min(tokens.len());
			let chunk: Vec<String> = tokens[start..end].to_vec();
			let tx = tx.clone();

			thread::spawn(move || {
				let partial_model = AdjacencyModel::from_tokens(chunk);
				tx.send(partial_model).expect("Failed to send from thread");
			});
		}
		drop(tx);

		let mut final_model = Self::new();
		for partial_model in rx.iter() {
			final_model.merge(&partial_model);
		}

		Ok(final_model)
	}

	/// Records that `successor` was observed immediately after `predecessor`.
	///
	/// Creates the predecessor table and the successor entry as needed;
	/// otherwise increments the existing count.
	pub fn record_adjacency(&mut self, predecessor: &str, successor: &str) {
		self.successors
			.entry(predecessor.to_owned())
			.or_default()
			.entry(successor.to_owned())
			.and_modify(|stat| stat.increment())
			.or_insert_with(|| WordStat::new(successor, 1));
	}

	/// Returns the successor table for `word`, or `None` if the word was
	/// never observed as a predecessor.
	pub fn successors_of(&self, word: &str) -> Option<&HashMap<String, WordStat>> {
		self.successors.get(word)
	}

	/// Returns the up-to-`k` most frequent successors of `seed` in descending
	/// rank order (ties by reverse lexicographic word order).
	///
	/// Bulk-builds a max-heap over the successor table (O(n)) and extracts at
	/// most `k` elements. Returns an empty vector when the seed has no
	/// recorded successors.
	pub fn top_k_successors(&self, seed: &str, k: usize) -> Vec<WordStat> {
		let Some(table) = self.successors_of(seed) else {
			return Vec::new();
		};

		let mut heap = BinaryMaxHeap::from_collection(table.values().cloned());
		let mut ranked = Vec::with_capacity(k.min(heap.len()));
		for _ in 0..k {
			match heap.extract_max() {
				Ok(stat) => ranked.push(stat),
				Err(_) => break,
			}
		}
		ranked
	}

	/// Merges another model into this one by summing occurrence counts.
	///
	/// Intended for combining partial models built over corpus slices.
	pub fn merge(&mut self, other: &Self) {
		for (predecessor, table) in &other.successors {
			let own = self.successors.entry(predecessor.clone()).or_default();
			for (word, stat) in table {
				own.entry(word.clone())
					.and_modify(|existing| existing.increment_by(stat.occurrence()))
					.or_insert_with(|| stat.clone());
			}
		}
	}

	/// Returns the number of distinct predecessor words.
	pub fn len(&self) -> usize {
		self.successors.len()
	}

	/// Returns true if no adjacency was ever recorded.
	pub fn is_empty(&self) -> bool {
		self.successors.is_empty()
	}
}
