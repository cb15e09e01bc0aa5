use std::cmp::Ordering;
use std::fmt;

/// A word paired with the number of times it was observed after a given
/// predecessor.
///
/// ## Responsibilities
/// - Accumulate an occurrence count in place during the corpus scan
/// - Provide the total order used when ranking successors
///
/// ## Invariants
/// - `occurrence` is >= 1 for any stat stored in a model
///
/// The order is occurrence-dominant; equal counts compare by *reverse*
/// lexicographic word order, so among tied counts the lexicographically
/// smallest word is the greatest element and ranks first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordStat {
	word: String,
	occurrence: usize,
}

impl WordStat {
	/// Creates a stat for `word` with the given initial count.
	pub fn new(word: &str, occurrence: usize) -> Self {
		Self {
			word: word.to_owned(),
			occurrence,
		}
	}

	/// Returns the word this stat represents.
	pub fn word(&self) -> &str {
		&self.word
	}

	/// Returns how many times the word was observed.
	pub fn occurrence(&self) -> usize {
		self.occurrence
	}

	/// Records one more observation.
	pub fn increment(&mut self) {
		self.occurrence += 1;
	}

	/// Records `count` more observations (used when merging partial models).
	pub fn increment_by(&mut self, count: usize) {
		self.occurrence += count;
	}
}

impl Ord for WordStat {
	fn cmp(&self, other: &Self) -> Ordering {
		self.occurrence
			.cmp(&other.occurrence)
			.then_with(|| other.word.cmp(&self.word))
	}
}

impl PartialOrd for WordStat {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl fmt::Display for WordStat {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}:{}", self.word, self.occurrence)
	}
}
