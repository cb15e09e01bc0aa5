use std::cmp::Ordering;
use std::fmt;
use std::fmt::Write;

/// Capacity reserved by `new` and restored by `clear`.
/// Not semantically meaningful, just avoids the first few reallocations.
const DEFAULT_CAPACITY: usize = 16;

/// Array-backed binary max-heap over an explicit ordering function.
///
/// The backing storage is a dense `Vec<T>` where index 0 always holds the
/// maximum under the active ordering. Children of index `i` live at
/// `2i + 1` and `2i + 2`.
///
/// ## Responsibilities
/// - O(log n) insertion and max-extraction, O(1) peek
/// - O(n) bulk construction from an arbitrary collection
/// - Snapshot export of the backing order for inspection/visualization
///
/// ## Invariants
/// - Heap property: for every index `i` with a child `c < len`,
///   `data[i] >= data[c]` under the active ordering
/// - Backing growth (amortized doubling via `Vec`) preserves all elements
///   and their relative positions
pub struct BinaryMaxHeap<T> {
	data: Vec<T>,
	cmp: Box<dyn Fn(&T, &T) -> Ordering>,
}

impl<T: Ord + 'static> BinaryMaxHeap<T> {
	/// Creates an empty heap ordered by the natural order of `T`.
	pub fn new() -> Self {
		Self::with_comparator(T::cmp)
	}

	/// Creates a heap from a collection, ordered by the natural order of `T`.
	///
	/// Bulk construction: O(n), faster than inserting each element.
	pub fn from_collection<I: IntoIterator<Item = T>>(items: I) -> Self {
		let mut heap = Self::new();
		heap.build_heap(items);
		heap
	}
}

impl<T> BinaryMaxHeap<T> {
	/// Creates an empty heap ordered by the given comparison function.
	///
	/// The function must define a total order; `Ordering::Greater` means
	/// "higher priority".
	pub fn with_comparator(cmp: impl Fn(&T, &T) -> Ordering + 'static) -> Self {
		Self {
			data: Vec::with_capacity(DEFAULT_CAPACITY),
			cmp: Box::new(cmp),
		}
	}

	/// Creates a heap from a collection with an explicit comparison function.
	pub fn from_collection_with<I>(items: I, cmp: impl Fn(&T, &T) -> Ordering + 'static) -> Self
	where
		I: IntoIterator<Item = T>,
	{
		let mut heap = Self::with_comparator(cmp);
		heap.build_heap(items);
		heap
	}

	/// Replaces the heap contents with the given collection and re-establishes
	/// the heap property.
	///
	/// Sifts down from the last non-leaf index toward the root, which bounds
	/// the total work by O(n). Never implemented as n individual inserts.
	pub fn build_heap<I: IntoIterator<Item = T>>(&mut self, items: I) {
		self.data = items.into_iter().collect();

		if self.data.len() < 2 {
			return;
		}
		// Last non-leaf is the parent of the last element
		for i in (0..=(self.data.len() / 2) - 1).rev() {
			self.percolate_down(i);
		}
	}

	/// Adds an item to the heap.
	///
	/// Amortized O(1), worst-case O(log n) (sift-up plus occasional
	/// backing-array growth). Always succeeds.
	pub fn insert(&mut self, item: T) {
		self.data.push(item);
		self.percolate_up(self.data.len() - 1);
	}

	/// Returns the maximum item without removing it.
	///
	/// # Errors
	/// Returns an error if the heap is empty.
	pub fn peek(&self) -> Result<&T, String> {
		self.data.first().ok_or_else(|| "Priority queue is empty".to_owned())
	}

	/// Removes and returns the maximum item.
	///
	/// Swaps the root with the last element, shrinks by one, then sifts the
	/// new root down toward the larger child. O(log n).
	///
	/// # Errors
	/// Returns an error if the heap is empty.
	pub fn extract_max(&mut self) -> Result<T, String> {
		if self.data.is_empty() {
			return Err("Priority queue is empty".to_owned());
		}

		let last = self.data.len() - 1;
		self.data.swap(0, last);
		let max = self.data.pop().ok_or_else(|| "Priority queue is empty".to_owned())?;
		self.percolate_down(0);

		Ok(max)
	}

	/// Returns the number of items in the heap.
	pub fn len(&self) -> usize {
		self.data.len()
	}

	/// Returns true if the heap holds no items.
	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	/// Returns the current capacity of the backing storage.
	pub fn capacity(&self) -> usize {
		self.data.capacity()
	}

	/// Empties the heap, resetting the backing storage to the default capacity.
	pub fn clear(&mut self) {
		self.data = Vec::with_capacity(DEFAULT_CAPACITY);
	}

	/// Returns the items in backing order (index 0 is the maximum).
	pub fn as_slice(&self) -> &[T] {
		&self.data
	}

	/// Returns a snapshot of the items in backing order (index 0 is the maximum).
	pub fn to_vec(&self) -> Vec<T>
	where
		T: Clone,
	{
		self.data.to_vec()
	}

	/// Sifts the item at `i` up, swapping with its parent while it exceeds it.
	fn percolate_up(&mut self, mut i: usize) {
		while i > 0 {
			let parent = (i - 1) / 2;
			if (self.cmp)(&self.data[i], &self.data[parent]) != Ordering::Greater {
				break;
			}
			self.data.swap(i, parent);
			i = parent;
		}
	}

	/// Sifts the item at `i` down, swapping with the larger of its children
	/// while that child exceeds it.
	fn percolate_down(&mut self, mut i: usize) {
		loop {
			let left = 2 * i + 1;
			let right = 2 * i + 2;

			if left >= self.data.len() {
				break;
			}

			let mut greater = left;
			if right < self.data.len()
				&& (self.cmp)(&self.data[right], &self.data[left]) == Ordering::Greater
			{
				greater = right;
			}

			if (self.cmp)(&self.data[i], &self.data[greater]) == Ordering::Less {
				self.data.swap(i, greater);
				i = greater;
			} else {
				break;
			}
		}
	}
}

impl<T: fmt::Display> BinaryMaxHeap<T> {
	/// Serializes the parent-child relationships as a Graphviz DOT edge list.
	///
	/// Debug/visualization hook: paste the output into a DOT renderer to see
	/// the tree shape. Not intended to round-trip.
	pub fn to_dot(&self) -> String {
		let mut dot = String::new();
		for i in 0..self.data.len() {
			for child in [2 * i + 1, 2 * i + 2] {
				if child < self.data.len() {
					// write! into a String cannot fail
					let _ = writeln!(dot, "\t\"{}\" -> \"{}\"", self.data[i], self.data[child]);
				}
			}
		}
		dot
	}
}

impl<T: Ord + 'static> Default for BinaryMaxHeap<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T: fmt::Debug> fmt::Debug for BinaryMaxHeap<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("BinaryMaxHeap").field("data", &self.data).finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn drain(heap: &mut BinaryMaxHeap<i32>) -> Vec<i32> {
		let mut out = Vec::new();
		while !heap.is_empty() {
			out.push(heap.extract_max().unwrap());
		}
		out
	}

	#[test]
	fn extract_returns_non_increasing_order() {
		let mut heap = BinaryMaxHeap::new();
		for v in [5, 1, 9, 3, 7, 2, 8, 6, 4] {
			heap.insert(v);
		}
		assert_eq!(heap.len(), 9);
		assert_eq!(drain(&mut heap), vec![9, 8, 7, 6, 5, 4, 3, 2, 1]);
		assert!(heap.is_empty());
	}

	#[test]
	fn build_heap_matches_individual_inserts() {
		let inputs: Vec<Vec<i32>> = vec![
			vec![],
			vec![42],
			vec![3, 3, 3],
			vec![1, 2, 3, 4, 5, 6, 7, 8],
			vec![8, 7, 6, 5, 4, 3, 2, 1],
			vec![10, -3, 7, 7, 0, 22, -3],
		];

		for input in inputs {
			let mut built = BinaryMaxHeap::from_collection(input.clone());
			let mut inserted = BinaryMaxHeap::new();
			for v in input.clone() {
				inserted.insert(v);
			}
			assert_eq!(drain(&mut built), drain(&mut inserted), "input {:?}", input);
		}
	}

	#[test]
	fn build_heap_accepts_fixed_size_array() {
		let mut heap = BinaryMaxHeap::new();
		heap.build_heap([2, 9, 4]);
		assert_eq!(heap.extract_max().unwrap(), 9);
	}

	#[test]
	fn build_heap_replaces_previous_contents() {
		let mut heap = BinaryMaxHeap::from_collection(vec![100, 200]);
		heap.build_heap(vec![1, 2, 3]);
		assert_eq!(heap.len(), 3);
		assert_eq!(drain(&mut heap), vec![3, 2, 1]);
	}

	#[test]
	fn peek_does_not_remove() {
		let mut heap = BinaryMaxHeap::new();
		heap.insert(3);
		heap.insert(11);
		assert_eq!(*heap.peek().unwrap(), 11);
		assert_eq!(*heap.peek().unwrap(), 11);
		assert_eq!(heap.len(), 2);
	}

	#[test]
	fn empty_heap_operations_are_errors() {
		let mut heap: BinaryMaxHeap<i32> = BinaryMaxHeap::new();
		assert!(heap.peek().is_err());
		assert!(heap.extract_max().is_err());
	}

	#[test]
	fn custom_comparator_reverses_priority() {
		// Min-heap through a reversed comparator
		let mut heap = BinaryMaxHeap::from_collection_with(vec![4, 1, 3], |a: &i32, b: &i32| b.cmp(a));
		assert_eq!(heap.extract_max().unwrap(), 1);
		assert_eq!(heap.extract_max().unwrap(), 3);
		assert_eq!(heap.extract_max().unwrap(), 4);
	}

	#[test]
	fn growth_preserves_elements() {
		let mut heap = BinaryMaxHeap::new();
		let n = DEFAULT_CAPACITY * 4;
		for v in 0..n as i32 {
			heap.insert(v);
		}
		assert_eq!(heap.len(), n);
		assert!(heap.capacity() >= n);
		assert_eq!(drain(&mut heap), (0..n as i32).rev().collect::<Vec<_>>());
	}

	#[test]
	fn clear_resets_to_default_capacity() {
		let mut heap = BinaryMaxHeap::from_collection((0..100).collect::<Vec<i32>>());
		heap.clear();
		assert!(heap.is_empty());
		assert!(heap.capacity() >= DEFAULT_CAPACITY);
		assert!(heap.capacity() < 100);
		heap.insert(7);
		assert_eq!(*heap.peek().unwrap(), 7);
	}

	#[test]
	fn snapshot_has_max_at_index_zero() {
		let heap = BinaryMaxHeap::from_collection(vec![2, 8, 5]);
		let snapshot = heap.to_vec();
		assert_eq!(snapshot.len(), 3);
		assert_eq!(snapshot[0], 8);
		assert_eq!(heap.as_slice()[0], 8);
	}

	#[test]
	fn dot_export_lists_parent_child_edges() {
		let heap = BinaryMaxHeap::from_collection(vec![1, 2, 3]);
		let dot = heap.to_dot();
		// Root is 3, children are the remaining two in backing order
		assert_eq!(dot.lines().count(), 2);
		assert!(dot.lines().all(|l| l.starts_with("\t\"3\" -> ")));
	}
}
