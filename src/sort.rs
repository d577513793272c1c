//! In-place sorts of a slice of [`Record`]s by [`Record::title`].
//!
//! The two sorts settle ties differently. [`selection_sort`] orders records with equal titles by
//! id. [`quick_sort`] makes no promise about them.
//!
//! # Examples
//!
//! ```
//! use record_bst::record::Bid;
//! use record_bst::sort::selection_sort;
//!
//! let mut bids = vec![
//!     Bid::new("2", "B", "", 0.0),
//!     Bid::new("1", "B", "", 0.0),
//!     Bid::new("3", "A", "", 0.0),
//! ];
//! selection_sort(&mut bids);
//!
//! let ids: Vec<_> = bids.iter().map(|bid| bid.id.as_str()).collect();
//! assert_eq!(ids, ["3", "1", "2"]);
//! ```

use std::cmp::Ordering;

use log::debug;

use crate::record::Record;

/// Sorts `records` by title with a selection sort. This is always `O(n^2)`.
///
/// Records with the same title end up ordered by id, whatever their original order was.
pub fn selection_sort<R: Record>(records: &mut [R]) {
    if records.is_empty() {
        debug!("selection sort: nothing to sort");
        return;
    }

    for pos in 0..records.len() {
        let mut min = pos;
        for candidate in pos + 1..records.len() {
            if precedes(&records[candidate], &records[min]) {
                min = candidate;
            }
        }
        if min != pos {
            records.swap(pos, min);
        }
    }
}

/// Title first, then id among equal titles.
fn precedes<R: Record>(a: &R, b: &R) -> bool {
    match a.title().cmp(b.title()) {
        Ordering::Less => true,
        Ordering::Equal => a.id() < b.id(),
        Ordering::Greater => false,
    }
}

/// Sorts all of `records` by title with [`quick_sort_range`].
///
/// ```
/// use record_bst::record::Course;
/// use record_bst::sort::quick_sort;
///
/// let mut courses = vec![
///     Course::new("CSCI300", "Introduction to Algorithms"),
///     Course::new("CSCI101", "Computer Science Basics"),
///     Course::new("MATH201", "Discrete Mathematics"),
/// ];
/// quick_sort(&mut courses);
///
/// let ids: Vec<_> = courses.iter().map(|c| c.id.as_str()).collect();
/// assert_eq!(ids, ["CSCI101", "MATH201", "CSCI300"]);
/// ```
pub fn quick_sort<R: Record>(records: &mut [R]) {
    if records.len() <= 1 {
        return;
    }
    quick_sort_range(records, 0, records.len() - 1);
}

/// Sorts `records[low..=high]` by title with a recursive quicksort. It averages `O(n log n)`,
/// with `O(n^2)` in the worst case.
///
/// The relative order of records with equal titles is unspecified.
///
/// # Panics
///
/// If `high` is out of bounds while `low < high`.
pub fn quick_sort_range<R: Record>(records: &mut [R], low: usize, high: usize) {
    if records.len() <= 1 || low >= high {
        return;
    }

    // Everything up to and including `boundary` sorts before everything after it.
    let boundary = partition(records, low, high);
    quick_sort_range(records, low, boundary);
    quick_sort_range(records, boundary + 1, high);
}

/// Hoare partition around the middle element's title. Returns the last index of the lower part,
/// which is always less than `high`.
fn partition<R: Record>(records: &mut [R], mut low: usize, mut high: usize) -> usize {
    // Owned copy: the swaps below may move the pivot record.
    let pivot = records[low + (high - low) / 2].title().to_owned();

    loop {
        while records[low].title() < pivot.as_str() {
            low += 1;
        }
        while pivot.as_str() < records[high].title() {
            high -= 1;
        }

        if low >= high {
            return high;
        }

        records.swap(low, high);
        low += 1;
        high -= 1;
    }
}
