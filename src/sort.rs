//! Comparator-driven in-place sorting.
//!
//! Four interchangeable algorithms with different stability and complexity
//! trade-offs:
//!
//! | Algorithm | Stable | Time | Extra space |
//! |---|---|---|---|
//! | [`bubble_sort`] | yes | O(n²), O(n) on sorted input | O(1) |
//! | [`shell_sort`] | no | sub-quadratic average | O(1) |
//! | [`heap_sort`] | no | O(n log n) worst case | O(1) |
//! | [`merge_sort`] | yes | O(n log n) | O(n) |
//!
//! All four take a three-way comparator and reorder the slice in place.
//! They never change the multiset of elements, only their order, and a
//! slice of length 0 or 1 is left untouched. The number of comparisons
//! each algorithm performs is bounded by its loop structure, not by the
//! comparator's answers, so an inconsistent comparator can scramble the
//! output but cannot cause a panic or an infinite loop.

use std::cmp::Ordering;

/// Gap table for [`shell_sort`] (Incerpi–Sedgewick sequence). Gaps past
/// the table end are extended by a fixed 9/4 multiplier.
const SHELL_GAPS: [usize; 16] = [
    1, 3, 7, 21, 48, 112, 336, 861, 1968, 4592, 13776, 33936, 86961, 198768, 463792, 1391376,
];

/// Sorts `seq` in place with repeated adjacent-swap passes.
///
/// Stable and adaptive: a pass that performs no swap terminates the sort,
/// so an already-sorted slice costs a single O(n) scan. Worst and average
/// case are O(n²); prefer [`heap_sort`] or [`merge_sort`] for large inputs.
///
/// # Examples
///
/// ```
/// use seqkit::sort::bubble_sort;
///
/// let mut data = vec![3, 1, 4, 1, 5];
/// bubble_sort(&mut data, |a, b| a.cmp(b));
/// assert_eq!(data, vec![1, 1, 3, 4, 5]);
/// ```
pub fn bubble_sort<T, F>(seq: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = seq.len();
    if len <= 1 {
        return;
    }

    // After each pass the largest remaining element has bubbled into the
    // tail, so the scanned prefix shrinks by one.
    for pass in 0..len - 1 {
        let mut swapped = false;
        for i in 0..len - 1 - pass {
            if compare(&seq[i], &seq[i + 1]) == Ordering::Greater {
                seq.swap(i, i + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

/// Sorts `seq` in place with gapped insertion sort over a fixed decreasing
/// gap sequence (1, 3, 7, 21, 48, …).
///
/// Not stable. Sub-quadratic on average, O(1) extra space.
///
/// # Examples
///
/// ```
/// use seqkit::sort::shell_sort;
///
/// let mut data = vec![9, 8, 7, 6, 5, 4, 3, 2, 1];
/// shell_sort(&mut data, |a, b| a.cmp(b));
/// assert_eq!(data, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
/// ```
pub fn shell_sort<T, F>(seq: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = seq.len();
    if len <= 1 {
        return;
    }

    for gap in gaps_below(len).into_iter().rev() {
        // Plain insertion sort over each gap-strided subsequence.
        for start in gap..len {
            let mut i = start;
            while i >= gap && compare(&seq[i - gap], &seq[i]) == Ordering::Greater {
                seq.swap(i - gap, i);
                i -= gap;
            }
        }
    }
}

/// Returns the ascending list of gaps strictly below `len`.
fn gaps_below(len: usize) -> Vec<usize> {
    let mut gaps: Vec<usize> = SHELL_GAPS.iter().copied().take_while(|&g| g < len).collect();

    // Extend beyond the table for very large inputs.
    if gaps.len() == SHELL_GAPS.len() {
        let mut gap = *gaps.last().unwrap();
        loop {
            gap = gap / 4 * 9;
            if gap >= len {
                break;
            }
            gaps.push(gap);
        }
    }
    gaps
}

/// Sorts `seq` in place by building an implicit max-heap and repeatedly
/// extracting the root into the tail.
///
/// The heap is built by sift-up insertion of each element in turn; the
/// extraction phase swaps the root with the last element of the shrinking
/// heap prefix and restores heap order with a sift-down. Not stable.
/// O(n log n) worst case, O(1) extra space.
///
/// # Examples
///
/// ```
/// use seqkit::sort::heap_sort;
///
/// let mut data = vec![2, 7, 1, 8, 2, 8];
/// heap_sort(&mut data, |a, b| a.cmp(b));
/// assert_eq!(data, vec![1, 2, 2, 7, 8, 8]);
/// ```
pub fn heap_sort<T, F>(seq: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = seq.len();
    if len <= 1 {
        return;
    }

    // Build phase: grow the heap one element at a time.
    for end in 1..len {
        sift_up(seq, end, &mut compare);
    }

    // Extraction phase: root is the current max of seq[..heap_len].
    for heap_len in (1..len).rev() {
        seq.swap(0, heap_len);
        sift_down(seq, heap_len, &mut compare);
    }
}

/// Moves `seq[child]` up toward the root until its parent is not smaller.
fn sift_up<T, F>(seq: &mut [T], mut child: usize, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    while child > 0 {
        let parent = (child - 1) / 2;
        if compare(&seq[parent], &seq[child]) == Ordering::Less {
            seq.swap(parent, child);
            child = parent;
        } else {
            break;
        }
    }
}

/// Moves `seq[0]` down within the heap prefix `seq[..heap_len]` until both
/// children are not greater.
fn sift_down<T, F>(seq: &mut [T], heap_len: usize, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut node = 0;
    loop {
        let left = 2 * node + 1;
        if left >= heap_len {
            break;
        }
        let right = left + 1;
        let mut largest = left;
        if right < heap_len && compare(&seq[left], &seq[right]) == Ordering::Less {
            largest = right;
        }
        if compare(&seq[node], &seq[largest]) == Ordering::Less {
            seq.swap(node, largest);
            node = largest;
        } else {
            break;
        }
    }
}

/// Sorts `seq` in place by recursive midpoint splitting and buffered
/// merging.
///
/// Ties are taken from the left half, which preserves the input order of
/// equal elements (stable). O(n log n) time; each merge clones the left
/// half into a temporary buffer, hence the `Clone` bound and O(n) extra
/// space.
///
/// # Examples
///
/// ```
/// use seqkit::sort::merge_sort;
///
/// let mut data = vec!["pear", "fig", "plum", "fig"];
/// merge_sort(&mut data, |a, b| a.len().cmp(&b.len()));
/// assert_eq!(data, vec!["fig", "fig", "pear", "plum"]);
/// ```
pub fn merge_sort<T, F>(seq: &mut [T], mut compare: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort_inner(seq, &mut compare);
}

fn merge_sort_inner<T, F>(seq: &mut [T], compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = seq.len();
    if len <= 1 {
        return;
    }

    let mid = len / 2;
    merge_sort_inner(&mut seq[..mid], compare);
    merge_sort_inner(&mut seq[mid..], compare);
    merge_halves(seq, mid, compare);
}

/// Merges the sorted halves `seq[..mid]` and `seq[mid..]` back into `seq`.
fn merge_halves<T, F>(seq: &mut [T], mid: usize, compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let left: Vec<T> = seq[..mid].to_vec();
    let mut l = 0;
    let mut r = mid;
    let mut out = 0;

    while l < left.len() && r < seq.len() {
        // left <= right takes the left element, keeping equal elements in
        // their original relative order.
        if compare(&left[l], &seq[r]) != Ordering::Greater {
            seq[out] = left[l].clone();
            l += 1;
        } else {
            seq.swap(out, r);
            r += 1;
        }
        out += 1;
    }

    // Whatever remains of the left buffer slots in after the exhausted
    // right run; remaining right elements are already in place.
    while l < left.len() {
        seq[out] = left[l].clone();
        l += 1;
        out += 1;
    }
}
