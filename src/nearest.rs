//! Nearest-match binary search over sequences sorted ascending by a
//! projected key.
//!
//! [`nearest_under`] finds the rightmost index whose key is `<=` the
//! criteria, [`nearest_over`] the leftmost index whose key is `>=` it.
//! Absence of a qualifying index is a normal `None` result, not an error.
//!
//! Both operations probe the two extremes of the sequence before entering
//! the binary narrowing loop. This is deliberate: empty and single-element
//! sequences, criteria outside the key range, and exact hits at either end
//! all resolve in O(1) without touching the loop, and those are the common
//! cases in practice.

/// Returns the index of the rightmost item whose projected key is
/// less than or equal to `criteria`, or `None` if even the smallest key
/// exceeds it.
///
/// `seq` must be sorted ascending by the projected key; the result is
/// unspecified otherwise. O(log n).
///
/// # Examples
///
/// ```
/// use seqkit::nearest::nearest_under;
///
/// let seq = [1, 3, 3, 7];
/// assert_eq!(nearest_under(&seq, |&x| x, &5), Some(2));
/// assert_eq!(nearest_under(&seq, |&x| x, &0), None);
/// ```
pub fn nearest_under<T, K, F>(seq: &[T], mut key: F, criteria: &K) -> Option<usize>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    if seq.is_empty() {
        return None;
    }
    let last = seq.len() - 1;

    // Extremes first: criteria at or above the maximum matches the tail,
    // criteria below the minimum matches nothing.
    if key(&seq[last]) <= *criteria {
        return Some(last);
    }
    if key(&seq[0]) > *criteria {
        return None;
    }

    // Invariant: key(seq[lo]) <= criteria < key(seq[hi]).
    let mut lo = 0;
    let mut hi = last;
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        let k = key(&seq[mid]);
        if k == *criteria {
            return Some(mid);
        }
        if k < *criteria {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    Some(lo)
}

/// Returns the index of the leftmost item whose projected key is
/// greater than or equal to `criteria`, or `None` if even the largest key
/// is below it.
///
/// Dual of [`nearest_under`]; the same sortedness precondition applies.
///
/// # Examples
///
/// ```
/// use seqkit::nearest::nearest_over;
///
/// let seq = [1, 3, 3, 7];
/// assert_eq!(nearest_over(&seq, |&x| x, &5), Some(3));
/// assert_eq!(nearest_over(&seq, |&x| x, &8), None);
/// ```
pub fn nearest_over<T, K, F>(seq: &[T], mut key: F, criteria: &K) -> Option<usize>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    if seq.is_empty() {
        return None;
    }
    let last = seq.len() - 1;

    if key(&seq[0]) >= *criteria {
        return Some(0);
    }
    if key(&seq[last]) < *criteria {
        return None;
    }

    // Invariant: key(seq[lo]) < criteria <= key(seq[hi]).
    let mut lo = 0;
    let mut hi = last;
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        let k = key(&seq[mid]);
        if k == *criteria {
            return Some(mid);
        }
        if k < *criteria {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    Some(hi)
}

/// Like [`nearest_under`], but dereferences the found index.
///
/// # Examples
///
/// ```
/// use seqkit::nearest::find_nearest_under;
///
/// let seq = [1, 3, 3, 7];
/// assert_eq!(find_nearest_under(&seq, |&x| x, &5), Some(&3));
/// ```
pub fn find_nearest_under<'a, T, K, F>(seq: &'a [T], key: F, criteria: &K) -> Option<&'a T>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    nearest_under(seq, key, criteria).map(|i| &seq[i])
}

/// Like [`nearest_over`], but dereferences the found index.
pub fn find_nearest_over<'a, T, K, F>(seq: &'a [T], key: F, criteria: &K) -> Option<&'a T>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    nearest_over(seq, key, criteria).map(|i| &seq[i])
}
