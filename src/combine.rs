//! Lazy multi-source combinatorial enumeration.
//!
//! Both enumerators pull from their sources through one cursor per source
//! and never materialize a source eagerly, so sources may be large,
//! expensive, or order-sensitive. Dropping the enumerator abandons the
//! cursors wherever they stand.
//!
//! - [`cartesian_product`] yields every combination of exactly one item
//!   per source, discovering items round-robin and emitting each new
//!   combination as soon as it becomes possible.
//! - [`alternating_select`] yields single items, cycling through the
//!   sources and taking one from each in turn.

use std::collections::VecDeque;

/// Lazily enumerates the full cross-product of the sources' items.
///
/// `selector` produces each source's item sequence; exactly one item of
/// each combination comes from each source, in source order. Items are
/// discovered one source at a time in round-robin order, and each time a
/// source yields a new item every combination pairing it with the
/// previously seen items of the other sources is emitted before the next
/// pull. A source is exhausted once its cursor runs dry; the product ends
/// when all sources are. If any source yields nothing, the product is
/// empty.
///
/// The early yields matter: consumers get partial results long before
/// slow or unbounded sources finish.
///
/// # Examples
///
/// ```
/// use seqkit::combine::cartesian_product;
///
/// let sources = [vec![1, 2], vec![10, 20]];
/// let mut combos: Vec<Vec<i32>> =
///     cartesian_product(&sources, |s| s.iter().copied()).collect();
///
/// combos.sort();
/// assert_eq!(
///     combos,
///     vec![vec![1, 10], vec![1, 20], vec![2, 10], vec![2, 20]],
/// );
/// ```
pub fn cartesian_product<'a, S, T, I, F>(sources: &'a [S], mut selector: F) -> CartesianProduct<I::IntoIter>
where
    T: Clone,
    I: IntoIterator<Item = T>,
    F: FnMut(&'a S) -> I,
{
    CartesianProduct {
        cursors: sources.iter().map(|s| Some(selector(s).into_iter())).collect(),
        seen: vec![Vec::new(); sources.len()],
        pending: VecDeque::new(),
        turn: 0,
    }
}

/// Iterator returned by [`cartesian_product`].
pub struct CartesianProduct<I: Iterator> {
    /// One pull cursor per source; `None` once exhausted.
    cursors: Vec<Option<I>>,
    /// Items discovered so far, per source.
    seen: Vec<Vec<I::Item>>,
    /// Combinations produced by the latest discovery, not yet yielded.
    pending: VecDeque<Vec<I::Item>>,
    /// Round-robin position of the next pull.
    turn: usize,
}

impl<I> Iterator for CartesianProduct<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(combo) = self.pending.pop_front() {
                return Some(combo);
            }
            if self.cursors.is_empty() {
                return None;
            }

            // Pull one item from the next live source in rotation.
            let source = match self.next_live_source() {
                Some(source) => source,
                None => return None,
            };
            self.turn = source + 1;
            match self.cursors[source].as_mut().and_then(Iterator::next) {
                Some(item) => {
                    self.seen[source].push(item.clone());
                    self.emit_combinations(source, item);
                }
                None => {
                    self.cursors[source] = None;
                }
            }
        }
    }
}

impl<I> CartesianProduct<I>
where
    I: Iterator,
    I::Item: Clone,
{
    /// Finds the next non-exhausted source at or after `turn`, wrapping
    /// around; `None` once every cursor is spent.
    fn next_live_source(&self) -> Option<usize> {
        let n = self.cursors.len();
        (0..n)
            .map(|offset| (self.turn + offset) % n)
            .find(|&source| self.cursors[source].is_some())
    }

    /// Queues every combination that uses `item` at position `source` and
    /// previously seen items everywhere else.
    fn emit_combinations(&mut self, source: usize, item: I::Item) {
        // Sources that have not yielded yet make the pool empty; their
        // combinations appear once they contribute.
        if (0..self.seen.len()).any(|other| other != source && self.seen[other].is_empty()) {
            return;
        }

        let mut combo: Vec<I::Item> = Vec::with_capacity(self.seen.len());
        self.fill_combinations(0, source, &item, &mut combo);
    }

    /// Depth-first expansion over the seen pools, fixing `item` at
    /// position `source`.
    fn fill_combinations(&mut self, position: usize, source: usize, item: &I::Item, combo: &mut Vec<I::Item>) {
        if position == self.seen.len() {
            self.pending.push_back(combo.clone());
            return;
        }
        if position == source {
            combo.push(item.clone());
            self.fill_combinations(position + 1, source, item, combo);
            combo.pop();
        } else {
            for i in 0..self.seen[position].len() {
                let candidate = self.seen[position][i].clone();
                combo.push(candidate);
                self.fill_combinations(position + 1, source, item, combo);
                combo.pop();
            }
        }
    }
}

/// Lazily interleaves the sources' items round-robin.
///
/// The first pass yields the first available item of each source in
/// source order, so the first N yields stream immediately; after that the
/// rotation continues, pulling one further item from each source in turn
/// and skipping sources that have run dry, until every source is
/// exhausted.
///
/// # Examples
///
/// ```
/// use seqkit::combine::alternating_select;
///
/// let sources = [vec![1, 2, 3], vec![10, 20]];
/// let picked: Vec<i32> = alternating_select(&sources, |s| s.iter().copied()).collect();
/// assert_eq!(picked, vec![1, 10, 2, 20, 3]);
/// ```
pub fn alternating_select<'a, S, T, I, F>(sources: &'a [S], mut selector: F) -> AlternatingSelect<I::IntoIter>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&'a S) -> I,
{
    AlternatingSelect {
        cursors: sources.iter().map(|s| Some(selector(s).into_iter())).collect(),
        turn: 0,
    }
}

/// Iterator returned by [`alternating_select`].
pub struct AlternatingSelect<I: Iterator> {
    /// One pull cursor per source; `None` once exhausted.
    cursors: Vec<Option<I>>,
    /// Round-robin position of the next pull.
    turn: usize,
}

impl<I: Iterator> Iterator for AlternatingSelect<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.cursors.len();
        for offset in 0..n {
            let source = (self.turn + offset) % n;
            let Some(cursor) = self.cursors[source].as_mut() else {
                continue;
            };
            match cursor.next() {
                Some(item) => {
                    self.turn = source + 1;
                    return Some(item);
                }
                None => self.cursors[source] = None,
            }
        }
        None
    }
}
