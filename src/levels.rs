//! Dependency-ordered leveling with cycle detection.
//!
//! [`group_by_dependencies`] partitions items into ordered levels such
//! that every dependency of an item sits in a strictly earlier level:
//! level 0 holds items with no dependencies, and an item's level is one
//! past the deepest level among its dependencies.
//!
//! The traversal is depth-first but iterative, driven by an explicit
//! stack of `(item, resolved dependencies, cursor)` frames, so
//! arbitrarily deep dependency chains cannot overflow the call stack.
//! Levels are memoized per item, giving O(n + e) traversal work for n
//! items and e dependency edges, plus the cost of resolving dependency
//! values back to input positions (a linear scan per dependency, because
//! equality is an arbitrary function rather than a hash).

use crate::error::{Error, Result};

/// Per-item traversal state.
#[derive(Clone, Copy, PartialEq, Eq)]
enum State {
    Unvisited,
    /// On the explicit stack; revisiting means a cycle.
    InProgress,
    Leveled(usize),
}

/// One in-flight item of the depth-first traversal.
struct Frame {
    item: usize,
    /// Dependencies resolved to input positions.
    deps: Vec<usize>,
    /// Next dependency to visit.
    cursor: usize,
}

/// Partitions `items` into dependency-ordered levels, comparing items
/// with their natural equality.
///
/// `deps` maps an item to the items it depends on; `None` and an empty
/// vector both mean "no dependencies". Every returned dependency must be
/// a member of `items`: a dependency with no equal item in the input
/// fails with [`Error::ForeignDependency`], and a cyclic graph fails with
/// [`Error::CircularDependency`]. Failures return no partial output.
///
/// Within a level, items appear in the order their leveling completed,
/// which is not necessarily input order.
///
/// # Examples
///
/// ```
/// use seqkit::levels::group_by_dependencies;
///
/// let items = ["a", "b", "c"];
/// let levels = group_by_dependencies(&items, |&item| match item {
///     "b" => Some(vec!["a"]),
///     "c" => Some(vec!["a", "b"]),
///     _ => None,
/// })
/// .unwrap();
///
/// assert_eq!(levels, vec![vec!["a"], vec!["b"], vec!["c"]]);
/// ```
pub fn group_by_dependencies<T, D>(items: &[T], deps: D) -> Result<Vec<Vec<T>>>
where
    T: Clone + PartialEq,
    D: FnMut(&T) -> Option<Vec<T>>,
{
    group_by_dependencies_by(items, deps, |a, b| a == b)
}

/// Like [`group_by_dependencies`], with a caller-supplied equality
/// function governing which input item a returned dependency refers to.
///
/// # Examples
///
/// ```
/// use seqkit::levels::group_by_dependencies_by;
///
/// let items = ["Lib", "App"];
/// let levels = group_by_dependencies_by(
///     &items,
///     |&item| (item == "App").then(|| vec!["lib"]),
///     |a, b| a.eq_ignore_ascii_case(b),
/// )
/// .unwrap();
///
/// assert_eq!(levels, vec![vec!["Lib"], vec!["App"]]);
/// ```
pub fn group_by_dependencies_by<T, D, E>(
    items: &[T],
    mut deps_fn: D,
    mut eq: E,
) -> Result<Vec<Vec<T>>>
where
    T: Clone,
    D: FnMut(&T) -> Option<Vec<T>>,
    E: FnMut(&T, &T) -> bool,
{
    let n = items.len();
    let mut states = vec![State::Unvisited; n];
    let mut levels: Vec<Vec<T>> = Vec::new();
    let mut stack: Vec<Frame> = Vec::new();

    for root in 0..n {
        if states[root] != State::Unvisited {
            continue;
        }
        states[root] = State::InProgress;
        stack.push(Frame {
            item: root,
            deps: resolve_deps(items, &mut deps_fn, &mut eq, root)?,
            cursor: 0,
        });

        while let Some(top) = stack.last_mut() {
            if let Some(&dep) = top.deps.get(top.cursor) {
                top.cursor += 1;
                match states[dep] {
                    State::Leveled(_) => {}
                    State::InProgress => {
                        return Err(Error::CircularDependency { index: dep });
                    }
                    State::Unvisited => {
                        states[dep] = State::InProgress;
                        stack.push(Frame {
                            item: dep,
                            deps: resolve_deps(items, &mut deps_fn, &mut eq, dep)?,
                            cursor: 0,
                        });
                    }
                }
            } else {
                // All dependencies leveled; this item sits one past the
                // deepest of them.
                let level = top
                    .deps
                    .iter()
                    .map(|&dep| match states[dep] {
                        State::Leveled(l) => l + 1,
                        _ => unreachable!("dependency leveled before its dependent"),
                    })
                    .max()
                    .unwrap_or(0);
                states[top.item] = State::Leveled(level);
                if levels.len() <= level {
                    levels.resize_with(level + 1, Vec::new);
                }
                levels[level].push(items[top.item].clone());
                stack.pop();
            }
        }
    }

    Ok(levels)
}

/// Fetches the dependency list of `items[index]` and resolves each value
/// to its position in the input. A value with no equal input item is
/// rejected.
fn resolve_deps<T, D, E>(items: &[T], deps_fn: &mut D, eq: &mut E, index: usize) -> Result<Vec<usize>>
where
    D: FnMut(&T) -> Option<Vec<T>>,
    E: FnMut(&T, &T) -> bool,
{
    let values = deps_fn(&items[index]).unwrap_or_default();
    let mut positions = Vec::with_capacity(values.len());
    for value in &values {
        let position = items
            .iter()
            .position(|candidate| eq(candidate, value))
            .ok_or(Error::ForeignDependency { index })?;
        positions.push(position);
    }
    Ok(positions)
}
