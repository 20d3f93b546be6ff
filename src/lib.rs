//! # Seqkit
//!
//! `seqkit` is a small toolkit of generic algorithms over in-memory
//! sequences: comparator-driven in-place sorting, nearest-match binary
//! search, dependency-ordered leveling with cycle detection, and lazy
//! multi-source combinatorial enumeration.
//!
//! Every operation is a pure, synchronous transformation over a slice or
//! an iterator. There is no I/O, no persistence, no hidden global state
//! (comparators, key projections, and dependency functions are always
//! passed explicitly per call), and no internal synchronization; callers
//! sorting a shared sequence from several threads must lock it themselves.
//!
//! ## Components
//!
//! - **[`sort`]**: four interchangeable in-place sorts taking a three-way
//!   comparator: [`bubble_sort`] and [`merge_sort`] are stable,
//!   [`shell_sort`] and [`heap_sort`] trade stability for speed or space.
//! - **[`nearest`]**: binary search over a key-sorted sequence that finds
//!   the best index when no exact match exists: [`nearest_under`] for the
//!   rightmost key `<=` the target, [`nearest_over`] for the leftmost
//!   key `>=` it.
//! - **[`levels`]**: [`group_by_dependencies`] partitions items into
//!   ordered levels where every dependency sits strictly earlier, failing
//!   fast on cyclic or foreign dependencies.
//! - **[`combine`]**: [`cartesian_product`] and [`alternating_select`]
//!   enumerate combinations and round-robin interleavings lazily, pulling
//!   from each source through its own cursor.
//!
//! ## Usage
//!
//! ### Sorting with a comparator
//!
//! ```rust
//! use seqkit::prelude::*;
//!
//! let mut data = vec!["banana", "apple", "cherry", "date"];
//! merge_sort(&mut data, |a, b| a.cmp(b));
//!
//! assert_eq!(data, vec!["apple", "banana", "cherry", "date"]);
//! ```
//!
//! ### Nearest match in a sorted sequence
//!
//! ```rust
//! use seqkit::prelude::*;
//!
//! let readings = [(0, 1.0), (10, 1.4), (10, 1.5), (25, 0.9)];
//!
//! // Rightmost reading taken at or before t=15.
//! assert_eq!(nearest_under(&readings, |r| r.0, &15), Some(2));
//! // Leftmost reading taken at or after t=15.
//! assert_eq!(nearest_over(&readings, |r| r.0, &15), Some(3));
//! ```
//!
//! ### Dependency leveling
//!
//! ```rust
//! use seqkit::prelude::*;
//!
//! let tasks = ["deploy", "build", "test"];
//! let levels = group_by_dependencies(&tasks, |&task| match task {
//!     "test" => Some(vec!["build"]),
//!     "deploy" => Some(vec!["build", "test"]),
//!     _ => None,
//! })?;
//!
//! assert_eq!(levels, vec![vec!["build"], vec!["test"], vec!["deploy"]]);
//! # Ok::<(), seqkit::Error>(())
//! ```
//!
//! ### Lazy enumeration
//!
//! ```rust
//! use seqkit::prelude::*;
//!
//! let lanes = [vec![1, 2, 3], vec![40, 50]];
//! let interleaved: Vec<i32> = alternating_select(&lanes, |l| l.iter().copied()).collect();
//!
//! assert_eq!(interleaved, vec![1, 40, 2, 50, 3]);
//! ```

pub mod combine;
pub mod error;
pub mod levels;
pub mod nearest;
pub mod sort;

pub use combine::{AlternatingSelect, CartesianProduct, alternating_select, cartesian_product};
pub use error::{Error, Result};
pub use levels::{group_by_dependencies, group_by_dependencies_by};
pub use nearest::{find_nearest_over, find_nearest_under, nearest_over, nearest_under};
pub use sort::{bubble_sort, heap_sort, merge_sort, shell_sort};

pub mod prelude {
    pub use crate::combine::{alternating_select, cartesian_product};
    pub use crate::error::{Error, Result};
    pub use crate::levels::{group_by_dependencies, group_by_dependencies_by};
    pub use crate::nearest::{find_nearest_over, find_nearest_under, nearest_over, nearest_under};
    pub use crate::sort::{bubble_sort, heap_sort, merge_sort, shell_sort};
}
