use seqkit::prelude::*;
use std::cell::Cell;
use std::collections::HashSet;

#[test]
fn test_product_two_by_two() {
    let sources = [vec!['1', '2'], vec!['x', 'y']];
    let combos: Vec<Vec<char>> = cartesian_product(&sources, |s| s.iter().copied()).collect();

    // Round-robin discovery: '1' alone forms nothing, 'x' completes
    // (1,x), '2' pairs with the seen 'x', then 'y' pairs with both
    // seen items of the first source.
    assert_eq!(
        combos,
        vec![
            vec!['1', 'x'],
            vec!['2', 'x'],
            vec!['1', 'y'],
            vec!['2', 'y'],
        ],
    );
}

#[test]
fn test_product_is_exact_set() {
    let sources = [vec![0u8, 1], vec![0u8, 1, 2], vec![0u8, 1]];
    let combos: Vec<Vec<u8>> = cartesian_product(&sources, |s| s.iter().copied()).collect();

    assert_eq!(combos.len(), 2 * 3 * 2);
    let unique: HashSet<Vec<u8>> = combos.iter().cloned().collect();
    assert_eq!(unique.len(), combos.len(), "a combination was emitted twice");

    for combo in &combos {
        assert_eq!(combo.len(), 3);
        assert!(sources[0].contains(&combo[0]));
        assert!(sources[1].contains(&combo[1]));
        assert!(sources[2].contains(&combo[2]));
    }
}

#[test]
fn test_product_single_source() {
    let sources = [vec![1, 2, 3]];
    let combos: Vec<Vec<i32>> = cartesian_product(&sources, |s| s.iter().copied()).collect();

    assert_eq!(combos, vec![vec![1], vec![2], vec![3]]);
}

#[test]
fn test_product_empty_source_empties_everything() {
    let sources = [vec![1, 2, 3], vec![]];
    let combos: Vec<Vec<i32>> = cartesian_product(&sources, |s| s.iter().copied()).collect();
    assert!(combos.is_empty());

    let sources = [vec![], vec![1, 2, 3]];
    let combos: Vec<Vec<i32>> = cartesian_product(&sources, |s| s.iter().copied()).collect();
    assert!(combos.is_empty());
}

#[test]
fn test_product_no_sources() {
    let sources: [Vec<i32>; 0] = [];
    let mut product = cartesian_product(&sources, |s| s.iter().copied());
    assert_eq!(product.next(), None);
}

#[test]
fn test_product_streams_from_unbounded_sources() {
    // Neither source ever ends; a consumer still gets combinations as
    // they become possible.
    let sources = [1i64.., 1i64..];
    let first_five: Vec<Vec<i64>> =
        cartesian_product(&sources, |s| s.clone()).take(5).collect();

    assert_eq!(
        first_five,
        vec![
            vec![1, 1],
            vec![2, 1],
            vec![1, 2],
            vec![2, 2],
            vec![3, 1],
        ],
    );
}

#[test]
fn test_product_pulls_lazily() {
    // Count every item pulled through the cursors; building the iterator
    // must pull nothing, and early yields must not drain the sources.
    let pulls = Cell::new(0usize);
    let sources = [vec![1, 2, 3, 4], vec![10, 20, 30, 40]];

    let mut product = cartesian_product(&sources, |s: &Vec<i32>| {
        s.clone().into_iter().inspect(|_| pulls.set(pulls.get() + 1))
    });
    assert_eq!(pulls.get(), 0);

    // First combination needs one item from each source.
    assert_eq!(product.next(), Some(vec![1, 10]));
    assert_eq!(pulls.get(), 2);

    assert_eq!(product.next(), Some(vec![2, 10]));
    assert_eq!(pulls.get(), 3);
}

#[test]
fn test_alternating_basic() {
    let sources = [vec![1, 2, 3], vec![10, 20]];
    let picked: Vec<i32> = alternating_select(&sources, |s| s.iter().copied()).collect();

    assert_eq!(picked, vec![1, 10, 2, 20, 3]);
}

#[test]
fn test_alternating_skips_exhausted_sources() {
    let sources = [vec![1, 2], vec![], vec![9, 8, 7]];
    let picked: Vec<i32> = alternating_select(&sources, |s| s.iter().copied()).collect();

    assert_eq!(picked, vec![1, 9, 2, 8, 7]);
}

#[test]
fn test_alternating_single_source() {
    let sources = [vec![5, 6, 7]];
    let picked: Vec<i32> = alternating_select(&sources, |s| s.iter().copied()).collect();

    assert_eq!(picked, vec![5, 6, 7]);
}

#[test]
fn test_alternating_no_sources() {
    let sources: [Vec<i32>; 0] = [];
    let mut picked = alternating_select(&sources, |s| s.iter().copied());
    assert_eq!(picked.next(), None);
}

#[test]
fn test_alternating_all_empty() {
    let sources = [Vec::<i32>::new(), Vec::new()];
    let mut picked = alternating_select(&sources, |s| s.iter().copied());
    assert_eq!(picked.next(), None);
}

#[test]
fn test_alternating_streams_from_unbounded_sources() {
    let sources = [0i64.., 100i64..];
    let first_six: Vec<i64> = alternating_select(&sources, |s| s.clone()).take(6).collect();

    assert_eq!(first_six, vec![0, 100, 1, 101, 2, 102]);
}

#[test]
fn test_alternating_pulls_exactly_one_item_per_yield() {
    let pulls = Cell::new(0usize);
    let sources = [vec![1, 2], vec![10, 20]];

    let mut picked = alternating_select(&sources, |s: &Vec<i32>| {
        s.clone().into_iter().inspect(|_| pulls.set(pulls.get() + 1))
    });
    assert_eq!(pulls.get(), 0);

    assert_eq!(picked.next(), Some(1));
    assert_eq!(pulls.get(), 1);
    assert_eq!(picked.next(), Some(10));
    assert_eq!(pulls.get(), 2);
}

#[test]
fn test_product_preserves_source_order_in_combos() {
    let sources = [vec!["a1", "a2"], vec!["b1"], vec!["c1", "c2"]];
    let combos: Vec<Vec<&str>> = cartesian_product(&sources, |s| s.iter().copied()).collect();

    for combo in &combos {
        assert!(combo[0].starts_with('a'));
        assert!(combo[1].starts_with('b'));
        assert!(combo[2].starts_with('c'));
    }
    assert_eq!(combos.len(), 4);
}
