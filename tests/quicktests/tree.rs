use classic_bst::{recursive, Tree, TreeError};
use quickcheck_macros::quickcheck;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and deletes both hold the same values.
fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                bst.insert(x.clone());
                set.insert(x.clone());
            }
            Op::Delete(x) => {
                let _ = bst.delete(x);
                set.remove(x);
            }
        }
    }
}

/// Checks that every node's value is strictly between the bounds its ancestors impose.
fn is_ordered<T: Ord>(tree: &Tree<T>) -> bool {
    let mut pending = vec![(tree.root(), None, None)];
    while let Some((node, low, high)) = pending.pop() {
        let Some(node) = node else { continue };
        let value = node.value();
        if low.map_or(false, |low| value <= low) || high.map_or(false, |high| value >= high) {
            return false;
        }
        pending.push((node.left(), low, Some(value)));
        pending.push((node.right(), Some(value), high));
    }
    true
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.len() == set.len()
        && tree.items_in_order() == set.iter().collect::<Vec<_>>()
        && set.iter().all(|x| tree.search(x) == Some(x))
        && is_ordered(&tree)
}

#[quickcheck]
fn in_order_is_sorted(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let items = tree.items_in_order();

    items.windows(2).all(|w| w[0] < w[1]) && items.len() == tree.len()
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.search(x).is_none() && !tree.contains(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let mut present: HashSet<_> = xs.iter().copied().collect();
    for delete in &deletes {
        let expected = if present.remove(delete) {
            Ok(*delete)
        } else {
            Err(TreeError::NotFound)
        };
        if tree.delete(delete) != expected {
            return false;
        }
    }

    deletes.iter().all(|x| !tree.contains(x))
        && present.iter().all(|x| tree.contains(x))
        && tree.len() == present.len()
        && is_ordered(&tree)
}

#[quickcheck]
fn iterative_matches_recursive(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    do_ops(&ops, &mut tree, &mut BTreeSet::new());

    tree.items_in_order() == recursive::in_order(&tree)
        && tree.items_pre_order() == recursive::pre_order(&tree)
        && tree.items_post_order() == recursive::post_order(&tree)
        && tree.items_level_order() == recursive::level_order(&tree)
}

#[quickcheck]
fn height_bounds(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();

    match tree.height() {
        Err(e) => tree.is_empty() && e == TreeError::EmptyTree,
        // A tree of n nodes is at least floor(lg n) and at most n - 1 tall.
        Ok(height) => {
            let n = tree.len();
            height < n && n < 2usize.saturating_pow(height as u32 + 1)
        }
    }
}
