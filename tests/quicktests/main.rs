//! Property tests that drive both trees through their public API only and compare them against
//! `BTreeSet`.

use std::collections::BTreeSet;
use std::fmt::Debug;

use quickcheck::{Arbitrary, Gen};
use search_tree::{avl, unbalanced, Error, Result};

mod avl_tree;
mod unbalanced_tree;

/// An enum for the various kinds of "things" to do to
/// search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub enum Op<T> {
    /// Insert the T into the data structure
    Insert(T),
    /// Remove the T from the data structure
    Remove(T),
    /// Check the T is (or isn't) in the data structure
    Contains(T),
    /// Compare min and max
    MinMax,
}

impl<T: Arbitrary> Arbitrary for Op<T> {
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 1, 2, 3]).copied() {
            Some(0) => Op::Insert(T::arbitrary(g)),
            Some(1) => Op::Remove(T::arbitrary(g)),
            Some(2) => Op::Contains(T::arbitrary(g)),
            _ => Op::MinMax,
        }
    }
}

/// What the properties need from a tree, so one set of properties covers both.
pub trait SearchTree<T>: Default {
    fn insert(&mut self, value: T);
    fn remove(&mut self, value: &T) -> Result<()>;
    fn contains(&self, value: &T) -> bool;
    fn find_min(&self) -> Result<&T>;
    fn find_max(&self) -> Result<&T>;
    fn len(&self) -> usize;
    fn values(&self) -> Vec<&T>;
    fn pre_order(&self) -> Vec<&T>;
    fn post_order(&self) -> Vec<&T>;
    fn level_order(&self) -> Vec<&T>;
    fn leaf_count(&self) -> usize;
}

macro_rules! impl_search_tree {
    ($tree:ty) => {
        impl<T: Ord> SearchTree<T> for $tree {
            fn insert(&mut self, value: T) {
                <$tree>::insert(self, value)
            }
            fn remove(&mut self, value: &T) -> Result<()> {
                <$tree>::remove(self, value)
            }
            fn contains(&self, value: &T) -> bool {
                <$tree>::contains(self, value)
            }
            fn find_min(&self) -> Result<&T> {
                <$tree>::find_min(self)
            }
            fn find_max(&self) -> Result<&T> {
                <$tree>::find_max(self)
            }
            fn len(&self) -> usize {
                <$tree>::len(self)
            }
            fn values(&self) -> Vec<&T> {
                self.iter().collect()
            }
            fn pre_order(&self) -> Vec<&T> {
                <$tree>::pre_order(self).collect()
            }
            fn post_order(&self) -> Vec<&T> {
                <$tree>::post_order(self).collect()
            }
            fn level_order(&self) -> Vec<&T> {
                <$tree>::level_order(self).collect()
            }
            fn leaf_count(&self) -> usize {
                <$tree>::leaf_count(self)
            }
        }
    };
}

impl_search_tree!(avl::Tree<T>);
impl_search_tree!(unbalanced::Tree<T>);

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and removes we have the same values in both.
pub fn do_ops<S, T>(ops: &[Op<T>]) -> bool
where
    S: SearchTree<T>,
    T: Ord + Clone + Debug,
{
    let mut tree = S::default();
    let mut set = BTreeSet::new();

    for op in ops {
        let agrees = match op {
            Op::Insert(x) => {
                tree.insert(x.clone());
                set.insert(x.clone());
                true
            }
            Op::Remove(x) => {
                let expected = if set.is_empty() {
                    Err(Error::Underflow)
                } else {
                    set.remove(x);
                    Ok(())
                };
                tree.remove(x) == expected
            }
            Op::Contains(x) => tree.contains(x) == set.contains(x),
            Op::MinMax => {
                tree.find_min().ok() == set.first() && tree.find_max().ok() == set.last()
            }
        };
        if !agrees || tree.len() != set.len() {
            return false;
        }
    }

    tree.values().into_iter().eq(set.iter())
}

/// Inserting everything then removing some leaves exactly the values that weren't removed.
pub fn with_removals<S, T>(xs: Vec<T>, removes: Vec<T>) -> bool
where
    S: SearchTree<T>,
    T: Ord + Clone,
{
    let mut tree = S::default();
    for x in &xs {
        tree.insert(x.clone());
    }
    for remove in &removes {
        if tree.remove(remove).is_err() {
            // Only an empty tree may refuse.
            if tree.len() != 0 {
                return false;
            }
        }
    }

    let removed: BTreeSet<_> = removes.iter().collect();
    removes.iter().all(|x| !tree.contains(x))
        && xs
            .iter()
            .filter(|x| !removed.contains(x))
            .all(|x| tree.contains(x))
}

/// The values come back sorted with duplicates collapsed.
pub fn iterates_sorted<S, T>(xs: Vec<T>) -> bool
where
    S: SearchTree<T>,
    T: Ord + Clone,
{
    let mut tree = S::default();
    for x in &xs {
        tree.insert(x.clone());
    }
    let expected: BTreeSet<_> = xs.iter().collect();

    tree.values() == expected.into_iter().collect::<Vec<_>>()
}

/// Every traversal order visits each stored value exactly once, and only an empty tree has no
/// leaves.
pub fn traversals_visit_every_value<S, T>(xs: Vec<T>) -> bool
where
    S: SearchTree<T>,
    T: Ord + Clone,
{
    let mut tree = S::default();
    for x in &xs {
        tree.insert(x.clone());
    }
    let in_order = tree.values();
    let visits_all = |mut order: Vec<&T>| {
        order.sort();
        order == in_order
    };

    tree.level_order().len() == tree.len()
        && visits_all(tree.pre_order())
        && visits_all(tree.post_order())
        && visits_all(tree.level_order())
        && (tree.leaf_count() == 0) == (tree.len() == 0)
}
