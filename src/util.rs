//! Read-only descent shared by both trees. Neither search nor traversal cares whether a node
//! carries balance metadata, so both tree modules expose their nodes through [`BinaryNode`] and
//! reuse these helpers.

use std::cmp::Ordering;
use std::collections::VecDeque;

/// A node with a value and up to two owned children.
pub(crate) trait BinaryNode {
    type Value;

    fn value(&self) -> &Self::Value;
    fn left(&self) -> Option<&Self>;
    fn right(&self) -> Option<&Self>;
}

/// Descends from `root` towards `value`, going left when `value` is smaller and right when it is
/// larger. Falling off the bottom means it isn't there.
pub(crate) fn contains<N>(root: Option<&N>, value: &N::Value) -> bool
where
    N: BinaryNode,
    N::Value: Ord,
{
    let mut node = root;
    while let Some(n) = node {
        node = match value.cmp(n.value()) {
            Ordering::Less => n.left(),
            Ordering::Equal => return true,
            Ordering::Greater => n.right(),
        };
    }
    false
}

/// The value of the leftmost node of the subtree, i.e. its minimum.
pub(crate) fn leftmost<N: BinaryNode>(mut node: &N) -> &N::Value {
    while let Some(left) = node.left() {
        node = left;
    }
    node.value()
}

/// The value of the rightmost node of the subtree, i.e. its maximum.
pub(crate) fn rightmost<N: BinaryNode>(mut node: &N) -> &N::Value {
    while let Some(right) = node.right() {
        node = right;
    }
    node.value()
}

/// In-order (ascending) traversal driven by an explicit stack so that a degenerate tree can't
/// blow the call stack.
pub(crate) struct InOrder<'a, N> {
    stack: Vec<&'a N>,
    remaining: usize,
}

impl<'a, N: BinaryNode> InOrder<'a, N> {
    /// `len` must be the number of nodes reachable from `root`.
    pub(crate) fn new(root: Option<&'a N>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a N>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<N> Clone for InOrder<'_, N> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, N> Iterator for InOrder<'a, N>
where
    N: BinaryNode,
    N::Value: 'a,
{
    type Item = &'a N::Value;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining = self.remaining.saturating_sub(1);
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// Counts the nodes with no children.
pub(crate) fn leaf_count<N: BinaryNode>(root: Option<&N>) -> usize {
    let mut leaves = 0;
    let mut stack: Vec<&N> = root.into_iter().collect();
    while let Some(node) = stack.pop() {
        match (node.left(), node.right()) {
            (None, None) => leaves += 1,
            (left, right) => stack.extend(left.into_iter().chain(right)),
        }
    }
    leaves
}

/// The nodes still to visit for each traversal order.
enum Pending<'a, N> {
    /// Popped node is visited, then its left and right subtrees.
    PreOrder(Vec<&'a N>),
    /// The flag records whether the node's children have already been pushed above it.
    PostOrder(Vec<(&'a N, bool)>),
    /// Nodes closest to the root come out first, left to right within a level.
    LevelOrder(VecDeque<&'a N>),
}

/// Pre-order, post-order or level-order traversal. Like [`InOrder`] it keeps its own stack (or
/// queue) instead of recursing.
pub(crate) struct Traversal<'a, N> {
    pending: Pending<'a, N>,
    remaining: usize,
}

impl<'a, N: BinaryNode> Traversal<'a, N> {
    /// `len` must be the number of nodes reachable from `root`.
    pub(crate) fn pre_order(root: Option<&'a N>, len: usize) -> Self {
        Self {
            pending: Pending::PreOrder(root.into_iter().collect()),
            remaining: len,
        }
    }

    /// `len` must be the number of nodes reachable from `root`.
    pub(crate) fn post_order(root: Option<&'a N>, len: usize) -> Self {
        Self {
            pending: Pending::PostOrder(root.map(|n| (n, false)).into_iter().collect()),
            remaining: len,
        }
    }

    /// `len` must be the number of nodes reachable from `root`.
    pub(crate) fn level_order(root: Option<&'a N>, len: usize) -> Self {
        Self {
            pending: Pending::LevelOrder(root.into_iter().collect()),
            remaining: len,
        }
    }

    /// The next node in traversal order.
    pub(crate) fn next_node(&mut self) -> Option<&'a N> {
        let node = match &mut self.pending {
            Pending::PreOrder(stack) => {
                let node = stack.pop()?;
                stack.extend(node.right());
                stack.extend(node.left());
                node
            }
            Pending::PostOrder(stack) => loop {
                let (node, expanded) = stack.pop()?;
                if expanded {
                    break node;
                }
                stack.push((node, true));
                stack.extend(node.right().map(|n| (n, false)));
                stack.extend(node.left().map(|n| (n, false)));
            },
            Pending::LevelOrder(queue) => {
                let node = queue.pop_front()?;
                queue.extend(node.left());
                queue.extend(node.right());
                node
            }
        };
        self.remaining = self.remaining.saturating_sub(1);
        Some(node)
    }
}

impl<N> Clone for Traversal<'_, N> {
    fn clone(&self) -> Self {
        let pending = match &self.pending {
            Pending::PreOrder(stack) => Pending::PreOrder(stack.clone()),
            Pending::PostOrder(stack) => Pending::PostOrder(stack.clone()),
            Pending::LevelOrder(queue) => Pending::LevelOrder(queue.clone()),
        };
        Self {
            pending,
            remaining: self.remaining,
        }
    }
}

impl<'a, N> Iterator for Traversal<'a, N>
where
    N: BinaryNode,
    N::Value: 'a,
{
    type Item = &'a N::Value;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_node().map(N::value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}
