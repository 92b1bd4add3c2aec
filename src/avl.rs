//! A self-balancing Binary Search Tree (specifically, an AVL tree). Every node stores its height
//! and after each insertion or removal the nodes on the path back up to the root are rotated as
//! needed so that the heights of any node's two subtrees differ by at most one. That keeps the
//! tree `O(lg N)` tall no matter the order values arrive in.
//!
//! # Examples
//!
//! ```
//! use search_tree::avl::Tree;
//! use search_tree::Error;
//!
//! let mut tree = Tree::new();
//! assert_eq!(tree.remove(&1), Err(Error::Underflow));
//!
//! // Ascending inserts would make a plain BST into a list. Here they get rotated into shape.
//! tree.extend(1..=7);
//! assert_eq!(tree.height(), 2);
//! assert_eq!(tree.find_min(), Ok(&1));
//! assert_eq!(tree.find_max(), Ok(&7));
//!
//! tree.remove(&4).unwrap();
//! assert!(!tree.contains(&4));
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 5, 6, 7]);
//! ```

use std::cmp::Ordering;
use std::fmt;

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::util::{self, BinaryNode, InOrder};

type Link<T> = Option<Box<Node<T>>>;

/// The height of a possibly empty subtree. An empty subtree is `-1` tall so that a leaf is `0`.
fn height<T>(link: &Link<T>) -> isize {
    link.as_ref().map_or(-1, |n| n.height)
}

/// A self-balancing Binary Search Tree. This can be used for inserting, finding, and removing
/// values. Inserting a value that is already present does nothing.
#[derive(Clone)]
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Tree<T> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// The number of edges on the longest path from the root down to a leaf, or `-1` for an
    /// empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_tree::avl::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), -1);
    ///
    /// tree.insert(1);
    /// assert_eq!(tree.height(), 0);
    ///
    /// // 1, 2, 3 would be a chain. A rotation makes 2 the root instead.
    /// tree.insert(2);
    /// tree.insert(3);
    /// assert_eq!(tree.height(), 1);
    /// ```
    pub fn height(&self) -> isize {
        height(&self.root)
    }

    /// Whether the tree holds a value comparing equal to `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        util::contains(self.root.as_deref(), value)
    }

    /// The smallest value in the tree.
    ///
    /// # Errors
    ///
    /// [`Error::Underflow`] if the tree is empty.
    pub fn find_min(&self) -> Result<&T> {
        self.root.as_deref().map(util::leftmost).ok_or(Error::Underflow)
    }

    /// The largest value in the tree.
    ///
    /// # Errors
    ///
    /// [`Error::Underflow`] if the tree is empty.
    pub fn find_max(&self) -> Result<&T> {
        self.root.as_deref().map(util::rightmost).ok_or(Error::Underflow)
    }

    /// Inserts `value` into the tree unless an equal value is already present, in which case
    /// `value` is dropped and the tree keeps exactly the same shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_tree::avl::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.insert(5);
    /// tree.insert(5);
    /// assert!(tree.contains(&5));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        let mut inserted = false;
        self.root = Some(Node::insert(self.root.take(), value, &mut inserted));
        if inserted {
            self.len += 1;
        }
    }

    /// Removes the value comparing equal to `value`, rebalancing every node on the path back to
    /// the root. Removing a value that isn't present is a no-op.
    ///
    /// # Errors
    ///
    /// [`Error::Underflow`] if the tree is empty. The tree is not touched in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_tree::avl::Tree;
    /// use search_tree::Error;
    ///
    /// let mut tree: Tree<i32> = [2, 1, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.remove(&2), Ok(()));
    /// assert_eq!(tree.remove(&42), Ok(()));
    /// assert_eq!(tree.len(), 2);
    ///
    /// tree.clear();
    /// assert_eq!(tree.remove(&1), Err(Error::Underflow));
    /// ```
    pub fn remove(&mut self, value: &T) -> Result<()>
    where
        T: Ord,
    {
        let Some(root) = self.root.take() else {
            return Err(Error::Underflow);
        };

        let mut removed = false;
        self.root = root.remove(value, &mut removed);
        if removed {
            self.len -= 1;
        }
        Ok(())
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        debug!("clearing {} nodes", self.len);
        self.root = None;
        self.len = 0;
    }

    /// Iterates over the values in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter(InOrder::new(self.root.as_deref(), self.len))
    }

    /// Iterates over the values root first, then the left subtree, then the right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_tree::avl::Tree;
    ///
    /// let tree: Tree<i32> = [2, 1, 3].into_iter().collect();
    /// assert_eq!(tree.pre_order().copied().collect::<Vec<_>>(), [2, 1, 3]);
    /// assert_eq!(tree.post_order().copied().collect::<Vec<_>>(), [1, 3, 2]);
    /// assert_eq!(tree.level_order().copied().collect::<Vec<_>>(), [2, 1, 3]);
    /// ```
    pub fn pre_order(&self) -> Traversal<'_, T> {
        Traversal(util::Traversal::pre_order(self.root.as_deref(), self.len))
    }

    /// Iterates over the values of the left subtree, then the right subtree, then the root.
    pub fn post_order(&self) -> Traversal<'_, T> {
        Traversal(util::Traversal::post_order(self.root.as_deref(), self.len))
    }

    /// Iterates over the values one level at a time starting at the root, left to right within
    /// each level.
    pub fn level_order(&self) -> Traversal<'_, T> {
        Traversal(util::Traversal::level_order(self.root.as_deref(), self.len))
    }

    /// The number of nodes with no children.
    pub fn leaf_count(&self) -> usize {
        util::leaf_count(self.root.as_deref())
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An ascending iterator over the values of a [`Tree`]. Created by [`Tree::iter`].
pub struct Iter<'a, T>(InOrder<'a, Node<T>>);

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// An iterator over the values of a [`Tree`] in pre-order, post-order or level order. Created by
/// [`Tree::pre_order`], [`Tree::post_order`] and [`Tree::level_order`].
pub struct Traversal<'a, T>(util::Traversal<'a, Node<T>>);

impl<T> Clone for Traversal<'_, T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<'a, T> Iterator for Traversal<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> ExactSizeIterator for Traversal<'_, T> {}

/// The four ways a node can end up two levels out of balance, named after the path from the node
/// to its too-deep grandchild. See [the Wikipedia page][wiki] for pictures.
///
/// [wiki]: https://en.wikipedia.org/wiki/AVL_tree#Rebalancing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Rotation {
    LeftLeft,
    LeftRight,
    RightRight,
    RightLeft,
}

impl Rotation {
    /// Which rotation, if any, restores balance at `node`. `node`'s height must be up to date.
    ///
    /// On the heavy side, the child's own balance factor says whether the deep grandchild is on
    /// the outside (single rotation) or the inside (double rotation). A child with equal subtrees
    /// only happens after a removal and is handled by a single rotation.
    fn needed<T>(node: &Node<T>) -> Option<Self> {
        match node.balance_factor() {
            2 => node.left().map(|left| {
                if left.balance_factor() >= 0 {
                    Self::LeftLeft
                } else {
                    Self::LeftRight
                }
            }),
            -2 => node.right().map(|right| {
                if right.balance_factor() <= 0 {
                    Self::RightRight
                } else {
                    Self::RightLeft
                }
            }),
            _ => None,
        }
    }

    /// Applies the rotation to `node` and returns the subtree's new root. The double rotations
    /// first turn the inside case into an outside one by rotating the child with its grandchild.
    fn apply<T>(self, mut node: Box<Node<T>>) -> Box<Node<T>> {
        match self {
            Self::LeftLeft => Node::rotate_with_left(node),
            Self::RightRight => Node::rotate_with_right(node),
            Self::LeftRight => {
                node.left = node.left.take().map(Node::rotate_with_right);
                Node::rotate_with_left(node)
            }
            Self::RightLeft => {
                node.right = node.right.take().map(Node::rotate_with_left);
                Node::rotate_with_right(node)
            }
        }
    }
}

#[derive(Clone)]
struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,

    /// Edges on the longest path down to a leaf. A node with no children has a height of 0.
    height: isize,
}

impl<T> BinaryNode for Node<T> {
    type Value = T;

    fn value(&self) -> &T {
        &self.value
    }

    fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Node {
            value,
            left: None,
            right: None,
            height: 0,
        })
    }

    /// Adjusts the height of `self` to be the max of its children's heights + 1.
    fn fix_height(&mut self) {
        self.height = height(&self.left).max(height(&self.right)) + 1;
    }

    /// How much taller the left subtree is than the right one.
    fn balance_factor(&self) -> isize {
        height(&self.left) - height(&self.right)
    }

    /// Rotate `node` to the right, lifting its left child into its place. Used when the left
    /// subtree is too tall. Without a left child there is nothing to lift and `node` is returned
    /// as is.
    ///
    /// ```text
    ///          node              child
    ///         /    \            /     \
    ///      child    z   ->     x      node
    ///      /   \                     /    \
    ///     x     y                   y      z
    /// ```
    fn rotate_with_left(mut node: Box<Self>) -> Box<Self> {
        let Some(mut child) = node.left.take() else {
            return node;
        };
        node.left = child.right.take();
        node.fix_height();

        child.right = Some(node);
        child.fix_height();
        child
    }

    /// Rotate `node` to the left, lifting its right child into its place. The mirror image of
    /// [`Node::rotate_with_left`].
    ///
    /// ```text
    ///      node                    child
    ///     /    \                  /     \
    ///    x    child     ->     node      z
    ///         /   \           /    \
    ///        y     z         x      y
    /// ```
    fn rotate_with_right(mut node: Box<Self>) -> Box<Self> {
        let Some(mut child) = node.right.take() else {
            return node;
        };
        node.right = child.left.take();
        node.fix_height();

        child.left = Some(node);
        child.fix_height();
        child
    }

    /// Brings `node`'s height up to date after one of its subtrees changed and rotates if it is
    /// now out of balance. Returns the subtree's new root.
    fn rebalance(mut node: Box<Self>) -> Box<Self> {
        node.fix_height();
        let node = match Rotation::needed(&node) {
            Some(rotation) => {
                trace!(
                    "{rotation:?} rotation (left height {}, right height {})",
                    height(&node.left),
                    height(&node.right)
                );
                rotation.apply(node)
            }
            None => node,
        };

        // After balancing, assert that we've restored/maintained the AVL invariant.
        if cfg!(debug_assertions) {
            let left_height = height(&node.left);
            let right_height = height(&node.right);
            assert_eq!(node.height, left_height.max(right_height) + 1);
            assert!(left_height.abs_diff(right_height) <= 1);
        }
        node
    }

    /// Inserts `value` into the subtree at `link` and returns the subtree's (possibly rotated)
    /// root. `inserted` is set if a new node was created.
    fn insert(link: Link<T>, value: T, inserted: &mut bool) -> Box<Self>
    where
        T: Ord,
    {
        let Some(mut node) = link else {
            *inserted = true;
            return Self::new_boxed(value);
        };

        match value.cmp(&node.value) {
            Ordering::Less => node.left = Some(Self::insert(node.left.take(), value, inserted)),
            Ordering::Equal => return node,
            Ordering::Greater => {
                node.right = Some(Self::insert(node.right.take(), value, inserted))
            }
        }
        Self::rebalance(node)
    }

    /// Removes `value` from this subtree and returns what should replace it in the parent's link.
    /// Unlike insertion, a removal can unbalance every node on the way back up, so each one is
    /// rebalanced as the recursion unwinds.
    fn remove(mut self: Box<Self>, value: &T, removed: &mut bool) -> Link<T>
    where
        T: Ord,
    {
        match value.cmp(&self.value) {
            Ordering::Less => {
                self.left = self.left.take().and_then(|left| left.remove(value, removed));
            }
            Ordering::Greater => {
                self.right = self.right.take().and_then(|right| right.remove(value, removed));
            }
            Ordering::Equal => {
                *removed = true;
                match (self.left.take(), self.right.take()) {
                    // Never unlink a node with two children. Take over the successor's value
                    // instead and unlink the successor, which has no left child.
                    (Some(left), Some(right)) => {
                        trace!("promoting successor into a node with two children");
                        let (successor, right) = right.remove_min();
                        self.value = successor;
                        self.left = Some(left);
                        self.right = right;
                    }
                    // A lone child of a balanced node is a leaf so it's already balanced.
                    (left, right) => return left.or(right),
                }
            }
        }
        Some(Self::rebalance(self))
    }

    /// Unlinks the leftmost node of this subtree. Returns its value and what remains of the
    /// subtree, rebalanced.
    fn remove_min(mut self: Box<Self>) -> (T, Link<T>) {
        match self.left.take() {
            None => {
                let Node { value, right, .. } = *self;
                (value, right)
            }
            Some(left) => {
                let (min, left) = left.remove_min();
                self.left = left;
                (min, Some(Self::rebalance(self)))
            }
        }
    }
}

#[cfg(test)]
impl<T: Ord> Tree<T> {
    /// Walks the whole tree asserting the ordering invariant, that every stored height is correct,
    /// that every node is balanced and that `len` matches the number of nodes.
    fn assert_invariants(&self) {
        fn check<T: Ord>(node: &Node<T>, lower: Option<&T>, upper: Option<&T>) -> (isize, usize) {
            if let Some(lower) = lower {
                assert!(lower < &node.value);
            }
            if let Some(upper) = upper {
                assert!(&node.value < upper);
            }
            let (left_height, left_len) = node
                .left()
                .map_or((-1, 0), |n| check(n, lower, Some(&node.value)));
            let (right_height, right_len) = node
                .right()
                .map_or((-1, 0), |n| check(n, Some(&node.value), upper));

            assert_eq!(node.height, left_height.max(right_height) + 1);
            assert!(left_height.abs_diff(right_height) <= 1);
            (node.height, left_len + right_len + 1)
        }

        let (height, len) = self
            .root
            .as_deref()
            .map_or((-1, 0), |n| check(n, None, None));
        assert_eq!(height, self.height());
        assert_eq!(len, self.len());
        assert_eq!(self.is_empty(), len == 0);
    }

    /// Every value with its height, in pre-order. Two trees with the same shape have the same
    /// shape list.
    fn shape(&self) -> Vec<(T, isize)>
    where
        T: Clone,
    {
        let mut nodes = util::Traversal::pre_order(self.root.as_deref(), self.len);
        std::iter::from_fn(|| nodes.next_node())
            .map(|node| (node.value.clone(), node.height))
            .collect()
    }
}
