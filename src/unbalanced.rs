//! A plain Binary Search Tree. It maintains the ordering invariant and nothing else, so its shape
//! (and therefore its cost) depends entirely on insertion order: inserting sorted values gives a
//! linked list.
//!
//! # Examples
//!
//! ```
//! use search_tree::unbalanced::Tree;
//! use search_tree::Error;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//! assert_eq!(tree.find_min(), Err(Error::Underflow));
//!
//! tree.insert(2);
//! tree.insert(1);
//! tree.insert(3);
//! assert!(tree.contains(&1));
//! assert_eq!(tree.find_min(), Ok(&1));
//! assert_eq!(tree.find_max(), Ok(&3));
//!
//! tree.remove(&2).unwrap();
//! assert!(!tree.contains(&2));
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 3]);
//! ```

use std::cmp::Ordering;
use std::fmt;

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::util::{self, BinaryNode, InOrder};

type Link<T> = Option<Box<Node<T>>>;

/// A Binary Search Tree without any balancing. This can be used for inserting, finding, and
/// removing values. Inserting a value that is already present does nothing.
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Tree<T>
where
    T: Clone,
{
    /// Rebuilds the tree bottom up from a post-order walk, so like `Drop` it never recurses. Each
    /// node's copied children are already on top of `built` when the node itself comes up.
    fn clone(&self) -> Self {
        let mut built: Vec<Box<Node<T>>> = Vec::new();
        let mut nodes = util::Traversal::post_order(self.root.as_deref(), self.len);
        while let Some(node) = nodes.next_node() {
            let mut copy = Node::new_boxed(node.value.clone());
            copy.right = node.right.as_ref().and_then(|_| built.pop());
            copy.left = node.left.as_ref().and_then(|_| built.pop());
            built.push(copy);
        }
        Self {
            root: built.pop(),
            len: self.len,
        }
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        self.release();
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
    /// empty tree. This tree doesn't track heights so this walks every node.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_tree::unbalanced::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), -1);
    ///
    /// // Ascending inserts only ever go right.
    /// tree.extend([1, 2, 3, 4]);
    /// assert_eq!(tree.height(), 3);
    /// ```
    pub fn height(&self) -> isize {
        let mut height = -1;
        let mut stack: Vec<(&Node<T>, isize)> =
            self.root.as_deref().map(|n| (n, 0)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left().map(|n| (n, depth + 1)));
            stack.extend(node.right().map(|n| (n, depth + 1)));
        }
        height
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
    /// `value` is dropped and the tree is left exactly as it was.
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

    /// Removes the value comparing equal to `value`. Removing a value that isn't present is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// [`Error::Underflow`] if the tree is empty. The tree is not touched in that case.
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
        self.release();
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
    /// use search_tree::unbalanced::Tree;
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

    /// Drops every node with an explicit stack. A degenerate tree is as deep as it is long, and the
    /// default recursive `Box` drop would overflow on it.
    fn release(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
        self.len = 0;
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

struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
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
        })
    }

    /// Inserts `value` into the subtree at `link` and returns the subtree's root so the caller
    /// can link it back in. `inserted` is set if a new node was created.
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
            Ordering::Equal => {}
            Ordering::Greater => {
                node.right = Some(Self::insert(node.right.take(), value, inserted))
            }
        }

        if cfg!(debug_assertions) {
            if let Some(left) = node.left() {
                assert!(node.value > left.value);
            }
            if let Some(right) = node.right() {
                assert!(node.value < right.value);
            }
        }
        node
    }

    /// Removes `value` from this subtree and returns what should replace it in the parent's link.
    /// A node with two children is never unlinked directly: it takes over its successor's value
    /// and the successor, which has no left child, is unlinked instead.
    fn remove(mut self: Box<Self>, value: &T, removed: &mut bool) -> Link<T>
    where
        T: Ord,
    {
        match value.cmp(&self.value) {
            Ordering::Less => {
                self.left = self.left.take().and_then(|left| left.remove(value, removed));
                Some(self)
            }
            Ordering::Greater => {
                self.right = self.right.take().and_then(|right| right.remove(value, removed));
                Some(self)
            }
            Ordering::Equal => {
                *removed = true;
                match (self.left.take(), self.right.take()) {
                    (Some(left), Some(right)) => {
                        trace!("promoting successor into a node with two children");
                        let (successor, right) = right.remove_min();
                        self.value = successor;
                        self.left = Some(left);
                        self.right = right;
                        Some(self)
                    }
                    (left, right) => left.or(right),
                }
            }
        }
    }

    /// Unlinks the leftmost node of this subtree. Returns its value and what remains of the
    /// subtree.
    fn remove_min(mut self: Box<Self>) -> (T, Link<T>) {
        match self.left.take() {
            None => {
                let Node { value, right, .. } = *self;
                (value, right)
            }
            Some(left) => {
                let (min, left) = left.remove_min();
                self.left = left;
                (min, Some(self))
            }
        }
    }
}
