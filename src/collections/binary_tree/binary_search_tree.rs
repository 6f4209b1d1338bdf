use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};

use super::{Branch, Node, NodeIndex, Order, Traversal, TraversalCursor};
use crate::util::stamp::Stamp;

/// The comparison used by a [`BinarySearchTree`] that orders its elements naturally, via [`Ord`].
pub type NaturalOrder<T> = fn(&T, &T) -> Ordering;

/// An unbalanced binary search tree, ordered by a comparison chosen at construction.
///
/// Elements that compare equal to one already in the tree are ignored, so the tree behaves like a
/// set under its comparison. There is no rebalancing or removal: inserting already sorted values
/// degrades the tree into a list.
///
/// Nodes are kept in an arena owned by the tree and refer to their children by index. Because
/// nodes are never removed, an index stays valid for as long as the tree exists, which is what
/// lets a [`TraversalCursor`] step through the tree without borrowing it.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of elements in the tree.
/// - `h`: The height of the tree, between `log2 n` and `n`.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(h)`* |
/// | `contains` | `O(h)` |
/// | `in_order`, `pre_order`, `post_order` | `O(n)` total, `O(h)` space |
///
/// \* Amortized, the node arena grows like a [`Vec`].
#[derive(Clone)]
pub struct BinarySearchTree<T, C = NaturalOrder<T>> {
    pub(crate) nodes: Vec<Node<T>>,
    pub(crate) root: Option<NodeIndex>,
    pub(crate) comparison: C,
    pub(crate) stamp: Stamp,
}

/// Where a new leaf should be attached.
enum Search {
    Found,
    Root,
    Left(NodeIndex),
    Right(NodeIndex),
}

impl<T: Ord> BinarySearchTree<T> {
    /// Creates an empty tree ordered by the natural ordering of `T`.
    ///
    /// A type without a natural ordering must use [`with_comparison`] instead, this constructor
    /// isn't available for it.
    ///
    /// [`with_comparison`]: BinarySearchTree::with_comparison
    ///
    /// # Examples
    /// ```
    /// # use custom_collections::collections::binary_tree::BinarySearchTree;
    /// let tree: BinarySearchTree<u8> = BinarySearchTree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn new() -> BinarySearchTree<T> {
        BinarySearchTree::with_comparison(T::cmp as NaturalOrder<T>)
    }
}

impl<T, C: Fn(&T, &T) -> Ordering> BinarySearchTree<T, C> {
    /// Creates an empty tree ordered by `comparison`, which must be a total order over `T`.
    ///
    /// # Examples
    /// ```
    /// # use custom_collections::collections::binary_tree::BinarySearchTree;
    /// let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
    /// let mut tree = BinarySearchTree::with_comparison(by_len);
    /// tree.insert("aaa");
    /// tree.insert("a");
    /// assert!(!tree.insert("bbb"));
    /// assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), ["a", "aaa"]);
    /// ```
    pub const fn with_comparison(comparison: C) -> BinarySearchTree<T, C> {
        BinarySearchTree {
            nodes: Vec::new(),
            root: None,
            comparison,
            stamp: Stamp::new(),
        }
    }

    /// Inserts `item` as a new leaf, returning true if it was added. If the tree already contains
    /// an element that compares equal to `item`, the tree is left as is and `item` is dropped.
    ///
    /// Every call counts as a modification of the tree, even one that inserts nothing, so any
    /// [`TraversalCursor`] that has already started will fail on its next step.
    ///
    /// # Examples
    /// ```
    /// # use custom_collections::collections::binary_tree::BinarySearchTree;
    /// let mut tree = BinarySearchTree::new();
    /// assert!(tree.insert(4));
    /// assert!(tree.insert(2));
    /// assert!(!tree.insert(4));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, item: T) -> bool {
        self.stamp.bump();

        let search = self.search(&item);
        let index = self.nodes.len();
        match search {
            Search::Found => return false,
            Search::Root => self.root = Some(index),
            Search::Left(parent) => self.nodes[parent].left = Some(index),
            Search::Right(parent) => self.nodes[parent].right = Some(index),
        }

        self.nodes.push(Node::leaf(item));
        true
    }

    /// Returns true if the tree contains an element that compares equal to `item`.
    ///
    /// # Examples
    /// ```
    /// # use custom_collections::collections::binary_tree::BinarySearchTree;
    /// let tree: BinarySearchTree<_> = [4, 2, 3, 1, 8, 7, 10].into_iter().collect();
    /// assert!(tree.contains(&3));
    /// assert!(!tree.contains(&5));
    /// ```
    pub fn contains(&self, item: &T) -> bool {
        matches!(self.search(item), Search::Found)
    }

    /// Descends from the root towards where `item` belongs.
    fn search(&self, item: &T) -> Search {
        let mut search = Search::Root;
        let mut current = self.root;

        while let Some(index) = current {
            let node = &self.nodes[index];
            // Note the argument order, the node is on the left hand side of the comparison.
            match (self.comparison)(&node.value, item) {
                Ordering::Greater => {
                    search = Search::Left(index);
                    current = node.left;
                },
                Ordering::Less => {
                    search = Search::Right(index);
                    current = node.right;
                },
                Ordering::Equal => return Search::Found,
            }
        }

        search
    }
}

impl<T, C> BinarySearchTree<T, C> {
    /// Returns the number of distinct elements in the tree.
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the tree contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator that visits the left subtree, then the node, then the right subtree,
    /// yielding elements in ascending order.
    ///
    /// # Examples
    /// ```
    /// # use custom_collections::collections::binary_tree::BinarySearchTree;
    /// let tree: BinarySearchTree<_> = [4, 2, 3, 1, 8, 7, 10].into_iter().collect();
    /// assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), [1, 2, 3, 4, 7, 8, 10]);
    /// ```
    pub fn in_order(&self) -> Traversal<'_, T, C> {
        Traversal::new(self, Order::InOrder)
    }

    /// Returns an iterator that visits the node, then the left subtree, then the right subtree.
    ///
    /// # Examples
    /// ```
    /// # use custom_collections::collections::binary_tree::BinarySearchTree;
    /// let tree: BinarySearchTree<_> = [4, 2, 3, 1, 8, 7, 10].into_iter().collect();
    /// assert_eq!(tree.pre_order().copied().collect::<Vec<_>>(), [4, 2, 1, 3, 8, 7, 10]);
    /// ```
    pub fn pre_order(&self) -> Traversal<'_, T, C> {
        Traversal::new(self, Order::PreOrder)
    }

    /// Returns an iterator that visits the left subtree, then the right subtree, then the node.
    ///
    /// # Examples
    /// ```
    /// # use custom_collections::collections::binary_tree::BinarySearchTree;
    /// let tree: BinarySearchTree<_> = [4, 2, 3, 1, 8, 7, 10].into_iter().collect();
    /// assert_eq!(tree.post_order().copied().collect::<Vec<_>>(), [1, 3, 2, 7, 10, 8, 4]);
    /// ```
    pub fn post_order(&self) -> Traversal<'_, T, C> {
        Traversal::new(self, Order::PostOrder)
    }

    /// Equivalent to [`in_order`](BinarySearchTree::in_order).
    pub fn iter(&self) -> Traversal<'_, T, C> {
        self.in_order()
    }

    /// Creates a cursor for a traversal in the given order, which doesn't borrow the tree. The
    /// tree is passed to every call to [`TraversalCursor::next`] instead, which fails if the tree
    /// was modified after the traversal began.
    ///
    /// # Examples
    /// ```
    /// # use custom_collections::collections::binary_tree::{BinarySearchTree, Order};
    /// let mut tree: BinarySearchTree<_> = [2, 1, 3].into_iter().collect();
    /// let mut cursor = tree.traversal(Order::PreOrder);
    /// assert_eq!(cursor.next(&tree), Ok(Some(&2)));
    /// tree.insert(4);
    /// assert!(cursor.next(&tree).is_err());
    /// ```
    pub fn traversal(&self, order: Order) -> TraversalCursor {
        TraversalCursor::new(order)
    }

    pub(crate) fn branch(&self) -> Branch<'_, T> {
        Branch {
            nodes: &self.nodes,
            index: self.root,
        }
    }
}

impl<T: Ord> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Fn(&T, &T) -> Ordering> Extend<T> for BinarySearchTree<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = BinarySearchTree::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, T, C> IntoIterator for &'a BinarySearchTree<T, C> {
    type Item = &'a T;

    type IntoIter = Traversal<'a, T, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}

impl<T: Debug, C> Debug for BinarySearchTree<T, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinarySearchTree")
            .field("nodes", &self.branch())
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Debug, C> Display for BinarySearchTree<T, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.in_order()).finish()
    }
}
