use std::iter::FusedIterator;

use super::{BinarySearchTree, Node, NodeIndex, Phase};
use crate::util::error::ConcurrentModification;
use crate::util::result::ResultExtension;
use crate::util::stamp::Stamp;

/// The order in which a depth-first traversal visits a node relative to its subtrees. The left
/// subtree is always visited before the right one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    /// Left subtree, node, right subtree.
    InOrder,
    /// Node, left subtree, right subtree.
    PreOrder,
    /// Left subtree, right subtree, node.
    PostOrder,
}

/// A depth-first traversal of a [`BinarySearchTree`] that doesn't hold a borrow of the tree
/// between steps. See [`BinarySearchTree::traversal`].
///
/// The traversal keeps an explicit stack of the nodes along the current path and the phase each
/// of them is in, advancing one step per call to [`next`](TraversalCursor::next). The tree's stamp
/// is captured by the first call; every later call fails with [`ConcurrentModification`] if the
/// tree has been modified since.
///
/// A cursor may only be used with the tree that it was created from.
#[derive(Debug, Clone)]
pub struct TraversalCursor {
    order: Order,
    stack: Vec<(NodeIndex, Phase)>,
    stamp: Option<Stamp>,
}

impl TraversalCursor {
    pub(crate) const fn new(order: Order) -> TraversalCursor {
        TraversalCursor {
            order,
            stack: Vec::new(),
            stamp: None,
        }
    }

    /// Returns the order of this traversal.
    pub const fn order(&self) -> Order {
        self.order
    }

    /// Produces the next element of the traversal, or [`None`] once every element has been
    /// visited.
    ///
    /// # Errors
    /// Returns [`ConcurrentModification`] if `tree` has been modified since the first call.
    ///
    /// # Panics
    /// May panic if `tree` isn't the tree this cursor was created from.
    pub fn next<'t, T, C>(
        &mut self,
        tree: &'t BinarySearchTree<T, C>,
    ) -> Result<Option<&'t T>, ConcurrentModification> {
        match self.stamp {
            Some(stamp) => tree.stamp.check(stamp)?,
            None => {
                self.stamp = Some(tree.stamp);
                self.stack.extend(tree.root.map(|root| (root, Phase::Entered)));
            },
        }

        Ok(self.step(&tree.nodes))
    }

    fn step<'t, T>(&mut self, nodes: &'t [Node<T>]) -> Option<&'t T> {
        while let Some((index, phase)) = self.stack.last_mut() {
            let node = &nodes[*index];

            match *phase {
                Phase::Entered => {
                    *phase = Phase::LeftDone;
                    if let Some(left) = node.left {
                        self.stack.push((left, Phase::Entered));
                    }
                    if self.order == Order::PreOrder {
                        return Some(&node.value);
                    }
                },
                Phase::LeftDone => {
                    *phase = Phase::RightDone;
                    if let Some(right) = node.right {
                        self.stack.push((right, Phase::Entered));
                    }
                    if self.order == Order::InOrder {
                        return Some(&node.value);
                    }
                },
                Phase::RightDone => {
                    self.stack.pop();
                    if self.order == Order::PostOrder {
                        return Some(&node.value);
                    }
                },
            }
        }

        None
    }
}

/// A borrowed depth-first iterator over a [`BinarySearchTree`]. Produces values of type `&T`.
///
/// See [`BinarySearchTree::in_order`], [`BinarySearchTree::pre_order`] and
/// [`BinarySearchTree::post_order`].
pub struct Traversal<'a, T, C> {
    pub(crate) tree: &'a BinarySearchTree<T, C>,
    pub(crate) cursor: TraversalCursor,
    pub(crate) remaining: usize,
}

impl<'a, T, C> Traversal<'a, T, C> {
    pub(crate) fn new(tree: &'a BinarySearchTree<T, C>, order: Order) -> Traversal<'a, T, C> {
        Traversal {
            tree,
            cursor: TraversalCursor::new(order),
            remaining: tree.len(),
        }
    }
}

impl<'a, T, C> Iterator for Traversal<'a, T, C> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        // The tree is borrowed for 'a, so its stamp can't move while this iterator exists.
        let next = self.cursor.next(self.tree).throw();
        if next.is_some() {
            self.remaining -= 1;
        }
        next
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, C> ExactSizeIterator for Traversal<'_, T, C> {}

impl<T, C> FusedIterator for Traversal<'_, T, C> {}

impl<T, C> Clone for Traversal<'_, T, C> {
    fn clone(&self) -> Self {
        Traversal {
            tree: self.tree,
            cursor: self.cursor.clone(),
            remaining: self.remaining,
        }
    }
}
