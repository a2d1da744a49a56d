//! Everything related to traversing the tree.
//!
//! The module is home to the following items:
//! - [`SearchOrder`] — the *closed set of visit orders* used by searches, removal and value iteration
//! - [`ValuesIter`] — a lazy iterator over the values of a subtree in any of those orders
//!
//! The visit orders are deliberately a plain `enum` rather than a trait: there are exactly three of them, they are all known to the crate, and callers select one by value. Dynamic dispatch would buy nothing here.
//!
//! [`SearchOrder`]: enum.SearchOrder.html " "
//! [`ValuesIter`]: struct.ValuesIter.html " "

#[cfg(feature = "alloc")]
use core::{fmt::Debug, iter::FusedIterator};
#[cfg(feature = "alloc")]
use crate::storage::{Storage, DefaultStorage};
#[cfg(feature = "alloc")]
use crate::weighted_tree::{Node, WeightedTree};

/// The order in which the nodes of a subtree are visited by searches and iteration.
///
/// The tree carries no ordering among its payloads, so all three orders visit every node in the worst case; what the choice controls is *which* node is reported first when several hold equal values, and the sequence produced by [`ValuesIter`].
///
/// [`ValuesIter`]: struct.ValuesIter.html " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SearchOrder {
    /// Visit the left subtree, then the node itself, then the right subtree.
    InOrder,
    /// Visit the node itself, then the left subtree, then the right subtree.
    PreOrder,
    /// Visit the left subtree, then the right subtree, then the node itself.
    PostOrder,
}

/// How far a node on the iteration stack has been processed.
#[cfg(feature = "alloc")]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum VisitStage {
    /// Neither subtree has been descended into yet.
    Fresh,
    /// The left subtree has been fully visited.
    LeftDone,
    /// Both subtrees have been fully visited.
    RightDone,
}

/// A lazy iterator over the values of a subtree, visited in a fixed [`SearchOrder`].
///
/// Created by the `values` methods on [`WeightedTree`] and `NodeRef`. The in-order sequence carries **no sortedness promise** — the tree is weight-balanced, not value-ordered.
///
/// [`SearchOrder`]: enum.SearchOrder.html " "
/// [`WeightedTree`]: ../weighted_tree/struct.WeightedTree.html " "
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
#[derive(Debug)]
pub struct ValuesIter<'a, T, K, S = DefaultStorage<Node<T, K>>>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    tree: &'a WeightedTree<T, K, S>,
    stack: alloc::vec::Vec<(K, VisitStage)>,
    order: SearchOrder,
}
#[cfg(feature = "alloc")]
impl<'a, T, K, S> ValuesIter<'a, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    pub(crate) fn new(tree: &'a WeightedTree<T, K, S>, start: Option<K>, order: SearchOrder) -> Self {
        let mut stack = alloc::vec::Vec::new();
        if let Some(start) = start {
            stack.push((start, VisitStage::Fresh));
        }
        Self { tree, stack, order }
    }
}
#[cfg(feature = "alloc")]
impl<'a, T, K, S> Iterator for ValuesIter<'a, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let tree = self.tree;
        loop {
            let (key, stage) = self.stack.pop()?;
            let node = unsafe {
                // SAFETY: the stack only ever holds keys of live nodes, and the shared borrow of
                // the tree prevents any removal for as long as the iterator exists
                tree.storage.get_unchecked(&key)
            };
            match stage {
                VisitStage::Fresh => {
                    self.stack.push((key, VisitStage::LeftDone));
                    if let Some(left) = node.left.clone() {
                        self.stack.push((left, VisitStage::Fresh));
                    }
                    if self.order == SearchOrder::PreOrder {
                        return Some(&node.value);
                    }
                }
                VisitStage::LeftDone => {
                    self.stack.push((key, VisitStage::RightDone));
                    if let Some(right) = node.right.clone() {
                        self.stack.push((right, VisitStage::Fresh));
                    }
                    if self.order == SearchOrder::InOrder {
                        return Some(&node.value);
                    }
                }
                VisitStage::RightDone => {
                    if self.order == SearchOrder::PostOrder {
                        return Some(&node.value);
                    }
                }
            }
        }
    }
}
#[cfg(feature = "alloc")]
impl<T, K, S> FusedIterator for ValuesIter<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{}
#[cfg(feature = "alloc")]
impl<T, K, S> Clone for ValuesIter<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline]
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            stack: self.stack.clone(),
            order: self.order,
        }
    }
}
