use core::fmt::Debug;
use crate::{
    storage::{Storage, DefaultStorage},
    traversal::SearchOrder,
};
#[cfg(feature = "alloc")]
use crate::traversal::ValuesIter;
use super::{WeightedTree, Node};

/// A reference to a node in a weighted binary tree.
///
/// Since this type does not point to the node directly, but rather the tree the node is in and the key of the node in the storage, it can be used to traverse the tree. Any node can be treated as the root of its own subtree: the [`size`], [`search`] and [`values`] methods all operate on the subtree below the pointee.
///
/// [`size`]: #method.size " "
/// [`search`]: #method.search " "
/// [`values`]: #method.values " "
#[derive(Debug)]
pub struct NodeRef<'a, T, K, S = DefaultStorage<Node<T, K>>>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    tree: &'a WeightedTree<T, K, S>,
    key: K,
}
impl<'a, T, K, S> NodeRef<'a, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Creates a new `NodeRef` pointing to the specified key in the storage, or `None` if it's not present.
    #[inline]
    pub fn new_raw(tree: &'a WeightedTree<T, K, S>, key: K) -> Option<Self> {
        if tree.storage.contains_key(&key) {
            Some(unsafe {
                // SAFETY: we just did a key check
                Self::new_raw_unchecked(tree, key)
            })
        } else {
            None
        }
    }
    /// Creates a new `NodeRef` pointing to the specified key in the storage without doing key checking.
    ///
    /// # Safety
    /// Causes *immediate* undefined behavior if the specified key is not present in the storage.
    #[inline(always)]
    pub unsafe fn new_raw_unchecked(tree: &'a WeightedTree<T, K, S>, key: K) -> Self {
        Self { tree, key }
    }
    /// Returns a reference to the raw storage key for the node.
    #[inline(always)]
    pub fn raw_key(&self) -> &K {
        &self.key
    }
    /// Consumes the reference and returns the underlying raw storage key for the node.
    #[inline(always)]
    pub fn into_raw_key(self) -> K {
        self.key
    }
    /// Returns a reference to the parent node of the pointee, or `None` if it's the root node.
    #[inline]
    pub fn parent(&self) -> Option<Self> {
        self.node().parent.as_ref().map(|key| unsafe {
            // SAFETY: nodes can never have dangling parents
            Self::new_raw_unchecked(self.tree, key.clone())
        })
    }
    /// Returns `true` if the node is the root node, `false` otherwise.
    #[inline(always)]
    #[allow(clippy::missing_const_for_fn)] // const_option is not stable
    pub fn is_root(&self) -> bool {
        self.node().parent.is_none()
    }
    /// Returns `true` if the node is a *leaf*, i.e. does not have child nodes; `false` otherwise.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        let node = self.node();
        node.left.is_none() && node.right.is_none()
    }
    /// Returns `true` if the node is a *branch*, i.e. has one or two child nodes; `false` otherwise.
    #[inline]
    pub fn is_branch(&self) -> bool {
        !self.is_leaf()
    }
    /// Returns `true` if the node is a *full branch*, i.e. has exactly two child nodes; `false` otherwise.
    #[inline]
    pub fn is_full_branch(&self) -> bool {
        let node = self.node();
        node.left.is_some() && node.right.is_some()
    }
    /// Returns a reference to the value stored in the node.
    #[inline(always)]
    pub fn value(&self) -> &'a T {
        &self.node().value
    }
    /// Returns a reference to the left child, or `None` if the node has no left child.
    #[inline]
    pub fn left_child(&self) -> Option<Self> {
        self.node().left.as_ref().map(|key| unsafe {
            // SAFETY: child keys are guaranteed to be valid for as long as the parent owns them
            Self::new_raw_unchecked(self.tree, key.clone())
        })
    }
    /// Returns a reference to the right child, or `None` if the node has no right child.
    #[inline]
    pub fn right_child(&self) -> Option<Self> {
        self.node().right.as_ref().map(|key| unsafe {
            // SAFETY: as above
            Self::new_raw_unchecked(self.tree, key.clone())
        })
    }
    /// Returns references to both children, or `None` if the node is not a full branch. To retrieve one child even if the other one is not present, see [`left_child`] and [`right_child`].
    ///
    /// [`left_child`]: #method.left_child " "
    /// [`right_child`]: #method.right_child " "
    #[inline]
    pub fn children(&self) -> Option<(Self, Self)> {
        match (self.left_child(), self.right_child()) {
            (Some(left), Some(right)) => Some((left, right)),
            _ => None,
        }
    }
    /// Returns the number of nodes in the subtree rooted at the pointee, the pointee included.
    ///
    /// This is the weight the insertion and removal heuristics compare; it is counted anew on every call and therefore takes time proportional to the subtree's size.
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.tree.subtree_size(&self.key)
    }
    /// Returns a lazy iterator over the values of the subtree rooted at the pointee, visited in the specified order.
    #[cfg(feature = "alloc")]
    #[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
    #[inline]
    pub fn values(&self, order: SearchOrder) -> ValuesIter<'a, T, K, S> {
        ValuesIter::new(self.tree, Some(self.key.clone()), order)
    }

    #[inline(always)]
    fn node(&self) -> &'a Node<T, K> {
        unsafe {
            // SAFETY: all existing NodeRefs are guaranteed to not be dangling
            self.tree.storage.get_unchecked(&self.key)
        }
    }
}
impl<'a, T, K, S> NodeRef<'a, T, K, S>
where
    T: PartialEq,
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Returns a reference to the first node *of the subtree rooted at the pointee* holding a value equal to the specified one under the specified visit order, or `None` if there is no such node.
    #[inline]
    pub fn search(&self, value: &T, order: SearchOrder) -> Option<Self> {
        self.tree
            .search_below(&self.key, value, order)
            .map(|key| unsafe {
                // SAFETY: the search only ever returns live keys
                Self::new_raw_unchecked(self.tree, key)
            })
    }
}
impl<T, K, S> Copy for NodeRef<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Copy + Debug + Eq,
{}
impl<T, K, S> Clone for NodeRef<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline(always)]
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            key: self.key.clone(),
        }
    }
}
