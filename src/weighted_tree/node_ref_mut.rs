use core::fmt::Debug;
use crate::storage::{Storage, DefaultStorage};
use super::{WeightedTree, Node, NodeRef};

/// A *mutable* reference to a node in a weighted binary tree.
///
/// Since this type does not point to the node directly, but rather the tree the node is in and the key of the node in the storage, it can be used to traverse the tree and modify it as a whole.
///
/// Structural mutation stays with the tree itself — [`WeightedTree::remove`] in particular has to be able to repoint the root handle, which an individual node reference cannot do. What a `NodeRefMut` adds over a [`NodeRef`] is mutable access to the pointee's value and the ability to [`add`] a value into the pointee's subtree.
///
/// [`WeightedTree::remove`]: struct.WeightedTree.html#method.remove " "
/// [`NodeRef`]: struct.NodeRef.html " "
/// [`add`]: #method.add " "
#[derive(Debug)]
pub struct NodeRefMut<'a, T, K, S = DefaultStorage<Node<T, K>>>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    tree: &'a mut WeightedTree<T, K, S>,
    key: K,
}
impl<'a, T, K, S> NodeRefMut<'a, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Creates a new `NodeRefMut` pointing to the specified key in the storage, or `None` if it's not present.
    #[inline]
    pub fn new_raw(tree: &'a mut WeightedTree<T, K, S>, key: K) -> Option<Self> {
        if tree.storage.contains_key(&key) {
            Some(unsafe {
                // SAFETY: we just did a key check
                Self::new_raw_unchecked(tree, key)
            })
        } else {
            None
        }
    }
    /// Creates a new `NodeRefMut` pointing to the specified key in the storage without doing key checking.
    ///
    /// # Safety
    /// Causes *immediate* undefined behavior if the specified key is not present in the storage.
    #[inline(always)]
    pub unsafe fn new_raw_unchecked(tree: &'a mut WeightedTree<T, K, S>, key: K) -> Self {
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
    pub fn parent(&self) -> Option<NodeRef<'_, T, K, S>> {
        self.node().parent.as_ref().map(|key| unsafe {
            // SAFETY: nodes can never have dangling parents
            NodeRef::new_raw_unchecked(self.tree, key.clone())
        })
    }
    /// Returns a *mutable* reference to the parent node of the pointee, or `None` if it's the root node.
    #[inline]
    pub fn parent_mut(&mut self) -> Option<NodeRefMut<'_, T, K, S>> {
        let key = self.node().parent.as_ref().cloned();
        key.map(move |key| unsafe {
            // SAFETY: as above
            NodeRefMut::new_raw_unchecked(self.tree, key)
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
    pub fn value(&self) -> &T {
        &self.node().value
    }
    /// Returns a *mutable* reference to the value stored in the node.
    #[inline(always)]
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.node_mut().value
    }
    /// Returns a reference to the left child, or `None` if the node has no left child.
    #[inline]
    pub fn left_child(&self) -> Option<NodeRef<'_, T, K, S>> {
        self.node().left.as_ref().map(|key| unsafe {
            // SAFETY: child keys are guaranteed to be valid for as long as the parent owns them
            NodeRef::new_raw_unchecked(self.tree, key.clone())
        })
    }
    /// Returns a *mutable* reference to the left child, or `None` if the node has no left child.
    #[inline]
    pub fn left_child_mut(&mut self) -> Option<NodeRefMut<'_, T, K, S>> {
        let key = self.node().left.as_ref().cloned();
        key.map(move |key| unsafe {
            // SAFETY: as above
            NodeRefMut::new_raw_unchecked(self.tree, key)
        })
    }
    /// Returns a reference to the right child, or `None` if the node has no right child.
    #[inline]
    pub fn right_child(&self) -> Option<NodeRef<'_, T, K, S>> {
        self.node().right.as_ref().map(|key| unsafe {
            // SAFETY: as above
            NodeRef::new_raw_unchecked(self.tree, key.clone())
        })
    }
    /// Returns a *mutable* reference to the right child, or `None` if the node has no right child.
    #[inline]
    pub fn right_child_mut(&mut self) -> Option<NodeRefMut<'_, T, K, S>> {
        let key = self.node().right.as_ref().cloned();
        key.map(move |key| unsafe {
            // SAFETY: as above
            NodeRefMut::new_raw_unchecked(self.tree, key)
        })
    }
    /// Returns the number of nodes in the subtree rooted at the pointee, the pointee included.
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.tree.subtree_size(&self.key)
    }
    /// Inserts a value into the subtree rooted at the pointee, following the ordinary weight heuristic of [`WeightedTree::add`], and returns the key of the newly created node.
    ///
    /// [`WeightedTree::add`]: struct.WeightedTree.html#method.add " "
    #[inline]
    pub fn add(&mut self, value: T) -> K {
        let at = self.key.clone();
        self.tree.add_below(at, value)
    }

    #[inline(always)]
    fn node(&self) -> &Node<T, K> {
        unsafe {
            // SAFETY: all existing NodeRefMuts are guaranteed to not be dangling
            self.tree.storage.get_unchecked(&self.key)
        }
    }
    #[inline(always)]
    fn node_mut(&mut self) -> &mut Node<T, K> {
        unsafe {
            // SAFETY: as above
            self.tree.storage.get_unchecked_mut(&self.key)
        }
    }
}
impl<'a, T, K, S> From<NodeRefMut<'a, T, K, S>> for NodeRef<'a, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline]
    fn from(op: NodeRefMut<'a, T, K, S>) -> Self {
        unsafe {
            // SAFETY: the mutable reference was known to not be dangling
            NodeRef::new_raw_unchecked(op.tree, op.key)
        }
    }
}
