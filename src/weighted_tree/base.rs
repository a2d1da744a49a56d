use core::fmt::{self, Formatter, Debug};
use crate::{
    storage::{Storage, DefaultStorage, ListStorage, SparseStorage, SparseStorageSlot},
    traversal::SearchOrder,
    util::unreachable_debugchecked,
};
#[cfg(feature = "alloc")]
use crate::traversal::ValuesIter;
use super::{Node, NodeRef, NodeRefMut};

/// A count-weighted binary tree, implemented over arena storage.
///
/// The tree is not a binary *search* tree: payloads carry no ordering, and insertion instead keeps the tree approximately balanced by descending into whichever subtree currently holds fewer nodes. There are no rotations and no height guarantee — adversarial removal sequences can skew the tree all the way to a depth of *n*, and that is accepted behavior.
///
/// Nodes are stored in an arena addressed by keys; the tree holds a stable *root handle* which is repointed when the root itself is removed, so the empty state is simply a tree with no root node. See the [module-level documentation] for an overview of the operations.
///
/// [module-level documentation]: index.html " "
pub struct WeightedTree<T, K = usize, S = DefaultStorage<Node<T, K>>>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    pub(crate) storage: S,
    pub(crate) root: Option<K>,
}

impl<T, K, S> WeightedTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Creates an empty tree.
    ///
    /// # Example
    /// ```rust
    /// # use ballast::WeightedTree;
    /// let mut tree = WeightedTree::<u32>::new();
    /// assert!(tree.is_empty());
    /// tree.add(7);
    /// assert_eq!(tree.len(), 1);
    /// ```
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            storage: S::new(),
            root: None,
        }
    }
    /// Creates a tree of a single node holding the specified value.
    #[inline]
    pub fn with_root(value: T) -> Self {
        let mut storage = S::new();
        let root = storage.add(unsafe {
            // SAFETY: the storage is empty, so there is no other root node
            Node::root(value)
        });
        Self {
            storage,
            root: Some(root),
        }
    }
    /// Creates an empty tree with the specified storage capacity preallocated.
    #[inline(always)]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: S::with_capacity(capacity),
            root: None,
        }
    }

    /// Returns a reference to the root node of the tree, or `None` if the tree is empty.
    #[inline]
    pub fn root(&self) -> Option<NodeRef<'_, T, K, S>> {
        let key = self.root.clone()?;
        Some(unsafe {
            // SAFETY: the root handle always points at a live node
            NodeRef::new_raw_unchecked(self, key)
        })
    }
    /// Returns a *mutable* reference to the root node of the tree, or `None` if the tree is empty.
    #[inline]
    pub fn root_mut(&mut self) -> Option<NodeRefMut<'_, T, K, S>> {
        let key = self.root.clone()?;
        Some(unsafe {
            // SAFETY: as above
            NodeRefMut::new_raw_unchecked(self, key)
        })
    }

    /// Returns the number of values in the tree.
    ///
    /// This is counted anew from the node links on every call and therefore takes O(n) time, matching the definition the balancing heuristic works with; the tree deliberately stores no cached size.
    #[inline]
    pub fn len(&self) -> usize {
        match &self.root {
            Some(root) => self.subtree_size(root),
            None => 0,
        }
    }
    /// Returns `true` if the tree holds no values, `false` otherwise.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts a value into the tree.
    ///
    /// If the tree is empty, the value becomes the root node. Otherwise the new node is attached below the root by the weight heuristic: at each node, a missing left child is filled first, then a missing right child; if both children are present, insertion descends into the left one strictly when it is the lighter of the two, and into the right one otherwise (ties go right). The key of the newly created node is returned.
    ///
    /// # Example
    /// ```rust
    /// # use ballast::WeightedTree;
    /// let mut tree = WeightedTree::<&str>::with_root("root");
    /// tree.add("left");
    /// tree.add("right");
    /// let root = tree.root().unwrap();
    /// assert_eq!(root.left_child().unwrap().value(), &"left");
    /// assert_eq!(root.right_child().unwrap().value(), &"right");
    /// ```
    pub fn add(&mut self, value: T) -> K {
        match self.root.clone() {
            Some(root) => self.add_below(root, value),
            None => {
                let key = self.storage.add(unsafe {
                    // SAFETY: the tree is empty, so there is no other root node
                    Node::root(value)
                });
                log::trace!("the tree was empty, the new node {:?} became the root", key);
                self.root = Some(key.clone());
                key
            }
        }
    }
    /// Inserts a value somewhere below the specified node, following the weight heuristic described on [`add`].
    ///
    /// [`add`]: #method.add " "
    pub(crate) fn add_below(&mut self, at: K, value: T) -> K {
        let mut at = at;
        loop {
            let (left, right) = {
                let node = unsafe {
                    // SAFETY: only live keys are ever descended into
                    self.storage.get_unchecked(&at)
                };
                (node.left.clone(), node.right.clone())
            };
            match (left, right) {
                (None, _) => {
                    let new = self.storage.add(unsafe {
                        // SAFETY: the parent is immediately made to adopt the new node
                        Node::leaf(value, at.clone())
                    });
                    unsafe {
                        // SAFETY: `at` is a live key
                        self.storage.get_unchecked_mut(&at)
                    }
                    .left = Some(new.clone());
                    log::trace!("attached {:?} as the left child of {:?}", new, at);
                    break new;
                }
                (Some(..), None) => {
                    let new = self.storage.add(unsafe {
                        // SAFETY: as above
                        Node::leaf(value, at.clone())
                    });
                    unsafe {
                        // SAFETY: as above
                        self.storage.get_unchecked_mut(&at)
                    }
                    .right = Some(new.clone());
                    log::trace!("attached {:?} as the right child of {:?}", new, at);
                    break new;
                }
                (Some(left), Some(right)) => {
                    at = if self.subtree_size(&left) < self.subtree_size(&right) {
                        left
                    } else {
                        right
                    };
                }
            }
        }
    }

    /// Returns the number of nodes in the subtree rooted at the specified key, that node included.
    pub(crate) fn subtree_size(&self, key: &K) -> usize {
        let node = unsafe {
            // SAFETY: only live keys are ever passed here
            self.storage.get_unchecked(key)
        };
        let left = node.left.as_ref().map_or(0, |key| self.subtree_size(key));
        let right = node.right.as_ref().map_or(0, |key| self.subtree_size(key));
        1 + left + right
    }

    /// Returns the key of the root of the tree containing the specified node, by walking the parent links upward until a node without one is found.
    pub(crate) fn root_key_from(&self, start: &K) -> K {
        let mut current = start.clone();
        loop {
            let parent = unsafe {
                // SAFETY: parent links always point at live nodes
                self.storage.get_unchecked(&current)
            }
            .parent
            .clone();
            match parent {
                Some(parent) => current = parent,
                None => break current,
            }
        }
    }

    /// Detaches some leaf of the subtree rooted at `from` and returns its key.
    ///
    /// The walk descends into the left child where one exists and into the right child otherwise, so it always terminates at a leaf. The leaf's parent drops its link to it and the leaf's own parent link is cleared; the node itself stays in the storage, to be consumed by the caller.
    pub(crate) fn extract_leaf(&mut self, from: K) -> K {
        let mut at = from;
        loop {
            let node = unsafe {
                // SAFETY: only live keys are ever descended into
                self.storage.get_unchecked(&at)
            };
            if let Some(left) = node.left.clone() {
                at = left;
            } else if let Some(right) = node.right.clone() {
                at = right;
            } else {
                break;
            }
        }
        let parent = unsafe {
            // SAFETY: `at` is a live key
            self.storage.get_unchecked_mut(&at)
        }
        .parent
        .take();
        if let Some(parent) = parent {
            self.unlink_child(&parent, &at);
        }
        at
    }

    /// Dissolves the detached subtree rooted at `subtree`, re-inserting every value it holds below `into` one at a time.
    ///
    /// Each round extracts a leaf, removes it from the storage and feeds its value back through the ordinary insertion heuristic, so no structural relationship of the dissolved subtree survives. The subtree root itself is extracted last.
    pub(crate) fn merge_subtree(&mut self, into: K, subtree: K) {
        log::debug!("dissolving the subtree at {:?} into the tree rooted at {:?}", subtree, into);
        loop {
            let leaf = self.extract_leaf(subtree.clone());
            let exhausted = leaf == subtree;
            let node = self.storage.remove(&leaf);
            self.add_below(into.clone(), node.value);
            if exhausted {
                break;
            }
        }
    }

    /// Clears the parent's child link pointing at the specified node.
    fn unlink_child(&mut self, parent: &K, child: &K) {
        let parent_node = unsafe {
            // SAFETY: only live keys are ever passed here
            self.storage.get_unchecked_mut(parent)
        };
        if parent_node.left.as_ref() == Some(child) {
            parent_node.left = None;
        } else if parent_node.right.as_ref() == Some(child) {
            parent_node.right = None;
        } else {
            unsafe {
                // SAFETY: mutual parent/child consistency is an invariant of the tree
                unreachable_debugchecked("parent node does not own the node being unlinked")
            }
        }
    }
    /// Replaces the parent's child link pointing at `old` with `new`, and points `new`'s parent link at the parent.
    fn splice(&mut self, parent: &K, old: &K, new: K) {
        {
            let parent_node = unsafe {
                // SAFETY: only live keys are ever passed here
                self.storage.get_unchecked_mut(parent)
            };
            if parent_node.left.as_ref() == Some(old) {
                parent_node.left = Some(new.clone());
            } else if parent_node.right.as_ref() == Some(old) {
                parent_node.right = Some(new.clone());
            } else {
                unsafe {
                    // SAFETY: as in unlink_child
                    unreachable_debugchecked("parent node does not own the node being spliced out")
                }
            }
        }
        unsafe {
            // SAFETY: `new` is a live key
            self.storage.get_unchecked_mut(&new)
        }
        .parent = Some(parent.clone());
    }
    /// Orders two sibling keys by the weight of their subtrees, heavier first. Equal weights rank the right child as the heavier one, matching the insertion tie rule.
    fn rank_children(&self, left: K, right: K) -> (K, K) {
        if self.subtree_size(&left) > self.subtree_size(&right) {
            (left, right)
        } else {
            (right, left)
        }
    }

    /// Returns a lazy iterator over the values of the tree, visited in the specified order.
    ///
    /// # Example
    /// ```rust
    /// # use ballast::{WeightedTree, SearchOrder};
    /// let mut tree = WeightedTree::<u32>::with_root(1);
    /// tree.add(2);
    /// tree.add(3);
    /// let values = tree.values(SearchOrder::InOrder).copied().collect::<Vec<_>>();
    /// assert_eq!(values, [2, 1, 3]);
    /// ```
    #[cfg(feature = "alloc")]
    #[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
    #[inline]
    pub fn values(&self, order: SearchOrder) -> ValuesIter<'_, T, K, S> {
        ValuesIter::new(self, self.root.clone(), order)
    }

    /// Returns the amount of nodes the tree can hold without requiring a memory allocation.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }
    /// Reserves capacity for at least `additional` more nodes to be inserted in the tree's storage.
    #[inline(always)]
    pub fn reserve(&mut self, additional: usize) {
        self.storage.reserve(additional)
    }
    /// Shrinks the capacity of the tree's storage as much as possible.
    #[inline(always)]
    pub fn shrink_to_fit(&mut self) {
        self.storage.shrink_to_fit()
    }
}

impl<T, K, S> WeightedTree<T, K, S>
where
    T: PartialEq,
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Returns a reference to the first node holding a value equal to the specified one under the specified visit order, or `None` if there is no such node.
    ///
    /// When several nodes hold equal values, which one is "first" is decided entirely by the visit order — this is a contract, not an arbitrary choice, and is relied upon by [`remove`].
    ///
    /// # Example
    /// ```rust
    /// # use ballast::{WeightedTree, SearchOrder};
    /// let mut tree = WeightedTree::<u32>::with_root(1);
    /// tree.add(2);
    /// tree.add(3);
    /// assert!(tree.search(&2, SearchOrder::PreOrder).is_some());
    /// assert!(tree.search(&4, SearchOrder::PreOrder).is_none());
    /// ```
    ///
    /// [`remove`]: #method.remove " "
    pub fn search(&self, value: &T, order: SearchOrder) -> Option<NodeRef<'_, T, K, S>> {
        let root = self.root.clone()?;
        let found = self.search_below(&root, value, order)?;
        Some(unsafe {
            // SAFETY: the search only ever returns live keys
            NodeRef::new_raw_unchecked(self, found)
        })
    }
    /// Searches the subtree rooted at `at`, returning the key of the first node holding a matching value under the specified visit order.
    pub(crate) fn search_below(&self, at: &K, value: &T, order: SearchOrder) -> Option<K> {
        let node = unsafe {
            // SAFETY: only live keys are ever passed here
            self.storage.get_unchecked(at)
        };
        let descend = |child: &Option<K>| {
            child
                .as_ref()
                .and_then(|key| self.search_below(key, value, order))
        };
        let check = || {
            log::trace!("checking the node at {:?}", at);
            if node.value == *value {
                Some(at.clone())
            } else {
                None
            }
        };
        match order {
            SearchOrder::InOrder => descend(&node.left)
                .or_else(check)
                .or_else(|| descend(&node.right)),
            SearchOrder::PreOrder => check()
                .or_else(|| descend(&node.left))
                .or_else(|| descend(&node.right)),
            SearchOrder::PostOrder => descend(&node.left)
                .or_else(|| descend(&node.right))
                .or_else(check),
        }
    }

    /// Removes the first node holding a value equal to the specified one under the specified visit order.
    ///
    /// Returns `true` if such a node was found and removed, and `false` — with the tree left untouched — otherwise. Every remaining value is preserved: a removed node's children are spliced into its place where possible, and when the removed node had two children, the lighter subtree is dissolved and its values are re-inserted into the tree one at a time.
    ///
    /// # Example
    /// ```rust
    /// # use ballast::{WeightedTree, SearchOrder};
    /// let mut tree = WeightedTree::<u32>::with_root(1);
    /// tree.add(2);
    /// assert!(tree.remove(&1, SearchOrder::InOrder));
    /// assert_eq!(tree.len(), 1);
    /// assert!(!tree.remove(&1, SearchOrder::InOrder));
    /// ```
    pub fn remove(&mut self, value: &T, order: SearchOrder) -> bool {
        let root = match self.root.clone() {
            Some(root) => root,
            None => return false,
        };
        let target = match self.search_below(&root, value, order) {
            Some(target) => target,
            None => return false,
        };
        let (parent, left, right) = {
            let node = unsafe {
                // SAFETY: the search only ever returns live keys
                self.storage.get_unchecked(&target)
            };
            (node.parent.clone(), node.left.clone(), node.right.clone())
        };
        log::debug!("removing the node at {:?}", target);
        match (parent, left, right) {
            (Some(parent), None, None) => {
                self.unlink_child(&parent, &target);
                self.storage.remove(&target);
            }
            (Some(parent), Some(child), None) | (Some(parent), None, Some(child)) => {
                self.splice(&parent, &target, child);
                self.storage.remove(&target);
            }
            (Some(parent), Some(left), Some(right)) => {
                let (big, small) = self.rank_children(left, right);
                self.splice(&parent, &target, big);
                unsafe {
                    // SAFETY: `small` is a live key
                    self.storage.get_unchecked_mut(&small)
                }
                .parent = None;
                self.storage.remove(&target);
                let root = self.root_key_from(&parent);
                debug_assert!(
                    self.root.as_ref() == Some(&root),
                    "ancestor walk did not end at the tree root",
                );
                self.merge_subtree(root, small);
            }
            (None, None, None) => {
                self.storage.remove(&target);
                self.root = None;
            }
            (None, Some(child), None) | (None, None, Some(child)) => {
                unsafe {
                    // SAFETY: `child` is a live key
                    self.storage.get_unchecked_mut(&child)
                }
                .parent = None;
                self.storage.remove(&target);
                self.root = Some(child);
            }
            (None, Some(left), Some(right)) => {
                let (big, small) = self.rank_children(left, right);
                unsafe {
                    // SAFETY: `big` is a live key
                    self.storage.get_unchecked_mut(&big)
                }
                .parent = None;
                unsafe {
                    // SAFETY: `small` is a live key
                    self.storage.get_unchecked_mut(&small)
                }
                .parent = None;
                self.storage.remove(&target);
                self.root = Some(big.clone());
                self.merge_subtree(big, small);
            }
        }
        true
    }
}

impl<T, S> WeightedTree<T, usize, SparseStorage<Node<T, usize>, S>>
where S: ListStorage<Element = SparseStorageSlot<Node<T, usize>>>,
{
    /// Returns the number of holes in the tree's sparse storage. This operation returns immediately instead of looping through the entire storage, since the sparse storage automatically tracks the number of holes it creates and destroys.
    #[inline(always)]
    pub fn num_holes(&self) -> usize {
        self.storage.num_holes()
    }
    /// Returns `true` if there are no holes in the tree's sparse storage, `false` otherwise. Holes are reused by subsequent insertions, so a tree never accumulates more of them than its peak node count.
    #[inline(always)]
    pub fn is_dense(&self) -> bool {
        self.storage.is_dense()
    }
}

impl<T, K, S> Default for WeightedTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}
impl<T, K, S> From<T> for WeightedTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline(always)]
    fn from(value: T) -> Self {
        Self::with_root(value)
    }
}
impl<T, K, S> Debug for WeightedTree<T, K, S>
where
    T: Debug,
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Renders the structure of the tree, with each branch node followed by its children in braces and absent children rendered as `_`.
    ///
    /// # Example
    /// ```rust
    /// # use ballast::WeightedTree;
    /// let mut tree = WeightedTree::<u32>::with_root(1);
    /// tree.add(2);
    /// tree.add(3);
    /// assert_eq!(format!("{:?}", tree), "1 { 2, 3 }");
    /// assert_eq!(format!("{:?}", WeightedTree::<u32>::new()), "{}");
    /// ```
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.root {
            Some(root) => self.fmt_subtree(f, root),
            None => f.write_str("{}"),
        }
    }
}
impl<T, K, S> WeightedTree<T, K, S>
where
    T: Debug,
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    fn fmt_subtree(&self, f: &mut Formatter<'_>, key: &K) -> fmt::Result {
        let node = unsafe {
            // SAFETY: only live keys are ever passed here
            self.storage.get_unchecked(key)
        };
        Debug::fmt(&node.value, f)?;
        if node.left.is_some() || node.right.is_some() {
            f.write_str(" { ")?;
            match &node.left {
                Some(left) => self.fmt_subtree(f, left)?,
                None => f.write_str("_")?,
            }
            f.write_str(", ")?;
            match &node.right {
                Some(right) => self.fmt_subtree(f, right)?,
                None => f.write_str("_")?,
            }
            f.write_str(" }")?;
        }
        Ok(())
    }
}
