use core::fmt::Debug;

/// A node of a weighted binary tree.
///
/// Created by the tree internally and only publicly exposed so that tree storages' generic arguments could be specified.
///
/// Every node owns its `left` and `right` child keys — removing a node from the storage is only done after its children have been spliced away or dissolved. The `parent` key is purely a back-reference for upward navigation and never manages any node's lifetime.
#[derive(Copy, Clone, Debug, Hash)]
pub struct Node<T, K>
where K: Clone + Debug + Eq,
{
    pub(crate) value: T,
    pub(crate) parent: Option<K>,
    pub(crate) left: Option<K>,
    pub(crate) right: Option<K>,
}
impl<T, K> Node<T, K>
where K: Clone + Debug + Eq,
{
    /// Creates a leaf node with the specified parent.
    ///
    /// # Safety
    /// The parent must exist and must adopt the new node's key as its `left` or `right` child immediately, as dangling or unadopted parent links violate the tree's structural invariants.
    #[inline(always)]
    pub(crate) unsafe fn leaf(value: T, parent: K) -> Self {
        Self {
            value,
            parent: Some(parent),
            left: None,
            right: None,
        }
    }
    /// Creates a root node.
    ///
    /// # Safety
    /// The node should not be added into a tree if it already has a root node, as there can only be one.
    #[inline(always)]
    pub(crate) unsafe fn root(value: T) -> Self {
        Self {
            value,
            parent: None,
            left: None,
            right: None,
        }
    }
}
