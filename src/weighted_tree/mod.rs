//! A binary tree balanced by subtree *cardinality* rather than by payload ordering.
//!
//! Unlike a binary search tree, this tree stores no ordering among its payloads — it is a container shaped like a binary tree, kept approximately balanced by a simple weight heuristic: insertion fills a missing left child first, then a missing right child, and otherwise descends into whichever subtree currently holds fewer nodes (ties go right). There are no rotations and no height guarantee; the balance is purely the statistical effect of always growing the lighter side.
//!
//! Because payloads are unordered, lookup is a linear traversal. The caller picks one of the three classic visit orders (see [`SearchOrder`]); with duplicate values in the tree, the chosen order decides which node is found, and that choice is part of the contract.
//!
//! Removal is where the structure earns its keep: a removed node's slot is patched with one of its children, and when both children are present, the heavier child is spliced in while the lighter subtree is *dissolved* — its values are extracted leaf by leaf and re-inserted through the ordinary insertion heuristic, so no value is ever lost to a structural operation.
//!
//! # Example
//! ```rust
//! use ballast::{weighted_tree::WeightedTree, SearchOrder};
//!
//! // Create the tree. The only thing we need for that is the data payload for the root node. The
//! // turbofish there is needed to state that we are using the default storage method instead of
//! // asking the compiler to infer it, which would be impossible.
//! let mut tree = WeightedTree::<_>::with_root(43);
//!
//! // Grow the tree; insertion always fills the lighter side.
//! for i in 0..100 {
//!     tree.add(i);
//! }
//! assert_eq!(tree.len(), 101);
//!
//! // All three classic visit orders can be used to look a value up.
//! let node = tree.search(&97, SearchOrder::PostOrder).unwrap();
//! assert_eq!(node.value(), &97);
//!
//! // Removal preserves every other value, even when it has to dissolve a whole subtree.
//! for v in (0..=10).rev() {
//!     assert!(tree.remove(&v, SearchOrder::InOrder));
//! }
//! assert_eq!(tree.len(), 90);
//! ```
//!
//! [`SearchOrder`]: ../traversal/enum.SearchOrder.html " "

mod base;
mod node;
mod node_ref;
mod node_ref_mut;
#[cfg(test)]
mod tests;

pub use base::WeightedTree;
pub use node::Node;
pub use node_ref::NodeRef;
pub use node_ref_mut::NodeRefMut;

/// A weighted binary tree which uses a *sparse* `Vec` as backing storage.
///
/// The default `WeightedTree` type already uses this, so this is only provided for explicitness and consistency.
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
#[allow(unused_qualifications)]
pub type SparseVecWeightedTree<T> =
    WeightedTree<T, usize, crate::storage::SparseVec<Node<T, usize>>>;
