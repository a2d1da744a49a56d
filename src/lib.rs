//! Implements an arena-allocated count-weighted binary tree and interfaces to work with it.
//!
//! ------------------------
//!
//! # Overview
//! Ballast implements a binary tree using a technique called ["arena-allocated trees"][arena tree blog post], described by Ben Lovy. The gist of it is that the tree uses some sort of backing storage to store the elements, typically a [`Vec`] (or its variants, like [`SmallVec`] or [`ArrayVec`]), and instead of using pointers to link to children, indices into the storage are used instead. This significantly improves element insertion and removal performance as compared to `Rc`-based trees, and gives room for supporting configurations without a global memory allocator.
//!
//! The tree itself is *count-weighted*: it is not a binary *search* tree, and stores no ordering among payloads. Instead, insertion compares the cardinality of the two subtrees below the current node and descends into the lighter one, keeping the tree approximately balanced without any rotation machinery. Lookup is a linear traversal of the nodes in one of three classic visit orders, chosen by the caller; removal splices children over the removed node and, when a node with two children is removed, dissolves the lighter subtree back into the tree one value at a time. See the [`weighted_tree`] module for the full story.
//!
//! # Storage
//! The trait used for defining the "arena" type used is `Storage`. Implementing it directly isn't the only way to get your type to be supported by the tree — `ListStorage` is a trait which allows you to define an arena storage in terms of a list-like collection, wrapped in `SparseStorage` to keep keys stable across removals.
//!
//! Several types from both the standard library and external crates already implement `ListStorage` out of the box:
//! - [`Vec`] and [`VecDeque`] — require the `alloc` feature flag
//! - [`ArrayVec`] — always available
//! - [`SmallVec`] — requires the `smallvec` feature flag
//!
//! [`SlotMap`], [`HopSlotMap`] and [`DenseSlotMap`] implement `Storage` directly behind the `slotmap` feature flag.
//!
//! ## Sparse storage
//! The tree relies on node keys staying stable while *other* nodes are inserted and removed. List-like collections shift their elements on removal, so they participate through `SparseStorage`: element removal leaves a hole behind, and holes are tracked in a free list and reused by subsequent insertions. As a side effect, element size increases because of the additional `Slot<T>` layer.
//!
//! # Feature flags
//! - `std` (**enabled by default**) — enables the full standard library, disabling `no_std` for the crate.
//! - `unwind_safety` (**enabled by default**) — aborts the process instead of unwinding when a corrupted tree is detected in debug builds, preventing unwinders from collecting corrupted data.
//! - `alloc` (**enabled by default**) — adds `ListStorage` trait implementations for standard library containers, except for `LinkedList`, which is unsupported. *This does not require standard library support and will only panic at runtime in `no_std` environments without an allocator.*
//! - `smallvec` — adds a `ListStorage` trait implementation for [`SmallVec`].
//! - `slotmap` — adds `Storage` trait implementations for [`SlotMap`], [`HopSlotMap`] and [`DenseSlotMap`].
//!
//! # Public dependencies
//! - `arrayvec` (**required**) — `^0.5`
//! - `smallvec` (*optional*) — `^1.4`
//! - `slotmap` (*optional*) — `^1.0`
//!
//! [`Vec`]: https://doc.rust-lang.org/std/vec/struct.Vec.html " "
//! [`VecDeque`]: https://doc.rust-lang.org/std/collections/struct.VecDeque.html " "
//! [`SmallVec`]: https://docs.rs/smallvec/*/smallvec/struct.SmallVec.html " "
//! [`ArrayVec`]: https://docs.rs/arrayvec/*/arrayvec/struct.ArrayVec.html " "
//! [`SlotMap`]: https://docs.rs/slotmap/*/slotmap/struct.SlotMap.html " "
//! [`HopSlotMap`]: https://docs.rs/slotmap/*/slotmap/hop/struct.HopSlotMap.html " "
//! [`DenseSlotMap`]: https://docs.rs/slotmap/*/slotmap/dense/struct.DenseSlotMap.html " "
//! [`weighted_tree`]: weighted_tree/index.html " "
//! [arena tree blog post]: https://dev.to/deciduously/no-more-tears-no-more-knots-arena-allocated-trees-in-rust-44k6 " "

#![warn(
    rust_2018_idioms,
    clippy::cargo,
    clippy::nursery,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    variant_size_differences,
    clippy::cast_lossless,
    clippy::checked_conversions,
    clippy::copy_iterator,
    clippy::expl_impl_clone_on_copy,
    clippy::explicit_iter_loop,
    clippy::explicit_into_iter_loop,
    clippy::map_unwrap_or,
    clippy::implicit_saturating_sub,
    clippy::inefficient_to_string,
    clippy::invalid_upcast_comparisons,
    clippy::items_after_statements,
    clippy::large_stack_arrays,
    clippy::let_unit_value,
    clippy::macro_use_imports,
    clippy::match_same_arms,
    clippy::match_wild_err_arm,
    clippy::match_wildcard_for_single_variants,
    // sick of this stupid lint, disabling
    // clippy::module_name_repetitions,
    clippy::mut_mut,
    clippy::needless_continue,
    clippy::needless_pass_by_value,
    clippy::option_if_let_else,
    clippy::option_option,
    clippy::range_plus_one,
    clippy::range_minus_one,
    clippy::redundant_closure_for_method_calls,
    clippy::same_functions_in_if_condition,
    clippy::similar_names,
    clippy::single_match_else,
    clippy::string_add_assign,
    clippy::too_many_lines,
    clippy::type_repetition_in_bounds,
    clippy::trivially_copy_pass_by_ref,
    clippy::unicode_not_nfc,
    clippy::unnested_or_patterns,
    clippy::unused_self,
    clippy::used_underscore_binding,
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::decimal_literal_representation,
    clippy::filetype_is_file,
    clippy::get_unwrap,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unneeded_field_pattern,
    clippy::unwrap_used, // Only .expect() allowed
    clippy::use_debug,
    clippy::verbose_file_reads,
)]
#![deny(
    anonymous_parameters,
    bare_trait_objects,
    clippy::exit,
)]
#![allow(clippy::use_self)] // FIXME reenable when it gets fixed
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod storage;
#[doc(no_inline)]
pub use storage::{Storage, ListStorage, DefaultStorage};

pub mod weighted_tree;
pub use weighted_tree::WeightedTree;

pub mod traversal;
pub use traversal::SearchOrder;

/// A prelude for using Ballast, containing the most used types in a renamed form for safe glob-importing.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::storage::{
        Storage as TreeStorage,
        SparseStorage as SparseTreeStorage,
        DefaultStorage as DefaultTreeStorage,
    };
    #[doc(no_inline)]
    pub use crate::weighted_tree::{
        WeightedTree,
        NodeRef as WeightedTreeNodeRef,
        NodeRefMut as WeightedTreeNodeRefMut,
    };
    #[doc(no_inline)]
    pub use crate::traversal::SearchOrder;
}

pub(crate) mod util;
