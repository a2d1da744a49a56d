use super::*;
use crate::{
    storage::{SparseStorage, SparseStorageSlot},
    traversal::SearchOrder,
};
use arrayvec::ArrayVec;

/// Builds the reference tree used throughout the tests:
///
/// ```text
/// 1 { 2 { 5, _ }, 3 { 4, 6 } }
/// ```
///
/// The shape follows deterministically from the insertion heuristic: left is
/// filled first, then right, then the lighter subtree, with ties going right.
fn six_node_tree() -> SparseVecWeightedTree<i32> {
    let mut tree = SparseVecWeightedTree::with_root(1);
    for value in 2..=6 {
        tree.add(value);
    }
    tree
}

fn sorted_values(tree: &SparseVecWeightedTree<i32>) -> Vec<i32> {
    let mut values = tree.values(SearchOrder::InOrder).copied().collect::<Vec<_>>();
    values.sort_unstable();
    values
}

#[test]
fn add_fills_left_then_right_then_lighter_side() {
    let tree = six_node_tree();
    let root = tree.root().expect("the tree cannot be empty");
    assert_eq!(root.value(), &1);
    let (left, right) = root.children().expect("the root must be a full branch");
    assert_eq!(left.value(), &2);
    assert_eq!(right.value(), &3);
    assert_eq!(left.left_child().expect("2 must have a left child").value(), &5);
    assert!(left.right_child().is_none());
    assert_eq!(right.left_child().expect("3 must have a left child").value(), &4);
    assert_eq!(right.right_child().expect("3 must have a right child").value(), &6);
}

#[test]
fn ties_between_equal_subtrees_go_right() {
    let mut tree = SparseVecWeightedTree::with_root(1);
    tree.add(2);
    tree.add(3);
    // Both subtrees now weigh 1, so the next insertion must land below the right child.
    tree.add(4);
    let root = tree.root().expect("the tree cannot be empty");
    let right = root.right_child().expect("the root must have a right child");
    assert_eq!(right.left_child().expect("4 must land below 3").value(), &4);
    assert!(root.left_child().expect("the root must have a left child").is_leaf());
}

#[test]
fn add_on_an_empty_tree_creates_the_root() {
    let mut tree = SparseVecWeightedTree::new();
    assert!(tree.is_empty());
    tree.add(7);
    let root = tree.root().expect("the tree cannot be empty anymore");
    assert!(root.is_root());
    assert!(root.is_leaf());
    assert_eq!(root.value(), &7);
    assert_eq!(tree.len(), 1);
}

#[test]
fn len_counts_every_node() {
    let mut tree = SparseVecWeightedTree::new();
    assert_eq!(tree.len(), 0);
    for value in 0..25 {
        tree.add(value);
        assert_eq!(tree.len(), value as usize + 1);
    }
}

#[test]
fn every_order_finds_every_distinct_value() {
    let tree = six_node_tree();
    for value in 1..=6 {
        for &order in &[SearchOrder::InOrder, SearchOrder::PreOrder, SearchOrder::PostOrder] {
            let found = tree.search(&value, order).expect("the value must be found");
            assert_eq!(found.value(), &value);
        }
    }
    for &order in &[SearchOrder::InOrder, SearchOrder::PreOrder, SearchOrder::PostOrder] {
        assert!(tree.search(&7, order).is_none());
    }
}

#[test]
fn search_order_decides_which_duplicate_is_found() {
    let mut tree = SparseVecWeightedTree::with_root(5);
    tree.add(5);
    let root_key = *tree.root().expect("the tree cannot be empty").raw_key();
    let child_key = *tree
        .root()
        .expect("the tree cannot be empty")
        .left_child()
        .expect("the root must have a left child")
        .raw_key();
    // Pre-order tests the receiver before its children; the other two orders reach
    // the left child first.
    assert_eq!(*tree.search(&5, SearchOrder::PreOrder).expect("must be found").raw_key(), root_key);
    assert_eq!(*tree.search(&5, SearchOrder::InOrder).expect("must be found").raw_key(), child_key);
    assert_eq!(*tree.search(&5, SearchOrder::PostOrder).expect("must be found").raw_key(), child_key);
}

#[test]
fn search_is_idempotent_without_mutation() {
    let tree = six_node_tree();
    let first = *tree.search(&4, SearchOrder::InOrder).expect("must be found").raw_key();
    let second = *tree.search(&4, SearchOrder::InOrder).expect("must be found").raw_key();
    assert_eq!(first, second);
}

#[test]
fn search_from_a_node_stays_within_its_subtree() {
    let tree = six_node_tree();
    let left = tree
        .root()
        .expect("the tree cannot be empty")
        .left_child()
        .expect("the root must have a left child");
    assert_eq!(left.size(), 2);
    assert!(left.search(&5, SearchOrder::PreOrder).is_some());
    assert!(left.search(&3, SearchOrder::PreOrder).is_none());
}

#[test]
fn removing_a_leaf_clears_the_parent_link() {
    let mut tree = six_node_tree();
    assert!(tree.remove(&5, SearchOrder::InOrder));
    assert_eq!(tree.len(), 5);
    assert!(tree.search(&5, SearchOrder::InOrder).is_none());
    let left = tree
        .root()
        .expect("the tree cannot be empty")
        .left_child()
        .expect("the root must still have a left child");
    assert_eq!(left.value(), &2);
    assert!(left.is_leaf());
}

#[test]
fn removing_a_node_with_one_child_splices_the_child() {
    let mut tree = SparseVecWeightedTree::with_root(1);
    for value in 2..=5 {
        tree.add(value);
    }
    // 1 { 2 { 5, _ }, 3 { 4, _ } }; node 3 has a parent and only a left child.
    assert!(tree.remove(&3, SearchOrder::InOrder));
    assert_eq!(tree.len(), 4);
    let root = tree.root().expect("the tree cannot be empty");
    let right = root.right_child().expect("the root must still have a right child");
    assert_eq!(right.value(), &4);
    assert_eq!(
        right.parent().expect("the spliced node must have a parent").value(),
        &1,
    );
    assert_eq!(sorted_values(&tree), [1, 2, 4, 5]);
}

#[test]
fn removing_a_node_with_only_a_right_child_splices_it() {
    let mut tree = six_node_tree();
    // Taking 4 away first leaves node 3 with only its right child.
    assert!(tree.remove(&4, SearchOrder::InOrder));
    assert!(tree.remove(&3, SearchOrder::InOrder));
    assert_eq!(tree.len(), 4);
    let root = tree.root().expect("the tree cannot be empty");
    let right = root.right_child().expect("the root must still have a right child");
    assert_eq!(right.value(), &6);
    assert_eq!(
        right.parent().expect("the spliced node must have a parent").value(),
        &1,
    );
    assert_eq!(sorted_values(&tree), [1, 2, 5, 6]);
}

#[test]
fn removing_the_root_with_only_a_right_child_promotes_it() {
    let mut tree = SparseVecWeightedTree::with_root(1);
    tree.add(2);
    tree.add(3);
    // Taking 2 away leaves the root with only its right child.
    assert!(tree.remove(&2, SearchOrder::InOrder));
    assert!(tree.remove(&1, SearchOrder::InOrder));
    assert_eq!(tree.len(), 1);
    let root = tree.root().expect("the tree cannot be empty");
    assert!(root.is_root());
    assert!(root.is_leaf());
    assert_eq!(root.value(), &3);
}

#[test]
fn removing_a_full_branch_splices_the_heavy_child_and_dissolves_the_light_one() {
    let mut tree = six_node_tree();
    // Node 3 has a parent and two children of weight 1 each; the tie makes 6 the
    // heavy child, so 6 takes 3's slot and 4 is re-inserted through the root.
    assert!(tree.remove(&3, SearchOrder::InOrder));
    assert_eq!(tree.len(), 5);
    assert!(tree.search(&3, SearchOrder::InOrder).is_none());
    let root = tree.root().expect("the tree cannot be empty");
    let right = root.right_child().expect("the root must still have a right child");
    assert_eq!(right.value(), &6);
    assert_eq!(
        right.left_child().expect("the dissolved value must land below 6").value(),
        &4,
    );
    assert_eq!(sorted_values(&tree), [1, 2, 4, 5, 6]);
}

#[test]
fn dissolving_a_multi_node_subtree_preserves_every_value() {
    let mut tree = SparseVecWeightedTree::with_root(1);
    for value in 2..=10 {
        tree.add(value);
    }
    // Node 3 now carries two children of weight 2 each, so removing it dissolves
    // a two-node subtree through the root.
    assert!(tree.remove(&3, SearchOrder::InOrder));
    assert_eq!(tree.len(), 9);
    assert!(tree.search(&3, SearchOrder::InOrder).is_none());
    assert_eq!(sorted_values(&tree), [1, 2, 4, 5, 6, 7, 8, 9, 10]);
    let root = tree.root().expect("the tree cannot be empty");
    assert_eq!(
        root.right_child().expect("the root must still have a right child").value(),
        &6,
    );
}

#[test]
fn removing_the_last_value_leaves_a_usable_empty_tree() {
    let mut tree = SparseVecWeightedTree::with_root(7);
    assert!(tree.remove(&7, SearchOrder::PreOrder));
    assert_eq!(tree.len(), 0);
    assert!(tree.is_empty());
    assert!(tree.root().is_none());
    assert!(tree.search(&7, SearchOrder::PreOrder).is_none());
    // The emptied tree accepts insertions exactly like a freshly constructed one.
    tree.add(8);
    assert_eq!(tree.len(), 1);
    let root = tree.root().expect("the tree cannot be empty anymore");
    assert!(root.is_root());
    assert_eq!(root.value(), &8);
}

#[test]
fn removing_the_root_with_one_child_promotes_the_child() {
    let mut tree = SparseVecWeightedTree::with_root(1);
    tree.add(2);
    assert!(tree.remove(&1, SearchOrder::PreOrder));
    assert_eq!(tree.len(), 1);
    let root = tree.root().expect("the tree cannot be empty");
    assert!(root.is_root());
    assert!(root.is_leaf());
    assert_eq!(root.value(), &2);
}

#[test]
fn removing_the_root_with_two_children_promotes_the_heavy_one() {
    let mut tree = SparseVecWeightedTree::with_root(1);
    tree.add(2);
    tree.add(3);
    assert!(tree.remove(&1, SearchOrder::PreOrder));
    assert_eq!(tree.len(), 2);
    let root = tree.root().expect("the tree cannot be empty");
    assert!(root.is_root());
    // The tie ranks the right child (3) as the heavy one, and 2 is re-inserted below it.
    assert_eq!(root.value(), &3);
    assert_eq!(root.left_child().expect("2 must land below 3").value(), &2);
}

#[test]
fn removing_an_absent_value_changes_nothing() {
    let mut tree = six_node_tree();
    let before = sorted_values(&tree);
    for &order in &[SearchOrder::InOrder, SearchOrder::PreOrder, SearchOrder::PostOrder] {
        assert!(!tree.remove(&100, order));
    }
    assert_eq!(tree.len(), 6);
    assert_eq!(sorted_values(&tree), before);
}

#[test]
fn remove_on_an_empty_tree_reports_failure() {
    let mut tree = SparseVecWeightedTree::new();
    assert!(!tree.remove(&1, SearchOrder::InOrder));
    assert!(tree.search(&1, SearchOrder::InOrder).is_none());
    assert_eq!(tree.len(), 0);
}

#[test]
fn bulk_removal_scenario() {
    let mut tree = SparseVecWeightedTree::with_root(43);
    for value in 0..100 {
        tree.add(value);
    }
    assert_eq!(tree.len(), 101);
    for value in (0..=10).rev() {
        assert!(tree.remove(&value, SearchOrder::InOrder));
    }
    assert_eq!(tree.len(), 90);
    for value in 0..=10 {
        assert!(tree.search(&value, SearchOrder::InOrder).is_none());
    }
    assert!(tree.search(&43, SearchOrder::InOrder).is_some());
    for value in 11..100 {
        assert!(tree.search(&value, SearchOrder::InOrder).is_some());
    }
}

#[test]
fn values_follow_the_visit_orders() {
    let tree = six_node_tree();
    let collect = |order| tree.values(order).copied().collect::<Vec<_>>();
    assert_eq!(collect(SearchOrder::InOrder), [5, 2, 1, 4, 3, 6]);
    assert_eq!(collect(SearchOrder::PreOrder), [1, 2, 5, 3, 4, 6]);
    assert_eq!(collect(SearchOrder::PostOrder), [5, 2, 4, 6, 3, 1]);
    assert!(SparseVecWeightedTree::<i32>::new().values(SearchOrder::InOrder).next().is_none());
}

#[test]
fn subtree_values_start_at_the_receiver() {
    let tree = six_node_tree();
    let left = tree
        .root()
        .expect("the tree cannot be empty")
        .left_child()
        .expect("the root must have a left child");
    let values = left.values(SearchOrder::PreOrder).copied().collect::<Vec<_>>();
    assert_eq!(values, [2, 5]);
}

#[test]
fn debug_renders_the_structure() {
    let tree = six_node_tree();
    assert_eq!(format!("{:?}", tree), "1 { 2 { 5, _ }, 3 { 4, 6 } }");
    assert_eq!(format!("{:?}", SparseVecWeightedTree::<i32>::new()), "{}");
    assert_eq!(format!("{:?}", SparseVecWeightedTree::with_root(7)), "7");
}

#[test]
fn node_ref_mut_edits_values_and_grows_subtrees() {
    let mut tree = six_node_tree();
    {
        let mut root = tree.root_mut().expect("the tree cannot be empty");
        *root.value_mut() = 10;
    }
    assert_eq!(tree.root().expect("the tree cannot be empty").value(), &10);
    {
        let mut root = tree.root_mut().expect("the tree cannot be empty");
        let mut right = root.right_child_mut().expect("the root must have a right child");
        right.add(11);
        assert_eq!(right.size(), 4);
    }
    assert_eq!(tree.len(), 7);
    assert!(tree.search(&11, SearchOrder::PostOrder).is_some());
}

#[test]
fn removal_holes_are_reused_by_insertion() {
    let mut tree = six_node_tree();
    assert!(tree.is_dense());
    assert!(tree.remove(&5, SearchOrder::InOrder));
    assert_eq!(tree.num_holes(), 1);
    tree.add(7);
    assert!(tree.is_dense());
    assert_eq!(tree.len(), 6);
}

#[test]
fn arrayvec_backed_tree_works_without_reallocation() {
    type Backing = ArrayVec<[SparseStorageSlot<Node<u16, usize>>; 16]>;
    let mut tree = WeightedTree::<u16, usize, SparseStorage<Node<u16, usize>, Backing>>::new();
    for value in 0..10 {
        tree.add(value);
    }
    assert_eq!(tree.len(), 10);
    assert!(tree.search(&9, SearchOrder::PreOrder).is_some());
    assert!(tree.remove(&0, SearchOrder::InOrder));
    assert_eq!(tree.len(), 9);
}

quickcheck::quickcheck! {
    fn qc_len_matches_the_insertion_count(values: Vec<i8>) -> bool {
        let mut tree = SparseVecWeightedTree::new();
        for &value in &values {
            tree.add(value);
        }
        tree.len() == values.len()
    }

    fn qc_every_inserted_value_is_found(values: Vec<i8>) -> bool {
        let mut tree = SparseVecWeightedTree::new();
        for &value in &values {
            tree.add(value);
        }
        values.iter().all(|value| {
            tree.search(value, SearchOrder::InOrder).is_some()
                && tree.search(value, SearchOrder::PreOrder).is_some()
                && tree.search(value, SearchOrder::PostOrder).is_some()
        })
    }

    fn qc_removal_preserves_the_remaining_multiset(values: Vec<i8>, removals: Vec<i8>) -> bool {
        let mut tree = SparseVecWeightedTree::new();
        let mut model = values.clone();
        for &value in &values {
            tree.add(value);
        }
        for removal in &removals {
            let removed = tree.remove(removal, SearchOrder::InOrder);
            match model.iter().position(|value| value == removal) {
                Some(position) => {
                    if !removed {
                        return false;
                    }
                    model.swap_remove(position);
                }
                None => {
                    if removed {
                        return false;
                    }
                }
            }
        }
        let mut remaining = tree.values(SearchOrder::InOrder).copied().collect::<Vec<_>>();
        remaining.sort_unstable();
        model.sort_unstable();
        remaining == model
    }
}
