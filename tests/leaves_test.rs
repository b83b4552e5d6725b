//! Tests for leaf collection

use rstest::rstest;

use menutree::domain::{
    build_forest, collect_leaf_ids, collect_leaf_ids_with, forest_depth, ChildOrder,
    ForestOptions, Menu, MenuListExt, MenuTree, MenuTreeListExt, OrphanPolicy,
};

fn node(id: &str, parent: &str) -> MenuTree {
    MenuTree {
        record_id: id.into(),
        parent_id: parent.into(),
        ..MenuTree::default()
    }
}

#[test]
fn given_nested_records_when_collecting_then_descends_before_next_sibling() {
    let nodes = vec![node("1", ""), node("2", "1"), node("3", "1"), node("4", "2")];

    assert_eq!(collect_leaf_ids(&nodes), vec!["4", "3"]);
}

#[test]
fn given_flat_records_when_collecting_then_via_projection() {
    let menus = vec![
        Menu::new("1"),
        Menu::new("2").with_parent("1", "1"),
        Menu::new("3").with_parent("1", "1"),
        Menu::new("4").with_parent("2", "1/2"),
    ];

    assert_eq!(menus.to_leaf_record_ids(), vec!["4", "3"]);
}

#[test]
fn given_sequence_order_when_collecting_then_leaves_follow_sorted_siblings() {
    let menus = vec![
        Menu::new("1"),
        Menu::new("late").with_parent("1", "1").with_sequence(9),
        Menu::new("early").with_parent("1", "1").with_sequence(1),
    ];
    let options = ForestOptions::new(OrphanPolicy::Drop, ChildOrder::Sequence);

    assert_eq!(menus.to_leaf_record_ids(), vec!["late", "early"]);
    assert_eq!(collect_leaf_ids_with(&menus.to_trees(), &options), vec!["early", "late"]);
}

#[rstest]
#[case::lone_root(vec![node("1", "")], vec!["1"])]
#[case::two_roots(vec![node("a", ""), node("b", "")], vec!["a", "b"])]
#[case::orphan_dropped(vec![node("a", ""), node("o", "gone")], vec!["a"])]
#[case::empty(vec![], vec![])]
fn given_shapes_when_collecting_then_expected_leaves(
    #[case] nodes: Vec<MenuTree>,
    #[case] expected: Vec<&str>,
) {
    assert_eq!(collect_leaf_ids(&nodes), expected);
}

#[test]
fn given_promoted_orphan_when_collecting_then_included() {
    let nodes = vec![node("a", ""), node("o", "gone")];
    let options = ForestOptions::new(OrphanPolicy::Promote, ChildOrder::Input);

    assert_eq!(collect_leaf_ids_with(&nodes, &options), vec!["a", "o"]);
}

fn chain(depth: usize) -> Vec<MenuTree> {
    let mut nodes = vec![node("0", "")];
    for i in 1..depth {
        nodes.push(node(&i.to_string(), &(i - 1).to_string()));
    }
    nodes
}

#[test]
fn given_deep_chain_when_collecting_then_single_deepest_leaf() {
    // Arrange: a single chain far deeper than the call stack could recurse
    let depth = 200_000;
    let nodes = chain(depth);

    // Act
    let leaves = collect_leaf_ids(&nodes);
    let promoted = collect_leaf_ids_with(
        &nodes,
        &ForestOptions::new(OrphanPolicy::Promote, ChildOrder::Sequence),
    );

    // Assert
    assert_eq!(leaves, vec![(depth - 1).to_string()]);
    assert_eq!(promoted, leaves);
}

#[test]
fn given_chain_when_measuring_built_forest_then_depth_matches() {
    let depth = 2_000;
    let forest = build_forest(&chain(depth));

    assert_eq!(forest_depth(&forest), depth);
    assert_eq!(forest.leaf_record_ids(), vec![(depth - 1).to_string()]);
}

#[test]
fn given_built_forest_when_reading_leaf_record_ids_then_no_relinking() {
    // Arrange: already-built trees, parent ids deliberately unresolvable
    let mut root = node("r", "");
    let mut branch = node("b", "elsewhere");
    branch.children.push(node("x", "nowhere"));
    root.children.push(branch);
    root.children.push(node("y", "nowhere"));
    let forest = vec![root, node("s", "")];

    // Act
    let leaves = forest.leaf_record_ids();

    // Assert
    assert_eq!(leaves, vec!["x", "y", "s"]);
}
