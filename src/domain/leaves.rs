//! Leaf collection and other walks over a built forest.
//!
//! All walks use an explicit stack or queue, never recursion, so deep
//! hierarchies cannot overflow the call stack.

use std::collections::VecDeque;

use termtree::Tree;
use tracing::instrument;

use crate::domain::builder::ForestBuilder;
use crate::domain::entities::MenuTree;
use crate::domain::options::ForestOptions;

/// Link `nodes` into a forest and return its leaf ids.
pub fn collect_leaf_ids(nodes: &[MenuTree]) -> Vec<String> {
    collect_leaf_ids_with(nodes, &ForestOptions::default())
}

/// Leaf ids read straight off the linked arena.
///
/// No owned trees are assembled, so nothing nested is built or dropped and
/// the hierarchy depth only costs heap.
#[instrument(level = "debug", skip(nodes, options), fields(nodes = nodes.len()))]
pub fn collect_leaf_ids_with(nodes: &[MenuTree], options: &ForestOptions) -> Vec<String> {
    ForestBuilder::with_options(*options)
        .build_arena(nodes)
        .iter()
        .filter(|(_, node)| node.children.is_empty())
        .map(|(_, node)| node.data.record_id.clone())
        .collect()
}

/// Ids of nodes without children, pre-order depth-first:
/// descend into a child before moving on to its next sibling.
#[instrument(level = "debug", skip(forest), fields(roots = forest.len()))]
pub fn leaf_ids(forest: &[MenuTree]) -> Vec<String> {
    let mut leaves = Vec::new();
    let mut stack: Vec<&MenuTree> = forest.iter().rev().collect();

    while let Some(node) = stack.pop() {
        if node.children.is_empty() {
            leaves.push(node.record_id.clone());
        } else {
            // Reverse push so the leftmost child is visited first
            stack.extend(node.children.iter().rev());
        }
    }

    leaves
}

/// Number of levels in the deepest tree, 0 for an empty forest.
pub fn forest_depth(forest: &[MenuTree]) -> usize {
    let mut max_depth = 0;
    let mut queue: VecDeque<(&MenuTree, usize)> = forest.iter().map(|root| (root, 1)).collect();

    while let Some((node, depth)) = queue.pop_front() {
        max_depth = max_depth.max(depth);
        for child in &node.children {
            queue.push_back((child, depth + 1));
        }
    }

    max_depth
}

/// Render each root as a `termtree` for terminal display.
pub fn to_display_trees(forest: &[MenuTree]) -> Vec<Tree<String>> {
    forest.iter().map(to_display_tree).collect()
}

/// Post-order over `root`: when a node is finished, its rendered children
/// are the last `children.len()` entries on the output stack.
pub fn to_display_tree(root: &MenuTree) -> Tree<String> {
    let mut pending = vec![(root, false)];
    let mut rendered: Vec<Tree<String>> = Vec::new();

    while let Some((node, visited)) = pending.pop() {
        if visited {
            let leaves = rendered.split_off(rendered.len() - node.children.len());
            rendered.push(Tree::new(node.to_string()).with_leaves(leaves));
        } else {
            pending.push((node, true));
            for child in node.children.iter().rev() {
                pending.push((child, false));
            }
        }
    }

    rendered
        .pop()
        .unwrap_or_else(|| Tree::new(root.to_string()))
}
