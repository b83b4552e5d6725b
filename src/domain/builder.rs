//! Forest builder: links flat menu projections into owned trees.

use tracing::{debug, instrument};

use crate::domain::arena::MenuArena;
use crate::domain::entities::{Menu, MenuTree};
use crate::domain::options::ForestOptions;

/// Builds menu forests with a fixed set of options.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForestBuilder {
    options: ForestOptions,
}

impl ForestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ForestOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ForestOptions {
        &self.options
    }

    /// Link `nodes` without assembling owned trees.
    pub fn build_arena(&self, nodes: &[MenuTree]) -> MenuArena {
        let forest = MenuArena::from_nodes(nodes, &self.options);
        if !forest.orphans().is_empty() {
            debug!(
                orphans = forest.orphans().len(),
                policy = %self.options.orphan_policy,
                "nodes with unresolved parent"
            );
        }
        forest
    }

    /// Roots in forest order, each owning its descendants.
    #[instrument(level = "debug", skip(self, nodes), fields(nodes = nodes.len()))]
    pub fn build(&self, nodes: &[MenuTree]) -> Vec<MenuTree> {
        self.build_arena(nodes).into_forest()
    }
}

/// Build a forest with default options: input order kept, orphans dropped.
pub fn build_forest(nodes: &[MenuTree]) -> Vec<MenuTree> {
    build_forest_with(nodes, &ForestOptions::default())
}

pub fn build_forest_with(nodes: &[MenuTree], options: &ForestOptions) -> Vec<MenuTree> {
    ForestBuilder::with_options(*options).build(nodes)
}

/// Project flat records onto tree nodes, keeping order.
pub fn to_trees(records: &[Menu]) -> Vec<MenuTree> {
    records.iter().map(MenuTree::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::options::{ChildOrder, OrphanPolicy};

    fn node(id: &str, parent: &str, sequence: i64) -> MenuTree {
        MenuTree {
            record_id: id.into(),
            parent_id: parent.into(),
            sequence,
            ..MenuTree::default()
        }
    }

    #[test]
    fn given_sequence_order_when_building_then_siblings_sorted_stably() {
        let nodes = vec![
            node("r2", "", 2),
            node("r1", "", 1),
            node("c", "r1", 5),
            node("a", "r1", 1),
            node("b", "r1", 1),
        ];
        let options = ForestOptions::new(OrphanPolicy::Drop, ChildOrder::Sequence);
        let forest = build_forest_with(&nodes, &options);

        let roots: Vec<_> = forest.iter().map(|t| t.record_id.as_str()).collect();
        assert_eq!(roots, vec!["r1", "r2"]);
        let children: Vec<_> = forest[0].children.iter().map(|t| t.record_id.as_str()).collect();
        assert_eq!(children, vec!["a", "b", "c"]);
    }

    #[test]
    fn given_new_builder_when_building_then_default_options_apply() {
        let builder = ForestBuilder::new();
        let nodes = vec![node("1", "", 0), node("9", "missing", 0)];

        assert_eq!(builder.options(), &ForestOptions::default());
        assert_eq!(builder.build(&nodes), build_forest(&nodes));
        assert_eq!(builder.build_arena(&nodes).orphans(), ["9".to_string()]);
    }

    #[test]
    fn given_input_order_when_building_then_sequence_ignored() {
        let nodes = vec![node("r2", "", 2), node("r1", "", 1)];
        let forest = build_forest(&nodes);

        assert_eq!(forest[0].record_id, "r2");
        assert_eq!(forest[1].record_id, "r1");
    }

    #[test]
    fn given_input_with_children_when_building_then_input_untouched() {
        let mut parent = node("1", "", 0);
        parent.children.push(node("stale", "1", 0));
        let nodes = vec![parent, node("2", "1", 0)];

        let forest = build_forest(&nodes);

        assert_eq!(nodes[0].children.len(), 1);
        assert_eq!(forest[0].children.len(), 1);
        assert_eq!(forest[0].children[0].record_id, "2");
    }
}
