//! Arena-based menu forest.
//!
//! Nodes live in a generational arena and refer to each other by index.
//! Children are accumulated as index lists while linking, and owned
//! [`MenuTree`] values are only assembled at the end by [`MenuArena::into_forest`].

use std::collections::HashMap;

use generational_arena::{Arena, Index};
use tracing::{instrument, trace};

use crate::domain::entities::MenuTree;
use crate::domain::options::{ChildOrder, ForestOptions, OrphanPolicy};

/// Node in the arena: menu payload plus index links.
#[derive(Debug)]
pub struct ArenaNode {
    /// Menu payload; its `children` stay empty while in the arena
    pub data: MenuTree,
    /// Index of the parent node, None for roots
    pub parent: Option<Index>,
    /// Indices of child nodes, in link order
    pub children: Vec<Index>,
}

/// Forest of menu nodes linked by parent id.
#[derive(Debug)]
pub struct MenuArena {
    arena: Arena<ArenaNode>,
    /// Root indices in forest order
    roots: Vec<Index>,
    /// Ids of nodes whose parent id did not resolve, in input order
    orphans: Vec<String>,
}

impl Default for MenuArena {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuArena {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            roots: Vec::new(),
            orphans: Vec::new(),
        }
    }

    /// Link `nodes` into a forest.
    ///
    /// The id lookup is filled in one pass (a later duplicate id replaces an
    /// earlier one), then every node is linked in input order: empty parent id
    /// makes a root, a resolvable parent id appends to that parent's children,
    /// anything else is an orphan handled by `options.orphan_policy`.
    #[instrument(level = "debug", skip(nodes), fields(nodes = nodes.len()))]
    pub fn from_nodes(nodes: &[MenuTree], options: &ForestOptions) -> Self {
        let mut forest = Self::new();
        let mut order = Vec::with_capacity(nodes.len());
        let mut lookup: HashMap<&str, Index> = HashMap::with_capacity(nodes.len());

        for node in nodes {
            let data = MenuTree {
                children: Vec::new(),
                ..node.clone()
            };
            let idx = forest.arena.insert(ArenaNode {
                data,
                parent: None,
                children: Vec::new(),
            });
            lookup.insert(node.record_id.as_str(), idx);
            order.push(idx);
        }

        for (node, idx) in nodes.iter().zip(order) {
            if node.parent_id.is_empty() {
                forest.roots.push(idx);
                continue;
            }
            match lookup.get(node.parent_id.as_str()) {
                Some(&parent_idx) => forest.link(parent_idx, idx),
                None => {
                    trace!(record_id = %node.record_id, parent_id = %node.parent_id, "unresolved parent");
                    forest.orphans.push(node.record_id.clone());
                    if options.orphan_policy == OrphanPolicy::Promote {
                        forest.roots.push(idx);
                    }
                }
            }
        }

        if options.child_order == ChildOrder::Sequence {
            forest.sort_by_sequence();
        }
        forest
    }

    fn link(&mut self, parent_idx: Index, child_idx: Index) {
        if let Some(parent) = self.arena.get_mut(parent_idx) {
            parent.children.push(child_idx);
        }
        if let Some(child) = self.arena.get_mut(child_idx) {
            child.parent = Some(parent_idx);
        }
    }

    /// Stable sort of roots and every sibling group by `sequence`.
    fn sort_by_sequence(&mut self) {
        let sequences: HashMap<Index, i64> = self
            .arena
            .iter()
            .map(|(idx, node)| (idx, node.data.sequence))
            .collect();
        let key = |idx: &Index| sequences.get(idx).copied().unwrap_or_default();

        self.roots.sort_by_key(key);
        for (_, node) in self.arena.iter_mut() {
            node.children.sort_by_key(key);
        }
    }

    pub fn get_node(&self, idx: Index) -> Option<&ArenaNode> {
        self.arena.get(idx)
    }

    pub fn roots(&self) -> &[Index] {
        &self.roots
    }

    /// Ids whose parent id did not resolve, whatever the policy did with them.
    pub fn orphans(&self) -> &[String] {
        &self.orphans
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Pre-order walk over every node reachable from a root.
    pub fn iter(&self) -> PreOrderIterator<'_> {
        PreOrderIterator::new(self)
    }

    /// Post-order walk over every node reachable from a root.
    pub fn iter_postorder(&self) -> PostOrderIterator<'_> {
        PostOrderIterator::new(self)
    }

    /// Assemble owned trees, one per root, in forest order.
    ///
    /// Children are built before their parent (post-order), so no step
    /// recurses. Nodes unreachable from a root are discarded.
    #[instrument(level = "debug", skip(self))]
    pub fn into_forest(mut self) -> Vec<MenuTree> {
        let order: Vec<Index> = self.iter_postorder().map(|(idx, _)| idx).collect();
        let mut built: HashMap<Index, MenuTree> = HashMap::with_capacity(order.len());

        for idx in order {
            if let Some(node) = self.arena.remove(idx) {
                let mut tree = node.data;
                tree.children = node
                    .children
                    .iter()
                    .filter_map(|child| built.remove(child))
                    .collect();
                built.insert(idx, tree);
            }
        }

        self.roots
            .iter()
            .filter_map(|root| built.remove(root))
            .collect()
    }
}

pub struct PreOrderIterator<'a> {
    forest: &'a MenuArena,
    stack: Vec<Index>,
}

impl<'a> PreOrderIterator<'a> {
    fn new(forest: &'a MenuArena) -> Self {
        // Roots reversed so the first root is popped first
        let stack = forest.roots.iter().rev().copied().collect();
        Self { forest, stack }
    }
}

impl<'a> Iterator for PreOrderIterator<'a> {
    type Item = (Index, &'a ArenaNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.forest.get_node(current_idx) {
                // Push children in reverse order for left-to-right traversal
                for &child in node.children.iter().rev() {
                    self.stack.push(child);
                }
                return Some((current_idx, node));
            }
        }
        None
    }
}

pub struct PostOrderIterator<'a> {
    forest: &'a MenuArena,
    stack: Vec<(Index, bool)>,
}

impl<'a> PostOrderIterator<'a> {
    fn new(forest: &'a MenuArena) -> Self {
        let stack = forest.roots.iter().rev().map(|&root| (root, false)).collect();
        Self { forest, stack }
    }
}

impl<'a> Iterator for PostOrderIterator<'a> {
    type Item = (Index, &'a ArenaNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current_idx, visited)) = self.stack.pop() {
            if let Some(node) = self.forest.get_node(current_idx) {
                if !visited {
                    self.stack.push((current_idx, true));
                    for &child in node.children.iter().rev() {
                        self.stack.push((child, false));
                    }
                } else {
                    return Some((current_idx, node));
                }
            }
        }
        None
    }
}
