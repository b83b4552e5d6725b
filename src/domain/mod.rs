//! Domain layer: menu entities and hierarchy logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod ancestry;
pub mod arena;
pub mod builder;
pub mod entities;
pub mod error;
pub mod leaves;
pub mod menu_traits;
pub mod options;
pub mod query;

pub use ancestry::{resolve_ancestor_ids, resolve_ancestor_ids_with, split_parent_path};
pub use arena::{ArenaNode, MenuArena};
pub use builder::{build_forest, build_forest_with, to_trees, ForestBuilder};
pub use entities::{Menu, MenuKind, MenuTree, Menus};
pub use error::DomainError;
pub use leaves::{
    collect_leaf_ids, collect_leaf_ids_with, forest_depth, leaf_ids, to_display_tree,
    to_display_trees,
};
pub use menu_traits::{MenuListExt, MenuTreeListExt};
pub use options::{ChildOrder, ForestOptions, OrphanPolicy, PATH_DELIMITER};
pub use query::MenuQuery;
