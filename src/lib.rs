//! Menu hierarchy builder.
//!
//! Turns flat, parent-linked menu records into an owned forest and derives
//! leaf ids and ancestor ids from them. The three core views are pure
//! functions in [`domain`]:
//!
//! - [`build_forest`]: link records by `parent_id`, roots in input order
//! - [`collect_leaf_ids`]: pre-order ids of childless nodes
//! - [`resolve_ancestor_ids`]: own ids plus every id in `parent_path`, deduplicated

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use domain::{
    build_forest, build_forest_with, collect_leaf_ids, collect_leaf_ids_with,
    resolve_ancestor_ids, ForestOptions, Menu, MenuKind, MenuTree, Menus,
};
