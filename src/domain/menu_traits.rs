/*
Inherent impls are not allowed on slices (E0116), so the collection-level
operations on menus live in extension traits implemented for `[Menu]` and
`[MenuTree]`. `Vec<Menu>` gets them through deref.
 */
use crate::domain::ancestry::resolve_ancestor_ids;
use crate::domain::builder::{build_forest, to_trees};
use crate::domain::entities::{Menu, MenuTree};
use crate::domain::leaves::{collect_leaf_ids, leaf_ids};

pub trait MenuListExt {
    /// Own ids plus every ancestor id named in `parent_path`, deduplicated.
    fn split_and_get_all_record_ids(&self) -> Vec<String>;

    fn to_trees(&self) -> Vec<MenuTree>;

    /// Leaf ids of the forest built from these records.
    fn to_leaf_record_ids(&self) -> Vec<String>;
}

impl MenuListExt for [Menu] {
    fn split_and_get_all_record_ids(&self) -> Vec<String> {
        resolve_ancestor_ids(self)
    }

    fn to_trees(&self) -> Vec<MenuTree> {
        to_trees(self)
    }

    fn to_leaf_record_ids(&self) -> Vec<String> {
        collect_leaf_ids(&to_trees(self))
    }
}

pub trait MenuTreeListExt {
    /// Link flat projections into a forest (default options).
    fn to_tree(&self) -> Vec<MenuTree>;

    /// Leaf ids, treating `self` as an already-built forest.
    fn leaf_record_ids(&self) -> Vec<String>;
}

impl MenuTreeListExt for [MenuTree] {
    fn to_tree(&self) -> Vec<MenuTree> {
        build_forest(self)
    }

    fn leaf_record_ids(&self) -> Vec<String> {
        leaf_ids(self)
    }
}
