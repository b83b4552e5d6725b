//! In-memory menu selection.
//!
//! Mirrors the filters a persistence layer offers so a working set can be
//! narrowed before building views over it.

use crate::domain::entities::{Menu, MenuKind};

/// Filter over flat menu records. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuQuery {
    /// Exact record ids
    pub record_ids: Vec<String>,
    /// Substring of `code`
    pub code: Option<String>,
    /// Substring of `name`
    pub name: Option<String>,
    pub kinds: Vec<MenuKind>,
    /// Exact parent id; `Some("")` selects roots
    pub parent_id: Option<String>,
    /// Prefix of `parent_path`
    pub parent_path: Option<String>,
}

impl MenuQuery {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, menu: &Menu) -> bool {
        if !self.record_ids.is_empty() && !self.record_ids.iter().any(|id| *id == menu.record_id) {
            return false;
        }
        if let Some(code) = &self.code {
            if !menu.code.contains(code.as_str()) {
                return false;
            }
        }
        if let Some(name) = &self.name {
            if !menu.name.contains(name.as_str()) {
                return false;
            }
        }
        if !self.kinds.is_empty() && !self.kinds.contains(&menu.kind) {
            return false;
        }
        if let Some(parent_id) = &self.parent_id {
            if menu.parent_id != *parent_id {
                return false;
            }
        }
        if let Some(prefix) = &self.parent_path {
            if !menu.parent_path.starts_with(prefix.as_str()) {
                return false;
            }
        }
        true
    }

    /// Matching records in input order.
    pub fn apply(&self, menus: &[Menu]) -> Vec<Menu> {
        menus.iter().filter(|m| self.matches(m)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menus() -> Vec<Menu> {
        vec![
            Menu::new("1").with_name("System"),
            Menu::new("2").with_parent("1", "1").with_name("Users"),
            Menu {
                kind: MenuKind::Resource,
                ..Menu::new("3").with_parent("2", "1/2").with_name("Create user")
            },
        ]
    }

    fn ids(menus: &[Menu]) -> Vec<&str> {
        menus.iter().map(|m| m.record_id.as_str()).collect()
    }

    #[test]
    fn given_empty_query_when_applying_then_everything_matches() {
        let query = MenuQuery::default();
        assert!(query.is_empty());
        assert_eq!(ids(&query.apply(&menus())), vec!["1", "2", "3"]);
    }

    #[test]
    fn given_root_parent_filter_when_applying_then_only_roots() {
        let query = MenuQuery {
            parent_id: Some(String::new()),
            ..MenuQuery::default()
        };
        assert_eq!(ids(&query.apply(&menus())), vec!["1"]);
    }

    #[test]
    fn given_combined_filters_when_applying_then_all_must_hold() {
        let query = MenuQuery {
            name: Some("user".into()),
            parent_path: Some("1/".into()),
            kinds: vec![MenuKind::Resource],
            ..MenuQuery::default()
        };
        assert_eq!(ids(&query.apply(&menus())), vec!["3"]);
    }

    #[test]
    fn given_id_list_when_applying_then_keeps_input_order() {
        let query = MenuQuery {
            record_ids: vec!["3".into(), "1".into()],
            ..MenuQuery::default()
        };
        assert_eq!(ids(&query.apply(&menus())), vec!["1", "3"]);
    }
}
