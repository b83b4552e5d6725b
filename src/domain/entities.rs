//! Domain entities: the flat menu record and its tree projection

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Menu type as stored by the persistence layer (1, 2 or 3 on the wire).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum MenuKind {
    #[default]
    Module,
    Function,
    Resource,
}

impl TryFrom<u8> for MenuKind {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(MenuKind::Module),
            2 => Ok(MenuKind::Function),
            3 => Ok(MenuKind::Resource),
            other => Err(DomainError::InvalidKind(other)),
        }
    }
}

impl From<MenuKind> for u8 {
    fn from(kind: MenuKind) -> Self {
        match kind {
            MenuKind::Module => 1,
            MenuKind::Function => 2,
            MenuKind::Resource => 3,
        }
    }
}

impl fmt::Display for MenuKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MenuKind::Module => "module",
            MenuKind::Function => "function",
            MenuKind::Resource => "resource",
        };
        write!(f, "{}", label)
    }
}

/// Flat menu record as returned by a query.
///
/// `parent_id` is empty for roots. `parent_path` lists the ancestor ids
/// from the root down to the direct parent, separated by `/`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Menu {
    pub record_id: String,
    pub code: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: MenuKind,
    pub sequence: i64,
    pub icon: String,
    pub path: String,
    pub method: String,
    pub parent_id: String,
    pub parent_path: String,
    pub creator: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Menu {
    /// Create a root record with the given id.
    pub fn new(record_id: impl Into<String>) -> Self {
        Self {
            record_id: record_id.into(),
            ..Self::default()
        }
    }

    /// Attach parent id and ancestor path.
    pub fn with_parent(mut self, parent_id: impl Into<String>, parent_path: impl Into<String>) -> Self {
        self.parent_id = parent_id.into();
        self.parent_path = parent_path.into();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_sequence(mut self, sequence: i64) -> Self {
        self.sequence = sequence;
        self
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_empty()
    }
}

/// Ordered collection of flat records.
pub type Menus = Vec<Menu>;

/// Tree projection of a [`Menu`].
///
/// An empty `children` list marks a leaf; it is left out when serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuTree {
    pub record_id: String,
    pub code: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: MenuKind,
    pub sequence: i64,
    pub icon: String,
    pub path: String,
    pub parent_id: String,
    pub parent_path: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuTree>,
}

impl MenuTree {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

impl From<&Menu> for MenuTree {
    fn from(menu: &Menu) -> Self {
        Self {
            record_id: menu.record_id.clone(),
            code: menu.code.clone(),
            name: menu.name.clone(),
            kind: menu.kind,
            sequence: menu.sequence,
            icon: menu.icon.clone(),
            path: menu.path.clone(),
            parent_id: menu.parent_id.clone(),
            parent_path: menu.parent_path.clone(),
            children: Vec::new(),
        }
    }
}

impl fmt::Display for MenuTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "{}", self.record_id)
        } else {
            write!(f, "{} ({})", self.name, self.record_id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_wire_kind_when_decoding_then_maps_to_variant() {
        assert_eq!(MenuKind::try_from(1).unwrap(), MenuKind::Module);
        assert_eq!(MenuKind::try_from(3).unwrap(), MenuKind::Resource);
        assert_eq!(MenuKind::try_from(4), Err(DomainError::InvalidKind(4)));
        assert_eq!(u8::from(MenuKind::Function), 2);
    }

    #[test]
    fn given_menu_when_projecting_then_copies_hierarchy_fields() {
        let menu = Menu::new("4").with_parent("2", "1/2").with_name("Users");
        let tree = MenuTree::from(&menu);

        assert_eq!(tree.record_id, "4");
        assert_eq!(tree.parent_id, "2");
        assert_eq!(tree.parent_path, "1/2");
        assert!(tree.is_leaf());
        assert_eq!(tree.to_string(), "Users (4)");
    }

    #[test]
    fn given_builder_calls_when_constructing_then_root_and_sequence_set() {
        let root = Menu::new("1").with_sequence(7);
        let child = Menu::new("2").with_parent("1", "1");

        assert!(root.is_root());
        assert!(!child.is_root());
        assert_eq!(MenuTree::from(&root).sequence, 7);
    }
}
