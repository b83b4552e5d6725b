//! Forest building options

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Separator between ancestor ids in `parent_path`.
pub const PATH_DELIMITER: char = '/';

/// What happens to a node whose parent id is not in the working set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrphanPolicy {
    /// Leave the node out of the forest entirely.
    #[default]
    Drop,
    /// Treat the node as an additional root.
    Promote,
}

/// Ordering of roots and sibling groups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChildOrder {
    /// Keep input order.
    #[default]
    Input,
    /// Stable sort by `sequence`, ties keep input order.
    Sequence,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ForestOptions {
    pub orphan_policy: OrphanPolicy,
    pub child_order: ChildOrder,
}

impl ForestOptions {
    pub fn new(orphan_policy: OrphanPolicy, child_order: ChildOrder) -> Self {
        Self {
            orphan_policy,
            child_order,
        }
    }
}

impl FromStr for OrphanPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "drop" => Ok(OrphanPolicy::Drop),
            "promote" => Ok(OrphanPolicy::Promote),
            _ => Err(DomainError::InvalidOption {
                key: "orphan_policy".into(),
                value: s.into(),
            }),
        }
    }
}

impl FromStr for ChildOrder {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "input" => Ok(ChildOrder::Input),
            "sequence" => Ok(ChildOrder::Sequence),
            _ => Err(DomainError::InvalidOption {
                key: "child_order".into(),
                value: s.into(),
            }),
        }
    }
}

impl fmt::Display for OrphanPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrphanPolicy::Drop => write!(f, "drop"),
            OrphanPolicy::Promote => write!(f, "promote"),
        }
    }
}

impl fmt::Display for ChildOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChildOrder::Input => write!(f, "input"),
            ChildOrder::Sequence => write!(f, "sequence"),
        }
    }
}
