//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent invalid values reaching the menu model.
/// Building forests and resolving ancestors never fail; these only
/// surface when decoding records or parsing options.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid menu type: {0} (expected 1=module, 2=function, 3=resource)")]
    InvalidKind(u8),

    #[error("invalid value for {key}: {value}")]
    InvalidOption { key: String, value: String },
}
