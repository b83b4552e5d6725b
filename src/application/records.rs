//! Record file decoding
//!
//! `.json` files hold a top-level array of menus, `.toml` files a
//! `[[menus]]` array of tables.

use std::path::Path;

use serde::Deserialize;

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::Menus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    Json,
    Toml,
}

#[derive(Debug, Deserialize)]
struct TomlRecords {
    #[serde(default)]
    menus: Menus,
}

impl RecordFormat {
    /// Pick the format from the file extension.
    pub fn from_path(path: &Path) -> ApplicationResult<Self> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => Ok(RecordFormat::Json),
            Some("toml") => Ok(RecordFormat::Toml),
            _ => Err(ApplicationError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    /// Decode `content`; `path` is only used for error messages.
    pub fn decode(&self, content: &str, path: &Path) -> ApplicationResult<Menus> {
        let invalid = |message: String| ApplicationError::InvalidRecords {
            path: path.to_path_buf(),
            message,
        };
        match self {
            RecordFormat::Json => serde_json::from_str(content).map_err(|e| invalid(e.to_string())),
            RecordFormat::Toml => toml::from_str::<TomlRecords>(content)
                .map(|records| records.menus)
                .map_err(|e| invalid(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MenuKind;

    #[test]
    fn given_json_array_when_decoding_then_reads_wire_fields() {
        let content = r#"[
            {"record_id": "1", "name": "System", "type": 1},
            {"record_id": "2", "type": 3, "parent_id": "1", "parent_path": "1",
             "created_at": "2024-01-02T03:04:05Z"}
        ]"#;
        let menus = RecordFormat::Json
            .decode(content, Path::new("menus.json"))
            .unwrap();

        assert_eq!(menus.len(), 2);
        assert_eq!(menus[1].kind, MenuKind::Resource);
        assert_eq!(menus[1].parent_id, "1");
        assert!(menus[1].created_at.is_some());
    }

    #[test]
    fn given_toml_tables_when_decoding_then_reads_menus() {
        let content = r#"
[[menus]]
record_id = "1"
type = 1

[[menus]]
record_id = "2"
type = 2
parent_id = "1"
parent_path = "1"
"#;
        let menus = RecordFormat::Toml
            .decode(content, Path::new("menus.toml"))
            .unwrap();

        assert_eq!(menus.len(), 2);
        assert_eq!(menus[1].kind, MenuKind::Function);
    }

    #[test]
    fn given_bad_kind_when_decoding_then_invalid_records() {
        let result = RecordFormat::Json.decode(r#"[{"record_id": "1", "type": 7}]"#, Path::new("m.json"));
        assert!(matches!(result, Err(ApplicationError::InvalidRecords { .. })));
    }

    #[test]
    fn given_unknown_extension_when_detecting_then_unsupported() {
        assert_eq!(RecordFormat::from_path(Path::new("a.JSON")).unwrap(), RecordFormat::Json);
        assert!(matches!(
            RecordFormat::from_path(Path::new("a.yaml")),
            Err(ApplicationError::UnsupportedFormat(_))
        ));
    }
}
