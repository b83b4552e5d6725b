//! Ancestor id resolution from `parent_path` strings.

use itertools::Itertools;
use tracing::instrument;

use crate::domain::entities::Menu;
use crate::domain::options::PATH_DELIMITER;

/// Split an ancestor path into its non-empty segments, root first.
///
/// `"1//2/"` yields `["1", "2"]`.
pub fn split_parent_path(parent_path: &str, delimiter: char) -> impl Iterator<Item = &str> {
    parent_path.split(delimiter).filter(|segment| !segment.is_empty())
}

/// All ids implied by `records`: each record's own id followed by its
/// ancestors, deduplicated at first occurrence.
pub fn resolve_ancestor_ids(records: &[Menu]) -> Vec<String> {
    resolve_ancestor_ids_with(records, PATH_DELIMITER)
}

#[instrument(level = "debug", skip(records), fields(records = records.len()))]
pub fn resolve_ancestor_ids_with(records: &[Menu], delimiter: char) -> Vec<String> {
    records
        .iter()
        .flat_map(|menu| {
            std::iter::once(menu.record_id.as_str())
                .chain(split_parent_path(&menu.parent_path, delimiter))
        })
        .filter(|id| !id.is_empty())
        .unique()
        .map(str::to_owned)
        .collect()
}
