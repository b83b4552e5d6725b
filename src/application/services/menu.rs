//! Menu hierarchy service
//!
//! Loads menu records and derives forest, leaf and ancestor views under
//! the configured options.

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::application::records::RecordFormat;
use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::config::Settings;
use crate::domain::{
    collect_leaf_ids_with, resolve_ancestor_ids_with, to_trees, ForestBuilder, ForestOptions, Menu, MenuQuery,
    MenuTree, Menus,
};
use crate::infrastructure::traits::FileSystem;

/// Output from building a forest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForestOutput {
    /// Roots in forest order
    pub roots: Vec<MenuTree>,
    /// Ids whose parent id did not resolve, in input order
    pub orphans: Vec<String>,
}

/// Service for building menu hierarchy views.
pub struct MenuService {
    fs: Arc<dyn FileSystem>,
    settings: Arc<Settings>,
}

impl MenuService {
    /// Create a new menu service.
    pub fn new(fs: Arc<dyn FileSystem>, settings: Arc<Settings>) -> Self {
        Self { fs, settings }
    }

    /// Load records from a `.json` or `.toml` file.
    pub fn load(&self, path: &Path) -> ApplicationResult<Menus> {
        debug!("load: path={}", path.display());
        if !self.fs.is_file(path) {
            return Err(ApplicationError::OperationFailed {
                context: format!("record file not found: {}", path.display()),
                source: Box::new(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "file does not exist",
                )),
            });
        }
        let format = RecordFormat::from_path(path)?;
        let content = self
            .fs
            .read_to_string(path)
            .with_path_context("read record file", path)?;
        let menus = format.decode(&content, path)?;
        debug!("load: {} records", menus.len());
        Ok(menus)
    }

    /// Load records and keep those matching `query`.
    pub fn load_filtered(&self, path: &Path, query: &MenuQuery) -> ApplicationResult<Menus> {
        let menus = self.load(path)?;
        if query.is_empty() {
            return Ok(menus);
        }
        let selected = query.apply(&menus);
        debug!("load_filtered: {} of {} records selected", selected.len(), menus.len());
        Ok(selected)
    }

    /// Forest under the configured options.
    pub fn forest(&self, menus: &[Menu]) -> ForestOutput {
        self.forest_with(menus, &self.settings.forest_options())
    }

    pub fn forest_with(&self, menus: &[Menu], options: &ForestOptions) -> ForestOutput {
        let arena = ForestBuilder::with_options(*options).build_arena(&to_trees(menus));
        let orphans = arena.orphans().to_vec();
        ForestOutput {
            roots: arena.into_forest(),
            orphans,
        }
    }

    /// Leaf ids of the forest linked under `options`.
    pub fn leaves_with(&self, menus: &[Menu], options: &ForestOptions) -> Vec<String> {
        collect_leaf_ids_with(&to_trees(menus), options)
    }

    pub fn leaves(&self, menus: &[Menu]) -> Vec<String> {
        self.leaves_with(menus, &self.settings.forest_options())
    }

    /// Own ids plus ancestor ids, split on the configured delimiter.
    pub fn ancestors(&self, menus: &[Menu]) -> Vec<String> {
        resolve_ancestor_ids_with(menus, self.settings.path_delimiter)
    }
}
