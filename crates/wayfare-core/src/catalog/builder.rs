//! Builder for creating and configuring Catalog instances.

use std::path::{Path, PathBuf};

use log::debug;
use tokio::task;

use super::Catalog;
use crate::{
    db::Database,
    error::{CatalogError, Result},
};

/// Builder for creating and configuring Catalog instances.
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    database_path: Option<PathBuf>,
}

impl CatalogBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/wayfare/wayfare.db` or `~/.local/share/wayfare/wayfare.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the catalog, creating the database and its schema if needed.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::FileSystem` if the database directory cannot be created
    /// Returns `CatalogError::Database` if database initialization fails
    pub async fn build(self) -> Result<Catalog> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| CatalogError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        debug!("Opening catalog at {}", db_path.display());

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || Database::new(&db_path_clone).map(|_| ()))
            .await
            .map_err(CatalogError::join_error)??;

        Ok(Catalog::new(db_path))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("wayfare")
            .place_data_file("wayfare.db")
            .map_err(|e| CatalogError::XdgDirectory(e.to_string()))
    }
}
