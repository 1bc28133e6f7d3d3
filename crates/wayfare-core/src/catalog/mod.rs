//! Async facade over the document store.
//!
//! [`Catalog`] is the in-process Document Store used by the CLI and by the
//! HTTP server. Every call opens the database on a blocking thread so the
//! async callers never wait on SQLite directly.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  ResourceApi    │    │     Catalog     │    │    Database     │
//! │ (local / http)  │───▶│ (document_ops)  │───▶│   (via db/)     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust
//! use wayfare_core::{CatalogBuilder, models::ResourceKind};
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = CatalogBuilder::new()
//!     .with_database_path(Some("catalog.db"))
//!     .build()
//!     .await?;
//!
//! let created = catalog
//!     .create_document(ResourceKind::Destinations, json!({"name": "Bali", "slug": "bali"}))
//!     .await?;
//! println!("Created destination {}", created["id"]);
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

pub mod builder;
pub mod document_ops;

pub use builder::CatalogBuilder;

/// Handle to the catalog database.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub(crate) db_path: PathBuf,
}

impl Catalog {
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Location of the database file.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }
}
