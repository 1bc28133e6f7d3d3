//! SQLite document store.
//!
//! Low-level, blocking access to the catalog collections. Each collection is
//! a set of JSON documents in one shared table; the store assigns the `id`
//! and the `createdAt`/`updatedAt` metadata and injects them on read.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod document_queries;
pub mod home_queries;
pub mod migrations;

pub use document_queries::DocumentFilter;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
