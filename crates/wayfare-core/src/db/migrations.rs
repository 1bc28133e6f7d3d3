//! Database schema initialization and migrations.

use log::debug;

use crate::error::{DatabaseResultExt, Result};

/// Version stamped into `PRAGMA user_version` once migrations have run.
const SCHEMA_VERSION: i64 = 1;

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()
    }

    /// Apply migrations for databases created by older versions.
    fn apply_migrations(&self) -> Result<()> {
        let version: i64 = self
            .connection
            .query_row("PRAGMA user_version", [], |row| row.get(0))
            .db_context("Failed to read schema version")?;

        if version >= SCHEMA_VERSION {
            return Ok(());
        }

        // Rows without an app-level id get their sequence number
        let backfilled = self
            .connection
            .execute(
                "UPDATE documents SET doc_id = CAST(seq AS TEXT) WHERE doc_id IS NULL",
                [],
            )
            .db_context("Failed to backfill document ids")?;
        if backfilled > 0 {
            debug!("Backfilled {backfilled} document ids");
        }

        self.connection
            .execute_batch(&format!("PRAGMA user_version = {SCHEMA_VERSION}"))
            .db_context("Failed to record schema version")?;

        Ok(())
    }
}
