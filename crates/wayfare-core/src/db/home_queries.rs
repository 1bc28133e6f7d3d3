//! Home content singleton queries.

use jiff::Timestamp;
use rusqlite::params;
use serde_json::{json, Value};

use super::document_queries::prepare_body;
use crate::{
    error::{DatabaseResultExt, Result},
    models::{ResourceKind, HOME_CONTENT_ID},
};

const UPSERT_HOME_SQL: &str = "INSERT INTO documents (collection, doc_id, body, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?4) \
     ON CONFLICT (collection, doc_id) DO UPDATE SET body = excluded.body, updated_at = excluded.updated_at";

impl super::Database {
    /// Loads the home content; an empty document when none was saved yet.
    pub fn load_home(&self) -> Result<Value> {
        let stored = self.get_document(ResourceKind::HomeContent, HOME_CONTENT_ID)?;
        Ok(stored.unwrap_or_else(|| json!({ "id": HOME_CONTENT_ID, "destinations": {} })))
    }

    /// Replaces the home content as a whole.
    pub fn save_home(&mut self, body: &Value) -> Result<Value> {
        let (text, _) = prepare_body(ResourceKind::HomeContent, body)?;
        let now = Timestamp::now().to_string();

        self.connection
            .execute(
                UPSERT_HOME_SQL,
                params![ResourceKind::HomeContent.as_str(), HOME_CONTENT_ID, text, &now],
            )
            .db_context("Failed to save home content")?;

        self.load_home()
    }
}
