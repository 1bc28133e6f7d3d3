//! Document CRUD queries shared by every collection.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension, Row};
use serde_json::{Map, Value};

use crate::{
    error::{CatalogError, DatabaseResultExt, Result},
    models::{PackageType, ResourceKind},
    params::ListResources,
};

const INSERT_DOCUMENT_SQL: &str = "INSERT INTO documents (collection, destination, body, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5)";
const ASSIGN_DOCUMENT_ID_SQL: &str = "UPDATE documents SET doc_id = CAST(seq AS TEXT) WHERE seq = ?1";
const SELECT_DOCUMENT_SQL: &str = "SELECT doc_id, body, created_at, updated_at FROM documents WHERE collection = ?1 AND doc_id = ?2";
const LIST_DOCUMENTS_SQL: &str = "SELECT doc_id, body, created_at, updated_at FROM documents \
     WHERE collection = ?1 \
     AND (?2 IS NULL OR destination = ?2) \
     AND (?3 IS NULL OR json_extract(body, '$.type') = ?3) \
     AND (?4 IS NULL OR json_extract(body, '$.hotelRating') = ?4) \
     ORDER BY seq DESC";
const UPDATE_DOCUMENT_SQL: &str = "UPDATE documents SET destination = ?1, body = ?2, updated_at = ?3 WHERE collection = ?4 AND doc_id = ?5";
const DELETE_DOCUMENT_SQL: &str = "DELETE FROM documents WHERE collection = ?1 AND doc_id = ?2 AND (?3 IS NULL OR destination = ?3)";

/// Keys owned by the store; stripped from incoming bodies.
const METADATA_KEYS: [&str; 4] = ["id", "_id", "createdAt", "updatedAt"];

/// Criteria pushed down into the list query. All set criteria must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentFilter {
    pub destination: Option<String>,
    /// Canonical package type name
    pub package_type: Option<String>,
    pub hotel_rating: Option<u8>,
}

impl From<&ListResources> for DocumentFilter {
    fn from(params: &ListResources) -> Self {
        Self {
            destination: params
                .destination
                .as_deref()
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_lowercase),
            package_type: params
                .package_type
                .as_deref()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(|t| PackageType::from(t.to_string()).to_string()),
            hotel_rating: params.hotel_rating,
        }
    }
}

/// A raw row of the documents table.
struct StoredDocument {
    doc_id: String,
    body: String,
    created_at: String,
    updated_at: String,
}

impl StoredDocument {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            doc_id: row.get(0)?,
            body: row.get(1)?,
            created_at: row.get(2)?,
            updated_at: row.get(3)?,
        })
    }

    /// Parses the body and injects the store metadata.
    fn into_value(self) -> Result<Value> {
        let mut body: Value = serde_json::from_str(&self.body)?;
        if let Value::Object(map) = &mut body {
            map.insert("id".into(), Value::String(self.doc_id));
            map.insert("createdAt".into(), Value::String(self.created_at));
            map.insert("updatedAt".into(), Value::String(self.updated_at));
        }
        Ok(body)
    }
}

/// Removes store-owned keys and extracts the destination column value.
pub(super) fn prepare_body(kind: ResourceKind, body: &Value) -> Result<(String, Option<String>)> {
    let Value::Object(map) = body else {
        return Err(CatalogError::invalid_input("body").with_reason("Document must be a JSON object"));
    };

    let cleaned: Map<String, Value> = map
        .iter()
        .filter(|(key, _)| !METADATA_KEYS.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    let destination_key = match kind {
        ResourceKind::Destinations => "slug",
        _ => "destination",
    };
    let destination = cleaned
        .get(destination_key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_lowercase);

    let text = serde_json::to_string(&Value::Object(cleaned))?;
    Ok((text, destination))
}

impl super::Database {
    /// Stores a new document and returns it with its assigned id.
    pub fn insert_document(&mut self, kind: ResourceKind, body: &Value) -> Result<Value> {
        let (text, destination) = prepare_body(kind, body)?;
        let now = Timestamp::now().to_string();

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(
            INSERT_DOCUMENT_SQL,
            params![kind.as_str(), destination, text, &now, &now],
        )
        .db_context("Failed to insert document")?;

        let seq = tx.last_insert_rowid();
        tx.execute(ASSIGN_DOCUMENT_ID_SQL, params![seq])
            .db_context("Failed to assign document id")?;

        tx.commit().db_context("Failed to commit transaction")?;

        self.get_document(kind, &seq.to_string())?
            .ok_or_else(|| CatalogError::not_found(kind, seq.to_string()))
    }

    /// Retrieves a document by id.
    pub fn get_document(&self, kind: ResourceKind, id: &str) -> Result<Option<Value>> {
        let stored = self
            .connection
            .query_row(
                SELECT_DOCUMENT_SQL,
                params![kind.as_str(), id],
                StoredDocument::from_row,
            )
            .optional()
            .db_context("Failed to query document")?;

        stored.map(StoredDocument::into_value).transpose()
    }

    /// Lists a collection, newest first.
    pub fn list_documents(&self, kind: ResourceKind, filter: &DocumentFilter) -> Result<Vec<Value>> {
        let mut stmt = self
            .connection
            .prepare(LIST_DOCUMENTS_SQL)
            .db_context("Failed to prepare query")?;

        let rows = stmt
            .query_map(
                params![
                    kind.as_str(),
                    filter.destination,
                    filter.package_type,
                    filter.hotel_rating.map(i64::from),
                ],
                StoredDocument::from_row,
            )
            .db_context("Failed to query documents")?;

        let mut documents = Vec::new();
        for row in rows {
            let stored = row.db_context("Failed to read document row")?;
            documents.push(stored.into_value()?);
        }
        Ok(documents)
    }

    /// Replaces the body of an existing document.
    ///
    /// Returns `None` when no document has the id.
    pub fn replace_document(&mut self, kind: ResourceKind, id: &str, body: &Value) -> Result<Option<Value>> {
        let (text, destination) = prepare_body(kind, body)?;
        let now = Timestamp::now().to_string();

        let changed = self
            .connection
            .execute(
                UPDATE_DOCUMENT_SQL,
                params![destination, text, &now, kind.as_str(), id],
            )
            .db_context("Failed to update document")?;

        if changed == 0 {
            return Ok(None);
        }
        self.get_document(kind, id)
    }

    /// Deletes a document, optionally only when it belongs to `destination`.
    ///
    /// Returns whether a document was removed.
    pub fn delete_document(&mut self, kind: ResourceKind, id: &str, destination: Option<&str>) -> Result<bool> {
        let destination = destination
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_lowercase);

        let removed = self
            .connection
            .execute(
                DELETE_DOCUMENT_SQL,
                params![kind.as_str(), id, destination],
            )
            .db_context("Failed to delete document")?;

        Ok(removed > 0)
    }
}
