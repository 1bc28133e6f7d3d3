//! Document operations for the Catalog.

use log::info;
use serde_json::Value;
use tokio::task;

use super::Catalog;
use crate::{
    db::{Database, DocumentFilter},
    error::{CatalogError, Result},
    models::ResourceKind,
    params::ListResources,
};

fn reject_singleton(kind: ResourceKind) -> Result<()> {
    if kind.is_singleton() {
        return Err(CatalogError::invalid_input("resource")
            .with_reason(format!("{} is saved as a whole, not per document", kind.label())));
    }
    Ok(())
}

impl Catalog {
    /// Runs a blocking database operation on a fresh connection.
    async fn with_database<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();
        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            op(&mut db)
        })
        .await
        .map_err(CatalogError::join_error)?
    }

    /// Lists a collection, newest first, with the filters applied.
    pub async fn list_documents(&self, kind: ResourceKind, params: &ListResources) -> Result<Vec<Value>> {
        if kind.is_singleton() {
            return Ok(vec![self.load_home().await?]);
        }
        let filter = DocumentFilter::from(params);
        self.with_database(move |db| db.list_documents(kind, &filter))
            .await
    }

    /// Retrieves one document.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` when no document has the id.
    pub async fn get_document(&self, kind: ResourceKind, id: &str) -> Result<Value> {
        let id = id.to_string();
        self.with_database(move |db| {
            db.get_document(kind, &id)?
                .ok_or_else(|| CatalogError::not_found(kind, id))
        })
        .await
    }

    /// Stores a new document and returns it with its generated id.
    pub async fn create_document(&self, kind: ResourceKind, body: Value) -> Result<Value> {
        reject_singleton(kind)?;
        let created = self
            .with_database(move |db| db.insert_document(kind, &body))
            .await?;
        info!("Created {} {}", kind.label().to_lowercase(), created["id"]);
        Ok(created)
    }

    /// Replaces the mutable fields of a document.
    pub async fn update_document(&self, kind: ResourceKind, id: &str, body: Value) -> Result<Value> {
        reject_singleton(kind)?;
        let id = id.to_string();
        self.with_database(move |db| {
            db.replace_document(kind, &id, &body)?
                .ok_or_else(|| CatalogError::not_found(kind, id))
        })
        .await
    }

    /// Deletes a document. When `destination` is given the document must
    /// belong to it.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` when nothing matched, including on a
    /// repeated delete.
    pub async fn delete_document(&self, kind: ResourceKind, id: &str, destination: Option<&str>) -> Result<()> {
        reject_singleton(kind)?;
        let id = id.to_string();
        let destination = destination.map(String::from);
        self.with_database(move |db| {
            if db.delete_document(kind, &id, destination.as_deref())? {
                info!("Deleted {} {id}", kind.label().to_lowercase());
                Ok(())
            } else {
                Err(CatalogError::not_found(kind, id))
            }
        })
        .await
    }

    /// Loads the home content singleton.
    pub async fn load_home(&self) -> Result<Value> {
        self.with_database(|db| db.load_home()).await
    }

    /// Saves the home content singleton as a whole.
    pub async fn save_home(&self, body: Value) -> Result<Value> {
        self.with_database(move |db| db.save_home(&body)).await
    }
}
