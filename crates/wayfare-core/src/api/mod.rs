//! Resource API boundary.
//!
//! [`ResourceApi`] is the one seam between the admin workflow and the
//! document store. Implementations return payloads already unwrapped from
//! their envelope and with `id` normalized, so callers never see the wire
//! shape.
//!
//! - [`HttpResourceApi`] talks to a running `/api/admin` server
//! - [`LocalResourceApi`] works in-process on a [`Catalog`](crate::Catalog)

use async_trait::async_trait;
use log::warn;
use serde_json::Value;

use crate::{
    error::Result,
    models::{Document, HomeContent, ResourceKind},
    params::ListResources,
};

pub mod envelope;
pub mod http;
pub mod local;

pub use envelope::{error_message, extract_payload, normalize_id};
pub use http::HttpResourceApi;
pub use local::LocalResourceApi;

/// CRUD access to the catalog collections.
#[async_trait]
pub trait ResourceApi: Send + Sync {
    /// Documents of a collection matching the list parameters.
    async fn list(&self, kind: ResourceKind, params: &ListResources) -> Result<Vec<Value>>;

    /// One document; a missing document is a not-found error.
    async fn get(&self, kind: ResourceKind, id: &str) -> Result<Value>;

    /// Creates a document and returns it with its generated id.
    async fn create(&self, kind: ResourceKind, body: Value) -> Result<Value>;

    /// Replaces the mutable fields of a document.
    async fn update(&self, kind: ResourceKind, id: &str, body: Value) -> Result<Value>;

    /// Deletes a document, optionally scoped to a destination.
    async fn delete(&self, kind: ResourceKind, id: &str, destination: Option<&str>) -> Result<()>;

    /// The home content singleton.
    async fn load_home(&self) -> Result<Value>;

    /// Saves the home content singleton as a whole.
    async fn save_home(&self, body: Value) -> Result<Value>;
}

/// Decodes a payload into a typed document.
pub fn decode<T: Document>(value: Value) -> Result<T> {
    Ok(serde_json::from_value(normalize_id(value))?)
}

/// Lists and decodes a collection.
///
/// Stored rows that no longer match the document shape are skipped with a
/// warning; one bad row never hides the rest of the collection.
pub async fn fetch_all<T: Document>(api: &dyn ResourceApi, params: &ListResources) -> Result<Vec<T>> {
    let documents = api
        .list(T::KIND, params)
        .await?
        .into_iter()
        .filter_map(|value| {
            let value = normalize_id(value);
            let id = value["id"].as_str().unwrap_or("?").to_string();
            match serde_json::from_value(value) {
                Ok(document) => Some(document),
                Err(e) => {
                    warn!("Skipping {} {id}: {e}", T::KIND.label().to_lowercase());
                    None
                }
            }
        })
        .collect();
    Ok(documents)
}

/// Fetches and decodes one document.
pub async fn fetch_one<T: Document>(api: &dyn ResourceApi, id: &str) -> Result<T> {
    decode(api.get(T::KIND, id).await?)
}

/// Fetches and decodes the home content.
pub async fn fetch_home(api: &dyn ResourceApi) -> Result<HomeContent> {
    decode(api.load_home().await?)
}
