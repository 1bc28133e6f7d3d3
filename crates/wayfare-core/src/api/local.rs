//! Resource API served in-process by the catalog.

use async_trait::async_trait;
use serde_json::Value;

use super::ResourceApi;
use crate::{catalog::Catalog, error::Result, models::ResourceKind, params::ListResources};

/// Resource API backed directly by a [`Catalog`].
#[derive(Debug, Clone)]
pub struct LocalResourceApi {
    catalog: Catalog,
}

impl LocalResourceApi {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

#[async_trait]
impl ResourceApi for LocalResourceApi {
    async fn list(&self, kind: ResourceKind, params: &ListResources) -> Result<Vec<Value>> {
        self.catalog.list_documents(kind, params).await
    }

    async fn get(&self, kind: ResourceKind, id: &str) -> Result<Value> {
        self.catalog.get_document(kind, id).await
    }

    async fn create(&self, kind: ResourceKind, body: Value) -> Result<Value> {
        self.catalog.create_document(kind, body).await
    }

    async fn update(&self, kind: ResourceKind, id: &str, body: Value) -> Result<Value> {
        self.catalog.update_document(kind, id, body).await
    }

    async fn delete(&self, kind: ResourceKind, id: &str, destination: Option<&str>) -> Result<()> {
        self.catalog.delete_document(kind, id, destination).await
    }

    async fn load_home(&self) -> Result<Value> {
        self.catalog.load_home().await
    }

    async fn save_home(&self, body: Value) -> Result<Value> {
        self.catalog.save_home(body).await
    }
}
