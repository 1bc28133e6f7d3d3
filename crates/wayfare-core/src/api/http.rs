//! Resource API over HTTP.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Method, RequestBuilder};
use serde_json::Value;

use super::{envelope, ResourceApi};
use crate::{
    error::{CatalogError, Result, TransportResultExt},
    models::ResourceKind,
    params::ListResources,
};

/// Request timeout for admin calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for a server exposing `/api/admin/<resource>`.
#[derive(Debug, Clone)]
pub struct HttpResourceApi {
    client: Client,
    base_url: String,
}

impl HttpResourceApi {
    /// Creates a client for the server at `base_url`, e.g.
    /// `http://127.0.0.1:8080`.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(CatalogError::Configuration {
                message: format!("Server URL must start with http:// or https://: {base_url}"),
            });
        }

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .transport_context("Failed to create HTTP client")?;

        Ok(Self { client, base_url })
    }

    fn collection_url(&self, kind: ResourceKind) -> String {
        format!("{}/api/admin/{}", self.base_url, kind.as_str())
    }

    fn document_url(&self, kind: ResourceKind, id: &str) -> String {
        format!("{}/{id}", self.collection_url(kind))
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        debug!("{method} {url}");
        self.client.request(method, url)
    }

    /// Sends a request and unwraps the response envelope.
    async fn send(&self, kind: ResourceKind, request: RequestBuilder) -> Result<Value> {
        let response = request
            .send()
            .await
            .transport_context("Request failed")?;

        let status = response.status();
        let text = response
            .text()
            .await
            .transport_context("Failed to read response")?;

        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or(Value::String(text))
        };

        if !status.is_success() {
            return Err(CatalogError::transport(
                Some(status.as_u16()),
                envelope::error_message(&body),
            ));
        }

        Ok(envelope::normalize_id(envelope::extract_payload(kind, body)))
    }
}

#[async_trait]
impl ResourceApi for HttpResourceApi {
    async fn list(&self, kind: ResourceKind, params: &ListResources) -> Result<Vec<Value>> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(destination) = params.destination.as_deref().filter(|d| !d.is_empty()) {
            query.push(("destination", destination.to_string()));
        }
        if let Some(package_type) = params.package_type.as_deref().filter(|t| !t.is_empty()) {
            query.push(("type", package_type.to_string()));
        }
        if let Some(rating) = params.hotel_rating {
            query.push(("hotelRating", rating.to_string()));
        }

        let request = self
            .request(Method::GET, &self.collection_url(kind))
            .query(&query);

        match self.send(kind, request).await? {
            Value::Array(items) => Ok(items),
            Value::Null => Ok(Vec::new()),
            single => Ok(vec![single]),
        }
    }

    async fn get(&self, kind: ResourceKind, id: &str) -> Result<Value> {
        let request = self.request(Method::GET, &self.document_url(kind, id));
        self.send(kind, request).await
    }

    async fn create(&self, kind: ResourceKind, body: Value) -> Result<Value> {
        let request = self
            .request(Method::POST, &self.collection_url(kind))
            .json(&body);
        self.send(kind, request).await
    }

    async fn update(&self, kind: ResourceKind, id: &str, body: Value) -> Result<Value> {
        let request = self
            .request(Method::PUT, &self.document_url(kind, id))
            .json(&body);
        self.send(kind, request).await
    }

    async fn delete(&self, kind: ResourceKind, id: &str, destination: Option<&str>) -> Result<()> {
        let mut request = self.request(Method::DELETE, &self.document_url(kind, id));
        if let Some(destination) = destination.filter(|d| !d.is_empty()) {
            request = request.query(&[("destination", destination)]);
        }
        self.send(kind, request).await.map(|_| ())
    }

    async fn load_home(&self) -> Result<Value> {
        let kind = ResourceKind::HomeContent;
        let request = self.request(Method::GET, &self.collection_url(kind));
        self.send(kind, request).await
    }

    async fn save_home(&self, body: Value) -> Result<Value> {
        let kind = ResourceKind::HomeContent;
        let request = self
            .request(Method::PUT, &self.collection_url(kind))
            .json(&body);
        self.send(kind, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_follow_the_admin_layout() {
        let api = HttpResourceApi::new("http://localhost:8080/").expect("valid url");
        assert_eq!(
            api.collection_url(ResourceKind::RomanticPackages),
            "http://localhost:8080/api/admin/romantic-packages"
        );
        assert_eq!(
            api.document_url(ResourceKind::Itineraries, "12"),
            "http://localhost:8080/api/admin/itineraries/12"
        );
    }

    #[test]
    fn rejects_non_http_urls() {
        assert!(HttpResourceApi::new("localhost:8080").is_err());
    }
}
