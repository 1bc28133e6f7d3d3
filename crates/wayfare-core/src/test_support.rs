//! In-memory fakes for the Resource API and the user-interaction ports.

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU32, Ordering},
        Mutex,
    },
};

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::{
    api::{decode, ResourceApi},
    error::{CatalogError, Result},
    models::{Document, ResourceKind},
    params::ListResources,
    ports::{Confirm, Notifier},
};

/// Resource API keeping documents in memory and recording every call as
/// `"<METHOD> <path>"`.
#[derive(Default)]
pub(crate) struct FakeApi {
    documents: Mutex<HashMap<ResourceKind, Vec<Value>>>,
    home: Mutex<Option<Value>>,
    calls: Mutex<Vec<String>>,
    failing: Mutex<HashMap<ResourceKind, Option<String>>>,
    next_id: AtomicU32,
}

impl FakeApi {
    /// Makes every call on `kind` fail with the given server message.
    pub(crate) fn fail(&self, kind: ResourceKind, message: Option<&str>) {
        self.failing
            .lock()
            .unwrap()
            .insert(kind, message.map(String::from));
    }

    pub(crate) fn seed(&self, kind: ResourceKind, mut document: Value) -> String {
        let id = (self.next_id.fetch_add(1, Ordering::SeqCst) + 1).to_string();
        document["id"] = json!(id);
        self.documents
            .lock()
            .unwrap()
            .entry(kind)
            .or_default()
            .push(document);
        id
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn count(&self, kind: ResourceKind) -> usize {
        self.documents
            .lock()
            .unwrap()
            .get(&kind)
            .map_or(0, Vec::len)
    }

    pub(crate) fn stored<T: Document>(&self, kind: ResourceKind, id: &str) -> T {
        let documents = self.documents.lock().unwrap();
        let document = documents
            .get(&kind)
            .and_then(|docs| docs.iter().find(|doc| doc["id"] == id))
            .cloned()
            .expect("document stored");
        decode(document).expect("document decodes")
    }

    fn record(&self, kind: ResourceKind, call: String) -> Result<()> {
        self.calls.lock().unwrap().push(call);
        match self.failing.lock().unwrap().get(&kind) {
            Some(message) => Err(CatalogError::transport(Some(500), message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ResourceApi for FakeApi {
    async fn list(&self, kind: ResourceKind, params: &ListResources) -> Result<Vec<Value>> {
        self.record(kind, format!("GET {kind}"))?;
        let documents = self.documents.lock().unwrap();
        Ok(documents
            .get(&kind)
            .map(|docs| {
                docs.iter()
                    .filter(|doc| {
                        params
                            .destination
                            .as_deref()
                            .map_or(true, |d| doc["destination"] == d)
                    })
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn get(&self, kind: ResourceKind, id: &str) -> Result<Value> {
        self.record(kind, format!("GET {kind}/{id}"))?;
        self.documents
            .lock()
            .unwrap()
            .get(&kind)
            .and_then(|docs| docs.iter().find(|doc| doc["id"] == id))
            .cloned()
            .ok_or_else(|| CatalogError::transport(Some(404), Some(format!("{} not found", kind.label()))))
    }

    async fn create(&self, kind: ResourceKind, body: Value) -> Result<Value> {
        self.record(kind, format!("POST {kind}"))?;
        let id = self.seed(kind, body);
        self.get_unrecorded(kind, &id)
    }

    async fn update(&self, kind: ResourceKind, id: &str, mut body: Value) -> Result<Value> {
        self.record(kind, format!("PUT {kind}/{id}"))?;
        body["id"] = json!(id);
        let mut documents = self.documents.lock().unwrap();
        let slot = documents
            .get_mut(&kind)
            .and_then(|docs| docs.iter_mut().find(|doc| doc["id"] == id))
            .ok_or_else(|| CatalogError::transport(Some(404), None))?;
        *slot = body.clone();
        Ok(body)
    }

    async fn delete(&self, kind: ResourceKind, id: &str, _destination: Option<&str>) -> Result<()> {
        self.record(kind, format!("DELETE {kind}/{id}"))?;
        let mut documents = self.documents.lock().unwrap();
        let docs = documents.entry(kind).or_default();
        let before = docs.len();
        docs.retain(|doc| doc["id"] != id);
        if docs.len() == before {
            return Err(CatalogError::transport(Some(404), None));
        }
        Ok(())
    }

    async fn load_home(&self) -> Result<Value> {
        self.record(ResourceKind::HomeContent, "GET home-content".into())?;
        Ok(self
            .home
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| json!({"id": "home", "destinations": {}})))
    }

    async fn save_home(&self, mut body: Value) -> Result<Value> {
        self.record(ResourceKind::HomeContent, "PUT home-content".into())?;
        body["id"] = json!("home");
        *self.home.lock().unwrap() = Some(body.clone());
        Ok(body)
    }
}

impl FakeApi {
    fn get_unrecorded(&self, kind: ResourceKind, id: &str) -> Result<Value> {
        self.documents
            .lock()
            .unwrap()
            .get(&kind)
            .and_then(|docs| docs.iter().find(|doc| doc["id"] == id))
            .cloned()
            .ok_or_else(|| CatalogError::not_found(kind, id))
    }
}

/// Notifier remembering every message.
#[derive(Default)]
pub(crate) struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub(crate) fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

/// Confirmation port with a fixed answer that counts how often it was asked.
pub(crate) struct FixedConfirm {
    answer: bool,
    asked: Mutex<Vec<String>>,
}

impl FixedConfirm {
    pub(crate) fn new(answer: bool) -> Self {
        Self {
            answer,
            asked: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn asked(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }
}

impl Confirm for FixedConfirm {
    fn confirm(&self, message: &str) -> bool {
        self.asked.lock().unwrap().push(message.to_string());
        self.answer
    }
}
