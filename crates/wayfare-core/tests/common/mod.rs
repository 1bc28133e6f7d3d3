use std::sync::{Arc, Mutex};

use wayfare_core::{ports::Notifier, Catalog, CatalogBuilder};
use tempfile::TempDir;

/// Helper function to create a catalog in a temporary directory
pub async fn create_test_catalog() -> (TempDir, Catalog) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let catalog = CatalogBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create catalog");
    (temp_dir, catalog)
}

/// Notifier keeping every message it was given.
#[derive(Default)]
pub struct Messages(Mutex<Vec<String>>);

impl Messages {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn all(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

impl Notifier for Messages {
    fn notify(&self, message: &str) {
        self.0.lock().unwrap().push(message.to_string());
    }
}
