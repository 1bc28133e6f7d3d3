use std::sync::Arc;

use serde_json::json;
use tempfile::TempDir;
use tokio::net::TcpListener;
use wayfare_core::{
    api::{fetch_one, ResourceApi},
    draft::PackageDraft,
    listing::{load_for_edit, DeleteOutcome, DetailOutcome, ListView},
    models::{ListFilter, Package},
    params::{ListResources, PackageFields},
    ports::{Confirm, LogNotifier},
    CatalogBuilder, HttpResourceApi, ResourceKind, SubmissionPipeline, SubmitOutcome,
};

use super::router;

struct Yes;

impl Confirm for Yes {
    fn confirm(&self, _message: &str) -> bool {
        true
    }
}

/// Serves a fresh catalog on a loopback port and returns a client for it.
async fn spawn_server() -> (TempDir, Arc<dyn ResourceApi>) {
    let temp_dir = TempDir::new().expect("temp dir");
    let catalog = CatalogBuilder::new()
        .with_database_path(Some(temp_dir.path().join("server.db")))
        .build()
        .await
        .expect("catalog");

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router(catalog)).await.expect("serve");
    });

    let api = HttpResourceApi::new(format!("http://{addr}")).expect("client");
    (temp_dir, Arc::new(api))
}

fn bali_package() -> PackageDraft {
    PackageDraft::for_destination("bali").apply(PackageFields {
        title: Some("Bali Bliss".to_string()),
        price: Some("45000".to_string()),
        days: Some("5 Days 4 Nights".to_string()),
        ..Default::default()
    })
}

#[tokio::test]
async fn create_unwraps_the_data_envelope() {
    let (_dir, api) = spawn_server().await;
    let pipeline = SubmissionPipeline::new(api.clone(), Arc::new(LogNotifier));

    let outcome = pipeline.submit(&bali_package()).await;
    let SubmitOutcome::Redirect { id, location, document } = outcome else {
        panic!("expected redirect, got {outcome:?}");
    };
    assert_eq!(id, "1");
    assert_eq!(location, "/admin/packages?destination=bali");
    assert_eq!(document["title"], "Bali Bliss");
    assert!(document.get("data").is_none());

    let stored: Package = fetch_one(api.as_ref(), &id).await.expect("stored package");
    assert_eq!(stored.numeric_price, 45000.0);
}

#[tokio::test]
async fn missing_document_redirects_to_list() {
    let (_dir, api) = spawn_server().await;

    let outcome = load_for_edit::<Package>(api.as_ref(), "99", Some("bali"))
        .await
        .expect("404 is not an error");
    assert_eq!(
        outcome,
        DetailOutcome::RedirectToList("/admin/packages?destination=bali".to_string())
    );
}

#[tokio::test]
async fn server_error_text_reaches_the_user() {
    let (_dir, api) = spawn_server().await;
    let pipeline = SubmissionPipeline::new(api.clone(), Arc::new(LogNotifier));

    let mut stale = bali_package();
    stale.id = Some("99".to_string());
    assert_eq!(
        pipeline.submit(&stale).await,
        SubmitOutcome::Failed {
            message: "Package with ID 99 not found".to_string()
        }
    );

    let err = api
        .create(ResourceKind::Packages, json!(["not", "an", "object"]))
        .await
        .expect_err("array body is rejected");
    assert_eq!(
        err.user_message(),
        "Invalid input for field 'body': Document must be a JSON object"
    );
}

#[tokio::test]
async fn list_view_works_over_http() {
    let (_dir, api) = spawn_server().await;
    let pipeline = SubmissionPipeline::new(api.clone(), Arc::new(LogNotifier));
    assert!(pipeline.submit(&bali_package()).await.is_success());

    let params = ListResources {
        destination: Some("Bali".to_string()),
        ..Default::default()
    };
    let mut view: ListView<Package> = ListView::new(api.clone(), ListFilter::from(&params));
    view.load().await.expect("load");
    assert_eq!(view.visible().len(), 1);

    let id = view.items()[0].id.clone().expect("id");
    assert_eq!(view.delete(&id, &Yes).await.expect("delete"), DeleteOutcome::Deleted);

    view.load().await.expect("reload");
    assert!(view.items().is_empty());
}
