//! Core library for the Wayfare travel catalog back office.
//!
//! This crate holds everything an administrator needs to manage the
//! marketing site's catalog: destinations, packages, itineraries, their
//! romantic counterparts, and the curated home page.
//!
//! # Architecture
//!
//! - **Models** ([`models`]): the stored documents
//! - **Drafts** ([`draft`]): editable form state with validation on build
//! - **Submission** ([`submit`]): validate, write, notify, redirect
//! - **Resource API** ([`api`]): one trait with a local SQLite
//!   implementation ([`Catalog`]) and an HTTP client
//! - **Listing** ([`listing`]): filtered list views, deletion, edit loading
//! - **Display** ([`display`]): markdown cards for terminal output
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use wayfare_core::{
//!     api::LocalResourceApi, draft::PackageDraft, ports::LogNotifier, CatalogBuilder,
//!     SubmissionPipeline,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = CatalogBuilder::new()
//!     .with_database_path(Some("catalog.db"))
//!     .build()
//!     .await?;
//! let api = Arc::new(LocalResourceApi::new(catalog));
//! let pipeline = SubmissionPipeline::new(api, Arc::new(LogNotifier));
//!
//! let mut draft = PackageDraft::for_destination("bali");
//! draft.title = "Bali Bliss".to_string();
//! draft.price = "42999".to_string();
//! draft.days = "5 Days 7 Nights".to_string();
//!
//! let outcome = pipeline.submit(&draft).await;
//! assert!(outcome.is_success());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod catalog;
pub mod db;
pub mod destinations;
pub mod display;
pub mod draft;
pub mod error;
pub mod listing;
pub mod models;
pub mod params;
pub mod parse;
pub mod ports;
pub mod submit;
pub mod validate;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use api::{HttpResourceApi, LocalResourceApi, ResourceApi};
pub use catalog::{Catalog, CatalogBuilder};
pub use db::Database;
pub use display::{
    Card, CreateResult, DeleteResult, Documents, LocalDateTime, OperationStatus, UpdateResult,
};
pub use error::{CatalogError, Result};
pub use listing::{DeleteOutcome, DetailOutcome, Editable, ListView};
pub use models::{
    Destination, HomeContent, Itinerary, ListFilter, Package, PackageType, ResourceKind,
    RomanticItinerary, RomanticPackage,
};
pub use submit::{SagaStatus, SubmissionPipeline, SubmitOutcome};
pub use validate::ValidationErrors;
