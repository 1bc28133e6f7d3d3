//! Linked itinerary creation after a romantic package write.
//!
//! The two writes are independent: the package already exists when the
//! itinerary write starts, and a failed itinerary leaves the package in
//! place. Progress is published on a watch channel so front ends can show
//! it without blocking the package's success message.

use std::{fmt, sync::Arc};

use log::{error, info};
use tokio::sync::watch;

use crate::{
    api::ResourceApi,
    error::CatalogError,
    models::{Document, RomanticItinerary},
};

/// Progress of a package + itinerary creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SagaStatus {
    PackageCreated { package_id: String },
    ItineraryPending,
    ItineraryCreated { itinerary_id: String },
    ItineraryFailed { message: String },
}

impl SagaStatus {
    /// Whether the saga has finished, successfully or not.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SagaStatus::ItineraryCreated { .. } | SagaStatus::ItineraryFailed { .. }
        )
    }
}

impl fmt::Display for SagaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SagaStatus::PackageCreated { package_id } => {
                write!(f, "Package {package_id} created")
            }
            SagaStatus::ItineraryPending => write!(f, "Itinerary pending"),
            SagaStatus::ItineraryCreated { itinerary_id } => {
                write!(f, "Itinerary {itinerary_id} created")
            }
            SagaStatus::ItineraryFailed { message } => {
                write!(f, "Itinerary failed: {message}")
            }
        }
    }
}

/// Observer for a running itinerary write.
#[derive(Debug, Clone)]
pub struct SagaHandle {
    package_id: String,
    status: watch::Receiver<SagaStatus>,
}

impl SagaHandle {
    pub fn package_id(&self) -> &str {
        &self.package_id
    }

    /// Current status without waiting.
    pub fn status(&self) -> SagaStatus {
        self.status.borrow().clone()
    }

    /// Waits until the itinerary write has finished.
    pub async fn finished(mut self) -> SagaStatus {
        let finished = self
            .status
            .wait_for(SagaStatus::is_terminal)
            .await
            .map(|status| (*status).clone())
            .ok();
        finished.unwrap_or_else(|| self.status.borrow().clone())
    }
}

/// Starts the itinerary write on a background task.
pub(crate) fn start_itinerary_saga(
    api: Arc<dyn ResourceApi>,
    package_id: String,
    itinerary: RomanticItinerary,
) -> SagaHandle {
    let (tx, rx) = watch::channel(SagaStatus::PackageCreated {
        package_id: package_id.clone(),
    });

    let task_package_id = package_id.clone();
    tokio::spawn(async move {
        tx.send_replace(SagaStatus::ItineraryPending);

        let result = match serde_json::to_value(&itinerary) {
            Ok(body) => api.create(RomanticItinerary::KIND, body).await,
            Err(e) => Err(CatalogError::from(e)),
        };

        let status = match result {
            Ok(saved) => {
                let itinerary_id = saved["id"].as_str().unwrap_or_default().to_string();
                info!("Created itinerary {itinerary_id} for romantic package {task_package_id}");
                SagaStatus::ItineraryCreated { itinerary_id }
            }
            Err(e) => {
                error!(
                    "Romantic package {task_package_id} was created but its itinerary was not: {e}"
                );
                SagaStatus::ItineraryFailed {
                    message: e.user_message(),
                }
            }
        };

        tx.send_replace(status);
    });

    SagaHandle {
        package_id,
        status: rx,
    }
}
