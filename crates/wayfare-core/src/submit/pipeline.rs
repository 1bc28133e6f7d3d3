//! Submission state machine and the write round trip.

use std::sync::{Arc, Mutex, PoisonError};

use log::{debug, warn};
use serde_json::Value;

use super::saga::{start_itinerary_saga, SagaHandle};
use crate::{
    api::ResourceApi,
    draft::{DestinationDraft, HomeContentDraft, ItineraryDraft, PackageDraft, RomanticPackageDraft},
    error::Result,
    models::{Destination, Document, HomeContent, Itinerary, Package, ResourceKind, RomanticPackage},
    ports::Notifier,
    validate::ValidationErrors,
};

/// A draft the pipeline can validate and write.
pub trait Submittable {
    type Output: Document;

    /// Id of the stored document when editing, `None` when creating.
    fn existing_id(&self) -> Option<&str>;

    /// Validates the draft and builds the document to write.
    fn build_document(&self) -> std::result::Result<Self::Output, ValidationErrors>;
}

impl Submittable for PackageDraft {
    type Output = Package;

    fn existing_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn build_document(&self) -> std::result::Result<Package, ValidationErrors> {
        self.build()
    }
}

impl Submittable for RomanticPackageDraft {
    type Output = RomanticPackage;

    fn existing_id(&self) -> Option<&str> {
        self.package.id.as_deref()
    }

    fn build_document(&self) -> std::result::Result<RomanticPackage, ValidationErrors> {
        self.build()
    }
}

impl Submittable for ItineraryDraft {
    type Output = Itinerary;

    fn existing_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn build_document(&self) -> std::result::Result<Itinerary, ValidationErrors> {
        self.build()
    }
}

impl Submittable for DestinationDraft {
    type Output = Destination;

    fn existing_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn build_document(&self) -> std::result::Result<Destination, ValidationErrors> {
        self.build()
    }
}

/// Where a submission currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Validating,
    Submitting,
    Redirecting,
}

/// The single user-visible result of a submission.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Saved; the front end navigates to `location`
    Redirect {
        id: String,
        location: String,
        document: Value,
    },
    /// Rejected before any request was made
    Invalid(ValidationErrors),
    /// The write failed; carries the message shown to the user
    Failed { message: String },
    /// Another submission is still in flight
    Busy,
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Redirect { .. })
    }
}

/// Result of a romantic package submission.
#[derive(Debug)]
pub struct RomanticSubmission {
    pub outcome: SubmitOutcome,
    /// Present when a linked itinerary write was started
    pub saga: Option<SagaHandle>,
}

/// Resets the state to `Idle` unless the submission ended elsewhere.
struct InFlight<'a> {
    state: &'a Mutex<SubmissionState>,
}

impl InFlight<'_> {
    fn set(&self, next: SubmissionState) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = next;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if matches!(*state, SubmissionState::Validating | SubmissionState::Submitting) {
            *state = SubmissionState::Idle;
        }
    }
}

/// Runs drafts through validation and the Resource API.
pub struct SubmissionPipeline {
    api: Arc<dyn ResourceApi>,
    notifier: Arc<dyn Notifier>,
    state: Mutex<SubmissionState>,
}

impl SubmissionPipeline {
    pub fn new(api: Arc<dyn ResourceApi>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            notifier,
            state: Mutex::new(SubmissionState::Idle),
        }
    }

    pub fn state(&self) -> SubmissionState {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Claims the pipeline for one submission, or `None` while another is
    /// validating or submitting.
    fn begin(&self) -> Option<InFlight<'_>> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        match *state {
            SubmissionState::Idle | SubmissionState::Redirecting => {
                *state = SubmissionState::Validating;
                Some(InFlight { state: &self.state })
            }
            SubmissionState::Validating | SubmissionState::Submitting => None,
        }
    }

    /// Validates and writes a draft.
    pub async fn submit<D: Submittable>(&self, draft: &D) -> SubmitOutcome {
        let kind = D::Output::KIND;
        self.run(kind, draft.existing_id(), || {
            let document = draft.build_document()?;
            let destination = document.destination().map(String::from);
            let body = serde_json::to_value(&document).map_err(|e| {
                let mut errors = ValidationErrors::new();
                errors.push("document", e.to_string());
                errors
            })?;
            Ok((body, destination))
        })
        .await
    }

    /// Validates and writes the home content as a whole.
    pub async fn save_home(&self, draft: &HomeContentDraft) -> SubmitOutcome {
        self.run(ResourceKind::HomeContent, None, || {
            let content: HomeContent = draft.build()?;
            serde_json::to_value(&content)
                .map(|body| (body, None))
                .map_err(|e| {
                    let mut errors = ValidationErrors::new();
                    errors.push("document", e.to_string());
                    errors
                })
        })
        .await
    }

    /// Submits a romantic package and, on a successful create with
    /// `create_itinerary` set, starts the linked itinerary write without
    /// waiting for it.
    pub async fn submit_romantic(&self, draft: &RomanticPackageDraft) -> RomanticSubmission {
        let outcome = self.submit(draft).await;

        let saga = match &outcome {
            SubmitOutcome::Redirect { id, .. }
                if draft.create_itinerary && draft.package.id.is_none() =>
            {
                match draft.build() {
                    Ok(package) => {
                        let itinerary = draft.linked_itinerary(&package, id);
                        Some(start_itinerary_saga(self.api.clone(), id.clone(), itinerary))
                    }
                    Err(_) => None,
                }
            }
            _ => None,
        };

        RomanticSubmission { outcome, saga }
    }

    async fn run<F>(&self, kind: ResourceKind, existing_id: Option<&str>, prepare: F) -> SubmitOutcome
    where
        F: FnOnce() -> std::result::Result<(Value, Option<String>), ValidationErrors>,
    {
        let Some(flight) = self.begin() else {
            warn!("Ignoring {} submission while another is in flight", kind.label().to_lowercase());
            return SubmitOutcome::Busy;
        };

        let (body, destination) = match prepare() {
            Ok(prepared) => prepared,
            Err(errors) => {
                debug!("{} draft failed validation on {} fields", kind.label(), errors.len());
                self.notifier.notify(&errors.to_string());
                flight.set(SubmissionState::Idle);
                return SubmitOutcome::Invalid(errors);
            }
        };

        flight.set(SubmissionState::Submitting);

        match self.write(kind, existing_id, body).await {
            Ok(saved) => {
                let id = saved["id"]
                    .as_str()
                    .map(String::from)
                    .or_else(|| existing_id.map(String::from))
                    .unwrap_or_default();
                if id.is_empty() && !kind.is_singleton() {
                    warn!("{} saved but the response carried no id", kind.label());
                }

                let verb = if existing_id.is_some() || kind.is_singleton() {
                    "updated"
                } else {
                    "created"
                };
                self.notifier
                    .notify(&format!("{} {verb} successfully", kind.label()));

                flight.set(SubmissionState::Redirecting);
                SubmitOutcome::Redirect {
                    id,
                    location: kind.list_route(destination.as_deref()),
                    document: saved,
                }
            }
            Err(e) => {
                let message = e.user_message();
                warn!("{} submission failed: {e}", kind.label());
                self.notifier.notify(&message);
                flight.set(SubmissionState::Idle);
                SubmitOutcome::Failed { message }
            }
        }
    }

    async fn write(&self, kind: ResourceKind, existing_id: Option<&str>, body: Value) -> Result<Value> {
        if kind.is_singleton() {
            return self.api.save_home(body).await;
        }
        match existing_id {
            Some(id) => self.api.update(kind, id, body).await,
            None => self.api.create(kind, body).await,
        }
    }
}
