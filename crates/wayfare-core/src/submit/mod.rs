//! Submission Pipeline: validate a draft, write it, report one outcome.
//!
//! Per submission the pipeline moves through
//!
//! ```text
//! Idle ──▶ Validating ──invalid──▶ Idle (errors shown)
//!               │
//!               ▼
//!          Submitting ──error──▶ Idle (message shown, draft kept)
//!               │
//!               ▼
//!          Redirecting
//! ```
//!
//! A submit that arrives while another is validating or submitting is turned
//! away with [`SubmitOutcome::Busy`]. Failed submissions are never retried;
//! the caller resubmits after correcting the draft, which is never modified.

pub mod pipeline;
pub mod saga;

pub use pipeline::{RomanticSubmission, SubmissionPipeline, SubmissionState, Submittable, SubmitOutcome};
pub use saga::{SagaHandle, SagaStatus};
