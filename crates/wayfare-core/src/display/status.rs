//! Status lines for operation feedback.

use std::fmt;

use crate::submit::SagaStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Success,
    /// The main operation worked but a follow-up did not
    Warning,
    Error,
}

impl StatusLevel {
    fn prefix(self) -> &'static str {
        match self {
            StatusLevel::Success => "Success:",
            StatusLevel::Warning => "Warning:",
            StatusLevel::Error => "Error:",
        }
    }
}

/// A one-line outcome message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationStatus {
    pub message: String,
    pub level: StatusLevel,
}

impl OperationStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: StatusLevel::Success,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: StatusLevel::Warning,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: StatusLevel::Error,
        }
    }

    pub fn is_success(&self) -> bool {
        self.level == StatusLevel::Success
    }
}

impl From<&SagaStatus> for OperationStatus {
    fn from(status: &SagaStatus) -> Self {
        match status {
            SagaStatus::ItineraryCreated { itinerary_id } => {
                Self::success(format!("Linked itinerary created with ID: {itinerary_id}"))
            }
            SagaStatus::ItineraryFailed { message } => Self::warning(format!(
                "The package was saved but its itinerary was not: {message}"
            )),
            SagaStatus::PackageCreated { .. } | SagaStatus::ItineraryPending => {
                Self::warning("Linked itinerary is still being created")
            }
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.level.prefix(), self.message)
    }
}
