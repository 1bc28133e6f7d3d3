//! Display formatting for catalog documents and operation results.
//!
//! Domain models implement [`std::fmt::Display`] for their detail view and
//! [`Card`] for their list entry. Wrapper types add the context a particular
//! output needs: a list, a creation summary, a status line.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers & Cards│    │   Formatted     │
//! │ (Package, ...)  │───▶│  & Result Types │───▶│    Output       │
//! │                 │    │                 │    │ (Terminal/HTTP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! All output is markdown so the CLI can render it with termimad.
//!
//! ## Module Organization
//!
//! - [`collections`]: [`Documents`] list wrapper
//! - [`results`]: [`CreateResult`], [`UpdateResult`], [`DeleteResult`]
//! - [`status`]: [`OperationStatus`] lines, including itinerary follow-ups
//! - [`datetime`]: timestamp formatting
//! - [`models`]: cards for the domain models
//!
//! ## Usage
//!
//! ```rust
//! use wayfare_core::display::{OperationStatus, StatusLevel};
//!
//! let status = OperationStatus::success("Package created successfully");
//! assert_eq!(status.level, StatusLevel::Success);
//! println!("{status}");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::Documents;
pub use datetime::LocalDateTime;
pub use models::{stars, Card};
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::{OperationStatus, StatusLevel};
