//! casepull Domain Layer
//!
//! Core vocabulary shared by every other crate in the workspace: case
//! identifiers, raw case records, tracker references, output rows, the fetch
//! error taxonomy and the `CaseSource` seam between the batch logic and the
//! network.
//!
//! ## Key Concepts
//!
//! - **Case**: a support ticket at the remote service, named by an opaque id
//! - **Case Record**: the raw JSON object the API returns for one case
//! - **Tracker Reference**: a link from a case to an external issue tracker
//! - **Output Row**: the display values extracted from one case, in the
//!   column order the operator asked for
//!
//! ## Architecture
//!
//! - No I/O in this crate
//! - Infrastructure (HTTP, files, terminal) lives in other crates
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod case;
pub mod error;
pub mod row;
pub mod tracker;
pub mod traits;

// Re-exports for convenience
pub use case::{CaseId, CaseRecord};
pub use error::FetchError;
pub use row::OutputRow;
pub use tracker::{TrackerReference, JIRA_SYSTEM};
pub use traits::CaseSource;
