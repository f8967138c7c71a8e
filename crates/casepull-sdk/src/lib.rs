//! casepull Rust SDK
//!
//! Client library for reading support cases from the case-management API.
//!
//! # Example
//!
//! ```no_run
//! use casepull_sdk::{ApiSettings, CaseClient, Credential};
//! use casepull_domain::CaseId;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = CaseClient::new(ApiSettings::default(), Credential::bearer("eyJhbGci..."))?;
//!
//! let record = client.fetch(&CaseId::new("04257923")).await?;
//! println!("status: {:?}", record.get_str("status"));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod client;
mod credential;
mod error;
mod mock;
pub mod oauth;

pub use client::{
    ApiSettings, CaseClient, DEFAULT_API_VERSION, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS,
};
pub use credential::{is_placeholder, Credential};
pub use error::SdkError;
pub use mock::MockCaseSource;
