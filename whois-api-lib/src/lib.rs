//! # WhoisXML API Client Library
//!
//! An async client for the [WhoisXML API] hosted WHOIS lookup web service.
//!
//! The library builds HTTP requests against the vendor REST endpoint,
//! parses the JSON response into a typed [`WhoisRecord`], and keeps the
//! service's failure classes apart: transport failures, non-success HTTP
//! statuses, malformed payloads, and structured application errors the
//! vendor embeds in otherwise-successful responses.
//!
//! [WhoisXML API]: https://whois.whoisxmlapi.com/
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use whois_api_lib::{LookupOptions, WhoisApiClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = WhoisApiClient::new("at_your_api_key")?;
//!     let (record, _response) = client
//!         .data("example.com", &LookupOptions::new().domain_availability(1))
//!         .await?;
//!
//!     println!("domain: {}", record.base.domain_name);
//!     println!("registrar: {}", record.base.registrar_name);
//!     Ok(())
//! }
//! ```
//!
//! ## Operations
//!
//! - [`WhoisApiClient::data`] — parsed record; output format pinned to
//!   JSON, vendor errors surfaced as [`WhoisApiError::Api`] even on HTTP 200
//! - [`WhoisApiClient::raw_data`] — untouched response bytes; fails on any
//!   non-2xx status, never inspects the body
//!
//! Nothing is retried or cached; every error propagates to the caller.

// Re-export main public API types and functions
pub use client::{
    ClientBuilder, WhoisApiClient, DEFAULT_HISTORIC_API_URL, DEFAULT_WHOIS_API_URL, ENV_API_KEY,
    ENV_HISTORIC_API_URL, ENV_WHOIS_API_URL,
};
pub use error::WhoisApiError;
pub use options::{LookupOptions, OutputFormat};
pub use response::ApiResponse;
pub use types::{
    Audit, Contact, ErrorMessage, NameServers, RecordBase, RegistryData, WhoisRecord, WhoisTime,
    WhoisTimeError,
};

// Internal modules - these are not part of the public API
mod client;
mod error;
mod options;
mod response;
mod types;

// Type alias for convenience
pub type Result<T> = std::result::Result<T, WhoisApiError>;

// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
