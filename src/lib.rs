#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::trivially_copy_pass_by_ref)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::doc_markdown)]
//! # schemaregistry - client for Confluent-compatible schema registries
//!
//! Lists subjects and versions, looks schemas up, and checks or registers
//! schema documents against a registry that speaks the
//! `application/vnd.schemaregistry.v1+json` REST contract.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use schemaregistry::Client;
//!
//! # #[tokio::main]
//! # async fn main() -> schemaregistry::Result<()> {
//! let client = Client::builder()
//!     .url("http://localhost:8081")
//!     .build()?;
//!
//! let subjects = client.list_subjects().await?;
//!
//! let schema = r#"{"type":"string"}"#;
//! match client.is_registered("orders-value", schema).await? {
//!     Some(record) => println!("registered as id {} version {}", record.id, record.version),
//!     None => {
//!         let id = client.register_new_schema("orders-value", schema).await?;
//!         println!("registered as id {}", id);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Transports
//!
//! Every request goes through a [`Transport`]. The default one wraps
//! `reqwest` (feature `reqwest-transport`); any other HTTP stack or a test
//! double can be plugged in with [`ClientBuilder::transport`].

pub mod client;
pub mod config;
pub mod error_codes;
pub mod errors;
pub mod interpreter;
pub mod schema;
pub mod transport;
pub mod validation;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use client::{Client, ClientBuilder};
pub use config::{BasicAuth, ConnectionConfig};
pub use errors::{ResourceError, Result, SchemaRegistryError};
pub use interpreter::{ContentKind, CONTENT_TYPE_JSON, CONTENT_TYPE_SCHEMA_JSON};
pub use schema::Schema;
#[cfg(feature = "reqwest-transport")]
pub use transport::ReqwestTransport;
pub use transport::{DynTransport, Method, Request, Response, Transport};
pub use validation::{check_schema_version_id, VersionId};
