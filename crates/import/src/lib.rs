//! Importer for SUSE's published OVAL vulnerability advisories.
//!
//! SUSE serves gzip-compressed OVAL XML datasets under a plain HTTPS
//! directory listing. This crate discovers that listing, drops dataset
//! variants superseded by their `-affected` counterparts, then fetches,
//! decompresses and parses each survivor, yielding
//! `(ecosystem tag, document tree)` pairs as a lazy stream:
//!
//! ```no_run
//! use futures::{StreamExt, pin_mut};
//! use suse_oval_import::Importer;
//!
//! # async fn run() -> suse_oval_import::error::Result<()> {
//! let importer = Importer::new()?;
//! let documents = importer.documents();
//! pin_mut!(documents);
//! while let Some(result) = documents.next().await {
//!     let (ecosystem, document) = result?;
//!     println!("{ecosystem:?}: <{}>", document.name);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Scheduling, persistence, and interpretation of the OVAL content itself
//! are the caller's concern; the stream is finite, re-fetches on every
//! invocation, and stops issuing requests as soon as it is dropped.

mod client;
mod ecosystem;
pub mod error;
mod importer;

pub use crate::client::Client;
pub use crate::ecosystem::{Ecosystem, Namespace, PackageType};
pub use crate::importer::{ErrorPolicy, Importer};
