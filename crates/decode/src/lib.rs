//! Decoding of fetched OVAL documents.
//!
//! The vendor serves each dataset as a single-member gzip stream wrapping
//! UTF-8 XML text. This crate turns those raw bytes into an owned, generic
//! element tree:
//!
//! - [`decompress`] — gzip inflate + strict UTF-8 decode,
//! - [`parse`] — markup parsing into an [`Element`] tree,
//! - [`decode`] — the composition of the two.
//!
//! The tree is deliberately schema-agnostic; interpreting the OVAL content
//! (criteria, version ranges, product identifiers) is the consumer's
//! concern.
//!
//! ```
//! use suse_oval_decode::decode;
//! # use flate2::{Compression, write::GzEncoder};
//! # use std::io::Write;
//!
//! # let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
//! # encoder.write_all(b"<oval_definitions/>").unwrap();
//! # let payload = encoder.finish().unwrap();
//! let document = decode(&payload).unwrap();
//! assert_eq!(document.name, "oval_definitions");
//! ```

pub mod error;
mod ops;

pub use crate::ops::{decode, decompress, parse};
// Dependents name the tree type without a direct xmltree dependency.
pub use xmltree::Element;
