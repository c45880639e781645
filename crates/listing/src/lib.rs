//! Discovery of SUSE's OVAL datasets from its public directory listing.
//!
//! Two pieces, both pure over already-fetched text:
//!
//! - [`Listing`] interprets the listing page and extracts the ordered
//!   compressed-dataset entries.
//! - [`prefer_affected`] applies the vendor's superseding rule, dropping a
//!   broad dataset whenever its `-affected` superset is also listed.
//!
//! Retrieval of the page itself belongs to the importer crate; nothing here
//! performs I/O.

mod consts;
mod listing;
mod select;

pub use crate::listing::Listing;
pub use crate::select::{AFFECTED_MARKER, prefer_affected};
