//! The vendor's variant-superseding rule.
//!
//! SUSE publishes some datasets in two variants: `name.xml.gz` covers the
//! analysed issues NOT affecting SUSE, while `name-affected.xml.gz` is a
//! superset that also includes the affecting ones (see the README the vendor
//! ships next to the listing). Retrieving both would duplicate coverage, so
//! the broad variant is dropped whenever its `-affected` sibling is present.

/// Marker distinguishing the superset variant of a dataset.
pub const AFFECTED_MARKER: &str = "-affected";

/// Drops every entry superseded by an `-affected` sibling.
///
/// An entry's identity is its name with the first occurrence of the marker
/// removed. An unmarked entry is dropped exactly when a marked entry with
/// the same identity appears anywhere in the input; marked entries are never
/// dropped themselves. Survivors keep their input order.
///
/// Pure and total: idempotent, and the output is always a subsequence of the
/// input.
pub fn prefer_affected(entries: Vec<String>) -> Vec<String> {
    let superseded: Vec<String> = entries
        .iter()
        .filter(|entry| entry.contains(AFFECTED_MARKER))
        .map(|entry| entry.replacen(AFFECTED_MARKER, "", 1))
        .collect();

    entries
        .into_iter()
        .filter(|entry| entry.contains(AFFECTED_MARKER) || !superseded.contains(entry))
        .collect()
}
