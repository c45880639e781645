//! Interpretation of the vendor's HTML directory listing.

use crate::consts;
use scraper::Html;
use tracing::instrument;

/// A parsed directory listing page.
///
/// Parsing is error-recovering (HTML5), so construction never fails; content
/// that isn't an HTML listing simply yields no entries.
#[derive(Debug)]
pub struct Listing {
    document: Html,
}

impl Listing {
    pub fn from_document(document: Html) -> Self {
        Self { document }
    }

    pub fn from_html(html: &str) -> Self {
        Self::from_document(Html::parse_document(html))
    }

    /// The ordered targets of every anchor whose `href` ends in `.gz`,
    /// resolved against `base_url`.
    ///
    /// Resolution is plain concatenation: the vendor links each dataset as a
    /// bare filename relative to the listing itself. Anchors without an
    /// `href` attribute are skipped.
    #[instrument(skip(self))]
    pub fn compressed_entries(&self, base_url: &str) -> Vec<String> {
        self.document
            .select(&consts::ANCHOR_SELECTOR)
            .filter_map(|element| element.value().attr("href"))
            .filter(|href| href.ends_with(consts::COMPRESSED_SUFFIX))
            .map(|href| {
                if href.contains("://") || href.starts_with("//") {
                    // The vendor has only ever published bare filenames;
                    // concatenating an absolute target produces a malformed
                    // entry, so make it visible.
                    tracing::warn!(href, "absolute href in directory listing");
                }
                format!("{base_url}{href}")
            })
            .collect()
    }
}

impl From<Html> for Listing {
    fn from(document: Html) -> Self {
        Self::from_document(document)
    }
}

#[cfg(test)]
mod tests {
    use super::Listing;
    use rstest::rstest;

    const BASE: &str = "https://ftp.example.com/oval/";

    #[test]
    fn keeps_only_compressed_anchor_targets() {
        let html = r#"
            <html><body><pre>
                <a href="a.xml.gz">a.xml.gz</a>
                <a href="readme.txt">readme.txt</a>
                <a>no target</a>
            </pre></body></html>
        "#;
        let entries = Listing::from_html(html).compressed_entries(BASE);
        assert_eq!(entries, vec![format!("{BASE}a.xml.gz")]);
    }

    #[rstest]
    #[case("a.xml.gz", true)]
    #[case("b.tar.gz", true)]
    #[case("readme.txt", false)]
    #[case("notes.gz.txt", false)]
    // The suffix match is case-sensitive.
    #[case("SHOUTING.XML.GZ", false)]
    fn suffix_filter(#[case] href: &str, #[case] kept: bool) {
        let html = format!(r#"<a href="{href}">{href}</a>"#);
        let entries = Listing::from_html(&html).compressed_entries(BASE);
        assert_eq!(!entries.is_empty(), kept);
    }

    #[test]
    fn preserves_listing_order() {
        let html = r#"
            <a href="c.xml.gz">c</a>
            <a href="a.xml.gz">a</a>
            <a href="b.xml.gz">b</a>
        "#;
        let entries = Listing::from_html(html).compressed_entries(BASE);
        assert_eq!(
            entries,
            vec![
                format!("{BASE}c.xml.gz"),
                format!("{BASE}a.xml.gz"),
                format!("{BASE}b.xml.gz"),
            ],
        );
    }

    #[test]
    fn non_html_content_yields_no_entries() {
        assert!(Listing::from_html("").compressed_entries(BASE).is_empty());
        assert!(Listing::from_html("%PDF-1.4 garbage").compressed_entries(BASE).is_empty());
    }

    #[test]
    fn absolute_href_is_still_concatenated() {
        // Latent vendor-format assumption: targets are relative filenames.
        // An absolute one is logged but handled identically.
        let html = r#"<a href="https://mirror.example.com/x.xml.gz">x</a>"#;
        let entries = Listing::from_html(html).compressed_entries(BASE);
        assert_eq!(entries, vec![format!("{BASE}https://mirror.example.com/x.xml.gz")]);
    }
}
