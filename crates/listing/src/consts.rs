use scraper::Selector;
use std::sync::LazyLock;

macro_rules! selector {
    ($name:ident, $css:expr) => {
        pub(crate) static $name: LazyLock<Selector> = LazyLock::new(|| Selector::parse($css).unwrap());
    };
}

// Anchors without an `href` are filtered out at the call site.
selector!(ANCHOR_SELECTOR, "a");

/// Suffix an anchor target must carry (case-sensitive) to count as a
/// compressed dataset.
pub(crate) const COMPRESSED_SUFFIX: &str = ".gz";
