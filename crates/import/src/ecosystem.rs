//! The fixed classifier attached to every document from this source.

use serde::Serialize;

/// Package type of every advisory the feed describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageType {
    Rpm,
}

/// Distribution namespace the documents cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Namespace {
    Opensuse,
}

/// The ecosystem tag paired with every parsed document.
///
/// Serializes as `{"type":"rpm","namespace":"opensuse"}`, the classifier
/// shape downstream record conversion expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Ecosystem {
    #[serde(rename = "type")]
    pub package_type: PackageType,
    pub namespace: Namespace,
}

impl Ecosystem {
    /// Everything this importer produces is tagged the same way: RPM
    /// packages in the openSUSE namespace.
    pub const OPENSUSE_RPM: Self =
        Self { package_type: PackageType::Rpm, namespace: Namespace::Opensuse };
}
