pub mod writer;

use std::collections::BTreeMap;

/// In-memory EPUB package, as built by the assembler
#[derive(Debug, Default)]
pub struct EpubBook {
    pub metadata: EpubMetadata,
    pub manifest: Vec<ManifestItem>,
    pub spine: Vec<SpineItem>,
    pub navigation: Navigation,
    /// Archive contents keyed by href relative to the OPF directory
    pub resources: BTreeMap<String, Vec<u8>>,
}

/// Dublin Core metadata fields
#[derive(Debug, Default, Clone)]
pub struct EpubMetadata {
    pub identifier: String,
    pub title: String,
    pub language: String,
    pub creator: String,
    /// `dcterms:modified`; the writer stamps the current time when unset
    pub modified: Option<String>,
}

/// An item in the EPUB manifest
#[derive(Debug, Clone)]
pub struct ManifestItem {
    pub id: String,
    pub href: String,
    pub media_type: String,
}

/// A spine item reference
#[derive(Debug, Clone)]
pub struct SpineItem {
    pub idref: String,
}

/// Navigation structure
#[derive(Debug, Default)]
pub struct Navigation {
    pub toc: Vec<NavPoint>,
}

/// A navigation point in the TOC tree
#[derive(Debug, Clone)]
pub struct NavPoint {
    pub label: String,
    /// Empty for a section heading that only groups its children
    pub href: String,
    pub children: Vec<NavPoint>,
}

/// Manifest id and href of the generated navigation document
pub const NAV_ID: &str = "nav";
pub const NAV_HREF: &str = "nav.xhtml";
/// Manifest id and href of the generated NCX
pub const NCX_ID: &str = "ncx";
pub const NCX_HREF: &str = "toc.ncx";
