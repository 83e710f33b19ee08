use crate::epub::EpubMetadata;

pub const DEFAULT_TITLE: &str = "Image Book";
pub const DEFAULT_AUTHOR: &str = "Unknown";
pub const LANGUAGE: &str = "en";

/// Book-level metadata supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookMetadata {
    pub title: String,
    pub author: String,
}

impl Default for BookMetadata {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            author: DEFAULT_AUTHOR.to_string(),
        }
    }
}

impl BookMetadata {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
        }
    }

    /// Identifier derived from the title, so rebuilding a book keeps its id.
    pub fn identifier(&self) -> String {
        format!("id_{}", self.title.replace(' ', "_"))
    }

    pub fn to_epub_metadata(&self) -> EpubMetadata {
        EpubMetadata {
            identifier: self.identifier(),
            title: self.title.clone(),
            language: LANGUAGE.to_string(),
            creator: self.author.clone(),
            modified: None,
        }
    }
}
