use crate::assemble::metadata_build::BookMetadata;
use crate::epub::writer;
use crate::error::{ImgBookError, Result};
use crate::scan::{ImageFile, ScanOptions, list_images};
use std::path::{Path, PathBuf};

/// Progress reported while packaging
#[derive(Debug)]
pub enum PackageEvent<'a> {
    /// The folder scan finished with this many images
    Found(usize),
    /// About to embed the image as page `index` (1-based)
    Adding(usize, &'a ImageFile),
}

/// What a packaging run wrote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSummary {
    pub output: PathBuf,
    pub pages: usize,
}

/// Scan `dir` for images and write them to `output` as an EPUB.
pub fn package_epub(
    dir: &Path,
    output: &Path,
    meta: &BookMetadata,
    mut on_event: impl FnMut(PackageEvent<'_>),
) -> Result<PackageSummary> {
    let images = list_images(dir, &ScanOptions::EPUB_IMAGES)?;
    if images.is_empty() {
        return Err(ImgBookError::EmptyInput(dir.to_path_buf()));
    }
    on_event(PackageEvent::Found(images.len()));

    let book = super::assemble_book(&images, meta, dir, |index, image| {
        on_event(PackageEvent::Adding(index, image))
    })?;
    writer::write_epub(&book, output)?;
    log::info!("wrote {} pages to {}", images.len(), output.display());

    Ok(PackageSummary {
        output: output.to_path_buf(),
        pages: images.len(),
    })
}
