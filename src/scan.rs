use crate::assemble::asset_embed::infer_media_type;
use crate::error::{ImgBookError, Result};
use std::path::{Path, PathBuf};

/// Which files a scan keeps and how it orders them.
#[derive(Debug, Clone, Copy)]
pub struct ScanOptions {
    /// Lowercase extensions without the leading dot
    pub extensions: &'static [&'static str],
    /// Compare file names lowercased when sorting
    pub case_insensitive: bool,
    /// Treat a name that is only an extension (`.jpg`) as a match
    pub bare_extension: bool,
}

impl ScanOptions {
    /// Raster formats accepted by the EPUB assembler, sorted case-insensitively.
    pub const EPUB_IMAGES: ScanOptions = ScanOptions {
        extensions: &["jpg", "jpeg", "png", "gif", "webp", "bmp"],
        case_insensitive: true,
        bare_extension: false,
    };

    /// Names ending in `.jpg` (any case), sorted by raw file name. Used by
    /// the XHTML emitter.
    pub const JPEG_ONLY: ScanOptions = ScanOptions {
        extensions: &["jpg"],
        case_insensitive: false,
        bare_extension: true,
    };

    /// Lowercased extension of `file_name` if this scan keeps it.
    fn matching_extension(&self, file_name: &str) -> Option<String> {
        let lower = file_name.to_lowercase();
        let (stem, extension) = lower.rsplit_once('.')?;
        if stem.is_empty() && !self.bare_extension {
            return None;
        }
        self.extensions
            .contains(&extension)
            .then(|| extension.to_string())
    }
}

/// An image found on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub path: PathBuf,
    pub file_name: String,
    /// Lowercased, without the dot
    pub extension: String,
}

impl ImageFile {
    pub fn media_type(&self) -> &'static str {
        infer_media_type(&self.extension)
    }

    /// Pixel width and height, read from the image header only.
    ///
    /// The format is sniffed from the file contents, not the extension.
    pub fn dimensions(&self) -> Result<(u32, u32)> {
        let reader = image::ImageReader::open(&self.path)?.with_guessed_format()?;
        Ok(reader.into_dimensions()?)
    }

    fn sort_key(&self, case_insensitive: bool) -> String {
        if case_insensitive {
            self.file_name.to_lowercase()
        } else {
            self.file_name.clone()
        }
    }
}

/// List the images in `dir` that match `options`, in sorted order.
///
/// Subdirectories and files with other extensions are skipped. The sort is
/// stable, so names that compare equal stay in directory enumeration order.
pub fn list_images(dir: &Path, options: &ScanOptions) -> Result<Vec<ImageFile>> {
    if !dir.exists() {
        return Err(ImgBookError::NotFound(dir.to_path_buf()));
    }
    if !dir.is_dir() {
        return Err(ImgBookError::NotADirectory(dir.to_path_buf()));
    }

    let mut images = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let file_name = entry.file_name().to_string_lossy().into_owned();
        let Some(extension) = options.matching_extension(&file_name) else {
            continue;
        };
        images.push(ImageFile {
            path,
            file_name,
            extension,
        });
    }

    images.sort_by_cached_key(|img| img.sort_key(options.case_insensitive));
    log::debug!("{} image(s) matched in {}", images.len(), dir.display());

    Ok(images)
}
