use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImgBookError {
    #[error("Folder not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("No image files found in: {}", .0.display())]
    EmptyInput(PathBuf),

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ImgBookError {
    /// Errors caused by a bad input folder rather than a failure mid-run.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ImgBookError::NotFound(_) | ImgBookError::NotADirectory(_) | ImgBookError::EmptyInput(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ImgBookError>;
