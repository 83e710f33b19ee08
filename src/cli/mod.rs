pub mod output;

use crate::assemble::metadata_build::{DEFAULT_AUTHOR, DEFAULT_TITLE};
use crate::fragment::{DEFAULT_IMAGE_PREFIX, DEFAULT_TITLE as DEFAULT_FRAGMENT_TITLE};
use clap::{Args, Parser};
use std::path::PathBuf;

/// Flags shared by both tools
#[derive(Args, Debug, Clone, Copy)]
pub struct Verbosity {
    /// Verbose output
    #[arg(long, short)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, short)]
    pub quiet: bool,
}

/// img2epub command line
#[derive(Parser, Debug)]
#[command(name = "img2epub", version, about = "Generate EPUB from images in a folder")]
pub struct EpubCli {
    /// Path to folder containing images
    pub input_folder: PathBuf,

    /// Output EPUB file path
    #[arg(short, long, default_value = "output.epub")]
    pub output: PathBuf,

    /// Book title
    #[arg(short, long, default_value = DEFAULT_TITLE)]
    pub title: String,

    /// Book author
    #[arg(short, long, default_value = DEFAULT_AUTHOR)]
    pub author: String,

    #[command(flatten)]
    pub verbosity: Verbosity,
}

/// gen-xhtml command line
#[derive(Parser, Debug)]
#[command(
    name = "gen-xhtml",
    version,
    about = "Generate fixed-layout XHTML pages for the .jpg images in a folder"
)]
pub struct XhtmlCli {
    /// Path to folder containing .jpg images
    pub image_folder: PathBuf,

    /// Path to output .xhtml files
    pub output_folder: PathBuf,

    /// Book title
    #[arg(default_value = DEFAULT_FRAGMENT_TITLE)]
    pub title: String,

    /// Relative path prefix for xlink:href
    #[arg(default_value = DEFAULT_IMAGE_PREFIX)]
    pub image_rel_prefix: String,

    #[command(flatten)]
    pub verbosity: Verbosity,
}
