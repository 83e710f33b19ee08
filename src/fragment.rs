//! Standalone fixed-layout XHTML pages for a folder of JPEGs.
//!
//! Each page wraps its image in an SVG sized to the image's own pixel
//! dimensions and links to it by relative path. The images themselves are
//! left where they are.

use crate::error::Result;
use crate::scan::{ScanOptions, list_images};
use crate::util::{page_number, xml_escape};
use std::path::{Path, PathBuf};

pub const DEFAULT_TITLE: &str = "Untitled";
pub const DEFAULT_IMAGE_PREFIX: &str = "../image";
pub const STYLESHEET_HREF: &str = "../style/book-style-prepaginated.css";

/// Inputs for one emitter run
#[derive(Debug, Clone)]
pub struct FragmentOptions {
    pub image_dir: PathBuf,
    pub output_dir: PathBuf,
    pub title: String,
    /// Joined with `/` and the image file name to form `xlink:href`
    pub image_rel_prefix: String,
}

impl FragmentOptions {
    pub fn new(image_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            image_dir: image_dir.into(),
            output_dir: output_dir.into(),
            title: DEFAULT_TITLE.to_string(),
            image_rel_prefix: DEFAULT_IMAGE_PREFIX.to_string(),
        }
    }
}

/// One written page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentPage {
    pub file_name: String,
    pub source_name: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentReport {
    pub output_dir: PathBuf,
    pub pages: Vec<FragmentPage>,
}

impl FragmentReport {
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

/// Render the page document for one image.
pub fn render_fragment(title: &str, width: u32, height: u32, image_href: &str) -> String {
    let title = xml_escape(title);
    let href = xml_escape(image_href);
    format!(
        r#"
<?xml version="1.0" encoding="UTF-8"?>
<html xmlns="http://www.w3.org/1999/xhtml" xmlns:epub="http://www.idpf.org/2007/ops" xml:lang="ja" class="hltr">
<head>
<meta charset="UTF-8"/>
<title>{title}</title>
<link rel="stylesheet" href="{STYLESHEET_HREF}" type="text/css"/>
<meta name="viewport" content="width={width}, height={height}"/>
</head>
<body class="p-image">
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}" width="100%" height="100%" version="1.1" xmlns:xlink="http://www.w3.org/1999/xlink">
<image width="{width}" height="{height}" xlink:href="{href}"/>
</svg>
</body>
</html>
"#
    )
    .trim_start_matches('\n')
    .to_string()
}

/// Write `p-NNNN.xhtml` into the output directory for every `.jpg` in the
/// image directory.
///
/// The output directory is created first. A folder without JPEGs is not an
/// error: the returned report is empty and nothing else is written.
pub fn emit_fragments(
    options: &FragmentOptions,
    mut on_page: impl FnMut(&FragmentPage),
) -> Result<FragmentReport> {
    std::fs::create_dir_all(&options.output_dir)?;

    let images = list_images(&options.image_dir, &ScanOptions::JPEG_ONLY)?;
    let mut pages = Vec::with_capacity(images.len());

    for (offset, image) in images.iter().enumerate() {
        let (width, height) = image.dimensions()?;
        let href = format!("{}/{}", options.image_rel_prefix, image.file_name);
        let content = render_fragment(&options.title, width, height, &href);

        let page = FragmentPage {
            file_name: format!("p-{}.xhtml", page_number(offset + 1)),
            source_name: image.file_name.clone(),
            width,
            height,
        };
        write_page(&options.output_dir, &page.file_name, &content)?;
        on_page(&page);
        pages.push(page);
    }

    Ok(FragmentReport {
        output_dir: options.output_dir.clone(),
        pages,
    })
}

fn write_page(dir: &Path, name: &str, content: &str) -> Result<()> {
    let path = dir.join(name);
    log::debug!("writing {}", path.display());
    std::fs::write(path, content.as_bytes())?;
    Ok(())
}
