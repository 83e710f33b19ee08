pub mod asset_embed;
pub mod metadata_build;
pub mod package;
pub mod page;

use crate::epub::{EpubBook, ManifestItem, NAV_ID, NavPoint, Navigation, SpineItem};
use crate::error::{ImgBookError, Result};
use crate::scan::ImageFile;
use crate::util::page_number;
use metadata_build::{BookMetadata, LANGUAGE};
use std::collections::BTreeMap;
use std::path::Path;

/// Label of the single TOC section grouping every page
pub const TOC_SECTION: &str = "Pages";

/// Build an EpubBook with one page per image, in the given order.
///
/// `source_dir` only names the folder in the `EmptyInput` error.
pub fn assemble_book(
    images: &[ImageFile],
    meta: &BookMetadata,
    source_dir: &Path,
    mut on_page: impl FnMut(usize, &ImageFile),
) -> Result<EpubBook> {
    if images.is_empty() {
        return Err(ImgBookError::EmptyInput(source_dir.to_path_buf()));
    }

    let mut manifest: Vec<ManifestItem> = Vec::with_capacity(images.len() * 2);
    let mut spine: Vec<SpineItem> = Vec::with_capacity(images.len() + 1);
    let mut pages: Vec<NavPoint> = Vec::with_capacity(images.len());
    let mut resources: BTreeMap<String, Vec<u8>> = BTreeMap::new();

    spine.push(SpineItem {
        idref: NAV_ID.to_string(),
    });

    for (offset, image) in images.iter().enumerate() {
        let index = offset + 1;
        on_page(index, image);

        let number = page_number(index);
        let data = std::fs::read(&image.path)?;
        log::debug!(
            "page {index}: {} ({} bytes, {})",
            image.path.display(),
            data.len(),
            image.media_type()
        );

        let image_href = format!("images/image_{number}.{}", image.extension);
        resources.insert(image_href.clone(), data);
        manifest.push(ManifestItem {
            id: format!("image_{number}"),
            href: image_href.clone(),
            media_type: image.media_type().to_string(),
        });

        let page_id = format!("page_{number}");
        let page_href = format!("{page_id}.xhtml");
        let xhtml = page::image_page_xhtml(index, &image_href, LANGUAGE);
        resources.insert(page_href.clone(), xhtml.into_bytes());
        manifest.push(ManifestItem {
            id: page_id.clone(),
            href: page_href.clone(),
            media_type: "application/xhtml+xml".to_string(),
        });

        spine.push(SpineItem { idref: page_id });
        pages.push(NavPoint {
            label: format!("Page {index}"),
            href: page_href,
            children: Vec::new(),
        });
    }

    let navigation = Navigation {
        toc: vec![NavPoint {
            label: TOC_SECTION.to_string(),
            href: String::new(),
            children: pages,
        }],
    };

    Ok(EpubBook {
        metadata: meta.to_epub_metadata(),
        manifest,
        spine,
        navigation,
        resources,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::{ScanOptions, list_images};

    fn sample_dir() -> tempfile::TempDir {
        let tmp = tempfile::TempDir::new().unwrap();
        std::fs::write(tmp.path().join("b.png"), b"png-bytes").unwrap();
        std::fs::write(tmp.path().join("A.jpg"), b"jpg-bytes").unwrap();
        std::fs::write(tmp.path().join("c.gif"), b"gif-bytes").unwrap();
        tmp
    }

    #[test]
    fn test_assemble_orders_and_names_pages() {
        let tmp = sample_dir();
        let images = list_images(tmp.path(), &ScanOptions::EPUB_IMAGES).unwrap();
        let book = assemble_book(&images, &BookMetadata::default(), tmp.path(), |_, _| {}).unwrap();

        let images_in_manifest: Vec<&str> = book
            .manifest
            .iter()
            .filter(|m| m.id.starts_with("image_"))
            .map(|m| m.href.as_str())
            .collect();
        assert_eq!(
            images_in_manifest,
            vec![
                "images/image_0001.jpg",
                "images/image_0002.png",
                "images/image_0003.gif"
            ]
        );
        assert_eq!(book.resources["images/image_0001.jpg"], b"jpg-bytes");
        assert_eq!(book.resources["images/image_0002.png"], b"png-bytes");
        let gif = book.manifest.iter().find(|m| m.id == "image_0003").unwrap();
        assert_eq!(gif.media_type, "image/gif");
    }

    #[test]
    fn test_spine_starts_with_nav() {
        let tmp = sample_dir();
        let images = list_images(tmp.path(), &ScanOptions::EPUB_IMAGES).unwrap();
        let book = assemble_book(&images, &BookMetadata::default(), tmp.path(), |_, _| {}).unwrap();

        let idrefs: Vec<&str> = book.spine.iter().map(|s| s.idref.as_str()).collect();
        assert_eq!(idrefs, vec!["nav", "page_0001", "page_0002", "page_0003"]);
        assert_eq!(book.spine.len(), images.len() + 1);
    }

    #[test]
    fn test_toc_is_single_pages_section() {
        let tmp = sample_dir();
        let images = list_images(tmp.path(), &ScanOptions::EPUB_IMAGES).unwrap();
        let book = assemble_book(&images, &BookMetadata::default(), tmp.path(), |_, _| {}).unwrap();

        assert_eq!(book.navigation.toc.len(), 1);
        let section = &book.navigation.toc[0];
        assert_eq!(section.label, "Pages");
        let labels: Vec<&str> = section.children.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["Page 1", "Page 2", "Page 3"]);
        assert_eq!(section.children[2].href, "page_0003.xhtml");
    }

    #[test]
    fn test_page_wraps_its_image() {
        let tmp = sample_dir();
        let images = list_images(tmp.path(), &ScanOptions::EPUB_IMAGES).unwrap();
        let book = assemble_book(&images, &BookMetadata::default(), tmp.path(), |_, _| {}).unwrap();

        let page = String::from_utf8(book.resources["page_0002.xhtml"].clone()).unwrap();
        assert!(page.contains("<title>Page 2</title>"));
        assert!(page.contains("src=\"images/image_0002.png\""));
    }

    #[test]
    fn test_progress_callback_sees_every_image() {
        let tmp = sample_dir();
        let images = list_images(tmp.path(), &ScanOptions::EPUB_IMAGES).unwrap();
        let mut seen = Vec::new();
        assemble_book(&images, &BookMetadata::default(), tmp.path(), |i, img| {
            seen.push((i, img.file_name.clone()))
        })
        .unwrap();
        assert_eq!(
            seen,
            vec![
                (1, "A.jpg".to_string()),
                (2, "b.png".to_string()),
                (3, "c.gif".to_string())
            ]
        );
    }

    #[test]
    fn test_empty_input_rejected() {
        let tmp = tempfile::TempDir::new().unwrap();
        let err = assemble_book(&[], &BookMetadata::default(), tmp.path(), |_, _| {}).unwrap_err();
        assert!(matches!(err, ImgBookError::EmptyInput(_)));
    }

    #[test]
    fn test_unreadable_image_aborts() {
        let tmp = sample_dir();
        let images = list_images(tmp.path(), &ScanOptions::EPUB_IMAGES).unwrap();
        std::fs::remove_file(&images[1].path).unwrap();
        let err = assemble_book(&images, &BookMetadata::default(), tmp.path(), |_, _| {}).unwrap_err();
        assert!(matches!(err, ImgBookError::Io(_)));
    }
}
