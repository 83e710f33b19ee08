use std::path::{Path, PathBuf};

/// Write a black JPEG of the given size
#[allow(dead_code)]
pub fn write_jpeg(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    image::RgbImage::new(width, height)
        .save_with_format(&path, image::ImageFormat::Jpeg)
        .expect("encode jpeg");
    path
}

/// Write arbitrary bytes under an image file name
#[allow(dead_code)]
pub fn write_bytes(dir: &Path, name: &str, data: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, data).expect("write fixture");
    path
}

/// A temp dir holding an `images/` folder, returned alongside
#[allow(dead_code)]
pub fn image_folder() -> (tempfile::TempDir, PathBuf) {
    let tmp = tempfile::TempDir::new().expect("create temp dir");
    let images = tmp.path().join("images");
    std::fs::create_dir(&images).expect("create images dir");
    (tmp, images)
}

/// Basic structural validation of an EPUB file
#[allow(dead_code)]
pub fn assert_valid_epub(path: &Path) {
    use std::io::Read;

    let file = std::fs::File::open(path).expect("open epub");
    let mut archive = zip::ZipArchive::new(file).expect("open zip");

    // Check mimetype is first entry and stored
    let mut mimetype = archive.by_index(0).expect("first entry");
    assert_eq!(mimetype.name(), "mimetype");
    assert_eq!(mimetype.compression(), zip::CompressionMethod::Stored);
    let mut content = String::new();
    mimetype.read_to_string(&mut content).expect("read mimetype");
    assert_eq!(content, "application/epub+zip");
    drop(mimetype);

    archive
        .by_name("META-INF/container.xml")
        .expect("container.xml");
    archive.by_name("OEBPS/content.opf").expect("content.opf");
    archive.by_name("OEBPS/nav.xhtml").expect("nav.xhtml");
    archive.by_name("OEBPS/toc.ncx").expect("toc.ncx");
}

/// Raw bytes of one archive entry
#[allow(dead_code)]
pub fn read_entry(path: &Path, name: &str) -> Vec<u8> {
    use std::io::Read;

    let file = std::fs::File::open(path).expect("open epub");
    let mut archive = zip::ZipArchive::new(file).expect("open zip");
    let mut entry = archive
        .by_name(name)
        .unwrap_or_else(|_| panic!("missing entry {name}"));
    let mut buf = Vec::new();
    entry.read_to_end(&mut buf).expect("read entry");
    buf
}

/// An archive entry as UTF-8 text
#[allow(dead_code)]
pub fn read_text(path: &Path, name: &str) -> String {
    String::from_utf8(read_entry(path, name)).expect("utf-8 entry")
}

/// The `content.opf` package document
#[allow(dead_code)]
pub fn read_opf(path: &Path) -> String {
    read_text(path, "OEBPS/content.opf")
}
