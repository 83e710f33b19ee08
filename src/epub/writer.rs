use crate::epub::{EpubBook, NAV_HREF, NAV_ID, NCX_HREF, NCX_ID, NavPoint};
use crate::error::Result;
use crate::util::{format_iso8601, xml_escape};
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

const OPF_DIR: &str = "OEBPS";

/// Write an EpubBook to an EPUB file with atomic rename.
///
/// The archive is built in `<file name>.tmp` next to `path`, then renamed
/// over it. An existing file at `path` is replaced. On failure the temp file
/// is removed and `path` is left untouched.
pub fn write_epub(book: &EpubBook, path: &Path) -> Result<()> {
    let tmp_path = temp_path_for(path);
    let written = write_archive(book, &tmp_path)
        .and_then(|()| std::fs::rename(&tmp_path, path).map_err(Into::into));
    if written.is_err() {
        let _ = std::fs::remove_file(&tmp_path);
    }
    written
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn write_archive(book: &EpubBook, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    let mut zip = ZipWriter::new(file);

    // 1. mimetype (stored, no compression, first entry)
    let stored = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
    zip.start_file("mimetype", stored)?;
    zip.write_all(b"application/epub+zip")?;

    let deflate = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    // 2. META-INF/container.xml
    zip.start_file("META-INF/container.xml", deflate)?;
    zip.write_all(generate_container_xml().as_bytes())?;

    // 3. Package document
    zip.start_file(format!("{OPF_DIR}/content.opf"), deflate)?;
    zip.write_all(generate_opf(book).as_bytes())?;

    // 4. Pages and images
    for (href, data) in &book.resources {
        log::debug!("writing {OPF_DIR}/{href} ({} bytes)", data.len());
        zip.start_file(format!("{OPF_DIR}/{href}"), deflate)?;
        zip.write_all(data)?;
    }

    // 5. Navigation, generated after all content
    let meta = &book.metadata;
    let nav = generate_nav_xhtml(&book.navigation.toc, &meta.title);
    zip.start_file(format!("{OPF_DIR}/{NAV_HREF}"), deflate)?;
    zip.write_all(nav.as_bytes())?;

    let ncx = generate_toc_ncx(&book.navigation.toc, &meta.title, &meta.identifier);
    zip.start_file(format!("{OPF_DIR}/{NCX_HREF}"), deflate)?;
    zip.write_all(ncx.as_bytes())?;

    zip.finish()?;
    Ok(())
}

fn generate_container_xml() -> String {
    r##"<?xml version="1.0" encoding="UTF-8"?>
<container version="1.0" xmlns="urn:oasis:names:tc:opendocument:xmlns:container">
  <rootfiles>
    <rootfile full-path="OEBPS/content.opf" media-type="application/oebps-package+xml"/>
  </rootfiles>
</container>"##
        .to_string()
}

fn generate_opf(book: &EpubBook) -> String {
    let mut opf = String::new();
    opf.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    opf.push_str("<package xmlns=\"http://www.idpf.org/2007/opf\" version=\"3.0\" unique-identifier=\"uid\">\n");

    opf.push_str("  <metadata xmlns:dc=\"http://purl.org/dc/elements/1.1/\">\n");

    let meta = &book.metadata;
    opf.push_str(&format!(
        "    <dc:identifier id=\"uid\">{}</dc:identifier>\n",
        xml_escape(&meta.identifier)
    ));
    opf.push_str(&format!("    <dc:title>{}</dc:title>\n", xml_escape(&meta.title)));
    opf.push_str(&format!(
        "    <dc:language>{}</dc:language>\n",
        xml_escape(&meta.language)
    ));
    opf.push_str(&format!(
        "    <dc:creator>{}</dc:creator>\n",
        xml_escape(&meta.creator)
    ));

    // Modified timestamp (required for EPUB 3)
    opf.push_str("    <meta property=\"dcterms:modified\">");
    match meta.modified {
        Some(ref modified) => opf.push_str(modified),
        None => opf.push_str(&format_iso8601()),
    }
    opf.push_str("</meta>\n");

    opf.push_str("  </metadata>\n");

    opf.push_str("  <manifest>\n");
    for item in &book.manifest {
        opf.push_str(&format!(
            "    <item id=\"{}\" href=\"{}\" media-type=\"{}\"/>\n",
            xml_escape(&item.id),
            xml_escape(&item.href),
            xml_escape(&item.media_type)
        ));
    }
    opf.push_str(&format!(
        "    <item id=\"{NCX_ID}\" href=\"{NCX_HREF}\" media-type=\"application/x-dtbncx+xml\"/>\n"
    ));
    opf.push_str(&format!(
        "    <item id=\"{NAV_ID}\" href=\"{NAV_HREF}\" media-type=\"application/xhtml+xml\" properties=\"nav\"/>\n"
    ));
    opf.push_str("  </manifest>\n");

    opf.push_str(&format!("  <spine toc=\"{NCX_ID}\">\n"));
    for item in &book.spine {
        opf.push_str(&format!(
            "    <itemref idref=\"{}\"/>\n",
            xml_escape(&item.idref)
        ));
    }
    opf.push_str("  </spine>\n");

    opf.push_str("</package>\n");
    opf
}

fn generate_nav_xhtml(toc: &[NavPoint], title: &str) -> String {
    let mut html = String::new();
    html.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    html.push_str("<!DOCTYPE html>\n");
    html.push_str("<html xmlns=\"http://www.w3.org/1999/xhtml\" xmlns:epub=\"http://www.idpf.org/2007/ops\">\n");
    html.push_str("<head><title>");
    html.push_str(&xml_escape(title));
    html.push_str("</title></head>\n");
    html.push_str("<body>\n");
    html.push_str("<nav epub:type=\"toc\" id=\"id\">\n");
    html.push_str(&format!("<h2>{}</h2>\n", xml_escape(title)));
    write_nav_ol(&mut html, toc);
    html.push_str("</nav>\n");
    html.push_str("</body>\n</html>\n");
    html
}

fn write_nav_ol(html: &mut String, points: &[NavPoint]) {
    if points.is_empty() {
        return;
    }
    html.push_str("<ol>\n");
    for point in points {
        if point.href.is_empty() {
            html.push_str(&format!("<li><span>{}</span>", xml_escape(&point.label)));
        } else {
            html.push_str(&format!(
                "<li><a href=\"{}\">{}</a>",
                xml_escape(&point.href),
                xml_escape(&point.label)
            ));
        }
        if !point.children.is_empty() {
            html.push('\n');
            write_nav_ol(html, &point.children);
        }
        html.push_str("</li>\n");
    }
    html.push_str("</ol>\n");
}

fn generate_toc_ncx(toc: &[NavPoint], title: &str, uid: &str) -> String {

    let mut ncx = String::new();
    ncx.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    ncx.push_str("<ncx xmlns=\"http://www.daisy.org/z3986/2005/ncx/\" version=\"2005-1\">\n");
    ncx.push_str("<head>\n");
    ncx.push_str(&format!(
        "  <meta name=\"dtb:uid\" content=\"{}\"/>\n",
        xml_escape(uid)
    ));
    ncx.push_str("</head>\n");
    ncx.push_str(&format!(
        "<docTitle><text>{}</text></docTitle>\n",
        xml_escape(title)
    ));
    ncx.push_str("<navMap>\n");
    write_ncx_points(&mut ncx, toc, &mut 1);
    ncx.push_str("</navMap>\n");
    ncx.push_str("</ncx>\n");
    ncx
}

fn write_ncx_points(ncx: &mut String, points: &[NavPoint], counter: &mut usize) {
    for point in points {
        let id = *counter;
        *counter += 1;
        // NCX has no label-only entries, so a section points at its first child.
        let src = if point.href.is_empty() {
            point.children.first().map_or("", |c| c.href.as_str())
        } else {
            point.href.as_str()
        };
        ncx.push_str(&format!(
            "<navPoint id=\"navpoint-{id}\" playOrder=\"{id}\">\n"
        ));
        ncx.push_str(&format!(
            "  <navLabel><text>{}</text></navLabel>\n",
            xml_escape(&point.label)
        ));
        ncx.push_str(&format!("  <content src=\"{}\"/>\n", xml_escape(src)));
        write_ncx_points(ncx, &point.children, counter);
        ncx.push_str("</navPoint>\n");
    }
}
