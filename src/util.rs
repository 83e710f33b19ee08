/// Escape text for use in XML content and double-quoted attributes.
///
/// Shared by the package writer, the page wrapper, and the fragment template.
pub fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Return the current UTC timestamp in ISO 8601 format: `YYYY-MM-DDThh:mm:ssZ`.
pub fn format_iso8601() -> String {
    chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Zero-padded 1-based page number used in generated file names.
pub fn page_number(index: usize) -> String {
    format!("{index:04}")
}
