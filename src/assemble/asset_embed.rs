/// Fallback for extensions outside the table
pub const DEFAULT_IMAGE_MEDIA_TYPE: &str = "image/jpeg";

/// Media type for a lowercased image extension (no leading dot).
///
/// Anything unrecognized is treated as JPEG.
pub fn infer_media_type(extension: &str) -> &'static str {
    match extension {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        _ => DEFAULT_IMAGE_MEDIA_TYPE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_known_types() {
        assert_eq!(infer_media_type("jpg"), "image/jpeg");
        assert_eq!(infer_media_type("jpeg"), "image/jpeg");
        assert_eq!(infer_media_type("png"), "image/png");
        assert_eq!(infer_media_type("gif"), "image/gif");
        assert_eq!(infer_media_type("webp"), "image/webp");
        assert_eq!(infer_media_type("bmp"), "image/bmp");
    }

    #[test]
    fn test_infer_unknown_type_falls_back_to_jpeg() {
        assert_eq!(infer_media_type("tiff"), "image/jpeg");
        assert_eq!(infer_media_type(""), "image/jpeg");
    }
}
