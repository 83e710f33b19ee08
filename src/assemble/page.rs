use crate::util::xml_escape;

/// XHTML wrapper showing a single full-bleed image for page `index`.
///
/// `image_href` is relative to the page document.
pub fn image_page_xhtml(index: usize, image_href: &str, lang: &str) -> String {
    format!(
        concat!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
            "<!DOCTYPE html>\n",
            "<html xmlns=\"http://www.w3.org/1999/xhtml\" xml:lang=\"{lang}\" lang=\"{lang}\">\n",
            "<head>\n",
            "  <title>Page {index}</title>\n",
            "  <style>\n",
            "    body {{ margin: 0; padding: 0; text-align: center; }}\n",
            "    img {{ max-width: 100%; max-height: 100%; object-fit: contain; }}\n",
            "  </style>\n",
            "</head>\n",
            "<body>\n",
            "  <img src=\"{src}\" alt=\"Page {index}\"/>\n",
            "</body>\n",
            "</html>\n",
        ),
        lang = xml_escape(lang),
        index = index,
        src = xml_escape(image_href),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_page_xhtml() {
        let xhtml = image_page_xhtml(3, "images/image_0003.png", "en");
        insta::assert_snapshot!(xhtml, @r#"
        <?xml version="1.0" encoding="UTF-8"?>
        <!DOCTYPE html>
        <html xmlns="http://www.w3.org/1999/xhtml" xml:lang="en" lang="en">
        <head>
          <title>Page 3</title>
          <style>
            body { margin: 0; padding: 0; text-align: center; }
            img { max-width: 100%; max-height: 100%; object-fit: contain; }
          </style>
        </head>
        <body>
          <img src="images/image_0003.png" alt="Page 3"/>
        </body>
        </html>
        "#);
    }
}
