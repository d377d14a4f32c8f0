//! Embedded preview page
//!
//! The static page rendering the data file ships inside the binary, so the
//! output directory is self-contained after a full run.

/// File name of the preview page inside the output directory
pub const PREVIEW_FILE_NAME: &str = "index.html";

/// The preview page as shipped
pub const INDEX_HTML: &str = include_str!("../html/index.html");

/// Opening tag the data source attribute is attached to
const HTML_OPEN_TAG: &str = "<html lang=\"en\">";

/// The preview page, reading its data from `data_file` (relative to the page)
pub fn preview_page(data_file: &str) -> String {
    let attribute = html_escape::encode_double_quoted_attribute(data_file);
    INDEX_HTML.replacen(
        HTML_OPEN_TAG,
        &format!("<html lang=\"en\" data-source=\"{}\">", attribute),
        1,
    )
}
