//! Character encoding detection for HTML snapshots supplied as bytes.
//!
//! The charset is taken from the document's own `<meta>` declaration and the
//! bytes are decoded to UTF-8 before parsing.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Bytes examined for a charset declaration.
const SNIFF_LEN: usize = 1024;

/// Match `<meta charset="...">` tag
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;/]+)"#).expect("valid regex")
});

/// Detect the declared character encoding of an HTML snapshot.
///
/// Handles both `<meta charset="...">` and the
/// `<meta http-equiv="Content-Type" content="text/html; charset=...">` form,
/// looking only at the first kilobyte. Unknown labels and missing
/// declarations fall back to UTF-8.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);

    CHARSET_META_RE
        .captures(&head)
        .and_then(|c| c.get(1))
        .and_then(|m| Encoding::for_label(m.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode HTML bytes to a UTF-8 string.
///
/// Invalid sequences become U+FFFD rather than errors.
///
/// # Examples
///
/// ```
/// use aeo_analyzer::encoding::decode_html;
///
/// let html = b"<meta charset=\"iso-8859-1\"><h2>Caf\xE9?</h2>";
/// assert!(decode_html(html).contains("Café?"));
/// ```
#[must_use]
pub fn decode_html(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    if encoding == UTF_8 {
        return String::from_utf8_lossy(html).into_owned();
    }

    let (decoded, _, had_errors) = encoding.decode(html);
    if had_errors {
        tracing::debug!(encoding = encoding.name(), "replaced malformed byte sequences");
    }
    decoded.into_owned()
}
