//! Well-known media types and file-extension lookup.
//!
//! The constants cover the formats this ecosystem routes on: packaged and
//! manifest forms of web publications, OPDS catalogs, LCP-protected
//! containers, and the common document/image types.

use once_cell::sync::Lazy;

use crate::MediaType;

macro_rules! media_types {
    ($($name:ident = ($type_:literal, $subtype:literal $(, $pname:literal = $pvalue:literal)*);)*) => {
        $(
            pub static $name: Lazy<MediaType> =
                Lazy::new(|| MediaType::constant($type_, $subtype, &[$(($pname, $pvalue)),*]));
        )*
    };
}

media_types! {
    BINARY = ("application", "octet-stream");
    TEXT = ("text", "plain");
    HTML = ("text", "html");
    XHTML = ("application", "xhtml+xml");
    JSON = ("application", "json");
    XML = ("application", "xml");
    ZIP = ("application", "zip");
    PDF = ("application", "pdf");
    EPUB = ("application", "epub+zip");

    OPDS1 = ("application", "atom+xml", "profile" = "opds-catalog");
    OPDS1_ENTRY = ("application", "atom+xml", "type" = "entry", "profile" = "opds-catalog");
    OPDS2 = ("application", "opds+json");
    OPDS2_PUBLICATION = ("application", "opds-publication+json");

    WEBPUB = ("application", "webpub+zip");
    WEBPUB_MANIFEST = ("application", "webpub+json");
    AUDIOBOOK = ("application", "audiobook+zip");
    AUDIOBOOK_MANIFEST = ("application", "audiobook+json");
    DIVINA = ("application", "divina+zip");
    DIVINA_MANIFEST = ("application", "divina+json");

    LCP_PROTECTED_AUDIOBOOK = ("application", "audiobook+lcp");
    LCP_PROTECTED_PDF = ("application", "pdf+lcp");
    LCP_LICENSE_DOCUMENT = ("application", "vnd.readium.lcp.license.v1.0+json");

    BMP = ("image", "bmp");
    GIF = ("image", "gif");
    JPEG = ("image", "jpeg");
    PNG = ("image", "png");
    SVG = ("image", "svg+xml");
    TIFF = ("image", "tiff");
}

impl MediaType {
    /// Look up the canonical media type for a file extension.
    ///
    /// Returns `None` for unknown extensions rather than guessing
    /// `application/octet-stream`; that fallback is the caller's call.
    pub fn from_extension(extension: &str) -> Option<&'static MediaType> {
        let media_type: &'static MediaType = match extension.to_ascii_lowercase().as_str() {
            "htm" | "html" => &HTML,
            "xht" | "xhtml" => &XHTML,
            "json" => &JSON,
            "xml" => &XML,
            "zip" => &ZIP,
            "pdf" => &PDF,
            "epub" => &EPUB,
            "atom" => &OPDS1,
            "webpub" => &WEBPUB,
            "audiobook" => &AUDIOBOOK,
            "divina" => &DIVINA,
            "lcpa" => &LCP_PROTECTED_AUDIOBOOK,
            "lcpdf" => &LCP_PROTECTED_PDF,
            "lcpl" => &LCP_LICENSE_DOCUMENT,
            "bmp" => &BMP,
            "gif" => &GIF,
            "jpg" | "jpeg" => &JPEG,
            "png" => &PNG,
            "svg" => &SVG,
            "tif" | "tiff" => &TIFF,
            "txt" => &TEXT,
            _ => return None,
        };
        Some(media_type)
    }
}
