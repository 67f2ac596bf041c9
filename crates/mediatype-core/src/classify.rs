//! Classification predicates over known type/subtype/suffix combinations.
//!
//! Each predicate is a containment check against the constant patterns below
//! plus, where relevant, a structured-syntax suffix check. The tables are
//! plain module statics so their contents stay visible and testable.

use once_cell::sync::Lazy;

use crate::MediaType;

static ZIP: Lazy<MediaType> = Lazy::new(|| MediaType::constant("application", "zip", &[]));

/// ZIP containers whose media type carries no `+zip` hint.
static ZIP_EXCEPTIONS: Lazy<[MediaType; 2]> = Lazy::new(|| {
    [
        MediaType::constant("application", "audiobook+lcp", &[]),
        MediaType::constant("application", "pdf+lcp", &[]),
    ]
});

static JSON: Lazy<MediaType> = Lazy::new(|| MediaType::constant("application", "json", &[]));

static OPDS_ATOM: Lazy<MediaType> =
    Lazy::new(|| MediaType::constant("application", "atom+xml", &[]));

static HTML: Lazy<[MediaType; 2]> = Lazy::new(|| {
    [
        MediaType::constant("text", "html", &[]),
        MediaType::constant("application", "xhtml+xml", &[]),
    ]
});

const OPDS_JSON_SUBTYPES: [&str; 2] = ["opds+json", "opds-publication+json"];
const BITMAP_SUBTYPES: [&str; 5] = ["bmp", "gif", "jpeg", "png", "tiff"];
const RWPM_SUBTYPES: [&str; 3] = ["audiobook+json", "divina+json", "webpub+json"];

impl MediaType {
    /// Whether the underlying container is a ZIP archive: a `+zip` suffix,
    /// `application/zip` itself, or one of the LCP types that are ZIP by
    /// specification without any hint in the name.
    pub fn is_zip(&self) -> bool {
        self.structured_syntax_suffix() == Some("+zip")
            || ZIP.contains(self)
            || ZIP_EXCEPTIONS.iter().any(|pattern| pattern.contains(self))
    }

    /// Whether the document is JSON: a `+json` suffix or `application/json`.
    pub fn is_json(&self) -> bool {
        self.structured_syntax_suffix() == Some("+json") || JSON.contains(self)
    }

    /// Whether this is an OPDS catalog or publication: an Atom feed carrying
    /// the `opds-catalog` profile, or one of the OPDS 2 JSON subtypes.
    ///
    /// The profile value is compared case-insensitively, unlike regular
    /// parameter matching.
    pub fn is_opds(&self) -> bool {
        (OPDS_ATOM.contains(self)
            && self
                .parameter("profile")
                .is_some_and(|profile| profile.eq_ignore_ascii_case("opds-catalog")))
            || OPDS_JSON_SUBTYPES.contains(&self.subtype())
    }

    /// Whether the document is HTML or XHTML.
    pub fn is_html(&self) -> bool {
        HTML.iter().any(|pattern| pattern.contains(self))
    }

    /// Whether the resource is a bitmap image, as opposed to vector formats
    /// like SVG.
    pub fn is_bitmap(&self) -> bool {
        self.type_() == "image" && BITMAP_SUBTYPES.contains(&self.subtype())
    }

    /// Whether the document is a Readium Web Publication Manifest.
    pub fn is_rwpm(&self) -> bool {
        RWPM_SUBTYPES.contains(&self.subtype())
    }
}
