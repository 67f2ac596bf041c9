//! Media type parsing, matching and classification.
//!
//! A [`MediaType`] is the normalized form of a content-type string such as
//! `text/html;charset=utf-8`: lowercased type/subtype, lowercased parameter
//! names, upper-cased `charset` value. It supports wildcard-aware containment
//! tests (`text/*` contains `text/html`), structured-syntax suffix extraction
//! (`application/epub+zip` → `+zip`), and a set of classification predicates
//! (`is_zip`, `is_opds`, …) used to route documents to the right handler.
//!
//! Parsing covers practical content-type strings only: bare tokens,
//! `;`-separated `name=value` parameters and surrounding whitespace. The full
//! RFC 7231 quoted-string and comment grammar is out of scope.

mod classify;
mod error;
mod mediatype;
pub mod registry;

pub use error::{InvalidMediaType, Result};
pub use mediatype::MediaType;
