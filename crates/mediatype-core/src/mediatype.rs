//! The media type value: parsing, normalization, rendering and matching.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use encoding_rs::Encoding;
use log::debug;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{InvalidMediaType, Result};

/// A normalized media type, e.g. `application/epub+zip` or
/// `text/html;charset=UTF-8`.
///
/// Instances are immutable and only built through [`MediaType::parse`], so the
/// normalized form is the only form that ever exists: type, subtype and
/// parameter names are ASCII-lowercased and the `charset` value is
/// upper-cased. All operations are pure reads; values can be shared across
/// threads freely.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaType {
    type_: String,
    subtype: String,
    parameters: BTreeMap<String, String>,
}

impl MediaType {
    /// Parse a raw content-type string.
    ///
    /// Grammar: `type "/" subtype *( OWS ";" OWS name "=" value )`, with
    /// optional whitespace around the whole string and each segment. Quoted
    /// parameter values are not supported and are kept as literal text.
    ///
    /// Duplicate parameter names (after case folding): the last occurrence
    /// wins.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let fail = || InvalidMediaType(trimmed.to_string());

        // Everything before the first `;` must be `type/subtype`.
        let (main, params) = match trimmed.split_once(';') {
            Some((main, rest)) => (main, Some(rest)),
            None => (trimmed, None),
        };

        let (type_, subtype) = main.split_once('/').ok_or_else(fail)?;
        let type_ = type_.trim();
        let subtype = subtype.trim();
        if type_.is_empty() || subtype.is_empty() || subtype.contains('/') {
            debug!("rejected media type with malformed type/subtype: {trimmed:?}");
            return Err(fail());
        }

        let mut parameters = BTreeMap::new();
        for segment in params.into_iter().flat_map(|p| p.split(';')) {
            let segment = segment.trim();
            if segment.is_empty() {
                continue;
            }
            let Some((name, value)) = segment.split_once('=') else {
                debug!("rejected media type with malformed parameter {segment:?}");
                return Err(fail());
            };
            let name = name.trim().to_ascii_lowercase();
            let mut value = value.trim().to_string();
            // Charset labels are ASCII; the fold must stay locale-independent.
            if name == "charset" {
                value = value.to_ascii_uppercase();
            }
            parameters.insert(name, value);
        }

        Ok(Self {
            type_: type_.to_ascii_lowercase(),
            subtype: subtype.to_ascii_lowercase(),
            parameters,
        })
    }

    /// Build a known-valid media type from already-normalized tokens.
    pub(crate) fn constant(type_: &str, subtype: &str, parameters: &[(&str, &str)]) -> Self {
        Self {
            type_: type_.to_string(),
            subtype: subtype.to_string(),
            parameters: parameters
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        }
    }

    /// The top-level type, lowercase, or `*`.
    pub fn type_(&self) -> &str {
        &self.type_
    }

    /// The subtype, lowercase, or `*`. May contain `+`-separated
    /// structured-syntax segments, e.g. `atom+xml`.
    pub fn subtype(&self) -> &str {
        &self.subtype
    }

    /// All parameters, keyed by lowercase name.
    pub fn parameters(&self) -> &BTreeMap<String, String> {
        &self.parameters
    }

    /// The value of a single parameter, by lowercase name.
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters.get(name).map(String::as_str)
    }

    /// The structured-syntax suffix of the subtype, including the leading `+`.
    ///
    /// Only the last segment counts: `foo/bar+json+zip` yields `+zip`, and
    /// `application/zip` has no suffix at all.
    pub fn structured_syntax_suffix(&self) -> Option<&str> {
        self.subtype.rfind('+').map(|i| &self.subtype[i..])
    }

    /// The encoding named by the `charset` parameter, if present and known.
    pub fn charset(&self) -> Option<&'static Encoding> {
        self.parameter("charset")
            .and_then(|label| Encoding::for_label(label.as_bytes()))
    }

    /// Whether `self`, used as a pattern, contains `other`.
    ///
    /// The pattern's type and subtype must each equal the candidate's or be
    /// the whole-token wildcard `*`, and every pattern parameter must appear
    /// in the candidate with an identical value. Extra candidate parameters
    /// are ignored.
    pub fn contains(&self, other: &MediaType) -> bool {
        if self.type_ != "*" && self.type_ != other.type_ {
            return false;
        }
        if self.subtype != "*" && self.subtype != other.subtype {
            return false;
        }
        self.parameters
            .iter()
            .all(|(name, value)| other.parameters.get(name) == Some(value))
    }

    /// [`contains`](Self::contains) with a raw candidate string; `false` when
    /// the string does not parse.
    pub fn contains_str(&self, other: &str) -> bool {
        MediaType::parse(other).map_or(false, |other| self.contains(&other))
    }

    /// Whether `self` is an instance of the more general `pattern`.
    /// Equivalent to `pattern.contains(self)`.
    pub fn is_part_of(&self, pattern: &MediaType) -> bool {
        pattern.contains(self)
    }

    /// [`is_part_of`](Self::is_part_of) with a raw pattern string; `false`
    /// when the string does not parse.
    pub fn is_part_of_str(&self, pattern: &str) -> bool {
        MediaType::parse(pattern).map_or(false, |pattern| self.is_part_of(&pattern))
    }
}

/// Canonical rendering: `type/subtype;name=value`, parameters sorted
/// ascending by name, no whitespace.
impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.type_, self.subtype)?;
        for (name, value) in &self.parameters {
            write!(f, ";{name}={value}")?;
        }
        Ok(())
    }
}

impl FromStr for MediaType {
    type Err = InvalidMediaType;

    fn from_str(s: &str) -> Result<Self> {
        MediaType::parse(s)
    }
}

impl Serialize for MediaType {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MediaType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        MediaType::parse(&raw).map_err(serde::de::Error::custom)
    }
}
