//! Text identifiers.
//!
//! Ids come from URL path segments, so anything goes: a segment written as
//! a canonical unsigned integer (digits only, no sign, no leading zero) is a
//! numeric id, every other non-empty segment is a named id. `"05"` and
//! `"+5"` are therefore named ids distinct from `5`, and `Display` always
//! reproduces the segment. Numeric ids drive auto-assignment in the store.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{CoreError, Result};

/// Identifier of a stored text.
///
/// Ordering puts numeric ids first, in numeric order, then named ids in
/// lexicographic order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TextId {
    Numeric(u64),
    Named(String),
}

impl TextId {
    /// Parse an id from a path segment.
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Err(CoreError::InvalidId("id must not be empty".to_string()));
        }
        if raw.trim() != raw {
            return Err(CoreError::InvalidId(format!(
                "id must not have surrounding whitespace: {raw:?}"
            )));
        }
        Ok(match canonical_number(raw) {
            Some(n) => TextId::Numeric(n),
            None => TextId::Named(raw.to_string()),
        })
    }

    /// The numeric value, if this is a numeric id.
    pub fn as_numeric(&self) -> Option<u64> {
        match self {
            TextId::Numeric(n) => Some(*n),
            TextId::Named(_) => None,
        }
    }
}

/// `raw` as a `u64` when it is written the way `u64` displays.
fn canonical_number(raw: &str) -> Option<u64> {
    let digits_only = raw.bytes().all(|b| b.is_ascii_digit());
    let leading_zero = raw.len() > 1 && raw.starts_with('0');
    if !digits_only || leading_zero {
        return None;
    }
    raw.parse().ok()
}

impl FromStr for TextId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for TextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextId::Numeric(n) => write!(f, "{n}"),
            TextId::Named(name) => f.write_str(name),
        }
    }
}

impl From<u64> for TextId {
    fn from(n: u64) -> Self {
        TextId::Numeric(n)
    }
}

impl Serialize for TextId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            TextId::Numeric(n) => serializer.serialize_u64(*n),
            TextId::Named(name) => serializer.serialize_str(name),
        }
    }
}

/// Wire form: a JSON number or a string. Strings go through [`TextId::parse`]
/// so `"7"` and `7` name the same text.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawTextId {
    Number(u64),
    Text(String),
}

impl<'de> Deserialize<'de> for TextId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        match RawTextId::deserialize(deserializer)? {
            RawTextId::Number(n) => Ok(TextId::Numeric(n)),
            RawTextId::Text(s) => TextId::parse(&s).map_err(serde::de::Error::custom),
        }
    }
}
