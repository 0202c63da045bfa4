//! Record types as they arrive from the source and as they are displayed.

use super::name::{parse_name, NameParts};
use serde::{Deserialize, Serialize};

/// One entry of the source list, exactly as decoded from the wire.
///
/// The endpoint names the group identifier `listId`; `name` may be missing,
/// `null` or empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecord {
    pub id: i64,
    #[serde(rename = "listId")]
    pub group_id: i64,
    #[serde(default)]
    pub name: Option<String>,
}

impl RawRecord {
    pub fn new(id: i64, group_id: i64, name: Option<&str>) -> Self {
        Self {
            id,
            group_id,
            name: name.map(str::to_string),
        }
    }

    /// Whether this record carries a usable (present, non-empty) name.
    #[must_use]
    pub fn has_name(&self) -> bool {
        self.name.as_deref().is_some_and(|n| !n.is_empty())
    }
}

/// A record with a non-empty name, decomposed for sorting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedRecord {
    pub id: i64,
    pub group_id: i64,
    pub name: String,
    pub name_part: String,
    pub number_part: i64,
}

impl ParsedRecord {
    /// Build a parsed record from its raw counterpart.
    ///
    /// Returns `None` when the raw record has no name or an empty one.
    #[must_use]
    pub fn from_raw(raw: &RawRecord) -> Option<Self> {
        let name = raw.name.as_deref().filter(|n| !n.is_empty())?;
        let NameParts {
            name_part,
            number_part,
        } = parse_name(name);

        Some(Self {
            id: raw.id,
            group_id: raw.group_id,
            name: name.to_string(),
            name_part,
            number_part,
        })
    }
}
