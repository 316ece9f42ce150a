//! The immutable location table behind the world-map widget.
//!
//! Locations are configuration data: parsed once at startup from an embedded
//! JSON document and never mutated afterwards. Regions on the map reference
//! locations by id; an id that fails to resolve is tolerated as a silent
//! lookup miss rather than an error.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::Deserialize;
use thiserror::Error;

/// Built-in location records shipped with the app.
const BUILTIN_LOCATIONS: &str = include_str!("../data/locations.json");

/// A single place the portfolio owner studied or worked at.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Location {
    /// Stable short key, e.g. a country slug. Regions bind to this.
    pub id: String,
    /// Display name, e.g. "Joensuu, Finland".
    pub name: String,
    pub institution: String,
    /// Human-readable date range, e.g. "May 2025 - Sep 2025".
    pub period: String,
    /// Role or degree label.
    pub role: String,
    /// Free-text detail shown in the disclosure.
    pub details: String,
    /// Lowercased terms the pulse filter matches against content items.
    pub keywords: Vec<String>,
}

/// Errors from loading a location table.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to parse location table: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate location id: {0}")]
    DuplicateId(String),
}

/// Immutable lookup table from location id to record.
#[derive(Debug, Clone, Default)]
pub struct LocationTable {
    entries: BTreeMap<String, Location>,
}

impl LocationTable {
    /// Parses a table from a JSON array of location records.
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        let records: Vec<Location> = serde_json::from_str(json)?;
        let mut entries = BTreeMap::new();
        for record in records {
            let id = record.id.clone();
            if entries.insert(id.clone(), record).is_some() {
                return Err(TableError::DuplicateId(id));
            }
        }
        Ok(Self { entries })
    }

    /// Returns the table built from the embedded location data.
    ///
    /// Parsed once; the embedded document is validated by tests, so a parse
    /// failure here is a packaging bug.
    pub fn builtin() -> &'static Self {
        static TABLE: OnceLock<LocationTable> = OnceLock::new();
        TABLE.get_or_init(|| {
            LocationTable::from_json(BUILTIN_LOCATIONS)
                .unwrap_or_else(|e| {
                    tracing::error!("embedded location table is invalid: {e}");
                    LocationTable::default()
                })
        })
    }

    /// Looks up a location by id.
    pub fn get(&self, id: &str) -> Option<&Location> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Iterates locations in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Location> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_parses() {
        let table = LocationTable::builtin();
        assert_eq!(table.len(), 4);
        for id in ["canada", "netherlands", "finland", "china"] {
            assert!(table.contains(id), "missing builtin location {id}");
        }
    }

    #[test]
    fn finland_record_fields() {
        let finland = LocationTable::builtin().get("finland").unwrap();
        assert_eq!(finland.name, "Joensuu, Finland");
        assert_eq!(finland.institution, "Eastern Finland University");
        assert_eq!(finland.period, "May 2025 - Sep 2025");
        assert!(!finland.details.is_empty());
        assert!(!finland.keywords.is_empty());
    }

    #[test]
    fn unknown_id_is_a_miss() {
        let table = LocationTable::builtin();
        assert!(table.get("atlantis").is_none());
        assert!(!table.contains("atlantis"));
    }

    #[test]
    fn duplicate_ids_rejected() {
        let json = r#"[
            {"id": "x", "name": "A", "institution": "", "period": "", "role": "", "details": "", "keywords": []},
            {"id": "x", "name": "B", "institution": "", "period": "", "role": "", "details": "", "keywords": []}
        ]"#;
        assert!(matches!(
            LocationTable::from_json(json),
            Err(TableError::DuplicateId(_))
        ));
    }

    #[test]
    fn malformed_json_rejected() {
        assert!(matches!(
            LocationTable::from_json("not json"),
            Err(TableError::Parse(_))
        ));
    }
}
