//! Category classification by name substring
//!
//! Legacy records carry no body type; they are bucketed by looking for a
//! known model name inside the display name. Records with an explicit
//! `body_type` never consult this table.

use serde::{Deserialize, Serialize};

use super::vehicle::{BodyType, Vehicle};

/// Mapping from body type to the model-name substrings that qualify for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationTable {
    entries: Vec<(BodyType, Vec<String>)>,
}

impl Default for ClassificationTable {
    fn default() -> Self {
        Self::legacy()
    }
}

impl ClassificationTable {
    /// The table the listing page has always used
    pub fn legacy() -> Self {
        Self::from_entries(vec![
            (BodyType::Suv, vec!["Fortuner", "Pajero"]),
            (BodyType::Mpv, vec!["Avanza", "Xenia", "Ertiga", "Alphard"]),
            (BodyType::Sedan, vec!["Civic"]),
            (BodyType::Hatchback, vec!["HR-V"]),
        ])
    }

    pub fn from_entries<S: Into<String>>(entries: Vec<(BodyType, Vec<S>)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(body, names)| (body, names.into_iter().map(Into::into).collect()))
                .collect(),
        }
    }

    /// Substrings registered for a body type, if any
    pub fn substrings(&self, body: BodyType) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(b, _)| *b == body)
            .map(|(_, names)| names.as_slice())
    }

    /// Whether a display name matches any substring of the given body type.
    /// Matching is case-sensitive.
    pub fn name_matches(&self, body: BodyType, name: &str) -> Option<bool> {
        self.substrings(body)
            .map(|names| names.iter().any(|model| name.contains(model.as_str())))
    }

    /// First body type whose substrings match the name
    pub fn classify_name(&self, name: &str) -> Option<BodyType> {
        self.entries
            .iter()
            .find(|(_, names)| names.iter().any(|model| name.contains(model.as_str())))
            .map(|(body, _)| *body)
    }

    /// Whether the vehicle belongs to `body`.
    ///
    /// Returns `None` when the vehicle has no explicit body type and the
    /// table has no entry for `body`; callers treat that as unconstrained.
    pub fn belongs_to(&self, vehicle: &Vehicle, body: BodyType) -> Option<bool> {
        match vehicle.body_type {
            Some(explicit) => Some(explicit == body),
            None => self.name_matches(body, &vehicle.name),
        }
    }

    /// Resolved body type: explicit first, then by name
    pub fn body_type_of(&self, vehicle: &Vehicle) -> Option<BodyType> {
        vehicle.body_type.or_else(|| self.classify_name(&vehicle.name))
    }
}
