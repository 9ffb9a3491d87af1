// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for holocron.
//!
//! Records arrive from the API with resource-dependent schemas and no
//! shared base beyond an optional canonical `url` and a display name
//! under `name` or `title`. They are kept as generic string-keyed value
//! maps; the description renderer builds its own typed view per
//! resource on top of the accessors here.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::i18n::FALLBACK;

/// Sentinel returned when an id cannot be derived from a record URL.
pub const UNKNOWN_ID: &str = "unknown";

/// The six resource types served by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    People,
    Films,
    Planets,
    Starships,
    Vehicles,
    Species,
}

impl ResourceType {
    /// API path segment for this resource.
    pub fn token(&self) -> &'static str {
        match self {
            ResourceType::People => "people",
            ResourceType::Films => "films",
            ResourceType::Planets => "planets",
            ResourceType::Starships => "starships",
            ResourceType::Vehicles => "vehicles",
            ResourceType::Species => "species",
        }
    }

    /// Parse an API token into a resource type.
    ///
    /// Returns `None` for unrecognised tokens.
    pub fn parse(token: &str) -> Option<ResourceType> {
        match token {
            "people" => Some(ResourceType::People),
            "films" => Some(ResourceType::Films),
            "planets" => Some(ResourceType::Planets),
            "starships" => Some(ResourceType::Starships),
            "vehicles" => Some(ResourceType::Vehicles),
            "species" => Some(ResourceType::Species),
            _ => None,
        }
    }

    /// All resource types, in display order.
    pub fn all() -> &'static [ResourceType] {
        &[
            ResourceType::People,
            ResourceType::Films,
            ResourceType::Planets,
            ResourceType::Starships,
            ResourceType::Vehicles,
            ResourceType::Species,
        ]
    }

    /// pt-BR display label for this resource.
    pub fn label(&self) -> &'static str {
        match self {
            ResourceType::People => "Personagens",
            ResourceType::Films => "Filmes",
            ResourceType::Planets => "Planetas",
            ResourceType::Starships => "Naves",
            ResourceType::Vehicles => "Veículos",
            ResourceType::Species => "Espécies",
        }
    }

    /// The field this resource can be sorted by.
    pub fn sort_field(&self) -> &'static str {
        match self {
            ResourceType::People => "gender",
            ResourceType::Films => "release_date",
            ResourceType::Planets => "population",
            ResourceType::Starships => "cargo_capacity",
            ResourceType::Vehicles => "max_atmosphering_speed",
            ResourceType::Species => "average_height",
        }
    }
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Sort direction for a result collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// User-chosen ordering: field name plus direction.
///
/// An absent field means the collection keeps its original order.
#[derive(Debug, Clone)]
pub struct SortSpec {
    pub field: Option<String>,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: Option<String>, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// A spec that leaves the collection untouched.
    pub fn unsorted() -> Self {
        Self {
            field: None,
            direction: SortDirection::Ascending,
        }
    }
}

/// One item returned by a search query.
///
/// An opaque field-name → value map; values are strings, numbers, null,
/// or nested lists depending on the resource. Missing fields and the
/// literal `"unknown"` both mean "value not recorded" upstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Raw field access by name.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// String field access; non-string values read as absent.
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.field(name) {
            Some(Value::String(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Display name: `name`, else `title`, else the pt-BR fallback.
    pub fn display_name(&self) -> &str {
        ["name", "title"]
            .iter()
            .find_map(|f| self.text(f).filter(|s| !s.is_empty()))
            .unwrap_or(FALLBACK)
    }

    /// Canonical resource URL, when present.
    pub fn url(&self) -> Option<&str> {
        self.text("url")
    }

    /// Short identifier derived from the canonical URL.
    pub fn id(&self) -> String {
        extract_id(self.url())
    }
}

/// Derive a record's short id from its canonical resource URL.
///
/// The id is the last non-empty `/`-segment, so a trailing slash is
/// irrelevant. Absent or empty URLs yield `"unknown"`.
pub fn extract_id(url: Option<&str>) -> String {
    let Some(url) = url else {
        return UNKNOWN_ID.to_string();
    };
    url.split('/')
        .filter(|segment| !segment.is_empty())
        .next_back()
        .unwrap_or(UNKNOWN_ID)
        .to_string()
}

/// One page of search results as returned by the API.
///
/// Only `results` is consumed; `next`/`previous` are passed through
/// untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchPage {
    #[serde(default)]
    pub results: Vec<Record>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
}
