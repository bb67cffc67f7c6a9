use std::fmt;

use serde::{Deserialize, Serialize};

/// A saved named coordinate pair.
///
/// Serialized as `{"name","lat","lon","url"?,"ts"}`; `url` is omitted when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Epoch milliseconds, assigned by the store.
    pub ts: i64,
}

impl Bookmark {
    /// Returns the identifier of this entry.
    pub fn id(&self) -> EntryId {
        EntryId::of(&self.name, self.lat, self.lon)
    }

    /// Returns true when both entries share the `(name, lat, lon)` triple.
    pub fn same_place(&self, name: &str, lat: f64, lon: f64) -> bool {
        self.name == name && self.lat == lat && self.lon == lon
    }
}

/// A bookmark candidate as supplied by callers, before a timestamp is assigned.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NewBookmark {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub lon: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl NewBookmark {
    pub fn new(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            name: name.into(),
            lat,
            lon,
            url: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn id(&self) -> EntryId {
        EntryId::of(&self.name, self.lat, self.lon)
    }

    /// Stamps the candidate, producing a storable entry.
    pub fn stamp(self, ts: i64) -> Bookmark {
        Bookmark {
            name: self.name,
            lat: self.lat,
            lon: self.lon,
            url: self.url,
            ts,
        }
    }
}

/// Stable row identifier derived from the `(name, lat, lon)` identity key.
///
/// Two entries with the same identifier are the same logical favorite.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    pub fn of(name: &str, lat: f64, lon: f64) -> Self {
        EntryId(format!("{}|{}|{}", name, lat, lon))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EntryId {
    fn from(s: &str) -> Self {
        EntryId(s.to_string())
    }
}

impl From<String> for EntryId {
    fn from(s: String) -> Self {
        EntryId(s)
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Successful outcome of adding a candidate to the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new entry was prepended.
    Added { size: usize },
    /// An entry with the same identity key was refreshed.
    Updated { size: usize },
}

impl AddOutcome {
    pub fn size(&self) -> usize {
        match self {
            AddOutcome::Added { size } | AddOutcome::Updated { size } => *size,
        }
    }
}

/// Wire shape of an add result: `{ok, size?, added?, updated?, reason?}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AddResult {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl From<&Result<AddOutcome, super::errors::FavoriteError>> for AddResult {
    fn from(result: &Result<AddOutcome, super::errors::FavoriteError>) -> Self {
        match result {
            Ok(AddOutcome::Added { size }) => AddResult {
                ok: true,
                size: Some(*size),
                added: Some(true),
                ..Default::default()
            },
            Ok(AddOutcome::Updated { size }) => AddResult {
                ok: true,
                size: Some(*size),
                updated: Some(true),
                ..Default::default()
            },
            Err(e) => AddResult {
                ok: false,
                reason: Some(e.reason().to_string()),
                ..Default::default()
            },
        }
    }
}

/// The transient "currently focused" map selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub lon: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl From<Selection> for NewBookmark {
    fn from(s: Selection) -> Self {
        NewBookmark {
            name: s.name,
            lat: s.lat,
            lon: s.lon,
            url: s.url,
        }
    }
}
