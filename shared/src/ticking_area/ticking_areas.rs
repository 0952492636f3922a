use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::TickingAreaError;

// TickingAreaId
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TickingAreaId(String);

impl TickingAreaId {
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for TickingAreaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TickingAreaId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

// TickingAreas

/// The ordered list of ticking areas recorded in the world property.
///
/// Entries are kept exactly as stored, including `null` and empty strings left
/// behind by older writers. Use [`TickingAreas::ids`] to visit only the entries
/// that name a real area.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TickingAreas {
    entries: Vec<Option<TickingAreaId>>,
}

impl TickingAreas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes the raw property value. A missing or blank value is an empty list.
    pub fn from_property(raw: Option<&str>) -> Result<Self, TickingAreaError> {
        let Some(raw) = raw else {
            return Ok(Self::new());
        };
        if raw.trim().is_empty() {
            return Ok(Self::new());
        }
        serde_json::from_str(raw).map_err(|err| TickingAreaError::Malformed {
            reason: err.to_string(),
        })
    }

    /// Encodes the list for storage, refusing values longer than `max_length`.
    pub fn to_property(&self, max_length: usize) -> Result<String, TickingAreaError> {
        let raw = serde_json::to_string(self).map_err(|err| TickingAreaError::Malformed {
            reason: err.to_string(),
        })?;
        if raw.len() > max_length {
            return Err(TickingAreaError::TooLong {
                length: raw.len(),
                max_length,
            });
        }
        Ok(raw)
    }

    /// Every stored entry, in order, including null placeholders
    pub fn entries(&self) -> &[Option<TickingAreaId>] {
        &self.entries
    }

    /// Stored ids that name an area, skipping null and empty entries
    pub fn ids(&self) -> impl Iterator<Item = &TickingAreaId> {
        self.entries
            .iter()
            .filter_map(|entry| entry.as_ref())
            .filter(|id| !id.is_empty())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: &TickingAreaId) -> bool {
        self.ids().any(|stored| stored == id)
    }

    pub fn insert(&mut self, id: TickingAreaId) -> Result<(), TickingAreaError> {
        if self.contains(&id) {
            return Err(TickingAreaError::Duplicate {
                id: id.as_str().to_string(),
            });
        }
        self.entries.push(Some(id));
        Ok(())
    }

    /// Removes every entry equal to `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: &TickingAreaId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.as_ref() != Some(id));
        self.entries.len() != before
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
