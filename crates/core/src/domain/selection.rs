use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Upper bound for every free-text "other" list.
pub const MAX_CUSTOM_ENTRIES: usize = 10;

/// Upper bound for the primary objective, in characters.
pub const MAX_PRIMARY_OBJECTIVE_LEN: usize = 150;

/// Upper bound for the custom color palette.
pub const MAX_CUSTOM_COLORS: usize = 4;

/// Reserved option id that routes a selection to its free-text companion.
pub fn is_other_sentinel(id: &str) -> bool {
    id.eq_ignore_ascii_case("other")
}

/// Trim entries, drop blanks, dedup keeping the first occurrence.
fn dedup_trimmed(values: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for value in values {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            continue;
        }
        if !out.iter().any(|v| v == trimmed) {
            out.push(trimmed.to_string());
        }
    }
    out
}

/// Normalize a free-text list: trim, drop blanks, dedup keeping the first
/// occurrence, then reject wholesale when more than `max` entries remain.
pub fn bounded_list(field: &'static str, entries: Vec<String>, max: usize) -> Result<Vec<String>> {
    let cleaned = dedup_trimmed(entries);
    if cleaned.len() > max {
        return Err(CoreError::CustomEntryLimit { field, max });
    }
    Ok(cleaned)
}

/// A multi-choice selection backed by an option catalog, with a free-text
/// companion list. Committed custom entries are merged into `selected` so
/// downstream consumers see one unified set.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct MultiSelect {
    /// Selected option ids in selection order. May contain merged custom
    /// entries and the "other" sentinel.
    #[serde(default)]
    pub selected: Vec<String>,
    /// Free-text entries committed through the "other" path.
    #[serde(default)]
    pub custom: Vec<String>,
}

impl MultiSelect {
    /// Replace the selected set. Order is preserved, duplicates are
    /// dropped, and current custom entries are re-merged.
    pub fn set_selected(&mut self, ids: Vec<String>) {
        let mut next = dedup_trimmed(ids);
        for entry in &self.custom {
            if !next.contains(entry) {
                next.push(entry.clone());
            }
        }
        self.selected = next;
    }

    /// Replace the custom list and merge it into the selected set. Entries
    /// carried over from a previous commit are removed first, so deleting
    /// a custom entry also removes it from `selected`.
    pub fn set_custom(&mut self, field: &'static str, entries: Vec<String>) -> Result<()> {
        let next = bounded_list(field, entries, MAX_CUSTOM_ENTRIES)?;
        let previous = std::mem::take(&mut self.custom);
        self.selected
            .retain(|id| !previous.contains(id) || next.contains(id));
        for entry in &next {
            if !self.selected.contains(entry) {
                self.selected.push(entry.clone());
            }
        }
        self.custom = next;
        Ok(())
    }

    /// Selected ids that should be resolved through the catalog: the
    /// sentinel and merged custom texts are excluded.
    pub fn catalog_ids(&self) -> Vec<&str> {
        self.selected
            .iter()
            .filter(|id| !is_other_sentinel(id) && !self.custom.contains(*id))
            .map(String::as_str)
            .collect()
    }

    /// The full set of concrete values: selected ids plus custom entries,
    /// sentinel excluded, first occurrence wins. Tolerates states where
    /// the merge invariant does not hold (data loaded from outside).
    pub fn unified(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for value in self.selected.iter().chain(self.custom.iter()) {
            if is_other_sentinel(value) {
                continue;
            }
            if !out.contains(&value.as_str()) {
                out.push(value.as_str());
            }
        }
        out
    }

    /// True when anything concrete is selected. A bare sentinel with no
    /// custom entries is not content.
    pub fn has_content(&self) -> bool {
        self.selected.iter().any(|id| !is_other_sentinel(id)) || !self.custom.is_empty()
    }
}

/// A single-choice selection with a free-text companion list. The
/// companion never merges into the selection; it surfaces when the
/// "other" sentinel is chosen.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct SingleSelect {
    #[serde(default)]
    pub selected: Option<String>,
    #[serde(default)]
    pub custom: Vec<String>,
}

impl SingleSelect {
    /// Replace the selection. A blank id clears it.
    pub fn select(&mut self, id: impl Into<String>) {
        let id = id.into();
        let trimmed = id.trim();
        self.selected = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
    }

    pub fn set_custom(&mut self, field: &'static str, entries: Vec<String>) -> Result<()> {
        self.custom = bounded_list(field, entries, MAX_CUSTOM_ENTRIES)?;
        Ok(())
    }

    pub fn other_selected(&self) -> bool {
        self.selected.as_deref().is_some_and(is_other_sentinel)
    }

    /// The id to resolve through the catalog, when a concrete option is
    /// selected.
    pub fn catalog_id(&self) -> Option<&str> {
        self.selected.as_deref().filter(|id| !is_other_sentinel(id))
    }

    pub fn has_content(&self) -> bool {
        self.catalog_id().is_some() || !self.custom.is_empty()
    }
}

/// A group of boolean flags identified by option ids, with a free-text
/// companion list for values outside the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct FlagGroup {
    /// Ids of the enabled flags, in the order they were enabled.
    #[serde(default)]
    pub enabled: Vec<String>,
    #[serde(default)]
    pub other: Vec<String>,
}

impl FlagGroup {
    pub fn set_enabled(&mut self, ids: Vec<String>) {
        self.enabled = dedup_trimmed(ids);
    }

    pub fn set_flag(&mut self, id: &str, on: bool) {
        if on {
            if !self.enabled.iter().any(|e| e == id) {
                self.enabled.push(id.to_string());
            }
        } else {
            self.enabled.retain(|e| e != id);
        }
    }

    pub fn set_other(&mut self, field: &'static str, entries: Vec<String>) -> Result<()> {
        self.other = bounded_list(field, entries, MAX_CUSTOM_ENTRIES)?;
        Ok(())
    }

    /// Enabled flag ids with the sentinel excluded.
    pub fn flag_ids(&self) -> Vec<&str> {
        self.enabled
            .iter()
            .filter(|id| !is_other_sentinel(id))
            .map(String::as_str)
            .collect()
    }

    pub fn has_content(&self) -> bool {
        self.enabled.iter().any(|id| !is_other_sentinel(id)) || !self.other.is_empty()
    }
}
