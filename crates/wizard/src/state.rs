//! Per-section editing states.
//!
//! Every section starts as a draft and can be finalized once its content
//! predicate holds. Finalization is what the completion gate counts;
//! resetting a section clears its model slice and returns it to draft.

use std::collections::BTreeMap;

use promptforge_core::{PromptConfig, SectionKey};
use serde::{Deserialize, Serialize};

/// Editing state of one wizard section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionState {
    #[default]
    Draft,
    Finalized,
}

impl SectionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionState::Draft => "draft",
            SectionState::Finalized => "finalized",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "draft" => Some(SectionState::Draft),
            "finalized" => Some(SectionState::Finalized),
            _ => None,
        }
    }
}

/// States for all sections of one session. Absent keys are drafts, so the
/// default value means "nothing finalized yet".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionStates {
    #[serde(default)]
    states: BTreeMap<SectionKey, SectionState>,
}

impl SectionStates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: SectionKey) -> SectionState {
        self.states.get(&key).copied().unwrap_or_default()
    }

    pub fn is_finalized(&self, key: SectionKey) -> bool {
        self.get(key) == SectionState::Finalized
    }

    /// Set a section's state. Drafts are stored implicitly.
    pub fn set(&mut self, key: SectionKey, state: SectionState) {
        match state {
            SectionState::Draft => {
                self.states.remove(&key);
            }
            SectionState::Finalized => {
                self.states.insert(key, state);
            }
        }
    }

    pub fn finalized_keys(&self) -> Vec<SectionKey> {
        SectionKey::ALL
            .into_iter()
            .filter(|key| self.is_finalized(*key))
            .collect()
    }
}

/// Whether a section has enough content to be finalized. `Err` carries the
/// reason shown to the user.
pub fn finalize_requirement(key: SectionKey, config: &PromptConfig) -> Result<(), String> {
    match key {
        SectionKey::Project => {
            if config.project.title.trim().is_empty() {
                Err("project title is required".to_string())
            } else {
                Ok(())
            }
        }
        SectionKey::SystemType => {
            if config.system_type.is_populated() {
                Ok(())
            } else {
                Err("select a system type or describe one".to_string())
            }
        }
        SectionKey::Objective => {
            let section = &config.objective;
            if !section.primary_objective.trim().is_empty() || section.additional.has_content() {
                Ok(())
            } else {
                Err("define a primary objective or pick at least one objective".to_string())
            }
        }
        SectionKey::Requirements => {
            populated(config.requirements.is_populated(), "add at least one requirement")
        }
        SectionKey::Features => {
            populated(config.features.is_populated(), "select at least one feature")
        }
        SectionKey::UxUi => populated(
            config.uxui.is_populated(),
            "make at least one UX/UI choice",
        ),
        SectionKey::Stack => populated(
            config.stack.is_populated(),
            "pick at least one technology",
        ),
        SectionKey::Security => populated(
            config.security.is_populated(),
            "select at least one security measure",
        ),
        SectionKey::CodeStructure => populated(
            config.code_structure.is_populated(),
            "make at least one code structure choice",
        ),
        SectionKey::Scalability => populated(
            config.scalability.is_populated(),
            "select at least one scalability or performance feature",
        ),
        // Optional sections: an empty answer is a valid answer.
        SectionKey::Restrictions | SectionKey::Integrations => Ok(()),
    }
}

fn populated(ok: bool, reason: &str) -> Result<(), String> {
    if ok {
        Ok(())
    } else {
        Err(reason.to_string())
    }
}
