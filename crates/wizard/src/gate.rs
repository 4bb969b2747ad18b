use promptforge_core::SectionKey;

use crate::error::{Result, WizardError};
use crate::state::SectionStates;

/// Sections that must be finalized before a document can be generated, in
/// the order the wizard walks them.
pub const REQUIRED_SECTIONS: [SectionKey; 3] = [
    SectionKey::Project,
    SectionKey::SystemType,
    SectionKey::Objective,
];

pub struct CompletionGate;

impl CompletionGate {
    /// Required sections not yet finalized, in canonical order.
    pub fn missing(states: &SectionStates) -> Vec<SectionKey> {
        REQUIRED_SECTIONS
            .into_iter()
            .filter(|key| !states.is_finalized(*key))
            .collect()
    }

    pub fn is_ready(states: &SectionStates) -> bool {
        Self::missing(states).is_empty()
    }

    pub fn ensure_ready(states: &SectionStates) -> Result<()> {
        let missing = Self::missing(states);
        if missing.is_empty() {
            Ok(())
        } else {
            Err(WizardError::GenerationBlocked { missing })
        }
    }
}
