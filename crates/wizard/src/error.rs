use promptforge_core::{CoreError, SectionKey};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WizardError {
    #[error(transparent)]
    Validation(#[from] CoreError),

    #[error("Section {section} cannot be finalized: {reason}")]
    SectionIncomplete { section: SectionKey, reason: String },

    #[error("Document generation blocked, sections not finalized: {}", join_keys(.missing))]
    GenerationBlocked { missing: Vec<SectionKey> },
}

impl WizardError {
    /// Create a section-incomplete error.
    pub fn incomplete(section: SectionKey, reason: impl Into<String>) -> Self {
        Self::SectionIncomplete {
            section,
            reason: reason.into(),
        }
    }

    /// The first section blocking generation, when this is a gate error.
    /// Callers use it to jump the wizard back to that step.
    pub fn first_missing(&self) -> Option<SectionKey> {
        match self {
            Self::GenerationBlocked { missing } => missing.first().copied(),
            _ => None,
        }
    }
}

fn join_keys(keys: &[SectionKey]) -> String {
    keys.iter()
        .map(|key| key.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, WizardError>;
