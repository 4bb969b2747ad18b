//! Wizard session
//!
//! One in-progress project configuration together with its per-section
//! editing states. The session applies updates, drives finalization and
//! resets, answers gate queries, and renders previews and documents
//! through the composer.

use std::sync::Arc;

use composer::{strip_objective_label, DocumentAssembler, EnhanceError, ObjectiveEnhancer};
use promptforge_core::{OptionCatalogs, PromptConfig, SectionKey, SectionUpdate, Translator};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::apply::UpdateApplier;
use crate::error::{Result, WizardError};
use crate::gate::CompletionGate;
use crate::state::{finalize_requirement, SectionState, SectionStates};

/// How the enhancement step ended for one generated document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnhancementOutcome {
    /// Enhanced text was used.
    Applied,
    /// There was nothing to enhance.
    SkippedEmpty,
    /// The enhancer failed; the output uses the raw text.
    Failed(EnhanceError),
}

/// A rendered document plus how enhancement went. Enhancement failures
/// degrade to the un-enhanced document instead of failing generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDocument {
    pub text: String,
    pub enhancement: EnhancementOutcome,
}

/// Serializable view of a session for saving and resuming drafts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WizardSnapshot {
    pub id: Uuid,
    #[serde(default)]
    pub model: PromptConfig,
    #[serde(default)]
    pub states: SectionStates,
}

pub struct WizardSession {
    id: Uuid,
    model: PromptConfig,
    states: SectionStates,
    catalogs: Arc<dyn OptionCatalogs>,
    translator: Arc<dyn Translator>,
}

impl WizardSession {
    pub fn new(catalogs: Arc<dyn OptionCatalogs>, translator: Arc<dyn Translator>) -> Self {
        let id = Uuid::new_v4();
        debug!("Created wizard session {}", id);
        Self {
            id,
            model: PromptConfig::default(),
            states: SectionStates::new(),
            catalogs,
            translator,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn config(&self) -> &PromptConfig {
        &self.model
    }

    pub fn section_state(&self, key: SectionKey) -> SectionState {
        self.states.get(key)
    }

    pub fn states(&self) -> &SectionStates {
        &self.states
    }

    /// Apply a section update. The update is validated against a scratch
    /// copy and swapped in on success, so a rejected update leaves the
    /// model exactly as it was.
    pub fn update_section(&mut self, update: SectionUpdate) -> Result<()> {
        let key = update.key();
        let mut next = self.model.clone();
        UpdateApplier::new(self.catalogs.as_ref()).apply(&mut next, update)?;
        self.model = next;
        debug!("Applied {} update to session {}", key, self.id);
        Ok(())
    }

    /// Finalize a section. A no-op when already finalized; otherwise the
    /// section must satisfy its content predicate.
    pub fn finalize_section(&mut self, key: SectionKey) -> Result<SectionState> {
        if self.states.is_finalized(key) {
            debug!("Section {} already finalized in session {}", key, self.id);
            return Ok(SectionState::Finalized);
        }
        finalize_requirement(key, &self.model)
            .map_err(|reason| WizardError::incomplete(key, reason))?;
        self.states.set(key, SectionState::Finalized);
        info!("Finalized section {} in session {}", key, self.id);
        Ok(SectionState::Finalized)
    }

    /// Clear a section back to its defaults and reopen it as a draft.
    pub fn reset_section(&mut self, key: SectionKey) {
        self.model.reset_section(key);
        self.states.set(key, SectionState::Draft);
        info!("Reset section {} in session {}", key, self.id);
    }

    /// Required sections still blocking generation, in wizard order.
    pub fn missing_required_sections(&self) -> Vec<SectionKey> {
        CompletionGate::missing(&self.states)
    }

    pub fn is_ready(&self) -> bool {
        CompletionGate::is_ready(&self.states)
    }

    /// Live preview: the same renderer as `generate`, without the gate.
    pub fn preview(&self) -> String {
        self.assembler().assemble(&self.model, None)
    }

    /// Render the final document. Requires the gate to pass.
    pub fn generate(&self) -> Result<String> {
        CompletionGate::ensure_ready(&self.states)?;
        let text = self.assembler().assemble(&self.model, None);
        info!("Generated document for session {} ({} bytes)", self.id, text.len());
        Ok(text)
    }

    /// Render the final document with the primary objective run through an
    /// enhancer. Enhancer failures degrade to the raw objective; the
    /// outcome reports what happened.
    pub async fn generate_enhanced(
        &self,
        enhancer: &dyn ObjectiveEnhancer,
    ) -> Result<GeneratedDocument> {
        CompletionGate::ensure_ready(&self.states)?;

        let primary = self.model.objective.primary_objective.trim().to_string();
        if primary.is_empty() {
            return Ok(GeneratedDocument {
                text: self.assembler().assemble(&self.model, None),
                enhancement: EnhancementOutcome::SkippedEmpty,
            });
        }

        let (enhanced, outcome) = match enhancer.enhance(&primary).await {
            Ok(text) if !strip_objective_label(&text).is_empty() => {
                (Some(text), EnhancementOutcome::Applied)
            }
            Ok(_) => {
                warn!(
                    "Objective enhancement returned no usable text for session {}",
                    self.id
                );
                (None, EnhancementOutcome::Failed(EnhanceError::EmptyResponse))
            }
            Err(err) => {
                warn!(
                    "Objective enhancement failed for session {}: {}",
                    self.id, err
                );
                (None, EnhancementOutcome::Failed(err))
            }
        };

        let text = self.assembler().assemble(&self.model, enhanced.as_deref());
        info!("Generated document for session {} ({} bytes)", self.id, text.len());
        Ok(GeneratedDocument {
            text,
            enhancement: outcome,
        })
    }

    /// Run an already-rendered document through the enhancer as a whole.
    /// Never fails: on error the original text comes back with the error
    /// carried in the outcome.
    pub async fn enhance_document(
        &self,
        enhancer: &dyn ObjectiveEnhancer,
        text: &str,
    ) -> (String, EnhancementOutcome) {
        if text.trim().is_empty() {
            return (text.to_string(), EnhancementOutcome::SkippedEmpty);
        }
        match enhancer.enhance(text).await {
            Ok(enhanced) if !enhanced.trim().is_empty() => {
                (enhanced, EnhancementOutcome::Applied)
            }
            Ok(_) => (
                text.to_string(),
                EnhancementOutcome::Failed(EnhanceError::EmptyResponse),
            ),
            Err(err) => {
                warn!(
                    "Document enhancement failed for session {}: {}",
                    self.id, err
                );
                (text.to_string(), EnhancementOutcome::Failed(err))
            }
        }
    }

    pub fn snapshot(&self) -> WizardSnapshot {
        WizardSnapshot {
            id: self.id,
            model: self.model.clone(),
            states: self.states.clone(),
        }
    }

    pub fn restore(
        snapshot: WizardSnapshot,
        catalogs: Arc<dyn OptionCatalogs>,
        translator: Arc<dyn Translator>,
    ) -> Self {
        debug!("Restored wizard session {}", snapshot.id);
        Self {
            id: snapshot.id,
            model: snapshot.model,
            states: snapshot.states,
            catalogs,
            translator,
        }
    }

    fn assembler(&self) -> DocumentAssembler<'_> {
        DocumentAssembler::new(self.catalogs.as_ref(), self.translator.as_ref())
    }
}
