pub mod apply;
pub mod error;
pub mod gate;
pub mod session;
pub mod state;

pub use error::{Result, WizardError};
pub use gate::{CompletionGate, REQUIRED_SECTIONS};
pub use session::{EnhancementOutcome, GeneratedDocument, WizardSession, WizardSnapshot};
pub use state::{SectionState, SectionStates};
