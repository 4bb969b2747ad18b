pub mod assembler;
pub mod enhance;
pub mod labels;
pub mod template;

pub use assembler::DocumentAssembler;
pub use enhance::{strip_objective_label, EnhanceError, ObjectiveEnhancer};
pub use labels::{humanize_identifier, LabelResolver};
