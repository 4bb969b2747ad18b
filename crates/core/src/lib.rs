pub mod catalog_defaults;
pub mod domain;
pub mod error;

pub use domain::catalog::{CatalogOption, OptionCatalogs, OptionGroup, StaticCatalogs};
pub use domain::config::{PromptConfig, SectionKey};
pub use domain::translate::{NoTranslations, StaticTranslations, Translator};
pub use domain::update::SectionUpdate;
pub use error::{CoreError, Result};
