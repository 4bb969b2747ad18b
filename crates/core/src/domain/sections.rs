use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::selection::{is_other_sentinel, FlagGroup, MultiSelect, SingleSelect};

/// Palette id that routes to the hand-picked color list.
pub const CUSTOM_PALETTE_ID: &str = "custom";

fn default_version() -> String {
    "1.0.0".to_string()
}

/// Free-form metadata about the project being described.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct ProjectInfo {
    /// Project title.
    #[serde(default)]
    pub title: String,
    /// Author or team name.
    #[serde(default)]
    pub author: String,
    /// Contact email.
    #[serde(default)]
    pub email: String,
    /// Project or repository URL.
    #[serde(default)]
    pub url: String,
    /// When the project was created, if known.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// When the project was last updated, if known.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Project version, "1.0.0" unless overridden.
    #[serde(default = "default_version")]
    pub version: String,
}

impl Default for ProjectInfo {
    fn default() -> Self {
        Self {
            title: String::new(),
            author: String::new(),
            email: String::new(),
            url: String::new(),
            created_at: None,
            updated_at: None,
            version: default_version(),
        }
    }
}

impl ProjectInfo {
    /// True when anything beyond the defaults has been entered. The
    /// version alone does not count, it always carries a default.
    pub fn is_populated(&self) -> bool {
        !self.title.trim().is_empty()
            || !self.author.trim().is_empty()
            || !self.email.trim().is_empty()
            || !self.url.trim().is_empty()
            || self.created_at.is_some()
            || self.updated_at.is_some()
    }
}

/// What kind of system is being built.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct SystemTypeSection {
    /// Selected system type id, possibly the "other" sentinel.
    #[serde(default)]
    pub selected: Option<String>,
    /// Free-text system type, used when the sentinel is selected.
    #[serde(default)]
    pub other_type: String,
}

impl SystemTypeSection {
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

    /// The id to resolve through the catalog, when a concrete type is
    /// selected.
    pub fn catalog_id(&self) -> Option<&str> {
        self.selected.as_deref().filter(|id| !is_other_sentinel(id))
    }

    /// The free-text type, when the sentinel is selected and the text is
    /// non-blank.
    pub fn other_text(&self) -> Option<&str> {
        if self.selected.as_deref().is_some_and(is_other_sentinel) {
            let trimmed = self.other_type.trim();
            (!trimmed.is_empty()).then_some(trimmed)
        } else {
            None
        }
    }

    pub fn is_populated(&self) -> bool {
        self.catalog_id().is_some() || self.other_text().is_some()
    }
}

/// What the system is for.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct ObjectiveSection {
    /// Whether the user opted into detailing objectives.
    #[serde(default)]
    pub define_details: bool,
    /// Primary objective statement, limited to 150 characters.
    #[serde(default)]
    pub primary_objective: String,
    /// Additional objectives from the catalog plus custom entries.
    #[serde(default)]
    pub additional: MultiSelect,
}

impl ObjectiveSection {
    pub fn is_populated(&self) -> bool {
        !self.primary_objective.trim().is_empty() || self.additional.has_content()
    }
}

/// Who uses the system and what it must do.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct RequirementsSection {
    /// Whether the user opted into detailing requirements.
    #[serde(default)]
    pub define_details: bool,
    /// Kinds of users the system serves.
    #[serde(default)]
    pub user_types: Vec<String>,
    /// Functional requirements, free text.
    #[serde(default)]
    pub functional: Vec<String>,
    /// Non-functional requirements from the catalog plus custom entries.
    #[serde(default)]
    pub non_functional: MultiSelect,
}

impl RequirementsSection {
    pub fn is_populated(&self) -> bool {
        !self.user_types.is_empty() || !self.functional.is_empty() || self.non_functional.has_content()
    }
}

/// Concrete features the system should have.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct FeaturesSection {
    /// Features from the catalog plus custom entries.
    #[serde(default)]
    pub specific: MultiSelect,
}

impl FeaturesSection {
    pub fn is_populated(&self) -> bool {
        self.specific.has_content()
    }
}

/// Look, feel and interface structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct UxUiSection {
    /// Selected color palette id, or "custom" for a hand-picked palette.
    #[serde(default)]
    pub color_palette: Option<String>,
    /// Hand-picked palette colors as hex strings, at most 4.
    #[serde(default)]
    pub custom_colors: Vec<String>,
    /// Visual style of the interface.
    #[serde(default)]
    pub visual_style: SingleSelect,
    /// Navigation menu type.
    #[serde(default)]
    pub menu_type: SingleSelect,
    /// Whether the project includes a landing page.
    #[serde(default)]
    pub landing_page: bool,
    #[serde(default)]
    pub landing_structure: FlagGroup,
    #[serde(default)]
    pub landing_elements: FlagGroup,
    #[serde(default)]
    pub landing_style: FlagGroup,
    /// Authentication methods.
    #[serde(default)]
    pub authentication: MultiSelect,
    /// Whether the project includes a user dashboard.
    #[serde(default)]
    pub user_dashboard: bool,
    #[serde(default)]
    pub dashboard_features: MultiSelect,
}

impl UxUiSection {
    /// Palette id to resolve through the catalog. The custom sentinel is
    /// excluded, it renders through the color list instead.
    pub fn palette_catalog_id(&self) -> Option<&str> {
        self.color_palette
            .as_deref()
            .filter(|id| *id != CUSTOM_PALETTE_ID)
    }

    /// True when a hand-picked palette should render: the custom id is
    /// selected or colors have been entered.
    pub fn has_custom_palette(&self) -> bool {
        self.color_palette.as_deref() == Some(CUSTOM_PALETTE_ID) || !self.custom_colors.is_empty()
    }

    pub fn is_populated(&self) -> bool {
        self.palette_catalog_id().is_some()
            || self.has_custom_palette()
            || self.visual_style.has_content()
            || self.menu_type.has_content()
            || (self.landing_page
                && (self.landing_structure.has_content()
                    || self.landing_elements.has_content()
                    || self.landing_style.has_content()))
            || (self.user_dashboard && self.dashboard_features.has_content())
            || self.authentication.has_content()
    }
}

/// Technologies the system is built with.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct StackSection {
    /// Whether frontend and backend are chosen separately.
    #[serde(default)]
    pub separate_frontend_backend: bool,
    #[serde(default)]
    pub frontend: SingleSelect,
    #[serde(default)]
    pub backend: SingleSelect,
    #[serde(default)]
    pub fullstack: SingleSelect,
    #[serde(default)]
    pub database: SingleSelect,
    #[serde(default)]
    pub orm: SingleSelect,
    #[serde(default)]
    pub hosting: SingleSelect,
}

impl StackSection {
    pub fn is_populated(&self) -> bool {
        let tier = if self.separate_frontend_backend {
            self.frontend.has_content() || self.backend.has_content()
        } else {
            self.fullstack.has_content()
        };
        tier || self.database.has_content() || self.orm.has_content() || self.hosting.has_content()
    }
}

/// Security measures the system should apply.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct SecuritySection {
    /// Measures from the catalog plus custom entries.
    #[serde(default)]
    pub measures: MultiSelect,
}

impl SecuritySection {
    pub fn is_populated(&self) -> bool {
        self.measures.has_content()
    }
}

/// How the codebase should be organized.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct CodeStructureSection {
    #[serde(default)]
    pub folder_organization: SingleSelect,
    #[serde(default)]
    pub architectural_pattern: SingleSelect,
    #[serde(default)]
    pub best_practices: MultiSelect,
}

impl CodeStructureSection {
    pub fn is_populated(&self) -> bool {
        self.folder_organization.has_content()
            || self.architectural_pattern.has_content()
            || self.best_practices.has_content()
    }
}

/// Whether and how the system is expected to scale.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct ScalabilitySection {
    /// Whether the system is expected to scale.
    #[serde(default)]
    pub is_scalable: bool,
    #[serde(default)]
    pub scalability_features: MultiSelect,
    #[serde(default)]
    pub performance_features: MultiSelect,
}

impl ScalabilitySection {
    /// The flag alone is not content, at least one feature is required.
    pub fn is_populated(&self) -> bool {
        self.scalability_features.has_content() || self.performance_features.has_content()
    }
}

/// Things the generated code must avoid.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct RestrictionsSection {
    /// Restrictions from the catalog plus custom entries.
    #[serde(default)]
    pub avoid_in_code: MultiSelect,
}

impl RestrictionsSection {
    pub fn is_populated(&self) -> bool {
        self.avoid_in_code.has_content()
    }
}

/// Third-party services the system connects to.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct IntegrationsSection {
    /// Whether third-party integrations are needed at all.
    #[serde(default)]
    pub needs_integrations: bool,
    /// Integrations from the catalog plus custom entries.
    #[serde(default)]
    pub integrations: MultiSelect,
}

impl IntegrationsSection {
    /// Gated by the flag: selections without the flag are not content.
    pub fn is_populated(&self) -> bool {
        self.needs_integrations && self.integrations.has_content()
    }
}
