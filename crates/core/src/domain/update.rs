use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::config::SectionKey;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct ProjectUpdate {
    pub title: Option<String>,
    pub author: Option<String>,
    pub email: Option<String>,
    pub url: Option<String>,
    pub version: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct SystemTypeUpdate {
    /// Empty string clears the selection.
    pub selected: Option<String>,
    pub other_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct ObjectiveUpdate {
    pub define_details: Option<bool>,
    pub primary_objective: Option<String>,
    pub selected: Option<Vec<String>>,
    pub custom: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct RequirementsUpdate {
    pub define_details: Option<bool>,
    pub user_types: Option<Vec<String>>,
    pub functional: Option<Vec<String>>,
    pub non_functional: Option<Vec<String>>,
    pub custom_non_functional: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct FeaturesUpdate {
    pub selected: Option<Vec<String>>,
    pub custom: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct UxUiUpdate {
    /// Empty string clears the palette.
    pub color_palette: Option<String>,
    pub custom_colors: Option<Vec<String>>,
    pub visual_style: Option<String>,
    pub custom_visual_styles: Option<Vec<String>>,
    pub menu_type: Option<String>,
    pub custom_menu_types: Option<Vec<String>>,
    pub landing_page: Option<bool>,
    pub landing_structure: Option<Vec<String>>,
    pub custom_landing_structure: Option<Vec<String>>,
    pub landing_elements: Option<Vec<String>>,
    pub custom_landing_elements: Option<Vec<String>>,
    pub landing_style: Option<Vec<String>>,
    pub custom_landing_styles: Option<Vec<String>>,
    pub authentication: Option<Vec<String>>,
    pub custom_authentication: Option<Vec<String>>,
    pub user_dashboard: Option<bool>,
    pub dashboard_features: Option<Vec<String>>,
    pub custom_dashboard_features: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct StackUpdate {
    pub separate_frontend_backend: Option<bool>,
    pub frontend: Option<String>,
    pub custom_frontend: Option<Vec<String>>,
    pub backend: Option<String>,
    pub custom_backend: Option<Vec<String>>,
    pub fullstack: Option<String>,
    pub custom_fullstack: Option<Vec<String>>,
    pub database: Option<String>,
    pub custom_databases: Option<Vec<String>>,
    pub orm: Option<String>,
    pub custom_orms: Option<Vec<String>>,
    pub hosting: Option<String>,
    pub custom_hosting: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct SecurityUpdate {
    pub selected: Option<Vec<String>>,
    pub custom: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct CodeStructureUpdate {
    pub folder_organization: Option<String>,
    pub custom_folder_organization: Option<Vec<String>>,
    pub architectural_pattern: Option<String>,
    pub custom_architectural_patterns: Option<Vec<String>>,
    pub best_practices: Option<Vec<String>>,
    pub custom_best_practices: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct ScalabilityUpdate {
    pub is_scalable: Option<bool>,
    pub scalability_features: Option<Vec<String>>,
    pub custom_scalability_features: Option<Vec<String>>,
    pub performance_features: Option<Vec<String>>,
    pub custom_performance_features: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct RestrictionsUpdate {
    pub selected: Option<Vec<String>>,
    pub custom: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct IntegrationsUpdate {
    pub needs_integrations: Option<bool>,
    pub selected: Option<Vec<String>>,
    pub custom: Option<Vec<String>>,
}

/// A partial update to one wizard section. `None` fields are left
/// unchanged; list fields replace the stored list wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(tag = "section", rename_all = "snake_case")]
pub enum SectionUpdate {
    Project(ProjectUpdate),
    SystemType(SystemTypeUpdate),
    Objective(ObjectiveUpdate),
    Requirements(RequirementsUpdate),
    Features(FeaturesUpdate),
    #[serde(rename = "uxui")]
    UxUi(UxUiUpdate),
    Stack(StackUpdate),
    Security(SecurityUpdate),
    CodeStructure(CodeStructureUpdate),
    Scalability(ScalabilityUpdate),
    Restrictions(RestrictionsUpdate),
    Integrations(IntegrationsUpdate),
}

impl SectionUpdate {
    /// The section this update addresses.
    pub fn key(&self) -> SectionKey {
        match self {
            Self::Project(_) => SectionKey::Project,
            Self::SystemType(_) => SectionKey::SystemType,
            Self::Objective(_) => SectionKey::Objective,
            Self::Requirements(_) => SectionKey::Requirements,
            Self::Features(_) => SectionKey::Features,
            Self::UxUi(_) => SectionKey::UxUi,
            Self::Stack(_) => SectionKey::Stack,
            Self::Security(_) => SectionKey::Security,
            Self::CodeStructure(_) => SectionKey::CodeStructure,
            Self::Scalability(_) => SectionKey::Scalability,
            Self::Restrictions(_) => SectionKey::Restrictions,
            Self::Integrations(_) => SectionKey::Integrations,
        }
    }
}
