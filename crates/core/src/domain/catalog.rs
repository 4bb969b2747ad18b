use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One selectable option offered by the wizard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct CatalogOption {
    /// Stable identifier stored in the configuration.
    pub id: String,
    /// Human-readable label.
    pub label: String,
    /// Longer description, shown alongside the label when present.
    #[serde(default)]
    pub description: Option<String>,
    /// Grouping hint for presentation layers.
    #[serde(default)]
    pub category: Option<String>,
}

impl CatalogOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description: None,
            category: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// The option groups the wizard draws from. Group names double as
/// translation key segments: `options.<group>.<id>`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum OptionGroup {
    SystemTypes,
    Objectives,
    NonFunctionalRequirements,
    Features,
    ColorPalettes,
    VisualStyles,
    MenuTypes,
    LandingStructure,
    LandingElements,
    LandingStyles,
    AuthMethods,
    DashboardFeatures,
    Frontend,
    Backend,
    Fullstack,
    Databases,
    Orms,
    Hosting,
    SecurityFeatures,
    FolderOrganization,
    ArchitecturalPatterns,
    BestPractices,
    ScalabilityFeatures,
    PerformanceFeatures,
    Restrictions,
    Integrations,
}

impl OptionGroup {
    pub const ALL: [OptionGroup; 26] = [
        Self::SystemTypes,
        Self::Objectives,
        Self::NonFunctionalRequirements,
        Self::Features,
        Self::ColorPalettes,
        Self::VisualStyles,
        Self::MenuTypes,
        Self::LandingStructure,
        Self::LandingElements,
        Self::LandingStyles,
        Self::AuthMethods,
        Self::DashboardFeatures,
        Self::Frontend,
        Self::Backend,
        Self::Fullstack,
        Self::Databases,
        Self::Orms,
        Self::Hosting,
        Self::SecurityFeatures,
        Self::FolderOrganization,
        Self::ArchitecturalPatterns,
        Self::BestPractices,
        Self::ScalabilityFeatures,
        Self::PerformanceFeatures,
        Self::Restrictions,
        Self::Integrations,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SystemTypes => "system_types",
            Self::Objectives => "objectives",
            Self::NonFunctionalRequirements => "non_functional_requirements",
            Self::Features => "features",
            Self::ColorPalettes => "color_palettes",
            Self::VisualStyles => "visual_styles",
            Self::MenuTypes => "menu_types",
            Self::LandingStructure => "landing_structure",
            Self::LandingElements => "landing_elements",
            Self::LandingStyles => "landing_styles",
            Self::AuthMethods => "auth_methods",
            Self::DashboardFeatures => "dashboard_features",
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Fullstack => "fullstack",
            Self::Databases => "databases",
            Self::Orms => "orms",
            Self::Hosting => "hosting",
            Self::SecurityFeatures => "security_features",
            Self::FolderOrganization => "folder_organization",
            Self::ArchitecturalPatterns => "architectural_patterns",
            Self::BestPractices => "best_practices",
            Self::ScalabilityFeatures => "scalability_features",
            Self::PerformanceFeatures => "performance_features",
            Self::Restrictions => "restrictions",
            Self::Integrations => "integrations",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|group| group.as_str() == s)
    }
}

/// Read-only source of the options offered for each group.
pub trait OptionCatalogs: Send + Sync {
    /// Options for the group, empty when the group is not seeded.
    fn options(&self, group: OptionGroup) -> &[CatalogOption];

    fn find(&self, group: OptionGroup, id: &str) -> Option<&CatalogOption> {
        self.options(group).iter().find(|option| option.id == id)
    }

    /// Whether the group has any options to validate against.
    fn has_options(&self, group: OptionGroup) -> bool {
        !self.options(group).is_empty()
    }
}

/// In-memory catalog set.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalogs {
    groups: HashMap<OptionGroup, Vec<CatalogOption>>,
}

impl StaticCatalogs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_group(mut self, group: OptionGroup, options: Vec<CatalogOption>) -> Self {
        self.groups.insert(group, options);
        self
    }
}

impl OptionCatalogs for StaticCatalogs {
    fn options(&self, group: OptionGroup) -> &[CatalogOption] {
        self.groups.get(&group).map(Vec::as_slice).unwrap_or(&[])
    }
}
