use serde::{Deserialize, Serialize};

use super::sections::{
    CodeStructureSection, FeaturesSection, IntegrationsSection, ObjectiveSection, ProjectInfo,
    RequirementsSection, RestrictionsSection, ScalabilitySection, SecuritySection, StackSection,
    SystemTypeSection, UxUiSection,
};

/// Identifies one wizard section. Declaration order is the canonical
/// document order.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum SectionKey {
    Project,
    SystemType,
    Objective,
    Requirements,
    Features,
    #[serde(rename = "uxui")]
    UxUi,
    Stack,
    Security,
    CodeStructure,
    Scalability,
    Restrictions,
    Integrations,
}

impl SectionKey {
    /// All sections in document order.
    pub const ALL: [SectionKey; 12] = [
        Self::Project,
        Self::SystemType,
        Self::Objective,
        Self::Requirements,
        Self::Features,
        Self::UxUi,
        Self::Stack,
        Self::Security,
        Self::CodeStructure,
        Self::Scalability,
        Self::Restrictions,
        Self::Integrations,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::SystemType => "system_type",
            Self::Objective => "objective",
            Self::Requirements => "requirements",
            Self::Features => "features",
            Self::UxUi => "uxui",
            Self::Stack => "stack",
            Self::Security => "security",
            Self::CodeStructure => "code_structure",
            Self::Scalability => "scalability",
            Self::Restrictions => "restrictions",
            Self::Integrations => "integrations",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "project" => Some(Self::Project),
            "system_type" => Some(Self::SystemType),
            "objective" => Some(Self::Objective),
            "requirements" => Some(Self::Requirements),
            "features" => Some(Self::Features),
            "uxui" | "ux_ui" => Some(Self::UxUi),
            "stack" => Some(Self::Stack),
            "security" => Some(Self::Security),
            "code_structure" => Some(Self::CodeStructure),
            "scalability" => Some(Self::Scalability),
            "restrictions" => Some(Self::Restrictions),
            "integrations" => Some(Self::Integrations),
            _ => None,
        }
    }
}

impl std::fmt::Display for SectionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The whole project description under construction. One field per wizard
/// section, all independently editable.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct PromptConfig {
    #[serde(default)]
    pub project: ProjectInfo,
    #[serde(default)]
    pub system_type: SystemTypeSection,
    #[serde(default)]
    pub objective: ObjectiveSection,
    #[serde(default)]
    pub requirements: RequirementsSection,
    #[serde(default)]
    pub features: FeaturesSection,
    #[serde(default)]
    pub uxui: UxUiSection,
    #[serde(default)]
    pub stack: StackSection,
    #[serde(default)]
    pub security: SecuritySection,
    #[serde(default)]
    pub code_structure: CodeStructureSection,
    #[serde(default)]
    pub scalability: ScalabilitySection,
    #[serde(default)]
    pub restrictions: RestrictionsSection,
    #[serde(default)]
    pub integrations: IntegrationsSection,
}

impl PromptConfig {
    /// Restore one section to its defaults, leaving the rest untouched.
    pub fn reset_section(&mut self, key: SectionKey) {
        match key {
            SectionKey::Project => self.project = ProjectInfo::default(),
            SectionKey::SystemType => self.system_type = SystemTypeSection::default(),
            SectionKey::Objective => self.objective = ObjectiveSection::default(),
            SectionKey::Requirements => self.requirements = RequirementsSection::default(),
            SectionKey::Features => self.features = FeaturesSection::default(),
            SectionKey::UxUi => self.uxui = UxUiSection::default(),
            SectionKey::Stack => self.stack = StackSection::default(),
            SectionKey::Security => self.security = SecuritySection::default(),
            SectionKey::CodeStructure => self.code_structure = CodeStructureSection::default(),
            SectionKey::Scalability => self.scalability = ScalabilitySection::default(),
            SectionKey::Restrictions => self.restrictions = RestrictionsSection::default(),
            SectionKey::Integrations => self.integrations = IntegrationsSection::default(),
        }
    }

    /// Whether the section holds any content worth rendering.
    pub fn section_is_populated(&self, key: SectionKey) -> bool {
        match key {
            SectionKey::Project => self.project.is_populated(),
            SectionKey::SystemType => self.system_type.is_populated(),
            SectionKey::Objective => self.objective.is_populated(),
            SectionKey::Requirements => self.requirements.is_populated(),
            SectionKey::Features => self.features.is_populated(),
            SectionKey::UxUi => self.uxui.is_populated(),
            SectionKey::Stack => self.stack.is_populated(),
            SectionKey::Security => self.security.is_populated(),
            SectionKey::CodeStructure => self.code_structure.is_populated(),
            SectionKey::Scalability => self.scalability.is_populated(),
            SectionKey::Restrictions => self.restrictions.is_populated(),
            SectionKey::Integrations => self.integrations.is_populated(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_key_order() {
        assert_eq!(SectionKey::ALL[0], SectionKey::Project);
        assert_eq!(SectionKey::ALL[1], SectionKey::SystemType);
        assert_eq!(SectionKey::ALL[2], SectionKey::Objective);
        assert_eq!(SectionKey::ALL[11], SectionKey::Integrations);
        assert_eq!(SectionKey::ALL.len(), 12);
    }

    #[test]
    fn test_section_key_parsing() {
        assert_eq!(SectionKey::parse("project"), Some(SectionKey::Project));
        assert_eq!(SectionKey::parse("system_type"), Some(SectionKey::SystemType));
        assert_eq!(SectionKey::parse("uxui"), Some(SectionKey::UxUi));
        assert_eq!(SectionKey::parse("ux_ui"), Some(SectionKey::UxUi));
        assert_eq!(SectionKey::parse("invalid"), None);
    }

    #[test]
    fn test_section_key_round_trip() {
        for key in SectionKey::ALL {
            assert_eq!(SectionKey::parse(key.as_str()), Some(key));
        }
    }

    #[test]
    fn test_section_key_serde_matches_as_str() {
        for key in SectionKey::ALL {
            let json = serde_json::to_string(&key).unwrap();
            assert_eq!(json, format!("\"{}\"", key.as_str()));
        }
    }

    #[test]
    fn test_default_config_has_no_content() {
        let config = PromptConfig::default();
        for key in SectionKey::ALL {
            assert!(!config.section_is_populated(key), "section {key}");
        }
    }

    #[test]
    fn test_reset_section_leaves_others_untouched() {
        let mut config = PromptConfig::default();
        config.project.title = "Invoicing SaaS".to_string();
        config.objective.primary_objective = "Automate invoicing".to_string();

        config.reset_section(SectionKey::Objective);

        assert!(config.objective.primary_objective.is_empty());
        assert_eq!(config.project.title, "Invoicing SaaS");
    }

    #[test]
    fn test_config_deserializes_from_empty_object() {
        let config: PromptConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, PromptConfig::default());
    }
}
