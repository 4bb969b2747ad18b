use promptforge_core::domain::catalog::{OptionCatalogs, OptionGroup};
use promptforge_core::domain::config::PromptConfig;
use promptforge_core::domain::selection::{FlagGroup, MultiSelect, SingleSelect};
use promptforge_core::domain::translate::Translator;

use crate::enhance::strip_objective_label;
use crate::labels::LabelResolver;
use crate::template;

/// Renders a configuration into the final prompt document.
///
/// Pure and deterministic: the output depends only on the configuration
/// and the enhanced objective override. No clock, no randomness, no I/O;
/// timestamps come from the model. Sections render in a fixed order and
/// are omitted entirely when they have no content. The preview and the
/// final document go through this same renderer.
pub struct DocumentAssembler<'a> {
    resolver: LabelResolver<'a>,
    translator: &'a dyn Translator,
}

impl<'a> DocumentAssembler<'a> {
    pub fn new(catalogs: &'a dyn OptionCatalogs, translator: &'a dyn Translator) -> Self {
        Self {
            resolver: LabelResolver::new(catalogs, translator),
            translator,
        }
    }

    /// Render the document. `enhanced_objective` replaces the primary
    /// objective text after label stripping; pass `None` for previews.
    pub fn assemble(&self, config: &PromptConfig, enhanced_objective: Option<&str>) -> String {
        let blocks: Vec<String> = [
            self.project_block(config),
            self.system_type_block(config),
            self.objective_block(config, enhanced_objective),
            self.requirements_block(config),
            self.features_block(config),
            self.uxui_block(config),
            self.stack_block(config),
            self.security_block(config),
            self.code_structure_block(config),
            self.scalability_block(config),
            self.restrictions_block(config),
            self.integrations_block(config),
        ]
        .into_iter()
        .flatten()
        .collect();

        if blocks.is_empty() {
            return String::new();
        }
        let mut document = blocks.join("\n\n");
        document.push('\n');
        document
    }

    fn text(&self, label: template::Label) -> String {
        label.resolve(self.translator)
    }

    fn scalar(&self, value: &str) -> String {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            self.text(template::NOT_SPECIFIED)
        } else {
            trimmed.to_string()
        }
    }

    fn resolved(&self, group: OptionGroup, select: &MultiSelect) -> Vec<String> {
        select
            .catalog_ids()
            .into_iter()
            .map(|id| self.resolver.resolve(group, id))
            .collect()
    }

    /// Comma-joined line over the unified set: resolved catalog ids plus
    /// custom entries verbatim.
    fn multi_line(&self, group: OptionGroup, select: &MultiSelect) -> Option<String> {
        let mut values = self.resolved(group, select);
        values.extend(select.custom.iter().cloned());
        (!values.is_empty()).then(|| values.join(", "))
    }

    /// Line for a single choice: the resolved id, or the comma-joined
    /// custom list when no concrete option is selected.
    fn single_line(&self, group: OptionGroup, select: &SingleSelect) -> Option<String> {
        if let Some(id) = select.catalog_id() {
            return Some(self.resolver.resolve(group, id));
        }
        (!select.custom.is_empty()).then(|| select.custom.join(", "))
    }

    fn flag_line(&self, group: OptionGroup, flags: &FlagGroup) -> Option<String> {
        let mut values: Vec<String> = flags
            .flag_ids()
            .into_iter()
            .map(|id| self.resolver.resolve(group, id))
            .collect();
        values.extend(flags.other.iter().cloned());
        (!values.is_empty()).then(|| values.join(", "))
    }

    fn project_block(&self, config: &PromptConfig) -> Option<String> {
        let project = &config.project;
        if !project.is_populated() {
            return None;
        }
        let mut lines = vec![format!("## {}", self.text(template::PROJECT_HEADING))];
        lines.push(format!(
            "**{}:** {}",
            self.text(template::TITLE_LABEL),
            self.scalar(&project.title)
        ));
        lines.push(format!(
            "**{}:** {}",
            self.text(template::AUTHOR_LABEL),
            self.scalar(&project.author)
        ));
        lines.push(format!(
            "**{}:** {}",
            self.text(template::EMAIL_LABEL),
            self.scalar(&project.email)
        ));
        lines.push(format!(
            "**{}:** {}",
            self.text(template::URL_LABEL),
            self.scalar(&project.url)
        ));
        if let Some(created) = project.created_at {
            lines.push(format!(
                "**{}:** {}",
                self.text(template::CREATED_LABEL),
                created.format("%Y-%m-%d")
            ));
        }
        if let Some(updated) = project.updated_at {
            lines.push(format!(
                "**{}:** {}",
                self.text(template::UPDATED_LABEL),
                updated.format("%Y-%m-%d")
            ));
        }
        let version = project.version.trim();
        let version = if version.is_empty() {
            self.text(template::DEFAULT_VERSION)
        } else {
            version.to_string()
        };
        lines.push(format!(
            "**{}:** {}",
            self.text(template::VERSION_LABEL),
            version
        ));
        Some(lines.join("\n"))
    }

    fn system_type_block(&self, config: &PromptConfig) -> Option<String> {
        let section = &config.system_type;
        let value = if let Some(other) = section.other_text() {
            other.to_string()
        } else if let Some(id) = section.catalog_id() {
            self.resolver.resolve(OptionGroup::SystemTypes, id)
        } else {
            return None;
        };
        Some(format!(
            "## {}\n- {}",
            self.text(template::SYSTEM_TYPE_HEADING),
            value
        ))
    }

    fn objective_block(
        &self,
        config: &PromptConfig,
        enhanced_objective: Option<&str>,
    ) -> Option<String> {
        let section = &config.objective;
        let primary = enhanced_objective
            .map(strip_objective_label)
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| section.primary_objective.trim().to_string());

        let additional = self.resolved(OptionGroup::Objectives, &section.additional);
        let custom = &section.additional.custom;
        if primary.is_empty() && additional.is_empty() && custom.is_empty() {
            return None;
        }

        let mut lines: Vec<String> = Vec::new();
        if primary.is_empty() {
            lines.push(format!("## {}", self.text(template::OBJECTIVES_HEADING)));
        } else {
            lines.push(format!("## {}", self.text(template::MAIN_OBJECTIVE_HEADING)));
            lines.push(primary);
        }
        if !additional.is_empty() {
            lines.push(String::new());
            lines.push(format!(
                "### {}",
                self.text(template::ADDITIONAL_OBJECTIVES_HEADING)
            ));
            lines.extend(additional.into_iter().map(|label| format!("- {label}")));
        }
        if !custom.is_empty() {
            lines.push(String::new());
            lines.push(format!(
                "### {}",
                self.text(template::OTHER_OBJECTIVES_HEADING)
            ));
            lines.extend(custom.iter().map(|entry| format!("- {entry}")));
        }
        Some(lines.join("\n"))
    }

    fn requirements_block(&self, config: &PromptConfig) -> Option<String> {
        let section = &config.requirements;
        if !section.is_populated() {
            return None;
        }
        let heading = self.text(template::REQUIREMENTS_HEADING);
        let mut lines = if section.user_types.is_empty() {
            vec![format!("## {heading}")]
        } else {
            vec![format!("## {heading} ({})", section.user_types.join(", "))]
        };
        if !section.functional.is_empty() {
            lines.push(String::new());
            lines.push(format!("### {}", self.text(template::FUNCTIONAL_HEADING)));
            lines.extend(section.functional.iter().map(|req| format!("- {req}")));
        }
        let non_functional =
            self.resolved(OptionGroup::NonFunctionalRequirements, &section.non_functional);
        let custom = &section.non_functional.custom;
        if !non_functional.is_empty() || !custom.is_empty() {
            lines.push(String::new());
            lines.push(format!("### {}", self.text(template::NON_FUNCTIONAL_HEADING)));
            lines.extend(non_functional.into_iter().map(|label| format!("- {label}")));
            lines.extend(custom.iter().map(|entry| format!("- {entry}")));
        }
        Some(lines.join("\n"))
    }

    fn features_block(&self, config: &PromptConfig) -> Option<String> {
        let section = &config.features;
        if !section.is_populated() {
            return None;
        }
        let mut lines = vec![format!("## {}", self.text(template::FEATURES_HEADING))];
        for label in self.resolved(OptionGroup::Features, &section.specific) {
            lines.push(format!("- {label}"));
        }
        for entry in &section.specific.custom {
            lines.push(format!("- {entry}"));
        }
        Some(lines.join("\n"))
    }

    fn uxui_block(&self, config: &PromptConfig) -> Option<String> {
        let section = &config.uxui;
        if !section.is_populated() {
            return None;
        }
        let mut lines = vec![format!("## {}", self.text(template::UXUI_HEADING))];

        let mut palette_lines: Vec<String> = Vec::new();
        if let Some(id) = section.palette_catalog_id() {
            palette_lines.push(format!(
                "- {}",
                self.resolver.resolve(OptionGroup::ColorPalettes, id)
            ));
        }
        if section.has_custom_palette() {
            let colors = serde_json::to_string(&section.custom_colors).unwrap_or_default();
            palette_lines.push(format!(
                "- {}: {}",
                self.text(template::CUSTOM_PALETTE_LABEL),
                colors
            ));
        }
        if !palette_lines.is_empty() {
            lines.push(String::new());
            lines.push(format!("### {}", self.text(template::COLOR_PALETTE_HEADING)));
            lines.extend(palette_lines);
        }

        if section.landing_page {
            let structure = self.flag_line(OptionGroup::LandingStructure, &section.landing_structure);
            let elements = self.flag_line(OptionGroup::LandingElements, &section.landing_elements);
            let style = self.flag_line(OptionGroup::LandingStyles, &section.landing_style);
            if structure.is_some() || elements.is_some() || style.is_some() {
                lines.push(String::new());
                lines.push(format!("### {}", self.text(template::LANDING_HEADING)));
                if let Some(value) = structure {
                    lines.push(format!(
                        "**{}:** {}",
                        self.text(template::STRUCTURE_LABEL),
                        value
                    ));
                }
                if let Some(value) = elements {
                    lines.push(format!(
                        "**{}:** {}",
                        self.text(template::ELEMENTS_LABEL),
                        value
                    ));
                }
                if let Some(value) = style {
                    lines.push(format!("**{}:** {}", self.text(template::STYLE_LABEL), value));
                }
            }
        }

        let mut detail_lines: Vec<String> = Vec::new();
        if section.user_dashboard {
            if let Some(value) =
                self.multi_line(OptionGroup::DashboardFeatures, &section.dashboard_features)
            {
                detail_lines.push(format!(
                    "**{}:** {}",
                    self.text(template::DASHBOARD_FEATURES_LABEL),
                    value
                ));
            }
        }
        if let Some(value) = self.single_line(OptionGroup::VisualStyles, &section.visual_style) {
            detail_lines.push(format!(
                "**{}:** {}",
                self.text(template::VISUAL_STYLE_LABEL),
                value
            ));
        }
        if let Some(value) = self.single_line(OptionGroup::MenuTypes, &section.menu_type) {
            detail_lines.push(format!(
                "**{}:** {}",
                self.text(template::MENU_TYPE_LABEL),
                value
            ));
        }
        if let Some(value) = self.multi_line(OptionGroup::AuthMethods, &section.authentication) {
            detail_lines.push(format!(
                "**{}:** {}",
                self.text(template::AUTHENTICATION_LABEL),
                value
            ));
        }
        if !detail_lines.is_empty() {
            lines.push(String::new());
            lines.extend(detail_lines);
        }

        Some(lines.join("\n"))
    }

    fn stack_block(&self, config: &PromptConfig) -> Option<String> {
        let section = &config.stack;
        if !section.is_populated() {
            return None;
        }
        let mut lines = vec![format!("## {}", self.text(template::STACK_HEADING))];
        if section.separate_frontend_backend {
            if let Some(value) = self.single_line(OptionGroup::Frontend, &section.frontend) {
                lines.push(format!(
                    "**{}:** {}",
                    self.text(template::FRONTEND_LABEL),
                    value
                ));
            }
            if let Some(value) = self.single_line(OptionGroup::Backend, &section.backend) {
                lines.push(format!(
                    "**{}:** {}",
                    self.text(template::BACKEND_LABEL),
                    value
                ));
            }
        } else if let Some(value) = self.single_line(OptionGroup::Fullstack, &section.fullstack) {
            lines.push(format!(
                "**{}:** {}",
                self.text(template::FULLSTACK_LABEL),
                value
            ));
        }
        if let Some(value) = self.single_line(OptionGroup::Databases, &section.database) {
            lines.push(format!(
                "**{}:** {}",
                self.text(template::DATABASE_LABEL),
                value
            ));
        }
        if let Some(id) = section.orm.catalog_id() {
            lines.push(format!(
                "**{}:** {}",
                self.text(template::ORM_LABEL),
                self.resolver.resolve(OptionGroup::Orms, id)
            ));
        }
        if !section.orm.custom.is_empty() {
            lines.push(format!(
                "**{}:** {}",
                self.text(template::OTHER_ORM_LABEL),
                section.orm.custom.join(", ")
            ));
        }
        if let Some(id) = section.hosting.catalog_id() {
            lines.push(format!(
                "**{}:** {}",
                self.text(template::HOSTING_LABEL),
                self.resolver.resolve(OptionGroup::Hosting, id)
            ));
        }
        if !section.hosting.custom.is_empty() {
            lines.push(format!(
                "**{}:** {}",
                self.text(template::OTHER_HOSTING_LABEL),
                section.hosting.custom.join(", ")
            ));
        }
        Some(lines.join("\n"))
    }

    fn security_block(&self, config: &PromptConfig) -> Option<String> {
        let section = &config.security;
        if !section.is_populated() {
            return None;
        }
        let mut lines = vec![format!("## {}", self.text(template::SECURITY_HEADING))];
        for label in self.resolved(OptionGroup::SecurityFeatures, &section.measures) {
            lines.push(format!("- {label}"));
        }
        for entry in &section.measures.custom {
            lines.push(format!("- {entry}"));
        }
        Some(lines.join("\n"))
    }

    fn code_structure_block(&self, config: &PromptConfig) -> Option<String> {
        let section = &config.code_structure;
        if !section.is_populated() {
            return None;
        }
        let mut lines = vec![format!("## {}", self.text(template::CODE_STRUCTURE_HEADING))];
        if let Some(id) = section.folder_organization.catalog_id() {
            lines.push(format!(
                "**{}:** {}",
                self.text(template::FOLDER_ORGANIZATION_LABEL),
                self.resolver.resolve(OptionGroup::FolderOrganization, id)
            ));
        }
        if let Some(id) = section.architectural_pattern.catalog_id() {
            lines.push(format!(
                "**{}:** {}",
                self.text(template::ARCHITECTURAL_PATTERN_LABEL),
                self.resolver.resolve(OptionGroup::ArchitecturalPatterns, id)
            ));
        }
        let practices = self.resolved(OptionGroup::BestPractices, &section.best_practices);
        if !practices.is_empty() {
            lines.push(format!(
                "**{}:** {}",
                self.text(template::BEST_PRACTICES_LABEL),
                practices.join(", ")
            ));
        }
        for entry in section
            .folder_organization
            .custom
            .iter()
            .chain(section.architectural_pattern.custom.iter())
            .chain(section.best_practices.custom.iter())
        {
            lines.push(format!("- {entry}"));
        }
        Some(lines.join("\n"))
    }

    fn scalability_block(&self, config: &PromptConfig) -> Option<String> {
        let section = &config.scalability;
        if !section.is_populated() {
            return None;
        }
        let heading = if section.is_scalable {
            template::SCALABLE_HEADING
        } else {
            template::NOT_SCALABLE_HEADING
        };
        let mut lines = vec![format!("## {}", self.text(heading))];
        let features = self.resolved(OptionGroup::ScalabilityFeatures, &section.scalability_features);
        if !features.is_empty() {
            lines.push(format!(
                "**{}:** {}",
                self.text(template::SCALABILITY_FEATURES_LABEL),
                features.join(", ")
            ));
        }
        for entry in &section.scalability_features.custom {
            lines.push(format!("- {entry}"));
        }
        let performance =
            self.resolved(OptionGroup::PerformanceFeatures, &section.performance_features);
        if !performance.is_empty() {
            lines.push(format!(
                "**{}:** {}",
                self.text(template::PERFORMANCE_FEATURES_LABEL),
                performance.join(", ")
            ));
        }
        for entry in &section.performance_features.custom {
            lines.push(format!("- {entry}"));
        }
        Some(lines.join("\n"))
    }

    fn restrictions_block(&self, config: &PromptConfig) -> Option<String> {
        let section = &config.restrictions;
        if !section.is_populated() {
            return None;
        }
        let avoid = self.text(template::AVOID_MARKER);
        let mut lines = vec![format!("## {}", self.text(template::RESTRICTIONS_HEADING))];
        for label in self.resolved(OptionGroup::Restrictions, &section.avoid_in_code) {
            lines.push(format!("- {avoid} {label}"));
        }
        for entry in &section.avoid_in_code.custom {
            lines.push(format!("- {avoid} {entry}"));
        }
        Some(lines.join("\n"))
    }

    fn integrations_block(&self, config: &PromptConfig) -> Option<String> {
        let section = &config.integrations;
        if !section.is_populated() {
            return None;
        }
        let mut lines = vec![format!("## {}", self.text(template::INTEGRATIONS_HEADING))];
        for label in self.resolved(OptionGroup::Integrations, &section.integrations) {
            lines.push(format!("- {label}"));
        }
        for entry in &section.integrations.custom {
            lines.push(format!("- {entry}"));
        }
        Some(lines.join("\n"))
    }
}
