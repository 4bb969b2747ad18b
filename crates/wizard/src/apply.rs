//! Section update application.
//!
//! One function per section, applying its update record to the matching
//! model slice. Bounds and catalog membership are enforced here, at the
//! edit seam, so the model itself stays lenient about loaded data.

use promptforge_core::domain::selection::{
    self, bounded_list, SingleSelect, MAX_CUSTOM_COLORS, MAX_CUSTOM_ENTRIES,
    MAX_PRIMARY_OBJECTIVE_LEN,
};
use promptforge_core::domain::sections::CUSTOM_PALETTE_ID;
use promptforge_core::domain::update::{
    CodeStructureUpdate, FeaturesUpdate, IntegrationsUpdate, ObjectiveUpdate, ProjectUpdate,
    RequirementsUpdate, RestrictionsUpdate, ScalabilityUpdate, SecurityUpdate, StackUpdate,
    SystemTypeUpdate, UxUiUpdate,
};
use promptforge_core::{CoreError, OptionCatalogs, OptionGroup, PromptConfig, SectionUpdate};

use crate::error::Result;

/// Applies section updates to a configuration.
///
/// Fields set to `None` in an update record are left untouched, mirroring
/// partial-update requests elsewhere in the workspace. Application within
/// a record is sequential; `WizardSession` applies to a scratch copy and
/// swaps on success so a rejected update never leaves a half-applied model.
pub struct UpdateApplier<'a> {
    catalogs: &'a dyn OptionCatalogs,
}

impl<'a> UpdateApplier<'a> {
    pub fn new(catalogs: &'a dyn OptionCatalogs) -> Self {
        Self { catalogs }
    }

    pub fn apply(&self, config: &mut PromptConfig, update: SectionUpdate) -> Result<()> {
        match update {
            SectionUpdate::Project(update) => self.apply_project(config, update),
            SectionUpdate::SystemType(update) => self.apply_system_type(config, update),
            SectionUpdate::Objective(update) => self.apply_objective(config, update),
            SectionUpdate::Requirements(update) => self.apply_requirements(config, update),
            SectionUpdate::Features(update) => self.apply_features(config, update),
            SectionUpdate::UxUi(update) => self.apply_uxui(config, update),
            SectionUpdate::Stack(update) => self.apply_stack(config, update),
            SectionUpdate::Security(update) => self.apply_security(config, update),
            SectionUpdate::CodeStructure(update) => self.apply_code_structure(config, update),
            SectionUpdate::Scalability(update) => self.apply_scalability(config, update),
            SectionUpdate::Restrictions(update) => self.apply_restrictions(config, update),
            SectionUpdate::Integrations(update) => self.apply_integrations(config, update),
        }
    }

    /// Reject a concrete id the catalog does not know. Blank ids and the
    /// sentinel pass; so does everything when the group has no options,
    /// which keeps the model usable without seeded catalogs.
    fn validated_choice(&self, field: &'static str, group: OptionGroup, id: &str) -> Result<()> {
        let id = id.trim();
        if id.is_empty() || selection::is_other_sentinel(id) {
            return Ok(());
        }
        if self.catalogs.has_options(group) && self.catalogs.find(group, id).is_none() {
            return Err(CoreError::UnknownOption {
                field,
                id: id.to_string(),
            }
            .into());
        }
        Ok(())
    }

    fn choose(
        &self,
        field: &'static str,
        group: OptionGroup,
        select: &mut SingleSelect,
        id: String,
    ) -> Result<()> {
        self.validated_choice(field, group, &id)?;
        select.select(id);
        Ok(())
    }

    fn apply_project(&self, config: &mut PromptConfig, update: ProjectUpdate) -> Result<()> {
        let project = &mut config.project;
        if let Some(title) = update.title {
            project.title = title;
        }
        if let Some(author) = update.author {
            project.author = author;
        }
        if let Some(email) = update.email {
            project.email = email;
        }
        if let Some(url) = update.url {
            project.url = url;
        }
        if let Some(version) = update.version {
            project.version = version;
        }
        if let Some(created_at) = update.created_at {
            project.created_at = Some(created_at);
        }
        if let Some(updated_at) = update.updated_at {
            project.updated_at = Some(updated_at);
        }
        Ok(())
    }

    fn apply_system_type(&self, config: &mut PromptConfig, update: SystemTypeUpdate) -> Result<()> {
        let section = &mut config.system_type;
        if let Some(selected) = update.selected {
            self.validated_choice("system_type.selected", OptionGroup::SystemTypes, &selected)?;
            section.select(selected);
        }
        if let Some(other_type) = update.other_type {
            section.other_type = other_type;
        }
        Ok(())
    }

    fn apply_objective(&self, config: &mut PromptConfig, update: ObjectiveUpdate) -> Result<()> {
        let section = &mut config.objective;
        if let Some(define_details) = update.define_details {
            section.define_details = define_details;
        }
        if let Some(primary) = update.primary_objective {
            if primary.trim().chars().count() > MAX_PRIMARY_OBJECTIVE_LEN {
                return Err(CoreError::ValueTooLong {
                    field: "objective.primary_objective",
                    max: MAX_PRIMARY_OBJECTIVE_LEN,
                }
                .into());
            }
            section.primary_objective = primary;
        }
        if let Some(selected) = update.selected {
            section.additional.set_selected(selected);
        }
        if let Some(custom) = update.custom {
            section.additional.set_custom("objective.custom", custom)?;
        }
        Ok(())
    }

    fn apply_requirements(
        &self,
        config: &mut PromptConfig,
        update: RequirementsUpdate,
    ) -> Result<()> {
        let section = &mut config.requirements;
        if let Some(define_details) = update.define_details {
            section.define_details = define_details;
        }
        if let Some(user_types) = update.user_types {
            section.user_types =
                bounded_list("requirements.user_types", user_types, MAX_CUSTOM_ENTRIES)?;
        }
        if let Some(functional) = update.functional {
            section.functional =
                bounded_list("requirements.functional", functional, MAX_CUSTOM_ENTRIES)?;
        }
        if let Some(selected) = update.non_functional {
            section.non_functional.set_selected(selected);
        }
        if let Some(custom) = update.custom_non_functional {
            section
                .non_functional
                .set_custom("requirements.custom_non_functional", custom)?;
        }
        Ok(())
    }

    fn apply_features(&self, config: &mut PromptConfig, update: FeaturesUpdate) -> Result<()> {
        let section = &mut config.features;
        if let Some(selected) = update.selected {
            section.specific.set_selected(selected);
        }
        if let Some(custom) = update.custom {
            section.specific.set_custom("features.custom", custom)?;
        }
        Ok(())
    }

    fn apply_uxui(&self, config: &mut PromptConfig, update: UxUiUpdate) -> Result<()> {
        let section = &mut config.uxui;
        if let Some(palette) = update.color_palette {
            let trimmed = palette.trim();
            if trimmed.is_empty() {
                section.color_palette = None;
            } else {
                if trimmed != CUSTOM_PALETTE_ID
                    && !selection::is_other_sentinel(trimmed)
                    && self.catalogs.has_options(OptionGroup::ColorPalettes)
                    && self
                        .catalogs
                        .find(OptionGroup::ColorPalettes, trimmed)
                        .is_none()
                {
                    return Err(CoreError::UnknownOption {
                        field: "uxui.color_palette",
                        id: trimmed.to_string(),
                    }
                    .into());
                }
                section.color_palette = Some(trimmed.to_string());
            }
        }
        if let Some(colors) = update.custom_colors {
            section.custom_colors = bounded_list("uxui.custom_colors", colors, MAX_CUSTOM_COLORS)?;
        }
        if let Some(style) = update.visual_style {
            self.choose(
                "uxui.visual_style",
                OptionGroup::VisualStyles,
                &mut section.visual_style,
                style,
            )?;
        }
        if let Some(custom) = update.custom_visual_styles {
            section
                .visual_style
                .set_custom("uxui.custom_visual_styles", custom)?;
        }
        if let Some(menu) = update.menu_type {
            self.choose(
                "uxui.menu_type",
                OptionGroup::MenuTypes,
                &mut section.menu_type,
                menu,
            )?;
        }
        if let Some(custom) = update.custom_menu_types {
            section.menu_type.set_custom("uxui.custom_menu_types", custom)?;
        }
        if let Some(landing_page) = update.landing_page {
            section.landing_page = landing_page;
        }
        if let Some(ids) = update.landing_structure {
            section.landing_structure.set_enabled(ids);
        }
        if let Some(custom) = update.custom_landing_structure {
            section
                .landing_structure
                .set_other("uxui.custom_landing_structure", custom)?;
        }
        if let Some(ids) = update.landing_elements {
            section.landing_elements.set_enabled(ids);
        }
        if let Some(custom) = update.custom_landing_elements {
            section
                .landing_elements
                .set_other("uxui.custom_landing_elements", custom)?;
        }
        if let Some(ids) = update.landing_style {
            section.landing_style.set_enabled(ids);
        }
        if let Some(custom) = update.custom_landing_styles {
            section
                .landing_style
                .set_other("uxui.custom_landing_styles", custom)?;
        }
        if let Some(selected) = update.authentication {
            section.authentication.set_selected(selected);
        }
        if let Some(custom) = update.custom_authentication {
            section
                .authentication
                .set_custom("uxui.custom_authentication", custom)?;
        }
        if let Some(user_dashboard) = update.user_dashboard {
            section.user_dashboard = user_dashboard;
        }
        if let Some(selected) = update.dashboard_features {
            section.dashboard_features.set_selected(selected);
        }
        if let Some(custom) = update.custom_dashboard_features {
            section
                .dashboard_features
                .set_custom("uxui.custom_dashboard_features", custom)?;
        }
        Ok(())
    }

    fn apply_stack(&self, config: &mut PromptConfig, update: StackUpdate) -> Result<()> {
        let section = &mut config.stack;
        if let Some(flag) = update.separate_frontend_backend {
            section.separate_frontend_backend = flag;
        }
        if let Some(id) = update.frontend {
            self.choose("stack.frontend", OptionGroup::Frontend, &mut section.frontend, id)?;
        }
        if let Some(custom) = update.custom_frontend {
            section.frontend.set_custom("stack.custom_frontend", custom)?;
        }
        if let Some(id) = update.backend {
            self.choose("stack.backend", OptionGroup::Backend, &mut section.backend, id)?;
        }
        if let Some(custom) = update.custom_backend {
            section.backend.set_custom("stack.custom_backend", custom)?;
        }
        if let Some(id) = update.fullstack {
            self.choose("stack.fullstack", OptionGroup::Fullstack, &mut section.fullstack, id)?;
        }
        if let Some(custom) = update.custom_fullstack {
            section.fullstack.set_custom("stack.custom_fullstack", custom)?;
        }
        if let Some(id) = update.database {
            self.choose("stack.database", OptionGroup::Databases, &mut section.database, id)?;
        }
        if let Some(custom) = update.custom_databases {
            section.database.set_custom("stack.custom_databases", custom)?;
        }
        if let Some(id) = update.orm {
            self.choose("stack.orm", OptionGroup::Orms, &mut section.orm, id)?;
        }
        if let Some(custom) = update.custom_orms {
            section.orm.set_custom("stack.custom_orms", custom)?;
        }
        if let Some(id) = update.hosting {
            self.choose("stack.hosting", OptionGroup::Hosting, &mut section.hosting, id)?;
        }
        if let Some(custom) = update.custom_hosting {
            section.hosting.set_custom("stack.custom_hosting", custom)?;
        }
        Ok(())
    }

    fn apply_security(&self, config: &mut PromptConfig, update: SecurityUpdate) -> Result<()> {
        let section = &mut config.security;
        if let Some(selected) = update.selected {
            section.measures.set_selected(selected);
        }
        if let Some(custom) = update.custom {
            section.measures.set_custom("security.custom", custom)?;
        }
        Ok(())
    }

    fn apply_code_structure(
        &self,
        config: &mut PromptConfig,
        update: CodeStructureUpdate,
    ) -> Result<()> {
        let section = &mut config.code_structure;
        if let Some(id) = update.folder_organization {
            self.choose(
                "code_structure.folder_organization",
                OptionGroup::FolderOrganization,
                &mut section.folder_organization,
                id,
            )?;
        }
        if let Some(custom) = update.custom_folder_organization {
            section
                .folder_organization
                .set_custom("code_structure.custom_folder_organization", custom)?;
        }
        if let Some(id) = update.architectural_pattern {
            self.choose(
                "code_structure.architectural_pattern",
                OptionGroup::ArchitecturalPatterns,
                &mut section.architectural_pattern,
                id,
            )?;
        }
        if let Some(custom) = update.custom_architectural_patterns {
            section
                .architectural_pattern
                .set_custom("code_structure.custom_architectural_patterns", custom)?;
        }
        if let Some(selected) = update.best_practices {
            section.best_practices.set_selected(selected);
        }
        if let Some(custom) = update.custom_best_practices {
            section
                .best_practices
                .set_custom("code_structure.custom_best_practices", custom)?;
        }
        Ok(())
    }

    fn apply_scalability(
        &self,
        config: &mut PromptConfig,
        update: ScalabilityUpdate,
    ) -> Result<()> {
        let section = &mut config.scalability;
        if let Some(is_scalable) = update.is_scalable {
            section.is_scalable = is_scalable;
        }
        if let Some(selected) = update.scalability_features {
            section.scalability_features.set_selected(selected);
        }
        if let Some(custom) = update.custom_scalability_features {
            section
                .scalability_features
                .set_custom("scalability.custom_scalability_features", custom)?;
        }
        if let Some(selected) = update.performance_features {
            section.performance_features.set_selected(selected);
        }
        if let Some(custom) = update.custom_performance_features {
            section
                .performance_features
                .set_custom("scalability.custom_performance_features", custom)?;
        }
        Ok(())
    }

    fn apply_restrictions(
        &self,
        config: &mut PromptConfig,
        update: RestrictionsUpdate,
    ) -> Result<()> {
        let section = &mut config.restrictions;
        if let Some(selected) = update.selected {
            section.avoid_in_code.set_selected(selected);
        }
        if let Some(custom) = update.custom {
            section.avoid_in_code.set_custom("restrictions.custom", custom)?;
        }
        Ok(())
    }

    fn apply_integrations(
        &self,
        config: &mut PromptConfig,
        update: IntegrationsUpdate,
    ) -> Result<()> {
        let section = &mut config.integrations;
        if let Some(needs_integrations) = update.needs_integrations {
            section.needs_integrations = needs_integrations;
        }
        if let Some(selected) = update.selected {
            section.integrations.set_selected(selected);
        }
        if let Some(custom) = update.custom {
            section.integrations.set_custom("integrations.custom", custom)?;
        }
        Ok(())
    }
}
