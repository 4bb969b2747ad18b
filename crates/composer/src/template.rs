//! Fixed document labels.
//!
//! Every heading and field label the assembler emits resolves through the
//! translator under a `doc.*` key, with the built-in default used on a
//! miss. The scalability headings, the restriction marker, the placeholder
//! and the fallback version are part of the document contract and keep
//! their historical spelling.

use promptforge_core::domain::translate::Translator;

/// A fixed label: translation key plus built-in default.
#[derive(Debug, Clone, Copy)]
pub struct Label {
    pub key: &'static str,
    pub default: &'static str,
}

impl Label {
    pub fn resolve(&self, translator: &dyn Translator) -> String {
        translator
            .translate(self.key)
            .unwrap_or_else(|| self.default.to_string())
    }
}

const fn label(key: &'static str, default: &'static str) -> Label {
    Label { key, default }
}

pub const PROJECT_HEADING: Label = label("doc.project.heading", "Project Information");
pub const TITLE_LABEL: Label = label("doc.project.title", "Title");
pub const AUTHOR_LABEL: Label = label("doc.project.author", "Author");
pub const EMAIL_LABEL: Label = label("doc.project.email", "Email");
pub const URL_LABEL: Label = label("doc.project.url", "URL");
pub const CREATED_LABEL: Label = label("doc.project.created", "Created");
pub const UPDATED_LABEL: Label = label("doc.project.updated", "Updated");
pub const VERSION_LABEL: Label = label("doc.project.version", "Version");
pub const NOT_SPECIFIED: Label = label("doc.common.not_specified", "not specified");
pub const DEFAULT_VERSION: Label = label("doc.project.default_version", "1.0.0");

pub const SYSTEM_TYPE_HEADING: Label = label("doc.system_type.heading", "System Type");

pub const MAIN_OBJECTIVE_HEADING: Label = label("doc.objective.main_heading", "Main Objective");
pub const OBJECTIVES_HEADING: Label = label("doc.objective.heading", "Objectives");
pub const ADDITIONAL_OBJECTIVES_HEADING: Label =
    label("doc.objective.additional", "Additional Objectives");
pub const OTHER_OBJECTIVES_HEADING: Label = label("doc.objective.other", "Other Objectives");

pub const REQUIREMENTS_HEADING: Label = label("doc.requirements.heading", "Requirements");
pub const FUNCTIONAL_HEADING: Label =
    label("doc.requirements.functional", "Functional Requirements");
pub const NON_FUNCTIONAL_HEADING: Label =
    label("doc.requirements.non_functional", "Non-Functional Requirements");

pub const FEATURES_HEADING: Label = label("doc.features.heading", "Features");

pub const UXUI_HEADING: Label = label("doc.uxui.heading", "UX and UI");
pub const COLOR_PALETTE_HEADING: Label = label("doc.uxui.color_palette", "Color Palette");
pub const CUSTOM_PALETTE_LABEL: Label = label("doc.uxui.custom_palette", "Custom Palette");
pub const LANDING_HEADING: Label = label("doc.uxui.landing", "Landing Page");
pub const STRUCTURE_LABEL: Label = label("doc.uxui.landing_structure", "Structure");
pub const ELEMENTS_LABEL: Label = label("doc.uxui.landing_elements", "Elements");
pub const STYLE_LABEL: Label = label("doc.uxui.landing_style", "Style");
pub const DASHBOARD_FEATURES_LABEL: Label =
    label("doc.uxui.dashboard_features", "Dashboard Features");
pub const VISUAL_STYLE_LABEL: Label = label("doc.uxui.visual_style", "Visual Style");
pub const MENU_TYPE_LABEL: Label = label("doc.uxui.menu_type", "Menu Type");
pub const AUTHENTICATION_LABEL: Label = label("doc.uxui.authentication", "Authentication");

pub const STACK_HEADING: Label = label("doc.stack.heading", "Technology Stack");
pub const FRONTEND_LABEL: Label = label("doc.stack.frontend", "Frontend");
pub const BACKEND_LABEL: Label = label("doc.stack.backend", "Backend");
pub const FULLSTACK_LABEL: Label = label("doc.stack.fullstack", "Fullstack");
pub const DATABASE_LABEL: Label = label("doc.stack.database", "Database");
pub const ORM_LABEL: Label = label("doc.stack.orm", "ORM");
pub const OTHER_ORM_LABEL: Label = label("doc.stack.other_orm", "Other ORM");
pub const HOSTING_LABEL: Label = label("doc.stack.hosting", "Hosting");
pub const OTHER_HOSTING_LABEL: Label = label("doc.stack.other_hosting", "Other Hosting");

pub const SECURITY_HEADING: Label = label("doc.security.heading", "Security");

pub const CODE_STRUCTURE_HEADING: Label = label("doc.code_structure.heading", "Code Structure");
pub const FOLDER_ORGANIZATION_LABEL: Label =
    label("doc.code_structure.folder_organization", "Folder Organization");
pub const ARCHITECTURAL_PATTERN_LABEL: Label = label(
    "doc.code_structure.architectural_pattern",
    "Architectural Pattern",
);
pub const BEST_PRACTICES_LABEL: Label = label("doc.code_structure.best_practices", "Best Practices");

pub const SCALABLE_HEADING: Label = label("doc.scalability.scalable", "Escalável");
pub const NOT_SCALABLE_HEADING: Label = label("doc.scalability.not_scalable", "Não Escalável");
pub const SCALABILITY_FEATURES_LABEL: Label =
    label("doc.scalability.features", "Scalability Features");
pub const PERFORMANCE_FEATURES_LABEL: Label =
    label("doc.scalability.performance", "Performance Features");

pub const RESTRICTIONS_HEADING: Label = label("doc.restrictions.heading", "Restrictions");
pub const AVOID_MARKER: Label = label("doc.restrictions.avoid", "Avoid:");

pub const INTEGRATIONS_HEADING: Label = label("doc.integrations.heading", "Integrations");

#[cfg(test)]
mod tests {
    use super::*;
    use promptforge_core::domain::translate::{NoTranslations, StaticTranslations};

    #[test]
    fn test_label_default_on_miss() {
        assert_eq!(PROJECT_HEADING.resolve(&NoTranslations), "Project Information");
        assert_eq!(SCALABLE_HEADING.resolve(&NoTranslations), "Escalável");
        assert_eq!(AVOID_MARKER.resolve(&NoTranslations), "Avoid:");
        assert_eq!(NOT_SPECIFIED.resolve(&NoTranslations), "not specified");
        assert_eq!(DEFAULT_VERSION.resolve(&NoTranslations), "1.0.0");
    }

    #[test]
    fn test_label_translation_override() {
        let translations =
            StaticTranslations::new().with("doc.project.heading", "Informações do Projeto");
        assert_eq!(
            PROJECT_HEADING.resolve(&translations),
            "Informações do Projeto"
        );
    }
}
