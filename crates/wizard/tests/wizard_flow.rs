use std::sync::Arc;

use chrono::{TimeZone, Utc};
use composer::{EnhanceError, ObjectiveEnhancer};
use promptforge_core::catalog_defaults;
use promptforge_core::domain::update::{
    CodeStructureUpdate, FeaturesUpdate, IntegrationsUpdate, ObjectiveUpdate, ProjectUpdate,
    RequirementsUpdate, RestrictionsUpdate, ScalabilityUpdate, SecurityUpdate, StackUpdate,
    SystemTypeUpdate, UxUiUpdate,
};
use promptforge_core::{NoTranslations, SectionKey, SectionUpdate};
use wizard::{EnhancementOutcome, SectionState, WizardSession, WizardSnapshot};

fn new_session() -> WizardSession {
    WizardSession::new(
        Arc::new(catalog_defaults::builtin()),
        Arc::new(NoTranslations),
    )
}

fn finalize_required(session: &mut WizardSession) {
    for key in [
        SectionKey::Project,
        SectionKey::SystemType,
        SectionKey::Objective,
    ] {
        session.finalize_section(key).unwrap();
    }
}

/// Fill every section the way a user walking the whole wizard would.
fn filled_session() -> WizardSession {
    let mut session = new_session();

    session
        .update_section(SectionUpdate::Project(ProjectUpdate {
            title: Some("Invoice Hub".to_string()),
            author: Some("Dana Reyes".to_string()),
            email: Some("dana@invoicehub.dev".to_string()),
            created_at: Some(Utc.with_ymd_and_hms(2024, 11, 5, 9, 30, 0).unwrap()),
            ..Default::default()
        }))
        .unwrap();
    session
        .update_section(SectionUpdate::SystemType(SystemTypeUpdate {
            selected: Some("saas".to_string()),
            ..Default::default()
        }))
        .unwrap();
    session
        .update_section(SectionUpdate::Objective(ObjectiveUpdate {
            primary_objective: Some("Automate invoicing for freelancers".to_string()),
            selected: Some(vec!["automateProcesses".to_string(), "other".to_string()]),
            custom: Some(vec!["Win enterprise accounts".to_string()]),
            ..Default::default()
        }))
        .unwrap();
    session
        .update_section(SectionUpdate::Requirements(RequirementsUpdate {
            user_types: Some(vec!["Admin".to_string(), "Freelancer".to_string()]),
            functional: Some(vec!["Issue invoices".to_string(), "Track payments".to_string()]),
            non_functional: Some(vec!["performance".to_string()]),
            ..Default::default()
        }))
        .unwrap();
    session
        .update_section(SectionUpdate::Features(FeaturesUpdate {
            selected: Some(vec!["authentication".to_string(), "payments".to_string()]),
            ..Default::default()
        }))
        .unwrap();
    session
        .update_section(SectionUpdate::UxUi(UxUiUpdate {
            color_palette: Some("custom".to_string()),
            custom_colors: Some(vec!["#0f172a".to_string(), "#38bdf8".to_string()]),
            visual_style: Some("minimalist".to_string()),
            landing_page: Some(true),
            landing_structure: Some(vec!["hero".to_string(), "pricing".to_string()]),
            user_dashboard: Some(true),
            dashboard_features: Some(vec!["analytics".to_string()]),
            ..Default::default()
        }))
        .unwrap();
    session
        .update_section(SectionUpdate::Stack(StackUpdate {
            separate_frontend_backend: Some(true),
            frontend: Some("react".to_string()),
            backend: Some("nodejs".to_string()),
            database: Some("postgresql".to_string()),
            orm: Some("prisma".to_string()),
            hosting: Some("vercel".to_string()),
            ..Default::default()
        }))
        .unwrap();
    session
        .update_section(SectionUpdate::Security(SecurityUpdate {
            selected: Some(vec!["rateLimiting".to_string()]),
            ..Default::default()
        }))
        .unwrap();
    session
        .update_section(SectionUpdate::CodeStructure(CodeStructureUpdate {
            architectural_pattern: Some("cleanArchitecture".to_string()),
            best_practices: Some(vec!["automatedTests".to_string(), "cicd".to_string()]),
            ..Default::default()
        }))
        .unwrap();
    session
        .update_section(SectionUpdate::Scalability(ScalabilityUpdate {
            is_scalable: Some(true),
            scalability_features: Some(vec!["caching".to_string()]),
            ..Default::default()
        }))
        .unwrap();
    session
        .update_section(SectionUpdate::Restrictions(RestrictionsUpdate {
            selected: Some(vec!["jquery".to_string()]),
            ..Default::default()
        }))
        .unwrap();
    session
        .update_section(SectionUpdate::Integrations(IntegrationsUpdate {
            needs_integrations: Some(true),
            selected: Some(vec!["stripe".to_string()]),
            ..Default::default()
        }))
        .unwrap();

    session
}

mod full_flow {
    use super::*;

    #[test]
    fn test_complete_walkthrough_generates_ordered_document() {
        let mut session = filled_session();
        finalize_required(&mut session);

        let doc = session.generate().unwrap();

        assert!(doc.contains("**Title:** Invoice Hub"));
        assert!(doc.contains("**Author:** Dana Reyes"));
        assert!(doc.contains("**Created:** 2024-11-05"));
        assert!(doc.contains("**Version:** 1.0.0"));
        assert!(doc.contains("## System Type\n- SaaS Platform"));
        assert!(doc.contains("## Main Objective\nAutomate invoicing for freelancers"));
        assert!(doc.contains("### Additional Objectives\n- Automate Processes"));
        assert!(doc.contains("### Other Objectives\n- Win enterprise accounts"));
        assert!(doc.contains("## Requirements (Admin, Freelancer)"));
        assert!(doc.contains("- Performance - Fast response times under load"));
        assert!(doc.contains("## Features\n- Authentication\n- Payments"));
        assert!(doc.contains("- Custom Palette: [\"#0f172a\",\"#38bdf8\"]"));
        assert!(doc.contains("### Landing Page\n**Structure:** Hero Section, Pricing"));
        assert!(doc.contains("**Dashboard Features:** Analytics"));
        assert!(doc.contains("**Frontend:** React\n**Backend:** Node.js"));
        assert!(doc.contains("**ORM:** Prisma"));
        assert!(doc.contains("**Architectural Pattern:** Clean Architecture"));
        assert!(doc.contains("**Best Practices:** Automated Tests, CI/CD"));
        assert!(doc.contains("## Escalável\n**Scalability Features:** Caching"));
        assert!(doc.contains("- Avoid: jQuery"));
        assert!(doc.contains("## Integrations\n- Stripe"));

        let order = [
            "## Project Information",
            "## System Type",
            "## Main Objective",
            "## Requirements",
            "## Features",
            "## UX and UI",
            "## Technology Stack",
            "## Security",
            "## Code Structure",
            "## Escalável",
            "## Restrictions",
            "## Integrations",
        ];
        let positions: Vec<usize> = order
            .iter()
            .map(|h| doc.find(h).unwrap_or_else(|| panic!("missing {h}")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        // Preview is the same renderer, so after the gate passes they agree.
        assert_eq!(session.preview(), doc);
    }

    #[test]
    fn test_updates_accept_wire_format() {
        let mut session = new_session();
        let update: SectionUpdate = serde_json::from_value(serde_json::json!({
            "section": "uxui",
            "visual_style": "minimalist",
            "landing_page": true,
            "landing_structure": ["hero"]
        }))
        .unwrap();
        session.update_section(update).unwrap();

        assert!(session.preview().contains("**Visual Style:** Minimalist"));
        assert!(session.preview().contains("**Structure:** Hero Section"));
    }

    #[test]
    fn test_empty_session_previews_empty() {
        let session = new_session();
        assert_eq!(session.preview(), "");
    }
}

mod merge_semantics {
    use super::*;

    #[test]
    fn test_custom_entries_merge_into_selection() {
        let mut session = new_session();
        session
            .update_section(SectionUpdate::Features(FeaturesUpdate {
                selected: Some(vec!["authentication".to_string(), "other".to_string()]),
                custom: Some(vec![
                    "Gamified onboarding".to_string(),
                    "Partner portal".to_string(),
                ]),
            }))
            .unwrap();

        assert_eq!(
            session.config().features.specific.selected,
            vec![
                "authentication",
                "other",
                "Gamified onboarding",
                "Partner portal"
            ]
        );

        let doc = session.preview();
        assert!(doc.contains("- Gamified onboarding"));
        // The sentinel itself never renders.
        assert!(!doc.contains("- Other"));
    }

    #[test]
    fn test_removing_custom_entry_removes_merged_copy() {
        let mut session = new_session();
        session
            .update_section(SectionUpdate::Features(FeaturesUpdate {
                selected: Some(vec!["other".to_string()]),
                custom: Some(vec!["Alpha".to_string(), "Beta".to_string()]),
            }))
            .unwrap();
        session
            .update_section(SectionUpdate::Features(FeaturesUpdate {
                custom: Some(vec!["Alpha".to_string()]),
                ..Default::default()
            }))
            .unwrap();

        assert_eq!(
            session.config().features.specific.selected,
            vec!["other", "Alpha"]
        );
        assert!(!session.preview().contains("Beta"));
    }

    #[test]
    fn test_duplicate_entries_collapse_to_first() {
        let mut session = new_session();
        session
            .update_section(SectionUpdate::Features(FeaturesUpdate {
                selected: Some(vec![
                    "authentication".to_string(),
                    "authentication".to_string(),
                ]),
                custom: Some(vec!["Alpha".to_string(), " Alpha ".to_string()]),
            }))
            .unwrap();

        assert_eq!(
            session.config().features.specific.selected,
            vec!["authentication", "Alpha"]
        );
        assert_eq!(session.preview().matches("- Alpha").count(), 1);
    }
}

mod single_choice {
    use super::*;

    #[test]
    fn test_new_choice_replaces_previous() {
        let mut session = new_session();
        session
            .update_section(SectionUpdate::Stack(StackUpdate {
                separate_frontend_backend: Some(true),
                frontend: Some("react".to_string()),
                ..Default::default()
            }))
            .unwrap();
        session
            .update_section(SectionUpdate::Stack(StackUpdate {
                frontend: Some("vue".to_string()),
                ..Default::default()
            }))
            .unwrap();

        assert_eq!(session.config().stack.frontend.selected.as_deref(), Some("vue"));
        let doc = session.preview();
        assert!(doc.contains("**Frontend:** Vue"));
        assert!(!doc.contains("React"));
    }

    #[test]
    fn test_other_choice_surfaces_custom_text() {
        let mut session = new_session();
        session
            .update_section(SectionUpdate::UxUi(UxUiUpdate {
                visual_style: Some("other".to_string()),
                custom_visual_styles: Some(vec!["Neo-brutalist".to_string()]),
                ..Default::default()
            }))
            .unwrap();

        assert!(session.preview().contains("**Visual Style:** Neo-brutalist"));
    }

    #[test]
    fn test_fullstack_and_split_tiers_are_exclusive_in_output() {
        let mut session = new_session();
        session
            .update_section(SectionUpdate::Stack(StackUpdate {
                fullstack: Some("nextjs".to_string()),
                frontend: Some("react".to_string()),
                ..Default::default()
            }))
            .unwrap();

        assert!(session.preview().contains("**Fullstack:** Next.js"));
        assert!(!session.preview().contains("**Frontend:**"));

        session
            .update_section(SectionUpdate::Stack(StackUpdate {
                separate_frontend_backend: Some(true),
                ..Default::default()
            }))
            .unwrap();
        assert!(session.preview().contains("**Frontend:** React"));
        assert!(!session.preview().contains("**Fullstack:**"));
    }
}

mod integrations_gate {
    use super::*;

    #[test]
    fn test_selections_render_only_while_needed() {
        let mut session = new_session();
        session
            .update_section(SectionUpdate::Integrations(IntegrationsUpdate {
                selected: Some(vec!["stripe".to_string(), "twilio".to_string()]),
                ..Default::default()
            }))
            .unwrap();
        assert!(!session.preview().contains("## Integrations"));

        session
            .update_section(SectionUpdate::Integrations(IntegrationsUpdate {
                needs_integrations: Some(true),
                ..Default::default()
            }))
            .unwrap();
        assert!(session
            .preview()
            .contains("## Integrations\n- Stripe\n- Twilio"));

        // Turning the flag back off hides the section but keeps the data.
        session
            .update_section(SectionUpdate::Integrations(IntegrationsUpdate {
                needs_integrations: Some(false),
                ..Default::default()
            }))
            .unwrap();
        assert!(!session.preview().contains("## Integrations"));
        assert_eq!(
            session.config().integrations.integrations.selected,
            vec!["stripe", "twilio"]
        );
    }
}

mod bounds {
    use super::*;

    #[test]
    fn test_oversized_custom_list_rejected_not_truncated() {
        let mut session = new_session();
        let before = session.preview();

        let err = session
            .update_section(SectionUpdate::Features(FeaturesUpdate {
                custom: Some((0..11).map(|i| format!("feature {i}")).collect()),
                ..Default::default()
            }))
            .unwrap_err();

        assert!(err.to_string().contains("at most 10"));
        assert_eq!(session.preview(), before);
        assert!(session.config().features.specific.custom.is_empty());
    }

    #[test]
    fn test_full_list_stays_full_after_rejected_update() {
        let mut session = new_session();
        let full: Vec<String> = (0..10).map(|i| format!("feature {i}")).collect();
        session
            .update_section(SectionUpdate::Features(FeaturesUpdate {
                custom: Some(full.clone()),
                ..Default::default()
            }))
            .unwrap();

        session
            .update_section(SectionUpdate::Features(FeaturesUpdate {
                custom: Some((0..11).map(|i| format!("feature {i}")).collect()),
                ..Default::default()
            }))
            .unwrap_err();

        assert_eq!(session.config().features.specific.custom, full);
    }

    #[test]
    fn test_primary_objective_length_limit() {
        let mut session = new_session();
        let err = session
            .update_section(SectionUpdate::Objective(ObjectiveUpdate {
                primary_objective: Some("x".repeat(151)),
                ..Default::default()
            }))
            .unwrap_err();
        assert!(err.to_string().contains("150"));

        session
            .update_section(SectionUpdate::Objective(ObjectiveUpdate {
                primary_objective: Some("x".repeat(150)),
                ..Default::default()
            }))
            .unwrap();
    }

    #[test]
    fn test_requirements_free_lists_are_bounded() {
        let mut session = new_session();
        let eleven: Vec<String> = (0..11).map(|i| format!("role {i}")).collect();

        let err = session
            .update_section(SectionUpdate::Requirements(RequirementsUpdate {
                user_types: Some(eleven.clone()),
                functional: Some(eleven),
                ..Default::default()
            }))
            .unwrap_err();

        assert!(err.to_string().contains("at most 10"));
        assert!(session.config().requirements.user_types.is_empty());
        assert!(session.config().requirements.functional.is_empty());
    }

    #[test]
    fn test_unknown_catalog_id_rejected() {
        let mut session = new_session();
        let err = session
            .update_section(SectionUpdate::Stack(StackUpdate {
                database: Some("punchcards".to_string()),
                ..Default::default()
            }))
            .unwrap_err();
        assert!(err.to_string().contains("punchcards"));
    }
}

mod gate {
    use super::*;

    #[test]
    fn test_generation_blocked_in_canonical_order() {
        let mut session = filled_session();

        let err = session.generate().unwrap_err();
        assert_eq!(err.first_missing(), Some(SectionKey::Project));

        session.finalize_section(SectionKey::Project).unwrap();
        session.finalize_section(SectionKey::Objective).unwrap();
        let err = session.generate().unwrap_err();
        assert_eq!(err.first_missing(), Some(SectionKey::SystemType));

        session.finalize_section(SectionKey::SystemType).unwrap();
        assert!(session.generate().is_ok());
    }

    #[test]
    fn test_optional_sections_never_block() {
        let mut session = new_session();
        session
            .update_section(SectionUpdate::Project(ProjectUpdate {
                title: Some("Invoice Hub".to_string()),
                ..Default::default()
            }))
            .unwrap();
        session
            .update_section(SectionUpdate::SystemType(SystemTypeUpdate {
                selected: Some("api".to_string()),
                ..Default::default()
            }))
            .unwrap();
        session
            .update_section(SectionUpdate::Objective(ObjectiveUpdate {
                primary_objective: Some("Expose a billing API".to_string()),
                ..Default::default()
            }))
            .unwrap();
        finalize_required(&mut session);

        // Restrictions and integrations were never touched.
        assert_eq!(
            session.section_state(SectionKey::Restrictions),
            SectionState::Draft
        );
        assert!(session.generate().is_ok());
    }

    #[test]
    fn test_incomplete_section_cannot_finalize() {
        let mut session = new_session();
        let err = session.finalize_section(SectionKey::SystemType).unwrap_err();
        assert!(err.to_string().contains("system_type"));
    }
}

mod determinism {
    use super::*;

    #[test]
    fn test_same_config_same_document() {
        let mut session = filled_session();
        finalize_required(&mut session);

        let first = session.generate().unwrap();
        let second = session.generate().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_snapshot_restores_identical_document() {
        let mut session = filled_session();
        finalize_required(&mut session);

        let json = serde_json::to_string(&session.snapshot()).unwrap();
        let snapshot: WizardSnapshot = serde_json::from_str(&json).unwrap();
        let restored = WizardSession::restore(
            snapshot,
            Arc::new(catalog_defaults::builtin()),
            Arc::new(NoTranslations),
        );

        assert_eq!(restored.generate().unwrap(), session.generate().unwrap());
    }
}

mod enhancement {
    use super::*;

    struct PolishingEnhancer;

    #[async_trait::async_trait]
    impl ObjectiveEnhancer for PolishingEnhancer {
        async fn enhance(&self, text: &str) -> Result<String, EnhanceError> {
            Ok(format!(
                "**Objetivo Principal:** {} with measurable milestones",
                text
            ))
        }
    }

    struct OfflineEnhancer;

    #[async_trait::async_trait]
    impl ObjectiveEnhancer for OfflineEnhancer {
        async fn enhance(&self, _text: &str) -> Result<String, EnhanceError> {
            Err(EnhanceError::Provider("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn test_enhanced_document_strips_label_prefix() {
        let mut session = filled_session();
        finalize_required(&mut session);

        let document = session.generate_enhanced(&PolishingEnhancer).await.unwrap();
        assert_eq!(document.enhancement, EnhancementOutcome::Applied);
        assert!(document.text.contains(
            "## Main Objective\nAutomate invoicing for freelancers with measurable milestones"
        ));
        assert!(!document.text.contains("Objetivo Principal"));
    }

    #[tokio::test]
    async fn test_enhancer_failure_degrades_gracefully() {
        let mut session = filled_session();
        finalize_required(&mut session);

        let document = session.generate_enhanced(&OfflineEnhancer).await.unwrap();
        assert!(matches!(
            document.enhancement,
            EnhancementOutcome::Failed(EnhanceError::Provider(_))
        ));
        assert_eq!(document.text, session.generate().unwrap());
    }

    #[tokio::test]
    async fn test_enhancement_respects_the_gate() {
        let session = new_session();
        assert!(session.generate_enhanced(&PolishingEnhancer).await.is_err());
    }
}
