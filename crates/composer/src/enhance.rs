use async_trait::async_trait;
use regex::Regex;
use thiserror::Error;

/// Error from an enhancement provider.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnhanceError {
    #[error("Enhancement provider failed: {0}")]
    Provider(String),

    #[error("Enhancement provider returned an empty response")]
    EmptyResponse,
}

/// Rewrites a raw objective statement into sharper text. Implementations
/// typically call a language model; the document pipeline itself never
/// performs I/O.
#[async_trait]
pub trait ObjectiveEnhancer: Send + Sync {
    async fn enhance(&self, text: &str) -> Result<String, EnhanceError>;
}

/// Strip one leading bold "Objetivo Principal" label that enhancement
/// providers tend to echo back, then trim. Case-insensitive, tolerates a
/// colon inside or after the bold markers. Text without the label passes
/// through trimmed.
pub fn strip_objective_label(text: &str) -> String {
    let pattern = Regex::new(r"(?i)^\s*\*\*\s*objetivo\s+principal\s*:?\s*\*\*\s*:?\s*")
        .expect("Invalid objective label pattern");
    pattern.replace(text, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_bold_label_with_inner_colon() {
        assert_eq!(
            strip_objective_label("**Objetivo Principal:** Automate invoicing"),
            "Automate invoicing"
        );
    }

    #[test]
    fn test_strips_bold_label_with_outer_colon() {
        assert_eq!(
            strip_objective_label("**Objetivo Principal**: Automate invoicing"),
            "Automate invoicing"
        );
    }

    #[test]
    fn test_strip_is_case_insensitive() {
        assert_eq!(
            strip_objective_label("**OBJETIVO PRINCIPAL:** Reduce churn"),
            "Reduce churn"
        );
        assert_eq!(
            strip_objective_label("  **objetivo principal** grow revenue"),
            "grow revenue"
        );
    }

    #[test]
    fn test_text_without_label_passes_through_trimmed() {
        assert_eq!(
            strip_objective_label("  Launch the beta in Q3  "),
            "Launch the beta in Q3"
        );
    }

    #[test]
    fn test_label_in_the_middle_is_kept() {
        let text = "Ship fast. **Objetivo Principal:** is not a prefix here";
        assert_eq!(strip_objective_label(text), text);
    }

    #[test]
    fn test_only_first_label_is_stripped() {
        assert_eq!(
            strip_objective_label("**Objetivo Principal:** **Objetivo Principal:** doubled"),
            "**Objetivo Principal:** doubled"
        );
    }

    struct EchoEnhancer;

    #[async_trait]
    impl ObjectiveEnhancer for EchoEnhancer {
        async fn enhance(&self, text: &str) -> Result<String, EnhanceError> {
            if text.is_empty() {
                return Err(EnhanceError::EmptyResponse);
            }
            Ok(format!("**Objetivo Principal:** {text}"))
        }
    }

    #[tokio::test]
    async fn test_enhancer_output_composes_with_strip() {
        let enhanced = EchoEnhancer.enhance("Automate invoicing").await.unwrap();
        assert_eq!(strip_objective_label(&enhanced), "Automate invoicing");

        let err = EchoEnhancer.enhance("").await.unwrap_err();
        assert_eq!(err, EnhanceError::EmptyResponse);
    }
}
