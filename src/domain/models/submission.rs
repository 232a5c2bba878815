use serde::Deserialize;

use super::{ExpertCategory, EMPTY_INPUT_WARNING};
use crate::domain::DomainError;

/// What the user sent when pressing the submit button.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Submission {
    #[serde(default)]
    pub expert: ExpertCategory,
    #[serde(default)]
    pub content: String,
}

impl Submission {
    pub fn new(expert: ExpertCategory, content: impl Into<String>) -> Self {
        Self {
            expert,
            content: content.into(),
        }
    }

    /// Empty or whitespace-only content is rejected before any LLM call.
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.is_blank() {
            return Err(DomainError::validation(EMPTY_INPUT_WARNING));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_deserializes_from_form_fields() {
        let submission: Submission =
            serde_json::from_str(r#"{"expert":"ワークライフバランスの専門家","content":"残業が多い"}"#)
                .unwrap();
        assert_eq!(submission.expert, ExpertCategory::WorkLifeBalance);
        assert_eq!(submission.content, "残業が多い");
    }

    #[test]
    fn missing_fields_default() {
        let submission: Submission = serde_json::from_str("{}").unwrap();
        assert_eq!(submission.expert, ExpertCategory::Career);
        assert!(submission.is_blank());
    }

    #[test]
    fn blank_content_fails_validation() {
        let err = Submission::new(ExpertCategory::Career, " \n\t")
            .validate()
            .unwrap_err();
        assert!(err.is_validation_error());
        assert!(err.to_string().contains(EMPTY_INPUT_WARNING));

        assert!(Submission::new(ExpertCategory::Career, " 相談 ").validate().is_ok());
    }
}
