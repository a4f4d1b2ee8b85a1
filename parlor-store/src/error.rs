use thiserror::Error;

use crate::model::{Category, Mode};

/// Typed outcomes of question-bank lookups and mutations.
///
/// The display strings double as the user-facing reply text: an empty pool
/// or a missing prompt is informational, an unknown category or mode is a
/// caller mistake. None of these are ever surfaced as a hard failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuestionError {
    #[error("Unknown category: {0}. Valid categories: truth, dare, wyr, ama.")]
    UnknownCategory(String),

    #[error("Unknown mode: {0}. Valid modes: sfw, nsfw.")]
    UnknownMode(String),

    #[error("No questions found for {} ({}).", category.label(), mode.label())]
    EmptyPool { category: Category, mode: Mode },

    #[error("That prompt is not in {} ({}).", category.label(), mode.label())]
    PromptNotFound { category: Category, mode: Mode },
}

impl QuestionError {
    /// True for the informational outcomes (empty pool, missing prompt),
    /// false for caller mistakes (unknown category/mode).
    pub fn is_informational(&self) -> bool {
        matches!(
            self,
            QuestionError::EmptyPool { .. } | QuestionError::PromptNotFound { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::QuestionError;
    use crate::model::{Category, Mode};

    #[test]
    fn placeholder_message_names_category_and_mode() {
        let err = QuestionError::EmptyPool {
            category: Category::Truth,
            mode: Mode::Nsfw,
        };
        assert_eq!(err.to_string(), "No questions found for TRUTH (NSFW).");
    }

    #[test]
    fn unknown_category_lists_valid_ones() {
        let err = QuestionError::UnknownCategory("riddle".to_owned());
        assert!(err.to_string().contains("truth, dare, wyr, ama"));
        assert!(!err.is_informational());
    }
}
