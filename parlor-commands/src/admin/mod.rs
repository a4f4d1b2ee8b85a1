pub mod addquestion;
pub mod removequestion;

use std::str::FromStr;

use parlor_core::Context;
use parlor_store::{Category, Mode, QuestionError};

pub(crate) const NOT_OWNER_MESSAGE: &str = "Only the bot owner can manage the question bank.";

/// Admin commands are gated on the single configured owner id.
pub(crate) fn is_owner(ctx: &Context<'_>) -> bool {
    ctx.data()
        .owner_id
        .is_some_and(|owner| owner == ctx.author().id.get())
}

/// Validate raw category/mode arguments at the call boundary; the rejection
/// message is sent back to the invoker verbatim.
pub(crate) fn parse_keys(
    raw_category: &str,
    raw_mode: &str,
) -> Result<(Category, Mode), QuestionError> {
    let category = Category::from_str(raw_category)?;
    let mode = Mode::from_str(raw_mode)?;
    Ok((category, mode))
}

#[cfg(test)]
mod tests {
    use super::parse_keys;
    use parlor_store::{Category, Mode, QuestionError};

    #[test]
    fn accepts_recognized_keys() {
        assert_eq!(
            parse_keys("dare", "nsfw").unwrap(),
            (Category::Dare, Mode::Nsfw)
        );
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(matches!(
            parse_keys("riddle", "sfw"),
            Err(QuestionError::UnknownCategory(_))
        ));
        assert!(matches!(
            parse_keys("truth", "spicy"),
            Err(QuestionError::UnknownMode(_))
        ));
    }
}
