use std::str::FromStr;

use poise::serenity_prelude as serenity;

use parlor_store::Category;

/// Custom-id prefix for the question follow-up buttons. The category name is
/// appended, e.g. `parlor_q_truth`.
pub const QUESTION_BUTTON_PREFIX: &str = "parlor_q_";

pub fn question_button_id(category: Category) -> String {
    format!("{}{}", QUESTION_BUTTON_PREFIX, category.as_str())
}

/// Reverse of `question_button_id`; `None` for foreign custom ids.
pub fn category_for_button(custom_id: &str) -> Option<Category> {
    let raw = custom_id.strip_prefix(QUESTION_BUTTON_PREFIX)?;
    Category::from_str(raw).ok()
}

/// The four-button row attached to every question embed.
pub fn question_buttons() -> serenity::CreateActionRow {
    serenity::CreateActionRow::Buttons(vec![
        serenity::CreateButton::new(question_button_id(Category::Truth))
            .label("Truth")
            .style(serenity::ButtonStyle::Success),
        serenity::CreateButton::new(question_button_id(Category::Dare))
            .label("Dare")
            .style(serenity::ButtonStyle::Danger),
        serenity::CreateButton::new(question_button_id(Category::Wyr))
            .label("Would You Rather")
            .style(serenity::ButtonStyle::Primary),
        serenity::CreateButton::new(question_button_id(Category::Ama))
            .label("Ask Me Anything")
            .style(serenity::ButtonStyle::Secondary),
    ])
}

#[cfg(test)]
mod tests {
    use super::{category_for_button, question_button_id};
    use parlor_store::Category;

    #[test]
    fn button_ids_round_trip() {
        for category in Category::ALL {
            let id = question_button_id(category);
            assert_eq!(category_for_button(&id), Some(category));
        }
    }

    #[test]
    fn foreign_custom_ids_are_ignored() {
        assert_eq!(category_for_button("parlor_mode_sfw"), None);
        assert_eq!(category_for_button("parlor_q_riddle"), None);
        assert_eq!(category_for_button("truth"), None);
    }
}
