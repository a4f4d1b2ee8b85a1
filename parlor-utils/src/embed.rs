use poise::serenity_prelude as serenity;

/// Default embed color used across the bot UI.
pub const DEFAULT_EMBED_COLOR: u32 = 0xE7_5D_8D;

/// Build the standard question embed: category title, prompt (or placeholder)
/// as the description, and a `MODE • location` footer.
pub fn question_embed(
    title: &str,
    content: impl Into<String>,
    mode_label: &str,
    location: &str,
) -> serenity::CreateEmbed {
    serenity::CreateEmbed::new()
        .title(title.to_owned())
        .color(DEFAULT_EMBED_COLOR)
        .description(content)
        .footer(serenity::CreateEmbedFooter::new(format!(
            "{} • {}",
            mode_label, location
        )))
}

/// Build a plain titled embed (help, error notices).
pub fn titled_embed(title: &str) -> serenity::CreateEmbed {
    serenity::CreateEmbed::new()
        .title(title.to_owned())
        .color(DEFAULT_EMBED_COLOR)
}
