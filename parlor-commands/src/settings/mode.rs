use poise::serenity_prelude as serenity;

use parlor_core::{Context, Error};

use crate::CommandMeta;

pub const META: CommandMeta = CommandMeta {
    name: "mode",
    desc: "Choose SFW or NSFW mode (per user).",
    category: "settings",
    usage: "/mode",
};

/// Custom ids for the mode-select buttons, handled by the component
/// interaction event handler.
pub const MODE_BUTTON_SFW: &str = "parlor_mode_sfw";
pub const MODE_BUTTON_NSFW: &str = "parlor_mode_nsfw";

pub fn mode_buttons() -> serenity::CreateActionRow {
    serenity::CreateActionRow::Buttons(vec![
        serenity::CreateButton::new(MODE_BUTTON_SFW)
            .label("SFW Mode")
            .style(serenity::ButtonStyle::Success),
        serenity::CreateButton::new(MODE_BUTTON_NSFW)
            .label("NSFW Mode")
            .style(serenity::ButtonStyle::Danger),
    ])
}

#[poise::command(prefix_command, slash_command, category = "Settings")]
pub async fn mode(ctx: Context<'_>) -> Result<(), Error> {
    // Ephemeral replies only work in guilds.
    let ephemeral = ctx.guild_id().is_some();

    ctx.send(
        poise::CreateReply::default()
            .content("Choose your mode:")
            .components(vec![mode_buttons()])
            .ephemeral(ephemeral),
    )
    .await?;

    Ok(())
}
