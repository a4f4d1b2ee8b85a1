pub mod ama;
pub mod dare;
pub mod embeds;
pub mod truth;
pub mod wyr;

use parlor_core::{Context, Error};
use parlor_store::Category;
use parlor_utils::embed::question_embed;

/// Draw a prompt for the invoking user and reply with the question embed and
/// the follow-up button row. An empty pool renders as the placeholder text
/// inside the same embed, never as a command failure.
pub(crate) async fn send_question(ctx: Context<'_>, category: Category) -> Result<(), Error> {
    let data = ctx.data();
    let mode = data.modes.mode_for(ctx.author().id.get());

    let content = match data.questions.draw(category, mode) {
        Ok(prompt) => prompt,
        Err(placeholder) => placeholder.to_string(),
    };

    let location = match ctx.guild_id() {
        Some(_) => match ctx.channel_id().name(ctx.serenity_context()).await {
            Ok(name) => format!("#{}", name),
            Err(_) => "#channel".to_owned(),
        },
        None => "DM".to_owned(),
    };

    let embed = question_embed(category.title(), content, mode.label(), &location);
    ctx.send(
        poise::CreateReply::default()
            .embed(embed)
            .components(vec![embeds::question_buttons()]),
    )
    .await?;

    Ok(())
}
