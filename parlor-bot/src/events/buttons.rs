use poise::serenity_prelude as serenity;
use tracing::debug;

use parlor_commands::game::embeds::{category_for_button, question_buttons};
use parlor_commands::settings::mode::{MODE_BUTTON_NSFW, MODE_BUTTON_SFW};
use parlor_core::{Data, Error};
use parlor_store::Mode;
use parlor_utils::embed::question_embed;

/// Dispatch a component press from a question or mode-select button.
/// Foreign custom ids are ignored.
pub async fn handle_component(
    ctx: &serenity::Context,
    data: &Data,
    component: &serenity::ComponentInteraction,
) -> Result<(), Error> {
    let custom_id = component.data.custom_id.as_str();

    if let Some(category) = category_for_button(custom_id) {
        let mode = data.modes.mode_for(component.user.id.get());
        let content = match data.questions.draw(category, mode) {
            Ok(prompt) => prompt,
            Err(placeholder) => placeholder.to_string(),
        };

        let location = match component.guild_id {
            Some(_) => match component.channel_id.name(ctx).await {
                Ok(name) => format!("#{}", name),
                Err(_) => "#channel".to_owned(),
            },
            None => "DM".to_owned(),
        };

        let embed = question_embed(category.title(), content, mode.label(), &location);
        let response = serenity::CreateInteractionResponse::Message(
            serenity::CreateInteractionResponseMessage::new()
                .embed(embed)
                .components(vec![question_buttons()]),
        );

        respond_swallowing_stale(ctx, component, response).await?;
        return Ok(());
    }

    let mode = match custom_id {
        MODE_BUTTON_SFW => Mode::Sfw,
        MODE_BUTTON_NSFW => Mode::Nsfw,
        _ => return Ok(()),
    };

    data.modes.set_mode(component.user.id.get(), mode)?;

    let confirmation = match mode {
        Mode::Sfw => "✅ Your mode has been set to **SFW**.",
        Mode::Nsfw => "🔞 Your mode has been set to **NSFW** (keep it respectful).",
    };

    let response = serenity::CreateInteractionResponse::Message(
        serenity::CreateInteractionResponseMessage::new()
            .content(confirmation)
            // Ephemeral acknowledgements only work in guilds.
            .ephemeral(component.guild_id.is_some()),
    );

    respond_swallowing_stale(ctx, component, response).await?;
    Ok(())
}

/// Send an interaction response, swallowing the stale-acknowledgement errors
/// the gateway occasionally produces (expired interaction, double ack).
async fn respond_swallowing_stale(
    ctx: &serenity::Context,
    component: &serenity::ComponentInteraction,
    response: serenity::CreateInteractionResponse,
) -> Result<(), Error> {
    if let Err(source) = component.create_response(&ctx.http, response).await {
        if is_stale_interaction(&source) {
            debug!(custom_id = %component.data.custom_id, "stale component acknowledgement");
            return Ok(());
        }
        return Err(source.into());
    }

    Ok(())
}

fn is_stale_interaction(source: &serenity::Error) -> bool {
    matches!(
        source,
        serenity::Error::Http(serenity::HttpError::UnsuccessfulRequest(response))
            if response.error.code == 10062 || response.error.code == 40060
    )
}
