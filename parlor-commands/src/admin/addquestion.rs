use tracing::info;

use parlor_core::{Context, Error};

use crate::CommandMeta;
use crate::admin::{NOT_OWNER_MESSAGE, is_owner, parse_keys};

pub const META: CommandMeta = CommandMeta {
    name: "addquestion",
    desc: "Add a prompt to the question bank (owner only).",
    category: "admin",
    usage: "/addquestion <category> <mode> <prompt>",
};

#[poise::command(prefix_command, slash_command, category = "Admin")]
pub async fn addquestion(
    ctx: Context<'_>,
    #[description = "Category: truth, dare, wyr, or ama"] category: String,
    #[description = "Mode: sfw or nsfw"] mode: String,
    #[description = "The prompt text"]
    #[rest]
    prompt: String,
) -> Result<(), Error> {
    if !is_owner(&ctx) {
        ctx.say(NOT_OWNER_MESSAGE).await?;
        return Ok(());
    }

    let (category, mode) = match parse_keys(&category, &mode) {
        Ok(keys) => keys,
        Err(rejection) => {
            ctx.say(rejection.to_string()).await?;
            return Ok(());
        }
    };

    let prompt = prompt.trim();
    if prompt.is_empty() {
        ctx.say("The prompt text may not be empty.").await?;
        return Ok(());
    }

    ctx.data().questions.add(category, mode, prompt)?;
    info!(%category, %mode, "prompt added");

    ctx.say(format!(
        "Added to {} ({}): {}",
        category.label(),
        mode.label(),
        prompt
    ))
    .await?;

    Ok(())
}
