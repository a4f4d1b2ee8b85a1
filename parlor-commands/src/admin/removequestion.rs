use tracing::info;

use parlor_core::{Context, Error};

use crate::CommandMeta;
use crate::admin::{NOT_OWNER_MESSAGE, is_owner, parse_keys};

pub const META: CommandMeta = CommandMeta {
    name: "removequestion",
    desc: "Remove a prompt from the question bank (owner only).",
    category: "admin",
    usage: "/removequestion <category> <mode> <prompt>",
};

#[poise::command(prefix_command, slash_command, category = "Admin")]
pub async fn removequestion(
    ctx: Context<'_>,
    #[description = "Category: truth, dare, wyr, or ama"] category: String,
    #[description = "Mode: sfw or nsfw"] mode: String,
    #[description = "The exact prompt text to remove"]
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
    match ctx.data().questions.remove(category, mode, prompt)? {
        Ok(()) => {
            info!(%category, %mode, "prompt removed");
            ctx.say(format!(
                "Removed from {} ({}): {}",
                category.label(),
                mode.label(),
                prompt
            ))
            .await?;
        }
        Err(not_found) => {
            ctx.say(not_found.to_string()).await?;
        }
    }

    Ok(())
}
