use parlor_core::{Context, Error};
use parlor_store::Category;

use crate::CommandMeta;
use crate::game::send_question;

pub const META: CommandMeta = CommandMeta {
    name: "dare",
    desc: "Get a Dare with buttons.",
    category: "game",
    usage: "/dare",
};

#[poise::command(prefix_command, slash_command, category = "Game")]
pub async fn dare(ctx: Context<'_>) -> Result<(), Error> {
    send_question(ctx, Category::Dare).await
}
