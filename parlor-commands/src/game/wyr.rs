use parlor_core::{Context, Error};
use parlor_store::Category;

use crate::CommandMeta;
use crate::game::send_question;

pub const META: CommandMeta = CommandMeta {
    name: "wyr",
    desc: "Get a Would You Rather question with buttons.",
    category: "game",
    usage: "/wyr",
};

#[poise::command(prefix_command, slash_command, category = "Game")]
pub async fn wyr(ctx: Context<'_>) -> Result<(), Error> {
    send_question(ctx, Category::Wyr).await
}
