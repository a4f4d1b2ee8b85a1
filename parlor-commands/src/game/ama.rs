use parlor_core::{Context, Error};
use parlor_store::Category;

use crate::CommandMeta;
use crate::game::send_question;

pub const META: CommandMeta = CommandMeta {
    name: "ama",
    desc: "Get an AMA prompt with buttons.",
    category: "game",
    usage: "/ama",
};

#[poise::command(prefix_command, slash_command, category = "Game")]
pub async fn ama(ctx: Context<'_>) -> Result<(), Error> {
    send_question(ctx, Category::Ama).await
}
