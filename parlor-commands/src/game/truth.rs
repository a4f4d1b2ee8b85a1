use parlor_core::{Context, Error};
use parlor_store::Category;

use crate::CommandMeta;
use crate::game::send_question;

pub const META: CommandMeta = CommandMeta {
    name: "truth",
    desc: "Get a Truth question with buttons.",
    category: "game",
    usage: "/truth",
};

#[poise::command(prefix_command, slash_command, category = "Game")]
pub async fn truth(ctx: Context<'_>) -> Result<(), Error> {
    send_question(ctx, Category::Truth).await
}
