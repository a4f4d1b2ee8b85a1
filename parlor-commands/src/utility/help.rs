use parlor_core::{Context, Error};
use parlor_utils::embed::titled_embed;

use crate::{COMMANDS, CommandMeta};

pub const META: CommandMeta = CommandMeta {
    name: "help",
    desc: "Show available commands and usage.",
    category: "utility",
    usage: "/help",
};

const SECTIONS: &[(&str, &str)] = &[
    ("game", "Game"),
    ("settings", "Settings"),
    ("admin", "Admin"),
    ("utility", "Info"),
];

#[poise::command(prefix_command, slash_command, category = "Utility")]
pub async fn help(ctx: Context<'_>) -> Result<(), Error> {
    let mut embed = titled_embed("Parlor Help");

    for (category, title) in SECTIONS {
        let body = section_body(COMMANDS, category);
        if !body.is_empty() {
            embed = embed.field(*title, body, false);
        }
    }

    embed = embed.field(
        "Notes",
        "Works in servers and DMs. Your personal mode decides the question pool.",
        false,
    );

    let ephemeral = ctx.guild_id().is_some();
    ctx.send(poise::CreateReply::default().embed(embed).ephemeral(ephemeral))
        .await?;

    Ok(())
}

fn section_body(commands: &[CommandMeta], category: &str) -> String {
    commands
        .iter()
        .filter(|command| command.category == category)
        .map(|command| format!("`{}`: {}", command.usage, command.desc))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::section_body;
    use crate::COMMANDS;

    #[test]
    fn game_section_lists_all_four_commands() {
        let body = section_body(COMMANDS, "game");
        for usage in ["/truth", "/dare", "/wyr", "/ama"] {
            assert!(body.contains(usage), "missing {usage}");
        }
    }

    #[test]
    fn unknown_section_is_empty() {
        assert!(section_body(COMMANDS, "moderation").is_empty());
    }
}
