mod events;

use std::env;
use std::time::Instant;

use anyhow::Context as _;
use poise::serenity_prelude as serenity;
use tracing::{debug, error, info, warn};
use tracing_subscriber::Layer;
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use rustls::crypto::ring::default_provider;

use parlor_core::{Data, Error};
use parlor_store::{ModePreferenceStore, QuestionBank};
use parlor_utils::formatting::invite_url;
use parlor_web::WebState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let fmt_layer = tracing_subscriber::fmt::layer().with_filter(filter_fn(|metadata| {
        let target = metadata.target();

        let within_info_level = *metadata.level() <= tracing::Level::INFO;
        if !within_info_level {
            return false;
        }

        !(target.starts_with("serenity::gateway::bridge::shard_manager")
            || target.starts_with("serenity::gateway::bridge::shard_runner"))
    }));

    tracing_subscriber::registry().with(fmt_layer).init();

    default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("failed to install rustls ring provider"))?;

    // Load the .env file
    dotenvy::dotenv().ok();

    // The access token is the only required configuration.
    let token = env::var("DISCORD_TOKEN")
        .context("DISCORD_TOKEN not set; put it in the environment or .env")?;

    let client_id = env::var("DISCORD_CLIENT_ID").ok();
    let permissions =
        env::var("DISCORD_PERMISSIONS").unwrap_or_else(|_| "2147485696".to_string());
    let invite = invite_url(client_id.as_deref(), &permissions);

    let owner_id = env_u64("BOT_OWNER_ID");
    if owner_id.is_none() {
        warn!("BOT_OWNER_ID not set; the question-bank admin commands are disabled.");
    }

    let port = env_u16("PORT", 5000);

    let questions_file =
        env::var("QUESTIONS_FILE").unwrap_or_else(|_| "questions.json".to_string());
    let settings_file = env::var("SETTINGS_FILE").unwrap_or_else(|_| "settings.json".to_string());

    let questions = QuestionBank::open(questions_file)?;
    let modes = ModePreferenceStore::open(settings_file)?;

    let intents = serenity::GatewayIntents::GUILDS
        | serenity::GatewayIntents::GUILD_MESSAGES
        | serenity::GatewayIntents::DIRECT_MESSAGES
        | serenity::GatewayIntents::MESSAGE_CONTENT;

    let data = Data {
        questions: questions.clone(),
        modes: modes.clone(),
        owner_id,
    };

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: parlor_commands::commands(),
            event_handler: |ctx, event, framework, data| {
                Box::pin(handle_event(ctx, event, framework, data))
            },
            on_error: |error| Box::pin(on_error(error)),
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some(parlor_utils::COMMAND_PREFIX.to_string()),
                mention_as_prefix: false,
                ..Default::default()
            },
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                info!(user = %ready.user.name, "Parlor is at your service!");

                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                info!("slash commands registered globally");

                Ok(data)
            })
        })
        .build();

    info!("Parlor is connecting...");

    let mut client = serenity::ClientBuilder::new(token, intents)
        .framework(framework)
        .await?;

    let web_state = WebState {
        questions,
        modes,
        cache: client.cache.clone(),
        shards: client.shard_manager.clone(),
        started_at: Instant::now(),
        invite,
    };
    tokio::spawn(async move {
        if let Err(source) = parlor_web::serve(web_state, port).await {
            error!(?source, "status site stopped");
        }
    });

    client.start().await?;
    Ok(())
}

fn env_u64(key: &str) -> Option<u64> {
    env::var(key).ok()?.trim().parse::<u64>().ok()
}

fn env_u16(key: &str, default: u16) -> u16 {
    match env::var(key) {
        Ok(value) => value.trim().parse::<u16>().unwrap_or(default),
        Err(_) => default,
    }
}

async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!(?error, "command error");

            let embed = serenity::CreateEmbed::new()
                .title("Command Error")
                .description("Something went wrong while running this command.")
                .color(parlor_utils::embed::DEFAULT_EMBED_COLOR);

            let _ = ctx
                .send(poise::CreateReply::default().ephemeral(true).embed(embed))
                .await;
        }
        poise::FrameworkError::ArgumentParse { ctx, input, .. } => {
            let usage = format!("Usage: `{}{}`", parlor_utils::COMMAND_PREFIX, ctx.command().qualified_name);
            let description = if let Some(input) = input {
                format!("Invalid argument: `{}`\n{}", input, usage)
            } else {
                format!("Missing required argument.\n{}", usage)
            };

            let _ = ctx.say(description).await;
        }
        poise::FrameworkError::UnknownCommand { .. } => {
            debug!("unknown command invocation");
        }
        other => {
            error!(?other, "framework error");
        }
    }
}

async fn handle_event(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, Data, Error>,
    data: &Data,
) -> Result<(), Error> {
    if let serenity::FullEvent::InteractionCreate {
        interaction: serenity::Interaction::Component(component),
    } = event
    {
        events::buttons::handle_component(ctx, data, component).await?;
    }

    Ok(())
}
