//! Read-only status site served next to the gateway connection.
//!
//! Every handler only reads snapshot values from the stores and the serenity
//! cache; nothing here mutates persisted state.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Redirect};
use axum::routing::get;
use axum::{Json, Router};
use rand::seq::SliceRandom;
use serde::Serialize;
use serenity::all::{Cache, ShardManager};
use tracing::info;

use parlor_store::{Category, Mode, ModePreferenceStore, QuestionBank};
use parlor_utils::formatting::format_compact_duration;

#[derive(Clone)]
pub struct WebState {
    pub questions: QuestionBank,
    pub modes: ModePreferenceStore,
    pub cache: Arc<Cache>,
    pub shards: Arc<ShardManager>,
    pub started_at: Instant,
    pub invite: Option<String>,
}

pub async fn serve(state: WebState, port: u16) -> anyhow::Result<()> {
    let app = Router::new()
        .route("/", get(home))
        .route("/commands", get(commands_page))
        .route("/status", get(status))
        .route("/invite", get(invite))
        .route("/demo", get(demo))
        .route("/healthz", get(healthz))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!(port, "status site listening");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn gateway_latency_ms(shards: &ShardManager) -> u64 {
    let runners = shards.runners.lock().await;
    runners
        .values()
        .find_map(|runner| runner.latency)
        .map_or(0, |latency| latency.as_millis() as u64)
}

/// A sample prompt for anonymous visitors; always drawn from the SFW pools.
fn sample_prompt(questions: &QuestionBank) -> String {
    let mut rng = rand::thread_rng();
    let category = Category::ALL
        .choose(&mut rng)
        .copied()
        .unwrap_or(Category::Truth);

    match questions.draw_with(category, Mode::Sfw, &mut rng) {
        Ok(prompt) => format!("{}: {}", category.label(), prompt),
        Err(placeholder) => placeholder.to_string(),
    }
}

async fn home(State(state): State<WebState>) -> Html<String> {
    let uptime = format_compact_duration(state.started_at.elapsed().as_secs());
    let guilds = state.cache.guild_count();
    let latency = gateway_latency_ms(&state.shards).await;
    let sample = sample_prompt(&state.questions);
    let invite = state.invite.as_deref().unwrap_or("#");

    Html(format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="robots" content="noindex,nofollow">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Parlor - Truth or Dare Bot</title>
  <style>
    body {{ font-family: system-ui, sans-serif; max-width: 42rem; margin: 3rem auto; padding: 0 1rem; background: #2a0820; color: #ffd1dc; }}
    a {{ color: #ff69b4; }}
    .card {{ background: rgba(255,255,255,0.08); border-radius: 1rem; padding: 1rem 1.5rem; margin: 1rem 0; }}
    code {{ background: rgba(255,255,255,0.12); padding: 0.1rem 0.3rem; border-radius: 0.3rem; }}
  </style>
</head>
<body>
  <h1>Parlor</h1>
  <div class="card">
    <h2>Status</h2>
    <p>Uptime: <strong>{uptime}</strong></p>
    <p>Guilds: <strong>{guilds}</strong></p>
    <p>Latency: <strong>{latency} ms</strong></p>
    <p><a href="/status">JSON status</a> &middot; <a href="/commands">Commands</a> &middot; <a href="{invite}">Invite</a></p>
  </div>
  <div class="card">
    <h2>How to play</h2>
    <ul>
      <li>Slash commands: <code>/truth</code>, <code>/dare</code>, <code>/wyr</code>, <code>/ama</code></li>
      <li>Pick your vibe with <code>/mode</code> (SFW / NSFW)</li>
      <li>Works in servers and DMs</li>
    </ul>
  </div>
  <div class="card">
    <h2>Sample prompt</h2>
    <p>{sample}</p>
    <p>
      <a href="/demo?c=truth">Truth</a> &middot;
      <a href="/demo?c=dare">Dare</a> &middot;
      <a href="/demo?c=wyr">Would You Rather</a> &middot;
      <a href="/demo?c=ama">Ask Me Anything</a>
    </p>
  </div>
</body>
</html>"#
    ))
}

async fn commands_page() -> Html<&'static str> {
    Html(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="robots" content="noindex,nofollow">
  <title>Parlor - Commands</title>
</head>
<body>
  <h1>Commands</h1>
  <ul>
    <li><code>/truth</code>: Get a Truth question</li>
    <li><code>/dare</code>: Get a Dare</li>
    <li><code>/wyr</code>: Would You Rather</li>
    <li><code>/ama</code>: Ask Me Anything</li>
    <li><code>/mode</code>: Choose SFW / NSFW</li>
  </ul>
  <p><a href="/">Back</a></p>
</body>
</html>"#,
    )
}

#[derive(Serialize)]
struct StatusResponse {
    ok: bool,
    uptime: String,
    uptime_seconds: u64,
    guilds: usize,
    latency_ms: u64,
    prompts: usize,
    mode_preferences: usize,
    invite: Option<String>,
}

async fn status(State(state): State<WebState>) -> Json<StatusResponse> {
    let uptime_seconds = state.started_at.elapsed().as_secs();

    Json(StatusResponse {
        ok: true,
        uptime: format_compact_duration(uptime_seconds),
        uptime_seconds,
        guilds: state.cache.guild_count(),
        latency_ms: gateway_latency_ms(&state.shards).await,
        prompts: state.questions.total_prompts(),
        mode_preferences: state.modes.entry_count(),
        invite: state.invite.clone(),
    })
}

async fn invite(State(state): State<WebState>) -> Redirect {
    match state.invite.as_deref() {
        Some(url) => Redirect::temporary(url),
        None => Redirect::temporary("/"),
    }
}

async fn demo(
    State(state): State<WebState>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let raw = params.get("c").map_or("truth", String::as_str);
    let category: Category = raw.parse().unwrap_or(Category::Truth);

    match state.questions.draw(category, Mode::Sfw) {
        Ok(prompt) => format!("{}: {}", category.label(), prompt),
        Err(placeholder) => placeholder.to_string(),
    }
}

async fn healthz() -> &'static str {
    "ok"
}
