/// Generic embed builders shared across commands and event handlers.
pub mod embed;
/// Shared formatting helpers (uptime, invite URL).
pub mod formatting;
/// Single source of truth for the message-command prefix.
pub const COMMAND_PREFIX: char = '!';
