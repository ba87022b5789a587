pub mod client;
pub mod commands;
pub mod context;
pub mod error;
pub mod handler;
pub mod reply;

pub use client::{ChatClient, DiscordClient};
pub use commands::{Command, CommandSet};
pub use context::{CommandContext, GENERIC_FAILURE_REPLY};
pub use error::CommandError;
pub use reply::{Reply, ReplyStyle};
