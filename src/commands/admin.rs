use std::sync::Arc;

use log::info;

use serenity::async_trait;

use tokio::sync::Notify;

use crate::commands::Command;
use crate::context::CommandContext;
use crate::error::CommandError;

pub struct Announce;

#[async_trait]
impl Command for Announce {
    fn name(&self) -> &str {
        "announce"
    }

    fn description(&self) -> &str {
        "post an announcement (server admins only)"
    }

    async fn execute(
        &self,
        ctx: &mut CommandContext,
        args: &[String],
    ) -> Result<(), CommandError> {
        ctx.ensure_admin_permission().await?;
        if args.is_empty() {
            return Err(CommandError::rejected("Give me an announcement to make."));
        }
        ctx.reply_success(format!("📢 {}", args.join(" ")));
        Ok(())
    }
}

/// Owner-gated shutdown. Holds the notify handle the binary waits on next to
/// Ctrl-C.
pub struct Shutdown {
    signal: Arc<Notify>,
}

impl Shutdown {
    pub fn new(signal: Arc<Notify>) -> Self {
        Self { signal }
    }
}

#[async_trait]
impl Command for Shutdown {
    fn name(&self) -> &str {
        "shutdown"
    }

    fn description(&self) -> &str {
        "stop the bot (owner only)"
    }

    async fn execute(
        &self,
        ctx: &mut CommandContext,
        _args: &[String],
    ) -> Result<(), CommandError> {
        ctx.ensure_owner_permission().await?;
        info!("shutdown requested by {}", ctx.author());
        ctx.reply_success("Shutting down. Bye!");
        self.signal.notify_one();
        Ok(())
    }
}
