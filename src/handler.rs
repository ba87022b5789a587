use std::sync::{Arc, OnceLock};

use log::{debug, info};

use serenity::async_trait;
use serenity::client::{Context, EventHandler};
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;

use crate::client::DiscordClient;
use crate::commands::{parse_invocation, CommandSet};
use crate::context::CommandContext;

/// Gateway event handler: turns prefixed messages into command invocations.
pub struct Handler {
    prefix: String,
    commands: CommandSet,
    client: OnceLock<Arc<DiscordClient>>,
}

impl Handler {
    pub fn new(prefix: String, commands: CommandSet) -> Self {
        Self {
            prefix,
            commands,
            client: OnceLock::new(),
        }
    }

    // The send worker wants the gateway's own Http handle, which only shows
    // up with the first event.
    fn chat_client(&self, ctx: &Context) -> Arc<DiscordClient> {
        self.client
            .get_or_init(|| DiscordClient::spawn(ctx.http.clone()))
            .clone()
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, ctx: Context, message: Message) {
        if message.author.bot {
            return;
        }
        let Some((name, args)) = parse_invocation(&message.content, &self.prefix) else {
            return;
        };
        let Some(command) = self.commands.find(&name) else {
            debug!("no command named '{name}'");
            return;
        };
        info!("executing command '{name}'");
        let mut context = CommandContext::for_message(self.chat_client(&ctx), &message);
        context.run(command.as_ref(), &args).await;
    }

    async fn ready(&self, _ctx: Context, data_about_bot: Ready) {
        info!("{} is connected", data_about_bot.user.name);
    }
}
