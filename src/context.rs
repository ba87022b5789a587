use std::sync::Arc;

use log::error;

use serenity::model::channel::Message;
use serenity::model::id::{ChannelId, GuildId, UserId};

use crate::client::ChatClient;
use crate::commands::Command;
use crate::error::CommandError;
use crate::reply::{Reply, ReplyStyle};

/// Reply shown when a command fails for a reason the user cannot act on.
pub const GENERIC_FAILURE_REPLY: &str =
    "Failed to execute command, please take a look at the console for details!";

/// Execution context for a single command invocation. Built per inbound
/// message, dropped when the command finishes.
pub struct CommandContext {
    client: Arc<dyn ChatClient>,
    author: UserId,
    reply_channel: ChannelId,
    guild: Option<GuildId>,
}

impl CommandContext {
    pub fn new(
        client: Arc<dyn ChatClient>,
        author: UserId,
        reply_channel: ChannelId,
        guild: Option<GuildId>,
    ) -> Self {
        Self {
            client,
            author,
            reply_channel,
            guild,
        }
    }

    /// Replies go back to the message's channel; guild scope is set iff the
    /// message came from one.
    pub fn for_message(client: Arc<dyn ChatClient>, message: &Message) -> Self {
        Self::new(
            client,
            message.author.id,
            message.channel_id,
            message.guild_id,
        )
    }

    pub fn client(&self) -> &dyn ChatClient {
        self.client.as_ref()
    }

    pub fn author(&self) -> UserId {
        self.author
    }

    pub fn reply_channel(&self) -> ChannelId {
        self.reply_channel
    }

    pub fn set_reply_channel(&mut self, channel: ChannelId) {
        self.reply_channel = channel;
    }

    pub fn guild(&self) -> Option<GuildId> {
        self.guild
    }

    pub fn set_guild(&mut self, guild: Option<GuildId>) {
        self.guild = guild;
    }

    /// Execute one command against this context. Never fails from the
    /// caller's point of view: recognized failures become a single warning
    /// reply, anything else is logged and answered with
    /// [`GENERIC_FAILURE_REPLY`].
    pub async fn run(&mut self, command: &dyn Command, args: &[String]) {
        if let Err(err) = command.execute(self, args).await {
            match err.user_message(command.name()) {
                Some(message) => self.reply_warning(message),
                None => {
                    error!(
                        "failed to execute command '{} {}': {err:?}",
                        command.name(),
                        args.join(" ")
                    );
                    self.reply_warning(GENERIC_FAILURE_REPLY);
                }
            }
        }
    }

    /// Queue a reply to the current reply channel, returning immediately.
    pub fn reply(&self, content: impl Into<Reply>) {
        self.client.queue_send(self.reply_channel, content.into());
    }

    pub fn reply_warning(&self, text: impl Into<String>) {
        self.reply(Reply::styled(text, ReplyStyle::Warning));
    }

    pub fn reply_success(&self, text: impl Into<String>) {
        self.reply(Reply::styled(text, ReplyStyle::Success));
    }

    pub fn is_guild_context(&self) -> bool {
        self.guild.is_some()
    }

    pub fn ensure_guild_context(&self) -> Result<GuildId, CommandError> {
        self.guild.ok_or(CommandError::GuildRequired)
    }

    /// Require guild scope and administrator standing there. Passes when the
    /// member carries the ADMINISTRATOR bit or is the application owner. A
    /// membership that cannot be resolved at all is an internal failure, not
    /// a permission denial.
    pub async fn ensure_admin_permission(&self) -> Result<GuildId, CommandError> {
        let guild = self.ensure_guild_context()?;
        let permissions = self.client.member_permissions(guild, self.author).await?;
        if permissions.administrator() || self.is_app_owner().await? {
            Ok(guild)
        } else {
            Err(CommandError::MissingPermissions)
        }
    }

    pub async fn ensure_owner_permission(&self) -> Result<(), CommandError> {
        if self.is_app_owner().await? {
            Ok(())
        } else {
            Err(CommandError::MissingPermissions)
        }
    }

    /// Whether the invoking user owns the bot application. Lookup failures
    /// surface as internal errors.
    pub async fn is_app_owner(&self) -> Result<bool, CommandError> {
        let owner = self.client.application_owner().await?;
        Ok(owner == self.author)
    }
}
