use std::sync::Arc;

use log::error;

use serenity::async_trait;
use serenity::builder::{CreateEmbed, CreateMessage};
use serenity::http::Http;
use serenity::model::guild::{Member, PartialGuild};
use serenity::model::id::{ChannelId, GuildId, RoleId, UserId};
use serenity::model::Permissions;

use tokio::sync::mpsc;

use crate::reply::Reply;

/// The slice of the chat platform that command execution needs: reply sends,
/// member permission lookup, guild lookup, and application-owner metadata.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Queue a reply for delivery and return immediately. Replies are
    /// delivered in enqueue order; delivery failures are logged, never
    /// reported back.
    fn queue_send(&self, channel: ChannelId, reply: Reply);

    /// Effective guild-level permission bits for the user. Failing to
    /// resolve the member is an error, not an empty permission set.
    async fn member_permissions(
        &self,
        guild: GuildId,
        user: UserId,
    ) -> serenity::Result<Permissions>;

    async fn guild_name(&self, guild: GuildId) -> serenity::Result<String>;

    /// Fetch the registered owner of the bot application.
    async fn application_owner(&self) -> serenity::Result<UserId>;
}

/// serenity-backed [`ChatClient`]. Outgoing replies go through an unbounded
/// queue drained by a single worker task.
pub struct DiscordClient {
    http: Arc<Http>,
    outbound: mpsc::UnboundedSender<(ChannelId, Reply)>,
}

impl DiscordClient {
    /// Wrap an HTTP handle and spawn the send worker. Must be called inside
    /// a tokio runtime.
    pub fn spawn(http: Arc<Http>) -> Arc<Self> {
        let (outbound, mut queue) = mpsc::unbounded_channel::<(ChannelId, Reply)>();
        let worker_http = http.clone();
        tokio::spawn(async move {
            while let Some((channel, reply)) = queue.recv().await {
                if let Err(why) = channel.send_message(&worker_http, build_message(reply)).await {
                    error!("failed to deliver reply to channel {channel}: {why:?}");
                }
            }
        });
        Arc::new(Self { http, outbound })
    }
}

#[async_trait]
impl ChatClient for DiscordClient {
    fn queue_send(&self, channel: ChannelId, reply: Reply) {
        if self.outbound.send((channel, reply)).is_err() {
            error!("send worker is gone, dropping reply to channel {channel}");
        }
    }

    async fn member_permissions(
        &self,
        guild: GuildId,
        user: UserId,
    ) -> serenity::Result<Permissions> {
        let member = guild.member(&self.http, user).await?;
        let guild = guild.to_partial_guild(&self.http).await?;
        Ok(guild_permissions(&guild, &member))
    }

    async fn guild_name(&self, guild: GuildId) -> serenity::Result<String> {
        Ok(guild.to_partial_guild(&self.http).await?.name)
    }

    async fn application_owner(&self) -> serenity::Result<UserId> {
        let info = self.http.get_current_application_info().await?;
        info.owner
            .map(|owner| owner.id)
            .ok_or(serenity::Error::Other("application has no registered owner"))
    }
}

fn build_message(reply: Reply) -> CreateMessage {
    match reply {
        Reply::Text(text) => CreateMessage::new().content(text),
        Reply::Styled { text, style } => CreateMessage::new()
            .embed(CreateEmbed::new().description(text).colour(style.accent())),
        Reply::Embed(embed) => CreateMessage::new().embed(*embed),
    }
}

// Guild-level permissions folded from role bits, no cache involved. The
// guild owner and ADMINISTRATOR both grant everything.
fn guild_permissions(guild: &PartialGuild, member: &Member) -> Permissions {
    if guild.owner_id == member.user.id {
        return Permissions::all();
    }
    let everyone = RoleId::new(guild.id.get());
    let mut permissions = guild
        .roles
        .get(&everyone)
        .map(|role| role.permissions)
        .unwrap_or_else(Permissions::empty);
    for role_id in &member.roles {
        if let Some(role) = guild.roles.get(role_id) {
            permissions |= role.permissions;
        }
    }
    if permissions.contains(Permissions::ADMINISTRATOR) {
        return Permissions::all();
    }
    permissions
}
