use serenity::async_trait;
use serenity::model::mention::Mentionable;

use crate::commands::Command;
use crate::context::CommandContext;
use crate::error::CommandError;

pub struct Ping;

#[async_trait]
impl Command for Ping {
    fn name(&self) -> &str {
        "ping"
    }

    fn description(&self) -> &str {
        "check that the bot is listening"
    }

    async fn execute(
        &self,
        ctx: &mut CommandContext,
        _args: &[String],
    ) -> Result<(), CommandError> {
        ctx.reply("pong!");
        Ok(())
    }
}

pub struct Say;

#[async_trait]
impl Command for Say {
    fn name(&self) -> &str {
        "say"
    }

    fn description(&self) -> &str {
        "repeat the given text back into the channel"
    }

    async fn execute(
        &self,
        ctx: &mut CommandContext,
        args: &[String],
    ) -> Result<(), CommandError> {
        if args.is_empty() {
            return Err(CommandError::rejected(
                "Tell me what to say, e.g. `say hello`.",
            ));
        }
        ctx.reply(args.join(" "));
        Ok(())
    }
}

pub struct Whoami;

#[async_trait]
impl Command for Whoami {
    fn name(&self) -> &str {
        "whoami"
    }

    fn description(&self) -> &str {
        "show who you are to the bot"
    }

    async fn execute(
        &self,
        ctx: &mut CommandContext,
        _args: &[String],
    ) -> Result<(), CommandError> {
        let owner = ctx.is_app_owner().await?;
        let whereabouts = match ctx.guild() {
            Some(guild) => format!("server `{guild}`"),
            None => String::from("a direct message"),
        };
        let standing = if owner { ", and you own this bot" } else { "" };
        ctx.reply(format!(
            "You are {} in {whereabouts}{standing}.",
            ctx.author().mention()
        ));
        Ok(())
    }
}

pub struct Server;

#[async_trait]
impl Command for Server {
    fn name(&self) -> &str {
        "server"
    }

    fn description(&self) -> &str {
        "show which server the bot is replying in"
    }

    async fn execute(
        &self,
        ctx: &mut CommandContext,
        _args: &[String],
    ) -> Result<(), CommandError> {
        let guild = ctx.ensure_guild_context()?;
        let name = ctx.client().guild_name(guild).await?;
        ctx.reply_success(format!("You are talking to me from **{name}** (`{guild}`)."));
        Ok(())
    }
}
