pub mod admin;
pub mod general;

use std::sync::Arc;

use serenity::async_trait;

use crate::context::CommandContext;
use crate::error::CommandError;

/// A single bot command. Everything about the invocation comes through the
/// context and the argument list.
#[async_trait]
pub trait Command: Send + Sync {
    fn name(&self) -> &str;

    /// One-line blurb shown by `help`.
    fn description(&self) -> &str;

    async fn execute(
        &self,
        ctx: &mut CommandContext,
        args: &[String],
    ) -> Result<(), CommandError>;
}

/// The set of commands the bot answers to, looked up by name.
pub struct CommandSet {
    commands: Vec<Arc<dyn Command>>,
}

impl CommandSet {
    pub fn new(commands: Vec<Arc<dyn Command>>) -> Self {
        Self { commands }
    }

    /// Append a `help` command generated from the set's names and blurbs.
    pub fn with_help(mut self) -> Self {
        let mut entries: Vec<(String, String)> = self
            .commands
            .iter()
            .map(|command| (command.name().to_string(), command.description().to_string()))
            .collect();
        entries.push((Help::NAME.to_string(), Help::DESCRIPTION.to_string()));
        self.commands.push(Arc::new(Help { entries }));
        self
    }

    pub fn find(&self, name: &str) -> Option<&Arc<dyn Command>> {
        self.commands
            .iter()
            .find(|command| command.name().eq_ignore_ascii_case(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Command>> {
        self.commands.iter()
    }
}

/// Split a raw message into a command name and arguments, if it starts with
/// the bot's prefix. A bare prefix is not an invocation.
pub fn parse_invocation(content: &str, prefix: &str) -> Option<(String, Vec<String>)> {
    let invocation = content.strip_prefix(prefix)?;
    let mut words = invocation.split_whitespace();
    let name = words.next()?.to_string();
    let args = words.map(str::to_string).collect();
    Some((name, args))
}

struct Help {
    entries: Vec<(String, String)>,
}

impl Help {
    pub const NAME: &'static str = "help";
    pub const DESCRIPTION: &'static str = "list the commands the bot understands";
}

#[async_trait]
impl Command for Help {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        Self::DESCRIPTION
    }

    async fn execute(
        &self,
        ctx: &mut CommandContext,
        _args: &[String],
    ) -> Result<(), CommandError> {
        let mut lines = vec![String::from("Available commands:")];
        for (name, description) in &self.entries {
            lines.push(format!("`{name}`: {description}"));
        }
        ctx.reply(lines.join("\n"));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::parse_invocation;

    #[test]
    fn parses_name_and_args() {
        let (name, args) = parse_invocation("!say hello there", "!").unwrap();
        assert_eq!(name, "say");
        assert_eq!(args, vec!["hello", "there"]);
    }

    #[test]
    fn collapses_whitespace_between_words() {
        let (name, args) = parse_invocation("!  say   hello\tthere ", "!").unwrap();
        assert_eq!(name, "say");
        assert_eq!(args, vec!["hello", "there"]);
    }

    #[test]
    fn ignores_messages_without_the_prefix() {
        assert!(parse_invocation("say hello", "!").is_none());
        assert!(parse_invocation("?say hello", "!").is_none());
    }

    #[test]
    fn ignores_a_bare_prefix() {
        assert!(parse_invocation("!", "!").is_none());
        assert!(parse_invocation("!   ", "!").is_none());
    }

    #[test]
    fn supports_multi_character_prefixes() {
        let (name, args) = parse_invocation("bh!ping", "bh!").unwrap();
        assert_eq!(name, "ping");
        assert!(args.is_empty());
    }
}
