use std::error::Error;

pub type BoxedError = Box<dyn Error + Send + Sync>;

/// Failure raised by a command. The first three kinds carry (or can produce)
/// a message fit for the invoking user; `Internal` is everything else.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// The command turned the invocation down and says why.
    #[error("{0}")]
    Rejected(String),
    /// The command only works inside a server.
    #[error("server context required")]
    GuildRequired,
    /// The invoking user is not allowed to run the command.
    #[error("insufficient permissions")]
    MissingPermissions,
    /// Anything unexpected: platform errors, lookup failures, command bugs.
    #[error("{0}")]
    Internal(BoxedError),
}

impl CommandError {
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected(message.into())
    }

    /// Reply text for recognized failures, worded around the name of the
    /// command that raised them. `None` means the caller should fall back to
    /// the generic notice.
    pub fn user_message(&self, command: &str) -> Option<String> {
        match self {
            Self::Rejected(message) => Some(message.clone()),
            Self::GuildRequired => Some(format!(
                "The `{command}` command can only be used in a server."
            )),
            Self::MissingPermissions => Some(format!(
                "You are not allowed to use the `{command}` command."
            )),
            Self::Internal(_) => None,
        }
    }
}

impl From<serenity::Error> for CommandError {
    fn from(err: serenity::Error) -> Self {
        Self::Internal(Box::new(err))
    }
}

impl From<BoxedError> for CommandError {
    fn from(err: BoxedError) -> Self {
        Self::Internal(err)
    }
}

#[cfg(test)]
mod tests {
    use super::CommandError;

    #[test]
    fn rejected_message_passes_through_unchanged() {
        let err = CommandError::rejected("try `say hello` instead");
        assert_eq!(
            err.user_message("say").as_deref(),
            Some("try `say hello` instead")
        );
    }

    #[test]
    fn recognized_failures_name_the_command() {
        assert_eq!(
            CommandError::GuildRequired.user_message("server").unwrap(),
            "The `server` command can only be used in a server."
        );
        assert_eq!(
            CommandError::MissingPermissions
                .user_message("announce")
                .unwrap(),
            "You are not allowed to use the `announce` command."
        );
    }

    #[test]
    fn internal_failures_have_no_user_message() {
        let err = CommandError::from(serenity::Error::Other("gateway fell over"));
        assert!(err.user_message("ping").is_none());
    }
}
