use serenity::builder::CreateEmbed;
use serenity::model::Colour;

/// Accent applied to a styled reply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplyStyle {
    Warning,
    Success,
}

impl ReplyStyle {
    pub fn accent(self) -> Colour {
        match self {
            Self::Warning => Colour::RED,
            Self::Success => Colour::DARK_GREEN,
        }
    }
}

/// Outgoing reply payload: plain text, styled text, or a prebuilt embed.
#[derive(Clone, Debug)]
pub enum Reply {
    Text(String),
    Styled { text: String, style: ReplyStyle },
    Embed(Box<CreateEmbed>),
}

impl Reply {
    pub fn styled(text: impl Into<String>, style: ReplyStyle) -> Self {
        Self::Styled {
            text: text.into(),
            style,
        }
    }
}

impl From<&str> for Reply {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Reply {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<CreateEmbed> for Reply {
    fn from(embed: CreateEmbed) -> Self {
        Self::Embed(Box::new(embed))
    }
}
