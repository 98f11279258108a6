use serde::Deserialize;
use serde::de::IgnoredAny;

use super::deserializers::{deserialize_lenient_string, deserialize_optional_str};

pub const RECORD_TYPE_USER: &str = "user";
pub const ROLE_USER: &str = "user";
pub const CONTENT_TYPE_TEXT: &str = "text";

/// One line of a session transcript, reduced to the fields the viewer reads
#[derive(Debug, Deserialize)]
pub struct SessionRecord {
    #[serde(rename = "type", default, deserialize_with = "deserialize_optional_str")]
    pub record_type: Option<String>,
    #[serde(default)]
    pub message: Option<Message>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub timestamp: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub cwd: String,
}

#[derive(Debug, Deserialize)]
pub struct Message {
    #[serde(default, deserialize_with = "deserialize_optional_str")]
    pub role: Option<String>,
    #[serde(default)]
    pub content: MessageContent,
}

/// `message.content` is either a plain string or a list of content blocks
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Blocks(Vec<ContentBlock>),
    Other(IgnoredAny),
}

impl Default for MessageContent {
    fn default() -> Self {
        MessageContent::Text(String::new())
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ContentBlock {
    Bare(String),
    Typed {
        #[serde(rename = "type")]
        kind: String,
        #[serde(default)]
        text: Option<String>,
    },
    Other(IgnoredAny),
}

impl ContentBlock {
    /// Text carried by this block, if it is a plain-text block
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContentBlock::Bare(s) => Some(s),
            ContentBlock::Typed { kind, text } if kind == CONTENT_TYPE_TEXT => text.as_deref(),
            _ => None,
        }
    }
}

impl MessageContent {
    /// Concatenate the text portions, one newline between blocks
    ///
    /// Tool invocations, tool results, images and other non-text blocks are ignored.
    pub fn joined_text(&self) -> String {
        match self {
            MessageContent::Text(s) => s.clone(),
            MessageContent::Blocks(blocks) => {
                let parts: Vec<&str> = blocks.iter().filter_map(ContentBlock::as_text).collect();
                parts.join("\n")
            }
            MessageContent::Other(_) => String::new(),
        }
    }
}

impl SessionRecord {
    /// True when both the record kind and the message role are `user`
    pub fn is_user_message(&self) -> bool {
        self.record_type.as_deref() == Some(RECORD_TYPE_USER)
            && self
                .message
                .as_ref()
                .is_some_and(|m| m.role.as_deref() == Some(ROLE_USER))
    }
}
