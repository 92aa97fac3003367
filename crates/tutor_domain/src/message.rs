use chrono::{DateTime, Utc};
use derive_more::derive::Display;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use strum_macros::{EnumString, IntoStaticStr};
use uuid::Uuid;

use crate::Attachment;

#[derive(Debug, Display, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct MessageId(Uuid);

impl MessageId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Who authored a turn. The wire format of the model collaborator uses the
/// same lowercase names.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

/// One message of a conversation. Model messages carry `is_streaming` while
/// their text is still being appended to by an active turn.
#[derive(Debug, Clone, Serialize, Deserialize, Setters, PartialEq)]
#[setters(into, strip_option)]
pub struct ChatMessage {
    pub id: MessageId,
    pub role: Role,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub is_streaming: bool,
    pub attachment: Option<Attachment>,
}

impl ChatMessage {
    pub fn new(role: Role, text: impl ToString) -> Self {
        Self {
            id: MessageId::generate(),
            role,
            text: text.to_string(),
            timestamp: Utc::now(),
            is_streaming: false,
            attachment: None,
        }
    }

    pub fn user(text: impl ToString) -> Self {
        Self::new(Role::User, text)
    }

    pub fn model(text: impl ToString) -> Self {
        Self::new(Role::Model, text)
    }

    /// An empty model message that an active turn will fill in.
    pub fn streaming() -> Self {
        Self::model("").is_streaming(true)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_role_wire_names() {
        let actual = serde_json::to_string(&Role::Model).unwrap();
        assert_eq!(actual, "\"model\"");
        let actual: &'static str = Role::User.into();
        assert_eq!(actual, "user");
    }

    #[test]
    fn test_streaming_message_is_empty_model_turn() {
        let fixture = ChatMessage::streaming();
        assert_eq!(fixture.role, Role::Model);
        assert_eq!(fixture.text, "");
        assert!(fixture.is_streaming);
    }
}
