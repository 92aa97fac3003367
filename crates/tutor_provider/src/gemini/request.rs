//! Wire types for `models/*:streamGenerateContent`.

use serde::Serialize;
use tutor_app::TurnRequest;
use tutor_domain::{Attachment, ChatMessage};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<Part>,
}

impl Content {
    fn text(role: Option<&str>, text: impl ToString) -> Self {
        Self {
            role: role.map(str::to_string),
            parts: vec![Part::text(text)],
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

impl Part {
    fn text(text: impl ToString) -> Self {
        Self { text: Some(text.to_string()), inline_data: None }
    }

    fn inline_data(attachment: &Attachment) -> Self {
        Self {
            text: None,
            inline_data: Some(InlineData {
                mime_type: attachment.media_type.clone(),
                data: attachment.data.clone(),
            }),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
}

impl From<&ChatMessage> for Content {
    fn from(message: &ChatMessage) -> Self {
        let role: &'static str = message.role.into();
        let mut parts = vec![Part::text(&message.text)];
        if let Some(attachment) = &message.attachment {
            parts.push(Part::inline_data(attachment));
        }
        Self { role: Some(role.to_string()), parts }
    }
}

impl From<&TurnRequest> for Request {
    fn from(turn: &TurnRequest) -> Self {
        let mut contents: Vec<Content> = turn.history.iter().map(Content::from).collect();

        let mut parts = vec![Part::text(&turn.text)];
        if let Some(attachment) = &turn.attachment {
            parts.push(Part::inline_data(attachment));
        }
        contents.push(Content { role: Some("user".to_string()), parts });

        let system_instruction = (!turn.system_prompt.is_empty())
            .then(|| Content::text(None, &turn.system_prompt));

        Self {
            contents,
            system_instruction,
            generation_config: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use tutor_domain::ChatMessage;

    use super::*;

    #[test]
    fn test_request_from_turn() {
        let turn = TurnRequest::new("Giải: $x + 1 = 0$")
            .system_prompt("Bạn là trợ lý Toán 8.")
            .history(vec![
                ChatMessage::user("chào thầy"),
                ChatMessage::model("chào em"),
            ]);

        let actual = Request::from(&turn);

        insta::assert_json_snapshot!(actual, @r#"
        {
          "contents": [
            {
              "role": "user",
              "parts": [
                {
                  "text": "chào thầy"
                }
              ]
            },
            {
              "role": "model",
              "parts": [
                {
                  "text": "chào em"
                }
              ]
            },
            {
              "role": "user",
              "parts": [
                {
                  "text": "Giải: $x + 1 = 0$"
                }
              ]
            }
          ],
          "systemInstruction": {
            "parts": [
              {
                "text": "Bạn là trợ lý Toán 8."
              }
            ]
          }
        }
        "#);
    }

    #[test]
    fn test_attachment_becomes_inline_data_part() {
        let attachment = Attachment::from_bytes(b"img", "image/png");
        let turn = TurnRequest::new("bài trong ảnh").attachment(attachment);

        let actual = Request::from(&turn);

        let parts = &actual.contents[0].parts;
        assert_eq!(parts.len(), 2);
        assert_eq!(
            parts[1].inline_data.as_ref().unwrap().mime_type,
            "image/png"
        );
    }
}
