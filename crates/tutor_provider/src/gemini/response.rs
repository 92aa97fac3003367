//! Wire types for streamed `generateContent` chunks.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApiError {
    pub code: Option<u16>,
    pub message: String,
}

impl Response {
    /// The text fragment carried by this chunk: every part of the first
    /// candidate, concatenated. Chunks without text (safety metadata, usage
    /// reports) yield `None`.
    pub fn into_fragment(self) -> anyhow::Result<Option<String>> {
        if let Some(error) = self.error {
            anyhow::bail!(
                "Model service error {}: {}",
                error.code.unwrap_or_default(),
                error.message
            );
        }

        let text: String = self
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default();

        Ok((!text.is_empty()).then_some(text))
    }
}
