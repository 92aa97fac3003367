use anyhow::Context as _;
use async_stream::stream;
use derive_setters::Setters;
use reqwest_eventsource::{Event, RequestBuilderExt};
use tokio_stream::StreamExt;
use tracing::{debug, info};
use tutor_app::{FragmentSource, TurnRequest};
use tutor_domain::ResultStream;
use url::Url;

use super::request::{GenerationConfig, Request};
use super::response::Response;

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/";
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
const DEFAULT_TEMPERATURE: f32 = 0.4;

/// Streaming client for the Gemini `generateContent` SSE endpoint. Each turn
/// is one POST carrying the full seeded history; fragments are yielded until
/// the server closes the stream.
#[derive(Clone, Setters)]
#[setters(into)]
pub struct GeminiProvider {
    #[setters(skip)]
    client: reqwest::Client,
    #[setters(skip)]
    key: String,
    base_url: Url,
    model: String,
    temperature: f32,
}

impl GeminiProvider {
    pub fn new(key: impl ToString) -> Self {
        Self {
            client: reqwest::Client::new(),
            key: key.to_string(),
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base url is valid"),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    /// Reads the credential from the environment. A missing or empty key is
    /// the configuration fault surfaced to the user as its own message.
    pub fn from_env() -> tutor_domain::Result<Self> {
        std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.is_empty())
            .map(Self::new)
            .ok_or(tutor_domain::Error::MissingApiKey(API_KEY_ENV))
    }

    fn endpoint(&self) -> anyhow::Result<Url> {
        let mut url = self
            .base_url
            .join(&format!("models/{}:streamGenerateContent", self.model))
            .with_context(|| format!("Invalid model path for {}", self.model))?;
        url.query_pairs_mut().append_pair("alt", "sse");
        Ok(url)
    }

    async fn inner_stream(&self, turn: TurnRequest) -> ResultStream<String, anyhow::Error> {
        let mut request = Request::from(&turn);
        request.generation_config = Some(GenerationConfig { temperature: self.temperature });

        let url = self.endpoint()?;
        info!(
            url = %url,
            model = %self.model,
            history_count = %turn.history.len(),
            has_attachment = %turn.attachment.is_some(),
            "Connecting Upstream"
        );

        let mut es = self
            .client
            .post(url.clone())
            .header("x-goog-api-key", &self.key)
            .json(&request)
            .eventsource()
            .with_context(|| format!("Failed to open event stream to {url}"))?;

        let stream = stream! {
            while let Some(event) = es.next().await {
                match event {
                    Ok(Event::Open) => continue,
                    Ok(Event::Message(message)) => {
                        let response = serde_json::from_str::<Response>(&message.data)
                            .with_context(|| "Failed to deserialize stream chunk");
                        match response.and_then(Response::into_fragment) {
                            Ok(Some(text)) => {
                                debug!(len = text.len(), "Fragment received");
                                yield Ok(text);
                            }
                            Ok(None) => continue,
                            Err(e) => {
                                es.close();
                                yield Err(e);
                                return;
                            }
                        }
                    }
                    // The server closing the stream is the normal end of a turn
                    Err(reqwest_eventsource::Error::StreamEnded) => {
                        es.close();
                        return;
                    }
                    Err(e) => {
                        es.close();
                        yield Err(anyhow::Error::new(e).context("Model stream failed"));
                        return;
                    }
                }
            }
        };

        Ok(Box::pin(stream))
    }
}

#[async_trait::async_trait]
impl FragmentSource for GeminiProvider {
    async fn stream(&self, request: TurnRequest) -> ResultStream<String, anyhow::Error> {
        self.inner_stream(request).await
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn create_provider(base_url: &str) -> GeminiProvider {
        GeminiProvider::new("test-api-key")
            .base_url(Url::parse(&format!("{base_url}/")).unwrap())
            .model("gemini-test")
    }

    fn sse_chunk(text: &str) -> String {
        format!(
            "data: {}\n\n",
            serde_json::json!({
                "candidates": [{"content": {"parts": [{"text": text}], "role": "model"}}]
            })
        )
    }

    #[tokio::test]
    async fn test_stream_yields_fragments_until_server_closes() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/models/gemini-test:streamGenerateContent")
            .match_query(mockito::Matcher::UrlEncoded("alt".into(), "sse".into()))
            .match_header("x-goog-api-key", "test-api-key")
            .with_status(200)
            .with_header("content-type", "text/event-stream")
            .with_body(format!("{}{}", sse_chunk("Xin "), sse_chunk("chào")))
            .create_async()
            .await;

        let provider = create_provider(&server.url());
        let mut stream = provider
            .stream(TurnRequest::new("chào thầy"))
            .await
            .unwrap();

        let mut actual = Vec::new();
        while let Some(item) = stream.next().await {
            actual.push(item.unwrap());
        }

        mock.assert_async().await;
        assert_eq!(actual, vec!["Xin ".to_string(), "chào".to_string()]);
    }

    #[tokio::test]
    async fn test_error_status_fails_the_stream() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/models/gemini-test:streamGenerateContent")
            .match_query(mockito::Matcher::UrlEncoded("alt".into(), "sse".into()))
            .with_status(401)
            .with_body(r#"{"error":{"code":401,"message":"API key not valid"}}"#)
            .create_async()
            .await;

        let provider = create_provider(&server.url());
        let mut stream = provider
            .stream(TurnRequest::new("chào thầy"))
            .await
            .unwrap();

        let first = stream.next().await.unwrap();
        assert!(first.is_err());
        assert!(stream.next().await.is_none());

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_error_chunk_fails_the_stream() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/models/gemini-test:streamGenerateContent")
            .match_query(mockito::Matcher::UrlEncoded("alt".into(), "sse".into()))
            .with_status(200)
            .with_header("content-type", "text/event-stream")
            .with_body(format!(
                "{}data: {}\n\n",
                sse_chunk("một phần"),
                r#"{"error":{"code":429,"message":"Resource exhausted"}}"#
            ))
            .create_async()
            .await;

        let provider = create_provider(&server.url());
        let mut stream = provider
            .stream(TurnRequest::new("chào thầy"))
            .await
            .unwrap();

        let first = stream.next().await.unwrap().unwrap();
        assert_eq!(first, "một phần");

        let second = stream.next().await.unwrap();
        assert!(second.is_err());
        assert!(stream.next().await.is_none());
    }

    #[test]
    fn test_endpoint_includes_model_and_sse() {
        let provider = GeminiProvider::new("k").model("gemini-test");
        let actual = provider.endpoint().unwrap();
        assert_eq!(
            actual.as_str(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-test:streamGenerateContent?alt=sse"
        );
    }

    #[test]
    fn test_from_env_requires_key() {
        unsafe { std::env::remove_var(API_KEY_ENV) };
        assert!(GeminiProvider::from_env().is_err());
    }
}
