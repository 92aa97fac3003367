use derive_setters::Setters;
use tutor_domain::{Attachment, ChatMessage, ResultStream};

/// One request to the model collaborator: the system prompt, the full seeded
/// history of completed turns, and the new user message with its optional
/// inline attachment.
#[derive(Debug, Clone, Setters)]
#[setters(into, strip_option)]
pub struct TurnRequest {
    pub system_prompt: String,
    pub history: Vec<ChatMessage>,
    pub text: String,
    pub attachment: Option<Attachment>,
}

impl TurnRequest {
    pub fn new(text: impl ToString) -> Self {
        Self {
            system_prompt: String::new(),
            history: Vec::new(),
            text: text.to_string(),
            attachment: None,
        }
    }
}

/// The model-call collaborator: opens a finite, non-restartable stream of
/// text fragments for one turn. The wire protocol behind it is not this
/// crate's concern.
#[async_trait::async_trait]
pub trait FragmentSource: Send + Sync {
    async fn stream(&self, request: TurnRequest) -> ResultStream<String, anyhow::Error>;
}

/// Stands in for the real collaborator when its credential is absent. Every
/// send fails with the configuration fault, so the user sees the dedicated
/// message in the transcript instead of the process refusing to start.
pub struct MisconfiguredSource {
    env_var: &'static str,
}

impl MisconfiguredSource {
    pub fn new(env_var: &'static str) -> Self {
        Self { env_var }
    }
}

#[async_trait::async_trait]
impl FragmentSource for MisconfiguredSource {
    async fn stream(&self, _request: TurnRequest) -> ResultStream<String, anyhow::Error> {
        Err(anyhow::Error::new(tutor_domain::Error::MissingApiKey(
            self.env_var,
        )))
    }
}
