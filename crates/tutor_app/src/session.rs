//! Conversation state and the session handle to the model collaborator.

use std::sync::Arc;

use tracing::info;
use tutor_domain::{
    Attachment, ChatMessage, Conversation, Error, GenerationCounter, MessageId, Result,
};

use crate::services::{FragmentSource, TurnRequest};
use crate::system_prompt::{SYSTEM_PROMPT, WELCOME};
use crate::turn::{TurnEvent, TurnStream, run_turn};

/// A live session with the model collaborator. Holds the system prompt the
/// session was created with; discarded after a transport failure so the next
/// send re-initializes a fresh one from reconstructed history.
struct ModelSession {
    source: Arc<dyn FragmentSource>,
    system_prompt: String,
}

impl ModelSession {
    fn new(source: Arc<dyn FragmentSource>) -> Self {
        Self { source, system_prompt: SYSTEM_PROMPT.to_string() }
    }

    fn request(
        &self,
        history: Vec<ChatMessage>,
        text: String,
        attachment: Option<Attachment>,
    ) -> TurnRequest {
        TurnRequest {
            system_prompt: self.system_prompt.clone(),
            history,
            text,
            attachment,
        }
    }
}

/// One user-facing chat: the transcript, the generation counter guarding
/// in-flight streams, and the (re)creatable model session.
pub struct ChatSession {
    source: Arc<dyn FragmentSource>,
    conversation: Conversation,
    generations: GenerationCounter,
    session: Option<ModelSession>,
    streaming_message: Option<MessageId>,
}

impl ChatSession {
    pub fn new(source: Arc<dyn FragmentSource>) -> Self {
        let mut conversation = Conversation::new();
        conversation.push(ChatMessage::model(WELCOME));
        Self {
            source,
            conversation,
            generations: GenerationCounter::new(),
            session: None,
            streaming_message: None,
        }
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// True while a model session from a previous send is still considered
    /// good. Transport failures drop it.
    pub fn has_live_session(&self) -> bool {
        self.session.is_some()
    }

    /// Starts a turn: appends the user message and an empty streaming model
    /// message to the transcript and returns the event stream to drive.
    /// Starting a new turn invalidates any stream still in flight.
    pub fn send(
        &mut self,
        text: impl ToString,
        attachment: Option<Attachment>,
    ) -> Result<TurnStream> {
        let text = text.to_string();
        if text.trim().is_empty() && attachment.is_none() {
            return Err(Error::EmptyMessage);
        }

        let generation = self.generations.advance();
        info!(?generation, "Starting turn");

        let source = self.source.clone();
        let session = self.session.get_or_insert_with(|| ModelSession::new(source));
        let history: Vec<ChatMessage> = self.conversation.history().cloned().collect();
        let request = session.request(history, text.clone(), attachment.clone());
        let stream = run_turn(
            session.source.clone(),
            request,
            self.generations.clone(),
            generation,
        );

        let mut user = ChatMessage::user(text);
        user.attachment = attachment;
        self.conversation.push(user);
        self.streaming_message = Some(self.conversation.push(ChatMessage::streaming()));

        Ok(stream)
    }

    /// Applies a published turn event to the transcript. Events from a stale
    /// generation are discarded without touching the current state.
    pub fn apply(&mut self, event: &TurnEvent) {
        if !self.generations.is_current(event.generation()) {
            return;
        }
        match event {
            TurnEvent::Snapshot { text, .. } => {
                self.set_streaming_text(text);
            }
            TurnEvent::Completed { text, .. } => {
                self.set_streaming_text(text);
                self.finalize_streaming();
            }
            TurnEvent::Failed { message, .. } => {
                // Keep whatever partial reply already streamed, then append
                // the error as its own model message
                self.finalize_streaming();
                self.conversation.push(ChatMessage::model(message));
                self.session = None;
            }
        }
    }

    /// Resets the transcript to the welcome message. Any in-flight stream
    /// becomes stale and its remaining fragments are dropped.
    pub fn clear(&mut self) {
        self.generations.advance();
        let mut conversation = Conversation::new();
        conversation.push(ChatMessage::model(WELCOME));
        self.conversation = conversation;
        self.streaming_message = None;
    }

    fn set_streaming_text(&mut self, text: &str) {
        if let Some(id) = self.streaming_message
            && let Some(message) = self.conversation.get_mut(id)
        {
            message.text = text.to_string();
        }
    }

    fn finalize_streaming(&mut self) {
        if let Some(id) = self.streaming_message.take()
            && let Some(message) = self.conversation.get_mut(id)
        {
            message.is_streaming = false;
        }
    }
}
