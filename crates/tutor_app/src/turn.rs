//! Drives one model turn: consumes the fragment stream, re-segments the
//! growing reply after every fragment, and publishes snapshots.

use std::pin::Pin;
use std::sync::Arc;

use async_stream::stream;
use tokio_stream::{Stream, StreamExt};
use tracing::{debug, error};
use tutor_block_stream::{ContentBlock, ResponseBuffer};
use tutor_domain::{Generation, GenerationCounter};

use crate::error::user_message;
use crate::services::{FragmentSource, TurnRequest};

/// Events published by an active turn, each tagged with the turn's
/// generation so stale work can be discarded after a reset.
#[derive(Debug, Clone)]
pub enum TurnEvent {
    /// Best-effort re-segmentation after one more fragment arrived.
    Snapshot {
        generation: Generation,
        text: String,
        blocks: Vec<ContentBlock>,
    },
    /// The fragment stream finished normally.
    Completed {
        generation: Generation,
        text: String,
        blocks: Vec<ContentBlock>,
    },
    /// The stream could not be opened or failed mid-turn. `message` is the
    /// user-facing text to append to the transcript.
    Failed {
        generation: Generation,
        message: String,
    },
}

impl TurnEvent {
    pub fn generation(&self) -> Generation {
        match self {
            TurnEvent::Snapshot { generation, .. }
            | TurnEvent::Completed { generation, .. }
            | TurnEvent::Failed { generation, .. } => *generation,
        }
    }
}

pub type TurnStream = Pin<Box<dyn Stream<Item = TurnEvent> + Send>>;

/// Opens the model stream and yields one event per fragment. Exactly one
/// fragment is in flight at a time; the buffer is re-segmented synchronously
/// between awaits. If the session's generation moves past `generation` while
/// a fragment is awaited, the turn stops without publishing further events.
pub fn run_turn(
    source: Arc<dyn FragmentSource>,
    request: TurnRequest,
    counter: GenerationCounter,
    generation: Generation,
) -> TurnStream {
    Box::pin(stream! {
        let mut fragments = match source.stream(request).await {
            Ok(fragments) => fragments,
            Err(e) => {
                error!(error = ?e, "Failed to open model stream");
                yield TurnEvent::Failed { generation, message: user_message(&e) };
                return;
            }
        };

        let mut buffer = ResponseBuffer::new();
        while let Some(item) = fragments.next().await {
            // The conversation may have been reset while this fragment was
            // in flight; stale work must not reach the new buffer.
            if !counter.is_current(generation) {
                debug!(?generation, "Discarding stale fragment");
                return;
            }
            match item {
                Ok(fragment) => {
                    buffer.push(&fragment);
                    yield TurnEvent::Snapshot {
                        generation,
                        text: buffer.text().to_string(),
                        blocks: buffer.snapshot(),
                    };
                }
                Err(e) => {
                    error!(error = ?e, "Model stream failed mid-turn");
                    yield TurnEvent::Failed { generation, message: user_message(&e) };
                    return;
                }
            }
        }

        buffer.finish();
        yield TurnEvent::Completed {
            generation,
            text: buffer.text().to_string(),
            blocks: buffer.snapshot(),
        };
    })
}
