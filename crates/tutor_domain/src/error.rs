use std::pin::Pin;

use thiserror::Error;

// NOTE: Deriving From for error variants is avoided on purpose; conversions
// lose the context of where a failure happened and for what kind of value.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Environment variable {0} is not set")]
    MissingApiKey(&'static str),

    #[error("Unsupported attachment media type: {0}")]
    UnsupportedMediaType(String),

    #[error("Could not read attachment {path}: {source}")]
    AttachmentRead {
        path: String,
        source: std::io::Error,
    },

    #[error("Message is empty")]
    EmptyMessage,
}

pub type Result<A> = std::result::Result<A, Error>;

pub type BoxStream<A, E> =
    Pin<Box<dyn tokio_stream::Stream<Item = std::result::Result<A, E>> + Send>>;

pub type ResultStream<A, E> = std::result::Result<BoxStream<A, E>, E>;
