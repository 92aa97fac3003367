//! Turns one input line into message text plus at most one image attachment.

use tracing::warn;
use tutor_domain::{Attachment, Error, ImageTag, Result};

/// Extracts `@[path]` tags from the line, loads the first as an inline
/// image, and returns the remaining text. Non-image files are rejected
/// before anything is sent.
pub fn parse(line: &str) -> Result<(String, Option<Attachment>)> {
    let tags = ImageTag::parse_all(line);
    let text = ImageTag::strip_all(line);

    let Some(tag) = tags.first() else {
        return Ok((text, None));
    };
    if tags.len() > 1 {
        warn!(count = tags.len(), "Multiple attachments; only the first is sent");
    }

    let bytes = std::fs::read(&tag.path).map_err(|source| Error::AttachmentRead {
        path: tag.path.clone(),
        source,
    })?;
    let kind = infer::get(&bytes)
        .filter(|kind| kind.matcher_type() == infer::MatcherType::Image)
        .ok_or_else(|| Error::UnsupportedMediaType(tag.path.clone()))?;

    Ok((text, Some(Attachment::from_bytes(&bytes, kind.mime_type()))))
}
