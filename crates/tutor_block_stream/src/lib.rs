//! Tutor Block Stream - Streaming block parser and renderer for tutoring
//! replies.
//!
//! The assistant structures its replies into pedagogical sections (knowledge
//! recap, hints, detailed solution, ...) separated by `━` runs and fixed
//! header phrases, with inline `$...$` math, `**bold**` spans and pipe
//! tables. This crate turns that semi-structured text into typed blocks and
//! render nodes, incrementally as fragments arrive, and renders them as
//! styled terminal lines.
//!
//! # Example
//!
//! ```
//! use tutor_block_stream::ResponseBuffer;
//!
//! let mut buffer = ResponseBuffer::new();
//!
//! // Push fragments as they arrive from the model
//! buffer.push("1️⃣ KIẾN THỨC SỬ");
//! buffer.push(" DỤNG\n- Định lý Pythagore\n");
//! buffer.finish();
//!
//! assert_eq!(buffer.blocks().len(), 1);
//! ```

mod compose;
mod inline;
mod math;
mod render;
mod segment;
mod table;
mod theme;
mod title;

pub use compose::{RenderNode, compose};
pub use inline::{Span, format_line};
pub use math::is_valid_formula;
pub use render::BlockRenderer;
pub use segment::{
    BlockKind, ContentBlock, FALLBACK_TITLE, HEADER_RULES, PREAMBLE_TITLE, SEPARATOR, segment,
};
pub use table::extract;
pub use theme::{Style, Theme};
pub use title::{TitleCleanup, clean_title};

/// The growing text of one model turn, re-segmented into blocks after every
/// fragment.
///
/// The whole block list is rebuilt from the buffer on each push; blocks are
/// immutable values, never patched in place, so a snapshot taken at any
/// point stays valid after further fragments arrive.
#[derive(Debug, Default, Clone)]
pub struct ResponseBuffer {
    text: String,
    complete: bool,
    blocks: Vec<ContentBlock>,
}

impl ResponseBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fragment and re-segment the full buffer. Returns the current
    /// best-effort block list.
    pub fn push(&mut self, fragment: &str) -> &[ContentBlock] {
        self.text.push_str(fragment);
        self.blocks = segment(&self.text);
        &self.blocks
    }

    /// Mark the stream as terminated. The block list is already up to date;
    /// completion only flips the streaming flag consumers read.
    pub fn finish(&mut self) {
        self.complete = true;
    }

    pub fn blocks(&self) -> &[ContentBlock] {
        &self.blocks
    }

    /// An owned copy of the current block list, safe to publish to a display
    /// layer while the buffer keeps growing.
    pub fn snapshot(&self) -> Vec<ContentBlock> {
        self.blocks.clone()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
