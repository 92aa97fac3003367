//! Splits an accumulated model reply into typed pedagogical blocks.
//!
//! The assistant formats its replies as titled sections delimited by a fixed
//! run of `━` glyphs. This module scans the full reply line by line and
//! produces the ordered block list; free-form replies without any recognized
//! header collapse into a single [`BlockKind::Unknown`] block.

use serde::{Deserialize, Serialize};
use strum_macros::IntoStaticStr;

/// The separator glyph run the assistant places around section headers. A
/// line containing it is a pure delimiter and never content, even when the
/// same line would also match a header phrase.
pub const SEPARATOR: &str = "━━━━━━━━━━━━━━━━━━━━";

/// Display title for intro text appearing before the first header.
pub const PREAMBLE_TITLE: &str = "Mở đầu";

/// Display title for free-form replies without any recognized header.
pub const FALLBACK_TITLE: &str = "Phản hồi";

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum BlockKind {
    Preamble,
    Knowledge,
    Hint,
    Solution,
    Summary,
    Similar,
    GeogebraRef,
    Warning,
    Unknown,
}

/// Header phrases in declaration order. Matching is substring containment
/// against the trimmed line, first rule wins, so the order here is the
/// tie-break order.
pub const HEADER_RULES: &[(&str, BlockKind)] = &[
    ("1️⃣ KIẾN THỨC SỬ DỤNG", BlockKind::Knowledge),
    ("2️⃣ GỢI Ý BƯỚC GIẢI", BlockKind::Hint),
    ("3️⃣ LỜI GIẢI CHI TIẾT", BlockKind::Solution),
    ("4️⃣ CHỐT PHƯƠNG PHÁP GIẢI", BlockKind::Summary),
    ("5️⃣ BÀI TOÁN TƯƠNG TỰ", BlockKind::Similar),
    ("VẼ HÌNH TRÊN GEOGEBRA", BlockKind::GeogebraRef),
    ("⚠️ CẢNH BÁO VƯỢT CẤP", BlockKind::Warning),
];

/// One titled section of a model reply. Blocks are values rebuilt from the
/// buffer on every re-segmentation, never patched in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBlock {
    pub kind: BlockKind,
    pub title: String,
    pub raw_content: String,
}

impl ContentBlock {
    fn open(kind: BlockKind, title: impl ToString) -> Self {
        Self {
            kind,
            title: title.to_string(),
            raw_content: String::new(),
        }
    }
}

fn is_separator(trimmed: &str) -> bool {
    trimmed.contains(SEPARATOR)
}

fn match_header(trimmed: &str) -> Option<(&'static str, BlockKind)> {
    HEADER_RULES
        .iter()
        .find(|(phrase, _)| trimmed.contains(phrase))
        .map(|(phrase, kind)| (*phrase, *kind))
}

/// Segment the full accumulated reply into ordered blocks.
///
/// Safe to call repeatedly on a growing buffer: blocks fully contained in an
/// unchanged prefix classify identically across calls.
pub fn segment(text: &str) -> Vec<ContentBlock> {
    let normalized = text.replace("\r\n", "\n");

    let mut blocks: Vec<ContentBlock> = Vec::new();
    let mut current: Option<ContentBlock> = None;
    let mut intro = String::new();

    for line in normalized.split('\n') {
        let trimmed = line.trim();

        // Separator detection takes precedence over header matching
        if is_separator(trimmed) {
            continue;
        }

        if let Some((phrase, kind)) = match_header(trimmed) {
            if let Some(block) = current.take() {
                blocks.push(block);
            }
            current = Some(ContentBlock::open(kind, phrase));
            continue;
        }

        match current.as_mut() {
            Some(block) => {
                block.raw_content.push_str(line);
                block.raw_content.push('\n');
            }
            None => {
                intro.push_str(line);
                intro.push('\n');
            }
        }
    }

    if let Some(block) = current.take() {
        blocks.push(block);
    }

    if blocks.is_empty() {
        return vec![ContentBlock {
            kind: BlockKind::Unknown,
            title: FALLBACK_TITLE.to_string(),
            raw_content: text.to_string(),
        }];
    }

    if !intro.trim().is_empty() {
        blocks.insert(0, ContentBlock {
            kind: BlockKind::Preamble,
            title: PREAMBLE_TITLE.to_string(),
            raw_content: intro,
        });
    }

    blocks
}
