//! Terminal color theme for rendered blocks.

use colored::{Color, Colorize};

use crate::segment::BlockKind;
use crate::title::TitleCleanup;

/// A single text style: optional foreground color plus bold.
#[derive(Debug, Clone, Copy, Default)]
pub struct Style {
    color: Option<Color>,
    bold: bool,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fg(color: Color) -> Self {
        Self { color: Some(color), bold: false }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn apply(&self, text: &str) -> String {
        let mut styled = match self.color {
            Some(color) => text.color(color),
            None => text.normal(),
        };
        if self.bold {
            styled = styled.bold();
        }
        styled.to_string()
    }
}

/// Colors and display policies for the block renderer.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub border: Style,
    pub bold: Style,
    pub math: Style,
    pub error: Style,
    pub bullet: Style,
    pub table_header: Style,
    pub title_cleanup: TitleCleanup,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border: Style::fg(Color::BrightBlack),
            bold: Style::new().bold(),
            math: Style::fg(Color::Cyan),
            error: Style::fg(Color::Red),
            bullet: Style::fg(Color::BrightBlack),
            table_header: Style::new().bold(),
            title_cleanup: TitleCleanup::StripDecorations,
        }
    }
}

impl Theme {
    /// Accent color for a block kind, mirroring the section palette of the
    /// tutoring UI (warning orange, knowledge blue, solution indigo, ...).
    pub fn block_style(&self, kind: BlockKind) -> Style {
        let color = match kind {
            BlockKind::Warning => Color::Yellow,
            BlockKind::Knowledge => Color::Blue,
            BlockKind::Hint => Color::BrightYellow,
            BlockKind::Solution => Color::BrightBlue,
            BlockKind::Summary => Color::Green,
            BlockKind::Similar => Color::Magenta,
            BlockKind::GeogebraRef => Color::White,
            BlockKind::Preamble | BlockKind::Unknown => Color::BrightBlack,
        };
        Style::fg(color).bold()
    }
}
