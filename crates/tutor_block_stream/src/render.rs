//! Renders the block tree to styled terminal lines.

use unicode_width::UnicodeWidthStr;

use crate::compose::{RenderNode, compose};
use crate::inline::{Span, format_line};
use crate::math::is_valid_formula;
use crate::segment::{BlockKind, ContentBlock};
use crate::theme::Theme;
use crate::title::clean_title;

/// Renders parsed blocks into terminal output lines. Stateless between
/// calls; the whole tree is re-rendered from the current block list.
pub struct BlockRenderer {
    theme: Theme,
    width: usize,
}

impl BlockRenderer {
    pub fn new(width: usize) -> Self {
        Self::with_theme(width, Theme::default())
    }

    pub fn with_theme(width: usize, theme: Theme) -> Self {
        Self { theme, width }
    }

    pub fn render(&self, blocks: &[ContentBlock]) -> Vec<String> {
        let mut lines = Vec::new();
        for block in blocks {
            lines.extend(self.render_block(block));
        }
        lines
    }

    fn render_block(&self, block: &ContentBlock) -> Vec<String> {
        let body: Vec<String> = compose(&block.raw_content)
            .iter()
            .flat_map(|node| self.render_node(node))
            .collect();

        match block.kind {
            // Intro and free-form replies render without a section frame
            BlockKind::Preamble | BlockKind::Unknown => body,
            _ => self.framed(block, body),
        }
    }

    fn framed(&self, block: &ContentBlock, body: Vec<String>) -> Vec<String> {
        let style = self.theme.block_style(block.kind);
        let title = clean_title(&block.title, self.theme.title_cleanup);

        let used = title.width() + 4;
        let fill = "─".repeat(self.width.saturating_sub(used));
        let mut lines = vec![style.apply(&format!("┌─ {title} {fill}"))];
        for line in body {
            lines.push(format!("{} {line}", style.apply("│")));
        }
        lines.push(style.apply("└─"));
        lines
    }

    fn render_node(&self, node: &RenderNode) -> Vec<String> {
        match node {
            RenderNode::Paragraph(spans) => vec![self.render_spans(spans)],
            RenderNode::BulletItem(spans) => {
                vec![format!(
                    "{} {}",
                    self.theme.bullet.apply("•"),
                    self.render_spans(spans)
                )]
            }
            RenderNode::Spacer => vec![String::new()],
            RenderNode::Table(grid) => self.render_table(grid),
        }
    }

    fn render_spans(&self, spans: &[Span]) -> String {
        spans.iter().map(|span| self.render_span(span)).collect()
    }

    /// Each span renders in isolation; an invalid formula falls back to its
    /// literal delimited text in the error style and the rest of the line is
    /// unaffected.
    fn render_span(&self, span: &Span) -> String {
        match span {
            Span::Text(text) => text.clone(),
            Span::Bold(text) => self.theme.bold.apply(text),
            Span::Math(formula) if is_valid_formula(formula) => self.theme.math.apply(formula),
            Span::Math(formula) => self.theme.error.apply(&format!("${formula}$")),
        }
    }

    fn render_table(&self, rows: &[Vec<String>]) -> Vec<String> {
        let n = rows.iter().map(|row| row.len()).max().unwrap_or(0);
        if rows.is_empty() || n == 0 {
            return vec![];
        }

        // Short rows are padded with empty cells at display time only
        let rendered: Vec<Vec<(usize, String)>> = rows
            .iter()
            .enumerate()
            .map(|(ri, row)| {
                (0..n)
                    .map(|i| {
                        let raw = row.get(i).map(String::as_str).unwrap_or("");
                        self.render_cell(raw, ri == 0)
                    })
                    .collect()
            })
            .collect();

        let mut widths = vec![0usize; n];
        for row in &rendered {
            for (i, (cell_width, _)) in row.iter().enumerate() {
                widths[i] = widths[i].max(*cell_width);
            }
        }

        let hline = |l: &str, m: &str, r: &str| {
            format!(
                "{}{}{}",
                self.theme.border.apply(l),
                widths
                    .iter()
                    .map(|w| self.theme.border.apply(&"─".repeat(w + 2)))
                    .collect::<Vec<_>>()
                    .join(&self.theme.border.apply(m)),
                self.theme.border.apply(r)
            )
        };

        let mut out = vec![hline("┌", "┬", "┐")];
        for (ri, row) in rendered.iter().enumerate() {
            let cells = row
                .iter()
                .enumerate()
                .map(|(i, (cell_width, styled))| {
                    let pad = " ".repeat(widths[i].saturating_sub(*cell_width));
                    format!(" {styled}{pad} ")
                })
                .collect::<Vec<_>>()
                .join(&self.theme.border.apply("│"));
            out.push(format!(
                "{}{cells}{}",
                self.theme.border.apply("│"),
                self.theme.border.apply("│")
            ));
            if ri < rendered.len() - 1 {
                out.push(hline("├", "┼", "┤"));
            }
        }
        out.push(hline("└", "┴", "┘"));
        out
    }

    /// Returns the visible width and the styled text of one cell. Header
    /// cells take the header style over inline formatting.
    fn render_cell(&self, raw: &str, header: bool) -> (usize, String) {
        let spans = format_line(raw);
        let plain: String = spans
            .iter()
            .map(|span| match span {
                Span::Text(text) | Span::Bold(text) => text.clone(),
                Span::Math(formula) if is_valid_formula(formula) => formula.clone(),
                Span::Math(formula) => format!("${formula}$"),
            })
            .collect();
        let styled = if header {
            self.theme.table_header.apply(&plain)
        } else {
            self.render_spans(&spans)
        };
        (plain.width(), styled)
    }
}
