//! Turns a block's raw text into an ordered sequence of renderable nodes.

use serde::{Deserialize, Serialize};

use crate::inline::{Span, format_line};
use crate::table::{extract, is_table_line};

/// One renderable piece of a block's content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderNode {
    /// A regular line, untrimmed so structural indentation survives.
    Paragraph(Vec<Span>),
    /// A `- ` line with the leading hyphen stripped.
    BulletItem(Vec<Span>),
    /// A blank line.
    Spacer,
    /// A run of pipe lines, extracted into a grid of trimmed cells.
    Table(Vec<Vec<String>>),
}

/// Compose a block's raw content line by line. Consecutive table lines form
/// one table run; a run still open at end of content is flushed as a final
/// table node.
pub fn compose(raw_content: &str) -> Vec<RenderNode> {
    let content = raw_content.strip_suffix('\n').unwrap_or(raw_content);

    let mut nodes = Vec::new();
    let mut table_run: Vec<String> = Vec::new();

    for line in content.split('\n') {
        let trimmed = line.trim();

        if is_table_line(trimmed) {
            table_run.push(line.to_string());
            continue;
        }
        flush_table(&mut nodes, &mut table_run);

        if trimmed.is_empty() {
            nodes.push(RenderNode::Spacer);
        } else if let Some(item) = trimmed.strip_prefix('-') {
            nodes.push(RenderNode::BulletItem(format_line(item.trim())));
        } else {
            nodes.push(RenderNode::Paragraph(format_line(line)));
        }
    }

    flush_table(&mut nodes, &mut table_run);
    nodes
}

fn flush_table(nodes: &mut Vec<RenderNode>, table_run: &mut Vec<String>) {
    if table_run.is_empty() {
        return;
    }
    if let Some(grid) = extract(table_run) {
        nodes.push(RenderNode::Table(grid));
    }
    table_run.clear();
}
