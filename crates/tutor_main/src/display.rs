//! Streams the current turn's render tree to the terminal, redrawing in
//! place as snapshots arrive.

use std::io::Write as _;

use colored::Colorize;
use tutor_app::TurnEvent;
use tutor_block_stream::{BlockRenderer, ContentBlock, segment};

pub struct StreamDisplay {
    renderer: BlockRenderer,
    // Lines painted for the active turn, erased before each redraw
    rendered_lines: usize,
}

impl StreamDisplay {
    pub fn new() -> Self {
        let width = terminal_size::terminal_size()
            .map(|(w, _)| w.0 as usize)
            .unwrap_or(80);
        Self {
            renderer: BlockRenderer::new(width.clamp(40, 100)),
            rendered_lines: 0,
        }
    }

    /// Renders a static message (welcome text, notices) below everything
    /// already on screen.
    pub fn show_message(&self, text: &str) {
        let lines = self.renderer.render(&segment(text));
        let mut out = std::io::stdout().lock();
        for line in &lines {
            let _ = writeln!(out, "{line}");
        }
        let _ = writeln!(out);
    }

    pub fn begin_turn(&mut self) {
        self.rendered_lines = 0;
    }

    pub fn handle(&mut self, event: &TurnEvent) {
        match event {
            TurnEvent::Snapshot { blocks, .. } => self.redraw(blocks, true),
            TurnEvent::Completed { blocks, .. } => {
                self.redraw(blocks, false);
                println!();
            }
            TurnEvent::Failed { message, .. } => {
                // The partial reply stays on screen; the error goes under it
                self.rendered_lines = 0;
                self.show_message(message);
            }
        }
    }

    fn redraw(&mut self, blocks: &[ContentBlock], streaming: bool) {
        let lines = self.renderer.render(blocks);
        let mut out = std::io::stdout().lock();
        if self.rendered_lines > 0 {
            let _ = write!(out, "\x1b[{}A\x1b[0J", self.rendered_lines);
        }
        for line in &lines {
            let _ = writeln!(out, "{line}");
        }
        if streaming {
            let _ = writeln!(out, "{}", "… đang trả lời".bright_black());
        }
        let _ = out.flush();
        self.rendered_lines = lines.len() + usize::from(streaming);
    }
}

impl Default for StreamDisplay {
    fn default() -> Self {
        Self::new()
    }
}
