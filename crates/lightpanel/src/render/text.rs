use std::io::Write;

use strum::IntoEnumIterator;
use tracing::warn;

use super::Renderer;
use crate::panel::ElementaryGroup;
use crate::panel::PanelState;

/// Plain-text drawing of the panel: each group's lamp, then each edge.
pub fn draw(state: &PanelState) -> String {
    let mut lines = vec!["lights:".to_string()];
    for group in ElementaryGroup::iter() {
        let mark = if state.is_active(group) { 'x' } else { ' ' };
        lines.push(format!("  [{}] {}", mark, group));
    }

    if state.edges.is_empty() {
        lines.push("edges: none".to_string());
    } else {
        lines.push("edges:".to_string());
        for edge in &state.edges {
            lines.push(format!(
                "  {} -> {} ({}, {})",
                edge.from, edge.to, edge.anchor, edge.routing
            ));
        }
    }

    lines.join("\n")
}

/// Writes [`draw`] output to `out` on every render.
pub struct TextRenderer<W> {
    out: W,
}

impl<W: Write + Send> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> Renderer for TextRenderer<W> {
    fn render(&mut self, state: &PanelState) {
        if let Err(e) = writeln!(self.out, "{}\n", draw(state)) {
            warn!("Failed to write panel: {}", e);
        }
    }
}
