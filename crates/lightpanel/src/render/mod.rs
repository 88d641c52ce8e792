//! Presenting panel state.
//!
//! The router notifies every registered [`Renderer`] after each transition.
//! [`PanelView`] is the serializable form handed to the HTTP API.

pub mod text;
pub mod theme;

use serde::Serialize;
use strum::IntoEnumIterator;
use tracing::debug;

use crate::panel::DiagramEdge;
use crate::panel::ElementaryGroup;
use crate::panel::NodeId;
use crate::panel::PanelState;

/// Something that displays the panel.
pub trait Renderer: Send {
    fn render(&mut self, state: &PanelState);
}

/// A clickable leaf light on the panel and the color it should be drawn in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Indicator {
    pub id: NodeId,
    pub group: ElementaryGroup,
    pub color: &'static str,
}

/// One indicator per leaf node, lit when its group is active.
pub fn indicators(state: &PanelState) -> Vec<Indicator> {
    ElementaryGroup::iter()
        .flat_map(|group| {
            let color = if state.is_active(group) {
                theme::CONNECTION
            } else {
                theme::NO_CONNECTION
            };
            (1..=group.connection_count()).map(move |i| Indicator {
                id: NodeId::Leaf(group, i),
                group,
                color,
            })
        })
        .collect()
}

/// Everything a front end needs to draw the panel.
#[derive(Debug, Clone, Serialize)]
pub struct PanelView {
    pub active: Vec<ElementaryGroup>,
    pub edges: Vec<DiagramEdge>,
    pub indicators: Vec<Indicator>,
    pub background: &'static str,
}

impl From<&PanelState> for PanelView {
    fn from(state: &PanelState) -> Self {
        Self {
            active: state.active.iter().copied().collect(),
            edges: state.edges.iter().copied().collect(),
            indicators: indicators(state),
            background: theme::BACKGROUND,
        }
    }
}

/// Renderer that traces each new state, used when the real display is remote.
#[derive(Debug, Default)]
pub struct LogRenderer;

impl Renderer for LogRenderer {
    fn render(&mut self, state: &PanelState) {
        debug!(
            "Panel now has {} active groups and {} edges: {:?}",
            state.active.len(),
            state.edges.len(),
            state.active
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::toggle;
    use crate::panel::ToggleId;

    #[test]
    fn test_indicators_cover_every_leaf() {
        let all = indicators(&PanelState::default());
        assert_eq!(all.len(), 16);
        assert!(all.iter().all(|i| i.color == theme::NO_CONNECTION));
    }

    #[test]
    fn test_indicators_follow_active_groups() {
        let state = toggle(&PanelState::default(), ToggleId::HallSmallLight);
        let lit: Vec<String> = indicators(&state)
            .into_iter()
            .filter(|i| i.color == theme::CONNECTION)
            .map(|i| i.id.to_string())
            .collect();
        assert_eq!(lit, vec!["hallSmallLight1", "hallSmallLight2"]);
    }

    #[test]
    fn test_view_serializes_names() {
        let state = toggle(&PanelState::default(), ToggleId::RoomOn);
        let json = serde_json::to_value(PanelView::from(&state)).unwrap();
        assert_eq!(json["active"], serde_json::json!(["roomLight"]));
        assert_eq!(json["edges"].as_array().unwrap().len(), 5);
        assert_eq!(json["indicators"][0]["id"], "hallCorner1");
        assert_eq!(json["indicators"][12]["color"], theme::CONNECTION);
    }
}
