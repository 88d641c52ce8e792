use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;
use serde::Serializer;
use strum::Display;

use super::catalog::Anchor;
use super::catalog::ElementaryGroup;
use super::catalog::Hub;
use crate::render::theme;

/// A node on the power diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NodeId {
    PowerSource,
    Hub(Hub),
    /// Leaf `index` (1-based) of a group.
    Leaf(ElementaryGroup, u8),
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::PowerSource => f.write_str("powerSource"),
            NodeId::Hub(Hub::Hall) => f.write_str("powerHall"),
            NodeId::Hub(Hub::Room) => f.write_str("powerRoom"),
            NodeId::Leaf(group, index) => write!(f, "{}{}", group, index),
        }
    }
}

impl Serialize for NodeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Thickness {
    XxSmall,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Routing {
    Rectilinear,
}

/// One rendered connection on the power diagram.
///
/// Edges are never stored on their own; they only exist as part of a
/// [`super::PanelState`] and are compared structurally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct DiagramEdge {
    pub from: NodeId,
    pub to: NodeId,
    pub thickness: Thickness,
    pub anchor: Anchor,
    #[serde(rename = "type")]
    pub routing: Routing,
    pub color: &'static str,
}

impl DiagramEdge {
    fn new(from: NodeId, to: NodeId, anchor: Anchor) -> Self {
        Self {
            from,
            to,
            thickness: Thickness::XxSmall,
            anchor,
            routing: Routing::Rectilinear,
            color: theme::CONNECTION,
        }
    }

    /// Edge feeding a hub from the power source.
    pub fn source(hub: Hub) -> Self {
        Self::new(NodeId::PowerSource, NodeId::Hub(hub), Anchor::Vertical)
    }

    /// Edge from a group's hub to one of its leaves.
    pub fn leaf(group: ElementaryGroup, index: u8) -> Self {
        Self::new(
            NodeId::Hub(group.hub()),
            NodeId::Leaf(group, index),
            group.anchor(),
        )
    }
}

/// Every edge needed to draw `active` on the diagram.
///
/// A single source edge feeds the room hub only when room lights are the sole
/// active group; any other non-empty combination, including hall and room
/// together, is fed through the hall hub.
pub fn derive_edges(active: &BTreeSet<ElementaryGroup>) -> BTreeSet<DiagramEdge> {
    let mut edges: BTreeSet<DiagramEdge> = active
        .iter()
        .flat_map(|&group| (1..=group.connection_count()).map(move |i| DiagramEdge::leaf(group, i)))
        .collect();

    if !edges.is_empty() {
        let room_only = active.len() == 1 && active.contains(&ElementaryGroup::RoomLight);
        edges.insert(DiagramEdge::source(if room_only { Hub::Room } else { Hub::Hall }));
    }

    edges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sources(edges: &BTreeSet<DiagramEdge>) -> Vec<NodeId> {
        edges
            .iter()
            .filter(|e| e.from == NodeId::PowerSource)
            .map(|e| e.to)
            .collect()
    }

    #[test]
    fn test_empty() {
        assert!(derive_edges(&BTreeSet::new()).is_empty());
    }

    #[test]
    fn test_room_only_routes_through_room_hub() {
        let edges = derive_edges(&BTreeSet::from([ElementaryGroup::RoomLight]));
        assert_eq!(edges.len(), 4 + 1);
        assert_eq!(sources(&edges), vec![NodeId::Hub(Hub::Room)]);
        assert!(edges.iter().all(|e| e.from != NodeId::Hub(Hub::Hall)));
    }

    #[test]
    fn test_hall_corner() {
        let edges = derive_edges(&BTreeSet::from([ElementaryGroup::HallCorner]));
        assert_eq!(edges.len(), 4 + 1);
        assert_eq!(sources(&edges), vec![NodeId::Hub(Hub::Hall)]);
        for i in 1..=4 {
            assert!(edges.contains(&DiagramEdge::leaf(ElementaryGroup::HallCorner, i)));
        }
    }

    #[test]
    fn test_hall_and_room_share_hall_source() {
        let edges = derive_edges(&BTreeSet::from([
            ElementaryGroup::HallCorner,
            ElementaryGroup::RoomLight,
        ]));
        assert_eq!(edges.len(), 4 + 4 + 1);
        assert_eq!(sources(&edges), vec![NodeId::Hub(Hub::Hall)]);

        // Room leaves still hang off the room hub.
        let room_leaf = DiagramEdge::leaf(ElementaryGroup::RoomLight, 2);
        assert_eq!(room_leaf.from, NodeId::Hub(Hub::Room));
        assert!(edges.contains(&room_leaf));
    }

    #[test]
    fn test_short_edge_anchor_is_vertical() {
        let edges = derive_edges(&BTreeSet::from([ElementaryGroup::HallShortEdge]));
        let leaves: Vec<_> = edges
            .iter()
            .filter(|e| matches!(e.to, NodeId::Leaf(..)))
            .collect();
        assert_eq!(leaves.len(), 2);
        assert!(leaves.iter().all(|e| e.anchor == Anchor::Vertical));
    }

    #[test]
    fn test_deterministic() {
        let active = ElementaryGroup::all();
        assert_eq!(derive_edges(&active), derive_edges(&active));
        assert_eq!(derive_edges(&active).len(), 4 + 2 + 4 + 2 + 4 + 1);
    }

    #[test]
    fn test_node_ids() {
        assert_eq!(NodeId::PowerSource.to_string(), "powerSource");
        assert_eq!(NodeId::Hub(Hub::Room).to_string(), "powerRoom");
        assert_eq!(
            NodeId::Leaf(ElementaryGroup::HallLongEdge, 3).to_string(),
            "hallLongEdge3"
        );
    }

    #[test]
    fn test_serialize() {
        let edge = DiagramEdge::source(Hub::Hall);
        let json = serde_json::to_value(edge).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "from": "powerSource",
                "to": "powerHall",
                "thickness": "xxsmall",
                "anchor": "vertical",
                "type": "rectilinear",
                "color": "#7DF9FF",
            })
        );
    }
}
