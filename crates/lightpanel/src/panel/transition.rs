use std::collections::BTreeSet;

use super::catalog::expand;
use super::catalog::ElementaryGroup;
use super::catalog::ToggleId;
use super::edge::derive_edges;
use super::edge::DiagramEdge;

/// Snapshot of the panel: which groups are powered and the edges drawn for them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelState {
    pub active: BTreeSet<ElementaryGroup>,
    pub edges: BTreeSet<DiagramEdge>,
}

impl PanelState {
    pub fn is_active(&self, group: ElementaryGroup) -> bool {
        self.active.contains(&group)
    }
}

/// Compute the state that follows clicking `id` while in `current`.
///
/// A toggle touching any already-active group switches all of its groups off,
/// otherwise it switches them all on. Edges are updated incrementally: the
/// edges derived for the toggled groups alone are added or removed, leaving
/// the rest of the diagram as it was. `Off` resets the panel whenever
/// anything is lit.
pub fn toggle(current: &PanelState, id: ToggleId) -> PanelState {
    if id == ToggleId::Off {
        if current.active.is_empty() {
            return current.clone();
        }
        return PanelState::default();
    }

    let affected = expand(id);
    let touched = derive_edges(&affected);

    if !current.active.is_disjoint(&affected) {
        PanelState {
            active: current.active.difference(&affected).copied().collect(),
            edges: current.edges.difference(&touched).copied().collect(),
        }
    } else {
        PanelState {
            active: current.active.union(&affected).copied().collect(),
            edges: current.edges.union(&touched).copied().collect(),
        }
    }
}
