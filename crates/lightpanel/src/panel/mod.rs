//! Light group state: the catalog of groups, diagram edge derivation, and the
//! toggle transition between panel states.
//!
//! Everything in here is pure and synchronous. The only owner of a live
//! [`PanelState`] is [`crate::router::EventRouter`].

pub mod catalog;
mod edge;
mod transition;

pub use catalog::expand;
pub use catalog::Anchor;
pub use catalog::ElementaryGroup;
pub use catalog::Hub;
pub use catalog::ToggleId;
pub use edge::derive_edges;
pub use edge::DiagramEdge;
pub use edge::NodeId;
pub use edge::Routing;
pub use edge::Thickness;
pub use transition::toggle;
pub use transition::PanelState;
