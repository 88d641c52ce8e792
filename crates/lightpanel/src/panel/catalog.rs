//! Static tables describing which lights exist and how toggles fan out.
//!
//! Everything here is known at compile time: the set of elementary light
//! groups, the controls a user can click, and how many diagram leaves each
//! group spans.

use std::collections::BTreeSet;

use serde::Serialize;
use strum::AsRefStr;
use strum::Display;
use strum::EnumIter;
use strum::EnumString;
use strum::IntoEnumIterator;

/// The smallest independently switchable set of lights.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    AsRefStr,
    EnumIter,
    EnumString,
    Serialize,
)]
#[strum(serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum ElementaryGroup {
    HallCorner,
    HallShortEdge,
    HallLongEdge,
    HallSmallLight,
    RoomLight,
}

/// Intermediate routing node between the power source and the leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Hub {
    Hall,
    Room,
}

/// Orientation of the edge anchor on the rendered diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    Vertical,
    Horizontal,
}

impl ElementaryGroup {
    /// Number of leaf nodes this group occupies on the diagram.
    pub fn connection_count(self) -> u8 {
        match self {
            ElementaryGroup::HallCorner => 4,
            ElementaryGroup::HallShortEdge => 2,
            ElementaryGroup::HallLongEdge => 4,
            ElementaryGroup::HallSmallLight => 2,
            ElementaryGroup::RoomLight => 4,
        }
    }

    /// The hub this group's leaves hang off.
    pub fn hub(self) -> Hub {
        match self {
            ElementaryGroup::RoomLight => Hub::Room,
            _ => Hub::Hall,
        }
    }

    /// Short-edge hall lights are wired across the hall, everything else along it.
    pub fn anchor(self) -> Anchor {
        match self {
            ElementaryGroup::HallShortEdge => Anchor::Vertical,
            _ => Anchor::Horizontal,
        }
    }

    pub fn all() -> BTreeSet<ElementaryGroup> {
        ElementaryGroup::iter().collect()
    }
}

/// Any control a user can click on the panel.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, AsRefStr, EnumIter, EnumString,
)]
#[strum(serialize_all = "camelCase")]
pub enum ToggleId {
    HallCorner,
    HallShortEdge,
    HallLongEdge,
    HallSmallLight,
    RoomLight,
    /// Every hall group.
    HallOn,
    /// Every room group.
    RoomOn,
    /// Every group.
    On,
    /// Controls no group directly; see [`crate::panel::toggle`].
    Off,
}

impl From<ElementaryGroup> for ToggleId {
    fn from(group: ElementaryGroup) -> Self {
        match group {
            ElementaryGroup::HallCorner => ToggleId::HallCorner,
            ElementaryGroup::HallShortEdge => ToggleId::HallShortEdge,
            ElementaryGroup::HallLongEdge => ToggleId::HallLongEdge,
            ElementaryGroup::HallSmallLight => ToggleId::HallSmallLight,
            ElementaryGroup::RoomLight => ToggleId::RoomLight,
        }
    }
}

/// Expand a toggle into the elementary groups it controls.
pub fn expand(id: ToggleId) -> BTreeSet<ElementaryGroup> {
    use ElementaryGroup::*;

    match id {
        ToggleId::HallCorner => BTreeSet::from([HallCorner]),
        ToggleId::HallShortEdge => BTreeSet::from([HallShortEdge]),
        ToggleId::HallLongEdge => BTreeSet::from([HallLongEdge]),
        ToggleId::HallSmallLight => BTreeSet::from([HallSmallLight]),
        ToggleId::RoomLight => BTreeSet::from([RoomLight]),
        ToggleId::HallOn => ElementaryGroup::iter()
            .filter(|g| g.hub() == Hub::Hall)
            .collect(),
        ToggleId::RoomOn => ElementaryGroup::iter()
            .filter(|g| g.hub() == Hub::Room)
            .collect(),
        ToggleId::On => ElementaryGroup::all(),
        ToggleId::Off => BTreeSet::new(),
    }
}
