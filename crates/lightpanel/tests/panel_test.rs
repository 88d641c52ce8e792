use std::collections::BTreeSet;

use lightpanel::panel::derive_edges;
use lightpanel::panel::toggle;
use lightpanel::panel::Hub;
use lightpanel::panel::NodeId;
use lightpanel::ElementaryGroup;
use lightpanel::EventRouter;
use lightpanel::PanelState;
use lightpanel::ToggleId;
use strum::IntoEnumIterator;

fn click_all(targets: &[&str]) -> EventRouter {
    let mut router = EventRouter::new();
    for target in targets {
        router.click(target);
    }
    router
}

#[test]
fn test_every_leaf_click_toggles_its_group() {
    for group in ElementaryGroup::iter() {
        for i in 1..=group.connection_count() {
            let id = format!("{}{}", group, i);
            let router = click_all(&[&id]);
            assert_eq!(router.state().active, BTreeSet::from([group]), "{id}");

            let router = click_all(&[&id, &id]);
            assert_eq!(router.state(), &PanelState::default(), "{id}");
        }
    }
}

#[test]
fn test_hub_buttons() {
    let router = click_all(&["hallOn", "roomOn", "off"]);
    assert!(router.state().active.is_empty());
    assert!(router.state().edges.is_empty());

    let router = click_all(&["on"]);
    assert_eq!(router.state().active, ElementaryGroup::all());

    let router = click_all(&["on", "on"]);
    assert!(router.state().active.is_empty());
}

#[test]
fn test_ignored_clicks_between_real_ones() {
    let router = click_all(&["", "roomLight1", "powerHall", "", "lamp7"]);
    assert_eq!(
        router.state().active,
        BTreeSet::from([ElementaryGroup::RoomLight])
    );
    assert_eq!(router.state().edges, derive_edges(&router.state().active));
}

#[test]
fn test_hall_and_room_source_routing() {
    let edges = derive_edges(&BTreeSet::from([
        ElementaryGroup::HallCorner,
        ElementaryGroup::RoomLight,
    ]));
    let sources: Vec<NodeId> = edges
        .iter()
        .filter(|e| e.from == NodeId::PowerSource)
        .map(|e| e.to)
        .collect();
    assert_eq!(sources, vec![NodeId::Hub(Hub::Hall)]);
}

#[test]
fn test_activate_all_then_reverse_returns_dark() {
    // Activating groups one by one from a dark panel and switching them off in
    // reverse order lands back on a dark panel.
    let groups: Vec<ElementaryGroup> = ElementaryGroup::iter().collect();
    let mut state = PanelState::default();
    for &group in &groups {
        state = toggle(&state, ToggleId::from(group));
    }
    assert_eq!(state.active, ElementaryGroup::all());

    for &group in groups.iter().rev() {
        state = toggle(&state, ToggleId::from(group));
    }
    assert!(state.active.is_empty());
    assert!(state.edges.is_empty());
}
