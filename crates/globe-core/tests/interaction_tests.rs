// Rotation state machine and selection behaviour driven through the controller.

use globe_core::{Globe, GlobeConfig, Orientation, RotationMode, SelectionChange};
use glam::Vec2;
use std::f32::consts::FRAC_PI_4;

#[derive(Debug, Clone, PartialEq)]
struct Stop {
    id: &'static str,
}

fn stops(n: usize) -> Vec<Stop> {
    const IDS: [&str; 6] = ["paris", "berlin", "tokyo", "positano", "dubai", "nyc"];
    (0..n).map(|i| Stop { id: IDS[i % IDS.len()] }).collect()
}

fn globe(n: usize) -> Globe<Stop> {
    Globe::new(stops(n), GlobeConfig::default()).expect("default config is valid")
}

fn front_slot(g: &Globe<Stop>) -> usize {
    g.projected()
        .iter()
        .find(|p| p.is_front)
        .map(|p| p.slot)
        .expect("some item faces the viewer")
}

fn back_slot(g: &Globe<Stop>) -> usize {
    g.projected()
        .iter()
        .find(|p| !p.is_front)
        .map(|p| p.slot)
        .expect("some item faces away")
}

#[test]
fn idle_ticks_advance_yaw_by_fixed_step() {
    let mut g = Globe::new(stops(3), GlobeConfig::default().with_radius(450.0)).unwrap();
    let step = g.config().idle_yaw_step;
    g.tick();
    assert!((g.orientation().yaw - step).abs() < 1e-6);
    g.tick();
    assert!((g.orientation().yaw - 2.0 * step).abs() < 1e-5);
    assert_eq!(g.orientation().pitch, 0.0);
}

#[test]
fn drag_delta_maps_to_yaw_and_pitch() {
    let mut g = globe(3);
    g.begin_drag();
    assert_eq!(g.mode(), RotationMode::Dragging);
    g.drag_by(Vec2::new(100.0, 0.0));
    assert!((g.orientation().yaw + 0.5).abs() < 1e-5);
    assert_eq!(g.orientation().pitch, 0.0);

    g.drag_by(Vec2::new(0.0, 40.0));
    assert!((g.orientation().pitch - 0.2).abs() < 1e-5);
    assert!((g.orientation().yaw + 0.5).abs() < 1e-5);

    g.end_drag();
    assert_eq!(g.mode(), RotationMode::Idle);
}

#[test]
fn drag_does_not_auto_rotate() {
    let mut g = globe(12);
    g.begin_drag();
    let before = g.orientation();
    g.tick();
    g.tick();
    assert_eq!(g.orientation(), before);
}

#[test]
fn drag_updates_projection_immediately() {
    let mut g = globe(12);
    let before: Vec<_> = g.projected().to_vec();
    g.begin_drag();
    g.drag_by(Vec2::new(30.0, -20.0));
    assert_ne!(g.projected(), before.as_slice());
}

#[test]
fn stray_drag_events_are_ignored() {
    let mut g = globe(12);
    g.drag_by(Vec2::new(250.0, 80.0));
    assert_eq!(g.orientation(), Orientation::default());
    g.end_drag();
    assert_eq!(g.mode(), RotationMode::Idle);
}

#[test]
fn selecting_front_item_suspends_rotation_until_dismissed() {
    let mut g = globe(24);
    g.tick();
    let slot = front_slot(&g);

    assert_eq!(g.click(slot), Some(SelectionChange::Selected(slot)));
    assert_eq!(g.selected(), Some(slot));
    assert_eq!(g.selected_item().map(|s| s.id), Some(stops(24)[slot].id));
    assert_eq!(g.mode(), RotationMode::Suspended);

    let frozen = g.orientation();
    g.tick();
    assert_eq!(g.orientation(), frozen);

    assert_eq!(g.dismiss(), Some(SelectionChange::Cleared));
    assert_eq!(g.selected(), None);
    assert_eq!(g.mode(), RotationMode::Idle);
    g.tick();
    let step = g.config().idle_yaw_step;
    assert!((g.orientation().yaw - (frozen.yaw + step)).abs() < 1e-5);
}

#[test]
fn clicking_back_item_never_selects() {
    let mut g = globe(24);
    let slot = back_slot(&g);
    assert_eq!(g.click(slot), None);
    assert_eq!(g.selected(), None);
    assert_eq!(g.mode(), RotationMode::Idle);
}

#[test]
fn clicking_unknown_slot_is_noop() {
    let mut g = globe(4);
    assert_eq!(g.click(99), None);
    assert_eq!(g.selected(), None);
}

#[test]
fn suspended_globe_ignores_ticks_and_drags() {
    let mut g = globe(24);
    g.begin_drag();
    g.drag_by(Vec2::new(12.0, 7.0));
    let slot = front_slot(&g);
    g.click(slot);
    assert_eq!(g.mode(), RotationMode::Suspended);

    let frozen = g.orientation();
    for _ in 0..10 {
        g.tick();
        g.begin_drag();
        g.drag_by(Vec2::new(33.0, -17.0));
        g.end_drag();
    }
    assert_eq!(g.orientation(), frozen);
    assert_eq!(g.mode(), RotationMode::Suspended);
}

#[test]
fn dismiss_during_drag_returns_to_idle_not_dragging() {
    let mut g = globe(24);
    g.begin_drag();
    let slot = front_slot(&g);
    g.click(slot);
    g.dismiss();
    assert_eq!(g.mode(), RotationMode::Idle);

    let before = g.orientation();
    g.drag_by(Vec2::new(50.0, 50.0));
    g.end_drag();
    assert_eq!(g.orientation(), before);
    assert_eq!(g.mode(), RotationMode::Idle);
}

#[test]
fn dismiss_without_selection_is_noop() {
    let mut g = globe(24);
    assert_eq!(g.dismiss(), None);
    assert_eq!(g.mode(), RotationMode::Idle);
}

#[test]
fn click_at_resolves_screen_point() {
    let mut g = globe(24);
    let target = *g
        .projected()
        .iter()
        .rev()
        .find(|p| p.is_front)
        .expect("front item");
    let change = g.click_at(target.offset, 40.0);
    assert_eq!(change, Some(SelectionChange::Selected(target.slot)));
}

#[test]
fn back_items_neither_hover_nor_select() {
    let mut g = globe(2);
    g.set_orientation(Orientation::new(FRAC_PI_4, 0.0));
    let back = *g.projected().iter().find(|p| !p.is_front).unwrap();
    let front = *g.projected().iter().find(|p| p.is_front).unwrap();

    assert!(!g.hover_at(back.offset, 40.0));
    assert_eq!(g.hovered(), None);
    assert_eq!(g.click_at(back.offset, 40.0), None);
    assert_eq!(g.selected(), None);

    assert!(g.hover_at(front.offset, 40.0));
    assert_eq!(g.hovered(), Some(front.slot));
    assert!(g.hover_at(Vec2::new(5000.0, 0.0), 40.0));
    assert_eq!(g.hovered(), None);
}

#[test]
fn deactivating_mid_drag_releases_the_drag() {
    let mut g = globe(12);
    g.begin_drag();
    g.deactivate();
    assert_eq!(g.mode(), RotationMode::Idle);
}

#[test]
fn replacing_items_relays_out_and_clears_selection() {
    let mut g = globe(24);
    let slot = front_slot(&g);
    g.click(slot);
    let change = g.set_items(stops(5));
    assert_eq!(change, Some(SelectionChange::Cleared));
    assert_eq!(g.base_positions().len(), 5);
    assert_eq!(g.projected().len(), 5);
    assert_eq!(g.selected(), None);
    assert_eq!(g.mode(), RotationMode::Idle);
}

#[test]
fn empty_globe_is_inert() {
    let mut g = globe(0);
    assert!(g.tick().is_empty());
    g.begin_drag();
    g.drag_by(Vec2::new(10.0, 10.0));
    g.end_drag();
    assert_eq!(g.click_at(Vec2::ZERO, 40.0), None);
    assert_eq!(g.dismiss(), None);
}

#[test]
fn invalid_config_is_rejected() {
    let cfg = GlobeConfig::default().with_focal_length(-1.0);
    assert!(Globe::new(stops(3), cfg).is_err());
}
