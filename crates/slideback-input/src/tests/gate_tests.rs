use super::*;
use crate::event::TouchEvent;

fn gate() -> TouchGate {
    // density 1.0 and a 10 px slop to keep coordinates easy to reason about
    TouchGate::with_slop(1.0, 10.0)
}

#[test]
fn edge_width_is_deterministic_for_fixed_density() {
    assert_eq!(TouchGate::new(1.0).edge_width_px(), 20.0);
    assert_eq!(TouchGate::new(2.0).edge_width_px(), 40.0);
    assert_eq!(TouchGate::new(3.0).edge_width_px(), 60.0);
}

#[test]
fn press_inside_zone_classifies_down() {
    let mut gate = gate();
    assert_eq!(
        gate.classify(&TouchEvent::down(5.0), GestureState::Idle),
        Signal::Down
    );
}

#[test]
fn press_exactly_on_edge_is_in_zone() {
    let mut gate = gate();
    assert_eq!(
        gate.classify(&TouchEvent::down(20.0), GestureState::Idle),
        Signal::Down
    );
    let mut gate = TouchGate::with_slop(1.0, 10.0);
    assert_eq!(
        gate.classify(&TouchEvent::down(20.1), GestureState::Idle),
        Signal::Ignore
    );
}

#[test]
fn press_outside_zone_ignores_whole_sequence() {
    let mut gate = gate();
    assert_eq!(
        gate.classify(&TouchEvent::down(50.0), GestureState::Idle),
        Signal::Ignore
    );
    assert_eq!(
        gate.classify(&TouchEvent::moved(0, 300.0), GestureState::Idle),
        Signal::Ignore
    );
    assert_eq!(
        gate.classify(&TouchEvent::up(300.0), GestureState::Idle),
        Signal::Ignore
    );
    // next press starts a fresh sequence
    assert_eq!(
        gate.classify(&TouchEvent::down(5.0), GestureState::Idle),
        Signal::Down
    );
}

#[test]
fn movement_below_slop_stays_ignored() {
    let mut gate = gate();
    gate.classify(&TouchEvent::down(5.0), GestureState::Idle);
    assert_eq!(
        gate.classify(&TouchEvent::moved(0, 12.0), GestureState::ArmedInZone),
        Signal::Ignore
    );
}

#[test]
fn movement_at_slop_becomes_move() {
    let mut gate = gate();
    gate.classify(&TouchEvent::down(5.0), GestureState::Idle);
    assert_eq!(
        gate.classify(&TouchEvent::moved(0, 40.0), GestureState::ArmedInZone),
        Signal::Move(40.0)
    );
}

#[test]
fn every_move_counts_once_sliding() {
    let mut gate = gate();
    gate.classify(&TouchEvent::down(5.0), GestureState::Idle);
    // once sliding, even sub-slop jitter is reported
    assert_eq!(
        gate.classify(&TouchEvent::moved(0, 6.0), GestureState::Sliding),
        Signal::Move(6.0)
    );
}

#[test]
fn secondary_pointer_events_are_flagged() {
    let mut gate = gate();
    gate.classify(&TouchEvent::down(5.0), GestureState::Idle);
    assert_eq!(
        gate.classify(&TouchEvent::pointer_down(1, 400.0), GestureState::Sliding),
        Signal::MultiDown
    );
    assert_eq!(
        gate.classify(&TouchEvent::moved(1, 420.0), GestureState::Sliding),
        Signal::Ignore
    );
    assert_eq!(
        gate.classify(&TouchEvent::pointer_up(1, 420.0), GestureState::Sliding),
        Signal::MultiUp
    );
}

#[test]
fn only_primary_release_resolves() {
    let mut gate = gate();
    gate.classify(&TouchEvent::down(5.0), GestureState::Idle);
    assert_eq!(
        gate.classify(&TouchEvent::pointer_up(0, 100.0), GestureState::Sliding),
        Signal::Up
    );
    assert_eq!(
        gate.classify(&TouchEvent::cancel(100.0), GestureState::Sliding),
        Signal::Up
    );
}

#[test]
fn deactivate_drops_current_sequence() {
    let mut gate = gate();
    gate.classify(&TouchEvent::down(5.0), GestureState::Idle);
    gate.deactivate();
    assert_eq!(
        gate.classify(&TouchEvent::moved(0, 200.0), GestureState::ArmedInZone),
        Signal::Ignore
    );
    assert_eq!(
        gate.classify(&TouchEvent::up(200.0), GestureState::ArmedInZone),
        Signal::Ignore
    );
}
