use super::*;
use crate::layout::{LayoutParams, Length};
use crate::view::View;

fn setup() -> (Container, Container, ViewRelocator) {
    let host = Container::new("host");
    host.add_child(
        View::new("host-content"),
        0,
        LayoutParams::new(Length::Px(900.0), Length::Px(1600.0)),
    );
    let overlay = Container::new("overlay");
    overlay.add_child(View::new("overlay-content"), 0, LayoutParams::MATCH_PARENT);
    let relocator = ViewRelocator::new(host.clone(), overlay.clone());
    (host, overlay, relocator)
}

#[test]
fn borrow_moves_host_content_to_back_of_overlay() {
    let (host, overlay, mut relocator) = setup();
    let content = host.child_at(0).unwrap();

    assert!(relocator.borrow_host_content());
    assert_eq!(host.child_count(), 0);
    assert_eq!(overlay.child_count(), 2);
    assert!(overlay.child_at(0).unwrap().ptr_eq(&content));
    assert_eq!(content.layout_params(), LayoutParams::MATCH_PARENT);
}

#[test]
fn borrow_then_restore_round_trips_layout_params() {
    let (host, overlay, mut relocator) = setup();
    let content = host.child_at(0).unwrap();
    let original = content.layout_params();

    assert!(relocator.borrow_host_content());
    relocator.restore_host_content();

    assert_eq!(host.child_count(), 1);
    assert!(host.child_at(0).unwrap().ptr_eq(&content));
    assert_eq!(content.layout_params(), original);
    assert_eq!(overlay.child_count(), 1);
    assert!(!relocator.is_borrow_active());
}

#[test]
fn borrow_fails_when_overlay_has_no_content() {
    let host = Container::new("host");
    host.add_child(View::new("host-content"), 0, LayoutParams::MATCH_PARENT);
    let overlay = Container::new("overlay");
    let mut relocator = ViewRelocator::new(host.clone(), overlay);

    assert!(!relocator.borrow_host_content());
    assert_eq!(host.child_count(), 1);
}

#[test]
fn borrow_fails_when_host_has_no_content() {
    let host = Container::new("host");
    let overlay = Container::new("overlay");
    overlay.add_child(View::new("overlay-content"), 0, LayoutParams::MATCH_PARENT);
    let mut relocator = ViewRelocator::new(host, overlay);

    assert!(!relocator.borrow_host_content());
    assert!(!relocator.is_borrow_active());
}

#[test]
fn second_borrow_is_refused_while_active() {
    let (host, _overlay, mut relocator) = setup();
    assert!(relocator.borrow_host_content());
    relocator.attach_shadow();
    // overlay now holds shadow + borrowed content + own content
    assert!(!relocator.borrow_host_content());
    assert_eq!(host.child_count(), 0);
}

#[test]
fn restore_without_borrow_is_a_no_op() {
    let (host, overlay, mut relocator) = setup();
    relocator.restore_host_content();
    assert_eq!(host.child_count(), 1);
    assert_eq!(overlay.child_count(), 1);
}

#[test]
fn shadow_is_recreated_rather_than_reused() {
    let (_host, overlay, mut relocator) = setup();
    relocator.borrow_host_content();
    relocator.attach_shadow();
    let first = relocator.shadow_view().unwrap();
    assert_eq!(first.translation_x(), -SHADOW_WIDTH);

    relocator.attach_shadow();
    let second = relocator.shadow_view().unwrap();
    assert!(!first.ptr_eq(&second));
    assert!(!first.is_parented());
    assert_eq!(overlay.child_count(), 3);
}

#[test]
fn detach_shadow_is_safe_without_shadow() {
    let (_host, overlay, mut relocator) = setup();
    relocator.detach_shadow();
    relocator.detach_shadow();
    assert_eq!(overlay.child_count(), 1);
}

#[test]
fn layers_snapshot_tracks_borrow_and_shadow() {
    let (host, overlay, mut relocator) = setup();
    let content = host.child_at(0).unwrap();
    let own_content = overlay.child_at(0).unwrap();

    let layers = relocator.layers().unwrap();
    assert!(layers.host_preview.is_none());
    assert!(layers.shadow.is_none());
    assert!(layers.overlay_content.ptr_eq(&own_content));

    relocator.borrow_host_content();
    relocator.attach_shadow();
    let layers = relocator.layers().unwrap();
    assert!(layers.host_preview.unwrap().ptr_eq(&content));
    assert!(layers.shadow.is_some());
    assert!(layers.overlay_content.ptr_eq(&own_content));
}

#[test]
fn layers_snapshot_is_none_without_overlay_content() {
    let host = Container::new("host");
    let overlay = Container::new("overlay");
    let relocator = ViewRelocator::new(host, overlay);
    assert!(relocator.layers().is_none());
}

#[test]
fn front_view_skips_borrowed_and_shadow_layers() {
    let (_host, overlay, mut relocator) = setup();
    let own_content = overlay.child_at(0).unwrap();

    assert!(relocator.front_view().unwrap().ptr_eq(&own_content));
    relocator.borrow_host_content();
    assert!(relocator.front_view().unwrap().ptr_eq(&own_content));
    relocator.attach_shadow();
    assert!(relocator.front_view().unwrap().ptr_eq(&own_content));

    relocator.detach_shadow();
    relocator.restore_host_content();
    assert!(relocator.front_view().unwrap().ptr_eq(&own_content));
}
