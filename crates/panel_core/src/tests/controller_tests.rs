use super::*;

const VIEWPORT: Viewport = Viewport::new(1024.0, 768.0);

fn collapsed_controller() -> (FloatingPanelController, Rc<PointerCaptureRegistry>) {
    let registry = PointerCaptureRegistry::new();
    let controller = FloatingPanelController::new(Rc::clone(&registry), VIEWPORT);
    (controller, registry)
}

fn open_controller() -> (FloatingPanelController, Rc<PointerCaptureRegistry>) {
    let (mut controller, registry) = collapsed_controller();
    controller.open(VIEWPORT);
    (controller, registry)
}

#[test]
fn starts_collapsed_at_launcher_anchor() {
    let (controller, _registry) = collapsed_controller();
    assert_eq!(controller.mode(), PanelMode::Collapsed);
    assert_eq!(controller.position(), Point::new(944.0, 688.0));
    assert_eq!(controller.size(), DEFAULT_PANEL_SIZE);
    assert_eq!(controller.interaction(), InteractionKind::Idle);
}

#[test]
fn launcher_click_opens_at_bottom_right_panel_anchor() {
    let (mut controller, _registry) = collapsed_controller();
    controller.pointer_down(GrabRegion::Launcher, Point::new(950.0, 700.0));
    let clicked = controller.pointer_up(VIEWPORT);

    assert!(clicked);
    assert_eq!(controller.mode(), PanelMode::Open);
    assert_eq!(controller.size(), Size::new(384.0, 520.0));
    assert_eq!(controller.position(), Point::new(616.0, 224.0));
}

#[test]
fn duplicate_pointer_samples_do_not_turn_a_click_into_a_drag() {
    let (mut controller, _registry) = collapsed_controller();
    let press = Point::new(950.0, 700.0);
    controller.pointer_down(GrabRegion::Launcher, press);
    controller.pointer_move(press, VIEWPORT);
    controller.pointer_move(press, VIEWPORT);

    assert!(!controller.has_moved_since_down());
    assert!(controller.pointer_up(VIEWPORT));
    assert_eq!(controller.mode(), PanelMode::Open);
}

#[test]
fn launcher_drag_repositions_without_toggling() {
    let (mut controller, _registry) = collapsed_controller();
    controller.pointer_down(GrabRegion::Launcher, Point::new(950.0, 700.0));
    controller.pointer_move(Point::new(500.0, 400.0), VIEWPORT);
    let clicked = controller.pointer_up(VIEWPORT);

    assert!(!clicked);
    assert_eq!(controller.mode(), PanelMode::Collapsed);
    // Anchor was (6, 12) inside the launcher, so the corner lands there.
    assert_eq!(controller.position(), Point::new(494.0, 388.0));
}

#[test]
fn movement_and_return_to_origin_still_suppresses_the_click() {
    let (mut controller, _registry) = collapsed_controller();
    let press = Point::new(950.0, 700.0);
    controller.pointer_down(GrabRegion::Launcher, press);
    controller.pointer_move(Point::new(951.0, 700.0), VIEWPORT);
    controller.pointer_move(press, VIEWPORT);

    assert!(!controller.pointer_up(VIEWPORT));
    assert_eq!(controller.mode(), PanelMode::Collapsed);
    assert_eq!(controller.position(), Point::new(944.0, 688.0));
}

#[test]
fn collapsed_drag_clamps_with_launcher_extent() {
    let (mut controller, _registry) = collapsed_controller();
    controller.pointer_down(GrabRegion::Launcher, Point::new(944.0, 688.0));
    controller.pointer_move(Point::new(100_000.0, 100_000.0), VIEWPORT);
    assert_eq!(controller.position(), Point::new(968.0, 712.0));

    controller.pointer_move(Point::new(-100_000.0, -100_000.0), VIEWPORT);
    assert_eq!(controller.position(), Point::new(0.0, 0.0));
}

#[test]
fn header_drag_clamps_with_panel_extent() {
    let (mut controller, _registry) = open_controller();
    controller.pointer_down(GrabRegion::Header, Point::new(700.0, 250.0));
    controller.pointer_move(Point::new(100_000.0, 100_000.0), VIEWPORT);
    assert_eq!(controller.position(), Point::new(640.0, 248.0));

    controller.pointer_move(Point::new(-5_000.0, -5_000.0), VIEWPORT);
    assert_eq!(controller.position(), Point::new(0.0, 0.0));
    assert!(!controller.pointer_up(VIEWPORT));
    assert_eq!(controller.mode(), PanelMode::Open);
}

#[test]
fn resize_from_corner_grows_without_moving_top_left() {
    let (mut controller, _registry) = open_controller();
    assert_eq!(controller.position(), Point::new(616.0, 224.0));

    controller.pointer_down(GrabRegion::ResizeHandle, Point::new(1000.0, 744.0));
    controller.pointer_move(Point::new(1100.0, 800.0), VIEWPORT);
    controller.pointer_up(VIEWPORT);

    assert_eq!(controller.size(), Size::new(484.0, 576.0));
    assert_eq!(controller.position(), Point::new(616.0, 224.0));
    assert_eq!(controller.mode(), PanelMode::Open);
}

#[test]
fn resize_floors_at_minimum_size() {
    let (mut controller, _registry) = open_controller();
    controller.pointer_down(GrabRegion::ResizeHandle, Point::new(1000.0, 744.0));
    controller.pointer_move(Point::new(-2_000.0, -2_000.0), VIEWPORT);

    assert_eq!(
        controller.size(),
        Size::new(MIN_PANEL_WIDTH, MIN_PANEL_HEIGHT)
    );
}

#[test]
fn resize_may_grow_past_the_viewport_edge() {
    let (mut controller, _registry) = open_controller();
    controller.pointer_down(GrabRegion::ResizeHandle, Point::new(1000.0, 744.0));
    controller.pointer_move(Point::new(2_000.0, 1_500.0), VIEWPORT);

    assert_eq!(controller.size(), Size::new(1384.0, 1276.0));
}

#[test]
fn second_pointer_down_is_ignored_while_active() {
    let (mut controller, registry) = open_controller();
    controller.pointer_down(GrabRegion::ResizeHandle, Point::new(1000.0, 744.0));
    controller.pointer_down(GrabRegion::Header, Point::new(700.0, 250.0));

    assert_eq!(controller.interaction(), InteractionKind::Resizing);
    assert_eq!(registry.active_count(), 1);
}

#[test]
fn capture_is_held_exactly_while_interacting() {
    let (mut controller, registry) = collapsed_controller();
    assert_eq!(registry.active_count(), 0);

    for _ in 0..3 {
        controller.pointer_down(GrabRegion::Launcher, Point::new(950.0, 700.0));
        assert_eq!(registry.active_count(), 1);
        controller.pointer_move(Point::new(940.0, 690.0), VIEWPORT);
        assert_eq!(registry.active_count(), 1);
        controller.pointer_up(VIEWPORT);
        assert_eq!(registry.active_count(), 0);
    }
}

#[test]
fn fullscreen_entry_cancels_drag_and_releases_capture() {
    let (mut controller, registry) = open_controller();
    controller.pointer_down(GrabRegion::Header, Point::new(700.0, 250.0));
    controller.pointer_move(Point::new(720.0, 270.0), VIEWPORT);
    let dragged_to = controller.position();

    controller.toggle_fullscreen();
    assert_eq!(controller.mode(), PanelMode::Fullscreen);
    assert_eq!(controller.interaction(), InteractionKind::Idle);
    assert_eq!(registry.active_count(), 0);

    // A stale move after cancellation must not touch the stored frame.
    controller.pointer_move(Point::new(10.0, 10.0), VIEWPORT);
    controller.toggle_fullscreen();
    assert_eq!(controller.position(), dragged_to);
}

#[test]
fn fullscreen_round_trip_restores_position_and_size() {
    let (mut controller, _registry) = open_controller();
    controller.pointer_down(GrabRegion::ResizeHandle, Point::new(1000.0, 744.0));
    controller.pointer_move(Point::new(1050.0, 780.0), VIEWPORT);
    controller.pointer_up(VIEWPORT);
    let size_before = controller.size();
    let position_before = controller.position();

    controller.toggle_fullscreen();
    assert_eq!(
        controller.placement(VIEWPORT),
        (Point::new(0.0, 0.0), Size::new(1024.0, 768.0))
    );

    controller.toggle_fullscreen();
    assert_eq!(controller.mode(), PanelMode::Open);
    assert_eq!(controller.size(), size_before);
    assert_eq!(controller.position(), position_before);
}

#[test]
fn close_from_open_rests_launcher_at_anchor() {
    let (mut controller, _registry) = open_controller();
    controller.close(VIEWPORT);
    assert_eq!(controller.mode(), PanelMode::Collapsed);
    assert_eq!(controller.position(), Point::new(944.0, 688.0));
}

#[test]
fn close_from_fullscreen_collapses_directly() {
    let (mut controller, _registry) = open_controller();
    controller.toggle_fullscreen();
    controller.close(VIEWPORT);
    assert_eq!(controller.mode(), PanelMode::Collapsed);
    assert_eq!(controller.position(), Point::new(944.0, 688.0));
}

#[test]
fn transitions_are_ignored_mid_interaction() {
    let (mut controller, _registry) = open_controller();
    controller.pointer_down(GrabRegion::Header, Point::new(700.0, 250.0));
    controller.close(VIEWPORT);
    assert_eq!(controller.mode(), PanelMode::Open);

    // The drag is still live after the refused transition.
    controller.pointer_move(Point::new(650.0, 220.0), VIEWPORT);
    assert_eq!(controller.position(), Point::new(566.0, 194.0));
    controller.pointer_up(VIEWPORT);
}

#[test]
fn reopening_keeps_last_known_size() {
    let (mut controller, _registry) = open_controller();
    controller.pointer_down(GrabRegion::ResizeHandle, Point::new(1000.0, 744.0));
    controller.pointer_move(Point::new(1100.0, 800.0), VIEWPORT);
    controller.pointer_up(VIEWPORT);
    controller.close(VIEWPORT);

    controller.open(VIEWPORT);
    assert_eq!(controller.size(), Size::new(484.0, 576.0));
    assert_eq!(controller.position(), Point::new(516.0, 168.0));
}

#[test]
fn regions_are_inert_in_the_wrong_mode() {
    let (mut controller, registry) = collapsed_controller();
    controller.pointer_down(GrabRegion::Header, Point::new(950.0, 700.0));
    controller.pointer_down(GrabRegion::ResizeHandle, Point::new(950.0, 700.0));
    assert_eq!(controller.interaction(), InteractionKind::Idle);

    controller.open(VIEWPORT);
    controller.pointer_down(GrabRegion::Launcher, Point::new(700.0, 250.0));
    assert_eq!(controller.interaction(), InteractionKind::Idle);

    controller.toggle_fullscreen();
    controller.pointer_down(GrabRegion::Header, Point::new(700.0, 250.0));
    controller.pointer_down(GrabRegion::ResizeHandle, Point::new(700.0, 250.0));
    controller.pointer_down(GrabRegion::Launcher, Point::new(700.0, 250.0));
    assert_eq!(controller.interaction(), InteractionKind::Idle);
    assert_eq!(registry.active_count(), 0);
}

#[test]
fn pointer_up_without_interaction_is_a_noop() {
    let (mut controller, _registry) = collapsed_controller();
    assert!(!controller.pointer_up(VIEWPORT));
    assert_eq!(controller.mode(), PanelMode::Collapsed);
    assert_eq!(controller.position(), Point::new(944.0, 688.0));
}

#[test]
fn toggle_fullscreen_from_collapsed_is_a_noop() {
    let (mut controller, _registry) = collapsed_controller();
    controller.toggle_fullscreen();
    assert_eq!(controller.mode(), PanelMode::Collapsed);
}

#[test]
fn dropping_controller_mid_drag_releases_capture() {
    let registry = PointerCaptureRegistry::new();
    {
        let mut controller = FloatingPanelController::new(Rc::clone(&registry), VIEWPORT);
        controller.pointer_down(GrabRegion::Launcher, Point::new(950.0, 700.0));
        assert_eq!(registry.active_count(), 1);
    }
    assert_eq!(registry.active_count(), 0);
}
