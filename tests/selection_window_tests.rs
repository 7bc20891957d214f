use spectrum_chart::interaction::{
    CenteredWindow, SelectionPhase, SelectionWindow, WindowInteraction, domain_delta_per_pixel,
};

#[test]
fn new_window_spans_the_global_domain() {
    let window = SelectionWindow::new(470_000.0, 698_000.0, 10_000.0).expect("valid window");
    assert_eq!(window.range(), (470_000.0, 698_000.0));
    assert_eq!(window.gap(), 10_000.0);
}

#[test]
fn gap_violation_is_rejected_without_mutation() {
    let mut window = SelectionWindow::new(470_000.0, 698_000.0, 10_000.0).expect("valid window");

    // 605000 - 600000 < gap: rejected, prior state preserved.
    assert!(!window.set_bounds(600_000.0, 605_000.0));
    assert_eq!(window.range(), (470_000.0, 698_000.0));
}

#[test]
fn single_bound_updates_respect_the_gap() {
    let mut window = SelectionWindow::new(470_000.0, 698_000.0, 10_000.0).expect("valid window");
    assert!(window.set_bounds(600_000.0, 620_000.0));

    assert!(!window.set_min_val(615_000.0));
    assert_eq!(window.min_val(), 600_000.0);

    assert!(!window.set_max_val(605_000.0));
    assert_eq!(window.max_val(), 620_000.0);

    assert!(window.set_min_val(610_000.0));
    assert_eq!(window.range(), (610_000.0, 620_000.0));
}

#[test]
fn bounds_outside_the_global_domain_are_rejected() {
    let mut window = SelectionWindow::new(470_000.0, 698_000.0, 10_000.0).expect("valid window");

    assert!(!window.set_min_val(469_999.0));
    assert!(!window.set_max_val(698_001.0));
    assert!(!window.set_bounds(400_000.0, 500_000.0));
    assert_eq!(window.range(), (470_000.0, 698_000.0));
}

#[test]
fn pan_preserves_width_and_rejects_at_domain_edges() {
    let mut window = SelectionWindow::new(470_000.0, 698_000.0, 10_000.0).expect("valid window");
    assert!(window.set_bounds(480_000.0, 490_000.0));

    assert!(window.pan_by(5_000.0));
    assert_eq!(window.range(), (485_000.0, 495_000.0));

    // Pushing past the lower global bound is a no-op.
    assert!(!window.pan_by(-20_000.0));
    assert_eq!(window.range(), (485_000.0, 495_000.0));
}

#[test]
fn non_finite_updates_are_rejected() {
    let mut window = SelectionWindow::new(470_000.0, 698_000.0, 10_000.0).expect("valid window");
    assert!(!window.set_min_val(f64::NAN));
    assert!(!window.pan_by(f64::INFINITY));
    assert_eq!(window.range(), (470_000.0, 698_000.0));
}

#[test]
fn centered_window_recenters_within_bounds_only() {
    let mut window =
        CenteredWindow::new(470_000.0, 698_000.0, 500_000.0, 5_000.0).expect("valid window");

    assert!(window.recenter(475_000.0));
    assert_eq!(window.range(), (470_000.0, 480_000.0));

    // One more step left would cross the global minimum.
    assert!(!window.recenter(474_000.0));
    assert_eq!(window.center(), 475_000.0);
}

#[test]
fn centered_window_must_fit_the_domain_at_construction() {
    assert!(CenteredWindow::new(470_000.0, 698_000.0, 470_000.0, 5_000.0).is_err());
    assert!(CenteredWindow::new(470_000.0, 698_000.0, 500_000.0, 0.0).is_err());
}

#[test]
fn click_toggles_the_selection() {
    let mut interaction = WindowInteraction::default();
    assert_eq!(interaction.phase(), SelectionPhase::Idle);
    assert!(!interaction.is_selection_visible());

    interaction.on_click();
    assert_eq!(interaction.phase(), SelectionPhase::Selected);
    assert!(interaction.is_selection_visible());

    interaction.on_click();
    assert_eq!(interaction.phase(), SelectionPhase::Idle);
}

#[test]
fn drag_captures_the_window_shape_and_reports_pixel_deltas() {
    let mut interaction = WindowInteraction::default();
    interaction.on_click();
    interaction.on_pointer_down(300.0, (480_000.0, 490_000.0));

    assert_eq!(interaction.phase(), SelectionPhase::Dragging);
    let drag = interaction.drag_state();
    assert!(drag.active);
    assert_eq!(drag.window_center, 485_000.0);
    assert_eq!(drag.window_half_width, 5_000.0);

    let delta = interaction.on_pointer_move(290.0, 120.0);
    assert_eq!(delta, Some(-10.0));
    assert_eq!(interaction.drag_state().last_delta, -10.0);
}

#[test]
fn pointer_down_without_selection_does_not_start_a_drag() {
    let mut interaction = WindowInteraction::default();
    interaction.on_pointer_down(300.0, (480_000.0, 490_000.0));
    assert_eq!(interaction.phase(), SelectionPhase::Idle);
    assert!(!interaction.drag_state().active);
}

#[test]
fn hover_is_suppressed_while_dragging() {
    let mut interaction = WindowInteraction::default();
    interaction.on_pointer_move(100.0, 50.0);
    assert!(interaction.is_hovering());

    interaction.on_click();
    interaction.on_pointer_down(100.0, (480_000.0, 490_000.0));
    assert!(!interaction.is_hovering());

    interaction.on_pointer_up();
    assert_eq!(interaction.phase(), SelectionPhase::Selected);
    assert!(interaction.is_hovering());
    assert!(!interaction.drag_state().active);
}

#[test]
fn pointer_leave_cancels_a_drag_and_hides_hover() {
    let mut interaction = WindowInteraction::default();
    interaction.on_click();
    interaction.on_pointer_down(100.0, (480_000.0, 490_000.0));

    interaction.on_pointer_leave();
    assert_eq!(interaction.phase(), SelectionPhase::Idle);
    assert!(!interaction.is_hovering());
    assert!(!interaction.drag_state().active);
}

#[test]
fn domain_delta_per_pixel_divides_span_by_width() {
    let per_pixel = domain_delta_per_pixel(470_000.0, 698_000.0, 1000.0);
    assert_eq!(per_pixel, 228.0);
    assert_eq!(domain_delta_per_pixel(0.0, 100.0, 0.0), 0.0);
}
