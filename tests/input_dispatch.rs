use slide_deck_wasm::application::PresentationCoordinator;
use slide_deck_wasm::domain::input::{GamepadSnapshot, action_for_key};
use slide_deck_wasm::domain::navigation::NavigationAction;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn digit_keys_gate_on_deck_size() {
    assert_eq!(action_for_key("4", 0, 5), Some(NavigationAction::GoTo(4)));
    assert_eq!(action_for_key("9", 0, 5), None);
}

#[wasm_bindgen_test]
fn legacy_keycode_source_still_navigates() {
    // Sources that only report numeric keycodes resolve via the fallback.
    assert_eq!(action_for_key("Unidentified", 34, 5), Some(NavigationAction::Next));
    assert_eq!(action_for_key("Unidentified", 38, 5), Some(NavigationAction::Previous));
}

#[wasm_bindgen_test]
fn held_gamepad_button_advances_once() {
    let mut coordinator = PresentationCoordinator::new(5);
    let held = GamepadSnapshot { advance_held: true, retreat_held: false };

    let mut moved = 0;
    for _ in 0..10 {
        if let Some(action) = coordinator.sample_gamepad(held) {
            coordinator.dispatch(action);
            moved += 1;
        }
    }
    assert_eq!(moved, 1);
    assert_eq!(coordinator.navigation().current_slide(), 2);
}

#[wasm_bindgen_test]
fn stick_flick_then_center_rearms() {
    let mut coordinator = PresentationCoordinator::new(5);
    let right = GamepadSnapshot::from_raw(&[], 0.9);
    let center = GamepadSnapshot::from_raw(&[], 0.0);

    assert!(coordinator.sample_gamepad(right).is_some());
    assert!(coordinator.sample_gamepad(center).is_none());
    assert!(coordinator.sample_gamepad(right).is_some());
}

#[wasm_bindgen_test]
fn swipes_route_through_navigation_clamp() {
    let mut coordinator = PresentationCoordinator::new(2);

    // Leftward swipe advances.
    coordinator.touch_started(300.0, 200.0);
    let action = coordinator.touch_finished(220.0, 205.0).unwrap();
    coordinator.dispatch(action);
    assert_eq!(coordinator.navigation().current_slide(), 2);

    // At the last slide a further advance clamps.
    coordinator.touch_started(300.0, 200.0);
    let action = coordinator.touch_finished(200.0, 200.0).unwrap();
    assert!(coordinator.dispatch(action).is_none());
    assert_eq!(coordinator.navigation().current_slide(), 2);
}

#[wasm_bindgen_test]
fn sub_threshold_swipe_is_ignored() {
    let mut coordinator = PresentationCoordinator::new(5);
    coordinator.touch_started(300.0, 200.0);
    assert!(coordinator.touch_finished(270.0, 205.0).is_none());
}
