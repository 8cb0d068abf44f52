use slide_deck_wasm::application::PresentationCoordinator;
use slide_deck_wasm::domain::navigation::{NavigationAction, NavigationState};
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn five_slide_walkthrough_clamps_at_both_edges() {
    let mut nav = NavigationState::new(5);
    for _ in 0..4 {
        nav.apply(NavigationAction::Next);
    }
    assert_eq!(nav.current_slide(), 5);

    // Clamped: one more Next stays put.
    assert!(nav.apply(NavigationAction::Next).is_none());
    assert_eq!(nav.current_slide(), 5);

    nav.apply(NavigationAction::Previous);
    assert_eq!(nav.current_slide(), 4);
}

#[wasm_bindgen_test]
fn jump_validation_reports_success() {
    let mut nav = NavigationState::new(5);
    assert!(nav.apply(NavigationAction::GoTo(0)).is_none());
    assert!(nav.apply(NavigationAction::GoTo(6)).is_none());
    assert_eq!(nav.current_slide(), 1);

    let transition = nav.apply(NavigationAction::GoTo(4)).unwrap();
    assert_eq!((transition.from, transition.to), (1, 4));
    assert_eq!(nav.current_slide(), 4);
}

#[wasm_bindgen_test]
fn exactly_one_slide_active_after_any_transition() {
    let mut coordinator = PresentationCoordinator::new(5);
    let script = [
        NavigationAction::Next,
        NavigationAction::Next,
        NavigationAction::GoTo(5),
        NavigationAction::Next,
        NavigationAction::Previous,
        NavigationAction::GoTo(1),
        NavigationAction::Previous,
    ];
    for action in script {
        coordinator.dispatch(action);
        assert_eq!(coordinator.deck().active_count(), 1);
        assert_eq!(coordinator.deck().active_index(), coordinator.navigation().current_slide());
    }
}

#[wasm_bindgen_test]
fn long_hammering_never_leaves_range() {
    let mut coordinator = PresentationCoordinator::new(3);
    for i in 0..200 {
        let action =
            if i % 7 < 4 { NavigationAction::Next } else { NavigationAction::Previous };
        coordinator.dispatch(action);
        let current = coordinator.navigation().current_slide();
        assert!((1..=3).contains(&current));
    }
}
