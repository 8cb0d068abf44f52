use slide_deck_wasm::application::PresentationCoordinator;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn five_reentries_build_exactly_one_chart() {
    let mut coordinator = PresentationCoordinator::new(5);
    let mut builds = 0;
    for _ in 0..5 {
        if coordinator.note_slide_visible(3).is_some() {
            builds += 1;
        }
    }
    assert_eq!(builds, 1);
}

#[wasm_bindgen_test]
fn each_chart_bearing_slide_builds_independently() {
    let mut coordinator = PresentationCoordinator::new(5);
    let built: Vec<&'static str> = (1..=5)
        .filter_map(|index| coordinator.note_slide_visible(index))
        .map(|chart| chart.container_id)
        .collect();
    assert_eq!(
        built,
        vec!["cashGrowthChart", "revenueGrowthChart", "cashFlowChart", "performanceSummaryChart"]
    );

    // A full second sweep over the deck builds nothing.
    let rebuilt = (1..=5).filter_map(|index| coordinator.note_slide_visible(index)).count();
    assert_eq!(rebuilt, 0);
}

#[wasm_bindgen_test]
fn title_slide_has_no_chart() {
    let mut coordinator = PresentationCoordinator::new(5);
    assert!(coordinator.note_slide_visible(1).is_none());
    assert!(coordinator.note_slide_visible(1).is_none());
}

#[wasm_bindgen_test]
fn out_of_deck_ordinal_is_ignored() {
    let mut coordinator = PresentationCoordinator::new(5);
    assert!(coordinator.note_slide_visible(0).is_none());
    assert!(coordinator.note_slide_visible(42).is_none());
}
