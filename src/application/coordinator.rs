use std::cell::RefCell;

use crate::domain::charts::{self, SlideChart};
use crate::domain::input::{ButtonEdge, GamepadSnapshot, SwipeTracker};
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::navigation::{NavigationAction, NavigationState, SlideTransition};
use crate::domain::slides::SlideDeck;
use crate::infrastructure::{charting::ChartEngine, dom::SlideDomService, layout};
use crate::log_debug;

/// Owns the deck and navigation state plus the per-source input trackers.
///
/// Every mutation funnels through [`dispatch`](Self::dispatch) or
/// [`note_slide_visible`](Self::note_slide_visible); the methods are pure so
/// the whole orchestration is exercisable without a DOM.
pub struct PresentationCoordinator {
    navigation: NavigationState,
    deck: SlideDeck,
    gamepad_edge: ButtonEdge,
    swipe: SwipeTracker,
}

impl PresentationCoordinator {
    pub fn new(total_slides: usize) -> Self {
        get_logger().info(
            LogComponent::Application("Presentation"),
            &format!("Creating presentation coordinator for {total_slides} slides"),
        );
        Self {
            navigation: NavigationState::new(total_slides),
            deck: SlideDeck::new(total_slides),
            gamepad_edge: ButtonEdge::new(),
            swipe: SwipeTracker::new(),
        }
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    pub fn deck(&self) -> &SlideDeck {
        &self.deck
    }

    /// Apply a navigation action and keep the deck's active flag in step.
    pub fn dispatch(&mut self, action: NavigationAction) -> Option<SlideTransition> {
        let transition = self.navigation.apply(action)?;
        self.deck.activate(transition.to);
        Some(transition)
    }

    /// A slide crossed the visibility threshold. Returns the chart to build
    /// when this is the slide's first appearance; `None` for chartless slides
    /// and every re-entry (write-once guarantee).
    pub fn note_slide_visible(&mut self, index: usize) -> Option<&'static SlideChart> {
        let chart = charts::chart_for_slide(index)?;
        if self.deck.mark_chart_created(index) { Some(chart) } else { None }
    }

    /// Feed one gamepad poll frame through the edge detector.
    pub fn sample_gamepad(&mut self, snapshot: GamepadSnapshot) -> Option<NavigationAction> {
        self.gamepad_edge.advance(snapshot)
    }

    pub fn touch_started(&mut self, x: f64, y: f64) {
        self.swipe.begin(x, y);
    }

    pub fn touch_finished(&mut self, x: f64, y: f64) -> Option<NavigationAction> {
        self.swipe.finish(x, y)
    }
}

// Global coordinator instance (thread-local for WASM)
thread_local! {
    static GLOBAL_PRESENTATION: RefCell<Option<PresentationCoordinator>> = RefCell::new(None);
}

pub fn initialize_global_presentation(total_slides: usize) {
    GLOBAL_PRESENTATION.with(|global| {
        *global.borrow_mut() = Some(PresentationCoordinator::new(total_slides));
    });
}

pub fn with_presentation<F, R>(f: F) -> Option<R>
where
    F: FnOnce(&PresentationCoordinator) -> R,
{
    GLOBAL_PRESENTATION.with(|global| global.borrow().as_ref().map(f))
}

pub fn with_presentation_mut<F, R>(f: F) -> Option<R>
where
    F: FnOnce(&mut PresentationCoordinator) -> R,
{
    GLOBAL_PRESENTATION.with(|global| global.borrow_mut().as_mut().map(f))
}

/// Route an action from any input source into the global coordinator, then
/// reflect the result in the page: active class, counter text, and a deferred
/// layout pass once the DOM has settled.
pub fn navigate(action: NavigationAction) -> Option<SlideTransition> {
    let transition = with_presentation_mut(|p| p.dispatch(action)).flatten()?;
    let total = with_presentation(|p| p.navigation().total_slides()).unwrap_or(0);

    let dom = SlideDomService::new();
    dom.show_slide(transition.to);
    dom.update_counter(transition.to, total);
    layout::schedule_layout_pass(layout::NAVIGATION_SETTLE_MS);

    log_debug!(
        LogComponent::Application("Presentation"),
        "slide {} -> {}",
        transition.from,
        transition.to
    );
    Some(transition)
}

/// Visibility-observer entry point: build the slide's chart on first sight,
/// then give the fresh canvas a sizing pass.
pub fn slide_became_visible(index: usize) {
    let Some(chart) = with_presentation_mut(|p| p.note_slide_visible(index)).flatten() else {
        return;
    };
    if let Err(e) = ChartEngine::new().build(chart) {
        get_logger().warn(
            LogComponent::Application("Presentation"),
            &format!("chart for slide {index} skipped: {e}"),
        );
        return;
    }
    layout::schedule_layout_pass(layout::CHART_SETTLE_MS);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_keeps_active_slide_in_sync() {
        let mut coordinator = PresentationCoordinator::new(5);
        coordinator.dispatch(NavigationAction::Next);
        coordinator.dispatch(NavigationAction::Next);
        assert_eq!(coordinator.navigation().current_slide(), 3);
        assert_eq!(coordinator.deck().active_index(), 3);
        assert_eq!(coordinator.deck().active_count(), 1);
    }

    #[test]
    fn repeated_visibility_builds_chart_once() {
        let mut coordinator = PresentationCoordinator::new(5);
        assert!(coordinator.note_slide_visible(2).is_some());
        for _ in 0..4 {
            assert!(coordinator.note_slide_visible(2).is_none());
        }
    }

    #[test]
    fn chartless_slide_never_builds() {
        let mut coordinator = PresentationCoordinator::new(5);
        assert!(coordinator.note_slide_visible(1).is_none());
        // The title slide must not burn slide 1's write-once flag for nothing.
        assert!(!coordinator.deck().get(1).unwrap().chart_created());
    }

    #[test]
    fn gamepad_frames_are_edge_triggered_through_coordinator() {
        let mut coordinator = PresentationCoordinator::new(5);
        let held = GamepadSnapshot { advance_held: true, retreat_held: false };
        let mut fired = 0;
        for _ in 0..10 {
            if coordinator.sample_gamepad(held).is_some() {
                fired += 1;
            }
        }
        assert_eq!(fired, 1);
    }

    #[test]
    fn touch_gesture_round_trip() {
        let mut coordinator = PresentationCoordinator::new(5);
        coordinator.touch_started(300.0, 200.0);
        assert_eq!(coordinator.touch_finished(220.0, 205.0), Some(NavigationAction::Next));
    }
}
