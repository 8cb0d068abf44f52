use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::application::coordinator::{initialize_global_presentation, navigate, with_presentation};
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::navigation::NavigationAction;
use crate::infrastructure::charting::ChartEngine;
use crate::infrastructure::dom::SlideDomService;
use crate::infrastructure::events::WindowEventListenerHandle;
use crate::infrastructure::observer::SlideVisibilityObserver;
use crate::infrastructure::{input, layout};
use crate::{log_debug, log_warn};

/// Listeners and the observer must outlive this function; they are parked
/// here for the page's lifetime.
struct PageWiring {
    _observer: Option<SlideVisibilityObserver>,
    _window_listeners: Vec<WindowEventListenerHandle>,
    _button_listeners: Vec<gloo::events::EventListener>,
}

thread_local! {
    static WIRING: RefCell<Option<PageWiring>> = const { RefCell::new(None) };
}

/// Wire the presentation to the host document. The host calls this once its
/// DOM is ready; calling it on a page without slides is a logged no-op.
#[wasm_bindgen(js_name = startPresentation)]
pub fn start_presentation() {
    let dom = SlideDomService::new();
    let total = dom.slide_count();
    if total == 0 {
        log_warn!(
            LogComponent::Presentation("Bootstrap"),
            "no .slide elements found, presentation not started"
        );
        return;
    }

    initialize_global_presentation(total);
    dom.show_slide(1);
    dom.update_counter(1, total);

    ChartEngine::new().register_datalabels_plugin();

    let mut window_listeners = vec![input::keyboard::install(), layout::install_resize_listener()];
    window_listeners.extend(input::touch::install());
    window_listeners.extend(input::gamepad::install());

    let button_listeners = install_nav_buttons();

    let observer = match SlideVisibilityObserver::install() {
        Ok(observer) => Some(observer),
        Err(e) => {
            log_warn!(
                LogComponent::Presentation("Bootstrap"),
                "visibility observer unavailable: {e}"
            );
            None
        }
    };

    WIRING.with(|wiring| {
        *wiring.borrow_mut() = Some(PageWiring {
            _observer: observer,
            _window_listeners: window_listeners,
            _button_listeners: button_listeners,
        });
    });

    layout::schedule_layout_pass(layout::NAVIGATION_SETTLE_MS);
    get_logger().info(
        LogComponent::Presentation("Bootstrap"),
        &format!("🎬 Presentation started with {total} slides"),
    );
}

fn install_nav_buttons() -> Vec<gloo::events::EventListener> {
    let mut listeners = Vec::new();
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return listeners;
    };
    let bindings =
        [("prevSlide", NavigationAction::Previous), ("nextSlide", NavigationAction::Next)];
    for (id, action) in bindings {
        match document.get_element_by_id(id) {
            Some(button) => {
                listeners.push(gloo::events::EventListener::new(&button, "click", move |_| {
                    navigate(action);
                }));
            }
            None => {
                log_debug!(
                    LogComponent::Presentation("Bootstrap"),
                    "button '{}' not found (optional)",
                    id
                );
            }
        }
    }
    listeners
}

/// External control surface for host pages driving navigation
/// programmatically.
#[wasm_bindgen]
pub struct SlidePresentationApi;

#[wasm_bindgen]
impl SlidePresentationApi {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self
    }

    #[wasm_bindgen(js_name = nextSlide)]
    pub fn next_slide(&self) {
        navigate(NavigationAction::Next);
    }

    #[wasm_bindgen(js_name = previousSlide)]
    pub fn previous_slide(&self) {
        navigate(NavigationAction::Previous);
    }

    /// Jump to a 1-based slide. Out-of-range requests return `false` and
    /// leave the presentation untouched.
    #[wasm_bindgen(js_name = goToSlide)]
    pub fn go_to_slide(&self, slide: usize) -> bool {
        let in_range = with_presentation(|p| (1..=p.navigation().total_slides()).contains(&slide))
            .unwrap_or(false);
        if !in_range {
            return false;
        }
        navigate(NavigationAction::GoTo(slide));
        true
    }

    #[wasm_bindgen(js_name = getCurrentSlide)]
    pub fn current_slide(&self) -> usize {
        with_presentation(|p| p.navigation().current_slide()).unwrap_or(0)
    }

    #[wasm_bindgen(js_name = getTotalSlides)]
    pub fn total_slides(&self) -> usize {
        with_presentation(|p| p.navigation().total_slides()).unwrap_or(0)
    }
}

impl Default for SlidePresentationApi {
    fn default() -> Self {
        Self::new()
    }
}
