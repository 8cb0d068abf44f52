use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::domain::logging::LogComponent;
use crate::log_debug;

/// DOM contract of the host page: slides carry a 1-based `data-slide`
/// ordinal and an `active` presentation class; the counter is a fixed id.
const SLIDE_SELECTOR: &str = ".slide";
const ACTIVE_CLASS: &str = "active";
const COUNTER_ID: &str = "slideCounter";

/// Presentation-state updates on the host page. Every method tolerates a
/// missing element by skipping the associated behavior.
pub struct SlideDomService;

impl SlideDomService {
    pub fn new() -> Self {
        Self
    }

    /// Number of slide elements in the document, 0 when there is no DOM.
    pub fn slide_count(&self) -> usize {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.query_selector_all(SLIDE_SELECTOR).ok())
            .map(|slides| slides.length() as usize)
            .unwrap_or(0)
    }

    /// Deactivate every slide element, then mark the target active.
    pub fn show_slide(&self, index: usize) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        if let Ok(slides) = document.query_selector_all(SLIDE_SELECTOR) {
            for i in 0..slides.length() {
                if let Some(el) = slides.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                    let _ = el.class_list().remove_1(ACTIVE_CLASS);
                }
            }
        }

        match document.query_selector(&format!("{SLIDE_SELECTOR}[data-slide=\"{index}\"]")) {
            Ok(Some(el)) => {
                let _ = el.class_list().add_1(ACTIVE_CLASS);
            }
            _ => {
                log_debug!(
                    LogComponent::Infrastructure("DOM"),
                    "slide element {} not found",
                    index
                );
            }
        }
    }

    /// Refresh the "current / total" counter display.
    pub fn update_counter(&self, current: usize, total: usize) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        match document.get_element_by_id(COUNTER_ID) {
            Some(counter) => counter.set_text_content(Some(&format!("{current} / {total}"))),
            None => {
                log_debug!(
                    LogComponent::Infrastructure("DOM"),
                    "counter element '{}' not found (optional)",
                    COUNTER_ID
                );
            }
        }
    }
}

impl Default for SlideDomService {
    fn default() -> Self {
        Self::new()
    }
}
