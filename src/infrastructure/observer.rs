use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::application::coordinator::slide_became_visible;
use crate::domain::errors::{DomResult, PresentationError};

/// Fraction of a slide's area that must be on screen to count as presented.
pub const VISIBILITY_THRESHOLD: f64 = 0.3;

/// Watches every slide element and reports first-time visibility into the
/// application layer, which owns the build-at-most-once rule. No polling:
/// the browser calls back only on threshold crossings.
pub struct SlideVisibilityObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array)>,
}

impl SlideVisibilityObserver {
    pub fn install() -> DomResult<Self> {
        let callback = Closure::wrap(Box::new(move |entries: Array| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                if let Some(index) = slide_ordinal(&entry.target()) {
                    slide_became_visible(index);
                }
            }
        }) as Box<dyn FnMut(Array)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|_| {
                    PresentationError::DomError("IntersectionObserver unavailable".to_string())
                })?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| PresentationError::DomError("document not available".to_string()))?;
        if let Ok(slides) = document.query_selector_all(".slide") {
            for i in 0..slides.length() {
                if let Some(el) = slides.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                    observer.observe(&el);
                }
            }
        }

        Ok(Self { observer, _callback: callback })
    }

    pub fn disconnect(self) {
        self.observer.disconnect();
    }
}

fn slide_ordinal(target: &Element) -> Option<usize> {
    target.get_attribute("data-slide")?.parse().ok()
}
