use std::cell::Cell;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::infrastructure::events::{
    EventOptions, WindowEventListenerHandle, window_event_listener_with_options,
};

/// Vertical space kept free for the navigation controls.
pub const FOOTER_RESERVE_PX: f64 = 150.0;
/// Below this the computed height is considered degenerate.
pub const MIN_CONTAINER_HEIGHT_PX: f64 = 200.0;
/// Fallback: fraction of the viewport granted to the chart instead.
pub const VIEWPORT_FALLBACK_RATIO: f64 = 0.4;

/// Settle delays before measuring, so the rendering engine finishes layout
/// first. Debounce, not a lock.
pub const NAVIGATION_SETTLE_MS: u32 = 100;
pub const CHART_SETTLE_MS: u32 = 200;

/// Sizing rule for one chart container, kept pure for tests.
pub fn container_height(slide_height: f64, container_top: f64, viewport_height: f64) -> f64 {
    let available = slide_height - container_top - FOOTER_RESERVE_PX;
    if available < MIN_CONTAINER_HEIGHT_PX {
        viewport_height * VIEWPORT_FALLBACK_RATIO
    } else {
        available
    }
}

/// Cosmetic pass that resizes every slide's chart container to fit the
/// viewport without scrolling. Missing containers are skipped silently.
pub struct LayoutAdjuster;

impl LayoutAdjuster {
    pub fn new() -> Self {
        Self
    }

    pub fn adjust_all(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };
        let viewport_height =
            window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or_default();

        let Ok(slides) = document.query_selector_all(".slide") else {
            return;
        };
        for i in 0..slides.length() {
            let Some(slide) = slides.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
                continue;
            };
            let Ok(Some(container)) = slide.query_selector(".chart-container") else {
                continue;
            };
            let Ok(container) = container.dyn_into::<HtmlElement>() else {
                continue;
            };
            let height = container_height(
                slide.client_height() as f64,
                container.offset_top() as f64,
                viewport_height,
            );
            let _ = container.style().set_property("height", &format!("{height}px"));
        }
    }
}

impl Default for LayoutAdjuster {
    fn default() -> Self {
        Self::new()
    }
}

thread_local! {
    static LAYOUT_GENERATION: Cell<u64> = const { Cell::new(0) };
}

/// Defer a layout pass by `delay_ms`. A newer request supersedes any pending
/// one, so bursts of navigation collapse into a single measurement.
pub fn schedule_layout_pass(delay_ms: u32) {
    let generation = LAYOUT_GENERATION.with(|g| {
        let next = g.get().wrapping_add(1);
        g.set(next);
        next
    });
    wasm_bindgen_futures::spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        if LAYOUT_GENERATION.with(|g| g.get()) != generation {
            return;
        }
        LayoutAdjuster::new().adjust_all();
    });
}

/// Viewport resizes reuse the longer settle window.
pub fn install_resize_listener() -> WindowEventListenerHandle {
    window_event_listener_with_options::<web_sys::Event, _>(
        "resize",
        &EventOptions::default(),
        move |_| schedule_layout_pass(CHART_SETTLE_MS),
    )
}
