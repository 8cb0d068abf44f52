use crate::application::coordinator::{navigate, with_presentation_mut};
use crate::infrastructure::events::{
    EventOptions, WindowEventListenerHandle, window_event_listener_with_options,
};

/// Swipe recognition across the whole page. Listeners stay passive: the
/// gesture decision happens at touch-end, so scrolling is never blocked.
pub fn install() -> Vec<WindowEventListenerHandle> {
    let touch_start = window_event_listener_with_options::<web_sys::TouchEvent, _>(
        "touchstart",
        &EventOptions::default(),
        move |event| {
            if let Some(touch) = event.changed_touches().get(0) {
                with_presentation_mut(|p| {
                    p.touch_started(touch.client_x() as f64, touch.client_y() as f64)
                });
            }
        },
    );

    let touch_end = window_event_listener_with_options::<web_sys::TouchEvent, _>(
        "touchend",
        &EventOptions::default(),
        move |event| {
            let Some(touch) = event.changed_touches().get(0) else {
                return;
            };
            let finished = with_presentation_mut(|p| {
                p.touch_finished(touch.client_x() as f64, touch.client_y() as f64)
            });
            if let Some(action) = finished.flatten() {
                navigate(action);
            }
        },
    );

    vec![touch_start, touch_end]
}
