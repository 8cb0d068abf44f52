use crate::application::coordinator::{navigate, with_presentation};
use crate::domain::input::action_for_key;
use crate::infrastructure::events::{
    EventOptions, WindowEventListenerHandle, window_event_listener_with_options,
};

/// Window-level keydown listener. Registered non-passive: every mapped key
/// must suppress the browser's own scrolling before it navigates.
pub fn install() -> WindowEventListenerHandle {
    window_event_listener_with_options::<web_sys::KeyboardEvent, _>(
        "keydown",
        &EventOptions { passive: false, ..Default::default() },
        move |event| {
            let Some(total) = with_presentation(|p| p.navigation().total_slides()) else {
                return;
            };
            if let Some(action) = action_for_key(&event.key(), event.key_code(), total) {
                event.prevent_default();
                navigate(action);
            }
        },
    )
}
