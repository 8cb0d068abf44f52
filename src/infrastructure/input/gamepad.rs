use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Gamepad, GamepadButton, GamepadEvent};

use crate::application::coordinator::{navigate, with_presentation_mut};
use crate::domain::input::GamepadSnapshot;
use crate::domain::logging::{LogComponent, get_logger};
use crate::log_debug;

thread_local! {
    static POLLING: Cell<bool> = const { Cell::new(false) };
}

/// Connect/disconnect wiring. The poll loop has an explicit lifecycle: it
/// starts on the first `gamepadconnected` and stops rescheduling itself the
/// moment no connected pad is left.
pub fn install() -> Vec<crate::infrastructure::events::WindowEventListenerHandle> {
    use crate::infrastructure::events::{EventOptions, window_event_listener_with_options};

    let connected = window_event_listener_with_options::<GamepadEvent, _>(
        "gamepadconnected",
        &EventOptions::default(),
        move |event| {
            if let Some(pad) = event.gamepad() {
                get_logger().info(
                    LogComponent::Infrastructure("Gamepad"),
                    &format!("🎮 Gamepad connected: {}", pad.id()),
                );
            }
            start_polling();
        },
    );

    let disconnected = window_event_listener_with_options::<GamepadEvent, _>(
        "gamepaddisconnected",
        &EventOptions::default(),
        move |event| {
            let id = event.gamepad().map(|pad| pad.id()).unwrap_or_default();
            // The loop itself notices the empty pad list on its next frame.
            get_logger().info(
                LogComponent::Infrastructure("Gamepad"),
                &format!("🎮 Gamepad disconnected: {id}"),
            );
        },
    );

    vec![connected, disconnected]
}

fn start_polling() {
    if POLLING.with(|p| p.replace(true)) {
        return;
    }
    log_debug!(LogComponent::Infrastructure("Gamepad"), "per-frame polling started");

    let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let scheduler = frame.clone();
    *frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !poll_once() {
            POLLING.with(|p| p.set(false));
            get_logger().info(
                LogComponent::Infrastructure("Gamepad"),
                "🎮 No connected gamepad, polling stopped",
            );
            return;
        }
        schedule_frame(&scheduler);
    }) as Box<dyn FnMut()>));
    schedule_frame(&frame);
}

fn schedule_frame(frame: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let callback = frame.borrow();
    if let Some(callback) = callback.as_ref() {
        let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
    }
}

/// One poll tick. Returns false once no pad is connected, ending the loop.
fn poll_once() -> bool {
    let Some(snapshot) = read_primary_gamepad() else {
        return false;
    };
    if let Some(action) = with_presentation_mut(|p| p.sample_gamepad(snapshot)).flatten() {
        navigate(action);
    }
    true
}

/// Raw state of the first connected pad, reduced for the edge detector.
fn read_primary_gamepad() -> Option<GamepadSnapshot> {
    let pads = web_sys::window()?.navigator().get_gamepads().ok()?;
    for pad in pads.iter() {
        let Ok(pad) = pad.dyn_into::<Gamepad>() else {
            continue;
        };
        if !pad.connected() {
            continue;
        }
        let buttons: Vec<bool> = pad
            .buttons()
            .iter()
            .filter_map(|b| b.dyn_into::<GamepadButton>().ok())
            .map(|b| b.pressed())
            .collect();
        let stick_x = pad.axes().get(0).as_f64().unwrap_or_default();
        return Some(GamepadSnapshot::from_raw(&buttons, stick_x));
    }
    None
}
