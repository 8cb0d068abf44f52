use crate::domain::navigation::NavigationAction;

/// Standard-mapping indices (W3C gamepad layout).
pub const BUTTON_ADVANCE: usize = 0; // "A"
pub const BUTTON_RETREAT: usize = 1; // "B"
pub const DPAD_LEFT: usize = 14;
pub const DPAD_RIGHT: usize = 15;

/// Deflection past this on the left stick's X axis counts as a press.
pub const STICK_THRESHOLD: f64 = 0.5;

/// One polled frame of pad state, reduced to the two logical directions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GamepadSnapshot {
    pub advance_held: bool,
    pub retreat_held: bool,
}

impl GamepadSnapshot {
    /// Reduce raw pad state. `buttons` is indexed by the standard mapping;
    /// missing buttons read as released.
    pub fn from_raw(buttons: &[bool], stick_x: f64) -> Self {
        let held = |i: usize| buttons.get(i).copied().unwrap_or(false);
        Self {
            advance_held: held(BUTTON_ADVANCE) || held(DPAD_RIGHT) || stick_x > STICK_THRESHOLD,
            retreat_held: held(BUTTON_RETREAT) || held(DPAD_LEFT) || stick_x < -STICK_THRESHOLD,
        }
    }
}

/// Edge detector: a direction fires once on its released-to-held transition,
/// so holding a button across many poll frames triggers a single action.
#[derive(Debug, Default)]
pub struct ButtonEdge {
    last: GamepadSnapshot,
}

impl ButtonEdge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one frame; advance wins when both directions rise at once.
    pub fn advance(&mut self, snapshot: GamepadSnapshot) -> Option<NavigationAction> {
        let action = if snapshot.advance_held && !self.last.advance_held {
            Some(NavigationAction::Next)
        } else if snapshot.retreat_held && !self.last.retreat_held {
            Some(NavigationAction::Previous)
        } else {
            None
        };
        self.last = snapshot;
        action
    }
}
