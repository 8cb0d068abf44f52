/// Canonical navigation commands every input source collapses into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    Next,
    Previous,
    GoTo(usize),
}

/// Successful slide change, reported to DOM/layout listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideTransition {
    pub from: usize,
    pub to: usize,
}

/// Current position within the deck. Slides are 1-indexed and the state
/// clamps at both edges - the presentation never wraps around.
#[derive(Debug, Clone)]
pub struct NavigationState {
    current_slide: usize,
    total_slides: usize,
}

impl NavigationState {
    pub fn new(total_slides: usize) -> Self {
        Self { current_slide: 1, total_slides: total_slides.max(1) }
    }

    pub fn current_slide(&self) -> usize {
        self.current_slide
    }

    pub fn total_slides(&self) -> usize {
        self.total_slides
    }

    /// Apply an action. Returns the transition, or `None` when the action is
    /// a no-op (edge clamp, out-of-range jump, jump to the current slide).
    pub fn apply(&mut self, action: NavigationAction) -> Option<SlideTransition> {
        let target = match action {
            NavigationAction::Next if self.current_slide < self.total_slides => {
                self.current_slide + 1
            }
            NavigationAction::Previous if self.current_slide > 1 => self.current_slide - 1,
            NavigationAction::GoTo(n) if (1..=self.total_slides).contains(&n) => n,
            _ => return None,
        };
        if target == self.current_slide {
            return None;
        }
        let transition = SlideTransition { from: self.current_slide, to: target };
        self.current_slide = target;
        Some(transition)
    }
}
