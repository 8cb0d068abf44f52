use crate::domain::navigation::NavigationAction;

/// Named-key mapping table. Digits jump directly; a digit beyond the deck is
/// a deliberate no-op rather than a clamped jump.
pub fn action_for_named_key(key: &str, total_slides: usize) -> Option<NavigationAction> {
    match key {
        "ArrowLeft" | "ArrowUp" | "PageUp" | "MediaTrackPrevious" => {
            Some(NavigationAction::Previous)
        }
        "ArrowRight" | "ArrowDown" | "PageDown" | " " | "MediaTrackNext" | "MediaPlayPause" => {
            Some(NavigationAction::Next)
        }
        "Home" => Some(NavigationAction::GoTo(1)),
        "End" => Some(NavigationAction::GoTo(total_slides)),
        _ => {
            let digit = single_digit(key)?;
            if digit <= total_slides { Some(NavigationAction::GoTo(digit)) } else { None }
        }
    }
}

/// Legacy numeric-keycode table for sources that never emit named keys.
/// Consulted strictly as a fallback (see [`action_for_key`]) so a named key
/// and its keycode cannot both fire.
pub fn action_for_key_code(key_code: u32, total_slides: usize) -> Option<NavigationAction> {
    match key_code {
        33 | 37 | 38 => Some(NavigationAction::Previous),
        32 | 34 | 39 | 40 => Some(NavigationAction::Next),
        36 => Some(NavigationAction::GoTo(1)),
        35 => Some(NavigationAction::GoTo(total_slides)),
        49..=57 => {
            let digit = (key_code - 48) as usize;
            if digit <= total_slides { Some(NavigationAction::GoTo(digit)) } else { None }
        }
        _ => None,
    }
}

/// Full keyboard resolution: named keys first, keycode fallback second.
pub fn action_for_key(key: &str, key_code: u32, total_slides: usize) -> Option<NavigationAction> {
    action_for_named_key(key, total_slides).or_else(|| action_for_key_code(key_code, total_slides))
}

fn single_digit(key: &str) -> Option<usize> {
    let mut chars = key.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    match c {
        '1'..='9' => Some(c as usize - '0' as usize),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_paging_keys() {
        assert_eq!(action_for_named_key("ArrowLeft", 5), Some(NavigationAction::Previous));
        assert_eq!(action_for_named_key("ArrowUp", 5), Some(NavigationAction::Previous));
        assert_eq!(action_for_named_key("PageUp", 5), Some(NavigationAction::Previous));
        assert_eq!(action_for_named_key("ArrowRight", 5), Some(NavigationAction::Next));
        assert_eq!(action_for_named_key("ArrowDown", 5), Some(NavigationAction::Next));
        assert_eq!(action_for_named_key("PageDown", 5), Some(NavigationAction::Next));
        assert_eq!(action_for_named_key(" ", 5), Some(NavigationAction::Next));
    }

    #[test]
    fn home_end_jump_to_edges() {
        assert_eq!(action_for_named_key("Home", 7), Some(NavigationAction::GoTo(1)));
        assert_eq!(action_for_named_key("End", 7), Some(NavigationAction::GoTo(7)));
    }

    #[test]
    fn media_keys_navigate() {
        assert_eq!(action_for_named_key("MediaTrackNext", 5), Some(NavigationAction::Next));
        assert_eq!(action_for_named_key("MediaPlayPause", 5), Some(NavigationAction::Next));
        assert_eq!(
            action_for_named_key("MediaTrackPrevious", 5),
            Some(NavigationAction::Previous)
        );
    }

    #[test]
    fn digit_keys_respect_deck_size() {
        assert_eq!(action_for_named_key("3", 5), Some(NavigationAction::GoTo(3)));
        assert_eq!(action_for_named_key("5", 5), Some(NavigationAction::GoTo(5)));
        assert_eq!(action_for_named_key("6", 5), None);
        assert_eq!(action_for_named_key("9", 5), None);
        assert_eq!(action_for_named_key("0", 5), None);
    }

    #[test]
    fn unrelated_keys_are_ignored() {
        assert_eq!(action_for_named_key("Enter", 5), None);
        assert_eq!(action_for_named_key("a", 5), None);
        assert_eq!(action_for_named_key("F5", 5), None);
    }

    #[test]
    fn keycode_fallback_matches_named_table() {
        assert_eq!(action_for_key_code(37, 5), Some(NavigationAction::Previous));
        assert_eq!(action_for_key_code(39, 5), Some(NavigationAction::Next));
        assert_eq!(action_for_key_code(32, 5), Some(NavigationAction::Next));
        assert_eq!(action_for_key_code(36, 5), Some(NavigationAction::GoTo(1)));
        assert_eq!(action_for_key_code(35, 5), Some(NavigationAction::GoTo(5)));
        assert_eq!(action_for_key_code(51, 5), Some(NavigationAction::GoTo(3)));
        assert_eq!(action_for_key_code(54, 5), None);
        assert_eq!(action_for_key_code(65, 5), None);
    }

    #[test]
    fn fallback_only_runs_when_named_key_missed() {
        // Named key wins even when the keycode disagrees.
        assert_eq!(action_for_key("ArrowLeft", 39, 5), Some(NavigationAction::Previous));
        // Unnamed key from a legacy source resolves through the keycode.
        assert_eq!(action_for_key("Unidentified", 39, 5), Some(NavigationAction::Next));
        assert_eq!(action_for_key("Unidentified", 0, 5), None);
    }
}
