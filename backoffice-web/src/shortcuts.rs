//! Keyboard shortcuts for the signed-in layout.
//!
//! `g` starts a navigation chord that the next key completes; `n` toggles the
//! notification slideover.

use crate::routes::MainRoute;

/// How long the second key of a chord may lag behind `g`.
pub const CHORD_WINDOW_MS: i64 = 800;

/// Action produced by a completed shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Navigate(MainRoute),
    ToggleNotifications,
}

/// Chord targets, by second key.
pub const CHORDS: [(&str, MainRoute); 5] = [
    ("h", MainRoute::Home),
    ("i", MainRoute::Categories),
    ("c", MainRoute::Customers),
    ("r", MainRoute::SaleReport),
    ("s", MainRoute::Settings),
];

/// Folds key presses into shortcuts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShortcutMatcher {
    leader_at: Option<i64>,
}

impl ShortcutMatcher {
    /// Feed one key press at `now_ms`.
    pub fn feed(&mut self, key: &str, now_ms: i64) -> Option<Shortcut> {
        let key = key.to_ascii_lowercase();
        let leader = self
            .leader_at
            .take()
            .filter(|started| now_ms - started <= CHORD_WINDOW_MS);

        if leader.is_some() {
            if let Some((_, route)) = CHORDS.iter().find(|(second, _)| *second == key) {
                return Some(Shortcut::Navigate(*route));
            }
        }

        match key.as_str() {
            "g" => {
                self.leader_at = Some(now_ms);
                None
            }
            "n" => Some(Shortcut::ToggleNotifications),
            _ => None,
        }
    }

    /// Forget a pending chord.
    pub fn reset(&mut self) {
        self.leader_at = None;
    }
}

/// Whether a key event should be ignored: modifiers held or focus in a text
/// field.
pub fn is_suppressed(target_tag: Option<&str>, ctrl: bool, meta: bool, alt: bool) -> bool {
    if ctrl || meta || alt {
        return true;
    }
    target_tag.is_some_and(|tag| {
        matches!(
            tag.to_ascii_uppercase().as_str(),
            "INPUT" | "TEXTAREA" | "SELECT"
        )
    })
}
