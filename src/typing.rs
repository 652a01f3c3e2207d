//! Rotating typed-and-deleted role headline
//!
//! A tick-driven state machine over a role list: each role is typed out a
//! character at a time, held, deleted, and replaced by the next role,
//! wrapping over the list. The owner calls [`TypingEffect::tick`] once
//! per step and sleeps for the returned delay.

use std::time::Duration;

/// Delay between typed characters
const TYPE_DELAY: Duration = Duration::from_millis(100);
/// Delay between deleted characters
const DELETE_DELAY: Duration = Duration::from_millis(50);
/// Hold time on a fully typed role
const HOLD_DELAY: Duration = Duration::from_millis(2000);
/// Pause before the next role starts typing
const NEXT_ROLE_DELAY: Duration = Duration::from_millis(500);

/// Typing headline state machine
#[derive(Debug, Clone)]
pub struct TypingEffect {
    roles: Vec<String>,
    role: usize,
    chars: usize,
    deleting: bool,
}

impl TypingEffect {
    /// Create an effect over the given roles
    #[must_use]
    pub const fn new(roles: Vec<String>) -> Self {
        Self {
            roles,
            role: 0,
            chars: 0,
            deleting: false,
        }
    }

    /// The currently visible text
    #[must_use]
    pub fn current(&self) -> String {
        self.roles
            .get(self.role)
            .map(|role| role.chars().take(self.chars).collect())
            .unwrap_or_default()
    }

    /// Advance one character in the current direction
    ///
    /// Returns the delay until the next tick. An empty role list is inert
    /// and reports the hold delay.
    pub fn tick(&mut self) -> Duration {
        let Some(role) = self.roles.get(self.role) else {
            return HOLD_DELAY;
        };
        let len = role.chars().count();

        let mut delay = if self.deleting {
            self.chars = self.chars.saturating_sub(1);
            DELETE_DELAY
        } else {
            self.chars = (self.chars + 1).min(len);
            TYPE_DELAY
        };

        if !self.deleting && self.chars == len {
            delay = HOLD_DELAY;
            self.deleting = true;
        } else if self.deleting && self.chars == 0 {
            self.deleting = false;
            self.role = (self.role + 1) % self.roles.len();
            delay = NEXT_ROLE_DELAY;
        }

        delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_effect() -> TypingEffect {
        TypingEffect::new(vec!["Ab".to_string(), "C".to_string()])
    }

    #[test]
    fn test_types_then_holds() {
        let mut effect = make_effect();

        assert_eq!(effect.tick(), TYPE_DELAY);
        assert_eq!(effect.current(), "A");

        // Completing the role switches to the hold delay
        assert_eq!(effect.tick(), HOLD_DELAY);
        assert_eq!(effect.current(), "Ab");
    }

    #[test]
    fn test_deletes_and_advances_to_next_role() {
        let mut effect = make_effect();
        effect.tick();
        effect.tick();

        assert_eq!(effect.tick(), DELETE_DELAY);
        assert_eq!(effect.current(), "A");

        assert_eq!(effect.tick(), NEXT_ROLE_DELAY);
        assert_eq!(effect.current(), "");

        effect.tick();
        assert_eq!(effect.current(), "C");
    }

    #[test]
    fn test_wraps_over_role_list() {
        let mut effect = make_effect();
        // Type+hold "Ab" (2), delete (2), type+hold "C" (1), delete (1)
        for _ in 0..6 {
            effect.tick();
        }
        effect.tick();
        assert_eq!(effect.current(), "A");
    }

    #[test]
    fn test_empty_role_list_is_inert() {
        let mut effect = TypingEffect::new(Vec::new());
        assert_eq!(effect.tick(), HOLD_DELAY);
        assert_eq!(effect.current(), "");
    }
}
