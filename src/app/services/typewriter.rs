//! Rotating-role typewriter effect as a clock-free state machine.
//!
//! The machine never sleeps: each [`Typewriter::step`] applies one
//! transition and returns how long the driver should wait before the
//! next one. Timer ownership lives with the caller.

use std::time::Duration;

use thiserror::Error;

use crate::app::domain::settings::PortfolioConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Pausing,
    Deleting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterTimings {
    pub type_interval: Duration,
    pub pause: Duration,
    pub delete_interval: Duration,
}

impl Default for TypewriterTimings {
    fn default() -> Self {
        Self {
            type_interval: Duration::from_millis(100),
            pause: Duration::from_millis(2000),
            delete_interval: Duration::from_millis(50),
        }
    }
}

impl From<&PortfolioConfig> for TypewriterTimings {
    fn from(config: &PortfolioConfig) -> Self {
        Self {
            type_interval: Duration::from_millis(config.type_interval_ms),
            pause: Duration::from_millis(config.pause_ms),
            delete_interval: Duration::from_millis(config.delete_interval_ms),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TypewriterError {
    #[error("typewriter needs at least one role")]
    NoRoles,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    roles: Vec<String>,
    timings: TypewriterTimings,
    role_index: usize,
    displayed: String,
    /// chars of `displayed`, kept to avoid recounting
    displayed_len: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn new<I, S>(roles: I, timings: TypewriterTimings) -> Result<Self, TypewriterError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let roles: Vec<String> = roles.into_iter().map(Into::into).collect();
        if roles.is_empty() {
            return Err(TypewriterError::NoRoles);
        }
        Ok(Self {
            roles,
            timings,
            role_index: 0,
            displayed: String::new(),
            displayed_len: 0,
            phase: Phase::Typing,
        })
    }

    pub fn role_index(&self) -> usize {
        self.role_index
    }

    pub fn displayed_text(&self) -> &str {
        &self.displayed
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The caret shows only while typing
    pub fn caret_visible(&self) -> bool {
        self.phase == Phase::Typing
    }

    pub fn current_role(&self) -> &str {
        &self.roles[self.role_index]
    }

    /// Delay before the first call to `step`
    pub fn initial_delay(&self) -> Duration {
        self.timings.type_interval
    }

    /// Apply one transition; returns the delay until the next step.
    pub fn step(&mut self) -> Duration {
        match self.phase {
            Phase::Typing => {
                if let Some(ch) = self.roles[self.role_index].chars().nth(self.displayed_len) {
                    self.displayed.push(ch);
                    self.displayed_len += 1;
                }
                if self.displayed_len >= self.roles[self.role_index].chars().count() {
                    self.phase = Phase::Pausing;
                    self.timings.pause
                } else {
                    self.timings.type_interval
                }
            }
            Phase::Pausing => {
                self.phase = Phase::Deleting;
                self.timings.delete_interval
            }
            Phase::Deleting => {
                if self.displayed.pop().is_some() {
                    self.displayed_len -= 1;
                }
                if self.displayed.is_empty() {
                    self.role_index = (self.role_index + 1) % self.roles.len();
                    self.phase = Phase::Typing;
                    self.timings.type_interval
                } else {
                    self.timings.delete_interval
                }
            }
        }
    }

    /// Back to an empty first role
    pub fn reset(&mut self) {
        self.role_index = 0;
        self.displayed.clear();
        self.displayed_len = 0;
        self.phase = Phase::Typing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_rejects_empty_roles() {
        let roles: Vec<String> = Vec::new();
        assert_eq!(
            Typewriter::new(roles, TypewriterTimings::default()).unwrap_err(),
            TypewriterError::NoRoles
        );
    }

    #[test]
    fn test_full_cycle_advances_role() {
        let mut tw = Typewriter::new(["A", "B"], TypewriterTimings::default()).unwrap();
        assert_eq!(tw.initial_delay(), ms(100));

        // Type "A"; already full, so pause next
        assert_eq!(tw.step(), ms(2000));
        assert_eq!(tw.displayed_text(), "A");
        assert_eq!(tw.phase(), Phase::Pausing);

        // Pause ends
        assert_eq!(tw.step(), ms(50));
        assert_eq!(tw.phase(), Phase::Deleting);

        // Delete the only char and move on
        assert_eq!(tw.step(), ms(100));
        assert_eq!(tw.role_index(), 1);
        assert_eq!(tw.displayed_text(), "");
        assert_eq!(tw.phase(), Phase::Typing);

        tw.step();
        assert_eq!(tw.displayed_text(), "B");
    }

    #[test]
    fn test_types_one_char_per_step() {
        let mut tw = Typewriter::new(["Rust"], TypewriterTimings::default()).unwrap();
        let mut seen = Vec::new();
        for _ in 0..4 {
            tw.step();
            seen.push(tw.displayed_text().to_string());
        }
        assert_eq!(seen, ["R", "Ru", "Rus", "Rust"]);
        assert_eq!(tw.phase(), Phase::Pausing);
    }

    #[test]
    fn test_deletes_one_char_per_step() {
        let mut tw = Typewriter::new(["abc"], TypewriterTimings::default()).unwrap();
        for _ in 0..3 {
            tw.step();
        }
        tw.step(); // pause over
        assert_eq!(tw.step(), ms(50));
        assert_eq!(tw.displayed_text(), "ab");
        assert_eq!(tw.step(), ms(50));
        assert_eq!(tw.displayed_text(), "a");
        assert_eq!(tw.step(), ms(100));
        assert_eq!(tw.displayed_text(), "");
    }

    #[test]
    fn test_wraps_around_role_list() {
        let mut tw = Typewriter::new(["x", "y"], TypewriterTimings::default()).unwrap();
        // type, pause, delete per single-char role
        for _ in 0..6 {
            tw.step();
        }
        assert_eq!(tw.role_index(), 0);
        assert_eq!(tw.current_role(), "x");
    }

    #[test]
    fn test_multibyte_roles() {
        let mut tw = Typewriter::new(["né"], TypewriterTimings::default()).unwrap();
        tw.step();
        tw.step();
        assert_eq!(tw.displayed_text(), "né");
        assert_eq!(tw.phase(), Phase::Pausing);
    }

    #[test]
    fn test_caret_only_while_typing() {
        let mut tw = Typewriter::new(["ab"], TypewriterTimings::default()).unwrap();
        assert!(tw.caret_visible());
        tw.step();
        tw.step();
        assert!(!tw.caret_visible());
        tw.step();
        assert!(!tw.caret_visible());
    }

    #[test]
    fn test_empty_role_pauses_immediately() {
        let mut tw = Typewriter::new(["", "z"], TypewriterTimings::default()).unwrap();
        assert_eq!(tw.step(), ms(2000));
        tw.step();
        assert_eq!(tw.step(), ms(100));
        assert_eq!(tw.role_index(), 1);
    }

    #[test]
    fn test_timings_from_config() {
        let config = PortfolioConfig {
            type_interval_ms: 10,
            pause_ms: 20,
            delete_interval_ms: 5,
            ..Default::default()
        };
        let timings = TypewriterTimings::from(&config);
        assert_eq!(timings.type_interval, ms(10));
        assert_eq!(timings.pause, ms(20));
        assert_eq!(timings.delete_interval, ms(5));
    }

    #[test]
    fn test_reset() {
        let mut tw = Typewriter::new(["ab", "cd"], TypewriterTimings::default()).unwrap();
        for _ in 0..7 {
            tw.step();
        }
        tw.reset();
        assert_eq!(tw.role_index(), 0);
        assert_eq!(tw.displayed_text(), "");
        assert_eq!(tw.phase(), Phase::Typing);
    }
}
