//! Role cycling for the landing headline: type a role, hold it, delete it, move on.

use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Typing,
    PausedAfterTyping,
    Deleting,
}

/// Deterministic typing state machine.
///
/// Each [`tick`](Typewriter::tick) performs one step and returns how long the
/// driver should wait before the next one. The machine never finishes on its
/// own; the driver stops by dropping its pending timer.
#[derive(Clone, Debug, PartialEq)]
pub struct Typewriter {
    roles: Rc<[String]>,
    speed_ms: u32,
    pause_ms: u32,
    index: usize,
    /// Number of characters of the current role on screen.
    shown: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn new(roles: impl Into<Rc<[String]>>, speed_ms: u32, pause_ms: u32) -> Self {
        Self {
            roles: roles.into(),
            speed_ms,
            pause_ms,
            index: 0,
            shown: 0,
            phase: Phase::Typing,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn role_index(&self) -> usize {
        self.index
    }

    /// Delay before the first tick.
    pub fn initial_delay_ms(&self) -> u32 {
        self.speed_ms
    }

    pub fn text(&self) -> &str {
        let role = self.current_role();
        let end = role
            .char_indices()
            .nth(self.shown)
            .map(|(offset, _)| offset)
            .unwrap_or(role.len());
        &role[..end]
    }

    pub fn tick(&mut self) -> u32 {
        let role_len = self.current_role().chars().count();

        match self.phase {
            Phase::Typing if self.shown < role_len => {
                self.shown += 1;
                if self.shown == role_len {
                    self.phase = Phase::PausedAfterTyping;
                    self.pause_ms
                } else {
                    self.speed_ms
                }
            }
            Phase::Typing => {
                self.phase = Phase::PausedAfterTyping;
                self.pause_ms
            }
            Phase::PausedAfterTyping => {
                self.phase = Phase::Deleting;
                self.delete_delay_ms()
            }
            Phase::Deleting if self.shown > 0 => {
                self.shown -= 1;
                self.delete_delay_ms()
            }
            Phase::Deleting => {
                self.index = (self.index + 1) % self.roles.len().max(1);
                self.phase = Phase::Typing;
                self.speed_ms
            }
        }
    }

    fn delete_delay_ms(&self) -> u32 {
        (self.speed_ms / 2).max(1)
    }

    fn current_role(&self) -> &str {
        self.roles.get(self.index).map(String::as_str).unwrap_or("")
    }
}
