#![warn(clippy::all, clippy::pedantic)]

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::trace;

use crate::components::Input;

/// Game-level meaning of a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Left,
    Right,
    Rotate,
    HardDrop,
    Pause,
    Restart,
    Quit,
}

impl Action {
    const COUNT: usize = 7;

    fn index(self) -> usize {
        self as usize
    }
}

/// Maps a key to its action, if it has one.
#[must_use]
pub fn action_for(key: &KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Left | KeyCode::Char('a') => Some(Action::Left),
        KeyCode::Right | KeyCode::Char('d') => Some(Action::Right),
        KeyCode::Up | KeyCode::Char('w' | ' ') => Some(Action::Rotate),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Enter => Some(Action::HardDrop),
        KeyCode::Esc | KeyCode::Char('p') => Some(Action::Pause),
        KeyCode::Char('r') => Some(Action::Restart),
        KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct KeyState {
    // Game clock reading of the last press or repeat, cleared on release
    last_seen: Option<u64>,
    // Pressed since the last snapshot
    pressed: bool,
}

/// Turns a stream of key events into per-frame [`Input`] snapshots.
///
/// Terminals that do not report key releases are handled with a hold timeout: a
/// key that produced no event for `hold_timeout_ms` counts as released. Once a
/// release event has been seen the timeout is no longer applied.
#[derive(Debug, Clone)]
pub struct KeyTracker {
    keys: [KeyState; Action::COUNT],
    hold_timeout_ms: u64,
    reports_releases: bool,
    quit_requested: bool,
}

impl KeyTracker {
    #[must_use]
    pub fn new(hold_timeout_ms: u64) -> Self {
        Self {
            keys: [KeyState::default(); Action::COUNT],
            hold_timeout_ms,
            reports_releases: false,
            quit_requested: false,
        }
    }

    /// Records a key event observed at `now` milliseconds on the game clock.
    pub fn handle_event(&mut self, key: &KeyEvent, now: u64) {
        let Some(action) = action_for(key) else {
            return;
        };
        trace!("{action:?} {:?} at {now}ms", key.kind);

        let state = &mut self.keys[action.index()];
        match key.kind {
            KeyEventKind::Press => {
                state.last_seen = Some(now);
                state.pressed = true;
                if action == Action::Quit {
                    self.quit_requested = true;
                }
            }
            KeyEventKind::Repeat => state.last_seen = Some(now),
            KeyEventKind::Release => {
                state.last_seen = None;
                self.reports_releases = true;
            }
        }
    }

    #[must_use]
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    fn is_held(&self, action: Action, now: u64) -> bool {
        self.keys[action.index()].last_seen.is_some_and(|seen| {
            self.reports_releases || now.saturating_sub(seen) <= self.hold_timeout_ms
        })
    }

    fn take_pressed(&mut self, action: Action) -> bool {
        std::mem::take(&mut self.keys[action.index()].pressed)
    }

    /// Input for the frame at `now`. Pressed-this-frame flags are consumed.
    pub fn snapshot(&mut self, now: u64) -> Input {
        let hard_drop_pressed = self.take_pressed(Action::HardDrop);
        let restart_pressed = self.take_pressed(Action::Restart);

        let input = Input {
            left: self.is_held(Action::Left, now),
            right: self.is_held(Action::Right, now),
            rotate: self.is_held(Action::Rotate, now),
            hard_drop: self.is_held(Action::HardDrop, now),
            rotate_pressed: self.take_pressed(Action::Rotate),
            hard_drop_pressed,
            pause_pressed: self.take_pressed(Action::Pause),
            // Any drop key also restarts after a game over
            restart_pressed: restart_pressed || hard_drop_pressed,
        };

        for key in &mut self.keys {
            key.pressed = false;
        }
        input
    }
}
