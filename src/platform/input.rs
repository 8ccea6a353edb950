//! Keyboard state tracking
//!
//! Winit delivers key transitions as events; the game wants a per-frame
//! snapshot of held keys plus the first fresh key press since the last poll.

use std::collections::HashSet;
use std::time::Instant;

use winit::event::ElementState;
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::sim::MoveInput;

/// Keys the game distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKey {
    Left,
    Right,
    /// R on the game-over screen
    Restart,
    /// Anything else
    Other,
}

impl GameKey {
    /// Map a physical key; unidentified keys count as `Other`
    pub fn from_physical(key: PhysicalKey) -> Self {
        match key {
            PhysicalKey::Code(KeyCode::ArrowLeft) => GameKey::Left,
            PhysicalKey::Code(KeyCode::ArrowRight) => GameKey::Right,
            PhysicalKey::Code(KeyCode::KeyR) => GameKey::Restart,
            _ => GameKey::Other,
        }
    }

    fn is_movement(self) -> bool {
        matches!(self, GameKey::Left | GameKey::Right)
    }
}

/// Input observed for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameInput {
    /// Window close (or event loop exit) was requested
    pub quit_requested: bool,
    /// Movement keys currently held
    pub keys_held: HashSet<GameKey>,
    /// First fresh press since the previous poll (auto-repeat excluded)
    pub key_pressed: Option<GameKey>,
    /// Frame timestamp the simulation should use
    pub now: Instant,
}

impl FrameInput {
    /// Nothing held, nothing pressed
    pub fn idle(now: Instant) -> Self {
        Self {
            quit_requested: false,
            keys_held: HashSet::new(),
            key_pressed: None,
            now,
        }
    }

    pub fn movement(&self) -> MoveInput {
        MoveInput {
            left: self.keys_held.contains(&GameKey::Left),
            right: self.keys_held.contains(&GameKey::Right),
        }
    }
}

/// Accumulates key events between polls
#[derive(Debug, Default)]
pub struct KeyTracker {
    held: HashSet<GameKey>,
    pressed: Option<GameKey>,
    quit: bool,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one key transition.
    ///
    /// `repeat` and `synthetic` events only update held state. Synthetic
    /// presses are what the OS replays for keys already down when the window
    /// regains focus; they never count as a fresh press.
    pub fn key_event(&mut self, key: GameKey, state: ElementState, repeat: bool, synthetic: bool) {
        match state {
            ElementState::Pressed => {
                if key.is_movement() {
                    self.held.insert(key);
                }
                if !repeat && !synthetic && self.pressed.is_none() {
                    self.pressed = Some(key);
                }
            }
            ElementState::Released => {
                self.held.remove(&key);
            }
        }
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    /// Forget held keys (focus lost: releases will never arrive)
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    /// Snapshot for this frame. Clears the pending press; held keys persist.
    pub fn snapshot(&mut self, now: Instant) -> FrameInput {
        FrameInput {
            quit_requested: self.quit,
            keys_held: self.held.clone(),
            key_pressed: self.pressed.take(),
            now,
        }
    }
}
