//! Player movement
//!
//! The player slides horizontally along a fixed row; there is no vertical
//! or diagonal motion.

use super::rect::Rect;
use crate::consts::*;

/// Directional keys held this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveInput {
    pub left: bool,
    pub right: bool,
}

/// The player-controlled square
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub rect: Rect,
}

impl Default for Player {
    /// Horizontally centered, one player-height above the bottom edge
    fn default() -> Self {
        Self::at(PLAYFIELD_WIDTH / 2.0, PLAYFIELD_HEIGHT - 2.0 * PLAYER_SIZE)
    }
}

impl Player {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            rect: Rect::new(x, y, PLAYER_SIZE, PLAYER_SIZE),
        }
    }

    /// Apply one frame of input.
    ///
    /// Left is processed before right and each only moves while the player
    /// has room on that side, so holding both keys nets zero motion.
    pub fn apply_input(&mut self, input: MoveInput) {
        if input.left && self.rect.left() > 0.0 {
            self.rect.pos.x = (self.rect.pos.x - PLAYER_SPEED).max(0.0);
        }
        if input.right && self.rect.right() < PLAYFIELD_WIDTH {
            self.rect.pos.x = (self.rect.pos.x + PLAYER_SPEED).min(PLAYFIELD_WIDTH - PLAYER_SIZE);
        }
    }
}
