//! Bouncing obstacles
//!
//! Obstacles move by their velocity once per frame and reflect off the
//! playfield edges. The set only ever grows during a session.

use glam::Vec2;

use super::rect::Rect;

/// A moving rectangle the player must avoid
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub rect: Rect,
    /// Velocity in pixels per frame
    pub vel: Vec2,
}

impl Obstacle {
    pub fn new(rect: Rect, vel: Vec2) -> Self {
        Self { rect, vel }
    }

    /// Move one step and reflect off any boundary the rectangle now touches.
    ///
    /// Axes are checked independently, so a corner hit flips both components.
    /// Position is not clamped: an obstacle may overshoot an edge for a frame
    /// before the reflected velocity carries it back.
    pub fn advance(&mut self, bounds: Vec2) {
        self.rect.pos += self.vel;

        if self.rect.left() <= 0.0 || self.rect.right() >= bounds.x {
            self.vel.x = -self.vel.x;
        }
        if self.rect.top() <= 0.0 || self.rect.bottom() >= bounds.y {
            self.vel.y = -self.vel.y;
        }
    }
}

/// Live obstacles in spawn order
#[derive(Debug, Clone, Default)]
pub struct ObstacleSet {
    obstacles: Vec<Obstacle>,
}

impl ObstacleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    /// Advance every obstacle by one frame
    pub fn advance(&mut self, bounds: Vec2) {
        for obstacle in &mut self.obstacles {
            obstacle.advance(bounds);
        }
    }

    /// Scale every obstacle's velocity in place (positions are untouched)
    pub fn escalate(&mut self, factor: f32) {
        for obstacle in &mut self.obstacles {
            obstacle.vel *= factor;
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Obstacle> {
        self.obstacles.iter()
    }

    #[cfg(test)]
    pub fn as_slice(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }
}

impl<'a> IntoIterator for &'a ObstacleSet {
    type Item = &'a Obstacle;
    type IntoIter = std::slice::Iter<'a, Obstacle>;

    fn into_iter(self) -> Self::IntoIter {
        self.obstacles.iter()
    }
}
