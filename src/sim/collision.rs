//! Player vs. obstacle collision detection

use super::obstacle::Obstacle;
use super::rect::Rect;

/// Returns the first obstacle overlapping `player`, if any
fn first_hit<'a, I>(player: &Rect, obstacles: I) -> Option<&'a Obstacle>
where
    I: IntoIterator<Item = &'a Obstacle>,
{
    obstacles.into_iter().find(|o| o.rect.intersects(player))
}

/// True iff any obstacle overlaps the player on both axes.
///
/// Stops scanning at the first hit; an empty set never collides.
pub fn collides<'a, I>(player: &Rect, obstacles: I) -> bool
where
    I: IntoIterator<Item = &'a Obstacle>,
{
    first_hit(player, obstacles).is_some()
}
