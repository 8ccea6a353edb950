//! Random obstacle generation
//!
//! Obstacles appear in the bottom-right quadrant of the playfield, away from
//! the player's bottom-center start, with each velocity axis drawn from a
//! fixed set of base speeds and scaled by the current speed multiplier.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::obstacle::Obstacle;
use super::rect::Rect;
use crate::consts::*;

/// The raw random choices behind one obstacle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnRoll {
    /// Side length in whole pixels, within `[OBSTACLE_SIZE_MIN, OBSTACLE_SIZE_MAX]`
    pub size: u32,
    /// Position within the allowed x range, in `[0, 1)`
    pub x_frac: f32,
    /// Position within the allowed y range, in `[0, 1)`
    pub y_frac: f32,
    /// Base horizontal speed, one of `OBSTACLE_BASE_SPEEDS`
    pub dx: f32,
    /// Base vertical speed, one of `OBSTACLE_BASE_SPEEDS`
    pub dy: f32,
}

impl SpawnRoll {
    /// Build the obstacle these choices describe.
    ///
    /// x lands on a whole pixel in `[width/2, width - size]`, y in
    /// `[height/2, height - size]`.
    pub fn into_obstacle(self, speed_multiplier: f32) -> Obstacle {
        let size = self.size as i32;
        let x = pick_int(
            (PLAYFIELD_WIDTH / 2.0) as i32,
            PLAYFIELD_WIDTH as i32 - size,
            self.x_frac,
        );
        let y = pick_int(
            (PLAYFIELD_HEIGHT / 2.0) as i32,
            PLAYFIELD_HEIGHT as i32 - size,
            self.y_frac,
        );

        Obstacle::new(
            Rect::new(x as f32, y as f32, size as f32, size as f32),
            Vec2::new(self.dx, self.dy) * speed_multiplier,
        )
    }
}

/// Map a fraction in `[0, 1)` uniformly onto the integers `lo..=hi`
fn pick_int(lo: i32, hi: i32, frac: f32) -> i32 {
    let span = (hi - lo).max(0);
    let offset = (frac.clamp(0.0, 1.0) * (span + 1) as f32).floor() as i32;
    lo + offset.min(span)
}

/// Seeded obstacle generator
#[derive(Debug, Clone)]
pub struct RandomSpawner {
    rng: Pcg32,
}

impl RandomSpawner {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Draw the random choices for the next obstacle
    pub fn roll(&mut self) -> SpawnRoll {
        let size = self.rng.random_range(OBSTACLE_SIZE_MIN..=OBSTACLE_SIZE_MAX);
        let x_frac = self.rng.random::<f32>();
        let y_frac = self.rng.random::<f32>();
        let dx = self.base_speed();
        let dy = self.base_speed();

        SpawnRoll {
            size,
            x_frac,
            y_frac,
            dx,
            dy,
        }
    }

    /// Create a new obstacle, its velocity scaled by `speed_multiplier`
    pub fn spawn(&mut self, speed_multiplier: f32) -> Obstacle {
        self.roll().into_obstacle(speed_multiplier)
    }

    fn base_speed(&mut self) -> f32 {
        OBSTACLE_BASE_SPEEDS[self.rng.random_range(0..OBSTACLE_BASE_SPEEDS.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roll_midpoint_of_quadrant() {
        let roll = SpawnRoll {
            size: 30,
            x_frac: 0.5,
            y_frac: 0.5,
            dx: 2.0,
            dy: -3.0,
        };
        let obstacle = roll.into_obstacle(1.0);

        // x in [640, 1250], y in [360, 690]
        assert_eq!(obstacle.rect, Rect::new(945.0, 525.0, 30.0, 30.0));
        assert_eq!(obstacle.vel, Vec2::new(2.0, -3.0));
    }

    #[test]
    fn test_roll_extremes_stay_in_quadrant() {
        let low = SpawnRoll {
            size: 50,
            x_frac: 0.0,
            y_frac: 0.0,
            dx: 4.0,
            dy: 4.0,
        }
        .into_obstacle(1.0);
        assert_eq!(low.rect.pos, Vec2::new(640.0, 360.0));

        let high = SpawnRoll {
            size: 50,
            x_frac: 0.999_999,
            y_frac: 0.999_999,
            dx: 4.0,
            dy: 4.0,
        }
        .into_obstacle(1.0);
        assert_eq!(high.rect.right(), PLAYFIELD_WIDTH);
        assert_eq!(high.rect.bottom(), PLAYFIELD_HEIGHT);
    }

    #[test]
    fn test_multiplier_scales_velocity() {
        let roll = SpawnRoll {
            size: 20,
            x_frac: 0.25,
            y_frac: 0.75,
            dx: -4.0,
            dy: 2.0,
        };
        let obstacle = roll.into_obstacle(1.4);
        assert!((obstacle.vel.x - -5.6).abs() < 1e-5);
        assert!((obstacle.vel.y - 2.8).abs() < 1e-5);
    }

    #[test]
    fn test_spawns_respect_ranges() {
        for seed in 0..50 {
            let mut spawner = RandomSpawner::new(seed);
            for _ in 0..20 {
                let roll = spawner.roll();
                assert!((OBSTACLE_SIZE_MIN..=OBSTACLE_SIZE_MAX).contains(&roll.size));
                assert!(OBSTACLE_BASE_SPEEDS.contains(&roll.dx));
                assert!(OBSTACLE_BASE_SPEEDS.contains(&roll.dy));

                let o = roll.into_obstacle(1.0);
                assert!(o.rect.left() >= PLAYFIELD_WIDTH / 2.0);
                assert!(o.rect.top() >= PLAYFIELD_HEIGHT / 2.0);
                assert!(o.rect.right() <= PLAYFIELD_WIDTH);
                assert!(o.rect.bottom() <= PLAYFIELD_HEIGHT);
                assert_eq!(o.rect.size.x, o.rect.size.y);
                assert_eq!(o.rect.pos.x.fract(), 0.0);
            }
        }
    }

    #[test]
    fn test_same_seed_same_obstacles() {
        let mut a = RandomSpawner::new(42);
        let mut b = RandomSpawner::new(42);
        for _ in 0..10 {
            assert_eq!(a.spawn(1.2), b.spawn(1.2));
        }
    }
}
