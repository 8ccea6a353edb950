//! Difficulty escalation over wall-clock time
//!
//! Two independent periodic timers run from session start:
//! - every `ADD_OBSTACLE_INTERVAL` seconds a new obstacle spawns at the
//!   current speed multiplier
//! - every `SPEED_UP_INTERVAL` seconds the multiplier grows by
//!   `SPEED_MULTIPLIER_STEP` and every live obstacle's velocity is scaled by
//!   `ESCALATION_FACTOR`
//!
//! The multiplier only affects obstacles spawned afterwards, while the
//! escalation compounds on everything already in play. Both mechanisms are
//! kept as they are; together they make obstacle speed grow faster than
//! linearly over a long session.
//!
//! Timers are checked once per frame, so a trigger fires up to one frame
//! late, and the timer restarts from the frame that fired it.

use std::time::{Duration, Instant};

use super::obstacle::ObstacleSet;
use super::spawner::RandomSpawner;
use super::state::GameEvent;
use crate::consts::*;

#[derive(Debug, Clone)]
pub struct DifficultyScheduler {
    speed_multiplier: f32,
    last_spawn: Instant,
    last_speed_up: Instant,
    spawn_interval: Duration,
    speed_up_interval: Duration,
}

impl DifficultyScheduler {
    pub fn new(start: Instant) -> Self {
        Self {
            speed_multiplier: 1.0,
            last_spawn: start,
            last_speed_up: start,
            spawn_interval: Duration::from_secs_f32(ADD_OBSTACLE_INTERVAL),
            speed_up_interval: Duration::from_secs_f32(SPEED_UP_INTERVAL),
        }
    }

    /// Scalar applied to newly spawned obstacles' velocity
    pub fn speed_multiplier(&self) -> f32 {
        self.speed_multiplier
    }

    /// Run both timer checks for the frame observed at `now`.
    ///
    /// The spawn check runs first, so when both fire on the same frame the
    /// new obstacle is created at the old multiplier and then escalated with
    /// the rest.
    pub fn update(
        &mut self,
        now: Instant,
        obstacles: &mut ObstacleSet,
        spawner: &mut RandomSpawner,
        events: &mut Vec<GameEvent>,
    ) {
        if now.saturating_duration_since(self.last_spawn) >= self.spawn_interval {
            obstacles.add(spawner.spawn(self.speed_multiplier));
            self.last_spawn = now;
            events.push(GameEvent::ObstacleSpawned {
                count: obstacles.len(),
            });
        }

        if now.saturating_duration_since(self.last_speed_up) >= self.speed_up_interval {
            self.speed_multiplier += SPEED_MULTIPLIER_STEP;
            obstacles.escalate(ESCALATION_FACTOR);
            self.last_speed_up = now;
            events.push(GameEvent::SpeedUp {
                multiplier: self.speed_multiplier,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::obstacle::Obstacle;

    fn setup() -> (Instant, DifficultyScheduler, ObstacleSet, RandomSpawner) {
        let start = Instant::now();
        let mut spawner = RandomSpawner::new(7);
        let mut obstacles = ObstacleSet::new();
        obstacles.add(spawner.spawn(1.0));
        (start, DifficultyScheduler::new(start), obstacles, spawner)
    }

    fn at(start: Instant, secs: f32) -> Instant {
        start + Duration::from_secs_f32(secs)
    }

    #[test]
    fn test_nothing_before_first_interval() {
        let (start, mut sched, mut obstacles, mut spawner) = setup();
        let mut events = Vec::new();
        for frame in 0..299 {
            sched.update(
                at(start, frame as f32 / 60.0),
                &mut obstacles,
                &mut spawner,
                &mut events,
            );
        }
        assert!(events.is_empty());
        assert_eq!(obstacles.len(), 1);
        assert_eq!(sched.speed_multiplier(), 1.0);
    }

    #[test]
    fn test_spawn_at_five_seconds() {
        let (start, mut sched, mut obstacles, mut spawner) = setup();
        let mut events = Vec::new();

        sched.update(at(start, 4.9), &mut obstacles, &mut spawner, &mut events);
        assert_eq!(obstacles.len(), 1);

        sched.update(at(start, 5.0), &mut obstacles, &mut spawner, &mut events);
        assert_eq!(obstacles.len(), 2);
        assert_eq!(events, vec![GameEvent::ObstacleSpawned { count: 2 }]);

        // Timer restarted from the frame that fired
        sched.update(at(start, 5.1), &mut obstacles, &mut spawner, &mut events);
        assert_eq!(obstacles.len(), 2);
        assert_eq!(sched.speed_multiplier(), 1.0);
    }

    #[test]
    fn test_speed_up_at_ten_seconds() {
        let (start, mut sched, mut obstacles, mut spawner) = setup();
        let mut events = Vec::new();

        sched.update(at(start, 5.0), &mut obstacles, &mut spawner, &mut events);
        let before: Vec<Obstacle> = obstacles.iter().cloned().collect();

        sched.update(at(start, 10.0), &mut obstacles, &mut spawner, &mut events);

        assert!((sched.speed_multiplier() - 1.2).abs() < 1e-6);
        // Spawn fired first (5s since last spawn), then escalation
        assert_eq!(obstacles.len(), 3);
        for (old, new) in before.iter().zip(obstacles.iter()) {
            assert!((new.vel - old.vel * ESCALATION_FACTOR).length() < 1e-5);
            assert_eq!(new.rect, old.rect);
        }
        assert!(matches!(events.last(), Some(GameEvent::SpeedUp { .. })));
    }

    #[test]
    fn test_late_frame_fires_once() {
        let (start, mut sched, mut obstacles, mut spawner) = setup();
        let mut events = Vec::new();

        // A long stall still only triggers one spawn for that frame
        sched.update(at(start, 12.0), &mut obstacles, &mut spawner, &mut events);
        assert_eq!(obstacles.len(), 2);
        assert!((sched.speed_multiplier() - 1.2).abs() < 1e-6);

        sched.update(at(start, 16.9), &mut obstacles, &mut spawner, &mut events);
        assert_eq!(obstacles.len(), 2);
        sched.update(at(start, 17.0), &mut obstacles, &mut spawner, &mut events);
        assert_eq!(obstacles.len(), 3);
    }

    #[test]
    fn test_new_obstacles_use_current_multiplier() {
        let (start, mut sched, mut obstacles, mut spawner) = setup();
        let mut events = Vec::new();

        sched.update(at(start, 10.0), &mut obstacles, &mut spawner, &mut events);
        sched.update(at(start, 15.0), &mut obstacles, &mut spawner, &mut events);

        // Obstacle spawned at 15s: base speed * 1.2, base speeds are 2..=4
        let newest = &obstacles.as_slice()[obstacles.len() - 1];
        for v in [newest.vel.x.abs(), newest.vel.y.abs()] {
            let base = v / 1.2;
            assert!(
                [2.0f32, 3.0, 4.0].iter().any(|b| (b - base).abs() < 1e-4),
                "unexpected speed {v}"
            );
        }
    }
}
