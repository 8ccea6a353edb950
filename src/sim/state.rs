//! Game session state
//!
//! One `GameState` is one play-through: it starts Running with a single
//! obstacle and ends in GameOver on the first collision. Restarting builds a
//! fresh `GameState` instead of resetting this one.

use std::time::{Duration, Instant};

use glam::Vec2;

use super::difficulty::DifficultyScheduler;
use super::obstacle::ObstacleSet;
use super::player::Player;
use super::spawner::RandomSpawner;
use crate::consts::*;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Player was hit; terminal for this session
    GameOver,
}

/// Notable things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// A new obstacle joined the set (count includes it)
    ObstacleSpawned { count: usize },
    /// Obstacles sped up; `multiplier` is the new spawn multiplier
    SpeedUp { multiplier: f32 },
    /// The player was hit after surviving `survived`
    Collision { survived: Duration },
}

/// Complete state of one session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the session's obstacle generator was built from
    pub seed: u64,
    pub phase: GamePhase,
    pub player: Player,
    pub obstacles: ObstacleSet,
    pub spawner: RandomSpawner,
    pub difficulty: DifficultyScheduler,
    /// Wall-clock instant the session began
    pub started_at: Instant,
    /// Survival time as of the last tick (frozen once the game is over)
    pub elapsed: Duration,
    /// Frames simulated so far
    pub frames: u64,
}

impl GameState {
    /// Create a running session with one obstacle already spawned
    pub fn new(seed: u64, now: Instant) -> Self {
        let mut spawner = RandomSpawner::new(seed);
        let difficulty = DifficultyScheduler::new(now);
        let mut obstacles = ObstacleSet::new();
        obstacles.add(spawner.spawn(difficulty.speed_multiplier()));

        Self {
            seed,
            phase: GamePhase::Running,
            player: Player::default(),
            obstacles,
            spawner,
            difficulty,
            started_at: now,
            elapsed: Duration::ZERO,
            frames: 0,
        }
    }

    /// Playfield size
    pub fn bounds() -> Vec2 {
        Vec2::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT)
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Whole seconds survived, as shown to the player
    pub fn survived_secs(&self) -> u64 {
        self.elapsed.as_secs()
    }

    pub fn speed_multiplier(&self) -> f32 {
        self.difficulty.speed_multiplier()
    }
}
