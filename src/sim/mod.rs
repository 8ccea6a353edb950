//! Simulation module
//!
//! All gameplay logic lives here:
//! - Seeded RNG only
//! - Wall-clock instants are passed in, never read
//! - No rendering or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod obstacle;
pub mod player;
pub mod rect;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::collides;
pub use difficulty::DifficultyScheduler;
pub use obstacle::{Obstacle, ObstacleSet};
pub use player::{MoveInput, Player};
pub use rect::Rect;
pub use spawner::{RandomSpawner, SpawnRoll};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::tick;
