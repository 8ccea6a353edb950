//! Dodge the Blocks - a minimal arcade avoidance game
//!
//! Core modules:
//! - `sim`: Simulation (player, obstacles, collisions, difficulty, session state)
//! - `renderer`: WebGPU rectangle + bitmap text rendering
//! - `platform`: Presentation contract and the native winit implementation
//! - `game`: Outer game loop (sessions, game over, restart)

pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::{GameContext, SessionOutcome};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (pixels)
    pub const PLAYFIELD_WIDTH: f32 = 1280.0;
    pub const PLAYFIELD_HEIGHT: f32 = 720.0;

    /// Player is a fixed-size square
    pub const PLAYER_SIZE: f32 = 40.0;
    /// Horizontal distance moved per frame while an arrow key is held
    pub const PLAYER_SPEED: f32 = 5.0;

    /// Obstacle side length range (inclusive, whole pixels)
    pub const OBSTACLE_SIZE_MIN: u32 = 20;
    pub const OBSTACLE_SIZE_MAX: u32 = 50;
    /// Velocity magnitudes an obstacle axis can start with (pixels/frame)
    pub const OBSTACLE_BASE_SPEEDS: [f32; 6] = [-4.0, -3.0, -2.0, 2.0, 3.0, 4.0];

    /// Seconds between obstacle spawns
    pub const ADD_OBSTACLE_INTERVAL: f32 = 5.0;
    /// Seconds between speed escalations
    pub const SPEED_UP_INTERVAL: f32 = 10.0;
    /// Added to the spawn speed multiplier on every escalation
    pub const SPEED_MULTIPLIER_STEP: f32 = 0.2;
    /// Applied to every live obstacle's velocity on every escalation
    pub const ESCALATION_FACTOR: f32 = 1.2;

    /// Frame rate cap
    pub const TARGET_FPS: u32 = 60;

    pub const WINDOW_TITLE: &str = "Dodge the Blocks";
}
