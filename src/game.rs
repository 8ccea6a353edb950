//! Outer game loop
//!
//! `GameContext` is built once at startup and owns everything that outlives
//! a single session: the presentation, the settings, and the master seed
//! generator. Each play-through gets a fresh `GameState`; restarting just
//! goes around the outer loop again.

use glam::Vec2;
use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::platform::{GameKey, Presentation};
use crate::renderer::{Color, colors};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, tick};

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Restart key pressed on the game-over screen
    Restart,
    /// Window closed, or any other key pressed on the game-over screen
    Quit,
}

pub struct GameContext<P: Presentation> {
    pub presentation: P,
    pub settings: Settings,
    seeds: Pcg32,
}

impl<P: Presentation> GameContext<P> {
    pub fn new(presentation: P, settings: Settings) -> Self {
        let master_seed = settings.seed.unwrap_or_else(rand::random);
        info!("Master seed: {}", master_seed);
        Self {
            presentation,
            settings,
            seeds: Pcg32::seed_from_u64(master_seed),
        }
    }

    /// Seed for the next session, drawn from the master generator
    pub fn next_session_seed(&mut self) -> u64 {
        self.seeds.random()
    }

    /// Play sessions until the player quits. Returns the number of sessions.
    pub fn run(&mut self) -> u32 {
        let mut sessions = 0;
        loop {
            let seed = self.next_session_seed();
            let now = self.presentation.now();
            sessions += 1;

            match self.play(GameState::new(seed, now)) {
                SessionOutcome::Restart => info!("Restarting"),
                SessionOutcome::Quit => {
                    info!("Quitting after {} session(s)", sessions);
                    return sessions;
                }
            }
        }
    }

    /// Run one session through to game over and the player's choice
    pub fn play(&mut self, mut state: GameState) -> SessionOutcome {
        info!("Session started (seed {})", state.seed);

        let survived = loop {
            if state.is_over() {
                break state.elapsed;
            }

            let input = self.presentation.poll_input();
            if input.quit_requested {
                return SessionOutcome::Quit;
            }

            let mut hit = None;
            for event in tick(&mut state, input.movement(), input.now) {
                match event {
                    GameEvent::ObstacleSpawned { count } => {
                        debug!("Obstacle spawned ({} in play)", count)
                    }
                    GameEvent::SpeedUp { multiplier } => {
                        info!("Speed up! multiplier now {:.1}", multiplier)
                    }
                    GameEvent::Collision { survived } => {
                        info!(
                            "Game over after {:.2}s ({} obstacles, speed x{:.1}, frame {})",
                            survived.as_secs_f32(),
                            state.obstacles.len(),
                            state.speed_multiplier(),
                            state.frames
                        );
                        hit = Some(survived);
                    }
                }
            }
            if let Some(survived) = hit {
                break survived;
            }

            self.draw_running(&state);
            self.presentation.present();
            self.presentation.wait_for_next_frame();
        };

        self.game_over(survived.as_secs())
    }

    /// Show the final time and wait for a fresh key press.
    ///
    /// Presses made while playing were consumed by their own frame's poll,
    /// so only a press made on this screen answers the prompt.
    fn game_over(&mut self, survived: u64) -> SessionOutcome {
        loop {
            self.draw_game_over(survived);
            self.presentation.present();

            let input = self.presentation.poll_input();
            if input.quit_requested {
                return SessionOutcome::Quit;
            }
            match input.key_pressed {
                Some(GameKey::Restart) => return SessionOutcome::Restart,
                Some(_) => return SessionOutcome::Quit,
                None => {}
            }

            self.presentation.wait_for_next_frame();
        }
    }

    fn draw_running(&mut self, state: &GameState) {
        let p = &mut self.presentation;

        p.draw_rect(&state.player.rect, colors::PLAYER);
        for obstacle in &state.obstacles {
            p.draw_rect(&obstacle.rect, colors::OBSTACLE);
        }

        p.draw_text(
            &format!("Time Survived: {}s", state.survived_secs()),
            Vec2::new(10.0, 10.0),
            colors::TEXT,
        );

        if self.settings.show_fps {
            if let Some(fps) = p.fps() {
                let text = format!("FPS: {}", fps);
                let x = PLAYFIELD_WIDTH - p.text_width(&text) - 10.0;
                p.draw_text(&text, Vec2::new(x, 10.0), colors::TEXT);
            }
        }
    }

    fn draw_game_over(&mut self, survived: u64) {
        let mid = PLAYFIELD_HEIGHT / 2.0;
        self.draw_centered("Game Over!", mid - 60.0, colors::GAME_OVER);
        self.draw_centered(
            &format!("You survived for {} seconds.", survived),
            mid,
            colors::TEXT,
        );
        self.draw_centered(
            "Press R to Restart or any other key to Quit",
            mid + 60.0,
            colors::TEXT,
        );
    }

    fn draw_centered(&mut self, text: &str, y: f32, color: Color) {
        let x = PLAYFIELD_WIDTH / 2.0 - self.presentation.text_width(text) / 2.0;
        self.presentation.draw_text(text, Vec2::new(x, y), color);
    }
}
