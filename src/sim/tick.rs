//! Per-frame session update
//!
//! Order within a frame: player input, obstacle motion, difficulty timers,
//! survival clock, collision check.

use std::time::Instant;

use super::collision::collides;
use super::player::MoveInput;
use super::state::{GameEvent, GamePhase, GameState};

/// Advance a running session by one frame observed at wall-clock `now`.
///
/// Returns what happened this frame. A session that is already over is left
/// untouched.
pub fn tick(state: &mut GameState, input: MoveInput, now: Instant) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.phase == GamePhase::GameOver {
        return events;
    }

    state.frames += 1;

    state.player.apply_input(input);
    debug_assert!(state.player.rect.is_within(GameState::bounds()));
    state.obstacles.advance(GameState::bounds());
    state
        .difficulty
        .update(now, &mut state.obstacles, &mut state.spawner, &mut events);

    state.elapsed = now.saturating_duration_since(state.started_at);

    if collides(&state.player.rect, &state.obstacles) {
        state.phase = GamePhase::GameOver;
        events.push(GameEvent::Collision {
            survived: state.elapsed,
        });
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::obstacle::{Obstacle, ObstacleSet};
    use crate::sim::rect::Rect;
    use glam::Vec2;
    use std::time::Duration;

    const IDLE: MoveInput = MoveInput {
        left: false,
        right: false,
    };

    /// A session whose only obstacle bounces along the top edge, far from
    /// the player's row
    fn safe_state(start: Instant) -> GameState {
        let mut state = GameState::new(12345, start);
        state.obstacles = ObstacleSet::new();
        state.obstacles.add(Obstacle::new(
            Rect::new(10.0, 10.0, 20.0, 20.0),
            Vec2::new(2.0, 0.0),
        ));
        state
    }

    fn frame(start: Instant, n: u32) -> Instant {
        start + Duration::from_secs_f64(n as f64 / 60.0)
    }

    #[test]
    fn test_tick_updates_clock_and_positions() {
        let start = Instant::now();
        let mut state = safe_state(start);

        let events = tick(
            &mut state,
            MoveInput {
                left: true,
                right: false,
            },
            frame(start, 1),
        );

        assert!(events.is_empty());
        assert_eq!(state.frames, 1);
        assert_eq!(state.player.rect.pos.x, 635.0);
        assert_eq!(state.obstacles.as_slice()[0].rect.pos, Vec2::new(12.0, 10.0));
        assert_eq!(state.elapsed, frame(start, 1) - start);
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_collision_ends_session() {
        let start = Instant::now();
        let mut state = GameState::new(1, start);
        state.obstacles = ObstacleSet::new();
        // Will overlap the player (640..680, 640..680) after one step
        state.obstacles.add(Obstacle::new(
            Rect::new(613.0, 633.0, 40.0, 40.0),
            Vec2::new(2.0, 2.0),
        ));

        let now = start + Duration::from_secs(3);
        let events = tick(&mut state, IDLE, now);

        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(
            events,
            vec![GameEvent::Collision {
                survived: Duration::from_secs(3)
            }]
        );
        assert_eq!(state.survived_secs(), 3);
    }

    #[test]
    fn test_game_over_is_terminal() {
        let start = Instant::now();
        let mut state = GameState::new(1, start);
        state.phase = GamePhase::GameOver;
        let snapshot_obstacles = state.obstacles.clone();

        let events = tick(&mut state, IDLE, start + Duration::from_secs(20));

        assert!(events.is_empty());
        assert_eq!(state.frames, 0);
        assert_eq!(state.elapsed, Duration::ZERO);
        assert_eq!(state.obstacles.as_slice(), snapshot_obstacles.as_slice());
    }

    #[test]
    fn test_scheduler_runs_each_frame() {
        let start = Instant::now();
        let mut state = safe_state(start);
        let mut spawned = 0;
        let mut speed_ups = 0;

        // 5.5 seconds of frames: exactly one spawn, no speed-up yet. The
        // spawned obstacle may land on the player, which only stops the loop
        // early after the spawn has been counted.
        for n in 1..=330 {
            for event in tick(&mut state, IDLE, frame(start, n)) {
                match event {
                    GameEvent::ObstacleSpawned { .. } => spawned += 1,
                    GameEvent::SpeedUp { .. } => speed_ups += 1,
                    GameEvent::Collision { .. } => {}
                }
            }
            if state.is_over() {
                break;
            }
        }

        assert_eq!(spawned, 1);
        assert_eq!(speed_ups, 0);
        assert_eq!(state.obstacles.len(), 2);
    }

    #[test]
    fn test_determinism() {
        // Two sessions with the same seed, inputs, and clock stay identical
        let start = Instant::now();
        let mut state1 = GameState::new(99999, start);
        let mut state2 = GameState::new(99999, start);

        for n in 1..=900 {
            let input = MoveInput {
                left: n % 120 < 60,
                right: n % 90 < 30,
            };
            let now = frame(start, n);
            let e1 = tick(&mut state1, input, now);
            let e2 = tick(&mut state2, input, now);
            assert_eq!(e1, e2);
        }

        assert_eq!(state1.phase, state2.phase);
        assert_eq!(state1.player, state2.player);
        assert_eq!(state1.obstacles.as_slice(), state2.obstacles.as_slice());
        assert_eq!(state1.speed_multiplier(), state2.speed_multiplier());
    }
}
