//! Frame loop
//!
//! The host calls `Game::frame` once per display refresh with its timestamp
//! and schedules the next call only while `frame` answers
//! `Continuation::Continue`. Input handlers call `Game::jump` and
//! `Game::reset` directly between frames.

use crate::consts::MAX_FRAME_DELTA_MS;
use crate::hud::Hud;
use crate::platform::InputAction;
use crate::renderer::{Surface, draw_scene};
use crate::sim::{self, GameEvent, GameState};

/// Whether the host should request another frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuation {
    Continue,
    Stop,
}

/// Turns host timestamps (ms) into sanitized elapsed time
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the previous timestamp; the next frame reports zero elapsed
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Milliseconds since the previous call
    ///
    /// The first call after a reset returns 0. Negative, non-finite and
    /// absurdly large deltas also return 0.
    pub fn elapsed(&mut self, timestamp: f64) -> f32 {
        if !timestamp.is_finite() {
            log::warn!("ignoring non-finite frame timestamp");
            return 0.0;
        }
        let Some(last) = self.last.replace(timestamp) else {
            return 0.0;
        };
        let delta = timestamp - last;
        if (0.0..=MAX_FRAME_DELTA_MS).contains(&delta) {
            delta as f32
        } else {
            log::debug!("discarding frame delta of {:.1}ms", delta);
            0.0
        }
    }
}

/// One game session: the current run plus its frame clock
pub struct Game {
    state: GameState,
    clock: FrameClock,
    /// True while the host has a frame callback outstanding
    looping: bool,
}

impl Game {
    /// A new idle game. The loop is not armed until the first `reset`.
    pub fn new(viewport_width: f32, viewport_height: f32, seed: u64) -> Self {
        Self {
            state: GameState::new(viewport_width, viewport_height, seed),
            clock: FrameClock::new(),
            looping: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    /// Jump input. Starts the run if idle; ignored after game over.
    pub fn jump(&mut self) -> bool {
        sim::jump(&mut self.state)
    }

    /// Throw away the current run and start a fresh idle one
    ///
    /// Returns true when the host must schedule a frame. A loop that is
    /// still running is left alone.
    pub fn reset<H: Hud + ?Sized>(&mut self, hud: &mut H) -> bool {
        if self.state.phase.is_over() {
            log::info!("restarting after score {}", self.state.score);
        }
        self.state.restart();
        self.clock.reset();
        hud.set_score(0);
        hud.set_restart_visible(false);

        let rearm = !self.looping;
        self.looping = true;
        rearm
    }

    /// Apply a mapped input. Returns true when the host must schedule a frame.
    pub fn handle_input<H: Hud + ?Sized>(&mut self, action: InputAction, hud: &mut H) -> bool {
        match action {
            InputAction::Jump => {
                self.jump();
                false
            }
            InputAction::Restart => self.reset(hud),
        }
    }

    /// Run one frame: time, update, draw, continuation
    pub fn frame<S, H>(&mut self, timestamp: f64, surface: &mut S, hud: &mut H) -> Continuation
    where
        S: Surface + ?Sized,
        H: Hud + ?Sized,
    {
        let elapsed = self.clock.elapsed(timestamp);

        for event in sim::advance(&mut self.state, elapsed) {
            match event {
                GameEvent::Scored { score } => hud.set_score(score),
                GameEvent::Crashed { .. } => self.log_summary(),
                GameEvent::Spawned => {}
            }
        }

        draw_scene(surface, &self.state);

        if self.state.phase.is_over() {
            hud.set_restart_visible(true);
            self.looping = false;
            Continuation::Stop
        } else {
            self.looping = true;
            Continuation::Continue
        }
    }

    fn log_summary(&self) {
        match serde_json::to_string(&self.state.summary()) {
            Ok(json) => log::info!("run summary: {}", json),
            Err(e) => log::warn!("failed to serialize run summary: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::hud::RecordingHud;
    use crate::renderer::RecordingSurface;
    use crate::sim::GamePhase;

    #[test]
    fn test_clock_first_frame_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.elapsed(1234.0), 0.0);
        assert_eq!(clock.elapsed(1250.0), 16.0);
        clock.reset();
        assert_eq!(clock.elapsed(5000.0), 0.0);
        assert_eq!(clock.elapsed(5010.0), 10.0);
    }

    #[test]
    fn test_clock_rejects_bad_deltas() {
        let mut clock = FrameClock::new();
        clock.elapsed(1000.0);
        // Backwards
        assert_eq!(clock.elapsed(900.0), 0.0);
        // Resumes from the new cursor
        assert_eq!(clock.elapsed(916.0), 16.0);
        // Absurdly large
        assert_eq!(clock.elapsed(916.0 + MAX_FRAME_DELTA_MS + 1.0), 0.0);
        // Non-finite timestamps leave the cursor untouched
        let cursor = 916.0 + MAX_FRAME_DELTA_MS + 1.0;
        assert_eq!(clock.elapsed(f64::NAN), 0.0);
        assert_eq!(clock.elapsed(cursor + 20.0), 20.0);
    }

    fn started_game() -> (Game, RecordingSurface, RecordingHud) {
        let mut game = Game::new(800.0, 300.0, 21);
        let mut hud = RecordingHud::new();
        assert!(game.reset(&mut hud));
        (game, RecordingSurface::new(800.0, 300.0), hud)
    }

    #[test]
    fn test_reset_arms_loop_once() {
        let (mut game, mut surface, mut hud) = started_game();
        assert!(game.is_looping());
        assert_eq!(hud.score_text, "Score: 0");
        assert!(!hud.restart_visible);

        // Loop still running: no second loop
        assert_eq!(game.frame(0.0, &mut surface, &mut hud), Continuation::Continue);
        assert!(!game.reset(&mut hud));
    }

    #[test]
    fn test_handle_input() {
        let (mut game, mut surface, mut hud) = started_game();
        assert!(!game.handle_input(InputAction::Jump, &mut hud));
        assert_eq!(game.state().phase, GamePhase::Running);

        game.frame(0.0, &mut surface, &mut hud);
        // Restart while the loop runs resets without asking for a new loop
        assert!(!game.handle_input(InputAction::Restart, &mut hud));
        assert_eq!(game.state().phase, GamePhase::Idle);
    }

    #[test]
    fn test_idle_frames_draw_static_scene() {
        let (mut game, mut surface, mut hud) = started_game();
        for i in 0..120 {
            let cont = game.frame(i as f64 * 16.0, &mut surface, &mut hud);
            assert_eq!(cont, Continuation::Continue);
        }
        assert_eq!(game.state().phase, GamePhase::Idle);
        assert!(game.state().obstacles.is_empty());
        assert_eq!(surface.frames, 120);
        assert_eq!(hud.score_updates, 1);
    }

    #[test]
    fn test_game_over_stops_loop_and_reset_restores() {
        let (mut game, mut surface, mut hud) = started_game();
        game.jump();

        // Never jump again: the first obstacle ends the run
        let mut t = 0.0;
        let mut frames = 0;
        while game.frame(t, &mut surface, &mut hud) == Continuation::Continue {
            t += 16.0;
            frames += 1;
            assert!(frames < 10_000, "run never ended");
        }
        assert_eq!(game.state().phase, GamePhase::GameOver);
        assert!(!game.is_looping());
        assert!(hud.restart_visible);
        assert!(surface.texts().contains(&"GAME OVER".to_string()));

        // Jumping after game over does nothing
        assert!(!game.jump());
        assert_eq!(game.state().phase, GamePhase::GameOver);

        // Reset re-arms the stopped loop and zeroes the run
        assert!(game.reset(&mut hud));
        let state = game.state();
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.score, 0);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.spawn_interval, SPAWN_INTERVAL_START);
        assert_eq!(state.speed, SCROLL_SPEED_START);
        assert_eq!(state.spawn_accumulator, 0.0);
        assert!(state.player.on_ground);
        assert_eq!(hud.score_text, "Score: 0");
        assert!(!hud.restart_visible);

        // First frame after reset has zero elapsed time
        assert_eq!(game.frame(t + 500.0, &mut surface, &mut hud), Continuation::Continue);
    }

    #[test]
    fn test_long_frame_still_collides() {
        let (mut game, mut surface, mut hud) = started_game();
        game.jump();
        let mut t = 0.0;
        while !game.state().player.on_ground {
            game.frame(t, &mut surface, &mut hud);
            t += 16.0;
        }
        game.state.obstacles.clear();

        let player_right = game.state.player.rect().right();
        let id = game.state.next_entity_id();
        let mut ob = sim::spawn_obstacle(&mut game.state.rng, id, 800.0, game.state.ground_y);
        ob.pos.x = player_right + 5.8;
        ob.size.x = 26.0;
        game.state.obstacles.push(ob);

        // Half a second in one frame, e.g. after a GC pause
        assert_eq!(game.frame(t + 500.0, &mut surface, &mut hud), Continuation::Stop);
        assert_eq!(game.state().phase, GamePhase::GameOver);
        assert_eq!(game.state().score, 0);
        assert!(hud.restart_visible);

        // The frame painted exactly the scene for the final state
        let mut expected = RecordingSurface::new(800.0, 300.0);
        draw_scene(&mut expected, game.state());
        assert_eq!(surface.commands, expected.commands);
    }

    #[test]
    fn test_score_sink_follows_each_point() {
        let (mut game, mut surface, mut hud) = started_game();
        game.jump();

        let mut t = 0.0;
        let mut last_score = 0;
        loop {
            // Hop whenever an obstacle gets close
            let player_x = game.state().player.pos.x;
            if game
                .state()
                .obstacles
                .iter()
                .any(|o| !o.passed && o.pos.x - player_x < 70.0 && o.pos.x > player_x)
            {
                game.jump();
            }
            let cont = game.frame(t, &mut surface, &mut hud);
            let score = game.state().score;
            if score != last_score {
                assert_eq!(score, last_score + 1);
                assert_eq!(hud.score_text, format!("Score: {}", score));
                last_score = score;
            }
            t += 16.0;
            if cont == Continuation::Stop || t > 120_000.0 {
                break;
            }
        }
        // Initial reset plus one update per point
        assert_eq!(hud.score_updates as u64, 1 + game.state().score);
    }
}
