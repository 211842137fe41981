use canvas_dino::consts::*;
use canvas_dino::hud::RecordingHud;
use canvas_dino::platform::{InputAction, autopilot_wants_jump};
use canvas_dino::renderer::{DrawCommand, RecordingSurface};
use canvas_dino::sim::GamePhase;
use canvas_dino::{Continuation, Game};

const FRAME_MS: f64 = 1000.0 / 60.0;

fn new_game(seed: u64) -> (Game, RecordingSurface, RecordingHud) {
    let mut game = Game::new(800.0, 300.0, seed);
    let mut hud = RecordingHud::new();
    assert!(game.handle_input(InputAction::Restart, &mut hud));
    (game, RecordingSurface::new(800.0, 300.0), hud)
}

/// Run the autopilot until the loop stops or `max_frames` elapse.
/// Returns the number of frames drawn and the final continuation.
fn autoplay(
    game: &mut Game,
    surface: &mut RecordingSurface,
    hud: &mut RecordingHud,
    start_ms: f64,
    max_frames: u32,
) -> (u32, Continuation) {
    let mut cont = Continuation::Continue;
    let mut frames = 0;
    while frames < max_frames {
        if autopilot_wants_jump(game.state()) {
            game.handle_input(InputAction::Jump, hud);
        }
        cont = game.frame(start_ms + frames as f64 * FRAME_MS, surface, hud);
        frames += 1;

        let state = game.state();
        assert!(state.player.bottom() <= state.ground_y);
        assert!(state.spawn_interval >= SPAWN_INTERVAL_MIN);
        assert!(state.speed >= SCROLL_SPEED_START);
        assert_eq!(surface.commands.first(), Some(&DrawCommand::Clear));

        // Every spawned obstacle is either still ahead of the player or scored
        let unpassed = state.obstacles.iter().filter(|o| !o.passed).count() as u64;
        assert_eq!(state.score, state.obstacles_spawned() as u64 - unpassed);
        assert_eq!(hud.score_text, format!("Score: {}", state.score));

        if cont == Continuation::Stop {
            break;
        }
    }
    (frames, cont)
}

#[test]
fn test_autopilot_run_keeps_invariants() {
    let (mut game, mut surface, mut hud) = new_game(42);
    let (frames, cont) = autoplay(&mut game, &mut surface, &mut hud, 0.0, 3600);

    assert!(frames > 0);
    assert_ne!(game.state().phase, GamePhase::Idle);
    match cont {
        Continuation::Stop => {
            assert_eq!(game.state().phase, GamePhase::GameOver);
            assert!(hud.restart_visible);
            assert!(!game.is_looping());
        }
        Continuation::Continue => {
            assert_eq!(game.state().phase, GamePhase::Running);
            assert!(!hud.restart_visible);
        }
    }
}

#[test]
fn test_same_seed_same_run() {
    let (mut a, mut sa, mut ha) = new_game(7);
    let (mut b, mut sb, mut hb) = new_game(7);
    autoplay(&mut a, &mut sa, &mut ha, 0.0, 2000);
    autoplay(&mut b, &mut sb, &mut hb, 0.0, 2000);

    assert_eq!(a.state().summary(), b.state().summary());
    assert_eq!(sa.commands, sb.commands);
}

#[test]
fn test_restart_after_crash_starts_one_loop() {
    let (mut game, mut surface, mut hud) = new_game(3);

    // One jump, then nothing: the first obstacle ends the run
    game.handle_input(InputAction::Jump, &mut hud);
    let mut t = 0.0;
    while game.frame(t, &mut surface, &mut hud) == Continuation::Continue {
        t += FRAME_MS;
        assert!(t < 600_000.0, "run never ended");
    }
    assert_eq!(game.state().phase, GamePhase::GameOver);
    let texts = surface.texts();
    assert_eq!(texts.len(), 2);
    assert_eq!(texts[0], "GAME OVER");

    // First restart re-arms the loop, a second one while it runs does not
    assert!(game.handle_input(InputAction::Restart, &mut hud));
    assert!(!game.handle_input(InputAction::Restart, &mut hud));
    assert_eq!(game.state().phase, GamePhase::Idle);
    assert_eq!(hud.score_text, "Score: 0");
    assert!(!hud.restart_visible);

    // The fresh run plays normally, including a long gap since the crash
    let (frames, _) = autoplay(&mut game, &mut surface, &mut hud, t + 60_000.0, 600);
    assert!(frames > 0);
    assert_ne!(game.state().phase, GamePhase::Idle);
}

#[test]
fn test_summary_serializes_to_json() {
    let (mut game, mut surface, mut hud) = new_game(11);
    autoplay(&mut game, &mut surface, &mut hud, 0.0, 600);

    let json = serde_json::to_value(game.state().summary()).unwrap();
    assert_eq!(json["score"], game.state().score);
    assert!(json["obstacles_spawned"].is_u64());
    assert!(json["final_speed"].as_f64().unwrap() >= SCROLL_SPEED_START as f64);
    assert!(json["elapsed_ms"].as_f64().unwrap() > 0.0);
}
