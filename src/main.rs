//! Canvas Dino entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        AddEventListenerOptions, Document, HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent,
    };

    use canvas_dino::hud::DomHud;
    use canvas_dino::platform::{InputAction, action_for_key, should_prevent_default};
    use canvas_dino::renderer::{CanvasSurface, Surface};
    use canvas_dino::{Continuation, Game, Settings};

    const CANVAS_ID: &str = "gameCanvas";
    const SCORE_ID: &str = "score";
    const RESTART_ID: &str = "restartBtn";

    /// Everything the frame callback and input handlers share
    struct App {
        game: Game,
        surface: CanvasSurface,
        hud: DomHud,
    }

    type SharedApp = Rc<RefCell<App>>;

    /// Apply an input, scheduling a frame if the game asks for one
    fn dispatch(app: &SharedApp, action: InputAction) {
        let rearm = {
            let mut guard = app.borrow_mut();
            let App { game, hud, .. } = &mut *guard;
            game.handle_input(action, hud)
        };
        if rearm {
            request_animation_frame(app.clone());
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();

        let window = web_sys::window().ok_or("no window")?;
        let query = window.location().search().unwrap_or_default();
        let settings = Settings::from_query(&query);
        console_log::init_with_level(settings.level())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Canvas Dino starting with settings {}", settings.to_json());

        let document = window.document().ok_or("no document")?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .ok_or("no canvas")?
            .dyn_into()?;

        let surface = CanvasSurface::new(&canvas)?;
        let hud = DomHud::new(&document, SCORE_ID, RESTART_ID)?;

        let seed = settings.seed_or(js_sys::Date::now() as u64);
        let game = Game::new(surface.width(), surface.height(), seed);
        log::info!(
            "Game initialized with seed {} ({}x{})",
            seed,
            surface.width(),
            surface.height()
        );

        let app = Rc::new(RefCell::new(App { game, surface, hud }));

        setup_input_handlers(&canvas, app.clone())?;
        setup_restart_button(&document, app.clone())?;

        // The first reset arms the frame loop
        dispatch(&app, InputAction::Restart);

        log::info!("Canvas Dino running!");
        Ok(())
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: SharedApp) -> Result<(), JsValue> {
        // Keyboard
        {
            let app = app.clone();
            let document = web_sys::window()
                .and_then(|w| w.document())
                .ok_or("no document")?;
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let (code, key) = (event.code(), event.key());
                if should_prevent_default(&code, &key) {
                    event.prevent_default();
                }
                let phase = app.borrow().game.state().phase;
                if let Some(action) = action_for_key(&code, &key, phase) {
                    dispatch(&app, action);
                }
            });
            document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Mouse press (jump)
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                dispatch(&app, InputAction::Jump);
            });
            canvas.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch start (jump); non-passive so scrolling can be suppressed
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                dispatch(&app, InputAction::Jump);
            });
            let options = AddEventListenerOptions::new();
            options.set_passive(false);
            canvas.add_event_listener_with_callback_and_add_event_listener_options(
                "touchstart",
                closure.as_ref().unchecked_ref(),
                &options,
            )?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_restart_button(document: &Document, app: SharedApp) -> Result<(), JsValue> {
        let btn = document.get_element_by_id(RESTART_ID).ok_or("no restart button")?;
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            dispatch(&app, InputAction::Restart);
            log::info!("Game restarted");
        });
        btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(app: SharedApp) {
        let Some(window) = web_sys::window() else {
            log::error!("no window to schedule a frame on");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(app: SharedApp, time: f64) {
        let continuation = {
            let mut guard = app.borrow_mut();
            let App { game, surface, hud } = &mut *guard;
            game.frame(time, surface, hud)
        };

        if continuation == Continuation::Continue {
            request_animation_frame(app);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        web_sys::console::error_1(&e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use canvas_dino::Settings;

    let settings = Settings::from_env();
    env_logger::Builder::new()
        .filter_level(settings.level().to_level_filter())
        .parse_default_env()
        .init();

    log::info!("Canvas Dino (native) starting with settings {}", settings.to_json());
    log::info!("Native mode runs a headless autopilot - run with `trunk serve` for the web version");

    headless::run(&settings);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::time::{SystemTime, UNIX_EPOCH};

    use canvas_dino::hud::RecordingHud;
    use canvas_dino::platform::{InputAction, autopilot_wants_jump};
    use canvas_dino::renderer::RecordingSurface;
    use canvas_dino::{Continuation, Game, Settings};

    const VIEWPORT: (f32, f32) = (800.0, 300.0);
    const FRAME_MS: f64 = 1000.0 / 60.0;

    /// Drive the frame loop at 60 Hz with the autopilot until the run ends
    /// or the frame budget runs out
    pub fn run(settings: &Settings) {
        let now_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default();
        let seed = settings.seed_or(now_ms);

        let mut game = Game::new(VIEWPORT.0, VIEWPORT.1, seed);
        let mut surface = RecordingSurface::new(VIEWPORT.0, VIEWPORT.1);
        let mut hud = RecordingHud::new();
        game.handle_input(InputAction::Restart, &mut hud);

        let mut frames = 0;
        while frames < settings.demo_frames {
            if autopilot_wants_jump(game.state()) {
                game.handle_input(InputAction::Jump, &mut hud);
            }
            let continuation = game.frame(frames as f64 * FRAME_MS, &mut surface, &mut hud);
            frames += 1;
            if continuation == Continuation::Stop {
                break;
            }
        }

        let state = game.state();
        log::info!(
            "stopped after {} frames in phase {:?} ({})",
            frames,
            state.phase,
            hud.score_text
        );
        match serde_json::to_string_pretty(&state.summary()) {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("failed to serialize run summary: {}", e),
        }
    }
}
