//! Canvas Pong entry point
//!
//! Handles platform-specific initialization and starts the tick loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{KeyboardEvent, Window};

    use canvas_pong::platform::IntervalScheduler;
    use canvas_pong::platform::dom::{self, DomScoreDisplay};
    use canvas_pong::renderer::CanvasSurface;
    use canvas_pong::{Game, SetupError, Settings};

    type WebGame = Game<CanvasSurface, DomScoreDisplay>;

    pub fn run() -> Result<(), SetupError> {
        log::info!("Canvas Pong starting...");

        let window = dom::window()?;
        let document = dom::document(&window)?;
        let canvas = dom::canvas(&document, dom::CANVAS_ID)?;

        // The canvas decides the playfield
        let settings = Settings::load()?
            .with_playfield(canvas.width() as f32, canvas.height() as f32);
        settings.validate()?;

        let surface = CanvasSurface::new(&canvas)?;
        let display = DomScoreDisplay::new(&document)?;
        let game = Rc::new(RefCell::new(Game::new(&settings, surface, display)));

        setup_input_handlers(&window, game.clone());

        let mut scheduler = IntervalScheduler::new(window);
        Game::run_with(game, &settings, &mut scheduler)?;

        log::info!(
            "Canvas Pong running on a {}x{} playfield",
            settings.playfield_width,
            settings.playfield_height
        );
        Ok(())
    }

    fn setup_input_handlers(window: &Window, game: Rc<RefCell<WebGame>>) {
        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if game.borrow_mut().keys_mut().key_down(&event.key()) {
                    // Arrow keys would otherwise scroll the page
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().keys_mut().key_up(&event.key());
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur: key-ups land elsewhere, so drop held keys
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                game.borrow_mut().keys_mut().release_all();
                log::debug!("Released held keys (window blur)");
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    if let Err(e) = wasm_game::run() {
        log::error!("Canvas Pong failed to start: {}", e);
        wasm_bindgen::throw_str(&e.to_string());
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    env_logger::init();

    match native::run() {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("canvas-pong: {}", e);
            std::process::ExitCode::FAILURE
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless runner: same loop and timer cadence, drawing into a recorder
#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::cell::RefCell;
    use std::rc::Rc;

    use canvas_pong::platform::ThreadScheduler;
    use canvas_pong::renderer::CommandRecorder;
    use canvas_pong::sim::Player;
    use canvas_pong::{Game, ScoreBoard, SetupError, Settings};

    /// Ten seconds at the default rate
    const DEFAULT_TICKS: u64 = 600;

    pub fn run() -> Result<(), SetupError> {
        log::info!("Canvas Pong (native, headless) starting...");

        let ticks = match std::env::args().nth(1) {
            Some(arg) => arg.parse::<u64>().map_err(|_| {
                SetupError::InvalidSettings(format!(
                    "tick count must be a whole number, got {:?}",
                    arg
                ))
            })?,
            None => DEFAULT_TICKS,
        };

        let settings = Settings::load()?;
        settings.validate()?;

        let game = Rc::new(RefCell::new(Game::new(
            &settings,
            CommandRecorder::new(),
            ScoreBoard::new(),
        )));
        let mut scheduler = ThreadScheduler::with_limit(ticks);
        Game::run_with(game.clone(), &settings, &mut scheduler)?;

        let game = game.borrow();
        let state = game.state();
        log::info!(
            "Stopped after {} ticks ({} frames drawn)",
            scheduler.ticks_run(),
            game.surface().frames()
        );
        println!(
            "after {} ticks: player one {}, player two {}, ball at ({:.1}, {:.1})",
            state.time_ticks,
            state.score.get(Player::One),
            state.score.get(Player::Two),
            state.ball.pos.x,
            state.ball.pos.y
        );
        Ok(())
    }
}
