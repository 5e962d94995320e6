//! Loop driver
//!
//! A `Game` owns the simulation state and its two output collaborators. Each
//! `step` is one tick: simulate, push changed scores, redraw.

use crate::hud::ScoreDisplay;
use crate::platform::{KeyState, TickScheduler};
use crate::renderer::{DrawSurface, render};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, tick};

/// Game instance holding all state
pub struct Game<S, D> {
    state: GameState,
    surface: S,
    display: D,
    keys: KeyState,
}

impl<S: DrawSurface, D: ScoreDisplay> Game<S, D> {
    pub fn new(settings: &Settings, surface: S, display: D) -> Self {
        Self::from_state(GameState::new(settings), surface, display)
    }

    /// Resume from an existing state (snapshot, test fixture)
    pub fn from_state(state: GameState, surface: S, display: D) -> Self {
        Self {
            state,
            surface,
            display,
            keys: KeyState::new(),
        }
    }

    /// Run one tick and redraw
    pub fn step(&mut self) -> Vec<GameEvent> {
        let input = self.keys.tick_input();
        let events = tick(&mut self.state, &input);

        for event in &events {
            if let GameEvent::PaddleHit { player, score } = *event {
                self.display.show(player, score);
            }
        }

        render(&self.state, &mut self.surface);
        events
    }

    /// Redraw without advancing
    pub fn redraw(&mut self) {
        render(&self.state, &mut self.surface);
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn keys_mut(&mut self) -> &mut KeyState {
        &mut self.keys
    }
}

impl<S, D> Game<S, D>
where
    S: DrawSurface + 'static,
    D: ScoreDisplay + 'static,
{
    /// Hand a shared game to a timer, ticking it at the settings' rate
    ///
    /// Key handlers keep their own clone of the `Rc` to update held keys
    /// between ticks.
    pub fn run_with<T: TickScheduler>(
        game: std::rc::Rc<std::cell::RefCell<Self>>,
        settings: &Settings,
        scheduler: &mut T,
    ) -> Result<(), crate::error::SetupError> {
        settings.validate()?;
        let interval = settings.tick_interval()?;
        log::info!(
            "Starting loop at {} ticks/s ({:?} per tick)",
            settings.tick_rate,
            interval
        );
        scheduler.start(interval, move || {
            game.borrow_mut().step();
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use glam::Vec2;

    use super::*;
    use crate::error::SetupError;
    use crate::hud::ScoreBoard;
    use crate::renderer::{CommandRecorder, DrawCommand};
    use crate::sim::Player;

    type TestGame = Game<CommandRecorder, ScoreBoard>;

    fn new_game() -> TestGame {
        Game::new(&Settings::default(), CommandRecorder::new(), ScoreBoard::new())
    }

    /// Timer that stores the callback and fires it on demand
    #[derive(Default)]
    struct ManualScheduler {
        interval: Option<Duration>,
        callback: Option<Box<dyn FnMut()>>,
    }

    impl ManualScheduler {
        fn fire(&mut self, times: usize) {
            let callback = self.callback.as_mut().expect("not started");
            for _ in 0..times {
                callback();
            }
        }
    }

    impl TickScheduler for ManualScheduler {
        fn start<F>(&mut self, interval: Duration, on_tick: F) -> Result<(), SetupError>
        where
            F: FnMut() + 'static,
        {
            self.interval = Some(interval);
            self.callback = Some(Box::new(on_tick));
            Ok(())
        }
    }

    #[test]
    fn test_step_simulates_then_renders() {
        let mut game = new_game();

        let events = game.step();

        assert!(events.is_empty());
        assert_eq!(game.state().ball.pos, Vec2::new(402.0, 257.0));
        assert_eq!(game.surface().frames(), 1);
        assert!(game.surface().commands().contains(&DrawCommand::FillArc {
            center: Vec2::new(402.0, 257.0),
            radius: 5.0,
            start_angle: 0.0,
            end_angle: std::f32::consts::TAU,
        }));
    }

    #[test]
    fn test_step_pushes_scores_to_display() {
        let mut state = GameState::new(&Settings::default());
        state.ball.pos = Vec2::new(398.0, 14.0);
        state.ball.vel = Vec2::new(2.0, -7.0);
        let mut game = Game::from_state(state, CommandRecorder::new(), ScoreBoard::new());

        let events = game.step();

        assert_eq!(
            events,
            vec![GameEvent::PaddleHit {
                player: Player::One,
                score: 1
            }]
        );
        assert_eq!(game.display().text(Player::One), "1");
        assert_eq!(game.display().text(Player::Two), "");
        assert_eq!(game.display().updates(), 1);
    }

    #[test]
    fn test_display_untouched_without_points() {
        let mut game = new_game();
        for _ in 0..10 {
            game.step();
        }
        assert_eq!(game.display().updates(), 0);
    }

    #[test]
    fn test_held_keys_move_paddles() {
        let mut game = new_game();
        game.keys_mut().key_down("d");

        game.step();
        game.step();
        assert_eq!(game.state().paddle(Player::One).pos.x, 387.0);

        game.keys_mut().key_up("d");
        game.step();
        assert_eq!(game.state().paddle(Player::One).pos.x, 387.0);
    }

    #[test]
    fn test_redraw_is_idempotent() {
        let mut game = new_game();
        game.step();
        let first = game.surface().commands().to_vec();

        game.redraw();
        assert_eq!(game.surface().commands(), first.as_slice());
        assert_eq!(game.state().time_ticks, 1);
    }

    #[test]
    fn test_run_with_registers_one_timer() {
        let game = Rc::new(RefCell::new(new_game()));
        let mut scheduler = ManualScheduler::default();

        Game::run_with(game.clone(), &Settings::default(), &mut scheduler).unwrap();

        let interval = scheduler.interval.unwrap();
        assert!((interval.as_secs_f64() - 1.0 / 60.0).abs() < 1e-6);
        assert_eq!(game.borrow().state().time_ticks, 0);

        scheduler.fire(3);
        assert_eq!(game.borrow().state().time_ticks, 3);
        assert_eq!(game.borrow().state().ball.pos, Vec2::new(406.0, 271.0));
    }

    #[test]
    fn test_run_with_rejects_invalid_settings() {
        let game = Rc::new(RefCell::new(new_game()));
        let mut scheduler = ManualScheduler::default();
        let settings = Settings {
            tick_rate: -1.0,
            ..Default::default()
        };

        let result = Game::run_with(game, &settings, &mut scheduler);

        assert!(matches!(result, Err(SetupError::InvalidSettings(_))));
        assert!(scheduler.callback.is_none());
    }
}
