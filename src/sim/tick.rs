//! Fixed timestep simulation tick
//!
//! One call advances the ball by exactly one velocity step. There is no delta
//! time: ball speed is in pixels per tick, so game speed follows the tick rate.

use super::state::{Axis, GameEvent, GameState, Player};

/// Horizontal intent for one paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PaddleMove {
    #[default]
    Stay,
    Left,
    Right,
}

impl PaddleMove {
    fn direction(self) -> f32 {
        match self {
            PaddleMove::Stay => 0.0,
            PaddleMove::Left => -1.0,
            PaddleMove::Right => 1.0,
        }
    }
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Indexed by `Player::index`
    pub paddles: [PaddleMove; 2],
}

impl TickInput {
    pub fn paddle(&self, player: Player) -> PaddleMove {
        self.paddles[player.index()]
    }
}

/// Advance the game state by one tick, returning what happened
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    state.time_ticks += 1;

    // Paddles first, so this tick's hits see this tick's input
    let field = state.playfield;
    let speed = state.rules.paddle_speed;
    for player in Player::ALL {
        let dx = input.paddle(player).direction() * speed;
        if dx != 0.0 {
            state.paddle_mut(player).slide(dx, &field);
        }
    }

    state.ball.advance();

    // Only one axis reflects per tick; horizontal wins a corner
    let ball = &mut state.ball;
    if field.outside_horizontally(ball.pos) {
        ball.vel.x = -ball.vel.x;
        events.push(GameEvent::WallBounce {
            axis: Axis::Horizontal,
        });
        log::trace!("Wall bounce (horizontal) at {:?}", ball.pos);
    } else if field.outside_vertically(ball.pos) {
        ball.vel.y = -ball.vel.y;
        events.push(GameEvent::WallBounce {
            axis: Axis::Vertical,
        });
        log::trace!("Wall bounce (vertical) at {:?}", ball.pos);
    }

    let mut scored = false;
    for player in Player::ALL {
        if state
            .rules
            .collision
            .hits(player, &state.ball, state.paddle(player))
        {
            state.ball.vel.y = -state.ball.vel.y;
            let score = state.score.award(player);
            log::debug!("Paddle hit: {} now has {}", player.as_str(), score);
            events.push(GameEvent::PaddleHit { player, score });
            scored = true;
        }
    }

    if scored && state.rules.reset_after_point {
        state.ball.pos = field.center();
        events.push(GameEvent::BallReset);
    }

    events
}
