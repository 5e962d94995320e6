//! Keyboard to paddle mapping
//!
//! Player one steers the top paddle with A/D, player two the bottom paddle
//! with the arrow keys. Holding both directions cancels out.

use crate::sim::{PaddleMove, Player, TickInput};

/// Paddle and direction a key controls, if any
///
/// `key` is a `KeyboardEvent.key` value.
pub fn key_binding(key: &str) -> Option<(Player, PaddleMove)> {
    match key {
        "a" | "A" => Some((Player::One, PaddleMove::Left)),
        "d" | "D" => Some((Player::One, PaddleMove::Right)),
        "ArrowLeft" => Some((Player::Two, PaddleMove::Left)),
        "ArrowRight" => Some((Player::Two, PaddleMove::Right)),
        _ => None,
    }
}

/// Which direction keys are currently held
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    /// `[player][left, right]`
    held: [[bool; 2]; 2],
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press. Returns false for keys the game ignores.
    pub fn key_down(&mut self, key: &str) -> bool {
        self.set(key, true)
    }

    /// Record a key release. Returns false for keys the game ignores.
    pub fn key_up(&mut self, key: &str) -> bool {
        self.set(key, false)
    }

    /// Forget all held keys (e.g. when the page loses focus)
    pub fn release_all(&mut self) {
        self.held = [[false; 2]; 2];
    }

    fn set(&mut self, key: &str, down: bool) -> bool {
        let Some((player, dir)) = key_binding(key) else {
            return false;
        };
        let slot = match dir {
            PaddleMove::Left => 0,
            PaddleMove::Right => 1,
            PaddleMove::Stay => return false,
        };
        self.held[player.index()][slot] = down;
        true
    }

    pub fn paddle_move(&self, player: Player) -> PaddleMove {
        match self.held[player.index()] {
            [true, false] => PaddleMove::Left,
            [false, true] => PaddleMove::Right,
            _ => PaddleMove::Stay,
        }
    }

    /// Input for the next tick
    pub fn tick_input(&self) -> TickInput {
        TickInput {
            paddles: Player::ALL.map(|p| self.paddle_move(p)),
        }
    }
}
