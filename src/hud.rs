//! Score read-outs
//!
//! After each scoring hit the loop pushes the new total to a `ScoreDisplay`.
//! On the web that is a pair of DOM elements; `ScoreBoard` keeps the text in
//! memory for the native runner and tests.

use crate::sim::Player;

/// Text output for one score per player
pub trait ScoreDisplay {
    fn show(&mut self, player: Player, score: u32);
}

/// In-memory score display
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    texts: [String; 2],
    updates: u64,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last text shown for `player` (empty until their first point)
    pub fn text(&self, player: Player) -> &str {
        &self.texts[player.index()]
    }

    /// Total `show` calls
    pub fn updates(&self) -> u64 {
        self.updates
    }
}

impl ScoreDisplay for ScoreBoard {
    fn show(&mut self, player: Player, score: u32) {
        self.texts[player.index()] = score.to_string();
        self.updates += 1;
    }
}
