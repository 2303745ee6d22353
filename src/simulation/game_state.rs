//! Game state tracking for the road crossing game
//!
//! This module holds everything the renderer needs to draw a frame: the
//! player, the cars, the level and whether the run is over.

use super::car::SimCar;
use super::player::Player;

/// Score awarded for each crossing
pub const CROSSING_BONUS: u32 = 10;

/// Level a fresh game starts on
pub const STARTING_LEVEL: u32 = 1;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    #[default]
    Running,
    /// Out of lives; only a reset leaves this phase
    GameOver,
}

/// Snapshot of a game in progress
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub player: Player,

    /// One car per lane, ordered left to right
    pub cars: Vec<SimCar>,

    pub level: u32,

    pub phase: GamePhase,
}

impl GameState {
    /// A running game on the starting level with the given cars
    pub fn new(cars: Vec<SimCar>) -> Self {
        Self {
            player: Player::new(),
            cars,
            level: STARTING_LEVEL,
            phase: GamePhase::Running,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Status line shown above the playfield
    pub fn hud_text(&self) -> String {
        format!(
            "Score: {} Lives: {}",
            self.player.score, self.player.lives
        )
    }

    /// Get a summary string for display
    pub fn summary(&self) -> String {
        format!(
            "Level: {} | Score: {} | Lives: {} | Phase: {:?}",
            self.level, self.player.score, self.player.lives, self.phase
        )
    }
}
