//! The player's walker

use super::types::{
    BoundingBox, Direction, Position, PLAYER_SIZE, PLAYER_START, PLAYER_STEP, SCREEN_HEIGHT,
    SCREEN_WIDTH,
};

/// Lives at the start of a game
pub const STARTING_LIVES: u32 = 3;

/// Outcome of a single step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// Player moved (possibly clamped against an edge)
    Moved,
    /// Player stepped past the far side of the road
    ReachedFarSide,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub position: Position,
    pub lives: u32,
    pub score: u32,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    pub fn new() -> Self {
        Self {
            position: PLAYER_START,
            lives: STARTING_LIVES,
            score: 0,
        }
    }

    /// Take one step. Left, up and down clamp to the screen; stepping right
    /// onto or past the far edge is reported rather than clamped.
    pub fn step(&mut self, direction: Direction) -> StepResult {
        let pos = &mut self.position;
        match direction {
            Direction::Right => {
                pos.x += PLAYER_STEP;
                if pos.x >= SCREEN_WIDTH {
                    return StepResult::ReachedFarSide;
                }
            }
            Direction::Left => pos.x = (pos.x - PLAYER_STEP).max(0),
            Direction::Up => pos.y = (pos.y + PLAYER_STEP).min(SCREEN_HEIGHT - PLAYER_SIZE),
            Direction::Down => pos.y = (pos.y - PLAYER_STEP).max(0),
        }
        StepResult::Moved
    }

    pub fn respawn(&mut self) {
        self.position = PLAYER_START;
    }

    /// Lose a life; returns `true` when none are left
    pub fn lose_life(&mut self) -> bool {
        self.lives = self.lives.saturating_sub(1);
        self.lives == 0
    }

    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::new(
            self.position.x,
            self.position.y,
            self.position.x + PLAYER_SIZE,
            self.position.y + PLAYER_SIZE,
        )
    }
}
