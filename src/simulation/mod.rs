//! Standalone road crossing simulation
//!
//! This module contains all the core game logic and can run independently
//! of the Bevy game engine. It can be tested via console without needing to
//! boot up the full game.

mod car;
mod game_state;
mod player;
mod types;
mod world;

pub use car::{generate_cars, speed_range, CarUpdateResult, SimCar};
pub use game_state::{GamePhase, GameState, CROSSING_BONUS, STARTING_LEVEL};
pub use player::{Player, StepResult, STARTING_LIVES};
pub use types::{
    lane_center, window_to_game, BoundingBox, Direction, Position, CAR_DRAW_HALF_WIDTH,
    CAR_HALF_WIDTH, CAR_LENGTH, CAR_SPAWN_MAX_Y, CAR_SPAWN_MIN_Y, CAR_WRAP_Y, CROSSING_RESPAWN_X,
    LANE_WIDTH, NUM_LANES, PLAYER_SIZE, PLAYER_START, PLAYER_STEP, REPLAY_BUTTON, ROAD_LEFT,
    ROAD_RIGHT, SCREEN_HEIGHT, SCREEN_WIDTH,
};
pub use world::{MoveResult, SimWorld, TickResult};
