//! Main simulation world that ties everything together
//!
//! This is the entry point for running the road crossing game without any
//! Bevy dependencies. The world owns the game state and the random source
//! used to generate cars; callers drive it one frame at a time.

use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::car::{generate_cars, CarUpdateResult};
use super::game_state::{GamePhase, GameState, CROSSING_BONUS, STARTING_LEVEL};
use super::player::{Player, StepResult};
use super::types::{Direction, CROSSING_RESPAWN_X, REPLAY_BUTTON};
use crate::render::{draw_scene, Canvas, GlyphPalette};

/// Result of a player move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// Move was dropped because the game is over
    Ignored,
    Moved,
    /// Player reached the far side and the next level began
    Crossed,
}

/// Result of a simulation tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickResult {
    /// Nothing moved because the game is over
    Idle,
    Continue,
    /// A car hit the player and lives remain
    Collision,
    /// A car took the last life
    GameOver,
}

/// The main simulation world
#[derive(Debug, Clone)]
pub struct SimWorld<R = StdRng> {
    state: GameState,

    /// Source of car spawn heights and speeds
    rng: R,

    /// Frames simulated since the world was created
    pub ticks: u64,
}

impl Default for SimWorld<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl SimWorld<StdRng> {
    /// Create a new world seeded from the operating system
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Create a new world with a seeded RNG for reproducible games
    pub fn new_with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SimWorld<R> {
    /// Start a fresh game drawing cars from `rng`
    pub fn with_rng(mut rng: R) -> Self {
        let cars = generate_cars(STARTING_LEVEL, &mut rng);
        Self::from_state(GameState::new(cars), rng)
    }

    /// Resume from an existing state, e.g. a hand-built scenario
    pub fn from_state(state: GameState, rng: R) -> Self {
        Self {
            state,
            rng,
            ticks: 0,
        }
    }

    /// Read-only view for renderers
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    /// Move the player one step in `direction`
    pub fn move_player(&mut self, direction: Direction) -> MoveResult {
        if self.state.is_game_over() {
            return MoveResult::Ignored;
        }

        match self.state.player.step(direction) {
            StepResult::Moved => MoveResult::Moved,
            StepResult::ReachedFarSide => {
                self.complete_crossing();
                MoveResult::Crossed
            }
        }
    }

    fn complete_crossing(&mut self) {
        let state = &mut self.state;
        state.player.position.x = CROSSING_RESPAWN_X;
        state.player.score += CROSSING_BONUS;
        state.level += 1;
        state.cars = generate_cars(state.level, &mut self.rng);

        info!(
            "Crossing complete: level {} (score {})",
            state.level, state.player.score
        );
        debug!("Generated {} cars for level {}", state.cars.len(), state.level);
    }

    /// Advance every car by one frame, then resolve collisions
    pub fn tick(&mut self) -> TickResult {
        if self.state.is_game_over() {
            return TickResult::Idle;
        }

        self.ticks += 1;

        for (lane, car) in self.state.cars.iter_mut().enumerate() {
            if car.update() == CarUpdateResult::Wrapped {
                trace!("Car in lane {} wrapped on tick {}", lane, self.ticks);
            }
        }

        if !self.check_collision() {
            return TickResult::Continue;
        }

        if self.state.is_game_over() {
            TickResult::GameOver
        } else {
            TickResult::Collision
        }
    }

    /// Test the player against every car. The first hit costs a life and
    /// sends the player back to the start; score and level are kept.
    /// Once the game is over nothing is tested and `false` is returned.
    pub fn check_collision(&mut self) -> bool {
        if self.state.is_game_over() {
            return false;
        }

        let player_box = self.state.player.bounds();
        let Some(lane) = self
            .state
            .cars
            .iter()
            .position(|car| car.bounds().overlaps(&player_box))
        else {
            return false;
        };

        let player = &mut self.state.player;
        let out_of_lives = player.lose_life();
        player.respawn();
        debug!(
            "Collision with car in lane {} ({} lives left)",
            lane, player.lives
        );

        if out_of_lives {
            self.state.phase = GamePhase::GameOver;
            info!("Game over! Final score: {}", player.score);
        }

        true
    }

    /// Start a new game from level 1, whatever the current phase
    pub fn reset(&mut self) {
        let state = &mut self.state;
        state.player = Player::new();
        state.level = STARTING_LEVEL;
        state.phase = GamePhase::Running;
        state.cars = generate_cars(STARTING_LEVEL, &mut self.rng);
        info!("Game reset");
    }

    /// Handle a click in game coordinates; only the replay button reacts.
    /// Returns `true` when the game was reset.
    pub fn click(&mut self, x: i32, y: i32) -> bool {
        if REPLAY_BUTTON.contains(x, y) {
            self.reset();
            true
        } else {
            false
        }
    }

    /// Print a summary of the world state
    pub fn print_summary(&self) {
        println!("=== Road Crossing Summary ===");
        println!("Tick: {}", self.ticks);
        println!("{}", self.state.summary());
        println!(
            "Player: ({}, {})",
            self.state.player.position.x, self.state.player.position.y
        );

        println!("--- Cars ---");
        for (lane, car) in self.state.cars.iter().enumerate() {
            println!(
                "  Lane {}: x={}, y={}, speed={}",
                lane, car.position.x, car.position.y, car.speed
            );
        }
    }

    /// Draw a visual map of the playfield in the terminal
    pub fn draw_map(&self) {
        let canvas = self.map_canvas();

        println!("\n=== Road Map ===");
        println!("Legend: P=Player, C=Car, |=Lane, #=Verge, @=Replay");
        println!("{}", self.state.hud_text());
        print!("{}", canvas.to_text());
        println!();
    }

    /// The terminal map as a glyph canvas, one cell per 10x10 pixels
    pub fn map_canvas(&self) -> Canvas<char> {
        draw_scene(&GlyphPalette, &self.state)
    }
}
