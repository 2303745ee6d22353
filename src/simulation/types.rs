//! Core types and layout constants for the road crossing simulation
//!
//! These are standalone types that don't depend on Bevy. Coordinates are
//! integer pixels with the origin at the bottom-left of the playfield and
//! `y` growing upwards.

/// Playfield width in pixels
pub const SCREEN_WIDTH: i32 = 500;

/// Playfield height in pixels
pub const SCREEN_HEIGHT: i32 = 500;

/// Left edge of the road (the left verge is `0..ROAD_LEFT`)
pub const ROAD_LEFT: i32 = 50;

/// Right edge of the road (the right verge is `ROAD_RIGHT..SCREEN_WIDTH`)
pub const ROAD_RIGHT: i32 = 450;

/// Number of lanes across the road, one car per lane
pub const NUM_LANES: usize = 10;

/// Width of a single lane
pub const LANE_WIDTH: i32 = (ROAD_RIGHT - ROAD_LEFT) / NUM_LANES as i32;

/// Length of a car along its lane
pub const CAR_LENGTH: i32 = 40;

/// Half width of the band around the lane centre a car occupies for collisions
pub const CAR_HALF_WIDTH: i32 = 20;

/// Half width of a car as drawn (slightly narrower than its hit band)
pub const CAR_DRAW_HALF_WIDTH: i32 = 15;

/// Lowest spawn height for a freshly generated car
pub const CAR_SPAWN_MIN_Y: i32 = -500;

/// Highest spawn height for a freshly generated car
pub const CAR_SPAWN_MAX_Y: i32 = 0;

/// Height a car re-enters from after leaving the top of the screen
pub const CAR_WRAP_Y: i32 = -CAR_LENGTH;

/// Side of the player's square
pub const PLAYER_SIZE: i32 = 25;

/// Distance covered by one move
pub const PLAYER_STEP: i32 = 25;

/// Where the player starts a game and respawns after a hit
pub const PLAYER_START: Position = Position::new(5, 200);

/// Where the player lands horizontally after a crossing (the `y` is kept)
pub const CROSSING_RESPAWN_X: i32 = ROAD_LEFT;

/// Replay button region in game coordinates
pub const REPLAY_BUTTON: BoundingBox = BoundingBox::new(460, 470, 480, 490);

/// An integer position on the playfield
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Direction of a player move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward the far side of the road; reaching the edge completes a crossing
    Right,
    Left,
    Up,
    Down,
}

/// An axis-aligned rectangle with inclusive edges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl BoundingBox {
    pub const fn new(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Whether the two boxes share at least one point (touching edges count)
    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        self.min_x <= other.max_x
            && other.min_x <= self.max_x
            && self.min_y <= other.max_y
            && other.min_y <= self.max_y
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        (self.min_x..=self.max_x).contains(&x) && (self.min_y..=self.max_y).contains(&y)
    }
}

/// Convert a window position (origin top-left, y down) to game coordinates
pub fn window_to_game(x: i32, y: i32) -> Position {
    Position::new(x, SCREEN_HEIGHT - y)
}

/// Centre `x` of the given lane
pub const fn lane_center(lane: usize) -> i32 {
    ROAD_LEFT + lane as i32 * LANE_WIDTH + LANE_WIDTH / 2
}
