//! Game mechanics validation test
//!
//! This test validates that the game rules work correctly through the public
//! `SimWorld` API.

use rand::rngs::StdRng;
use rand::SeedableRng;

use road_crossing::simulation::{
    lane_center, Direction, GamePhase, GameState, MoveResult, Position, SimCar, SimWorld,
    TickResult, CAR_SPAWN_MIN_Y, CAR_WRAP_Y, CROSSING_BONUS, CROSSING_RESPAWN_X, NUM_LANES,
    PLAYER_START, PLAYER_STEP, SCREEN_HEIGHT, SCREEN_WIDTH, STARTING_LIVES,
};

fn world_with(state: GameState) -> SimWorld {
    SimWorld::from_state(state, StdRng::seed_from_u64(42))
}

/// A world with a single parked car sitting on the player's start
fn world_with_car_on_player() -> SimWorld {
    let mut state = GameState::new(vec![SimCar::new(Position::new(lane_center(0), 190), 0)]);
    state.player.position = Position::new(lane_center(0), 200);
    world_with(state)
}

#[test]
fn test_game_initialization() {
    let world = SimWorld::new_with_seed(1);
    let state = world.state();

    assert_eq!(state.phase, GamePhase::Running);
    assert_eq!(state.player.lives, STARTING_LIVES);
    assert_eq!(state.player.score, 0);
    assert_eq!(state.level, 1);
    assert_eq!(state.player.position, PLAYER_START);
    assert_eq!(state.cars.len(), NUM_LANES);
}

#[test]
fn test_crossings_raise_level_and_score() {
    let mut world = SimWorld::new_with_seed(3);
    let steps_to_cross = ((SCREEN_WIDTH - CROSSING_RESPAWN_X) + PLAYER_STEP - 1) / PLAYER_STEP;

    for n in 1..=4u32 {
        let mut result = MoveResult::Moved;
        let mut steps = 0;
        while result != MoveResult::Crossed {
            result = world.move_player(Direction::Right);
            steps += 1;
            assert!(steps <= 40, "player never reached the far side");
        }
        if n > 1 {
            assert_eq!(steps, steps_to_cross);
        }

        let state = world.state();
        assert_eq!(state.level, 1 + n);
        assert_eq!(state.player.score, n * CROSSING_BONUS);
        assert_eq!(state.player.position.x, CROSSING_RESPAWN_X);
        assert_eq!(state.player.position.y, PLAYER_START.y);
    }
}

#[test]
fn test_crossing_regenerates_cars_for_new_level() {
    let mut world = SimWorld::new_with_seed(8);
    while world.move_player(Direction::Right) != MoveResult::Crossed {}

    for car in &world.state().cars {
        assert!((4..=8).contains(&car.speed), "level 2 speed {}", car.speed);
        assert!(car.position.y <= 0);
    }
}

#[test]
fn test_cars_stay_bounded() {
    let mut world = world_with(GameState::new(
        (0..NUM_LANES)
            .map(|lane| SimCar::new(Position::new(lane_center(lane), -500), 2 + lane as i32))
            .collect(),
    ));
    // Park the player in the left verge, out of every lane.
    assert_eq!(world.state().player.position, PLAYER_START);

    let mut wrapped = vec![false; NUM_LANES];
    for _ in 0..2000 {
        assert_eq!(world.tick(), TickResult::Continue);
        for (lane, car) in world.state().cars.iter().enumerate() {
            assert!(car.position.y <= SCREEN_HEIGHT);
            assert!(car.position.y >= CAR_SPAWN_MIN_Y);
            if car.position.y == CAR_WRAP_Y {
                wrapped[lane] = true;
            }
            if wrapped[lane] {
                assert!(car.position.y >= CAR_WRAP_Y);
            }
        }
    }
    assert!(wrapped.iter().all(|w| *w));
}

#[test]
fn test_collision_costs_a_life_and_respawns() {
    let mut world = world_with_car_on_player();

    assert!(world.check_collision());
    let state = world.state();
    assert_eq!(state.player.lives, STARTING_LIVES - 1);
    assert_eq!(state.player.position, PLAYER_START);
    assert_eq!(state.phase, GamePhase::Running);

    // Back at the start the player is clear of the lane.
    assert!(!world.check_collision());
}

#[test]
fn test_score_and_level_survive_collisions() {
    let mut state = GameState::new(vec![SimCar::new(Position::new(lane_center(0), 190), 0)]);
    state.player.position = Position::new(lane_center(0), 200);
    state.player.score = 50;
    state.level = 6;
    let mut world = world_with(state);

    assert_eq!(world.tick(), TickResult::Collision);
    assert_eq!(world.state().player.score, 50);
    assert_eq!(world.state().level, 6);
}

#[test]
fn test_last_life_ends_the_game() {
    let mut state = GameState::new(vec![SimCar::new(Position::new(lane_center(0), 190), 0)]);
    state.player.position = Position::new(lane_center(0), 200);
    state.player.lives = 1;
    let mut world = world_with(state);

    assert_eq!(world.tick(), TickResult::GameOver);
    assert!(world.is_game_over());
    assert_eq!(world.state().player.lives, 0);

    // Nothing moves until a reset.
    let frozen = world.state().clone();
    assert_eq!(world.tick(), TickResult::Idle);
    assert_eq!(world.move_player(Direction::Up), MoveResult::Ignored);
    assert_eq!(world.move_player(Direction::Right), MoveResult::Ignored);
    assert!(!world.check_collision());
    assert_eq!(world.state(), &frozen);

    // Even with a car on top of the player, a finished game takes no hits.
    let mut overlapping = frozen.clone();
    overlapping.player.position = Position::new(lane_center(0), 200);
    let mut world = world_with(overlapping.clone());
    assert!(!world.check_collision());
    assert_eq!(world.state(), &overlapping);
}

#[test]
fn test_two_overlapping_cars_cost_one_life() {
    let mut state = GameState::new(vec![
        SimCar::new(Position::new(lane_center(0), 190), 0),
        SimCar::new(Position::new(lane_center(1), 190), 0),
    ]);
    // Straddles the line between lanes 0 and 1, touching both cars.
    state.player.position = Position::new(lane_center(0) + 15, 200);
    let mut world = world_with(state);

    assert!(world.check_collision());
    assert_eq!(world.state().player.lives, STARTING_LIVES - 1);
    assert_eq!(world.state().player.position, PLAYER_START);
    assert_eq!(world.state().phase, GamePhase::Running);
}

#[test]
fn test_three_hits_end_the_game() {
    let mut world = world_with_car_on_player();
    let hit_position = Position::new(lane_center(0), 200);

    for expected_lives in (0..STARTING_LIVES).rev() {
        let mut state = world.state().clone();
        state.player.position = hit_position;
        world = world_with(state);
        world.check_collision();
        assert_eq!(world.state().player.lives, expected_lives);
    }
    assert_eq!(world.state().phase, GamePhase::GameOver);
}

#[test]
fn test_reset_from_game_over() {
    let mut state = GameState::new(Vec::new());
    state.player.lives = 0;
    state.player.score = 70;
    state.level = 8;
    state.phase = GamePhase::GameOver;
    let mut world = world_with(state);

    world.reset();
    let state = world.state();
    assert_eq!(state.phase, GamePhase::Running);
    assert_eq!(state.player.lives, STARTING_LIVES);
    assert_eq!(state.player.score, 0);
    assert_eq!(state.level, 1);
    assert_eq!(state.player.position, PLAYER_START);
    assert_eq!(state.cars.len(), NUM_LANES);
}

#[test]
fn test_replay_button_click() {
    let mut state = GameState::new(Vec::new());
    state.phase = GamePhase::GameOver;
    let mut world = world_with(state);

    assert!(!world.click(100, 100));
    assert!(world.is_game_over());

    assert!(world.click(470, 480));
    assert!(!world.is_game_over());
}

#[test]
fn test_hud_text() {
    let world = SimWorld::new_with_seed(2);
    assert_eq!(world.state().hud_text(), "Score: 0 Lives: 3");
}
