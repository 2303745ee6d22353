//! Input handling systems

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::components::SimWorldResource;
use crate::simulation::{window_to_game, Direction, SCREEN_HEIGHT, SCREEN_WIDTH};

const MOVE_BINDINGS: [(KeyCode, Direction); 4] = [
    (KeyCode::ArrowRight, Direction::Right),
    (KeyCode::ArrowLeft, Direction::Left),
    (KeyCode::ArrowUp, Direction::Up),
    (KeyCode::ArrowDown, Direction::Down),
];

/// Handle basic keyboard input
pub fn handle_input(keyboard: Res<ButtonInput<KeyCode>>, mut exit: MessageWriter<AppExit>) {
    if keyboard.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}

/// Forward arrow key presses to the simulation
pub fn handle_movement(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut sim_world: ResMut<SimWorldResource>,
) {
    for (key, direction) in MOVE_BINDINGS {
        if keyboard.just_pressed(key) {
            sim_world.0.move_player(direction);
        }
    }
}

/// Restart the game when the replay button is clicked
pub fn handle_replay_click(
    mouse_button: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut sim_world: ResMut<SimWorldResource>,
) {
    if !mouse_button.just_pressed(MouseButton::Left) {
        return;
    }

    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };

    // Window pixels to playfield pixels, in case the window is not 1:1.
    let x = (cursor.x / window.width() * SCREEN_WIDTH as f32) as i32;
    let y = (cursor.y / window.height() * SCREEN_HEIGHT as f32) as i32;
    let pos = window_to_game(x, y);

    if sim_world.0.click(pos.x, pos.y) {
        info!("Replay button clicked");
    }
}
