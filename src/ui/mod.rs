//! UI module that shows the game in a Bevy window
//!
//! This module is purely for presentation and input - all game rules are in
//! the `simulation` module. Each frame the playfield is redrawn in software
//! through `render::draw_scene` and uploaded as a sprite texture.

mod components;
mod input;
mod sync;
mod world;

use bevy::log::LogPlugin;
use bevy::prelude::*;

pub use components::SimWorldResource;

use input::{handle_input, handle_movement, handle_replay_click};
use sync::{redraw_playfield, tick_simulation, update_hud_text};
use world::{setup_hud, setup_world};

/// Simulation ticks per second
pub const TICK_HZ: f64 = 60.0;

/// Plugin to register all UI systems
pub struct RoadCrossingUIPlugin;

impl Plugin for RoadCrossingUIPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimWorldResource>()
            .insert_resource(Time::<Fixed>::from_hz(TICK_HZ))
            .add_systems(Startup, (setup_world, setup_hud))
            .add_systems(FixedUpdate, tick_simulation)
            .add_systems(
                Update,
                (
                    handle_input,
                    handle_movement,
                    handle_replay_click,
                    redraw_playfield,
                    update_hud_text,
                )
                    .chain(),
            );
    }
}

/// Open the game window and run until it is closed
pub fn run(seed: Option<u64>) {
    println!("Starting Road Crossing...");
    println!();
    println!("Controls:");
    println!("  Arrow keys  - Move (right crosses the road)");
    println!("  Click arrow - Replay (top-right corner)");
    println!("  ESC         - Exit");
    println!();

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(LogPlugin {
                    filter: "warn,road_crossing=debug".to_string(),
                    level: bevy::log::Level::DEBUG,
                    ..default()
                })
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Road Crossing Game".into(),
                        resolution: (500, 500).into(),
                        resizable: false,
                        ..default()
                    }),
                    ..default()
                })
                .set(ImagePlugin::default_nearest()),
        )
        .insert_resource(SimWorldResource::from_seed(seed))
        .add_plugins(RoadCrossingUIPlugin)
        .run();
}
