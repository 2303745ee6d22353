//! UI components and resources for linking Bevy entities to simulation state

use bevy::prelude::*;

use crate::simulation::SimWorld;

/// Resource wrapper for the simulation world
#[derive(Resource)]
pub struct SimWorldResource(pub SimWorld);

impl Default for SimWorldResource {
    fn default() -> Self {
        Self(SimWorld::new())
    }
}

impl SimWorldResource {
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(SimWorld::new_with_seed(seed)),
            None => Self::default(),
        }
    }
}

/// Texture the playfield canvas is uploaded into
#[derive(Resource)]
pub struct PlayfieldImage(pub Handle<Image>);

/// Marker component for the main camera
#[derive(Component)]
pub struct MainCamera;

/// Marker component for the sprite showing the playfield
#[derive(Component)]
pub struct Playfield;

/// Marker for HUD text elements
#[derive(Component)]
pub enum HudText {
    /// Score and lives
    Status,
    /// Current level
    Level,
    /// Game over prompt, empty while playing
    Banner,
}
