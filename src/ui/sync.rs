//! Systems for syncing Bevy visuals with simulation state

use bevy::prelude::*;

use super::components::{HudText, PlayfieldImage, SimWorldResource};
use crate::render::{draw_scene, ColorPalette};

/// System to run simulation tick
pub fn tick_simulation(mut sim_world: ResMut<SimWorldResource>) {
    sim_world.0.tick();
}

/// System to repaint the playfield texture from simulation state
pub fn redraw_playfield(
    sim_world: Res<SimWorldResource>,
    playfield: Res<PlayfieldImage>,
    mut images: ResMut<Assets<Image>>,
) {
    if !sim_world.is_changed() {
        return;
    }

    if let Some(image) = images.get_mut(&playfield.0) {
        image.data = Some(draw_scene(&ColorPalette, sim_world.0.state()).to_rgba_bytes());
    }
}

/// System to update the HUD text
pub fn update_hud_text(
    sim_world: Res<SimWorldResource>,
    mut text_query: Query<(&HudText, &mut Text)>,
) {
    let state = sim_world.0.state();

    for (hud, mut text) in text_query.iter_mut() {
        match hud {
            HudText::Status => **text = state.hud_text(),
            HudText::Level => **text = format!("Level: {}", state.level),
            HudText::Banner => {
                **text = if state.is_game_over() {
                    format!(
                        "GAME OVER - Final score: {} - click the arrow to replay",
                        state.player.score
                    )
                } else {
                    String::new()
                };
            }
        }
    }
}
