//! World setup systems for camera, playfield sprite and HUD

use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

use super::components::{HudText, MainCamera, Playfield, PlayfieldImage, SimWorldResource};
use crate::render::{draw_scene, ColorPalette};

/// System to spawn the camera and the sprite the playfield is drawn into
pub fn setup_world(
    mut commands: Commands,
    mut images: ResMut<Assets<Image>>,
    sim_world: Res<SimWorldResource>,
) {
    commands.spawn((MainCamera, Camera2d));

    let canvas = draw_scene(&ColorPalette, sim_world.0.state());
    let image = Image::new(
        Extent3d {
            width: canvas.width() as u32,
            height: canvas.height() as u32,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        canvas.to_rgba_bytes(),
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::MAIN_WORLD | RenderAssetUsages::RENDER_WORLD,
    );
    let handle = images.add(image);

    commands.spawn((Playfield, Sprite::from_image(handle.clone())));
    commands.insert_resource(PlayfieldImage(handle));
}

/// System to setup the status line overlay
pub fn setup_hud(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(6.0),
                left: Val::Px(8.0),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(2.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.6)),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Score: 0 Lives: 3"),
                TextFont {
                    font_size: 15.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                HudText::Status,
            ));

            parent.spawn((
                Text::new("Level: 1"),
                TextFont {
                    font_size: 13.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.8, 0.8)),
                HudText::Level,
            ));

            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: 15.0,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 0.3, 0.3)),
                HudText::Banner,
            ));
        });
}
