mod collision;
mod config;
mod interaction;
mod player;
mod raycast;
mod ui;
mod voxel;

use bevy::prelude::*;
use interaction::InteractionPlugin;
use player::PlayerPlugin;
use raycast::RaycastPlugin;
use ui::UiPlugin;
use voxel::VoxelPlugin;

fn main() {
    App::new()
        .insert_resource(ClearColor(Color::srgb(0.53, 0.75, 0.92)))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Blockworld".to_string(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins((
            VoxelPlugin,
            PlayerPlugin,
            RaycastPlugin,
            InteractionPlugin,
            UiPlugin,
        ))
        // Flags first, then BLOCKWORLD_* variables
        .add_systems(PreStartup, config::load_settings)
        .add_systems(Startup, (print_controls, spawn_sun))
        .run();
}

fn print_controls() {
    println!("=== Blockworld Controls ===");
    println!("  WASD       - Move");
    println!("  Space      - Jump");
    println!("  Mouse      - Look around");
    println!("  Left click - Remove targeted block");
    println!("  Right click- Place selected block");
    println!("  1-5        - Select grass / dirt / stone / wood / leaves");
    println!("  Esc        - Pause menu");
}

fn spawn_sun(mut commands: Commands) {
    commands.spawn((
        DirectionalLight {
            illuminance: 12_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(20.0, 40.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
