use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::prelude::*;
use bevy::window::{CursorGrabMode, CursorOptions};

use crate::collision::{self, BlockedFaces};
use crate::config::PlayerSettings;
use crate::ui::MenuState;
use crate::voxel::VoxelWorld;

#[derive(Component)]
pub struct PlayerCamera;

#[derive(Component, Debug, Default)]
pub struct LookAngles {
    pub yaw: f32,
    pub pitch: f32,
}

/// Movement requested for the current frame. Latched once from the keyboard,
/// consumed by one physics step, then cleared.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct MoveIntent {
    /// Horizontal, yaw-relative, normalized or zero.
    pub direction: Vec3,
    pub jump: bool,
}

#[derive(Component, Debug, Default, Clone, Copy)]
pub struct KinematicBody {
    pub velocity: Vec3,
    /// Recomputed every step from the collision probes.
    pub grounded: bool,
    /// Seconds simulated since spawn, drives the gravity warm-up.
    pub elapsed: f32,
}

impl KinematicBody {
    /// Advance one physics tick: gravity (after the warm-up), intent,
    /// collision clamp, jump, then integrate `position`.
    pub fn step(
        &mut self,
        position: &mut Vec3,
        intent: &MoveIntent,
        world: &VoxelWorld,
        settings: &PlayerSettings,
        dt: f32,
    ) -> BlockedFaces {
        self.grounded = false;
        self.elapsed += dt;

        if self.elapsed >= settings.gravity_delay {
            self.velocity.y -= settings.gravity * dt;
        }
        self.velocity.x = intent.direction.x * settings.move_speed;
        self.velocity.z = intent.direction.z * settings.move_speed;

        let faces = collision::resolve(world, *position, &mut self.velocity);
        self.grounded = faces.grounded();

        if intent.jump && self.grounded {
            self.velocity.y = settings.jump_speed;
        }

        *position += self.velocity * dt;
        faces
    }
}

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MoveIntent>()
            .add_systems(Startup, setup_player)
            .add_systems(
                Update,
                (player_look, latch_move_intent, physics_tick).chain(),
            );
    }
}

fn setup_player(
    mut commands: Commands,
    mut cursor_options: Single<&mut CursorOptions>,
    settings: Res<PlayerSettings>,
) {
    commands.spawn((
        Camera3d::default(),
        AmbientLight {
            color: Color::WHITE,
            brightness: 400.0,
            affects_lightmapped_meshes: true,
        },
        Transform::from_translation(settings.spawn),
        PlayerCamera,
        LookAngles::default(),
        KinematicBody::default(),
    ));
    info!("Player spawned at {}", settings.spawn);

    cursor_options.grab_mode = CursorGrabMode::Locked;
    cursor_options.visible = false;
}

fn player_look(
    mouse_motion: Res<AccumulatedMouseMotion>,
    mut query: Query<(&mut Transform, &mut LookAngles), With<PlayerCamera>>,
    settings: Res<PlayerSettings>,
    menu_state: Res<MenuState>,
) {
    if menu_state.open {
        return;
    }
    let delta = mouse_motion.delta;
    if delta == Vec2::ZERO {
        return;
    }
    let Ok((mut transform, mut angles)) = query.single_mut() else {
        return;
    };
    angles.yaw -= delta.x * settings.look_sensitivity;
    angles.pitch = (angles.pitch - delta.y * settings.look_sensitivity)
        .clamp(-std::f32::consts::FRAC_PI_2, std::f32::consts::FRAC_PI_2);
    let yaw = Quat::from_axis_angle(Vec3::Y, angles.yaw);
    let pitch = Quat::from_axis_angle(Vec3::X, angles.pitch);
    transform.rotation = yaw * pitch;
}

/// Turn held keys into a yaw-relative horizontal direction plus jump.
fn latch_move_intent(
    keys: Res<ButtonInput<KeyCode>>,
    query: Query<&LookAngles, With<PlayerCamera>>,
    menu_state: Res<MenuState>,
    mut intent: ResMut<MoveIntent>,
) {
    if menu_state.open {
        *intent = MoveIntent::default();
        return;
    }
    let Ok(angles) = query.single() else {
        return;
    };

    let mut input = Vec3::ZERO;
    if keys.pressed(KeyCode::KeyW) {
        input.z -= 1.0;
    }
    if keys.pressed(KeyCode::KeyS) {
        input.z += 1.0;
    }
    if keys.pressed(KeyCode::KeyA) {
        input.x -= 1.0;
    }
    if keys.pressed(KeyCode::KeyD) {
        input.x += 1.0;
    }

    intent.direction = Quat::from_axis_angle(Vec3::Y, angles.yaw) * input.normalize_or_zero();
    intent.jump = keys.just_pressed(KeyCode::Space);
}

fn physics_tick(
    time: Res<Time>,
    world: Res<VoxelWorld>,
    settings: Res<PlayerSettings>,
    mut intent: ResMut<MoveIntent>,
    mut query: Query<(&mut Transform, &mut KinematicBody), With<PlayerCamera>>,
) {
    let dt = time.delta_secs();
    for (mut transform, mut body) in &mut query {
        body.step(&mut transform.translation, &intent, &world, &settings, dt);
    }
    *intent = MoveIntent::default();
}
