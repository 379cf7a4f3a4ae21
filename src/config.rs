use bevy::prelude::*;

use crate::voxel::TerrainGenerator;

/// Tunables for the first-person player. Defaults can be overridden from the
/// command line (`--spawn X,Y,Z`, `--gravity G`, `--speed S`, `--reach R`) or
/// the matching `BLOCKWORLD_*` environment variables; flags win.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct PlayerSettings {
    pub move_speed: f32,
    pub look_sensitivity: f32,
    pub jump_speed: f32,
    pub gravity: f32,
    /// Seconds after startup before gravity is first applied.
    pub gravity_delay: f32,
    /// Maximum targeting distance.
    pub reach: f32,
    pub spawn: Vec3,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            look_sensitivity: 0.002,
            jump_speed: 6.0,
            gravity: 20.0,
            gravity_delay: 0.5,
            reach: 8.0,
            spawn: Vec3::new(8.5, (TerrainGenerator::surface_height() + 2) as f32, 8.5),
        }
    }
}

/// A flag or environment value that could not be used; the default was kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedSetting {
    pub key: &'static str,
    pub raw: String,
}

impl PlayerSettings {
    /// Resolve settings from the process arguments and environment.
    pub fn from_env() -> (Self, Vec<RejectedSetting>) {
        let args: Vec<String> = std::env::args().collect();
        Self::parse(&args, |key| std::env::var(key).ok())
    }

    pub fn parse(
        args: &[String],
        env: impl Fn(&str) -> Option<String>,
    ) -> (Self, Vec<RejectedSetting>) {
        let mut settings = Self::default();
        let mut rejected = Vec::new();
        let mut reject = |key: &'static str, raw: String| rejected.push(RejectedSetting { key, raw });

        if let Some(raw) = lookup(args, "--spawn", &env, "BLOCKWORLD_SPAWN") {
            match parse_vec3(&raw) {
                Some(spawn) => settings.spawn = spawn,
                None => reject("spawn", raw),
            }
        }
        if let Some(raw) = lookup(args, "--gravity", &env, "BLOCKWORLD_GRAVITY") {
            match parse_non_negative(&raw) {
                Some(gravity) => settings.gravity = gravity,
                None => reject("gravity", raw),
            }
        }
        if let Some(raw) = lookup(args, "--speed", &env, "BLOCKWORLD_SPEED") {
            match parse_non_negative(&raw).filter(|v| *v > 0.0) {
                Some(speed) => settings.move_speed = speed,
                None => reject("speed", raw),
            }
        }
        if let Some(raw) = lookup(args, "--reach", &env, "BLOCKWORLD_REACH") {
            match parse_non_negative(&raw).filter(|v| *v > 0.0) {
                Some(reach) => settings.reach = reach,
                None => reject("reach", raw),
            }
        }

        (settings, rejected)
    }
}

/// Resolve `PlayerSettings`, log any rejected values and insert the resource.
/// Runs in `PreStartup`, after the log subscriber exists.
pub fn load_settings(mut commands: Commands) {
    let (settings, rejected) = PlayerSettings::from_env();
    insert_settings(&mut commands, settings, &rejected);
}

fn insert_settings(commands: &mut Commands, settings: PlayerSettings, rejected: &[RejectedSetting]) {
    for RejectedSetting { key, raw } in rejected {
        warn!("Ignoring malformed {} value {:?}, keeping the default", key, raw);
    }
    info!(
        "Spawn {}, gravity {} after {}s, speed {}, reach {}",
        settings.spawn, settings.gravity, settings.gravity_delay, settings.move_speed, settings.reach
    );
    commands.insert_resource(settings);
}

fn lookup(
    args: &[String],
    flag: &str,
    env: &impl Fn(&str) -> Option<String>,
    var: &str,
) -> Option<String> {
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
        .or_else(|| env(var))
}

fn parse_non_negative(raw: &str) -> Option<f32> {
    raw.trim()
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

fn parse_vec3(raw: &str) -> Option<Vec3> {
    let parts: Vec<f32> = raw
        .split(',')
        .map(|part| part.trim().parse::<f32>().ok().filter(|v| v.is_finite()))
        .collect::<Option<_>>()?;
    match parts.as_slice() {
        [x, y, z] => Some(Vec3::new(*x, *y, *z)),
        _ => None,
    }
}
