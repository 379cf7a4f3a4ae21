use bevy::prelude::*;

use crate::config::PlayerSettings;
use crate::player::PlayerCamera;
use crate::voxel::{VoxelKind, VoxelWorld};

/// The block a ray hit and the empty cell next to the face it entered through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetBlock {
    pub pos: IVec3,
    pub kind: VoxelKind,
    /// Outward normal of the entered face, one axis set to +-1.
    pub normal: IVec3,
    /// `pos + normal`; never equal to `pos`.
    pub placement: IVec3,
    pub distance: f32,
}

#[derive(Resource, Default)]
pub struct HighlightState {
    pub current: Option<TargetBlock>,
    /// Whether placing at `current.placement` would succeed right now.
    pub placement_valid: bool,
}

/// Systems that refresh `HighlightState`; anything reading the target this
/// frame runs after it.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetingSet;

pub struct RaycastPlugin;

impl Plugin for RaycastPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HighlightState>().add_systems(
            Update,
            (
                update_target.in_set(TargetingSet),
                draw_highlight_gizmo.after(TargetingSet),
            ),
        );
    }
}

fn update_target(
    world: Res<VoxelWorld>,
    camera_q: Query<&GlobalTransform, With<PlayerCamera>>,
    settings: Res<PlayerSettings>,
    mut highlight: ResMut<HighlightState>,
) {
    let Ok(camera_transform) = camera_q.single() else {
        highlight.current = None;
        highlight.placement_valid = false;
        return;
    };

    let ray = Ray3d {
        origin: camera_transform.translation(),
        direction: camera_transform.forward(),
    };

    let target = find_target(ray, world.rendered().iter(), settings.reach);
    highlight.placement_valid = target.is_some_and(|t| world.can_place(t.placement));
    highlight.current = target;
}

/// Test the ray against every block in `blocks` and keep the nearest hit.
///
/// Each block at `p` is the unit cube `[p, p + 1)`. Equal distances are
/// broken by the smallest position so the answer does not depend on
/// iteration order. Blocks that contain the ray origin are ignored.
pub fn find_target(
    ray: Ray3d,
    blocks: impl IntoIterator<Item = (IVec3, VoxelKind)>,
    max_distance: f32,
) -> Option<TargetBlock> {
    let origin = ray.origin;
    let dir = ray.direction.as_vec3();

    let mut best: Option<TargetBlock> = None;
    for (pos, kind) in blocks {
        let Some((distance, normal)) = ray_cube_intersection(origin, dir, pos) else {
            continue;
        };
        if distance > max_distance {
            continue;
        }
        let closer = match &best {
            None => true,
            Some(b) => {
                distance < b.distance
                    || (distance == b.distance && pos.to_array() < b.pos.to_array())
            }
        };
        if closer {
            best = Some(TargetBlock {
                pos,
                kind,
                normal,
                placement: pos + normal,
                distance,
            });
        }
    }
    best
}

/// Slab test against the cube at `cell`. Returns the entry distance and the
/// outward normal of the entry face.
fn ray_cube_intersection(origin: Vec3, dir: Vec3, cell: IVec3) -> Option<(f32, IVec3)> {
    let min = cell.as_vec3();
    let max = min + Vec3::ONE;

    let mut t_near = f32::NEG_INFINITY;
    let mut t_far = f32::INFINITY;
    let mut normal = IVec3::ZERO;

    for axis in 0..3 {
        let (o, d) = (origin[axis], dir[axis]);
        if d.abs() < f32::EPSILON {
            if o < min[axis] || o > max[axis] {
                return None;
            }
            continue;
        }

        let t0 = (min[axis] - o) / d;
        let t1 = (max[axis] - o) / d;
        let (enter, exit) = if t0 < t1 { (t0, t1) } else { (t1, t0) };

        if enter > t_near {
            t_near = enter;
            normal = IVec3::ZERO;
            normal[axis] = if d > 0.0 { -1 } else { 1 };
        }
        t_far = t_far.min(exit);
        if t_near > t_far {
            return None;
        }
    }

    if t_near < 0.0 || normal == IVec3::ZERO {
        return None;
    }
    Some((t_near, normal))
}

fn draw_highlight_gizmo(mut gizmos: Gizmos, highlight: Res<HighlightState>) {
    let Some(hit) = highlight.current else {
        return;
    };
    let center = hit.pos.as_vec3() + Vec3::splat(0.5);
    let transform = Transform::from_translation(center).with_scale(Vec3::splat(1.02));
    gizmos.cube(transform, Color::srgb(1.0, 0.95, 0.2));

    if highlight.placement_valid {
        let center = hit.placement.as_vec3() + Vec3::splat(0.5);
        let transform = Transform::from_translation(center).with_scale(Vec3::splat(1.001));
        gizmos.cube(transform, Color::WHITE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voxel::chunk::ChunkPos;

    fn ray(origin: Vec3, direction: Vec3) -> Ray3d {
        Ray3d {
            origin,
            direction: Dir3::new(direction).unwrap(),
        }
    }

    fn origin_world() -> VoxelWorld {
        let mut world = VoxelWorld::default();
        world.get_or_create(ChunkPos::new(0, 0));
        world
    }

    #[test]
    fn straight_down_hits_grass_top() {
        let world = origin_world();
        let down = ray(Vec3::new(8.5, 30.0, 8.5), Vec3::NEG_Y);
        let target = find_target(down, world.rendered().iter(), f32::INFINITY).unwrap();
        assert_eq!(target.pos, IVec3::new(8, 15, 8));
        assert_eq!(target.kind, VoxelKind::Grass);
        assert_eq!(target.normal, IVec3::Y);
        assert_eq!(target.placement, IVec3::new(8, 16, 8));
        assert_eq!(target.distance, 14.0);
        assert!(world.can_place(target.placement));
    }

    #[test]
    fn side_hit_places_beside_block() {
        let mut world = origin_world();
        world.place(IVec3::new(5, 16, 5), VoxelKind::Wood).unwrap();
        let east = ray(Vec3::new(10.0, 16.5, 5.5), Vec3::NEG_X);
        let target = find_target(east, world.rendered().iter(), f32::INFINITY).unwrap();
        assert_eq!(target.pos, IVec3::new(5, 16, 5));
        assert_eq!(target.normal, IVec3::X);
        assert_eq!(target.placement, IVec3::new(6, 16, 5));
        assert_ne!(target.placement, target.pos);
    }

    #[test]
    fn nearest_block_wins() {
        let mut world = origin_world();
        world.place(IVec3::new(8, 20, 8), VoxelKind::Leaves).unwrap();
        let down = ray(Vec3::new(8.5, 30.0, 8.5), Vec3::NEG_Y);
        let target = find_target(down, world.rendered().iter(), f32::INFINITY).unwrap();
        assert_eq!(target.pos, IVec3::new(8, 20, 8));
        assert_eq!(target.placement, IVec3::new(8, 21, 8));
    }

    #[test]
    fn miss_reports_no_target() {
        let world = origin_world();
        let up = ray(Vec3::new(8.5, 30.0, 8.5), Vec3::Y);
        assert!(find_target(up, world.rendered().iter(), f32::INFINITY).is_none());

        let outside = ray(Vec3::new(-5.5, 30.0, -5.5), Vec3::NEG_Y);
        assert!(find_target(outside, world.rendered().iter(), f32::INFINITY).is_none());
    }

    #[test]
    fn reach_limits_hits() {
        let world = origin_world();
        let down = ray(Vec3::new(8.5, 30.0, 8.5), Vec3::NEG_Y);
        assert!(find_target(down, world.rendered().iter(), 8.0).is_none());
        assert!(find_target(down, world.rendered().iter(), 14.0).is_some());
    }

    #[test]
    fn ties_resolve_to_smallest_position() {
        let blocks = [
            (IVec3::new(8, 15, 8), VoxelKind::Grass),
            (IVec3::new(7, 15, 8), VoxelKind::Stone),
        ];
        // runs exactly along the edge shared by both blocks
        let down = ray(Vec3::new(8.0, 30.0, 8.5), Vec3::NEG_Y);
        let forward = find_target(down, blocks, f32::INFINITY).unwrap();
        let mut reversed = blocks;
        reversed.reverse();
        let backward = find_target(down, reversed, f32::INFINITY).unwrap();
        assert_eq!(forward, backward);
        assert_eq!(forward.pos, IVec3::new(7, 15, 8));
    }

    #[test]
    fn repeated_queries_are_identical() {
        let world = origin_world();
        let slanted = ray(Vec3::new(2.3, 20.0, 3.7), Vec3::new(0.4, -1.0, 0.3));
        let first = find_target(slanted, world.rendered().iter(), f32::INFINITY);
        assert!(first.is_some());
        for _ in 0..5 {
            assert_eq!(find_target(slanted, world.rendered().iter(), f32::INFINITY), first);
        }
    }

    #[test]
    fn origin_inside_block_is_ignored() {
        let blocks = [(IVec3::new(0, 0, 0), VoxelKind::Stone)];
        let inside = ray(Vec3::new(0.5, 0.5, 0.5), Vec3::X);
        assert!(find_target(inside, blocks, f32::INFINITY).is_none());
    }
}
