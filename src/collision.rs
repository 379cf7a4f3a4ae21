//! Point-probe collision against the voxel grid.
//!
//! The player is a single reference point. Each tick the six axis-aligned
//! neighbours one unit away are sampled; solid neighbours clamp the matching
//! velocity component. Corners are not sampled, so a body moving diagonally
//! can clip through the edge where two solid blocks meet.

use bevy::prelude::*;
use bitflags::bitflags;

use crate::voxel::VoxelWorld;

bitflags! {
    /// Which of the six probe directions hit a solid block.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct BlockedFaces: u8 {
        const NEG_X = 1 << 0;
        const POS_X = 1 << 1;
        const NEG_Y = 1 << 2;
        const POS_Y = 1 << 3;
        const NEG_Z = 1 << 4;
        const POS_Z = 1 << 5;

        const X = Self::NEG_X.bits() | Self::POS_X.bits();
        const Z = Self::NEG_Z.bits() | Self::POS_Z.bits();
    }
}

const PROBES: [(Vec3, BlockedFaces); 6] = [
    (Vec3::NEG_X, BlockedFaces::NEG_X),
    (Vec3::X, BlockedFaces::POS_X),
    (Vec3::NEG_Y, BlockedFaces::NEG_Y),
    (Vec3::Y, BlockedFaces::POS_Y),
    (Vec3::NEG_Z, BlockedFaces::NEG_Z),
    (Vec3::Z, BlockedFaces::POS_Z),
];

impl BlockedFaces {
    /// A solid block sits directly below the reference point.
    pub fn grounded(self) -> bool {
        self.contains(BlockedFaces::NEG_Y)
    }
}

/// Sample the six neighbours of `point`.
pub fn probe(world: &VoxelWorld, point: Vec3) -> BlockedFaces {
    PROBES
        .iter()
        .filter(|(offset, _)| world.block_at_point(point + *offset).is_solid())
        .fold(BlockedFaces::empty(), |faces, (_, face)| faces | *face)
}

/// Probe around `point` and clamp `velocity` against whatever was hit.
pub fn resolve(world: &VoxelWorld, point: Vec3, velocity: &mut Vec3) -> BlockedFaces {
    let faces = probe(world, point);

    if faces.contains(BlockedFaces::NEG_Y) {
        velocity.y = velocity.y.max(0.0);
    }
    if faces.contains(BlockedFaces::POS_Y) {
        velocity.y = velocity.y.min(0.0);
    }
    if faces.intersects(BlockedFaces::X) {
        velocity.x = 0.0;
    }
    if faces.intersects(BlockedFaces::Z) {
        velocity.z = 0.0;
    }

    faces
}
