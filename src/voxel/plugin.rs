//! 体素系统插件

use bevy::prelude::*;

use crate::voxel::chunk::VoxelWorld;
use crate::voxel::materials::setup_materials;
use crate::voxel::systems::{generate_spawn_chunk, sync_block_entities, BlockEntities};

/// 体素系统插件 - 负责注册体素相关的资源和系统
pub struct VoxelPlugin;

impl Plugin for VoxelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<VoxelWorld>()
            .init_resource::<BlockEntities>()
            .add_systems(Startup, (setup_materials, generate_spawn_chunk))
            .add_systems(PostUpdate, sync_block_entities);
    }
}
