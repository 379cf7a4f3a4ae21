//! 体素世界的系统函数

use bevy::prelude::*;
use std::collections::{HashMap, HashSet};

use crate::voxel::change::BlockChange;
use crate::voxel::chunk::{ChunkPos, VoxelWorld};
use crate::voxel::components::Voxel;
use crate::voxel::materials::BlockAssets;
use crate::voxel::query::world_cell;
use crate::voxel::voxel_kind::VoxelKind;

/// 方块格子到场景实体的映射
#[derive(Resource, Default)]
pub struct BlockEntities {
    pub entities: HashMap<IVec3, Entity>,
}

/// 启动时生成出生点所在的区块
pub fn generate_spawn_chunk(mut world: ResMut<VoxelWorld>) {
    let pos = ChunkPos::new(0, 0);
    world.get_or_create(pos);
    info!(
        "Generated spawn chunk {:?}: {} visible blocks",
        pos,
        world.rendered().len()
    );
}

/// 消费世界变更日志，生成或销毁方块实体
pub fn sync_block_entities(
    mut commands: Commands,
    mut world: ResMut<VoxelWorld>,
    assets: Res<BlockAssets>,
    mut blocks: ResMut<BlockEntities>,
) {
    let changes = world.drain_changes();
    if changes.is_empty() {
        return;
    }
    let touched: HashSet<ChunkPos> = changes.iter().map(BlockChange::chunk).collect();
    debug!(
        "Syncing {} block changes across {} chunks",
        changes.len(),
        touched.len()
    );

    for change in changes {
        match change {
            BlockChange::ChunkCreated(pos) => {
                let Some(chunk) = world.get(pos) else {
                    continue;
                };
                for (local, kind) in chunk.solid_cells() {
                    spawn_block(&mut commands, &assets, &mut blocks, world_cell(pos, local), kind);
                }
            }
            BlockChange::Placed { pos, kind } => {
                spawn_block(&mut commands, &assets, &mut blocks, pos, kind);
            }
            BlockChange::Removed { pos, .. } => {
                if let Some(entity) = blocks.entities.remove(&pos) {
                    commands.entity(entity).despawn();
                }
            }
        }
    }
}

/// 为格子生成方块实体；格子已有实体时跳过（区块生成时已经按最新数据生成过）
fn spawn_block(
    commands: &mut Commands,
    assets: &BlockAssets,
    blocks: &mut BlockEntities,
    pos: IVec3,
    kind: VoxelKind,
) {
    if blocks.entities.contains_key(&pos) {
        return;
    }
    let entity = commands
        .spawn((
            Mesh3d(assets.cube.clone()),
            MeshMaterial3d(assets.material(kind)),
            Transform::from_translation(pos.as_vec3() + Vec3::splat(0.5)),
            Voxel,
        ))
        .id();
    blocks.entities.insert(pos, entity);
}
