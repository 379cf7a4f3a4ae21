//! 已渲染方块实例集合

use bevy::prelude::*;
use std::collections::HashMap;

use crate::voxel::chunk::{ChunkData, ChunkPos};
use crate::voxel::voxel_kind::VoxelKind;

/// 当前可见的实心方块集合，每个实心格子恰好对应一个实例
///
/// 以整数格子坐标为键，移除时按坐标精确匹配
#[derive(Debug, Default, Clone)]
pub struct RenderedBlocks {
    blocks: HashMap<IVec3, VoxelKind>,
}

impl RenderedBlocks {
    /// 登记一个实例，返回该位置原有的实例
    pub fn insert(&mut self, pos: IVec3, kind: VoxelKind) -> Option<VoxelKind> {
        self.blocks.insert(pos, kind)
    }

    /// 移除一个实例
    pub fn remove(&mut self, pos: IVec3) -> Option<VoxelKind> {
        self.blocks.remove(&pos)
    }

    pub fn get(&self, pos: IVec3) -> Option<VoxelKind> {
        self.blocks.get(&pos).copied()
    }

    pub fn contains(&self, pos: IVec3) -> bool {
        self.blocks.contains_key(&pos)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// 遍历所有实例（世界坐标，方块类型）
    pub fn iter(&self) -> impl Iterator<Item = (IVec3, VoxelKind)> + '_ {
        self.blocks.iter().map(|(pos, kind)| (*pos, *kind))
    }

    /// 登记区块中所有实心方块，返回登记数量
    pub fn register_chunk(&mut self, pos: ChunkPos, chunk: &ChunkData) -> usize {
        let origin = pos.world_origin();
        let before = self.blocks.len();
        self.blocks
            .extend(chunk.solid_cells().map(|(local, kind)| (origin + local, kind)));
        self.blocks.len() - before
    }
}
