//! 方块编辑：放置与移除
//!
//! 放置与移除都先做合法性检查，失败时不修改任何状态，调用方直接丢弃这次操作。
//! 合法性判断与查询使用同一套坐标换算（`query::local_of`）。

use bevy::prelude::*;

use crate::voxel::change::BlockChange;
use crate::voxel::chunk::{ChunkPos, VoxelWorld};
use crate::voxel::error::EditError;
use crate::voxel::query::{in_vertical_bounds, local_of};
use crate::voxel::terrain::TerrainGenerator;
use crate::voxel::voxel_kind::VoxelKind;

impl VoxelWorld {
    /// 判断在格子中放置方块是否合法，不会产生任何副作用
    ///
    /// 区块尚未生成时按地形生成器将要生成的内容判断，结果与 `place` 的判定一致
    pub fn can_place(&self, cell: IVec3) -> bool {
        if !in_vertical_bounds(cell.y) {
            return false;
        }
        let local = local_of(cell);
        match self.get(ChunkPos::containing(cell)) {
            Some(chunk) => chunk.get_local(local).is_ok_and(VoxelKind::is_air),
            None => TerrainGenerator::layer_at(local.y).is_air(),
        }
    }

    /// 在格子中放置方块
    ///
    /// 格子必须在高度范围内且当前为空气；目标区块不存在时，
    /// 先按地形生成器的结果判断，合法后才生成区块
    pub fn place(&mut self, cell: IVec3, kind: VoxelKind) -> Result<(), EditError> {
        if kind.is_air() {
            return Err(EditError::PlaceAir);
        }
        if !in_vertical_bounds(cell.y) {
            return Err(EditError::OutOfBounds(cell));
        }

        let local = local_of(cell);
        let chunk_pos = ChunkPos::containing(cell);
        if self.get(chunk_pos).is_none() {
            let generated = TerrainGenerator::layer_at(local.y);
            if generated.is_solid() {
                return Err(EditError::Occupied {
                    pos: cell,
                    kind: generated,
                });
            }
        }

        let chunk = self.get_or_create(chunk_pos);
        let current = chunk.get_local(local)?;
        if current.is_solid() {
            return Err(EditError::Occupied {
                pos: cell,
                kind: current,
            });
        }
        chunk.set_local(local, kind)?;

        self.rendered.insert(cell, kind);
        self.changes.push(BlockChange::Placed { pos: cell, kind });
        debug!("Placed {:?} at {}", kind, cell);
        Ok(())
    }

    /// 移除格子中的方块
    ///
    /// 区块不存在或格子已经是空气时失败
    pub fn remove(&mut self, cell: IVec3) -> Result<VoxelKind, EditError> {
        if !in_vertical_bounds(cell.y) {
            return Err(EditError::OutOfBounds(cell));
        }

        let local = local_of(cell);
        let Some(chunk) = self.chunks.get_mut(&ChunkPos::containing(cell)) else {
            return Err(EditError::NoChunk(cell));
        };
        let old = chunk.get_local(local)?;
        if old.is_air() {
            return Err(EditError::AlreadyEmpty(cell));
        }
        chunk.set_local(local, VoxelKind::Air)?;

        self.rendered.remove(cell);
        self.changes.push(BlockChange::Removed { pos: cell, old });
        debug!("Removed {:?} at {}", old, cell);
        Ok(old)
    }
}
