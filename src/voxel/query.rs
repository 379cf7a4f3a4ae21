//! 世界坐标查询
//!
//! 世界坐标与区块/局部坐标之间的换算，以及"某个格子里是什么方块"的查询。
//! 格子 `p` 占据 `[p, p + 1)` 的单位立方体，连续坐标统一向下取整到格子。

use bevy::prelude::*;

use crate::voxel::chunk::{ChunkPos, VoxelWorld};
use crate::voxel::constants::{CHUNK_DEPTH, CHUNK_HEIGHT, CHUNK_WIDTH};
use crate::voxel::voxel_kind::VoxelKind;

/// 连续世界坐标所在的格子
pub fn voxel_at_point(point: Vec3) -> IVec3 {
    point.floor().as_ivec3()
}

/// 世界格子在所属区块中的局部坐标
/// X/Z 使用欧几里德取余，负坐标也落在 [0, 尺寸) 内；Y 不做变换
pub fn local_of(cell: IVec3) -> IVec3 {
    IVec3::new(
        cell.x.rem_euclid(CHUNK_WIDTH),
        cell.y,
        cell.z.rem_euclid(CHUNK_DEPTH),
    )
}

/// 区块坐标 + 局部坐标还原为世界格子
pub fn world_cell(chunk: ChunkPos, local: IVec3) -> IVec3 {
    chunk.world_origin() + local
}

/// Y 是否在区块高度范围内
pub fn in_vertical_bounds(y: i32) -> bool {
    (0..CHUNK_HEIGHT).contains(&y)
}

impl VoxelWorld {
    /// 查询世界格子中的方块
    /// 区块不存在或高度越界时视为空气（未知区域可以穿行）
    pub fn block_at(&self, cell: IVec3) -> VoxelKind {
        if !in_vertical_bounds(cell.y) {
            return VoxelKind::Air;
        }
        self.get(ChunkPos::containing(cell))
            .and_then(|chunk| chunk.get_local(local_of(cell)).ok())
            .unwrap_or(VoxelKind::Air)
    }

    /// 查询连续坐标所在格子中的方块
    pub fn block_at_point(&self, point: Vec3) -> VoxelKind {
        self.block_at(voxel_at_point(point))
    }

    /// 格子是否位于已生成的区块内，用于区分"确实是空气"和"尚未生成"
    pub fn is_inside_known_chunk(&self, cell: IVec3) -> bool {
        in_vertical_bounds(cell.y) && self.get(ChunkPos::containing(cell)).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunk_and_local_recombine_to_cell() {
        for x in -40..40 {
            for z in [-33, -17, -16, -1, 0, 1, 15, 16, 31] {
                let cell = IVec3::new(x, 7, z);
                let chunk = ChunkPos::containing(cell);
                let local = local_of(cell);
                assert!((0..CHUNK_WIDTH).contains(&local.x));
                assert!((0..CHUNK_DEPTH).contains(&local.z));
                assert_eq!(chunk.x * CHUNK_WIDTH + local.x, x);
                assert_eq!(chunk.z * CHUNK_DEPTH + local.z, z);
                assert_eq!(world_cell(chunk, local), cell);
            }
        }
    }

    #[test]
    fn negative_one_maps_to_last_column_of_west_chunk() {
        let cell = voxel_at_point(Vec3::new(-1.0, 3.0, -0.25));
        assert_eq!(cell, IVec3::new(-1, 3, -1));
        assert_eq!(ChunkPos::containing(cell), ChunkPos::new(-1, -1));
        assert_eq!(local_of(cell), IVec3::new(15, 3, 15));
    }

    #[test]
    fn points_floor_to_cells() {
        assert_eq!(voxel_at_point(Vec3::new(8.99, 15.0, 0.01)), IVec3::new(8, 15, 0));
        assert_eq!(voxel_at_point(Vec3::new(-0.01, -0.5, -16.0)), IVec3::new(-1, -1, -16));
    }

    #[test]
    fn fresh_origin_chunk_layers() {
        let mut world = VoxelWorld::default();
        world.get_or_create(ChunkPos::new(0, 0));
        assert_eq!(world.block_at(IVec3::new(8, 9, 8)), VoxelKind::Stone);
        assert_eq!(world.block_at(IVec3::new(8, 12, 8)), VoxelKind::Dirt);
        assert_eq!(world.block_at(IVec3::new(8, 15, 8)), VoxelKind::Grass);
        assert_eq!(world.block_at(IVec3::new(8, 16, 8)), VoxelKind::Air);
        assert_eq!(world.block_at_point(Vec3::new(8.5, 15.9, 8.5)), VoxelKind::Grass);
    }

    #[test]
    fn unknown_space_reads_as_air() {
        let mut world = VoxelWorld::default();
        world.get_or_create(ChunkPos::new(0, 0));
        assert_eq!(world.block_at(IVec3::new(-1, 5, 0)), VoxelKind::Air);
        assert!(!world.is_inside_known_chunk(IVec3::new(-1, 5, 0)));
        assert!(world.is_inside_known_chunk(IVec3::new(0, 5, 15)));
    }

    #[test]
    fn out_of_height_reads_as_air() {
        let mut world = VoxelWorld::default();
        world.get_or_create(ChunkPos::new(0, 0));
        assert_eq!(world.block_at(IVec3::new(0, -1, 0)), VoxelKind::Air);
        assert_eq!(world.block_at(IVec3::new(0, CHUNK_HEIGHT, 0)), VoxelKind::Air);
        assert!(!world.is_inside_known_chunk(IVec3::new(0, -1, 0)));
    }
}
