//! 地形生成器

use crate::voxel::chunk::{ChunkData, ChunkPos};
use crate::voxel::constants::{DIRT_TOP, GRASS_LEVEL, STONE_TOP};
use crate::voxel::voxel_kind::VoxelKind;

/// 地形生成器 - 按固定分层规则填充新区块
///
/// 生成结果只取决于局部高度，不依赖任何外部状态，
/// 因此延迟生成的区块与启动时生成的区块完全一致
pub struct TerrainGenerator;

impl TerrainGenerator {
    /// 指定局部高度上的方块类型
    /// - Y < 10：石头
    /// - 10 ≤ Y < 15：泥土
    /// - Y = 15：草方块
    /// - Y > 15：空气
    pub fn layer_at(y: i32) -> VoxelKind {
        match y {
            y if y < 0 => VoxelKind::Air,
            y if y < STONE_TOP => VoxelKind::Stone,
            y if y < DIRT_TOP => VoxelKind::Dirt,
            GRASS_LEVEL => VoxelKind::Grass,
            _ => VoxelKind::Air,
        }
    }

    /// 地表最高实心方块的高度
    pub fn surface_height() -> i32 {
        GRASS_LEVEL
    }

    /// 生成指定坐标的区块
    /// 区块坐标不影响结果，保留参数以便将来按位置生成地形
    pub fn generate(_pos: ChunkPos) -> ChunkData {
        ChunkData::with_layers(Self::layer_at)
    }
}
