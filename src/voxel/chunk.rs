//! 区块数据结构

use bevy::prelude::*;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::voxel::change::BlockChange;
use crate::voxel::constants::{CHUNK_DEPTH, CHUNK_HEIGHT, CHUNK_VOLUME, CHUNK_WIDTH};
use crate::voxel::error::VoxelError;
use crate::voxel::rendered::RenderedBlocks;
use crate::voxel::terrain::TerrainGenerator;
use crate::voxel::voxel_kind::VoxelKind;

/// 区块坐标 - 用于标识世界中区块的位置
/// 注意：这是区块坐标，不是体素（方块）坐标；区块在Y方向上不细分
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkPos {
    pub x: i32,
    pub z: i32,
}

impl ChunkPos {
    /// 创建新的区块坐标
    pub fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// 从世界坐标（体素坐标）转换为区块坐标
    /// 使用欧几里德除法确保负坐标也能正确转换
    pub fn from_world_pos(world_x: i32, world_z: i32) -> Self {
        Self {
            x: world_x.div_euclid(CHUNK_WIDTH),
            z: world_z.div_euclid(CHUNK_DEPTH),
        }
    }

    /// 获取包含指定世界格子的区块坐标
    pub fn containing(cell: IVec3) -> Self {
        Self::from_world_pos(cell.x, cell.z)
    }

    /// 获取区块在世界坐标系中的起始位置（Y 恒为 0）
    pub fn world_origin(&self) -> IVec3 {
        IVec3::new(self.x * CHUNK_WIDTH, 0, self.z * CHUNK_DEPTH)
    }
}

/// 区块数据 - 固定大小的扁平体素数组
///
/// 数组按 `[x][z][y]` 顺序线性化，所有访问都先做边界检查，越界坐标直接拒绝
#[derive(Clone)]
pub struct ChunkData {
    voxels: Box<[VoxelKind; CHUNK_VOLUME]>,
}

impl ChunkData {
    /// 区块体素总数
    pub const VOXEL_COUNT: usize = CHUNK_VOLUME;

    /// 创建一个空的区块数据，所有体素初始化为空气
    pub fn new() -> Self {
        Self {
            voxels: Box::new([VoxelKind::Air; Self::VOXEL_COUNT]),
        }
    }

    /// 按高度填充整个区块，每一列的内容相同
    pub fn with_layers(layer: impl Fn(i32) -> VoxelKind) -> Self {
        let mut chunk = Self::new();
        // [x][z][y] 顺序下，Y 是最内层
        for (i, voxel) in chunk.voxels.iter_mut().enumerate() {
            *voxel = layer(i as i32 % CHUNK_HEIGHT);
        }
        chunk
    }

    /// 局部坐标是否在区块范围内
    #[inline]
    pub fn contains(x: i32, y: i32, z: i32) -> bool {
        (0..CHUNK_WIDTH).contains(&x) && (0..CHUNK_HEIGHT).contains(&y) && (0..CHUNK_DEPTH).contains(&z)
    }

    /// 将三维局部坐标转换为一维数组索引
    #[inline]
    pub fn index(x: i32, y: i32, z: i32) -> Result<usize, VoxelError> {
        if !Self::contains(x, y, z) {
            return Err(VoxelError::OutOfRange { x, y, z });
        }
        Ok(((x * CHUNK_DEPTH + z) * CHUNK_HEIGHT + y) as usize)
    }

    /// 获取指定局部位置的体素类型
    pub fn get(&self, x: i32, y: i32, z: i32) -> Result<VoxelKind, VoxelError> {
        Ok(self.voxels[Self::index(x, y, z)?])
    }

    /// 直接写入指定局部位置，不做任何合法性检查（由编辑器负责）
    pub fn set(&mut self, x: i32, y: i32, z: i32, kind: VoxelKind) -> Result<(), VoxelError> {
        self.voxels[Self::index(x, y, z)?] = kind;
        Ok(())
    }

    /// 以 IVec3 形式访问局部坐标
    pub fn get_local(&self, local: IVec3) -> Result<VoxelKind, VoxelError> {
        self.get(local.x, local.y, local.z)
    }

    pub fn set_local(&mut self, local: IVec3, kind: VoxelKind) -> Result<(), VoxelError> {
        self.set(local.x, local.y, local.z, kind)
    }

    /// 遍历所有非空气体素的局部坐标和类型
    pub fn solid_cells(&self) -> impl Iterator<Item = (IVec3, VoxelKind)> + '_ {
        (0..CHUNK_WIDTH).flat_map(move |x| {
            (0..CHUNK_DEPTH).flat_map(move |z| {
                (0..CHUNK_HEIGHT).filter_map(move |y| {
                    let kind = self.voxels[((x * CHUNK_DEPTH + z) * CHUNK_HEIGHT + y) as usize];
                    kind.is_solid().then_some((IVec3::new(x, y, z), kind))
                })
            })
        })
    }

    /// 检查区块是否完全为空气
    pub fn is_empty(&self) -> bool {
        self.voxels.iter().all(|kind| kind.is_air())
    }
}

impl Default for ChunkData {
    fn default() -> Self {
        Self::new()
    }
}

/// 体素世界 - 管理整个世界的所有区块
///
/// 同时维护已渲染方块集合和变更日志，保证三者始终一致：
/// 任何写入都同时更新区块数据、渲染实例集合，并追加一条变更记录
#[derive(Resource, Default)]
pub struct VoxelWorld {
    /// 存储所有已生成的区块数据
    pub(crate) chunks: HashMap<ChunkPos, ChunkData>,
    /// 当前可见的实心方块实例
    pub(crate) rendered: RenderedBlocks,
    /// 尚未被渲染层消费的变更
    pub(crate) changes: Vec<BlockChange>,
}

impl VoxelWorld {
    /// 查找已存在的区块，不会触发生成
    pub fn get(&self, pos: ChunkPos) -> Option<&ChunkData> {
        self.chunks.get(&pos)
    }

    /// 获取区块，不存在时由地形生成器生成并登记其中的方块实例
    pub fn get_or_create(&mut self, pos: ChunkPos) -> &mut ChunkData {
        match self.chunks.entry(pos) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let chunk = TerrainGenerator::generate(pos);
                let added = self.rendered.register_chunk(pos, &chunk);
                self.changes.push(BlockChange::ChunkCreated(pos));
                debug!("Generated chunk {:?} with {} solid blocks", pos, added);
                entry.insert(chunk)
            }
        }
    }

    /// 已生成的区块数量
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// 当前可见的方块实例集合
    pub fn rendered(&self) -> &RenderedBlocks {
        &self.rendered
    }

    /// 取出所有待处理的变更记录
    pub fn drain_changes(&mut self) -> Vec<BlockChange> {
        std::mem::take(&mut self.changes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunk_pos_uses_floor_division() {
        assert_eq!(ChunkPos::from_world_pos(0, 0), ChunkPos::new(0, 0));
        assert_eq!(ChunkPos::from_world_pos(15, 15), ChunkPos::new(0, 0));
        assert_eq!(ChunkPos::from_world_pos(16, -1), ChunkPos::new(1, -1));
        assert_eq!(ChunkPos::from_world_pos(-16, -17), ChunkPos::new(-1, -2));
    }

    #[test]
    fn world_origin_is_chunk_corner() {
        assert_eq!(ChunkPos::new(-2, 3).world_origin(), IVec3::new(-32, 0, 48));
    }

    #[test]
    fn get_and_set_round_trip() {
        let mut chunk = ChunkData::new();
        assert_eq!(chunk.get(3, 49, 15), Ok(VoxelKind::Air));
        chunk.set(3, 49, 15, VoxelKind::Wood).unwrap();
        assert_eq!(chunk.get(3, 49, 15), Ok(VoxelKind::Wood));
        assert!(!chunk.is_empty());
    }

    #[test]
    fn out_of_range_is_rejected_not_wrapped() {
        let mut chunk = ChunkData::new();
        assert_eq!(
            chunk.get(16, 0, 0),
            Err(VoxelError::OutOfRange { x: 16, y: 0, z: 0 })
        );
        assert_eq!(
            chunk.get(0, 50, 0),
            Err(VoxelError::OutOfRange { x: 0, y: 50, z: 0 })
        );
        assert!(chunk.set(-1, 0, 0, VoxelKind::Stone).is_err());
        assert!(chunk.set(0, 0, 16, VoxelKind::Stone).is_err());
        assert!(chunk.is_empty());
    }

    #[test]
    fn indices_are_unique_and_dense() {
        let mut seen = vec![false; ChunkData::VOXEL_COUNT];
        for x in 0..CHUNK_WIDTH {
            for z in 0..CHUNK_DEPTH {
                for y in 0..CHUNK_HEIGHT {
                    let idx = ChunkData::index(x, y, z).unwrap();
                    assert!(!seen[idx]);
                    seen[idx] = true;
                }
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn with_layers_depends_only_on_height() {
        let chunk = ChunkData::with_layers(|y| {
            if y == 7 { VoxelKind::Wood } else { VoxelKind::Air }
        });
        assert_eq!(chunk.get(0, 7, 0), Ok(VoxelKind::Wood));
        assert_eq!(chunk.get(15, 7, 9), Ok(VoxelKind::Wood));
        assert_eq!(chunk.get(15, 8, 9), Ok(VoxelKind::Air));
        assert_eq!(chunk.solid_cells().count(), (CHUNK_WIDTH * CHUNK_DEPTH) as usize);
    }

    #[test]
    fn solid_cells_skips_air() {
        let mut chunk = ChunkData::new();
        chunk.set(1, 2, 3, VoxelKind::Stone).unwrap();
        chunk.set(15, 49, 15, VoxelKind::Leaves).unwrap();
        let cells: Vec<_> = chunk.solid_cells().collect();
        assert_eq!(
            cells,
            vec![
                (IVec3::new(1, 2, 3), VoxelKind::Stone),
                (IVec3::new(15, 49, 15), VoxelKind::Leaves),
            ]
        );
    }

    #[test]
    fn get_returns_nothing_for_absent_chunk() {
        let world = VoxelWorld::default();
        assert!(world.get(ChunkPos::new(0, 0)).is_none());
        assert_eq!(world.chunk_count(), 0);
    }

    #[test]
    fn get_or_create_is_idempotent() {
        let mut world = VoxelWorld::default();
        let pos = ChunkPos::new(-1, 2);
        world.get_or_create(pos).set(0, 20, 0, VoxelKind::Wood).unwrap();
        let chunk = world.get_or_create(pos);
        assert_eq!(chunk.get(0, 20, 0), Ok(VoxelKind::Wood));
        assert_eq!(world.chunk_count(), 1);

        let changes = world.drain_changes();
        assert_eq!(changes, vec![BlockChange::ChunkCreated(pos)]);
        assert!(world.drain_changes().is_empty());
    }

    #[test]
    fn get_or_create_registers_rendered_blocks() {
        let mut world = VoxelWorld::default();
        world.get_or_create(ChunkPos::new(1, 0));
        let per_column = (crate::voxel::constants::GRASS_LEVEL + 1) as usize;
        let expected = (CHUNK_WIDTH * CHUNK_DEPTH) as usize * per_column;
        assert_eq!(world.rendered().len(), expected);
        assert_eq!(
            world.rendered().get(IVec3::new(16, 15, 0)),
            Some(VoxelKind::Grass)
        );
        assert_eq!(world.rendered().get(IVec3::new(16, 16, 0)), None);
    }
}
