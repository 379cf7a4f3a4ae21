/// 方块变更记录
///
/// 世界每次被修改都会追加一条记录，渲染层按顺序消费，
/// 从而让场景中的方块实体与世界数据保持一致
use bevy::prelude::*;

use super::chunk::ChunkPos;
use super::voxel_kind::VoxelKind;

/// 单个世界变更
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockChange {
    /// 新区块被生成，其中所有实心方块都需要显示
    ChunkCreated(ChunkPos),

    /// 玩家放置了一个方块
    Placed { pos: IVec3, kind: VoxelKind },

    /// 玩家移除了一个方块
    Removed { pos: IVec3, old: VoxelKind },
}

impl BlockChange {
    /// 获取变更所在的区块
    pub fn chunk(&self) -> ChunkPos {
        match self {
            BlockChange::ChunkCreated(pos) => *pos,
            BlockChange::Placed { pos, .. } => ChunkPos::containing(*pos),
            BlockChange::Removed { pos, .. } => ChunkPos::containing(*pos),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_chunk() {
        let change = BlockChange::Placed {
            pos: IVec3::new(-1, 16, 17),
            kind: VoxelKind::Stone,
        };
        assert_eq!(change.chunk(), ChunkPos::new(-1, 1));

        let change = BlockChange::ChunkCreated(ChunkPos::new(3, -4));
        assert_eq!(change.chunk(), ChunkPos::new(3, -4));
    }
}
