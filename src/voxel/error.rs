//! 体素世界错误类型

use bevy::prelude::*;
use thiserror::Error;

use crate::voxel::voxel_kind::VoxelKind;

/// 区块网格访问错误
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VoxelError {
    /// 局部坐标超出区块范围，说明调用方没有正确做坐标映射
    #[error("local coordinate ({x}, {y}, {z}) is outside the chunk")]
    OutOfRange { x: i32, y: i32, z: i32 },
}

/// 方块编辑（放置/移除）被拒绝的原因
///
/// 编辑失败是正常情况，调用方直接丢弃这次操作即可
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EditError {
    /// 不能把空气当作方块放置
    #[error("cannot place air")]
    PlaceAir,
    /// 目标高度不在任何区块的范围内
    #[error("cell {0} is outside the vertical chunk bounds")]
    OutOfBounds(IVec3),
    /// 目标格子已经有方块
    #[error("cell {pos} is already occupied by {kind:?}")]
    Occupied { pos: IVec3, kind: VoxelKind },
    /// 目标格子已经是空气
    #[error("cell {0} is already air")]
    AlreadyEmpty(IVec3),
    /// 目标位置没有已生成的区块
    #[error("no chunk has been generated at cell {0}")]
    NoChunk(IVec3),
    #[error(transparent)]
    Grid(#[from] VoxelError),
}
