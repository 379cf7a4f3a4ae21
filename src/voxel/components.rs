//! 体素相关组件

use bevy::prelude::*;

/// 体素组件 - 标记场景中代表某个方块的实体
///
/// 格子坐标与实体的对应关系保存在 `BlockEntities` 中
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Voxel;
