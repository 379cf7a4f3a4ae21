//! 材质系统

use bevy::prelude::*;

use crate::voxel::voxel_kind::VoxelKind;

/// 方块渲染资源 - 共享的立方体网格和每种方块的材质句柄
#[derive(Resource)]
pub struct BlockAssets {
    /// 单位立方体网格，所有方块实体共用
    pub cube: Handle<Mesh>,
    /// 按方块编号排列的材质
    pub materials: [Handle<StandardMaterial>; VoxelKind::COUNT],
}

impl BlockAssets {
    /// 获取方块材质
    pub fn material(&self, kind: VoxelKind) -> Handle<StandardMaterial> {
        self.materials[kind.index() as usize].clone()
    }
}

/// 初始化材质系统
/// 为每种方块创建一个不透明材质，颜色取自方块定义
pub fn setup_materials(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let cube = meshes.add(Cuboid::new(1.0, 1.0, 1.0));

    let materials = VoxelKind::ALL.map(|kind| {
        materials.add(StandardMaterial {
            base_color: kind.def().color,
            perceptual_roughness: 0.9,
            ..default()
        })
    });

    commands.insert_resource(BlockAssets { cube, materials });
}
