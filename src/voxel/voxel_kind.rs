//! 体素（方块）类型定义

use bevy::prelude::*;

/// 体素种类枚举 - 定义游戏中所有可用的方块类型
///
/// 判别值即方块编号，玩家用数字键按编号选择要放置的方块
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum VoxelKind {
    #[default]
    Air = 0,
    Grass = 1,
    Dirt = 2,
    Stone = 3,
    Wood = 4,
    Leaves = 5,
}

/// 体素定义 - 包含体素的基础展示信息
#[derive(Debug, Clone, Copy)]
pub struct VoxelDef {
    /// 方块名称
    pub name: &'static str,
    /// 方块颜色
    pub color: Color,
}

impl VoxelKind {
    /// 方块种类数量
    pub const COUNT: usize = 6;

    /// 全部方块种类，按编号排列
    pub const ALL: [VoxelKind; Self::COUNT] = [
        VoxelKind::Air,
        VoxelKind::Grass,
        VoxelKind::Dirt,
        VoxelKind::Stone,
        VoxelKind::Wood,
        VoxelKind::Leaves,
    ];

    /// 获取当前体素种类的定义信息
    pub fn def(self) -> VoxelDef {
        match self {
            VoxelKind::Air => VoxelDef {
                name: "空气",
                color: Color::NONE,
            },
            VoxelKind::Grass => VoxelDef {
                name: "草方块",
                color: Color::srgb_u8(0x00, 0xFF, 0x00),
            },
            VoxelKind::Dirt => VoxelDef {
                name: "泥土",
                color: Color::srgb_u8(0x8B, 0x45, 0x13),
            },
            VoxelKind::Stone => VoxelDef {
                name: "石头",
                color: Color::srgb_u8(0x80, 0x80, 0x80),
            },
            VoxelKind::Wood => VoxelDef {
                name: "木头",
                color: Color::srgb_u8(0x8B, 0x45, 0x13),
            },
            VoxelKind::Leaves => VoxelDef {
                name: "树叶",
                color: Color::srgb_u8(0x00, 0xFF, 0x00),
            },
        }
    }

    /// 方块编号
    pub fn index(self) -> u8 {
        self as u8
    }

    /// 根据玩家选择的编号获取方块种类
    /// 编号从1开始；0（空气）和超出枚举范围的编号返回 None
    pub fn from_selection(n: u32) -> Option<VoxelKind> {
        match n {
            0 => None,
            n => Self::ALL.get(n as usize).copied(),
        }
    }

    /// 是否为空气
    pub fn is_air(self) -> bool {
        self == VoxelKind::Air
    }

    /// 判断体素是否为固体（用于碰撞检测和放置判定）
    pub fn is_solid(self) -> bool {
        !self.is_air()
    }
}
