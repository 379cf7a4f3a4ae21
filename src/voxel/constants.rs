//! 体素世界常量定义

/// 区块在X方向上的宽度（单位：体素）
pub const CHUNK_WIDTH: i32 = 16;

/// 区块在Z方向上的深度（单位：体素）
pub const CHUNK_DEPTH: i32 = 16;

/// 区块在Y方向上的高度（单位：体素）- 区块在垂直方向上不再细分
pub const CHUNK_HEIGHT: i32 = 50;

/// 石头层上界（不含）
pub const STONE_TOP: i32 = 10;

/// 泥土层上界（不含）
pub const DIRT_TOP: i32 = 15;

/// 草方块所在高度，也是地表高度
pub const GRASS_LEVEL: i32 = 15;

/// 单个区块的体素总数
pub const CHUNK_VOLUME: usize = (CHUNK_WIDTH * CHUNK_DEPTH * CHUNK_HEIGHT) as usize;
