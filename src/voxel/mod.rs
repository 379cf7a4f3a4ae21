//! 体素世界模块
//!
//! 这个模块包含了体素世界的数据模型和读写协议：
//!
//! - **constants**: 常量定义（区块尺寸、地形分层高度）
//! - **voxel_kind**: 体素类型定义（方块种类、颜色、选择编号）
//! - **error**: 网格访问与方块编辑的错误类型
//! - **chunk**: 区块数据结构（区块坐标、体素存储、世界管理）
//! - **query**: 世界坐标与区块/局部坐标换算，方块查询
//! - **terrain**: 地形生成器（固定分层）
//! - **editor**: 方块放置与移除
//! - **rendered**: 当前可见方块实例集合
//! - **change**: 世界变更日志
//! - **systems**: ECS系统函数（初始区块生成、方块实体同步）
//! - **materials**: 材质系统
//! - **components**: 体素相关组件
//! - **plugin**: Bevy插件

pub mod change;
pub mod chunk;
pub mod components;
pub mod constants;
pub mod editor;
pub mod error;
pub mod materials;
pub mod plugin;
pub mod query;
pub mod rendered;
pub mod systems;
pub mod terrain;
pub mod voxel_kind;

// 重新导出常用类型，方便外部使用
pub use chunk::VoxelWorld;
pub use error::EditError;
pub use plugin::VoxelPlugin;
pub use terrain::TerrainGenerator;
pub use voxel_kind::VoxelKind;
