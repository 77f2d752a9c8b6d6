//! 数学库模块
//!
//! 基于 `nalgebra` 的类型别名，以及网格后处理使用的几何函数。
//!
//! # 模块组织
//!
//! - **基础类型**：Vector2 / Vector3
//! - **常量**：EPSILON
//! - **几何处理**：法线重建、切线计算、顶点焊接（见 geometry 子模块）

pub use nalgebra::{Vector2 as Vec2, Vector3 as Vec3};

// 类型别名，使用更简洁的名称
pub type Vector2 = Vec2<f32>;
pub type Vector3 = Vec3<f32>;

/// 浮点数比较的 epsilon
pub const EPSILON: f32 = 1e-6;

/// 检查两个浮点数是否近似相等
pub fn approx_eq(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}

/// 检查两个 3D 向量是否逐分量近似相等
pub fn approx_eq3(a: [f32; 3], b: [f32; 3], epsilon: f32) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| approx_eq(*x, *y, epsilon))
}

// 几何处理模块（网格法线、切线等）
pub mod geometry;
