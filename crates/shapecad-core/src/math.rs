//! 数学基础类型
//!
//! 基于 nalgebra 的坐标类型别名。

/// 2D 点
pub type Point2 = nalgebra::Point2<f64>;

/// 3D 点
pub type Point3 = nalgebra::Point3<f64>;
