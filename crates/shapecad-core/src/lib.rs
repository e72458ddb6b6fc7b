//! ShapeCAD 核心几何引擎
//!
//! 提供2D/3D几何图元、派生度量计算和图形注册表。
//!
//! # 架构设计
//!
//! - `Geometry`: 封闭的几何变体集合（点、线、圆……四面体）
//! - `Shape`: 标识符 + 名称 + 几何数据
//! - `ShapeRegistry`: 独占所有图形的注册表，单调分配标识符
//!
//! # 示例
//!
//! ```rust
//! use shapecad_core::prelude::*;
//!
//! let mut registry = ShapeRegistry::new();
//!
//! // 创建一个圆并注册
//! let circle = Circle::new(Point2::new(0.0, 0.0), 5.0).unwrap();
//! let id = registry.create(Shape::new("Wheel", Geometry::Circle(circle))).unwrap();
//! assert_eq!(id, ShapeId::new(1));
//!
//! // 查看结构化信息
//! let info = registry.get(id).unwrap().info();
//! println!("Area: {}", info["area"]);
//! ```

pub mod entity;
pub mod error;
pub mod geometry;
pub mod input_parser;
pub mod kind;
pub mod math;
pub mod registry;

pub mod prelude {
    //! 常用类型的便捷导入
    pub use crate::entity::{Shape, ShapeId};
    pub use crate::error::{RegistryError, ShapeError};
    pub use crate::geometry::{
        Circle, Geometry, Line, Metrics, Oval, Parallelepiped, Point, Rectangle, RegularPolygon,
        Shape2D, Shape3D, Square, Tetrahedron,
    };
    pub use crate::input_parser::{InputParser, InputValue, ParseError};
    pub use crate::kind::{ParamKind, ParamSpec, ShapeKind};
    pub use crate::math::{Point2, Point3};
    pub use crate::registry::{ShapeRegistry, Snapshot};
}
