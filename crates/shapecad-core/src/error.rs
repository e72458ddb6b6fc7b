//! 核心错误定义

use crate::entity::ShapeId;
use thiserror::Error;

/// 图形构造或计算错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// 尺寸参数必须严格为正
    #[error("{field} must be a positive number, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    /// 正多边形边数不足（或超出范围）
    #[error("a regular polygon needs at least 3 sides, got {0}")]
    InvalidSideCount(i64),

    /// 派生度量无法得到有限值
    #[error("{metric} is not a finite number ({value})")]
    Calculation { metric: &'static str, value: f64 },

    /// 构造参数少于该类型所需个数（调用方未先检查参数数量）
    #[error("missing parameter #{index} for {kind}")]
    MissingParameter { kind: &'static str, index: usize },
}

/// 注册表错误
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    #[error("shape with id {0} not found")]
    NotFound(ShapeId),

    /// 标识符计数器已到上限
    #[error("no shape ids left to assign")]
    IdsExhausted,
}
