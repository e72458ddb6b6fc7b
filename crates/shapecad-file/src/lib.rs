//! ShapeCAD 文件格式处理
//!
//! 支持：
//! - `.shapes` 原生格式（版本化文件头 + MessagePack + Zstd）

pub mod error;
pub mod native;

pub use error::FileError;
pub use native::{canonical_path, load, save, DEFAULT_EXTENSION};
