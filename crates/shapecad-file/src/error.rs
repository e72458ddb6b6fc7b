//! 文件操作错误定义

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File '{}' not found", .0.display())]
    NotFound(PathBuf),

    #[error("MessagePack encode error: {0}")]
    MsgPackEncode(#[from] rmp_serde::encode::Error),

    #[error("MessagePack decode error: {0}")]
    MsgPackDecode(#[from] rmp_serde::decode::Error),

    #[error("Invalid file format: {0}")]
    InvalidFormat(String),

    #[error("Unsupported version: {0}")]
    UnsupportedVersion(String),

    #[error("Corruption detected: {0}")]
    Corruption(String),
}

impl FileError {
    /// 文件内容结构不合法（而非读写失败）
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            FileError::MsgPackDecode(_)
                | FileError::InvalidFormat(_)
                | FileError::UnsupportedVersion(_)
                | FileError::Corruption(_)
        )
    }
}
