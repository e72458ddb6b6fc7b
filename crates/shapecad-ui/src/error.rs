//! 命令错误定义
//!
//! 所有错误都在分发边界被恢复：单条命令失败只报告给用户，不改变任何状态。

use shapecad_core::entity::ShapeId;
use shapecad_core::error::{RegistryError, ShapeError};
use shapecad_core::input_parser::ParseError;
use shapecad_file::FileError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Invalid shape parameters: {0}")]
    Validation(#[from] ShapeError),

    #[error("{0}")]
    Parse(#[from] ParseError),

    #[error("Unknown shape type '{0}'")]
    UnknownType(String),

    #[error("Unknown command '{command}'")]
    UnknownCommand {
        command: String,
        /// 以输入为前缀的已知命令
        suggestions: Vec<String>,
    },

    #[error("Shape with ID {0} not found")]
    NotFound(ShapeId),

    #[error("No more shape IDs are available")]
    IdsExhausted,

    #[error("Insufficient parameters. Usage: {usage}")]
    InsufficientArguments { usage: String },

    #[error("{0}")]
    Io(FileError),

    #[error("Corrupt file format: {0}")]
    Format(FileError),

    #[error("A confirmation is pending, answer it first")]
    ConfirmationPending,

    #[error("No confirmation is pending")]
    NoPendingConfirmation,

    #[error("Session has ended")]
    SessionClosed,
}

impl From<RegistryError> for CommandError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::NotFound(id) => CommandError::NotFound(id),
            RegistryError::IdsExhausted => CommandError::IdsExhausted,
        }
    }
}

impl From<FileError> for CommandError {
    fn from(err: FileError) -> Self {
        if err.is_format_error() {
            CommandError::Format(err)
        } else {
            CommandError::Io(err)
        }
    }
}
