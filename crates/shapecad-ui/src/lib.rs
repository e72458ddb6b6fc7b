//! ShapeCAD 命令分发
//!
//! 把一行文本命令映射为对注册表的操作，并通过两阶段确认协议
//! 处理破坏性命令（delete / clear / load）。终端 I/O 不在本 crate 内。

pub mod action;
pub mod command_line;
pub mod command_registry;
pub mod config;
pub mod error;
pub mod state;

pub use action::{ConfirmAction, HelpText, PendingAction, Response, Verb};
pub use config::SessionConfig;
pub use error::CommandError;
pub use state::{Session, SessionState};
