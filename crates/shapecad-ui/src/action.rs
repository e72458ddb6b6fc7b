//! 命令与执行结果
//!
//! 破坏性操作采用两阶段协议：分发器先返回 [`Response::ConfirmationRequired`]，
//! 外部 I/O 层取得用户回答后再调用恢复入口，核心逻辑本身从不阻塞等待输入。

use serde_json::Value;
use shapecad_core::entity::ShapeId;
use shapecad_core::registry::Snapshot;
use std::path::PathBuf;

/// 命令动词
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Help,
    Create,
    List,
    Info,
    Delete,
    Clear,
    Save,
    Load,
    Exit,
}

impl Verb {
    pub const ALL: [Verb; 9] = [
        Verb::Help,
        Verb::Create,
        Verb::List,
        Verb::Info,
        Verb::Delete,
        Verb::Clear,
        Verb::Save,
        Verb::Load,
        Verb::Exit,
    ];

    /// 获取命令的名称
    pub fn name(&self) -> &'static str {
        match self {
            Verb::Help => "help",
            Verb::Create => "create",
            Verb::List => "list",
            Verb::Info => "info",
            Verb::Delete => "delete",
            Verb::Clear => "clear",
            Verb::Save => "save",
            Verb::Load => "load",
            Verb::Exit => "exit",
        }
    }

    pub fn usage(&self) -> &'static str {
        match self {
            Verb::Help => "help",
            Verb::Create => "create <type> <params...> [name]",
            Verb::List => "list",
            Verb::Info => "info <id>",
            Verb::Delete => "delete <id>",
            Verb::Clear => "clear",
            Verb::Save => "save <filename>",
            Verb::Load => "load <filename>",
            Verb::Exit => "exit",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Verb::Help => "Show this help",
            Verb::Create => "Create a new shape",
            Verb::List => "List all shapes",
            Verb::Info => "Show detailed information about a shape",
            Verb::Delete => "Delete a shape",
            Verb::Clear => "Delete all shapes",
            Verb::Save => "Save shapes to a file",
            Verb::Load => "Load shapes from a file",
            Verb::Exit => "Exit the editor",
        }
    }
}

/// 需要确认的操作类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    Delete,
    Clear,
    Load,
}

/// 等待确认的操作（携带恢复时需要的全部数据）
#[derive(Debug, Clone, PartialEq)]
pub enum PendingAction {
    Delete(ShapeId),
    Clear,
    /// 快照在确认前已读取并校验
    Load { path: PathBuf, snapshot: Snapshot },
}

impl PendingAction {
    pub fn action(&self) -> ConfirmAction {
        match self {
            PendingAction::Delete(_) => ConfirmAction::Delete,
            PendingAction::Clear => ConfirmAction::Clear,
            PendingAction::Load { .. } => ConfirmAction::Load,
        }
    }
}

/// 帮助内容
#[derive(Debug, Clone, PartialEq)]
pub struct HelpText {
    /// (用法, 说明)
    pub commands: Vec<(&'static str, &'static str)>,
    /// (用法, 说明)
    pub shapes: Vec<(String, &'static str)>,
}

/// 命令执行结果
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// 空行，无操作
    Noop,
    Created {
        id: ShapeId,
        summary: String,
    },
    Listing(Vec<(ShapeId, String)>),
    /// 注册表为空
    Empty,
    Info {
        id: ShapeId,
        record: Value,
    },
    /// 需要用户确认后才能继续
    ConfirmationRequired {
        action: ConfirmAction,
        description: String,
    },
    Deleted {
        id: ShapeId,
        summary: String,
    },
    Cleared {
        count: usize,
    },
    /// 清空时注册表已为空
    AlreadyEmpty,
    Cancelled(ConfirmAction),
    Saved {
        path: PathBuf,
        count: usize,
    },
    Loaded {
        path: PathBuf,
        count: usize,
    },
    Help(HelpText),
    Exit,
}
