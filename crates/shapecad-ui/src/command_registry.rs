//! 命令注册表
//!
//! 支持完整命令、快捷命令和前缀补全，查找不区分大小写。

use crate::action::Verb;
use std::collections::HashMap;

/// 命令注册表
///
/// 管理所有命令与快捷命令到 [`Verb`] 的映射
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    /// 完整命令 -> Verb
    main_commands: HashMap<String, Verb>,
    /// 快捷命令 -> Verb
    short_commands: HashMap<String, Verb>,
    /// Verb -> 完整命令（反向查找）
    verb_to_command: HashMap<Verb, String>,
}

impl CommandRegistry {
    /// 创建新的命令注册表
    pub fn new() -> Self {
        let mut registry = Self {
            main_commands: HashMap::new(),
            short_commands: HashMap::new(),
            verb_to_command: HashMap::new(),
        };

        // 注册默认命令
        registry.register_defaults();

        registry
    }

    /// 注册默认命令
    fn register_defaults(&mut self) {
        self.register(Verb::Help, "HELP", &["?"]);
        self.register(Verb::Create, "CREATE", &["NEW"]);
        self.register(Verb::List, "LIST", &["LS"]);
        self.register(Verb::Info, "INFO", &["SHOW"]);
        self.register(Verb::Delete, "DELETE", &["DEL", "RM"]);
        self.register(Verb::Clear, "CLEAR", &[]);
        self.register(Verb::Save, "SAVE", &[]);
        self.register(Verb::Load, "LOAD", &["OPEN"]);
        self.register(Verb::Exit, "EXIT", &["QUIT", "Q"]);
    }

    /// 注册命令
    ///
    /// 扩展点：嵌入方可在默认命令之外追加别名或快捷命令，
    /// 同名的完整命令会覆盖旧映射。
    ///
    /// # 参数
    /// - `verb`: 命令动词
    /// - `full_cmd`: 完整命令名（如 "DELETE"）
    /// - `shortcuts`: 快捷命令列表（如 ["RM"]）
    pub fn register(&mut self, verb: Verb, full_cmd: &str, shortcuts: &[&str]) {
        let full_cmd_upper = full_cmd.to_uppercase();

        self.main_commands.insert(full_cmd_upper.clone(), verb);
        self.verb_to_command.insert(verb, full_cmd_upper);

        for shortcut in shortcuts {
            self.short_commands.insert(shortcut.to_uppercase(), verb);
        }
    }

    /// 查找命令对应的 Verb
    pub fn lookup(&self, input: &str) -> Option<Verb> {
        let input_upper = input.to_uppercase();

        // 先查完整命令，再查快捷命令
        self.main_commands
            .get(&input_upper)
            .or_else(|| self.short_commands.get(&input_upper))
            .copied()
    }

    /// 返回所有以 prefix 开头的完整命令（小写，已排序）
    pub fn complete(&self, prefix: &str) -> Vec<String> {
        let prefix_upper = prefix.to_uppercase();
        let mut results: Vec<String> = self
            .main_commands
            .keys()
            .filter(|cmd| cmd.starts_with(&prefix_upper))
            .map(|cmd| cmd.to_lowercase())
            .collect();

        results.sort();
        results
    }

    /// 获取命令的完整名称（大写）
    ///
    /// 扩展点：供嵌入方展示命令别名时反查规范名称。
    pub fn get_command_name(&self, verb: Verb) -> Option<&str> {
        self.verb_to_command.get(&verb).map(|s| s.as_str())
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
