//! 会话配置

use shapecad_file::{canonical_path, DEFAULT_EXTENSION};
use std::path::PathBuf;

/// 保存/加载相对路径的基准目录
pub const ENV_DATA_DIR: &str = "SHAPECAD_DATA_DIR";

/// 规范文件扩展名
pub const ENV_EXTENSION: &str = "SHAPECAD_EXTENSION";

/// 会话配置
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// 相对文件名的基准目录（None 表示当前目录）
    pub data_dir: Option<PathBuf>,
    /// 规范扩展名（不含点）
    pub extension: String,
    /// 视为肯定的确认回答（小写）
    pub affirmative_answers: Vec<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            extension: DEFAULT_EXTENSION.to_string(),
            affirmative_answers: vec!["y".to_string(), "yes".to_string(), "да".to_string()],
        }
    }
}

impl SessionConfig {
    /// 从环境变量读取覆盖项
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = var(ENV_DATA_DIR).filter(|v| !v.trim().is_empty()) {
            config.data_dir = Some(PathBuf::from(dir));
        }

        if let Some(ext) = var(ENV_EXTENSION) {
            let ext = ext.trim().trim_start_matches('.');
            if !ext.is_empty() {
                config.extension = ext.to_string();
            }
        }

        config
    }

    /// 补全扩展名并解析到基准目录
    pub fn resolve_path(&self, name: &str) -> PathBuf {
        let path = canonical_path(name, &self.extension);
        match &self.data_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path,
        }
    }

    /// 回答是否为肯定（忽略大小写和首尾空白）
    pub fn is_affirmative(&self, answer: &str) -> bool {
        let answer = answer.trim().to_lowercase();
        self.affirmative_answers.iter().any(|a| *a == answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_affirmative_answers() {
        let config = SessionConfig::default();
        assert!(config.is_affirmative("y"));
        assert!(config.is_affirmative(" YES "));
        assert!(config.is_affirmative("Да"));
        assert!(!config.is_affirmative("n"));
        assert!(!config.is_affirmative(""));
        assert!(!config.is_affirmative("yep"));
    }

    #[test]
    fn test_resolve_path() {
        let mut config = SessionConfig::default();
        assert_eq!(config.resolve_path("drawing"), PathBuf::from("drawing.shapes"));

        config.data_dir = Some(PathBuf::from("/tmp/shapes"));
        assert_eq!(
            config.resolve_path("drawing.shapes"),
            PathBuf::from("/tmp/shapes/drawing.shapes")
        );
    }

    #[test]
    fn test_from_vars() {
        let vars: HashMap<&str, &str> =
            HashMap::from([(ENV_DATA_DIR, "/data"), (ENV_EXTENSION, ".geo")]);
        let config = SessionConfig::from_vars(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.data_dir, Some(PathBuf::from("/data")));
        assert_eq!(config.extension, "geo");
        assert_eq!(config.resolve_path("x"), PathBuf::from("/data/x.geo"));
    }

    #[test]
    fn test_from_vars_defaults() {
        let config = SessionConfig::from_vars(|_| None);
        assert_eq!(config, SessionConfig::default());
    }
}
