//! 命令参数解析器
//!
//! 支持的输入：
//! - 实数参数: `10`, `-2.5`, `1e3`
//! - 整数参数（多边形边数）: `6`
//! - 图形标识符: `3`

use crate::entity::ShapeId;

/// 解析后的参数值
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputValue {
    /// 实数（坐标、长度）
    Real(f64),
    /// 整数（计数）
    Count(i64),
}

/// 解析错误
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// 需要实数
    InvalidNumber { param: String, input: String },
    /// 需要整数
    InvalidInteger { param: String, input: String },
    /// 无效的标识符
    InvalidId(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidNumber { param, input } => {
                write!(f, "Parameter '{}' must be a number, got '{}'", param, input)
            }
            ParseError::InvalidInteger { param, input } => {
                write!(f, "Parameter '{}' must be an integer, got '{}'", param, input)
            }
            ParseError::InvalidId(input) => write!(f, "ID must be a number, got '{}'", input),
        }
    }
}

impl std::error::Error for ParseError {}

/// 输入解析器
pub struct InputParser;

impl InputParser {
    /// 解析实数参数
    pub fn parse_real(input: &str, param: &str) -> Result<f64, ParseError> {
        input
            .trim()
            .parse::<f64>()
            .map_err(|_| ParseError::InvalidNumber {
                param: param.to_string(),
                input: input.to_string(),
            })
    }

    /// 解析整数参数（不接受小数形式，如 `6.0`）
    pub fn parse_count(input: &str, param: &str) -> Result<i64, ParseError> {
        input
            .trim()
            .parse::<i64>()
            .map_err(|_| ParseError::InvalidInteger {
                param: param.to_string(),
                input: input.to_string(),
            })
    }

    /// 解析图形标识符
    pub fn parse_id(input: &str) -> Result<ShapeId, ParseError> {
        input
            .trim()
            .parse::<u64>()
            .map(ShapeId::new)
            .map_err(|_| ParseError::InvalidId(input.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_real() {
        assert_eq!(InputParser::parse_real("10", "x").unwrap(), 10.0);
        assert_eq!(InputParser::parse_real("-2.5", "y").unwrap(), -2.5);
        assert_eq!(InputParser::parse_real("1e3", "r").unwrap(), 1000.0);
    }

    #[test]
    fn test_parse_real_invalid() {
        let err = InputParser::parse_real("abc", "radius").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidNumber {
                param: "radius".to_string(),
                input: "abc".to_string()
            }
        );
        assert_eq!(
            err.to_string(),
            "Parameter 'radius' must be a number, got 'abc'"
        );
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(InputParser::parse_count("6", "num_sides").unwrap(), 6);
        assert_eq!(InputParser::parse_count("-3", "num_sides").unwrap(), -3);
        assert!(matches!(
            InputParser::parse_count("6.5", "num_sides"),
            Err(ParseError::InvalidInteger { .. })
        ));
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(InputParser::parse_id("3").unwrap(), ShapeId::new(3));
        assert_eq!(
            InputParser::parse_id("x1"),
            Err(ParseError::InvalidId("x1".to_string()))
        );
        assert!(InputParser::parse_id("-1").is_err());
    }
}
