//! 命令行分词

/// 一条已分词的命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine<'a> {
    pub verb: &'a str,
    pub args: Vec<&'a str>,
}

impl<'a> CommandLine<'a> {
    /// 按空白分词，空行返回 None
    pub fn parse(input: &'a str) -> Option<Self> {
        let mut words = input.split_whitespace();
        let verb = words.next()?;
        Some(Self {
            verb,
            args: words.collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let cmd = CommandLine::parse("  create   point 1 2\tP ").unwrap();
        assert_eq!(cmd.verb, "create");
        assert_eq!(cmd.args, ["point", "1", "2", "P"]);

        assert_eq!(CommandLine::parse("   "), None);
    }
}
