//! 会话状态管理
//!
//! 状态机：
//! ```text
//! AwaitingCommand --(delete / clear / 覆盖已有数据的 load)--> AwaitingConfirmation
//! AwaitingConfirmation --(肯定回答)--> 执行修改 --> AwaitingCommand
//! AwaitingConfirmation --(其他回答)--> 取消，不修改 --> AwaitingCommand
//! AwaitingCommand --(exit)--> Terminated
//! ```

use crate::action::{ConfirmAction, HelpText, PendingAction, Response, Verb};
use crate::command_line::CommandLine;
use crate::command_registry::CommandRegistry;
use crate::config::SessionConfig;
use crate::error::CommandError;
use shapecad_core::entity::{Shape, ShapeId};
use shapecad_core::input_parser::InputParser;
use shapecad_core::kind::ShapeKind;
use shapecad_core::registry::ShapeRegistry;
use shapecad_file::native;

/// 会话状态
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// 等待命令
    AwaitingCommand,
    /// 等待确认
    AwaitingConfirmation(PendingAction),
    /// 已退出
    Terminated,
}

/// 交互会话：命令分发 + 注册表
#[derive(Debug)]
pub struct Session {
    registry: ShapeRegistry,
    commands: CommandRegistry,
    config: SessionConfig,
    state: SessionState,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            registry: ShapeRegistry::new(),
            commands: CommandRegistry::new(),
            config,
            state: SessionState::AwaitingCommand,
        }
    }

    pub fn registry(&self) -> &ShapeRegistry {
        &self.registry
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_awaiting_confirmation(&self) -> bool {
        matches!(self.state, SessionState::AwaitingConfirmation(_))
    }

    pub fn is_terminated(&self) -> bool {
        self.state == SessionState::Terminated
    }

    /// 处理一行输入
    ///
    /// 等待确认时整行视为回答，否则作为命令执行。
    pub fn handle_line(&mut self, line: &str) -> Result<Response, CommandError> {
        if self.is_awaiting_confirmation() {
            let confirmed = self.config.is_affirmative(line);
            self.resume(confirmed)
        } else {
            self.execute(line)
        }
    }

    /// 执行一条命令
    pub fn execute(&mut self, line: &str) -> Result<Response, CommandError> {
        match self.state {
            SessionState::AwaitingCommand => {}
            SessionState::AwaitingConfirmation(_) => return Err(CommandError::ConfirmationPending),
            SessionState::Terminated => return Err(CommandError::SessionClosed),
        }

        let Some(cmd) = CommandLine::parse(line) else {
            return Ok(Response::Noop);
        };

        let verb = self
            .commands
            .lookup(cmd.verb)
            .ok_or_else(|| CommandError::UnknownCommand {
                command: cmd.verb.to_string(),
                suggestions: self.commands.complete(cmd.verb),
            })?;

        tracing::debug!("Dispatching {:?} with {} args", verb, cmd.args.len());

        match verb {
            Verb::Help => Ok(self.help()),
            Verb::Create => self.create(&cmd.args),
            Verb::List => Ok(self.list()),
            Verb::Info => self.info(&cmd.args),
            Verb::Delete => self.delete(&cmd.args),
            Verb::Clear => Ok(self.clear()),
            Verb::Save => self.save(&cmd.args),
            Verb::Load => self.load(&cmd.args),
            Verb::Exit => {
                self.state = SessionState::Terminated;
                Ok(Response::Exit)
            }
        }
    }

    /// 恢复入口：以用户的回答完成挂起的操作
    pub fn resume(&mut self, confirmed: bool) -> Result<Response, CommandError> {
        let pending = match std::mem::replace(&mut self.state, SessionState::AwaitingCommand) {
            SessionState::AwaitingConfirmation(pending) => pending,
            other => {
                self.state = other;
                return Err(CommandError::NoPendingConfirmation);
            }
        };

        if !confirmed {
            tracing::info!("{:?} cancelled", pending.action());
            return Ok(Response::Cancelled(pending.action()));
        }

        match pending {
            PendingAction::Delete(id) => {
                let shape = self.registry.delete(id)?;
                tracing::info!("Deleted shape {}", shape);
                Ok(Response::Deleted {
                    id,
                    summary: shape.to_string(),
                })
            }
            PendingAction::Clear => {
                let count = self.registry.clear();
                tracing::info!("Cleared {} shapes", count);
                Ok(Response::Cleared { count })
            }
            PendingAction::Load { path, snapshot } => {
                let count = snapshot.shapes.len();
                self.registry.restore(snapshot);
                tracing::info!("Replaced registry with {} shapes from {}", count, path.display());
                Ok(Response::Loaded { path, count })
            }
        }
    }

    fn help(&self) -> Response {
        Response::Help(HelpText {
            commands: Verb::ALL
                .iter()
                .map(|verb| (verb.usage(), verb.description()))
                .collect(),
            shapes: ShapeKind::ALL
                .iter()
                .map(|kind| (kind.usage(), kind.description()))
                .collect(),
        })
    }

    fn create(&mut self, args: &[&str]) -> Result<Response, CommandError> {
        let Some((keyword, rest)) = args.split_first() else {
            return Err(CommandError::InsufficientArguments {
                usage: Verb::Create.usage().to_string(),
            });
        };

        let kind = ShapeKind::from_keyword(keyword)
            .ok_or_else(|| CommandError::UnknownType(keyword.to_string()))?;

        let arity = kind.arity();
        if rest.len() < arity {
            return Err(CommandError::InsufficientArguments {
                usage: kind.usage(),
            });
        }

        let values = kind.parse_values(&rest[..arity])?;
        let name = match rest.get(arity) {
            Some(name) => name.to_string(),
            None => kind.default_name(self.registry.next_id()),
        };

        // 校验失败时不会注册任何图形
        let geometry = kind.build(&values)?;
        let id = self.registry.create(Shape::new(name, geometry))?;
        let summary = self.registry.get(id)?.to_string();

        tracing::info!("Created shape {}", summary);
        Ok(Response::Created { id, summary })
    }

    fn list(&self) -> Response {
        if self.registry.is_empty() {
            return Response::Empty;
        }

        Response::Listing(
            self.registry
                .list()
                .map(|(id, shape)| (id, shape.to_string()))
                .collect(),
        )
    }

    fn info(&self, args: &[&str]) -> Result<Response, CommandError> {
        let id = Self::parse_id_arg(args, Verb::Info)?;
        let shape = self.registry.get(id)?;
        Ok(Response::Info {
            id,
            record: shape.info(),
        })
    }

    fn delete(&mut self, args: &[&str]) -> Result<Response, CommandError> {
        let id = Self::parse_id_arg(args, Verb::Delete)?;
        let shape = self.registry.get(id)?;

        let description = format!("Are you sure you want to delete shape: {}?", shape);
        self.state = SessionState::AwaitingConfirmation(PendingAction::Delete(id));

        Ok(Response::ConfirmationRequired {
            action: ConfirmAction::Delete,
            description,
        })
    }

    fn clear(&mut self) -> Response {
        if self.registry.is_empty() {
            return Response::AlreadyEmpty;
        }

        let description = format!(
            "Are you sure you want to delete all shapes ({})?",
            self.registry.len()
        );
        self.state = SessionState::AwaitingConfirmation(PendingAction::Clear);

        Response::ConfirmationRequired {
            action: ConfirmAction::Clear,
            description,
        }
    }

    fn save(&self, args: &[&str]) -> Result<Response, CommandError> {
        let name = Self::file_arg(args, Verb::Save)?;
        let path = self.config.resolve_path(name);

        native::save(&self.registry.snapshot(), &path)?;

        Ok(Response::Saved {
            path,
            count: self.registry.len(),
        })
    }

    fn load(&mut self, args: &[&str]) -> Result<Response, CommandError> {
        let name = Self::file_arg(args, Verb::Load)?;
        let path = self.config.resolve_path(name);

        // 读取和校验在确认之前完成，失败时不改变注册表
        let snapshot = native::load(&path)?;

        if self.registry.is_empty() {
            let count = snapshot.shapes.len();
            self.registry.restore(snapshot);
            return Ok(Response::Loaded { path, count });
        }

        let description = format!(
            "You already have {} shapes. Loading will replace them. Continue?",
            self.registry.len()
        );
        self.state = SessionState::AwaitingConfirmation(PendingAction::Load { path, snapshot });

        Ok(Response::ConfirmationRequired {
            action: ConfirmAction::Load,
            description,
        })
    }

    fn parse_id_arg(args: &[&str], verb: Verb) -> Result<ShapeId, CommandError> {
        let token = args
            .first()
            .ok_or_else(|| CommandError::InsufficientArguments {
                usage: verb.usage().to_string(),
            })?;
        Ok(InputParser::parse_id(token)?)
    }

    fn file_arg<'a>(args: &[&'a str], verb: Verb) -> Result<&'a str, CommandError> {
        args.first()
            .copied()
            .ok_or_else(|| CommandError::InsufficientArguments {
                usage: verb.usage().to_string(),
            })
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
