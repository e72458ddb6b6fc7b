//! 终端文本输出

use crate::repl::Ending;
use shapecad_ui::{CommandError, ConfirmAction, Response};
use std::io::{self, Write};

const BANNER_WIDTH: usize = 60;

pub fn banner(out: &mut impl Write) -> io::Result<()> {
    let rule = "=".repeat(BANNER_WIDTH);
    writeln!(out, "{}", rule)?;
    writeln!(out, "{:^width$}", "ShapeCAD vector editor", width = BANNER_WIDTH)?;
    writeln!(out, "{}", rule)?;
    writeln!(out, "Type 'help' to see available commands")
}

pub fn prompt(out: &mut impl Write) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}

/// 会话结束提示（`exit` 已由命令结果输出）
pub fn ending(out: &mut impl Write, ending: Ending) -> io::Result<()> {
    match ending {
        Ending::Exit => Ok(()),
        Ending::EndOfInput => {
            writeln!(out)?;
            writeln!(out, "End of input")
        }
        Ending::Interrupted => {
            writeln!(out)?;
            writeln!(out, "Interrupted by user")
        }
    }
}

/// 输出命令结果
pub fn response(out: &mut impl Write, response: &Response) -> io::Result<()> {
    match response {
        Response::Noop => Ok(()),
        Response::Created { summary, .. } => writeln!(out, "Created shape: {}", summary),
        Response::Listing(entries) => {
            writeln!(out, "Shapes:")?;
            for (id, summary) in entries {
                writeln!(out, "  {}: {}", id, summary)?;
            }
            Ok(())
        }
        Response::Empty => writeln!(out, "The shape list is empty"),
        Response::Info { id, record } => {
            writeln!(out, "Shape {} info:", id)?;
            writeln!(out, "{}", serde_json::to_string_pretty(record)?)
        }
        Response::ConfirmationRequired { description, .. } => {
            writeln!(out, "{} (y/n)", description)
        }
        Response::Deleted { summary, .. } => writeln!(out, "Deleted shape: {}", summary),
        Response::Cleared { count } => writeln!(out, "Deleted shapes: {}", count),
        Response::AlreadyEmpty => writeln!(out, "The shape list is already empty"),
        Response::Cancelled(action) => {
            let what = match action {
                ConfirmAction::Delete | ConfirmAction::Clear => "Deletion",
                ConfirmAction::Load => "Loading",
            };
            writeln!(out, "{} cancelled", what)
        }
        Response::Saved { path, count } => {
            writeln!(out, "Saved {} shapes to '{}'", count, path.display())
        }
        Response::Loaded { path, count } => {
            writeln!(out, "Shapes loaded from '{}'", path.display())?;
            writeln!(out, "Loaded shapes: {}", count)
        }
        Response::Help(help) => {
            writeln!(out, "Available commands:")?;
            for (usage, description) in &help.commands {
                writeln!(out, "  {:<34}- {}", usage, description)?;
            }
            writeln!(out, "Available shape types:")?;
            for (usage, description) in &help.shapes {
                writeln!(out, "  {}: {}", description, usage)?;
            }
            Ok(())
        }
        Response::Exit => writeln!(out, "Exiting editor"),
    }
}

/// 输出命令错误（错误从不终止会话）
pub fn error(out: &mut impl Write, err: &CommandError) -> io::Result<()> {
    writeln!(out, "Error: {}", err)?;

    match err {
        CommandError::UnknownCommand { suggestions, .. } => {
            if !suggestions.is_empty() {
                writeln!(out, "Did you mean: {}?", suggestions.join(", "))?;
            }
            writeln!(out, "Use 'help' to see available commands")
        }
        CommandError::UnknownType(_) => writeln!(out, "Use 'help' to see available shape types"),
        _ => Ok(()),
    }
}
