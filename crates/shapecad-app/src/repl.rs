//! 交互循环
//!
//! 标准输入在独立线程中阻塞读取，逐行经通道送入循环；循环同时等待中断信号。
//! 每行按字节读取并做有损 UTF-8 解码，无法解码的输入只影响当前这一行。

use crate::render;
use shapecad_ui::Session;
use std::future::Future;
use std::io::{self, BufRead, Write};
use tokio::sync::mpsc;

/// 会话结束方式（均视为正常退出）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    /// `exit` 命令
    Exit,
    /// 输入流结束
    EndOfInput,
    /// 用户中断
    Interrupted,
}

/// 读取一行，去掉行尾换行符；输入结束时返回 `None`
pub fn read_line_lossy(reader: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }

    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }

    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

/// 在独立线程中逐行读取输入
pub fn spawn_line_reader<R>(mut reader: R) -> mpsc::Receiver<io::Result<String>>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::channel(1);

    std::thread::spawn(move || loop {
        let line = match read_line_lossy(&mut reader) {
            Ok(Some(line)) => Ok(line),
            Ok(None) => break,
            Err(e) => Err(e),
        };
        let failed = line.is_err();
        if tx.blocking_send(line).is_err() || failed {
            break;
        }
    });

    rx
}

/// 运行交互循环，直到 `exit`、输入结束或中断
pub async fn run(
    session: &mut Session,
    mut lines: mpsc::Receiver<io::Result<String>>,
    interrupt: impl Future<Output = ()>,
    out: &mut impl Write,
) -> io::Result<Ending> {
    tokio::pin!(interrupt);

    let ending = loop {
        render::prompt(out)?;

        let line = tokio::select! {
            line = lines.recv() => line,
            () = &mut interrupt => break Ending::Interrupted,
        };

        let line = match line {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                tracing::error!("Failed to read input: {}", e);
                break Ending::EndOfInput;
            }
            None => break Ending::EndOfInput,
        };

        match session.handle_line(&line) {
            Ok(response) => render::response(out, &response)?,
            Err(e) => {
                tracing::debug!("Command failed: {:?}", e);
                render::error(out, &e)?;
            }
        }

        if session.is_terminated() {
            break Ending::Exit;
        }
    };

    render::ending(out, ending)?;
    out.flush()?;
    Ok(ending)
}
