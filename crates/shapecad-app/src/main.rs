//! ShapeCAD 交互式命令行入口
//! 逐行读取标准输入，交给会话分发，并把结果写到标准输出

mod render;
mod repl;

use anyhow::Result;
use shapecad_ui::{Session, SessionConfig};
use std::io::{self, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// 等待 Ctrl-C；无法注册信号时永不完成
async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Cannot listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();

    let config = SessionConfig::from_env();
    info!("Starting ShapeCAD with {:?}", config);

    let mut session = Session::new(config);
    let mut stdout = io::stdout();
    render::banner(&mut stdout)?;

    let lines = repl::spawn_line_reader(BufReader::new(io::stdin()));
    let ending = repl::run(&mut session, lines, ctrl_c(), &mut stdout).await?;

    // 所有结束方式都以状态码 0 退出
    info!("ShapeCAD session finished ({:?})", ending);
    Ok(())
}
