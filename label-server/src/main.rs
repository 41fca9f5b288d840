use label_server::{AppState, Config, Server, print_banner, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 设置环境 (dotenv, 日志)
    setup_environment()?;

    print_banner();

    tracing::info!("Label Station starting...");

    // 2. 加载配置
    let config = Config::from_env();

    // 3. 初始化状态 (打开存储, 装配渲染器)
    let state = AppState::initialize(&config)?;

    // 4. 启动 HTTP 服务器
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e);
    }

    Ok(())
}
