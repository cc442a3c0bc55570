use catalog_server::{Config, Server, ServerState, init_logger_with_file, print_banner};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (dotenv, work dir, logging)
    dotenv::dotenv().ok();
    let config = Config::from_env();
    config.ensure_work_dir_structure()?;
    let logs_dir = config.logs_dir();
    init_logger_with_file(&config.log_level, Some(logs_dir.as_path()));

    print_banner();
    tracing::info!("Nectar Catalog Server starting...");

    // 2. Initialize server state
    let state = ServerState::initialize(&config).await?;

    // 3. Run the HTTP server (REST + GraphQL)
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e);
    }

    Ok(())
}
