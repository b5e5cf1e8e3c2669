use anyhow::Result;
use vibegit_runtime::ServerSettings;
use vibegit_server::ServerConfig;

pub fn handle(settings: ServerSettings) -> Result<()> {
    let config = ServerConfig {
        host: settings.host,
        port: settings.port,
    };

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(serve(config))
}

async fn serve(config: ServerConfig) -> Result<()> {
    let handle = vibegit_server::start(config).await?;
    println!("listening on {}", handle.url());

    handle.run_until_ctrl_c().await?;
    Ok(())
}
