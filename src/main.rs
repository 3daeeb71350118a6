use appointment_relay::{api, utils, AppState, Config};
use log::info;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    utils::init_logging();

    let config = Config::from_env()?;
    let addr = config.listen_addr();
    let port = config.port;

    let app = api::app(AppState::new(config)?);

    let listener = TcpListener::bind(&addr).await?;
    info!("Server running on port {}", port);
    axum::serve(listener, app).await?;

    Ok(())
}
