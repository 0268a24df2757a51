#[tokio::main]
async fn main() -> anyhow::Result<()> {
    aerosense_observability::init();

    let config = aerosense_api::config::Config::from_env();
    let app = aerosense_api::app::build_app(&config)?;

    let listener = tokio::net::TcpListener::bind(&config.bind).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
