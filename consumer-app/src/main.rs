use std::net::SocketAddr;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let app = consumer_app::build_router();

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    tracing::info!("consumer-app listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
