use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;
use crate::router::Service;

pub async fn run<S>(cfg: &Config, service: Arc<Service<S>>) -> anyhow::Result<()>
where
    S: Send + Sync + 'static,
{
    let listener = TcpListener::bind(&cfg.server.listen_addr).await?;
    info!("Listening on {}", listener.local_addr()?);

    serve(listener, service).await
}

/// Accepts connections forever, one task per connection.
pub async fn serve<S>(listener: TcpListener, service: Arc<Service<S>>) -> anyhow::Result<()>
where
    S: Send + Sync + 'static,
{
    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let service = Arc::clone(&service);
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, service);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
