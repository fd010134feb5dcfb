use crate::core::directory::AddressDirectory;
use crate::utils::error::Result;
use axum::Router;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

/// 地址目錄 HTTP 伺服器
pub struct AddressServer {
    listener: TcpListener,
    router: Router,
}

impl AddressServer {
    pub async fn bind(
        listen_address: &str,
        directory: Arc<AddressDirectory>,
        request_timeout: Duration,
    ) -> Result<Self> {
        let listener = TcpListener::bind(listen_address).await?;

        tracing::info!(address = %listen_address, "Address server bound successfully");

        Ok(Self {
            listener,
            router: super::router(directory, request_timeout),
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// 執行直到 `shutdown` 完成
    pub async fn serve<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        tracing::info!("🚀 Address server starting");

        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("Address server stopped");
        Ok(())
    }
}
