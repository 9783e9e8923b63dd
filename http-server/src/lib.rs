// 2022-2025 (c) Copyright Contributors to the GOSH DAO. All rights reserved.
//

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

pub use errors::ApiError;
use metrics::GameMetrics;
use salvo::catch_panic::CatchPanic;
use salvo::conn::TcpListener;
use salvo::prelude::*;
use salvo::Listener;
use session_store::SessionStore;

mod api;
mod errors;
mod helpers;
pub mod metrics;

const GRACEFUL_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct WebServer {
    pub addr: SocketAddr,
    pub store: Arc<dyn SessionStore>,
    pub metrics: Option<GameMetrics>,
}

impl WebServer {
    pub fn new(
        addr: SocketAddr,
        store: Arc<dyn SessionStore>,
        metrics: Option<GameMetrics>,
    ) -> Self {
        Self { addr, store, metrics }
    }

    pub fn route(self) -> Router {
        // GET /janken/start?users=alice,bob
        let start_router = Router::with_path("start").get(api::start_game);

        // GET /janken/{session_id}/
        // GET /janken/{session_id}/choice/{user}/{hand}
        // GET /janken/{session_id}/result
        let session_router = Router::with_path("{session_id}")
            .get(api::get_session)
            .push(Router::with_path("choice/{user}/{hand}").get(api::choose_hand))
            .push(Router::with_path("result").get(api::get_result));

        let janken_router = Router::with_path("janken").push(start_router).push(session_router);

        Router::new() //
            .hoop(CatchPanic::new())
            .hoop(Logger::new())
            .hoop(affix_state::inject(self))
            .push(janken_router)
            .push(Router::with_path("healthz").get(api::healthz))
    }

    /// Serves until `shutdown` resolves, then drains in-flight requests.
    pub async fn run(
        self,
        shutdown: impl Future<Output = ()> + Send + 'static,
    ) -> anyhow::Result<()> {
        let acceptor = TcpListener::new(self.addr).try_bind().await?;
        let server = Server::new(acceptor);
        let handle = server.handle();
        tokio::spawn(async move {
            shutdown.await;
            tracing::info!(target: "http_server", "Stopping HTTP server");
            handle.stop_graceful(GRACEFUL_SHUTDOWN_TIMEOUT);
        });

        tracing::info!(target: "http_server", "Start HTTP server on {}", self.addr);
        server.serve(self.route()).await;
        Ok(())
    }
}
