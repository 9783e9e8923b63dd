// 2022-2025 (c) Copyright Contributors to the GOSH DAO. All rights reserved.
//

use std::sync::Arc;

use http_server::metrics::GameMetrics;
use http_server::WebServer;
use session_store::MemorySessionStore;
use session_store::RedisSessionStore;
use session_store::SessionStore;
use telemetry_utils::get_metrics_endpoint;
use telemetry_utils::init_meter_provider;

use crate::cli::Args;
use crate::cli::StoreKind;
use crate::signals::shutdown_signal;

const SERVICE_NAME: &str = "janken-server";

pub async fn execute(args: Args) -> anyhow::Result<()> {
    let store = build_store(&args)?;
    if let Err(err) = store.ping().await {
        tracing::warn!("Session store is not reachable yet: {err}");
    }
    let metrics = init_metrics()?;

    WebServer::new(args.bind, store, metrics).run(shutdown_signal()).await
}

pub fn build_store(args: &Args) -> anyhow::Result<Arc<dyn SessionStore>> {
    let config = args.store_config();
    let store: Arc<dyn SessionStore> = match args.store {
        StoreKind::Redis => Arc::new(RedisSessionStore::new(&args.redis_config(), config)?),
        StoreKind::Memory => {
            tracing::warn!("Sessions are kept in memory and will be lost on restart");
            Arc::new(MemorySessionStore::new(config))
        }
    };
    Ok(store)
}

fn init_metrics() -> anyhow::Result<Option<GameMetrics>> {
    let Some(endpoint) = get_metrics_endpoint() else {
        return Ok(None);
    };
    tracing::info!("Exporting metrics to {endpoint}");
    opentelemetry::global::set_meter_provider(init_meter_provider(SERVICE_NAME)?);
    let meter = opentelemetry::global::meter(SERVICE_NAME);
    Ok(Some(GameMetrics::new(&meter)))
}
