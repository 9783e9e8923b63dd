// 2022-2025 (c) Copyright Contributors to the GOSH DAO. All rights reserved.
//

use std::process::exit;

use clap::Parser;
use janken_server::cli::Args;

fn main() {
    dotenvy::dotenv().ok(); // ignore errors
    telemetry_utils::init_tracing();
    tracing::info!("Starting...");

    if let Err(err) = tokio_main() {
        tracing::error!("{err:#}");
        exit(1);
    }
    tracing::info!("Server stopped gracefully.");
}

#[tokio::main]
async fn tokio_main() -> anyhow::Result<()> {
    let args = Args::parse();
    janken_server::executor::execute(args).await
}
