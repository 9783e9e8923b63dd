// 2022-2025 (c) Copyright Contributors to the GOSH DAO. All rights reserved.
//

use std::time::Duration;

use opentelemetry::KeyValue;
use opentelemetry_sdk::metrics::PeriodicReader;
use opentelemetry_sdk::metrics::SdkMeterProvider;
use opentelemetry_sdk::runtime::Tokio;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_thread_names(true)
                .with_thread_ids(true)
                .with_line_number(true)
                .with_ansi(false)
                .with_writer(std::io::stderr),
        )
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

pub fn get_metrics_endpoint() -> Option<String> {
    std::env::var("OTEL_EXPORTER_OTLP_METRICS_ENDPOINT")
        .or_else(|_| std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT"))
        .ok()
}

/// Must be called from within a tokio runtime.
pub fn init_meter_provider(service_name: &'static str) -> anyhow::Result<SdkMeterProvider> {
    let resource =
        opentelemetry_sdk::Resource::new(vec![KeyValue::new("service.name", service_name)])
            .merge(&opentelemetry_sdk::Resource::default());

    let metric_exporter = opentelemetry_otlp::MetricExporter::builder().with_tonic().build()?;

    Ok(SdkMeterProvider::builder()
        .with_reader(
            PeriodicReader::builder(metric_exporter, Tokio)
                .with_interval(Duration::from_secs(30))
                .with_timeout(Duration::from_secs(5))
                .build(),
        )
        .with_resource(resource)
        .build())
}
