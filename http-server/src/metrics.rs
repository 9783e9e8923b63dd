use opentelemetry::metrics::Counter;
use opentelemetry::metrics::Meter;
use opentelemetry::KeyValue;

#[derive(Clone)]
pub struct GameMetrics {
    sessions_started: Counter<u64>,
    choices: Counter<u64>,
    results: Counter<u64>,
    errors: Counter<u64>,
}

impl GameMetrics {
    pub fn new(meter: &Meter) -> Self {
        GameMetrics {
            sessions_started: meter.u64_counter("janken_sessions_started").build(),
            choices: meter.u64_counter("janken_choices").build(),
            results: meter.u64_counter("janken_results").build(),
            errors: meter.u64_counter("janken_errors").build(),
        }
    }

    pub fn report_session_started(&self, users: usize) {
        self.sessions_started.add(1, &[KeyValue::new("users", users as i64)]);
    }

    pub fn report_choice(&self) {
        self.choices.add(1, &[]);
    }

    pub fn report_result(&self, status: &'static str) {
        self.results.add(1, &[KeyValue::new("status", status)]);
    }

    pub fn report_error(&self, kind: &'static str) {
        self.errors.add(1, &[KeyValue::new("kind", kind)]);
    }
}
