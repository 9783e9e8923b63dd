// 2022-2025 (c) Copyright Contributors to the GOSH DAO. All rights reserved.
//

use salvo::http::StatusCode;
use salvo::Depot;
use salvo::Request;
use salvo::Response;

use crate::ApiError;
use crate::WebServer;

pub(crate) fn path_param(req: &Request, name: &str) -> String {
    req.param::<String>(name).unwrap_or_default()
}

pub(crate) fn obtain_state<'a>(depot: &'a Depot, res: &mut Response) -> Option<&'a WebServer> {
    match depot.obtain::<WebServer>() {
        Ok(state) => Some(state),
        Err(_) => {
            tracing::error!(target: "http_server", "Web Server state is not found");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            res.render("Web Server state is not found");
            None
        }
    }
}

pub(crate) fn render_error(state: &WebServer, res: &mut Response, err: ApiError) {
    let status = err.status_code();
    if status.is_server_error() {
        tracing::error!(target: "http_server", "Request failed: {err}");
    } else {
        tracing::debug!(target: "http_server", "Request rejected: {err}");
    }
    if let Some(metrics) = &state.metrics {
        metrics.report_error(err.kind());
    }
    res.status_code(status);
    res.render(err.message());
}
