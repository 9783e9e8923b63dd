// 2022-2025 (c) Copyright Contributors to the GOSH DAO. All rights reserved.
//

use game::GameResult;
use game::ResultStatus;
use salvo::prelude::*;
use serde::Serialize;

use crate::helpers::obtain_state;
use crate::helpers::path_param;
use crate::helpers::render_error;
use crate::ApiError;
use crate::WebServer;

#[derive(Serialize, Clone, Debug)]
struct ResultResponse {
    status: ResultStatus,
    winner: Option<Vec<String>>,
}

impl From<GameResult> for ResultResponse {
    fn from(value: GameResult) -> Self {
        Self { status: value.status, winner: value.winners }
    }
}

#[handler]
pub(crate) async fn get_result(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let Some(state) = obtain_state(depot, res) else {
        return;
    };
    let session_id = path_param(req, "session_id");

    match session_result(state, &session_id).await {
        Ok(result) => {
            tracing::info!(
                target: "http_server",
                "Session {session_id} result: {:?} {:?}",
                result.status,
                result.winners
            );
            if let Some(metrics) = &state.metrics {
                metrics.report_result(result.status.as_str());
            }
            res.status_code(StatusCode::OK);
            res.render(Json(ResultResponse::from(result)));
        }
        Err(err) => render_error(state, res, err),
    }
}

async fn session_result(state: &WebServer, session_id: &str) -> Result<GameResult, ApiError> {
    let session = state.store.restore(session_id).await?;
    Ok(session.result()?)
}
