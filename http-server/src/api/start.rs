// 2022-2025 (c) Copyright Contributors to the GOSH DAO. All rights reserved.
//

use game::parse_users;
use game::Session;
use salvo::prelude::*;

use crate::helpers::obtain_state;
use crate::helpers::render_error;
use crate::ApiError;
use crate::WebServer;

#[handler]
pub(crate) async fn start_game(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let Some(state) = obtain_state(depot, res) else {
        return;
    };
    let users_param = req.query::<String>("users").unwrap_or_default();

    match start_session(state, &users_param).await {
        Ok(session) => {
            tracing::info!(
                target: "http_server",
                "Session {} started for {:?}",
                session.session_id(),
                session.users()
            );
            if let Some(metrics) = &state.metrics {
                metrics.report_session_started(session.users().len());
            }
            res.status_code(StatusCode::OK);
            res.render(format!("session start: {}", session.session_id()));
        }
        Err(err) => render_error(state, res, err),
    }
}

async fn start_session(state: &WebServer, users_param: &str) -> Result<Session, ApiError> {
    let users = parse_users(users_param)?;
    let session = Session::new(users);
    state.store.create(&session).await?;
    Ok(session)
}
