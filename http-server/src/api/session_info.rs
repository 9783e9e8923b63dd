// 2022-2025 (c) Copyright Contributors to the GOSH DAO. All rights reserved.
//

use salvo::prelude::*;
use serde::Serialize;

use crate::helpers::obtain_state;
use crate::helpers::path_param;
use crate::helpers::render_error;
use crate::ApiError;

#[derive(Serialize, Clone, Debug)]
struct SessionInfo {
    session_id: String,
    users: Vec<String>,
}

#[handler]
pub(crate) async fn get_session(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let Some(state) = obtain_state(depot, res) else {
        return;
    };
    let session_id = path_param(req, "session_id");

    match state.store.restore(&session_id).await {
        Ok(session) => {
            res.status_code(StatusCode::OK);
            res.render(Json(SessionInfo {
                session_id: session.session_id().to_string(),
                users: session.users().to_vec(),
            }));
        }
        Err(err) => render_error(state, res, ApiError::from(err)),
    }
}
