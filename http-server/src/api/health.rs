// 2022-2025 (c) Copyright Contributors to the GOSH DAO. All rights reserved.
//

use salvo::prelude::*;

use crate::helpers::obtain_state;

#[handler]
pub(crate) async fn healthz(_req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let Some(state) = obtain_state(depot, res) else {
        return;
    };
    match state.store.ping().await {
        Ok(()) => {
            res.status_code(StatusCode::OK);
            res.render("ok");
        }
        Err(err) => {
            tracing::warn!(target: "http_server", "Session store is not reachable: {err}");
            res.status_code(StatusCode::SERVICE_UNAVAILABLE);
            res.render("session store is not reachable");
        }
    }
}
