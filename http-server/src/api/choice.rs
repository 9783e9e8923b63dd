// 2022-2025 (c) Copyright Contributors to the GOSH DAO. All rights reserved.
//

use game::Hand;
use salvo::prelude::*;
use session_store::with_lock;

use crate::helpers::obtain_state;
use crate::helpers::path_param;
use crate::helpers::render_error;
use crate::ApiError;
use crate::WebServer;

#[handler]
pub(crate) async fn choose_hand(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let Some(state) = obtain_state(depot, res) else {
        return;
    };
    let session_id = path_param(req, "session_id");
    let user = path_param(req, "user");
    let hand = path_param(req, "hand");

    match register_choice(state, &session_id, &user, &hand).await {
        Ok(()) => {
            tracing::info!(target: "http_server", "Session {session_id}: {user} has chosen");
            if let Some(metrics) = &state.metrics {
                metrics.report_choice();
            }
            res.status_code(StatusCode::OK);
            res.render(session_id);
        }
        Err(err) => render_error(state, res, err),
    }
}

// The hand is parsed after the session is restored so that an unknown session wins over a bad
// hand.
async fn register_choice(
    state: &WebServer,
    session_id: &str,
    user: &str,
    hand: &str,
) -> Result<(), ApiError> {
    let store = &state.store;
    with_lock(store, session_id, || async {
        let mut session = store.restore(session_id).await?;
        let hand: Hand = hand.parse()?;
        session.choose(user, hand)?;
        store.store(&session).await?;
        Ok::<(), ApiError>(())
    })
    .await
}
