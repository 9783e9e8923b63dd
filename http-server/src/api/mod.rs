// 2022-2025 (c) Copyright Contributors to the GOSH DAO. All rights reserved.
//

mod choice;
mod health;
mod result;
mod session_info;
mod start;

pub(crate) use choice::choose_hand;
pub(crate) use health::healthz;
pub(crate) use result::get_result;
pub(crate) use session_info::get_session;
pub(crate) use start::start_game;
