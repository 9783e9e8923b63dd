// 2022-2025 (c) Copyright Contributors to the GOSH DAO. All rights reserved.
//

mod errors;
mod hand;
mod judge;
mod session;

pub use errors::GameError;
pub use hand::Hand;
pub use judge::judge;
pub use judge::GameResult;
pub use judge::ResultStatus;
pub use session::parse_users;
pub use session::Choice;
pub use session::Session;
