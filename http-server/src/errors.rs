// 2022-2025 (c) Copyright Contributors to the GOSH DAO. All rights reserved.
//

use game::GameError;
use salvo::http::StatusCode;
use session_store::StoreError;

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Game(#[from] GameError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Game(err) => match err {
                GameError::NotInSession(_) => StatusCode::NOT_FOUND,
                GameError::AlreadyChosen(_)
                | GameError::SessionNotClosed
                | GameError::UndefinedHand(_)
                | GameError::NotEnoughUsers(_)
                | GameError::EmptyUserName
                | GameError::DuplicateUser(_) => StatusCode::BAD_REQUEST,
            },
            ApiError::Store(err) => match err {
                StoreError::SessionAlreadyExists(_) => StatusCode::CONFLICT,
                StoreError::SessionNotFound(_) | StoreError::TransactionExpired(_) => {
                    StatusCode::NOT_FOUND
                }
                StoreError::CannotStartTransaction(_)
                | StoreError::InvalidAddress(_)
                | StoreError::Backend(_)
                | StoreError::Codec(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    /// Text sent to the client.
    pub fn message(&self) -> String {
        match self {
            ApiError::Game(err) => match err {
                GameError::NotInSession(_) => "your not in session".to_string(),
                GameError::AlreadyChosen(_) => "you have already chosen".to_string(),
                GameError::SessionNotClosed => "session is not closed".to_string(),
                GameError::UndefinedHand(_) => "undefined enum error".to_string(),
                GameError::NotEnoughUsers(_)
                | GameError::EmptyUserName
                | GameError::DuplicateUser(_) => err.to_string(),
            },
            ApiError::Store(err) => match err {
                StoreError::SessionAlreadyExists(_) => "session already exists".to_string(),
                StoreError::SessionNotFound(_) => "session not found".to_string(),
                StoreError::CannotStartTransaction(_) => "transaction can not start".to_string(),
                StoreError::TransactionExpired(_) => "transaction has already expired".to_string(),
                StoreError::InvalidAddress(_) | StoreError::Backend(_) | StoreError::Codec(_) => {
                    "internal error".to_string()
                }
            },
        }
    }

    /// Metric label.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Game(err) => match err {
                GameError::NotInSession(_) => "not_in_session",
                GameError::AlreadyChosen(_) => "already_chosen",
                GameError::SessionNotClosed => "session_not_closed",
                GameError::UndefinedHand(_) => "undefined_hand",
                GameError::NotEnoughUsers(_)
                | GameError::EmptyUserName
                | GameError::DuplicateUser(_) => "bad_users",
            },
            ApiError::Store(err) => match err {
                StoreError::SessionAlreadyExists(_) => "session_exists",
                StoreError::SessionNotFound(_) => "session_not_found",
                StoreError::CannotStartTransaction(_) => "lock_busy",
                StoreError::TransactionExpired(_) => "lock_expired",
                StoreError::InvalidAddress(_) | StoreError::Backend(_) => "backend",
                StoreError::Codec(_) => "codec",
            },
        }
    }
}
