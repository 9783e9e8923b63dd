// 2022-2025 (c) Copyright Contributors to the GOSH DAO. All rights reserved.
//

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("session {0} already exists")]
    SessionAlreadyExists(String),

    #[error("session {0} not found")]
    SessionNotFound(String),

    #[error("lock of session {0} is held by another request")]
    CannotStartTransaction(String),

    #[error("lock of session {0} has already expired")]
    TransactionExpired(String),

    #[error("invalid redis address: {0}")]
    InvalidAddress(#[from] url::ParseError),

    #[error("redis error: {0}")]
    Backend(#[from] redis::RedisError),

    #[error("session codec error: {0}")]
    Codec(#[from] bincode::Error),
}
