// 2022-2025 (c) Copyright Contributors to the GOSH DAO. All rights reserved.
//

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("user {0} is not in session")]
    NotInSession(String),

    #[error("user {0} has already chosen")]
    AlreadyChosen(String),

    #[error("session is not closed")]
    SessionNotClosed,

    #[error("undefined hand: {0}")]
    UndefinedHand(String),

    #[error("this game needs two or more users. request: `{0}`")]
    NotEnoughUsers(String),

    #[error("user name must not be empty")]
    EmptyUserName,

    #[error("user {0} is listed more than once")]
    DuplicateUser(String),
}
