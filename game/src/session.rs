// 2022-2025 (c) Copyright Contributors to the GOSH DAO. All rights reserved.
//

use std::collections::HashSet;

use serde::Deserialize;
use serde::Serialize;

use crate::judge;
use crate::GameError;
use crate::GameResult;
use crate::Hand;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Choice {
    pub user: String,
    pub hand: Hand,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Session {
    session_id: String,
    users: Vec<String>,
    choices: Vec<Choice>,
}

impl Session {
    pub fn new(users: Vec<String>) -> Self {
        Self { session_id: uuid::Uuid::new_v4().to_string(), users, choices: vec![] }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn users(&self) -> &[String] {
        &self.users
    }

    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    pub fn choose(&mut self, user: &str, hand: Hand) -> Result<(), GameError> {
        if self.choices.iter().any(|c| c.user == user) {
            return Err(GameError::AlreadyChosen(user.to_string()));
        }
        if !self.users.iter().any(|u| u == user) {
            return Err(GameError::NotInSession(user.to_string()));
        }
        self.choices.push(Choice { user: user.to_string(), hand });
        Ok(())
    }

    pub fn result(&self) -> Result<GameResult, GameError> {
        let all_users: HashSet<&str> = self.users.iter().map(String::as_str).collect();
        let chose_users: HashSet<&str> = self.choices.iter().map(|c| c.user.as_str()).collect();
        if all_users != chose_users {
            return Err(GameError::SessionNotClosed);
        }
        Ok(judge(&self.choices))
    }
}

/// Splits the comma separated `users` parameter of a start request.
pub fn parse_users(raw: &str) -> Result<Vec<String>, GameError> {
    let users: Vec<String> = raw.split(',').map(|u| u.trim().to_string()).collect();
    if users.len() < 2 {
        return Err(GameError::NotEnoughUsers(raw.to_string()));
    }
    let mut seen = HashSet::new();
    for user in &users {
        if user.is_empty() {
            return Err(GameError::EmptyUserName);
        }
        if !seen.insert(user.as_str()) {
            return Err(GameError::DuplicateUser(user.clone()));
        }
    }
    Ok(users)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ResultStatus;

    fn session(users: &[&str]) -> Session {
        Session::new(users.iter().map(|u| u.to_string()).collect())
    }

    #[test]
    fn new_session_gets_unique_id() {
        let a = session(&["a", "b"]);
        let b = session(&["a", "b"]);
        assert_ne!(a.session_id(), b.session_id());
        assert!(uuid::Uuid::parse_str(a.session_id()).is_ok());
        assert!(a.choices().is_empty());
    }

    #[test]
    fn choose_rejects_repeated_choice() {
        let mut s = session(&["a", "b"]);
        s.choose("a", Hand::Rock).unwrap();
        assert_eq!(s.choose("a", Hand::Paper), Err(GameError::AlreadyChosen("a".to_string())));
        assert_eq!(s.choices().len(), 1);
    }

    #[test]
    fn choose_rejects_outsider() {
        let mut s = session(&["a", "b"]);
        assert_eq!(s.choose("c", Hand::Rock), Err(GameError::NotInSession("c".to_string())));
    }

    #[test]
    fn result_requires_every_user() {
        let mut s = session(&["a", "b"]);
        s.choose("a", Hand::Rock).unwrap();
        assert_eq!(s.result(), Err(GameError::SessionNotClosed));
        s.choose("b", Hand::Scissors).unwrap();
        let result = s.result().unwrap();
        assert_eq!(result.status, ResultStatus::RockWin);
        assert_eq!(result.winners, Some(vec!["a".to_string()]));
    }

    #[test]
    fn session_survives_serde() {
        let mut s = session(&["a", "b"]);
        s.choose("b", Hand::Paper).unwrap();
        let json = serde_json::to_string(&s).unwrap();
        let back: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }

    #[test]
    fn parse_users_splits_and_trims() {
        assert_eq!(parse_users("alice, bob,carol").unwrap(), vec!["alice", "bob", "carol"]);
    }

    #[test]
    fn parse_users_needs_two() {
        assert_eq!(parse_users("alice"), Err(GameError::NotEnoughUsers("alice".to_string())));
        assert_eq!(parse_users(""), Err(GameError::NotEnoughUsers(String::new())));
    }

    #[test]
    fn parse_users_rejects_empty_and_duplicates() {
        assert_eq!(parse_users("alice,"), Err(GameError::EmptyUserName));
        assert_eq!(parse_users("a,b,a"), Err(GameError::DuplicateUser("a".to_string())));
    }
}
