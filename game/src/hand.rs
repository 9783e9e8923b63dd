// 2022-2025 (c) Copyright Contributors to the GOSH DAO. All rights reserved.
//

use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::GameError;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Hand {
    Rock,
    Scissors,
    Paper,
}

impl FromStr for Hand {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rock" => Ok(Hand::Rock),
            "scissors" => Ok(Hand::Scissors),
            "paper" => Ok(Hand::Paper),
            _ => Err(GameError::UndefinedHand(s.to_string())),
        }
    }
}
