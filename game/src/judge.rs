// 2022-2025 (c) Copyright Contributors to the GOSH DAO. All rights reserved.
//

use serde::Serialize;

use crate::Choice;
use crate::Hand;

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultStatus {
    Draw,
    RockWin,
    ScissorsWin,
    PaperWin,
}

impl ResultStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultStatus::Draw => "Draw",
            ResultStatus::RockWin => "RockWin",
            ResultStatus::ScissorsWin => "ScissorsWin",
            ResultStatus::PaperWin => "PaperWin",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameResult {
    pub status: ResultStatus,
    /// `None` for a draw.
    pub winners: Option<Vec<String>>,
}

impl GameResult {
    fn draw() -> Self {
        Self { status: ResultStatus::Draw, winners: None }
    }

    fn win(status: ResultStatus, winners: Vec<String>) -> Self {
        Self { status, winners: Some(winners) }
    }
}

/// Decides the round from the recorded choices.
///
/// Winners keep the order in which they chose.
pub fn judge(choices: &[Choice]) -> GameResult {
    let users_with = |hand: Hand| -> Vec<String> {
        choices.iter().filter(|c| c.hand == hand).map(|c| c.user.clone()).collect()
    };
    let rocks = users_with(Hand::Rock);
    let scissors = users_with(Hand::Scissors);
    let papers = users_with(Hand::Paper);

    match (rocks.is_empty(), scissors.is_empty(), papers.is_empty()) {
        (false, false, false) => GameResult::draw(),
        (false, false, true) => GameResult::win(ResultStatus::RockWin, rocks),
        (true, false, false) => GameResult::win(ResultStatus::ScissorsWin, scissors),
        (false, true, false) => GameResult::win(ResultStatus::PaperWin, papers),
        _ => GameResult::draw(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choices(list: &[(&str, Hand)]) -> Vec<Choice> {
        list.iter().map(|(user, hand)| Choice { user: user.to_string(), hand: *hand }).collect()
    }

    #[test]
    fn rock_beats_scissors() {
        let result = judge(&choices(&[("a", Hand::Scissors), ("b", Hand::Rock)]));
        assert_eq!(result.status, ResultStatus::RockWin);
        assert_eq!(result.winners, Some(vec!["b".to_string()]));
    }

    #[test]
    fn scissors_beat_paper() {
        let result =
            judge(&choices(&[("a", Hand::Scissors), ("b", Hand::Paper), ("c", Hand::Scissors)]));
        assert_eq!(result.status, ResultStatus::ScissorsWin);
        assert_eq!(result.winners, Some(vec!["a".to_string(), "c".to_string()]));
    }

    #[test]
    fn paper_beats_rock() {
        let result = judge(&choices(&[("a", Hand::Rock), ("b", Hand::Paper)]));
        assert_eq!(result.status, ResultStatus::PaperWin);
        assert_eq!(result.winners, Some(vec!["b".to_string()]));
    }

    #[test]
    fn all_three_hands_is_a_draw() {
        let result = judge(&choices(&[("a", Hand::Rock), ("b", Hand::Paper), ("c", Hand::Scissors)]));
        assert_eq!(result, GameResult::draw());
    }

    #[test]
    fn same_hand_is_a_draw() {
        let result = judge(&choices(&[("a", Hand::Paper), ("b", Hand::Paper)]));
        assert_eq!(result.status, ResultStatus::Draw);
        assert!(result.winners.is_none());
    }
}
