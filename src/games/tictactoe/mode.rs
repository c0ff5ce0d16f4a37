//! Game mode selection.

use super::strategy::{RandomStrategy, SmartStrategy, Strategy};
use super::Player;
use serde::{Deserialize, Serialize};

static RANDOM: RandomStrategy = RandomStrategy;
static SMART: SmartStrategy = SmartStrategy;

/// Game mode - who is the opponent?
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Mode {
    /// Two people share the board; both marks are entered by hand.
    #[default]
    HumanVsHuman,
    /// X is human, O is played by [`RandomStrategy`].
    HumanVsRandomAi,
    /// X is human, O is played by [`SmartStrategy`].
    HumanVsSmartAi,
}

impl Mode {
    /// Returns display name.
    pub fn name(&self) -> &'static str {
        match self {
            Mode::HumanVsHuman => "Human vs Human",
            Mode::HumanVsRandomAi => "Human vs Random AI",
            Mode::HumanVsSmartAi => "Human vs Smart AI",
        }
    }

    /// The mark the automated opponent plays, if there is one.
    pub fn ai_player(&self) -> Option<Player> {
        match self {
            Mode::HumanVsHuman => None,
            Mode::HumanVsRandomAi | Mode::HumanVsSmartAi => Some(Player::O),
        }
    }

    /// The automated opponent, if there is one.
    pub fn strategy(&self) -> Option<&'static dyn Strategy> {
        match self {
            Mode::HumanVsHuman => None,
            Mode::HumanVsRandomAi => Some(&RANDOM),
            Mode::HumanVsSmartAi => Some(&SMART),
        }
    }

    /// Whether a person may enter `player`'s mark directly.
    pub fn accepts_manual(&self, player: Player) -> bool {
        self.ai_player() != Some(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_mode_names_parse() {
        assert_eq!(Mode::from_str("human-vs-human"), Ok(Mode::HumanVsHuman));
        assert_eq!(Mode::from_str("human-vs-random-ai"), Ok(Mode::HumanVsRandomAi));
        assert_eq!(Mode::HumanVsSmartAi.to_string(), "human-vs-smart-ai");
        assert!(Mode::from_str("self").is_err());
    }

    #[test]
    fn test_manual_marks_per_mode() {
        assert!(Mode::HumanVsHuman.accepts_manual(Player::O));
        assert!(Mode::HumanVsRandomAi.accepts_manual(Player::X));
        assert!(!Mode::HumanVsRandomAi.accepts_manual(Player::O));
        assert!(!Mode::HumanVsSmartAi.accepts_manual(Player::O));
    }

    #[test]
    fn test_strategy_per_mode() {
        assert!(Mode::HumanVsHuman.strategy().is_none());
        assert_eq!(Mode::HumanVsRandomAi.strategy().map(|s| s.name()), Some("random"));
        assert_eq!(Mode::HumanVsSmartAi.strategy().map(|s| s.name()), Some("smart"));
    }
}
