use crate::Chips;
use crate::Position;
use serde::Serialize;

/// Outcome of one finished round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub players: usize,
    pub bank: Chips,
    pub spins: u64,
    pub winner: String,
    pub seat: Position,
}

impl Summary {
    pub fn json(&self) -> String {
        serde_json::to_string(self).expect("summary serializes")
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "For a game with {} players and a starting bank of {}, it took {} spins for {} to win.",
            self.players, self.bank, self.spins, self.winner
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> Summary {
        Summary {
            players: 4,
            bank: 10,
            spins: 321,
            winner: String::from("Player 2"),
            seat: 1,
        }
    }

    #[test]
    fn sentence() {
        assert_eq!(
            summary().to_string(),
            "For a game with 4 players and a starting bank of 10, it took 321 spins for Player 2 to win."
        );
    }

    #[test]
    fn json_fields() {
        let value = serde_json::from_str::<serde_json::Value>(&summary().json()).unwrap();
        assert_eq!(value["players"], 4);
        assert_eq!(value["bank"], 10);
        assert_eq!(value["spins"], 321);
        assert_eq!(value["winner"], "Player 2");
        assert_eq!(value["seat"], 1);
    }
}
