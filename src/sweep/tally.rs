use crate::Chips;
use crate::Summary;
use serde::Serialize;

/// Spin statistics over repeated rounds of one (players, bank) combination.
///
/// `wins` counts victories by seat, so a fair table should spread them
/// evenly no matter who spins first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tally {
    pub players: usize,
    pub bank: Chips,
    pub trials: usize,
    pub mean: f64,
    pub min: u64,
    pub max: u64,
    pub wins: Vec<usize>,
}

impl Tally {
    pub fn new(players: usize, bank: Chips) -> Self {
        Self {
            players,
            bank,
            trials: 0,
            mean: 0.,
            min: 0,
            max: 0,
            wins: vec![0; players],
        }
    }
    /// Folds one more round into the running statistics.
    pub fn witness(&mut self, summary: &Summary) {
        debug_assert_eq!(summary.players, self.players);
        debug_assert_eq!(summary.bank, self.bank);
        self.min = match self.trials {
            0 => summary.spins,
            _ => self.min.min(summary.spins),
        };
        self.max = self.max.max(summary.spins);
        self.trials += 1;
        self.mean += (summary.spins as f64 - self.mean) / self.trials as f64;
        if let Some(wins) = self.wins.get_mut(summary.seat) {
            *wins += 1;
        }
    }
    pub fn json(&self) -> String {
        serde_json::to_string(self).expect("tally serializes")
    }
}

impl From<&[Summary]> for Tally {
    fn from(summaries: &[Summary]) -> Self {
        let (players, bank) = summaries
            .first()
            .map(|s| (s.players, s.bank))
            .unwrap_or_default();
        summaries
            .iter()
            .fold(Self::new(players, bank), |mut tally, summary| {
                tally.witness(summary);
                tally
            })
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Over {} games with {} players and a starting bank of {}, it took {:.1} spins on average (min {}, max {}).",
            self.trials, self.players, self.bank, self.mean, self.min, self.max
        )
    }
}
