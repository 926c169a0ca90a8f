use crate::Chips;
use crate::Error;
use crate::Round;
use crate::Rules;
use crate::Summary;
use rand::Rng;

/// A grid of table sizes and starting banks, each played `trials` times.
///
/// Player counts are the outer loop and banks the inner one, so the
/// default sweep prints in the same order as the table below:
///
/// | players | banks        |
/// |---------|--------------|
/// | 2       | 10, 20, 50   |
/// | 4       | 10, 20, 50   |
/// | ...     | ...          |
/// | 20      | 10, 20, 50   |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sweep {
    pub players: Vec<usize>,
    pub banks: Vec<Chips>,
    pub trials: usize,
    pub rules: Rules,
}

impl Default for Sweep {
    fn default() -> Self {
        Self {
            players: crate::PLAYER_COUNTS.to_vec(),
            banks: crate::STARTING_BANKS.to_vec(),
            trials: crate::TRIALS,
            rules: Rules::default(),
        }
    }
}

impl Sweep {
    /// Every (players, bank) combination in play order.
    pub fn grid(&self) -> impl Iterator<Item = (usize, Chips)> + '_ {
        self.players
            .iter()
            .flat_map(move |&n| self.banks.iter().map(move |&b| (n, b)))
    }
    /// Rounds this sweep will play, if that count fits in a `usize`.
    pub fn rounds(&self) -> Option<usize> {
        self.players
            .len()
            .checked_mul(self.banks.len())
            .and_then(|n| n.checked_mul(self.trials))
    }
    /// Checks the whole grid so a bad combination fails before any spin.
    ///
    /// Besides what [`Round::new`] rejects, a table of two or more whose
    /// starting bank does not outlast the first ante is refused, since
    /// every player would go bankrupt before anyone spins.
    pub fn validate(&self) -> Result<(), Error> {
        if self.players.is_empty() || self.banks.is_empty() || self.trials == 0 {
            return Err(Error::EmptySweep);
        }
        if self.rounds().is_none() {
            return Err(Error::Oversized {
                trials: self.trials,
            });
        }
        let ante = self.rules.ante;
        self.grid()
            .map(|(n, b)| match Round::new(self.rules, n, b) {
                Ok(_) if n > 1 && b <= ante => Err(Error::Unanteable { bank: b, ante }),
                Ok(_) => Ok(()),
                Err(e) => Err(e),
            })
            .collect()
    }
    /// Plays every trial of one combination.
    pub fn batch<R>(&self, players: usize, bank: Chips, rng: &mut R) -> Result<Vec<Summary>, Error>
    where
        R: Rng + ?Sized,
    {
        (0..self.trials)
            .map(|_| Round::new(self.rules, players, bank)?.play(rng))
            .inspect(|r| {
                if let Err(e) = r {
                    log::error!("{} players, bank {}: {}", players, bank, e)
                }
            })
            .collect()
    }
    /// Plays the whole sweep, threading one RNG through every round.
    pub fn run<R>(&self, rng: &mut R) -> Result<Vec<Summary>, Error>
    where
        R: Rng + ?Sized,
    {
        self.validate()?;
        log::info!("sweeping {} rounds", self.rounds().unwrap_or_default());
        let mut summaries = Vec::new();
        for (players, bank) in self.grid() {
            summaries.extend(self.batch(players, bank, rng)?);
        }
        Ok(summaries)
    }
}
