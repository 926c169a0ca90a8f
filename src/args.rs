use crate::Chips;
use crate::Rules;
use crate::Sweep;
use clap::ArgAction;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Spin dreidel until one player holds everything, across a grid of tables.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Table sizes to sweep over
    #[arg(long, value_delimiter = ',', default_values_t = crate::PLAYER_COUNTS)]
    pub players: Vec<usize>,
    /// Starting banks to sweep over
    #[arg(long, value_delimiter = ',', default_values_t = crate::STARTING_BANKS)]
    pub banks: Vec<Chips>,
    /// Paid by every solvent player whenever the pot is empty
    #[arg(long, default_value_t = crate::ANTE)]
    pub ante: Chips,
    /// Paid into the pot on Shin
    #[arg(long, default_value_t = crate::PENALTY)]
    pub penalty: Chips,
    /// Rounds per combination; more than one adds a summary line
    #[arg(long, default_value_t = crate::TRIALS)]
    pub trials: usize,
    /// Seed for a reproducible sweep
    #[arg(long)]
    pub seed: Option<u64>,
    /// Spins before a round is abandoned, 0 for no limit
    #[arg(long, default_value_t = crate::MAX_SPINS)]
    pub max_spins: u64,
    /// Print one JSON object per line instead of sentences
    #[arg(long)]
    pub json: bool,
    /// Log to stderr; repeat for more detail
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn rules(&self) -> Rules {
        let rules = Rules {
            ante: self.ante,
            penalty: self.penalty,
            ..Rules::default()
        };
        match self.max_spins {
            0 => rules.unbounded(),
            n => rules.bounded(n),
        }
    }
    pub fn sweep(&self) -> Sweep {
        Sweep {
            players: self.players.clone(),
            banks: self.banks.clone(),
            trials: self.trials,
            rules: self.rules(),
        }
    }
    pub fn rng(&self) -> SmallRng {
        match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        }
    }
    pub fn level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
