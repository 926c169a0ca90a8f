use crate::Chips;

/// Everything that can stop a round or sweep from producing a summary.
///
/// Gameplay itself never fails; these are either configuration that no
/// round can be played with, or a round that never settled.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error("a round needs at least one player")]
    NoPlayers,
    #[error("starting bank must be positive")]
    EmptyBank,
    #[error("{players} players with a bank of {bank} overflow the pot")]
    Overflow { players: usize, bank: Chips },
    #[error("sweep needs player counts, starting banks and at least one trial")]
    EmptySweep,
    #[error("sweep of {trials} trials per combination has too many rounds to count")]
    Oversized { trials: usize },
    #[error("a starting bank of {bank} is spent on the first ante of {ante}")]
    Unanteable { bank: Chips, ante: Chips },
    #[error("no winner after {spins} spins")]
    Exhausted { spins: u64 },
    #[error("every player is bankrupt")]
    Insolvent,
}
