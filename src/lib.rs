//! Monte Carlo simulation of dreidel.
//!
//! Every round seats a table of players with equal banks and spins until a
//! single player holds all the money, counting how many spins that took.
//!
//! ## Modules
//!
//! - [`gameplay`]: the four [`Face`]s and a [`Player`]'s bank accounting
//! - [`round`]: the ante/spin/win-check loop around a shared pot
//! - [`sweep`]: repeated rounds over a grid of table sizes and banks
//! - `args`: command line flags for the `dreidel` binary

pub mod gameplay;
pub mod round;
pub mod sweep;

#[cfg(feature = "cli")]
pub mod args;
#[cfg(feature = "cli")]
pub use args::*;

pub use gameplay::*;
pub use round::*;
pub use sweep::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Bank balances, antes, penalties and pot sizes.
pub type Chips = u32;
/// Seat index around the table, in rotation order.
pub type Position = usize;

// ============================================================================
// GAME PARAMETERS
// ============================================================================
/// Amount every solvent player puts in whenever the pot runs dry.
pub const ANTE: Chips = 1;
/// Amount paid into the pot on Shin.
pub const PENALTY: Chips = 3;
/// Upper bound on spins in one round before it is abandoned.
pub const MAX_SPINS: u64 = 1 << 24;

// ============================================================================
// SWEEP PARAMETERS
// ============================================================================
/// Table sizes visited by the default sweep.
pub const PLAYER_COUNTS: [usize; 5] = [2, 4, 6, 8, 20];
/// Starting banks visited by the default sweep.
pub const STARTING_BANKS: [Chips; 3] = [10, 20, 50];
/// Rounds played per (players, bank) combination.
pub const TRIALS: usize = 1;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging on stderr, leaving stdout to the summaries.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term = simplelog::TermLogger::new(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term]).expect("initialize logger");
}
