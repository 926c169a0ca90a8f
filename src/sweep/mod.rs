pub mod sweep;
pub use sweep::*;

pub mod tally;
pub use tally::*;
