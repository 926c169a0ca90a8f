pub mod face;
pub use face::*;

pub mod palette;
pub use palette::*;

pub mod player;
pub use player::*;
