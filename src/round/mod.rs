pub mod error;
pub use error::*;

pub mod rules;
pub use rules::*;

pub mod round;
pub use round::*;

pub mod summary;
pub use summary::*;
