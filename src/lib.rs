pub mod diagnostic;
pub mod dive;
pub mod error;
pub mod input;
pub mod logging;
pub mod puzzle;
pub mod sonar;

pub use error::{PuzzleError, Result};
pub use puzzle::{solve, Day, Part};
