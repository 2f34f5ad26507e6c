#![warn(clippy::pedantic)]

pub mod diag;
pub mod emit;
pub mod error;
pub mod sink;
pub mod splitter;

pub use diag::{Diagnostics, GroupClass, SilentDiagnostics};
pub use emit::{WordGroup, swap_word};
pub use error::SplitError;
pub use sink::SplitSinks;
pub use splitter::Splitter;
