#![warn(clippy::pedantic)]

pub mod error;
pub mod line;
pub mod record;

pub use error::WireError;
pub use line::{Lines, MAX_LINE_LENGTH};
pub use record::{Record, RecordKind};
