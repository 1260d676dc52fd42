//! Demo pages

mod frames;
mod index;

pub use frames::{Episode, LowerThird};
pub use index::AppIndex;
