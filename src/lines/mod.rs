//! Winning-line generation.
//!
//! - `generator`: directional-walk enumeration of rows, columns and both
//!   diagonal families for any `BoardSize`
//! - `cache`: line sets memoized per board size and policy

pub mod cache;
pub mod generator;

pub use cache::LineSetCache;
pub use generator::{Direction, Line, LineCells, LineSet};
