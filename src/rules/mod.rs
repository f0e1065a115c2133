//! Game outcome evaluation.
//!
//! - Win: some line of the `LineSet` is owned entirely by one mark
//! - Draw: the board is full and no line is owned
//! - Ongoing: otherwise

mod evaluator;

pub use evaluator::{evaluate, winning_line, Outcome};
