//! Presenter-facing session layer.

mod controller;

pub use controller::{GameController, MoveEntry};
