//! Presentation layer: view models derived from the board and their rendering.

pub mod views;
