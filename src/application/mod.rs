//! Application services layer: state store, controller, and the remote seam.

pub mod board;
pub mod error;
pub mod remote;
pub mod store;
