//! Dashboard session state and the actions that update it.
//!
//! A [`Session`] is an immutable value. Each user action produces a new
//! session through [`Session::apply`]; [`replay`] folds a whole script.

pub mod action;
pub mod state;

pub use action::Action;
pub use state::{replay, Session};
