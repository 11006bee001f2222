//! CLI command implementations.
//!
//! - **init**: write a default `.mediamix.toml`
//! - **forecast**: chain one forecast step
//! - **allocate**: move budget sliders and show the result
//! - **score**: composite improvement of an allocation
//! - **replay**: run an action script through a fresh session
//!
//! Handlers return rendered text; the binary decides where it goes.

pub mod allocate;
pub mod forecast;
pub mod init;
pub mod replay;
pub mod score;

pub use allocate::handle_allocate;
pub use forecast::handle_forecast;
pub use init::init_config;
pub use replay::{handle_replay, ReplayConfig};
pub use score::handle_score;
