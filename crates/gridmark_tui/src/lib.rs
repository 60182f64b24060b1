//! Terminal UI for gridmark
//!
//! The presentation half of the game: maps mouse clicks and arrow keys to
//! cell indices, forwards them to the match and redraws from its state.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod layout;
pub mod terminal;
pub mod ui;

pub use app::App;
pub use cli::Cli;
pub use config::{ConfigError, TuiConfig};
pub use layout::BoardLayout;
