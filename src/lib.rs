#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
#[cfg(feature = "std")]
mod cli;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
mod game_loop;
mod generator;
mod grid;
mod leaderboard;
#[cfg(feature = "std")]
mod logging;
mod ship;

pub use board::*;
#[cfg(feature = "std")]
pub use cli::*;
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use game_loop::*;
pub use generator::*;
pub use grid::*;
pub use leaderboard::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use ship::*;
