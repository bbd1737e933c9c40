//! Minesweeper game engine: board generation, mine placement, flood-fill reveal, flag
//! bookkeeping and win/loss tracking. Rendering and input translation belong to the front end.
#![no_std]

extern crate alloc;

pub use board::*;
pub use cell::*;
pub use config::*;
pub use error::*;
pub use game::*;
pub use generator::*;
pub use types::*;

mod board;
mod cell;
mod config;
mod error;
mod game;
mod generator;
mod types;
