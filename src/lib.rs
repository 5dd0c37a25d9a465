#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod ai;
mod board;
mod common;
mod config;
mod game;
pub mod input;
pub mod turn;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod sim;
#[cfg(feature = "std")]
pub mod terminal;
#[cfg(feature = "gui")]
pub mod gui;

pub use ai::*;
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use input::{BoardGeometry, CellRect};
pub use turn::{ClickResult, Message, Tone, TurnController, TurnState};
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from, LOG_ENV};
#[cfg(feature = "std")]
pub use sim::{simulate_many, simulate_match, MatchReport, SimSummary};
