//! # Connect Four
//!
//! A Connect Four engine with rule-based and search-based agents and a harness
//! for pitting them against each other.
//!
//! ## Modules
//!
//! - [`game`]: board, gravity, win detection, game state
//! - [`ai`]: agent trait, random, greedy, minimax and model-backed agents
//! - [`evaluation`]: multi-game match runner and result tallies
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod evaluation;
pub mod game;
