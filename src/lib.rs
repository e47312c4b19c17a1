//! Baby Games - a launcher of small terminal games for young children.
//!
//! This module exposes the game logic for testing and the binary.

pub mod app;
pub mod build_info;
pub mod config;
pub mod core;
pub mod games;
pub mod input;
pub mod menu;
pub mod ui;
pub mod utils;
