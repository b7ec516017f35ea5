//! bossdex - a terminal browser for a game-boss catalog
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod catalog;
pub mod cli;
pub mod error;
pub mod logging;
pub mod models;
pub mod preferences;
pub mod startup;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod views;
