//! senex - a command-line dispatcher.
//!
//! Commands named on the command line are resolved against a static table of
//! handler types and run through an `init`, `execute`, `clean_up` lifecycle,
//! one after another.

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod events;
pub mod logging;
