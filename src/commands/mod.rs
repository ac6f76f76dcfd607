//! Command system.
//!
//! This module provides:
//! - The handler lifecycle trait and the markers handler types carry
//! - The registry mapping command names to handler identifiers
//! - The container that builds handlers from identifiers
//! - The dispatcher that runs commands named on the command line

pub mod builtin;
mod container;
mod dispatcher;
mod handler;
mod registry;

pub use container::{ConstructionService, Container};
pub use dispatcher::{parse_candidates, DispatchError, Dispatcher, DEFAULT_COMMAND, FLAG_PREFIX};
pub use handler::{
    CommandDeclaration, CommandError, CommandHandler, CommandResult, Component, HandlerFactory,
    HandlerType, LifecyclePhase,
};
pub use registry::{
    component_identifier, derive_identifier, enumerate_commands, CommandMap, RegistryError,
};

/// Every handler type known to the process.
///
/// To add a command, export a `HandlerType` static from its module and list
/// it here. The table is fixed at compile time.
pub static HANDLER_TYPES: &[&HandlerType] = &[&builtin::ABOUT, &builtin::LIST];
