//! Handlers shipped with senex.

mod about;
mod list;

pub use about::{AboutCommand, ABOUT};
pub use list::{ListCommands, LIST};
