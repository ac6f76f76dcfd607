//! Command registry.
//!
//! Builds the map from lower-cased command name to handler identifier out of
//! the static handler type table.

use std::collections::HashMap;

use thiserror::Error;
use tracing::{debug, error, warn};

use super::handler::HandlerType;
use crate::events::EventLog;

/// Lower-cased command name to handler identifier.
pub type CommandMap = HashMap<String, String>;

/// Errors raised while introspecting a single handler type.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// The type name is empty or not a valid identifier.
    #[error("malformed handler type name '{0}'")]
    MalformedTypeName(String),
}

/// Enumerate every declared command in `handler_types`.
///
/// Types without a command declaration are ignored. Types that are declared
/// commands but carry no component marker, or whose declared name is blank,
/// are skipped. A type that fails introspection is logged and skipped; the
/// scan always runs to the end.
///
/// Every registered command is reported to `log` as an `EnlistingCommands`
/// event. When two types declare the same name (case-insensitively) the
/// later one in `handler_types` wins.
pub fn enumerate_commands(handler_types: &[&HandlerType], log: &dyn EventLog) -> CommandMap {
    let mut commands = CommandMap::new();

    for handler_type in handler_types.iter().filter(|t| t.command.is_some()) {
        debug!(type_name = handler_type.type_name, "Found a declared command");

        match enlist(handler_type) {
            Ok(Some((command, identifier))) => {
                log.info(
                    "EnlistingCommands",
                    &[
                        ("className", handler_type.type_name),
                        ("command", command.as_str()),
                        ("identifier", identifier.as_str()),
                    ],
                );
                if let Some(previous) = commands.insert(command.clone(), identifier.clone()) {
                    warn!(
                        command = %command,
                        previous = %previous,
                        replacement = %identifier,
                        "Command declared more than once, keeping the later handler"
                    );
                }
            }
            Ok(None) => {}
            Err(e) => {
                error!(type_name = handler_type.type_name, error = %e, "Skipping handler type");
            }
        }
    }

    debug!(?commands, "Found commands");
    commands
}

/// Resolve one declared command to its `(command, identifier)` entry.
fn enlist(handler_type: &HandlerType) -> Result<Option<(String, String)>, RegistryError> {
    let Some(declaration) = handler_type.command else {
        return Ok(None);
    };
    if handler_type.component.is_none() {
        debug!(
            type_name = handler_type.type_name,
            "Declared command is not a component, not registering"
        );
        return Ok(None);
    }
    if declaration.name.trim().is_empty() {
        return Ok(None);
    }

    match component_identifier(handler_type)? {
        Some(identifier) if !identifier.trim().is_empty() => {
            Ok(Some((declaration.name.to_lowercase(), identifier)))
        }
        _ => Ok(None),
    }
}

/// Identifier the container knows `handler_type` by.
///
/// Returns `None` when the type carries no component marker. An explicit,
/// non-blank marker value is used as-is (trimmed); otherwise the identifier
/// is derived from the type name.
pub fn component_identifier(handler_type: &HandlerType) -> Result<Option<String>, RegistryError> {
    let Some(component) = handler_type.component else {
        return Ok(None);
    };

    match component.value.trim() {
        "" => derive_identifier(handler_type.type_name).map(Some),
        explicit => Ok(Some(explicit.to_string())),
    }
}

/// Derive an identifier from a type name by lower-casing its first character.
///
/// Module paths are stripped first, so `builtin::DeployCommand` and
/// `DeployCommand` both yield `deployCommand`.
pub fn derive_identifier(type_name: &str) -> Result<String, RegistryError> {
    let simple = simple_name(type_name)?;
    let mut chars = simple.chars();
    let Some(first) = chars.next() else {
        return Err(RegistryError::MalformedTypeName(type_name.to_string()));
    };

    Ok(first.to_lowercase().chain(chars).collect())
}

fn simple_name(type_name: &str) -> Result<&str, RegistryError> {
    let simple = type_name.rsplit("::").next().unwrap_or(type_name);

    let starts_well = simple
        .chars()
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_');
    let all_valid = simple.chars().all(|c| c.is_alphanumeric() || c == '_');

    if starts_well && all_valid {
        Ok(simple)
    } else {
        Err(RegistryError::MalformedTypeName(type_name.to_string()))
    }
}
