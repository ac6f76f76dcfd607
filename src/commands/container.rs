//! Handler construction.
//!
//! The container maps handler identifiers to factory functions. It is built
//! from the same handler type table the registry scans, so every registered
//! command has a matching factory.

use std::collections::HashMap;

use tracing::{trace, warn};

use super::handler::{CommandHandler, HandlerFactory, HandlerType};
use super::registry::component_identifier;

/// Produces handler instances from identifiers.
///
/// Unknown identifiers yield `None`; implementations never fail.
pub trait ConstructionService {
    fn instantiate(&self, identifier: &str) -> Option<Box<dyn CommandHandler>>;
}

/// Factory registry keyed by handler identifier.
#[derive(Debug, Default)]
pub struct Container {
    factories: HashMap<String, HandlerFactory>,
}

impl Container {
    /// Create an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every component-marked type in `handler_types`.
    ///
    /// Types whose identifier cannot be resolved are logged and left out.
    pub fn from_handler_types(handler_types: &[&HandlerType]) -> Self {
        let mut container = Self::new();

        for handler_type in handler_types {
            match component_identifier(handler_type) {
                Ok(Some(identifier)) => container.register(identifier, handler_type.factory),
                Ok(None) => {}
                Err(e) => {
                    warn!(type_name = handler_type.type_name, error = %e, "Not registering component");
                }
            }
        }

        container
    }

    /// Register a factory under `identifier`, replacing any previous one.
    pub fn register(&mut self, identifier: impl Into<String>, factory: HandlerFactory) {
        let identifier = identifier.into();
        trace!(identifier = %identifier, "Registering component");
        self.factories.insert(identifier, factory);
    }

    /// All registered identifiers, sorted.
    pub fn identifiers(&self) -> Vec<&str> {
        let mut identifiers: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        identifiers.sort_unstable();
        identifiers
    }
}

impl ConstructionService for Container {
    fn instantiate(&self, identifier: &str) -> Option<Box<dyn CommandHandler>> {
        self.factories.get(identifier).map(|factory| factory())
    }
}
