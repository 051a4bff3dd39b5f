//! Handler registry.

use std::collections::HashMap;

use crate::dispatch::handler::Handler;

type HandlerFactory = Box<dyn Fn() -> Box<dyn Handler> + Send + Sync>;

/// Explicit mapping from controller identifiers to handler factories.
///
/// Populated once at startup. A fresh handler instance is produced for
/// every dispatch, so handlers cannot accumulate cross-request state.
#[derive(Default)]
pub struct HandlerRegistry {
    factories: HashMap<String, HandlerFactory>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory under a controller identifier, replacing any
    /// previous registration for the same name.
    pub fn register<F>(&mut self, controller: impl Into<String>, factory: F)
    where
        F: Fn() -> Box<dyn Handler> + Send + Sync + 'static,
    {
        self.factories.insert(controller.into(), Box::new(factory));
    }

    /// Produce a fresh handler for a controller, if registered.
    pub fn instantiate(&self, controller: &str) -> Option<Box<dyn Handler>> {
        self.factories.get(controller).map(|factory| factory())
    }

    pub fn contains(&self, controller: &str) -> bool {
        self.factories.contains_key(controller)
    }

    /// Registered controller identifiers, for diagnostics.
    pub fn controllers(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("controllers", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}
