//! The immutable table of registered LOVD instances.

use std::collections::HashMap;

use tracing::{debug, warn};

use super::error::RegistryError;
use super::identifier::derive;

/// One registered upstream instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    /// Id used by the registry-index service.
    pub registry_id: String,

    /// Public catalog identifier derived from `registry_id`.
    pub identifier: String,
}

impl Instance {
    /// Register an instance, deriving its catalog identifier.
    pub fn new(registry_id: impl Into<String>) -> Self {
        let registry_id = registry_id.into();
        let identifier = derive(&registry_id);
        Self {
            registry_id,
            identifier,
        }
    }
}

/// Lookup table from catalog identifier to registration entry.
///
/// Built once at startup and shared read-only; configuration order is kept
/// so the root catalog list is stable.
#[derive(Debug, Clone, Default)]
pub struct InstanceRegistry {
    instances: Vec<Instance>,
    by_identifier: HashMap<String, usize>,
}

impl InstanceRegistry {
    /// Build the registry from configured registry ids.
    ///
    /// Surrounding whitespace is trimmed and repeated ids are registered once.
    /// Blank ids and identifier collisions are rejected.
    pub fn from_ids<I, S>(ids: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut registry = Self::default();

        for id in ids {
            let id = id.as_ref().trim();
            if id.is_empty() {
                return Err(RegistryError::EmptyId);
            }

            let instance = Instance::new(id);
            if let Some(&existing) = registry.by_identifier.get(&instance.identifier) {
                let existing = &registry.instances[existing];
                if existing.registry_id == instance.registry_id {
                    warn!("Instance {} is registered more than once", id);
                    continue;
                }
                return Err(RegistryError::Collision {
                    identifier: instance.identifier,
                    first: existing.registry_id.clone(),
                    second: instance.registry_id,
                });
            }

            debug!("Registered instance {} as {}", id, instance.identifier);
            registry
                .by_identifier
                .insert(instance.identifier.clone(), registry.instances.len());
            registry.instances.push(instance);
        }

        Ok(registry)
    }

    /// Find an instance by its public catalog identifier.
    pub fn get(&self, identifier: &str) -> Option<&Instance> {
        self.by_identifier
            .get(identifier)
            .map(|&index| &self.instances[index])
    }

    /// All instances, in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = &Instance> {
        self.instances.iter()
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}
