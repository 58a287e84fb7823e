use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

/// The example-provider capability: a type that can be instantiated and
/// asked for one example data value.
///
/// Providers are registered in a [`ProviderRegistry`] under a name that
/// annotations reference. Instantiation happens at merge time, once per
/// document build — providers may carry per-build state.
pub trait ExamplesProvider {
    /// Produce the example value for this provider.
    fn example(&self) -> Value;
}

/// Factory stored per registered provider.
///
/// Shared into validated annotations so the merge engine never goes back
/// through the registry.
pub type ProviderFactory = Arc<dyn Fn() -> Box<dyn ExamplesProvider> + Send + Sync>;

/// Name-keyed registry of example-provider factories.
///
/// The registry is the capability check: an annotation whose provider name
/// does not resolve here fails validation with `InvalidProviderType`. Only
/// `ExamplesProvider` implementations can be registered, so resolution is
/// proof of the capability.
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    factories: HashMap<String, ProviderFactory>,
}

impl ProviderRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider factory under the given name (typically the
    /// provider's type name).
    ///
    /// Registering the same name twice replaces the earlier factory.
    pub fn register<F, P>(&mut self, name: &str, factory: F)
    where
        F: Fn() -> P + Send + Sync + 'static,
        P: ExamplesProvider + 'static,
    {
        self.factories.insert(
            name.to_string(),
            Arc::new(move || Box::new(factory()) as Box<dyn ExamplesProvider>),
        );
    }

    /// Look up a registered factory.
    pub fn resolve(&self, name: &str) -> Option<ProviderFactory> {
        self.factories.get(name).cloned()
    }

    /// Check if a provider is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }
}
