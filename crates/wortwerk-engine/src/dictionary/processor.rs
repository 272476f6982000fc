// Post-processing hooks for dictionary results
//
// A dictionary may filter or annotate its own readings before they are
// merged with other dictionaries. Hooks are plain Rust values registered by
// the host; dictionary data refers to them by name.

use std::fmt;
use std::sync::Arc;

use hashbrown::HashMap;

use wortwerk_core::Variant;

/// A pure function over a dictionary's readings of one word.
pub trait Processor: Send + Sync {
    fn process(&self, variants: Vec<Variant>) -> Vec<Variant>;
}

impl<F> Processor for F
where
    F: Fn(Vec<Variant>) -> Vec<Variant> + Send + Sync,
{
    fn process(&self, variants: Vec<Variant>) -> Vec<Variant> {
        self(variants)
    }
}

/// Name under which the identity hook is always available.
pub const IDENTITY: &str = "identity";

/// Named hooks available to data-driven dictionaries.
#[derive(Clone)]
pub struct ProcessorRegistry {
    processors: HashMap<String, Arc<dyn Processor>>,
}

impl ProcessorRegistry {
    /// A registry knowing only `identity`.
    pub fn new() -> Self {
        let mut registry = Self {
            processors: HashMap::new(),
        };
        registry.register(IDENTITY, |variants: Vec<Variant>| variants);
        registry
    }

    /// Register `processor` under `name`, replacing any previous hook.
    pub fn register(&mut self, name: impl Into<String>, processor: impl Processor + 'static) {
        self.processors.insert(name.into(), Arc::new(processor));
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Processor>> {
        self.processors.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.processors.contains_key(name)
    }
}

impl Default for ProcessorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ProcessorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.processors.keys().collect();
        names.sort();
        f.debug_struct("ProcessorRegistry").field("names", &names).finish()
    }
}
