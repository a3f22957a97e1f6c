//! Shared storage of named patterns

use multiblock::Pattern;
use std::collections::HashMap;
use std::rc::Rc;
use thiserror::Error;

/// Errors from registering patterns
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A pattern is already registered under this name
    #[error("duplicate pattern name: {0}")]
    DuplicateName(String),
}

/// Named storage of shared patterns
///
/// Every handle to a registered pattern points at one allocation. Pattern
/// equality is identity-sensitive on the definitions map, so two `get`s of
/// the same name always compare equal, while a structurally identical
/// pattern built elsewhere does not.
#[derive(Debug, Default)]
pub struct PatternRegistry {
    patterns: HashMap<String, Rc<Pattern>>,
}

impl PatternRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        PatternRegistry::default()
    }

    /// Register a pattern under a name, returning the shared handle
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        pattern: Pattern,
    ) -> Result<Rc<Pattern>, RegistryError> {
        let name = name.into();
        if self.patterns.contains_key(&name) {
            return Err(RegistryError::DuplicateName(name));
        }
        let shared = Rc::new(pattern);
        self.patterns.insert(name, Rc::clone(&shared));
        Ok(shared)
    }

    /// Look up a pattern by name
    pub fn get(&self, name: &str) -> Option<Rc<Pattern>> {
        self.patterns.get(name).cloned()
    }

    /// Whether a pattern is registered under this name
    pub fn contains(&self, name: &str) -> bool {
        self.patterns.contains_key(name)
    }

    /// Number of registered patterns
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Names of all registered patterns (unordered)
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.patterns.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PatternBuilder;
    use multiblock::Definition;

    fn sample_pattern() -> Pattern {
        PatternBuilder::new()
            .layer(&["ss", "ss"])
            .define('s', Definition::Solid)
            .build()
            .unwrap()
    }

    #[test]
    fn test_insert_and_get() {
        let mut registry = PatternRegistry::new();
        registry.insert("slab", sample_pattern()).unwrap();

        assert!(registry.contains("slab"));
        assert_eq!(registry.len(), 1);
        assert!(registry.get("slab").is_some());
        assert!(registry.get("tower").is_none());
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut registry = PatternRegistry::new();
        registry.insert("slab", sample_pattern()).unwrap();

        let err = registry.insert("slab", sample_pattern()).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateName(name) if name == "slab"));
    }

    #[test]
    fn test_shared_handles_compare_equal() {
        let mut registry = PatternRegistry::new();
        registry.insert("slab", sample_pattern()).unwrap();

        let a = registry.get("slab").unwrap();
        let b = registry.get("slab").unwrap();
        assert_eq!(a, b);

        // A structurally identical pattern built separately has its own
        // definitions allocation and never compares equal
        let other = sample_pattern();
        assert_ne!(*a, other);
    }
}
