use std::collections::HashMap;
use std::sync::Arc;

use crate::error::ResolveError;

/// Structural header of a class: its own name plus direct supertypes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassStructure {
    pub name: String,
    pub super_class: Option<String>,
    pub interfaces: Vec<String>,
}

impl ClassStructure {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            super_class: None,
            interfaces: Vec::new(),
        }
    }

    pub fn extends(mut self, super_class: impl Into<String>) -> Self {
        self.super_class = Some(super_class.into());
        self
    }

    pub fn implements(mut self, interface: impl Into<String>) -> Self {
        self.interfaces.push(interface.into());
        self
    }
}

/// Locates classes by internal name (`pkg/Sub`) and reports their direct supertypes.
///
/// Implementations typically read class bytes from a classpath; the registry only relies on the
/// structural header.
pub trait ClassResolver: Send + Sync {
    fn resolve(&self, internal_name: &str) -> Result<ClassStructure, ResolveError>;
}

impl<T: ClassResolver + ?Sized> ClassResolver for &T {
    fn resolve(&self, internal_name: &str) -> Result<ClassStructure, ResolveError> {
        (**self).resolve(internal_name)
    }
}

impl<T: ClassResolver + ?Sized> ClassResolver for Box<T> {
    fn resolve(&self, internal_name: &str) -> Result<ClassStructure, ResolveError> {
        (**self).resolve(internal_name)
    }
}

impl<T: ClassResolver + ?Sized> ClassResolver for Arc<T> {
    fn resolve(&self, internal_name: &str) -> Result<ClassStructure, ResolveError> {
        (**self).resolve(internal_name)
    }
}

/// In-memory resolver keyed by internal name.
#[derive(Debug, Clone, Default)]
pub struct MapClassResolver {
    classes: HashMap<String, ClassStructure>,
}

impl MapClassResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_class(mut self, class: ClassStructure) -> Self {
        self.insert(class);
        self
    }

    pub fn insert(&mut self, class: ClassStructure) -> Option<ClassStructure> {
        self.classes.insert(class.name.clone(), class)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl FromIterator<ClassStructure> for MapClassResolver {
    fn from_iter<I: IntoIterator<Item = ClassStructure>>(iter: I) -> Self {
        let mut resolver = MapClassResolver::new();
        for class in iter {
            resolver.insert(class);
        }
        resolver
    }
}

impl ClassResolver for MapClassResolver {
    fn resolve(&self, internal_name: &str) -> Result<ClassStructure, ResolveError> {
        self.classes
            .get(internal_name)
            .cloned()
            .ok_or_else(|| ResolveError::NotFound(internal_name.to_string()))
    }
}

/// Consults each resolver in order.
///
/// A `NotFound` from one resolver falls through to the next; any other error is returned as is,
/// since a class that exists but cannot be read should not be shadowed by a later entry.
pub struct ChainClassResolver {
    resolvers: Vec<Box<dyn ClassResolver>>,
}

impl ChainClassResolver {
    pub fn new(resolvers: Vec<Box<dyn ClassResolver>>) -> Self {
        Self { resolvers }
    }

    pub fn push(&mut self, resolver: impl ClassResolver + 'static) {
        self.resolvers.push(Box::new(resolver));
    }
}

impl ClassResolver for ChainClassResolver {
    fn resolve(&self, internal_name: &str) -> Result<ClassStructure, ResolveError> {
        for resolver in &self.resolvers {
            match resolver.resolve(internal_name) {
                Err(err) if err.is_not_found() => continue,
                other => return other,
            }
        }
        Err(ResolveError::NotFound(internal_name.to_string()))
    }
}

impl std::fmt::Debug for ChainClassResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainClassResolver")
            .field("resolvers", &self.resolvers.len())
            .finish()
    }
}
