use std::collections::{BTreeMap, HashSet};
use std::fmt;

use parking_lot::RwLock;

use crate::descriptor::MethodDescriptor;

/// Registry key of a target method: name immediately followed by descriptor, e.g.
/// `of(II)Lpkg/Color;`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SignatureKey(String);

impl SignatureKey {
    pub fn new(name: &str, descriptor: &str) -> Self {
        let mut key = String::with_capacity(name.len() + descriptor.len());
        key.push_str(name);
        key.push_str(descriptor);
        Self(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SignatureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Memoized inheritance outcomes for one declaring class.
///
/// The two sets are disjoint and only ever grow (until explicitly cleared).
#[derive(Debug, Default)]
pub(crate) struct ImplementorCache {
    implementors: HashSet<String>,
    non_implementors: HashSet<String>,
}

impl ImplementorCache {
    pub(crate) fn lookup(&self, class: &str) -> Option<bool> {
        if self.implementors.contains(class) {
            Some(true)
        } else if self.non_implementors.contains(class) {
            Some(false)
        } else {
            None
        }
    }

    pub(crate) fn record(&mut self, class: &str, implements: bool) {
        let (hit, miss) = if implements {
            (&mut self.implementors, &mut self.non_implementors)
        } else {
            (&mut self.non_implementors, &mut self.implementors)
        };
        miss.remove(class);
        hit.insert(class.to_owned());
    }
}

/// A method known to accept (or return) symbolic constants in some positions.
#[derive(Debug)]
pub struct TargetMethod {
    declaring_class: String,
    name: String,
    descriptor: String,
    parsed_descriptor: MethodDescriptor,
    parameter_groups: BTreeMap<usize, String>,
    return_group: Option<String>,
    cache: RwLock<ImplementorCache>,
}

impl TargetMethod {
    pub(crate) fn new(
        declaring_class: String,
        name: String,
        descriptor: String,
        parsed_descriptor: MethodDescriptor,
        parameter_groups: BTreeMap<usize, String>,
        return_group: Option<String>,
    ) -> Self {
        Self {
            declaring_class,
            name,
            descriptor,
            parsed_descriptor,
            parameter_groups,
            return_group,
            cache: RwLock::new(ImplementorCache::default()),
        }
    }

    pub fn declaring_class(&self) -> &str {
        &self.declaring_class
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn descriptor(&self) -> &str {
        &self.descriptor
    }

    pub fn parsed_descriptor(&self) -> &MethodDescriptor {
        &self.parsed_descriptor
    }

    pub fn signature_key(&self) -> SignatureKey {
        SignatureKey::new(&self.name, &self.descriptor)
    }

    pub fn has_parameter_group(&self, index: usize) -> bool {
        self.parameter_groups.contains_key(&index)
    }

    /// Name of the constant group valid for parameter `index`, if one is mapped.
    pub fn parameter_group(&self, index: usize) -> Option<&str> {
        self.parameter_groups.get(&index).map(String::as_str)
    }

    pub fn parameter_groups(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.parameter_groups
            .iter()
            .map(|(index, group)| (*index, group.as_str()))
    }

    /// Constant group of the return value.
    ///
    /// Recorded and validated by the builder, but no registry query consults it.
    pub fn return_group(&self) -> Option<&str> {
        self.return_group.as_deref()
    }

    /// Outcome of a previous inheritance check for `class`, without walking anything.
    ///
    /// The declaring class itself always answers `Some(true)`.
    pub fn cached_implementation(&self, class: &str) -> Option<bool> {
        if class == self.declaring_class {
            return Some(true);
        }
        self.cache.read().lookup(class)
    }

    pub(crate) fn remember(&self, class: &str, implements: bool) {
        self.cache.write().record(class, implements);
    }

    pub fn clear_cache(&self) {
        *self.cache.write() = ImplementorCache::default();
    }
}

impl fmt::Display for TargetMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TargetMethod {{Qualified Name: {}.{}, Descriptor: {}, Parameter Constant Groups: {{",
            self.declaring_class, self.name, self.descriptor
        )?;
        for (i, (index, group)) in self.parameter_groups.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{index}={group}")?;
        }
        f.write_str("}}")
    }
}
