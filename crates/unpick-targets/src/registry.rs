use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::builder::TargetMethodsBuilder;
use crate::hierarchy::InheritanceChecker;
use crate::method::{SignatureKey, TargetMethod};
use crate::options::RegistryOptions;
use crate::resolver::ClassResolver;
use crate::sink::ResolveFailureSink;

/// Registry of constant-bearing target methods, keyed by `name + descriptor`.
///
/// Built once through [`TargetMethods::builder`] and then queried by the rewriting pass for every
/// invocation instruction it visits. The static owner of a call site need not be the declaring
/// class: calls through subclasses and implementing classes are matched by walking the owner's
/// hierarchy with the registry's [`ClassResolver`]. Walk outcomes are cached per
/// (declaring method, owner) pair.
///
/// Index queries (`targets_parameter`, `parameter_constant_group`) on a signature that was never
/// registered report "no mapping" rather than failing.
pub struct TargetMethods {
    methods: HashMap<SignatureKey, TargetMethod>,
    resolver: Arc<dyn ClassResolver>,
    sink: Arc<dyn ResolveFailureSink>,
    options: RegistryOptions,
}

impl TargetMethods {
    pub fn builder(resolver: impl ClassResolver + 'static) -> TargetMethodsBuilder {
        TargetMethodsBuilder::new(Arc::new(resolver))
    }

    pub(crate) fn from_parts(
        methods: HashMap<SignatureKey, TargetMethod>,
        resolver: Arc<dyn ClassResolver>,
        sink: Arc<dyn ResolveFailureSink>,
        options: RegistryOptions,
    ) -> Self {
        Self {
            methods,
            resolver,
            sink,
            options,
        }
    }

    /// Whether a call to `owner.name descriptor` invokes a registered target method.
    ///
    /// True when `owner` is the declaring class or inherits from it. Unknown signatures are
    /// simply not targets.
    pub fn targets(&self, owner: &str, name: &str, descriptor: &str) -> bool {
        let Some(method) = self.get(name, descriptor) else {
            return false;
        };
        InheritanceChecker::new(
            self.resolver.as_ref(),
            self.sink.as_ref(),
            &self.options.hierarchy_root,
        )
        .implemented_by(method, owner)
    }

    /// Whether parameter `index` of `name descriptor` has a constant group.
    ///
    /// Does not check `owner`; callers are expected to have matched the call site with
    /// [`TargetMethods::targets`] first.
    pub fn targets_parameter(
        &self,
        _owner: &str,
        name: &str,
        descriptor: &str,
        index: usize,
    ) -> bool {
        self.get(name, descriptor)
            .is_some_and(|method| method.has_parameter_group(index))
    }

    pub fn parameter_constant_group(
        &self,
        _owner: &str,
        name: &str,
        descriptor: &str,
        index: usize,
    ) -> Option<&str> {
        self.get(name, descriptor)?.parameter_group(index)
    }

    pub fn get(&self, name: &str, descriptor: &str) -> Option<&TargetMethod> {
        self.methods.get(&SignatureKey::new(name, descriptor))
    }

    pub fn iter(&self) -> impl Iterator<Item = &TargetMethod> + '_ {
        self.methods.values()
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    pub fn options(&self) -> &RegistryOptions {
        &self.options
    }

    /// Drops every memoized inheritance outcome. Later queries re-walk hierarchies.
    pub fn clear_caches(&self) {
        for method in self.methods.values() {
            method.clear_cache();
        }
    }
}

impl fmt::Display for TargetMethods {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&SignatureKey> = self.methods.keys().collect();
        keys.sort();

        f.write_str("TargetMethods [methods={")?;
        for (i, key) in keys.into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}={}", self.methods[key])?;
        }
        f.write_str("}]")
    }
}

impl fmt::Debug for TargetMethods {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TargetMethods")
            .field("methods", &self.methods)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
