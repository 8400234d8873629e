//! Inheritance checks against the declaring class of a target method.
//!
//! The walk visits the superclass chain before interfaces, depth first, and stops at the first
//! ancestor whose internal name equals the declaring class. Ancestors are compared by name before
//! they are resolved, so a direct subclass costs a single resolver call. Classes that fail to
//! resolve are reported to the failure sink and count as a non-match for that branch only.

use std::collections::HashSet;

use crate::method::TargetMethod;
use crate::resolver::ClassResolver;
use crate::sink::{ResolveFailure, ResolveFailureSink};

pub(crate) struct InheritanceChecker<'a> {
    resolver: &'a dyn ClassResolver,
    sink: &'a dyn ResolveFailureSink,
    hierarchy_root: &'a str,
}

impl<'a> InheritanceChecker<'a> {
    pub(crate) fn new(
        resolver: &'a dyn ClassResolver,
        sink: &'a dyn ResolveFailureSink,
        hierarchy_root: &'a str,
    ) -> Self {
        Self {
            resolver,
            sink,
            hierarchy_root,
        }
    }

    /// Whether `class` is, or inherits from, the declaring class of `method`.
    ///
    /// Outcomes are memoized on `method`.
    pub(crate) fn implemented_by(&self, method: &TargetMethod, class: &str) -> bool {
        if let Some(cached) = method.cached_implementation(class) {
            return cached;
        }

        let declaring_class = method.declaring_class();
        let mut visited = HashSet::new();
        let implements = self.inherits_from(class, declaring_class, &mut visited);
        tracing::trace!(
            target: "unpick.targets",
            class,
            declaring_class,
            implements,
            visited = visited.len(),
            "inheritance check"
        );

        method.remember(class, implements);
        implements
    }

    fn inherits_from(&self, class: &str, target: &str, visited: &mut HashSet<String>) -> bool {
        if class == target {
            return true;
        }
        if class == self.hierarchy_root || !visited.insert(class.to_owned()) {
            return false;
        }

        let structure = match self.resolver.resolve(class) {
            Ok(structure) => structure,
            Err(error) => {
                self.sink.report(ResolveFailure {
                    class: class.to_owned(),
                    declaring_class: target.to_owned(),
                    error,
                });
                return false;
            }
        };

        if let Some(super_class) = structure.super_class.as_deref() {
            if self.inherits_from(super_class, target, visited) {
                return true;
            }
        }

        structure
            .interfaces
            .iter()
            .any(|interface| self.inherits_from(interface, target, visited))
    }
}
