use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use crate::descriptor::{parse_method_descriptor, MethodDescriptor};
use crate::error::{MappingPosition, Result, TargetsError};
use crate::method::{SignatureKey, TargetMethod};
use crate::options::{RegistryOptions, SignatureCollision};
use crate::registry::TargetMethods;
use crate::resolver::ClassResolver;
use crate::sink::{ResolveFailureSink, TracingSink};

/// Accumulates target methods for a [`TargetMethods`] registry.
pub struct TargetMethodsBuilder {
    resolver: Arc<dyn ClassResolver>,
    sink: Arc<dyn ResolveFailureSink>,
    options: RegistryOptions,
    methods: HashMap<SignatureKey, TargetMethod>,
}

impl TargetMethodsBuilder {
    pub fn new(resolver: Arc<dyn ClassResolver>) -> Self {
        Self {
            resolver,
            sink: Arc::new(TracingSink),
            options: RegistryOptions::default(),
            methods: HashMap::new(),
        }
    }

    pub fn options(mut self, options: RegistryOptions) -> Self {
        self.options = options;
        self
    }

    /// Where resolver failures encountered during queries are reported. Defaults to
    /// [`TracingSink`].
    pub fn failure_sink(mut self, sink: Arc<dyn ResolveFailureSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Starts describing the method `name descriptor` declared by `owner`.
    ///
    /// Fails if `descriptor` is not a well-formed method descriptor.
    pub fn target_method(
        self,
        owner: impl Into<String>,
        name: impl Into<String>,
        descriptor: impl Into<String>,
    ) -> Result<TargetMethodBuilder> {
        let descriptor = descriptor.into();
        let parsed_descriptor = parse_method_descriptor(&descriptor)?;
        Ok(TargetMethodBuilder {
            parent: self,
            owner: owner.into(),
            name: name.into(),
            descriptor,
            parsed_descriptor,
            parameter_groups: BTreeMap::new(),
            return_group: None,
        })
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    pub fn build(self) -> TargetMethods {
        tracing::debug!(
            target: "unpick.targets",
            methods = self.methods.len(),
            "built target method registry"
        );
        TargetMethods::from_parts(self.methods, self.resolver, self.sink, self.options)
    }

    fn insert(mut self, method: TargetMethod) -> Result<Self> {
        let key = method.signature_key();
        if let Some(existing) = self.methods.get(&key) {
            match self.options.signature_collision {
                SignatureCollision::Reject => {
                    return Err(TargetsError::DuplicateSignature {
                        key: key.to_string(),
                        existing_owner: existing.declaring_class().to_owned(),
                    });
                }
                SignatureCollision::Overwrite => {
                    tracing::debug!(
                        target: "unpick.targets",
                        signature = %key,
                        previous = existing.declaring_class(),
                        replacement = method.declaring_class(),
                        "replacing target method with the same signature"
                    );
                }
            }
        }
        self.methods.insert(key, method);
        Ok(self)
    }
}

/// Describes one target method; finished with [`TargetMethodBuilder::add`].
///
/// Each parameter position and the return value can be mapped at most once.
pub struct TargetMethodBuilder {
    parent: TargetMethodsBuilder,
    owner: String,
    name: String,
    descriptor: String,
    parsed_descriptor: MethodDescriptor,
    parameter_groups: BTreeMap<usize, String>,
    return_group: Option<String>,
}

impl TargetMethodBuilder {
    pub fn parameter_group(mut self, index: usize, group: impl Into<String>) -> Result<Self> {
        let count = self.parsed_descriptor.param_count();
        if self.parent.options.check_parameter_range && index >= count {
            return Err(TargetsError::ParameterOutOfRange {
                name: self.name,
                descriptor: self.descriptor,
                index,
                count,
            });
        }
        if let Some(existing) = self.parameter_groups.get(&index) {
            return Err(TargetsError::DuplicateMapping {
                position: MappingPosition::Parameter(index),
                existing: existing.clone(),
            });
        }
        self.parameter_groups.insert(index, group.into());
        Ok(self)
    }

    pub fn return_group(mut self, group: impl Into<String>) -> Result<Self> {
        if let Some(existing) = self.return_group {
            return Err(TargetsError::DuplicateMapping {
                position: MappingPosition::Return,
                existing,
            });
        }
        self.return_group = Some(group.into());
        Ok(self)
    }

    /// Registers the method with the parent builder and hands the parent back.
    ///
    /// A method already registered under the same `name + descriptor` is replaced or rejected
    /// according to [`RegistryOptions::signature_collision`].
    pub fn add(self) -> Result<TargetMethodsBuilder> {
        let method = TargetMethod::new(
            self.owner,
            self.name,
            self.descriptor,
            self.parsed_descriptor,
            self.parameter_groups,
            self.return_group,
        );
        self.parent.insert(method)
    }
}
