//! Registry of constant-bearing target methods for constant de-inlining.
//!
//! A [`TargetMethods`] registry answers, for a call site `owner.name descriptor`, whether the call
//! reaches a method whose parameters accept symbolic constants, and which constant group is valid
//! at each parameter position. Call sites are matched through inheritance: a call whose static
//! owner is a subclass (or implementor) of the declaring class is a target too. The class
//! hierarchy is discovered lazily through a [`ClassResolver`] and the outcome is cached on the
//! target method.
//!
//! ```
//! use unpick_targets::{ClassStructure, MapClassResolver, TargetMethods};
//!
//! let resolver = MapClassResolver::new()
//!     .with_class(ClassStructure::new("pkg/SubColor").extends("pkg/Color"));
//! let registry = TargetMethods::builder(resolver)
//!     .target_method("pkg/Color", "of", "(II)Lpkg/Color;")?
//!     .parameter_group(0, "RED_VALUES")?
//!     .add()?
//!     .build();
//!
//! assert!(registry.targets("pkg/SubColor", "of", "(II)Lpkg/Color;"));
//! assert_eq!(
//!     registry.parameter_constant_group("pkg/SubColor", "of", "(II)Lpkg/Color;", 0),
//!     Some("RED_VALUES")
//! );
//! # Ok::<(), unpick_targets::TargetsError>(())
//! ```

#![forbid(unsafe_code)]

mod builder;
mod descriptor;
mod error;
mod hierarchy;
mod method;
mod options;
mod registry;
mod resolver;
mod sink;

pub use crate::builder::{TargetMethodBuilder, TargetMethodsBuilder};
pub use crate::descriptor::{parse_method_descriptor, MethodDescriptor};
pub use crate::error::{MappingPosition, ResolveError, Result, TargetsError};
pub use crate::method::{SignatureKey, TargetMethod};
pub use crate::options::{RegistryOptions, SignatureCollision, JAVA_LANG_OBJECT};
pub use crate::registry::TargetMethods;
pub use crate::resolver::{ChainClassResolver, ClassResolver, ClassStructure, MapClassResolver};
pub use crate::sink::{CollectingSink, ResolveFailure, ResolveFailureSink, TracingSink};
