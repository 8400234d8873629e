use std::fmt;

pub type Result<T> = std::result::Result<T, TargetsError>;

/// Position of a constant group mapping on a target method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MappingPosition {
    Parameter(usize),
    Return,
}

impl fmt::Display for MappingPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MappingPosition::Parameter(index) => write!(f, "Parameter {index}"),
            MappingPosition::Return => f.write_str("Return"),
        }
    }
}

/// Errors produced while building a [`crate::TargetMethods`] registry.
///
/// These always indicate a mistake in the mapping configuration and are surfaced to the caller of
/// the builder. Query operations never return them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TargetsError {
    #[error("{position} is already mapped to constant group {existing}")]
    DuplicateMapping {
        position: MappingPosition,
        existing: String,
    },

    #[error("parameter {index} is out of range for {name}{descriptor} ({count} parameters)")]
    ParameterOutOfRange {
        name: String,
        descriptor: String,
        index: usize,
        count: usize,
    },

    #[error("invalid method descriptor: {0}")]
    InvalidDescriptor(String),

    #[error("target method {key} is already registered (declared by {existing_owner})")]
    DuplicateSignature { key: String, existing_owner: String },
}

/// Failure reported by a [`crate::ClassResolver`].
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("class {0} not found")]
    NotFound(String),

    #[error("class {class} is malformed: {message}")]
    Malformed { class: String, message: String },

    #[error("io error reading class {class}: {source}")]
    Io {
        class: String,
        #[source]
        source: std::io::Error,
    },
}

impl ResolveError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ResolveError::NotFound(_))
    }
}
