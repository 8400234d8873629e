use serde::{Deserialize, Serialize};

/// Internal name of `java.lang.Object`.
pub const JAVA_LANG_OBJECT: &str = "java/lang/Object";

/// What [`crate::TargetMethodsBuilder`] does when a second target method is added under a
/// signature that is already registered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignatureCollision {
    /// Replace the earlier record.
    #[default]
    Overwrite,
    /// Fail with [`crate::TargetsError::DuplicateSignature`].
    Reject,
}

/// Registry tuning knobs.
///
/// Deserializable so the component that loads mapping configuration can carry these alongside the
/// mappings themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryOptions {
    /// Root of every class hierarchy. Never resolved during inheritance checks.
    pub hierarchy_root: String,

    pub signature_collision: SignatureCollision,

    /// Reject parameter mappings whose index is not below the descriptor's parameter count.
    ///
    /// Off by default: any index is accepted and simply never matches a real argument.
    pub check_parameter_range: bool,
}

impl Default for RegistryOptions {
    fn default() -> Self {
        Self {
            hierarchy_root: JAVA_LANG_OBJECT.to_owned(),
            signature_collision: SignatureCollision::default(),
            check_parameter_range: false,
        }
    }
}
