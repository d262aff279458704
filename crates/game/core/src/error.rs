//! Common error infrastructure for lineage-core.
//!
//! Every fallible operation in this crate reports a [`LineageError`]. The
//! [`GameError`] trait classifies errors so that callers (the CLI shell, tests)
//! can decide whether to re-prompt, fall back, or abort.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Validation**: invalid user input; the caller should ask again
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Validation,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
        }
    }

    /// Returns true if the input can simply be asked for again.
    pub const fn should_reprompt(&self) -> bool {
        matches!(self, Self::Validation)
    }
}

/// Common trait for all lineage-core errors.
///
/// Use `#[derive(thiserror::Error)]` for the Display/Error impl and implement
/// this trait for classification.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Errors raised while turning user-facing text into rule types.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineageError {
    /// The class name is not one of `warrior`, `mage` or `rogue`.
    #[error("unknown class name {input:?} (expected warrior, mage or rogue)")]
    InvalidClassName {
        /// The rejected input.
        input: String,
    },

    /// The attribute name is not one of `strength`, `agility` or `intellect`.
    #[error("unknown attribute name {input:?} (expected strength, agility or intellect)")]
    InvalidAttributeName {
        /// The rejected input.
        input: String,
    },
}

impl LineageError {
    pub fn invalid_class(input: impl Into<String>) -> Self {
        Self::InvalidClassName {
            input: input.into(),
        }
    }

    pub fn invalid_attribute(input: impl Into<String>) -> Self {
        Self::InvalidAttributeName {
            input: input.into(),
        }
    }
}

impl GameError for LineageError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidClassName { .. } | Self::InvalidAttributeName { .. } => {
                ErrorSeverity::Validation
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidClassName { .. } => "LINEAGE_INVALID_CLASS_NAME",
            Self::InvalidAttributeName { .. } => "LINEAGE_INVALID_ATTRIBUTE_NAME",
        }
    }
}
