//! Error infrastructure for bag-core.
//!
//! [`BagCell`](crate::BagCell) itself never fails: construction and both
//! setters are unconditional. The only failure surfaced here comes from
//! asking a [`BagSlot`](crate::BagSlot) for an extension it does not carry.

use crate::slot::SlotKind;

/// Severity level of an error, used by owners to pick a recovery strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Can retry with the same or an alternative request.
    Recoverable,

    /// Invalid input; do not retry without changes.
    ///
    /// Examples: asking a plain slot for equipment attributes
    Validation,

    /// Unexpected state inconsistency in the owner.
    Internal,

    /// Owner state corrupted, cannot continue.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates a bug in the caller.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all bag-core errors.
pub trait BagError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static identifier for this error variant, for metrics and tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Errors raised when accessing slot extensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlotError {
    #[error("slot holds a {found} extension, expected {expected}")]
    KindMismatch { expected: SlotKind, found: SlotKind },
}

impl BagError for SlotError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::KindMismatch { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::KindMismatch { .. } => "SLOT_KIND_MISMATCH",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_mismatch_is_validation() {
        let err = SlotError::KindMismatch {
            expected: SlotKind::Equipped,
            found: SlotKind::Plain,
        };

        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert!(!err.severity().is_recoverable());
        assert!(!err.severity().is_internal());
        assert_eq!(err.error_code(), "SLOT_KIND_MISMATCH");
        assert_eq!(
            err.to_string(),
            "slot holds a plain extension, expected equipped"
        );
    }

    #[test]
    fn severity_labels() {
        assert_eq!(ErrorSeverity::Recoverable.as_str(), "recoverable");
        assert_eq!(ErrorSeverity::Fatal.as_str(), "fatal");
        assert!(ErrorSeverity::Internal.is_internal());
        assert!(ErrorSeverity::Fatal.is_internal());
    }
}
