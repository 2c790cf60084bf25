// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error type shared by every fallible [`Time`](crate::Time) operation.

use thiserror::Error;

/// Failures reported by constructors, arithmetic and zone switches.
///
/// Each variant corresponds to one error kind a binding layer is expected to
/// surface to its own users (argument error, invalid time, type error).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeError {
    /// No usable argument was supplied to [`Time::at`](crate::Time::at).
    #[error("argument error: {0}")]
    Argument(String),

    /// The requested instant cannot be represented or was rejected.
    #[error("not a valid time: {0}")]
    InvalidInstant(String),

    /// [`Time::copy_of`](crate::Time::copy_of) was given a value of another kind.
    #[error("wrong argument class: expected {expected}, found {found}")]
    WrongKind {
        expected: &'static str,
        found: &'static str,
    },
}

impl TimeError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInstant(reason.into())
    }

    /// `true` for [`TimeError::InvalidInstant`].
    #[inline]
    pub fn is_invalid_instant(&self) -> bool {
        matches!(self, Self::InvalidInstant(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failure() {
        let err = TimeError::Argument("need at least one argument".into());
        assert_eq!(err.to_string(), "argument error: need at least one argument");

        let err = TimeError::invalid("-3600 is before the epoch");
        assert!(err.is_invalid_instant());
        assert_eq!(err.to_string(), "not a valid time: -3600 is before the epoch");

        let err = TimeError::WrongKind {
            expected: "A",
            found: "B",
        };
        assert!(!err.is_invalid_instant());
        assert_eq!(err.to_string(), "wrong argument class: expected A, found B");
    }
}
