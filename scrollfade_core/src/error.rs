// Copyright 2026 the Scrollfade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attach-time errors.
//!
//! Once a controller is attached every update is total, so these are only
//! ever produced while wiring a controller to a surface.

use alloc::string::String;
use core::fmt;

use crate::config::ConfigError;

/// Why a controller could not be attached.
#[derive(Clone, Debug, PartialEq)]
pub enum FadeError {
    /// No element with the given id exists.
    MissingTarget {
        /// The id that was looked up.
        id: String,
    },
    /// The target has no parent element to host the overlay.
    MissingContainer,
    /// The target already has a live controller.
    AlreadyAttached,
    /// The configuration failed validation.
    InvalidConfig(ConfigError),
    /// A host facility (window, document, body, ...) is unavailable.
    Unavailable(&'static str),
}

impl fmt::Display for FadeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTarget { id } => write!(f, "target element with id \"{id}\" not found"),
            Self::MissingContainer => f.write_str("target element has no parent container"),
            Self::AlreadyAttached => f.write_str("target element already has a scroll fade"),
            Self::InvalidConfig(e) => write!(f, "invalid fade configuration: {e}"),
            Self::Unavailable(what) => write!(f, "{what} is unavailable"),
        }
    }
}

impl core::error::Error for FadeError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::InvalidConfig(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for FadeError {
    fn from(e: ConfigError) -> Self {
        Self::InvalidConfig(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString as _;
    use core::error::Error as _;

    #[test]
    fn missing_target_names_the_id() {
        let e = FadeError::MissingTarget {
            id: "site-logo".to_string(),
        };
        assert_eq!(e.to_string(), "target element with id \"site-logo\" not found");
    }

    #[test]
    fn config_error_is_the_source() {
        let e = FadeError::from(ConfigError::NegativeBlur(-1.0));
        assert!(e.source().is_some(), "config error should be chained");
        assert_eq!(
            e.to_string(),
            "invalid fade configuration: blur_max -1 is negative"
        );
    }
}
