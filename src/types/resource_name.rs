// ABOUTME: RFC 1123 label validation for namespace and application names.
// ABOUTME: Normalizes CI project paths like `group/sub` into valid labels.

use std::fmt;
use thiserror::Error;

/// Maximum length of a DNS label.
pub const MAX_LABEL_LEN: usize = 63;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResourceNameError {
    #[error("name cannot be empty")]
    Empty,

    #[error("name `{0}` exceeds maximum length of 63 characters")]
    TooLong(String),

    #[error("name `{0}` must start with a lowercase letter or digit")]
    BadStart(String),

    #[error("name `{0}` must end with a lowercase letter or digit")]
    BadEnd(String),

    #[error("invalid character in name `{name}`: '{found}'")]
    InvalidChar { name: String, found: char },
}

/// A validated RFC 1123 label, usable as a namespace or as the
/// application part of derived object names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceName(String);

impl ResourceName {
    pub fn new(value: &str) -> Result<Self, ResourceNameError> {
        if value.is_empty() {
            return Err(ResourceNameError::Empty);
        }

        if value.len() > MAX_LABEL_LEN {
            return Err(ResourceNameError::TooLong(value.to_string()));
        }

        for c in value.chars() {
            if !c.is_ascii_lowercase() && !c.is_ascii_digit() && c != '-' {
                return Err(ResourceNameError::InvalidChar {
                    name: value.to_string(),
                    found: c,
                });
            }
        }

        if value.starts_with('-') {
            return Err(ResourceNameError::BadStart(value.to_string()));
        }

        if value.ends_with('-') {
            return Err(ResourceNameError::BadEnd(value.to_string()));
        }

        Ok(Self(value.to_string()))
    }

    /// Normalize a CI project path into a label.
    ///
    /// Lowercases the input and replaces each `/` group separator with `--`,
    /// the same transformation used when deriving public subdomains.
    pub fn normalize(raw: &str) -> Result<Self, ResourceNameError> {
        let normalized = raw.trim().to_ascii_lowercase().replace('/', "--");
        Self::new(&normalized)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ResourceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
