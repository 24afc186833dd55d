// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub const NAME_MAX_LEN: usize = 120;
pub const EMAIL_MAX_LEN: usize = 254;
pub const PHONE_MAX_LEN: usize = 32;
pub const TEXT_MAX_LEN: usize = 4000;

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    Empty(&'static str),
    TooLong(&'static str, usize),
    InvalidFormat(&'static str, &'static str),
}

impl ParseError {
    /// Field the error is attached to, for structured validation details.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::Empty(f) | Self::TooLong(f, _) | Self::InvalidFormat(f, _) => f,
        }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty(name) => write!(f, "{name} is required"),
            Self::TooLong(name, max) => write!(f, "{name} exceeds max length {max}"),
            Self::InvalidFormat(name, msg) => write!(f, "{name} {msg}"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Validates a required free-text field: non-empty after trimming, bounded.
/// Returns the trimmed value.
pub fn required(name: &'static str, raw: &str, max: usize) -> Result<String, ParseError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(ParseError::Empty(name));
    }
    if value.len() > max {
        return Err(ParseError::TooLong(name, max));
    }
    Ok(value.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
#[non_exhaustive]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let value = input.trim();
        if value.is_empty() {
            return Err(ParseError::Empty("email"));
        }
        if value.len() > EMAIL_MAX_LEN {
            return Err(ParseError::TooLong("email", EMAIL_MAX_LEN));
        }
        if value.chars().any(char::is_whitespace) {
            return Err(ParseError::InvalidFormat(
                "email",
                "must not contain whitespace",
            ));
        }
        let Some((local, domain)) = value.split_once('@') else {
            return Err(ParseError::InvalidFormat(
                "email",
                "must be like name@example.com",
            ));
        };
        if local.is_empty()
            || domain.is_empty()
            || domain.contains('@')
            || !domain.contains('.')
            || domain.starts_with('.')
            || domain.ends_with('.')
        {
            return Err(ParseError::InvalidFormat(
                "email",
                "must be like name@example.com",
            ));
        }
        Ok(Self(value.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for EmailAddress {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
