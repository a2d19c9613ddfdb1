// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Failures talking to the remote tabular store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cannot reach the remote store: {0}")]
    Connection(String),

    #[error("worksheet '{0}' not found")]
    NotFound(String),

    #[error("unexpected response from the remote store: {0}")]
    BadResponse(String),
}

impl From<reqwest::Error> for StoreError {
    fn from(e: reqwest::Error) -> Self {
        StoreError::Connection(e.to_string())
    }
}

/// Text that could not be parsed into its declared type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind} '{value}'")]
pub struct FormatError {
    pub kind: &'static str,
    pub value: String,
}

impl FormatError {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        FormatError {
            kind,
            value: value.into(),
        }
    }
}
