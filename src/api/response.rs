// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Decoded dashboard responses

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Name of the status field in every dashboard response
pub const ERROR_CODE_FIELD: &str = "errorCode";

/// Status code the dashboard uses for success
pub const SUCCESS_CODE: &str = "0";

/// Decoded JSON body of an action
///
/// Opaque apart from the `errorCode` field; the payload shape belongs to
/// the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionResult(Value);

/// Application-level failure reported in a response body
///
/// Advisory: it is logged and exposed here, never returned as an error.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationError {
    /// The `errorCode` value, anything but the string `"0"`
    pub error_code: Value,
    /// The full response body
    pub body: Value,
}

impl ActionResult {
    /// Wrap a decoded body
    pub fn new(body: Value) -> Self {
        Self(body)
    }

    /// The `errorCode` field, if present
    ///
    /// Returned as-is: `0`, `null` and `"0"` are different codes.
    pub fn error_code(&self) -> Option<&Value> {
        self.0.get(ERROR_CODE_FIELD)
    }

    /// Check if the dashboard reported success (`errorCode` is exactly `"0"`)
    pub fn is_success(&self) -> bool {
        matches!(self.error_code(), Some(Value::String(code)) if code == SUCCESS_CODE)
    }

    /// Application error, when `errorCode` is present and not `"0"`
    pub fn application_error(&self) -> Option<ApplicationError> {
        let error_code = self.error_code()?;
        if self.is_success() {
            return None;
        }

        Some(ApplicationError {
            error_code: error_code.clone(),
            body: self.0.clone(),
        })
    }

    /// Look up a top-level field
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Borrow the raw body
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Take the raw body
    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for ActionResult {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl fmt::Display for ActionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ApplicationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error_code {
            Value::String(code) => {
                write!(f, "dashboard returned errorCode {}: {}", code, self.body)
            }
            other => write!(f, "dashboard returned errorCode {}: {}", other, self.body),
        }
    }
}
