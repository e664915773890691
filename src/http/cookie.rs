// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Cookies as reported by the browser's cookie jar

use serde::{Deserialize, Serialize};

/// A single cookie read from the browser after login
///
/// `name` and `value` are optional so that a malformed jar can still be
/// represented and rejected by validation instead of at deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cookie {
    /// Cookie name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Cookie value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Domain the cookie belongs to
    #[serde(default)]
    pub domain: String,
    /// Path the cookie is valid for
    #[serde(default)]
    pub path: String,
    /// Secure flag (HTTPS only)
    #[serde(default)]
    pub secure: bool,
    /// HttpOnly flag
    #[serde(default)]
    pub http_only: bool,
}

impl Cookie {
    /// Create a new cookie
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            value: Some(value.into()),
            path: "/".to_string(),
            ..Default::default()
        }
    }

    /// Cookie without a name
    pub fn unnamed(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            ..Default::default()
        }
    }

    /// Cookie without a value
    pub fn without_value(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Cookie header fragment, `name=value;`
    ///
    /// A missing name renders as empty; a missing value never reaches this
    /// point because validation rejects it.
    pub fn to_header_fragment(&self) -> String {
        format!(
            "{}={};",
            self.name.as_deref().unwrap_or_default(),
            self.value.as_deref().unwrap_or_default()
        )
    }
}

/// Serialize cookies for the `cookie` request header
pub fn cookies_as_header(cookies: &[Cookie]) -> String {
    cookies
        .iter()
        .map(Cookie::to_header_fragment)
        .collect::<Vec<_>>()
        .join(" ")
}
