// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Session credentials produced by a successful login

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::http::Cookie;

/// CSRF token, car identifier and cookie jar of one dashboard session
///
/// Never mutated once built; a new session needs a new login.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionCredentials {
    /// Token from the `_csrf` meta tag
    #[serde(default)]
    pub csrf_token: String,
    /// Car identifier from the post-login URL
    #[serde(default, alias = "carId")]
    pub car_identifier: String,
    /// Browser cookies after login
    #[serde(default, deserialize_with = "cookie_jar")]
    pub cookies: Vec<Cookie>,
}

/// A jar that is `null` or not an array reads as empty, so validation
/// reports it as missing cookies.
fn cookie_jar<'de, D>(deserializer: D) -> Result<Vec<Cookie>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        jar @ Value::Array(_) => serde_json::from_value(jar).map_err(serde::de::Error::custom),
        _ => Ok(Vec::new()),
    }
}

impl SessionCredentials {
    /// Create a new set of credentials
    pub fn new(
        csrf_token: impl Into<String>,
        car_identifier: impl Into<String>,
        cookies: Vec<Cookie>,
    ) -> Self {
        Self {
            csrf_token: csrf_token.into(),
            car_identifier: car_identifier.into(),
            cookies,
        }
    }

    /// Get cookie by name
    pub fn cookie(&self, name: &str) -> Option<&Cookie> {
        self.cookies.iter().find(|c| c.name.as_deref() == Some(name))
    }

    /// Export to JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Create from JSON
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
