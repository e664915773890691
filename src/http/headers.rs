// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Fixed request header set derived from a session

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use super::cookie::cookies_as_header;
use super::headers_names as names;
use crate::api::ClientConfig;
use crate::error::{Error, Result};
use crate::session::SessionCredentials;

/// Headers sent with every authenticated action
///
/// Pure function of the session and config, built once per client.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestHeaders {
    map: HeaderMap,
}

impl RequestHeaders {
    /// Build the header set for a validated session
    pub fn build(credentials: &SessionCredentials, config: &ClientConfig) -> Result<Self> {
        let referer = config.vehicle_url(&credentials.car_identifier, "");
        let cookie = cookies_as_header(&credentials.cookies);

        let entries: [(&'static str, &str); 12] = [
            (names::COOKIE, cookie.as_str()),
            (names::PRAGMA, "no-cache"),
            (names::ORIGIN, config.base_url.as_str()),
            (names::REFERER, referer.as_str()),
            (names::ACCEPT, "application/json, text/plain, */*"),
            (names::ACCEPT_LANGUAGE, config.accept_language.as_str()),
            (names::CACHE_CONTROL, "no-cache"),
            (names::CONTENT_TYPE, "application/json;charset=utf-8"),
            (names::SEC_FETCH_MODE, "cors"),
            (names::SEC_FETCH_SITE, "same-origin"),
            (names::X_CSRF_TOKEN, credentials.csrf_token.as_str()),
            (names::USER_AGENT, config.user_agent.as_str()),
        ];

        let mut map = HeaderMap::with_capacity(entries.len());
        for (name, value) in entries {
            let value = HeaderValue::from_str(value).map_err(|e| Error::InvalidHeader {
                name,
                reason: e.to_string(),
            })?;
            map.insert(HeaderName::from_static(name), value);
        }

        Ok(Self { map })
    }

    /// Underlying header map
    pub fn as_map(&self) -> &HeaderMap {
        &self.map
    }

    /// Get a header value as a string
    pub fn get(&self, name: &str) -> Option<&str> {
        self.map.get(name).and_then(|v| v.to_str().ok())
    }

    /// Serialized cookie header
    pub fn cookie(&self) -> Option<&str> {
        self.get(names::COOKIE)
    }

    /// CSRF token header
    pub fn csrf_token(&self) -> Option<&str> {
        self.get(names::X_CSRF_TOKEN)
    }

    /// Number of headers
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if there are no headers
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::Cookie;

    fn session() -> SessionCredentials {
        SessionCredentials::new(
            "csrf-1",
            "WVW123",
            vec![
                Cookie::new("JSESSIONID", "abc"),
                Cookie::new("GUEST_LANGUAGE_ID", "en_GB"),
                Cookie::new("COOKIE_SUPPORT", "true"),
            ],
        )
    }

    #[test]
    fn test_headers_contents() {
        let headers = RequestHeaders::build(&session(), &ClientConfig::default()).unwrap();

        assert_eq!(headers.len(), 12);
        assert_eq!(
            headers.cookie(),
            Some("JSESSIONID=abc; GUEST_LANGUAGE_ID=en_GB; COOKIE_SUPPORT=true;")
        );
        assert_eq!(headers.csrf_token(), Some("csrf-1"));
        assert_eq!(
            headers.get("referer"),
            Some("https://www.portal.volkswagen-we.com/portal/delegate/dashboard/WVW123")
        );
        assert_eq!(
            headers.get("origin"),
            Some("https://www.portal.volkswagen-we.com")
        );
    }

    #[test]
    fn test_cookie_string_lists_every_cookie() {
        let cookies: Vec<Cookie> = (0..25)
            .map(|i| Cookie::new(format!("c{}", i), format!("v{}", i)))
            .collect();
        let credentials = SessionCredentials::new("t", "car", cookies.clone());
        let headers = RequestHeaders::build(&credentials, &ClientConfig::default()).unwrap();
        let cookie = headers.cookie().unwrap();

        for c in &cookies {
            assert!(cookie.contains(&c.to_header_fragment()));
        }
        assert_eq!(cookie.split("; ").count(), cookies.len());
    }

    #[test]
    fn test_headers_idempotent() {
        let config = ClientConfig::default();
        let first = RequestHeaders::build(&session(), &config).unwrap();
        let second = RequestHeaders::build(&session(), &config).unwrap();

        assert_eq!(first, second);
        for (name, value) in first.as_map() {
            assert_eq!(second.as_map().get(name).unwrap().as_bytes(), value.as_bytes());
        }
    }

    #[test]
    fn test_unencodable_token() {
        let credentials =
            SessionCredentials::new("bad\ntoken", "car", vec![Cookie::new("a", "b")]);
        let err = RequestHeaders::build(&credentials, &ClientConfig::default()).unwrap_err();

        assert!(matches!(
            err,
            Error::InvalidHeader {
                name: "x-csrf-token",
                ..
            }
        ));
    }
}
