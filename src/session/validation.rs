// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Credential validation
//!
//! Checks run in a fixed order so the reported reason is deterministic:
//! cookies first, then the car identifier, then the CSRF token.

use crate::error::{Error, Result};
use crate::http::Cookie;
use crate::logger::Logger;
use crate::session::SessionCredentials;

pub const MISSING_COOKIES: &str = "missing cookies";
pub const MISSING_COOKIE_VALUE: &str = "missing cookie value";
pub const MISSING_CAR_IDENTIFIER: &str = "missing carIdentifier";
pub const MISSING_CSRF_TOKEN: &str = "missing csrfToken";

/// Validate the cookie jar
///
/// A cookie without a name only warns. The first cookie without a value
/// fails validation and the rest are not inspected.
pub fn validate_cookies(cookies: &[Cookie], logger: &dyn Logger) -> Result<()> {
    if cookies.is_empty() {
        return Err(Error::invalid_credentials(MISSING_COOKIES));
    }

    for (index, cookie) in cookies.iter().enumerate() {
        if cookie.name.is_none() {
            logger.warn(&format!("missing \"name\" in cookie #{}", index));
        }

        if cookie.value.is_none() {
            return Err(Error::invalid_credentials(MISSING_COOKIE_VALUE));
        }
    }

    Ok(())
}

/// Validate a full credential bundle
pub fn validate(credentials: &SessionCredentials, logger: &dyn Logger) -> Result<()> {
    validate_cookies(&credentials.cookies, logger)?;

    if credentials.car_identifier.is_empty() {
        return Err(Error::invalid_credentials(MISSING_CAR_IDENTIFIER));
    }

    if credentials.csrf_token.is_empty() {
        return Err(Error::invalid_credentials(MISSING_CSRF_TOKEN));
    }

    Ok(())
}
