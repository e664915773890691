// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Session credentials and their validation

mod credentials;
mod validation;

pub use credentials::SessionCredentials;
pub use validation::{
    validate, validate_cookies, MISSING_CAR_IDENTIFIER, MISSING_COOKIES, MISSING_COOKIE_VALUE,
    MISSING_CSRF_TOKEN,
};
