// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP layer for the Car-Net client
//!
//! Cookies, the fixed per-session header set, and the POST transport the
//! authenticated client talks through.

mod cookie;
mod headers;
mod transport;

pub use cookie::{cookies_as_header, Cookie};
pub use headers::RequestHeaders;
pub use transport::{HttpTransport, PostRequest, ReqwestTransport, TransportResponse};

/// Default user agent string
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_14_6) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/78.0.3904.70 Safari/537.36";

/// Default Accept-Language value
pub const DEFAULT_ACCEPT_LANGUAGE: &str = "sv-SE,sv;q=0.9,en-US;q=0.8,en;q=0.7";

/// Header names used by the dashboard
pub mod headers_names {
    pub const ACCEPT: &str = "accept";
    pub const ACCEPT_LANGUAGE: &str = "accept-language";
    pub const CACHE_CONTROL: &str = "cache-control";
    pub const CONTENT_TYPE: &str = "content-type";
    pub const COOKIE: &str = "cookie";
    pub const ORIGIN: &str = "origin";
    pub const PRAGMA: &str = "pragma";
    pub const REFERER: &str = "referer";
    pub const SEC_FETCH_MODE: &str = "sec-fetch-mode";
    pub const SEC_FETCH_SITE: &str = "sec-fetch-site";
    pub const USER_AGENT: &str = "user-agent";
    pub const X_CSRF_TOKEN: &str = "x-csrf-token";
}
