// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Dashboard endpoints and client configuration

use url::Url;

use crate::error::{Error, Result};
use crate::http::{DEFAULT_ACCEPT_LANGUAGE, DEFAULT_USER_AGENT};

/// Dashboard host
pub const DEFAULT_BASE_URL: &str = "https://www.portal.volkswagen-we.com";

/// Dashboard path, relative to the base URL
pub const DASHBOARD_PATH: &str = "/portal/delegate/dashboard";

/// Login page path, relative to the base URL
pub const LOGIN_PAGE_PATH: &str = "/portal/en_GB/web/guest/home";

/// Path marker preceding the car identifier in the post-login URL
pub const DEFAULT_CAR_ID_MARKER: &str = "dashboard/";

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Dashboard host, also sent as `origin`
    pub base_url: String,
    /// Dashboard root that every vehicle action lives under
    pub dashboard_url: String,
    /// Login page the acquisition starts from
    pub login_page_url: String,
    /// Marker the car identifier follows in the post-login URL
    pub car_id_marker: String,
    /// Verify the dashboard's TLS certificate chain.
    ///
    /// Off by default: the dashboard host's chain does not validate in the
    /// automation context. Turning it on is always safe where it validates.
    pub tls_verify: bool,
    /// User agent string
    pub user_agent: String,
    /// Accept-Language header value
    pub accept_language: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            dashboard_url: format!("{}{}", DEFAULT_BASE_URL, DASHBOARD_PATH),
            login_page_url: format!("{}{}", DEFAULT_BASE_URL, LOGIN_PAGE_PATH),
            car_id_marker: DEFAULT_CAR_ID_MARKER.to_string(),
            tls_verify: false,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept_language: DEFAULT_ACCEPT_LANGUAGE.to_string(),
        }
    }
}

impl ClientConfig {
    /// Create a new config with dashboard defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Point at another host, re-deriving the dashboard and login URLs
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base = base_url.into().trim_end_matches('/').to_string();
        self.dashboard_url = format!("{}{}", base, DASHBOARD_PATH);
        self.login_page_url = format!("{}{}", base, LOGIN_PAGE_PATH);
        self.base_url = base;
        self
    }

    /// Override the dashboard root
    pub fn dashboard_url(mut self, url: impl Into<String>) -> Self {
        self.dashboard_url = url.into();
        self
    }

    /// Override the login page
    pub fn login_page_url(mut self, url: impl Into<String>) -> Self {
        self.login_page_url = url.into();
        self
    }

    /// Override the car identifier marker
    pub fn car_id_marker(mut self, marker: impl Into<String>) -> Self {
        self.car_id_marker = marker.into();
        self
    }

    /// Enable or disable TLS certificate verification
    pub fn tls_verify(mut self, verify: bool) -> Self {
        self.tls_verify = verify;
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set Accept-Language
    pub fn accept_language(mut self, accept_language: impl Into<String>) -> Self {
        self.accept_language = accept_language.into();
        self
    }

    /// Check that every URL parses and is http(s)
    pub fn validate(&self) -> Result<()> {
        for raw in [&self.base_url, &self.dashboard_url, &self.login_page_url] {
            let url = Url::parse(raw)?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(Error::Config(format!("unsupported scheme in {}", raw)));
            }
        }

        if self.car_id_marker.is_empty() {
            return Err(Error::Config("car id marker is empty".to_string()));
        }

        Ok(())
    }

    /// URL for a vehicle path, `<dashboard>/<car id><suffix>`
    pub fn vehicle_url(&self, car_id: &str, suffix: &str) -> String {
        format!(
            "{}/{}{}",
            self.dashboard_url.trim_end_matches('/'),
            car_id,
            suffix
        )
    }

    /// Resolve a full URL or a suffix joined onto the base URL
    pub fn resolve(&self, url_or_suffix: &str) -> String {
        if url_or_suffix.starts_with("http://") || url_or_suffix.starts_with("https://") {
            return url_or_suffix.to_string();
        }

        let base = self.base_url.trim_end_matches('/');
        if url_or_suffix.starts_with('/') {
            format!("{}{}", base, url_or_suffix)
        } else {
            format!("{}/{}", base, url_or_suffix)
        }
    }
}
