// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Browser automation capability
//!
//! The login flow only needs these operations. Any engine that can drive a
//! real page (CDP, WebDriver, an embedded browser) can back it.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::BrowserError;
use crate::http::Cookie;

/// Result type for browser operations
pub type BrowserResult<T> = std::result::Result<T, BrowserError>;

/// When a navigation counts as settled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WaitUntil {
    /// `load` event fired
    Load,
    /// `DOMContentLoaded` event fired
    DomContentLoaded,
    /// No network connections for 500ms
    #[default]
    NetworkIdle0,
    /// At most two network connections for 500ms
    NetworkIdle2,
}

/// Options for waiting on a navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationOptions {
    pub wait_until: WaitUntil,
}

impl NavigationOptions {
    /// Wait until the network is idle
    pub fn network_idle() -> Self {
        Self {
            wait_until: WaitUntil::NetworkIdle0,
        }
    }
}

/// A finished navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    /// URL the page ended up on
    pub url: String,
}

/// Operations the login flow drives a page through
///
/// Each call blocks until the backend reports completion. Timeouts are the
/// backend's own; the login flow does not add any.
#[async_trait]
pub trait BrowserAutomation: Send + Sync {
    /// Load a URL
    async fn navigate(&self, url: &str) -> BrowserResult<()>;

    /// Click the first element matching `selector`
    async fn click(&self, selector: &str) -> BrowserResult<()>;

    /// Wait until an element matching `selector` exists
    async fn wait_for_selector(&self, selector: &str) -> BrowserResult<()>;

    /// Type text into the element matching `selector`
    async fn type_text(&self, selector: &str, text: &str) -> BrowserResult<()>;

    /// Wait for the next navigation to settle
    async fn wait_for_navigation(&self, options: NavigationOptions) -> BrowserResult<Navigation>;

    /// Evaluate a script expression in the page
    async fn evaluate(&self, script: &str) -> BrowserResult<Value>;

    /// Current cookie jar of the page
    async fn cookies(&self) -> BrowserResult<Vec<Cookie>>;
}
