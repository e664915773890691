// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Recording browser for login tests

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::{json, Value};

use super::automation::{BrowserAutomation, BrowserResult, Navigation, NavigationOptions};
use crate::error::BrowserError;
use crate::http::Cookie;

pub(crate) const DASHBOARD_LANDING: &str =
    "https://www.portal.volkswagen-we.com/portal/delegate/dashboard/ABC123";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Op {
    Navigate,
    Click,
    WaitForSelector,
    Type,
    WaitForNavigation,
    Evaluate,
    Cookies,
}

struct Failure {
    op: Op,
    arg: Option<String>,
    error: BrowserError,
}

pub(crate) struct MockBrowser {
    calls: Mutex<Vec<(Op, String)>>,
    typed: Mutex<Vec<String>>,
    failure: Option<Failure>,
    landing_url: String,
    csrf: Value,
    cookies: Vec<Cookie>,
}

impl MockBrowser {
    /// Browser on which every step succeeds
    pub(crate) fn succeeding() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            typed: Mutex::new(Vec::new()),
            failure: None,
            landing_url: DASHBOARD_LANDING.to_string(),
            csrf: json!("csrf-from-meta"),
            cookies: vec![
                Cookie::new("JSESSIONID", "session-1"),
                Cookie::new("GUEST_LANGUAGE_ID", "en_GB"),
            ],
        }
    }

    /// Fail `op`, optionally only for one selector or URL
    pub(crate) fn failing_on(mut self, op: Op, arg: Option<&str>) -> Self {
        self.failure = Some(Failure {
            op,
            arg: arg.map(str::to_string),
            error: BrowserError::timeout(format!("{:?}", op)),
        });
        self
    }

    pub(crate) fn landing_url(mut self, url: impl Into<String>) -> Self {
        self.landing_url = url.into();
        self
    }

    pub(crate) fn csrf(mut self, csrf: Value) -> Self {
        self.csrf = csrf;
        self
    }

    pub(crate) fn with_cookies(mut self, cookies: Vec<Cookie>) -> Self {
        self.cookies = cookies;
        self
    }

    pub(crate) fn calls(&self) -> Vec<(Op, String)> {
        self.calls.lock().clone()
    }

    pub(crate) fn typed(&self) -> Vec<String> {
        self.typed.lock().clone()
    }

    fn record(&self, op: Op, arg: &str) -> BrowserResult<()> {
        self.calls.lock().push((op, arg.to_string()));

        match &self.failure {
            Some(f) if f.op == op && f.arg.as_deref().map_or(true, |a| a == arg) => {
                Err(f.error.clone())
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl BrowserAutomation for MockBrowser {
    async fn navigate(&self, url: &str) -> BrowserResult<()> {
        self.record(Op::Navigate, url)
    }

    async fn click(&self, selector: &str) -> BrowserResult<()> {
        self.record(Op::Click, selector)
    }

    async fn wait_for_selector(&self, selector: &str) -> BrowserResult<()> {
        self.record(Op::WaitForSelector, selector)
    }

    async fn type_text(&self, selector: &str, text: &str) -> BrowserResult<()> {
        self.record(Op::Type, selector)?;
        self.typed.lock().push(text.to_string());
        Ok(())
    }

    async fn wait_for_navigation(&self, _options: NavigationOptions) -> BrowserResult<Navigation> {
        self.record(Op::WaitForNavigation, "")?;
        Ok(Navigation {
            url: self.landing_url.clone(),
        })
    }

    async fn evaluate(&self, script: &str) -> BrowserResult<Value> {
        self.record(Op::Evaluate, script)?;
        Ok(self.csrf.clone())
    }

    async fn cookies(&self) -> BrowserResult<Vec<Cookie>> {
        self.record(Op::Cookies, "")?;
        Ok(self.cookies.clone())
    }
}
