// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Session acquisition
//!
//! Drives the dashboard's interactive login through a [`BrowserAutomation`]
//! backend as a strictly linear state machine. The first failing step ends
//! the run with [`Error::AcquisitionFailed`] naming the stage it was trying
//! to reach; no partial session ever leaves this module.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use super::automation::{BrowserAutomation, NavigationOptions};
use crate::api::{CarnetClient, ClientConfig};
use crate::error::{Error, Result};
use crate::http::HttpTransport;
use crate::logger::{self, SharedLogger};
use crate::session::SessionCredentials;

const LOGIN_TIMER: &str = "carnet login";

/// Stages of a login, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoginStage {
    Start,
    LoginPageLoaded,
    WelcomeAccepted,
    EmailEntered,
    PasswordPromptReady,
    PasswordEntered,
    NavigationComplete,
    TokenExtracted,
    Done,
}

impl LoginStage {
    /// Every stage, in order
    pub const ALL: [LoginStage; 9] = [
        LoginStage::Start,
        LoginStage::LoginPageLoaded,
        LoginStage::WelcomeAccepted,
        LoginStage::EmailEntered,
        LoginStage::PasswordPromptReady,
        LoginStage::PasswordEntered,
        LoginStage::NavigationComplete,
        LoginStage::TokenExtracted,
        LoginStage::Done,
    ];

    /// The stage after this one
    pub fn next(self) -> Option<LoginStage> {
        let index = Self::ALL.iter().position(|s| *s == self)?;
        Self::ALL.get(index + 1).copied()
    }
}

impl fmt::Display for LoginStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Dashboard account credentials
#[derive(Clone)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

impl LoginCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Reject empty fields before touching the browser
    pub fn check(&self) -> Result<()> {
        if self.email.is_empty() {
            return Err(Error::MissingCredentialField { field: "email" });
        }
        if self.password.is_empty() {
            return Err(Error::MissingCredentialField { field: "password" });
        }
        Ok(())
    }
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl fmt::Display for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{\"email\":\"{}\",\"password\":\"[REDACTED]\"}}",
            self.email
        )
    }
}

/// CSS selectors of the login pages
#[derive(Debug, Clone)]
pub struct LoginSelectors {
    pub welcome_button: String,
    pub email_input: String,
    pub next_button: String,
    pub password_input: String,
    pub csrf_meta: String,
}

impl Default for LoginSelectors {
    fn default() -> Self {
        Self {
            welcome_button: "#loginButtonWelcomeScreen".to_string(),
            email_input: "#input_email".to_string(),
            next_button: "#next-btn".to_string(),
            password_input: "#input_password_for_login".to_string(),
            csrf_meta: "meta[name=_csrf]".to_string(),
        }
    }
}

impl LoginSelectors {
    /// Script returning the CSRF meta tag's content
    pub fn csrf_script(&self) -> String {
        format!(
            "document.querySelector('{}').getAttribute('content')",
            self.csrf_meta
        )
    }
}

/// Values collected while the machine runs
#[derive(Debug, Default)]
struct Progress {
    landing_url: Option<String>,
    session: Option<SessionCredentials>,
}

/// Logs into the dashboard and hands back an authenticated client
pub struct LoginHandler {
    browser: Arc<dyn BrowserAutomation>,
    config: ClientConfig,
    selectors: LoginSelectors,
    logger: SharedLogger,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl LoginHandler {
    /// Create a handler with dashboard defaults and no logging
    pub fn new(browser: Arc<dyn BrowserAutomation>) -> Self {
        Self {
            browser,
            config: ClientConfig::default(),
            selectors: LoginSelectors::default(),
            logger: logger::noop(),
            transport: None,
        }
    }

    /// Set the client configuration
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the login page selectors
    pub fn selectors(mut self, selectors: LoginSelectors) -> Self {
        self.selectors = selectors;
        self
    }

    /// Set the logger
    pub fn logger(mut self, logger: SharedLogger) -> Self {
        self.logger = logger;
        self
    }

    /// Set the transport the resulting client talks through
    ///
    /// Without one the client gets its own `reqwest` transport.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Log in and build a client for the resulting session
    pub async fn create_client(&self, credentials: &LoginCredentials) -> Result<CarnetClient> {
        credentials.check()?;
        self.config.validate()?;

        self.logger.time(LOGIN_TIMER);
        let result = self.run(credentials).await;
        self.logger.time_end(LOGIN_TIMER);

        result
    }

    async fn run(&self, credentials: &LoginCredentials) -> Result<CarnetClient> {
        let mut progress = Progress::default();
        let mut stage = LoginStage::Start;

        while let Some(target) = stage.next() {
            if target == LoginStage::Done {
                break;
            }

            self.advance(target, credentials, &mut progress)
                .await
                .map_err(|e| Error::acquisition(target, e))?;

            self.logger.debug(&format!("-- login() - reached {}", target));
            stage = target;
        }

        let session = progress.session.take().unwrap_or_default();
        let config = self.config.clone();
        let logger = self.logger.clone();
        let client = match &self.transport {
            Some(transport) => {
                CarnetClient::with_transport(session, config, transport.clone(), logger)
            }
            None => CarnetClient::new(session, config, logger),
        }
        .map_err(|e| Error::acquisition(LoginStage::Done, e))?;

        self.logger.debug("<< login() - session established");
        Ok(client)
    }

    /// Perform the capability calls that reach `target`
    async fn advance(
        &self,
        target: LoginStage,
        credentials: &LoginCredentials,
        progress: &mut Progress,
    ) -> Result<()> {
        let browser = self.browser.as_ref();
        let selectors = &self.selectors;

        match target {
            LoginStage::LoginPageLoaded => {
                self.logger.debug(&format!(
                    ">> login() - navigate to login page {}",
                    self.config.login_page_url
                ));
                browser.navigate(&self.config.login_page_url).await?;
            }
            LoginStage::WelcomeAccepted => {
                browser.click(&selectors.welcome_button).await?;
                browser.wait_for_selector(&selectors.email_input).await?;
            }
            LoginStage::EmailEntered => {
                browser
                    .type_text(&selectors.email_input, &credentials.email)
                    .await?;
                browser.click(&selectors.next_button).await?;
            }
            LoginStage::PasswordPromptReady => {
                browser.wait_for_selector(&selectors.password_input).await?;
            }
            LoginStage::PasswordEntered => {
                browser
                    .type_text(&selectors.password_input, &credentials.password)
                    .await?;
                browser.click(&selectors.next_button).await?;
            }
            LoginStage::NavigationComplete => {
                self.logger.debug("-- login() - waiting for response...");
                let navigation = browser
                    .wait_for_navigation(NavigationOptions::network_idle())
                    .await?;
                self.logger
                    .debug(&format!("-- login() - landed on {}", navigation.url));
                progress.landing_url = Some(navigation.url);
            }
            LoginStage::TokenExtracted => {
                let csrf_token = token_text(browser.evaluate(&selectors.csrf_script()).await?);
                let cookies = browser.cookies().await?;
                let car_identifier = extract_car_id(
                    progress.landing_url.as_deref().unwrap_or_default(),
                    &self.config.car_id_marker,
                );

                self.logger.debug(&format!(
                    "-- login() - csrf token present: {}, car {:?}, {} cookies",
                    !csrf_token.is_empty(),
                    car_identifier,
                    cookies.len()
                ));
                progress.session = Some(SessionCredentials::new(
                    csrf_token,
                    car_identifier,
                    cookies,
                ));
            }
            LoginStage::Start | LoginStage::Done => {}
        }

        Ok(())
    }
}

/// Log in with default configuration
pub async fn create_client(
    browser: Arc<dyn BrowserAutomation>,
    email: &str,
    password: &str,
) -> Result<CarnetClient> {
    LoginHandler::new(browser)
        .create_client(&LoginCredentials::new(email, password))
        .await
}

/// Text of an evaluated meta attribute; `null` means absent
fn token_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Car identifier following `marker` in the post-login URL
///
/// Query and fragment are dropped, as are trailing slashes. Empty when the
/// marker is absent.
pub fn extract_car_id(url: &str, marker: &str) -> String {
    let Some((_, rest)) = url.split_once(marker) else {
        return String::new();
    };

    let end = rest.find(['?', '#']).unwrap_or(rest.len());
    rest[..end].trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::mock::{MockBrowser, Op, DASHBOARD_LANDING};
    use crate::http::{Cookie, PostRequest, TransportResponse};
    use crate::logger::testing::RecordingLogger;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use reqwest::StatusCode;
    use crate::session::{MISSING_CAR_IDENTIFIER, MISSING_COOKIE_VALUE, MISSING_CSRF_TOKEN};
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn handler(browser: &Arc<MockBrowser>) -> LoginHandler {
        LoginHandler::new(browser.clone())
    }

    /// Transport answering every POST with a success body
    #[derive(Default)]
    struct CountingTransport {
        urls: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl HttpTransport for CountingTransport {
        async fn post(&self, request: PostRequest) -> Result<TransportResponse> {
            self.urls.lock().push(request.url.to_string());
            Ok(TransportResponse::new(StatusCode::OK, r#"{"errorCode":"0"}"#))
        }
    }

    fn credentials() -> LoginCredentials {
        LoginCredentials::new("driver@example.com", "secret")
    }

    #[test]
    fn test_missing_email_touches_nothing() {
        let browser = Arc::new(MockBrowser::succeeding());

        let err = tokio_test::block_on(
            handler(&browser).create_client(&LoginCredentials::new("", "secret")),
        )
        .unwrap_err();

        assert!(matches!(err, Error::MissingCredentialField { field: "email" }));
        assert!(browser.calls().is_empty());
    }

    #[tokio::test]
    async fn test_missing_password_touches_nothing() {
        let browser = Arc::new(MockBrowser::succeeding());

        let err = handler(&browser)
            .create_client(&LoginCredentials::new("driver@example.com", ""))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::MissingCredentialField { field: "password" }));
        assert!(browser.calls().is_empty());
    }

    #[tokio::test]
    async fn test_successful_login() {
        let browser = Arc::new(MockBrowser::succeeding());
        let logger = Arc::new(RecordingLogger::default());

        let client = handler(&browser)
            .logger(logger.clone())
            .create_client(&credentials())
            .await
            .unwrap();

        assert_eq!(client.car_id(), "ABC123");
        assert_eq!(client.credentials().csrf_token, "csrf-from-meta");
        assert_eq!(client.credentials().cookies.len(), 2);
        assert_eq!(client.headers().csrf_token(), Some("csrf-from-meta"));

        let ops: Vec<Op> = browser.calls().into_iter().map(|(op, _)| op).collect();
        assert_eq!(
            ops,
            vec![
                Op::Navigate,
                Op::Click,
                Op::WaitForSelector,
                Op::Type,
                Op::Click,
                Op::WaitForSelector,
                Op::Type,
                Op::Click,
                Op::WaitForNavigation,
                Op::Evaluate,
                Op::Cookies,
            ]
        );
        assert_eq!(browser.typed(), vec!["driver@example.com", "secret"]);

        assert_eq!(logger.lines("time"), vec![LOGIN_TIMER]);
        assert_eq!(logger.lines("time_end"), vec![LOGIN_TIMER]);
        assert!(logger.all().iter().all(|line| !line.contains("secret")));
    }

    #[tokio::test]
    async fn test_password_prompt_failure() {
        let browser = Arc::new(
            MockBrowser::succeeding()
                .failing_on(Op::WaitForSelector, Some("#input_password_for_login")),
        );

        let err = handler(&browser)
            .create_client(&credentials())
            .await
            .unwrap_err();

        assert_eq!(err.stage(), Some(LoginStage::PasswordPromptReady));
        assert!(matches!(
            &err,
            Error::AcquisitionFailed { source, .. }
                if matches!(&**source, Error::Browser(cause) if cause.is_timeout())
        ));

        // Nothing after the failing wait was attempted
        let (last_op, last_arg) = browser.calls().last().cloned().unwrap();
        assert_eq!(last_op, Op::WaitForSelector);
        assert_eq!(last_arg, "#input_password_for_login");
        assert_eq!(browser.typed(), vec!["driver@example.com"]);
    }

    #[tokio::test]
    async fn test_failure_stage_per_step() {
        let cases = [
            (Op::Navigate, None, LoginStage::LoginPageLoaded),
            (Op::Click, Some("#loginButtonWelcomeScreen"), LoginStage::WelcomeAccepted),
            (Op::WaitForSelector, Some("#input_email"), LoginStage::WelcomeAccepted),
            (Op::Type, Some("#input_email"), LoginStage::EmailEntered),
            (Op::Type, Some("#input_password_for_login"), LoginStage::PasswordEntered),
            (Op::WaitForNavigation, None, LoginStage::NavigationComplete),
            (Op::Evaluate, None, LoginStage::TokenExtracted),
            (Op::Cookies, None, LoginStage::TokenExtracted),
        ];

        for (op, arg, expected) in cases {
            let browser = Arc::new(MockBrowser::succeeding().failing_on(op, arg));
            let err = handler(&browser)
                .create_client(&credentials())
                .await
                .unwrap_err();

            assert_eq!(err.stage(), Some(expected), "{:?} {:?}", op, arg);
        }
    }

    #[tokio::test]
    async fn test_first_next_click_fails_at_email_entered() {
        // Both "next" clicks share a selector; the first one fails
        let browser = Arc::new(MockBrowser::succeeding().failing_on(Op::Click, Some("#next-btn")));

        let err = handler(&browser)
            .create_client(&credentials())
            .await
            .unwrap_err();

        assert_eq!(err.stage(), Some(LoginStage::EmailEntered));
    }

    #[tokio::test]
    async fn test_missing_csrf_fails_at_done() {
        let browser = Arc::new(MockBrowser::succeeding().csrf(json!(null)));

        let err = handler(&browser)
            .create_client(&credentials())
            .await
            .unwrap_err();

        assert_eq!(err.stage(), Some(LoginStage::Done));
        assert_eq!(err.invalid_reason(), Some(MISSING_CSRF_TOKEN));
    }

    #[tokio::test]
    async fn test_landing_without_marker_fails_at_done() {
        let browser = Arc::new(
            MockBrowser::succeeding().landing_url("https://www.portal.volkswagen-we.com/portal/error"),
        );

        let err = handler(&browser)
            .create_client(&credentials())
            .await
            .unwrap_err();

        assert_eq!(err.stage(), Some(LoginStage::Done));
        assert_eq!(err.invalid_reason(), Some(MISSING_CAR_IDENTIFIER));
    }

    #[tokio::test]
    async fn test_cookie_without_value_fails_at_done() {
        let browser = Arc::new(
            MockBrowser::succeeding().with_cookies(vec![Cookie::without_value("JSESSIONID")]),
        );

        let err = create_client(browser, "driver@example.com", "secret")
            .await
            .unwrap_err();

        assert_eq!(err.stage(), Some(LoginStage::Done));
        assert_eq!(err.invalid_reason(), Some(MISSING_COOKIE_VALUE));
    }

    #[tokio::test]
    async fn test_bad_config_touches_nothing() {
        let browser = Arc::new(MockBrowser::succeeding());
        let logger = Arc::new(RecordingLogger::default());

        let err = handler(&browser)
            .config(ClientConfig::new().login_page_url("ftp://example.com/login"))
            .logger(logger.clone())
            .create_client(&credentials())
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Config(_)));
        assert_eq!(err.stage(), None);
        assert!(browser.calls().is_empty());
        assert!(logger.lines("time").is_empty());
    }

    #[tokio::test]
    async fn test_login_uses_custom_transport() {
        let browser = Arc::new(MockBrowser::succeeding());
        let transport = Arc::new(CountingTransport::default());

        let client = handler(&browser)
            .transport(transport.clone())
            .create_client(&credentials())
            .await
            .unwrap();
        let result = client.get_vehicle_status_report().await.unwrap();

        assert!(result.is_success());
        assert_eq!(
            transport.urls.lock().clone(),
            vec!["https://www.portal.volkswagen-we.com/portal/delegate/dashboard/ABC123/-/vsr/get-vsr"]
        );
    }

    #[tokio::test]
    async fn test_login_then_action() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/portal/delegate/dashboard/ABC123/-/cf/get-location"))
            .and(header("x-csrf-token", "csrf-from-meta"))
            .and(header("cookie", "JSESSIONID=session-1; GUEST_LANGUAGE_ID=en_GB;"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "errorCode": "0", "position": { "lat": 59.3, "lng": 18.0 } })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let config = ClientConfig::new().with_base_url(server.uri());
        let browser = Arc::new(
            MockBrowser::succeeding()
                .landing_url(format!("{}/portal/delegate/dashboard/ABC123", server.uri())),
        );

        let client = handler(&browser)
            .config(config.clone())
            .create_client(&credentials())
            .await
            .unwrap();

        assert_eq!(browser.calls()[0].1, config.login_page_url);

        let location = client.get_location().await.unwrap();
        assert!(location.is_success());
        assert!(location.get("position").is_some());
    }

    #[test]
    fn test_extract_car_id() {
        assert_eq!(extract_car_id(DASHBOARD_LANDING, "dashboard/"), "ABC123");
        assert_eq!(extract_car_id("https://h/x/dashboard/ABC123/", "dashboard/"), "ABC123");
        assert_eq!(extract_car_id("https://h/dashboard/ABC123?tab=1#top", "dashboard/"), "ABC123");
        assert_eq!(extract_car_id("https://h/portal/home", "dashboard/"), "");
    }

    #[test]
    fn test_stage_order() {
        assert_eq!(LoginStage::Start.next(), Some(LoginStage::LoginPageLoaded));
        assert_eq!(LoginStage::TokenExtracted.next(), Some(LoginStage::Done));
        assert_eq!(LoginStage::Done.next(), None);
        assert_eq!(LoginStage::PasswordPromptReady.to_string(), "PasswordPromptReady");
    }

    #[test]
    fn test_credentials_redacted() {
        let credentials = credentials();
        assert!(!format!("{:?}", credentials).contains("secret"));
        assert!(!credentials.to_string().contains("secret"));
    }

    #[test]
    fn test_csrf_script() {
        assert_eq!(
            LoginSelectors::default().csrf_script(),
            "document.querySelector('meta[name=_csrf]').getAttribute('content')"
        );
    }
}
