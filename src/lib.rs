// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # Carnet - Car-Net dashboard client
//!
//! Logs into the Volkswagen Car-Net web dashboard through a browser
//! automation backend and issues vehicle actions against it with the
//! harvested session.
//!
//! ## Features
//!
//! - Login state machine: every failure names the stage it was reaching
//! - Session validation: cookies, car identifier and CSRF token checked up front
//! - Fixed header set computed once per client
//! - Vehicle action catalogue: location, status reports, trip statistics,
//!   climatisation and window heating
//! - Pluggable browser, HTTP transport and logger
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use carnet::{BrowserAutomation, LoginCredentials, LoginHandler, TracingLogger};
//!
//! async fn run(browser: Arc<dyn BrowserAutomation>) -> Result<(), Box<dyn std::error::Error>> {
//!     let client = LoginHandler::new(browser)
//!         .logger(TracingLogger::shared())
//!         .create_client(&LoginCredentials::new("driver@example.com", "hunter2"))
//!         .await?;
//!
//!     let location = client.get_location().await?;
//!     if let Some(failure) = location.application_error() {
//!         println!("dashboard refused: {}", failure);
//!     }
//!
//!     client.trigger_climatisation(true).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod browser;
pub mod error;
pub mod http;
pub mod logger;
pub mod session;

// Re-exports for convenience

// Client and actions
pub use api::{ActionResult, ApplicationError, CarnetClient, ClientConfig, VehicleAction};

// Session acquisition
pub use browser::{
    create_client, BrowserAutomation, LoginCredentials, LoginHandler, LoginSelectors, LoginStage,
    Navigation, NavigationOptions, WaitUntil,
};

// Errors
pub use error::{BrowserError, Error, Result};

// HTTP
pub use http::{Cookie, HttpTransport, RequestHeaders, ReqwestTransport};

// Logging
pub use logger::{Logger, NoopLogger, SharedLogger, TracingLogger};

// Session
pub use session::SessionCredentials;

/// Carnet version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
