// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Authenticated dashboard API
//!
//! [`CarnetClient`] owns one validated session and issues the catalogue of
//! [`VehicleAction`]s against the dashboard.

mod actions;
mod client;
mod config;
mod response;

pub use actions::VehicleAction;
pub use client::CarnetClient;
pub use config::{
    ClientConfig, DASHBOARD_PATH, DEFAULT_BASE_URL, DEFAULT_CAR_ID_MARKER, LOGIN_PAGE_PATH,
};
pub use response::{ActionResult, ApplicationError, ERROR_CODE_FIELD, SUCCESS_CODE};
