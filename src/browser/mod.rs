// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Browser-driven session acquisition
//!
//! [`BrowserAutomation`] is the seam to whatever engine drives the login
//! page. [`LoginHandler`] walks it through the login and returns a ready
//! [`CarnetClient`](crate::api::CarnetClient).

mod automation;
mod login;

#[cfg(test)]
pub(crate) mod mock;

pub use automation::{BrowserAutomation, BrowserResult, Navigation, NavigationOptions, WaitUntil};
pub use login::{
    create_client, extract_car_id, LoginCredentials, LoginHandler, LoginSelectors, LoginStage,
};
