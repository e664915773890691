// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Authenticated dashboard client

use std::fmt;
use std::sync::Arc;

use bytes::Bytes;
use serde_json::Value;
use url::Url;

use super::actions::VehicleAction;
use super::config::ClientConfig;
use super::response::ActionResult;
use crate::error::Result;
use crate::http::{HttpTransport, PostRequest, ReqwestTransport, RequestHeaders};
use crate::logger::SharedLogger;
use crate::session::{self, SessionCredentials};

/// Client bound to one validated dashboard session
///
/// Headers are computed once at construction and shared read-only by every
/// call, so independent actions may run concurrently on the same client.
pub struct CarnetClient {
    credentials: SessionCredentials,
    config: ClientConfig,
    headers: RequestHeaders,
    transport: Arc<dyn HttpTransport>,
    logger: SharedLogger,
}

impl CarnetClient {
    /// Create a client over the default `reqwest` transport
    pub fn new(
        credentials: SessionCredentials,
        config: ClientConfig,
        logger: SharedLogger,
    ) -> Result<Self> {
        session::validate(&credentials, logger.as_ref())?;
        let transport = Arc::new(ReqwestTransport::new()?);
        Self::assemble(credentials, config, transport, logger)
    }

    /// Create a client over a custom transport
    pub fn with_transport(
        credentials: SessionCredentials,
        config: ClientConfig,
        transport: Arc<dyn HttpTransport>,
        logger: SharedLogger,
    ) -> Result<Self> {
        session::validate(&credentials, logger.as_ref())?;
        Self::assemble(credentials, config, transport, logger)
    }

    fn assemble(
        credentials: SessionCredentials,
        config: ClientConfig,
        transport: Arc<dyn HttpTransport>,
        logger: SharedLogger,
    ) -> Result<Self> {
        config.validate()?;
        let headers = RequestHeaders::build(&credentials, &config)?;
        logger.debug(&format!(
            "CarnetClient() -- car {} with {} headers, {} cookies",
            credentials.car_identifier,
            headers.len(),
            credentials.cookies.len()
        ));

        Ok(Self {
            credentials,
            config,
            headers,
            transport,
            logger,
        })
    }

    /// Session this client was built from
    pub fn credentials(&self) -> &SessionCredentials {
        &self.credentials
    }

    /// Car identifier of the session
    pub fn car_id(&self) -> &str {
        &self.credentials.car_identifier
    }

    /// Headers sent with every action
    pub fn headers(&self) -> &RequestHeaders {
        &self.headers
    }

    /// Client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// POST to the dashboard and decode the JSON response
    ///
    /// `url` is either a full URL or a path joined onto the base URL. An
    /// `errorCode` other than `"0"` is logged once as a warning and the body
    /// is still returned; callers inspect [`ActionResult::error_code`].
    pub async fn perform_action(&self, url: &str, body: Option<&Value>) -> Result<ActionResult> {
        let url = Url::parse(&self.config.resolve(url))?;
        self.logger
            .debug(&format!(">> perform_action() - url {}", url));

        let body = body
            .map(|b| serde_json::to_vec(b).map(Bytes::from))
            .transpose()?;

        let response = self
            .transport
            .post(PostRequest {
                url,
                headers: self.headers.as_map().clone(),
                body,
                tls_verify: self.config.tls_verify,
            })
            .await?;

        self.logger.debug(&format!(
            "<< perform_action() - status {}",
            response.status_code()
        ));

        let result = ActionResult::new(serde_json::from_slice(&response.body)?);
        if let Some(err) = result.application_error() {
            self.logger.warn(&err.to_string());
        }

        Ok(result)
    }

    /// Run a catalogue action
    pub async fn perform(&self, action: VehicleAction) -> Result<ActionResult> {
        let car_id = self.car_id();
        let url = self.config.vehicle_url(car_id, &action.path_suffix(car_id));
        let body = action.body();

        if action.is_trigger() {
            self.logger
                .info(&format!("-- {}() - sending command for car {}", action, car_id));
        } else {
            self.logger.debug(&format!(">> {}()", action));
        }
        let result = self.perform_action(&url, body.as_ref()).await?;
        self.logger
            .debug(&format!("<< {}() - response {}", action, result));

        Ok(result)
    }

    /// Run independent actions concurrently, results in input order
    pub async fn perform_all(&self, actions: &[VehicleAction]) -> Vec<Result<ActionResult>> {
        let futures: Vec<_> = actions.iter().map(|a| self.perform(*a)).collect();
        futures::future::join_all(futures).await
    }

    /// Get the car location (lat, lon)
    pub async fn get_location(&self) -> Result<ActionResult> {
        self.perform(VehicleAction::GetLocation).await
    }

    /// Get the fully loaded car list
    pub async fn get_fully_loaded_cars(&self) -> Result<ActionResult> {
        self.perform(VehicleAction::GetFullyLoadedCars).await
    }

    /// Get the complete vehicle JSON
    pub async fn get_complete_vehicle_json(&self) -> Result<ActionResult> {
        self.perform(VehicleAction::GetCompleteVehicleJson).await
    }

    /// Load the car details
    pub async fn load_car_details(&self) -> Result<ActionResult> {
        self.perform(VehicleAction::LoadCarDetails).await
    }

    /// Get the PSP status
    pub async fn get_psp_status(&self) -> Result<ActionResult> {
        self.perform(VehicleAction::GetPspStatus).await
    }

    /// Get the vehicle details
    pub async fn get_vehicle_details(&self) -> Result<ActionResult> {
        self.perform(VehicleAction::GetVehicleDetails).await
    }

    /// Get the vehicle status report
    pub async fn get_vehicle_status_report(&self) -> Result<ActionResult> {
        self.perform(VehicleAction::GetVehicleStatusReport).await
    }

    /// Get the latest vehicle report
    pub async fn get_latest_report(&self) -> Result<ActionResult> {
        self.perform(VehicleAction::GetLatestReport).await
    }

    /// Get e-manager info
    pub async fn get_emanager(&self) -> Result<ActionResult> {
        self.perform(VehicleAction::GetEmanager).await
    }

    /// Get statistics about the latest trip
    pub async fn get_latest_trip_statistics(&self) -> Result<ActionResult> {
        self.perform(VehicleAction::GetLatestTripStatistics).await
    }

    /// Turn electric climatisation on (`true`) or off (`false`)
    pub async fn trigger_climatisation(&self, on: bool) -> Result<ActionResult> {
        self.perform(VehicleAction::TriggerClimatisation { on }).await
    }

    /// Start the window heating
    pub async fn trigger_windowheating(&self) -> Result<ActionResult> {
        self.perform(VehicleAction::TriggerWindowheating).await
    }
}

impl fmt::Debug for CarnetClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CarnetClient")
            .field("car_id", &self.credentials.car_identifier)
            .field("cookies", &self.credentials.cookies.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
