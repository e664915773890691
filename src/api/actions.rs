// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Vehicle action catalogue
//!
//! Each action is a URL suffix under `<dashboard>/<car id>` and an optional
//! JSON body.

use std::fmt;

use serde_json::{json, Value};

/// Named dashboard operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleAction {
    /// Car location (lat, lon)
    GetLocation,
    /// Fully loaded car list
    GetFullyLoadedCars,
    /// Complete vehicle JSON
    GetCompleteVehicleJson,
    /// Car details
    LoadCarDetails,
    /// PSP status
    GetPspStatus,
    /// Vehicle details
    GetVehicleDetails,
    /// Vehicle status report
    GetVehicleStatusReport,
    /// Latest vehicle health report
    GetLatestReport,
    /// E-manager info
    GetEmanager,
    /// Statistics about the latest trip
    GetLatestTripStatistics,
    /// Turn electric climatisation on or off
    TriggerClimatisation { on: bool },
    /// Start window heating
    TriggerWindowheating,
}

impl VehicleAction {
    /// Every read-only query
    pub const QUERIES: [VehicleAction; 10] = [
        VehicleAction::GetLocation,
        VehicleAction::GetFullyLoadedCars,
        VehicleAction::GetCompleteVehicleJson,
        VehicleAction::LoadCarDetails,
        VehicleAction::GetPspStatus,
        VehicleAction::GetVehicleDetails,
        VehicleAction::GetVehicleStatusReport,
        VehicleAction::GetLatestReport,
        VehicleAction::GetEmanager,
        VehicleAction::GetLatestTripStatistics,
    ];

    /// Operation name, as the dashboard client calls it
    pub fn name(&self) -> &'static str {
        match self {
            VehicleAction::GetLocation => "getLocation",
            VehicleAction::GetFullyLoadedCars => "getFullyLoadedCars",
            VehicleAction::GetCompleteVehicleJson => "getCompleteVehicleJson",
            VehicleAction::LoadCarDetails => "loadCarDetails",
            VehicleAction::GetPspStatus => "getPSPStatus",
            VehicleAction::GetVehicleDetails => "getVehicleDetails",
            VehicleAction::GetVehicleStatusReport => "getVehicleStatusReport",
            VehicleAction::GetLatestReport => "getLatestReport",
            VehicleAction::GetEmanager => "getEmanager",
            VehicleAction::GetLatestTripStatistics => "getLatestTripStatistics",
            VehicleAction::TriggerClimatisation { .. } => "triggerClimatisation",
            VehicleAction::TriggerWindowheating => "triggerWindowheating",
        }
    }

    /// Path after `<dashboard>/<car id>`
    pub fn path_suffix(&self, car_id: &str) -> String {
        let suffix = match self {
            VehicleAction::GetLocation => "/-/cf/get-location",
            VehicleAction::GetFullyLoadedCars => "/-/mainnavigation/get-fully-loaded-cars",
            VehicleAction::GetCompleteVehicleJson => "",
            VehicleAction::LoadCarDetails => {
                return format!("/-/mainnavigation/load-car-details/{}", car_id)
            }
            VehicleAction::GetPspStatus => "/-/mainnavigation/get-psp-status",
            VehicleAction::GetVehicleDetails => "/-/vehicle-info/get-vehicle-details",
            VehicleAction::GetVehicleStatusReport => "/-/vsr/get-vsr",
            VehicleAction::GetLatestReport => "/-/vhr/get-latest-report",
            VehicleAction::GetEmanager => "/-/emanager/get-emanager",
            VehicleAction::GetLatestTripStatistics => "/-/rts/get-latest-trip-statistics",
            VehicleAction::TriggerClimatisation { .. } => "/-/emanager/trigger-climatisation",
            VehicleAction::TriggerWindowheating => "/-/emanager/trigger-windowheating",
        };
        suffix.to_string()
    }

    /// JSON body, `None` for queries
    pub fn body(&self) -> Option<Value> {
        match self {
            VehicleAction::TriggerClimatisation { on } => Some(json!({
                "triggerAction": true,
                "electricClima": on,
            })),
            VehicleAction::TriggerWindowheating => Some(json!({ "triggerAction": true })),
            _ => None,
        }
    }

    /// Check if the action changes vehicle state
    pub fn is_trigger(&self) -> bool {
        matches!(
            self,
            VehicleAction::TriggerClimatisation { .. } | VehicleAction::TriggerWindowheating
        )
    }
}

impl fmt::Display for VehicleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
