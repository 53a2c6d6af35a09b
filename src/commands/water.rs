//! Water Intake Commands
//!
//! Frontend bindings for `/planner/water-intake`. Each call replaces
//! today's glass count on the server.

use serde::Serialize;

use super::{fetch_json, submit, ApiRequest, Transport};
use crate::error::PlannerResult;
use crate::models::WaterIntake;

pub const WATER_INTAKE_PATH: &str = "/planner/water-intake";

#[derive(Serialize)]
struct WaterIntakeArgs {
    glasses: i32,
}

pub async fn get_water_intake<T: Transport>(transport: &T) -> PlannerResult<WaterIntake> {
    fetch_json(transport, WATER_INTAKE_PATH).await
}

pub async fn set_water_intake<T: Transport>(transport: &T, glasses: i32) -> PlannerResult<()> {
    submit(transport, ApiRequest::post(WATER_INTAKE_PATH, &WaterIntakeArgs { glasses })?).await
}
