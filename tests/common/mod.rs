//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use production_plan::plan::{FuelPrices, LoadRequest, PlantOutput};

/// Reference fuel prices (gas 13.4, kerosine 50.8, CO2 20) at the given wind availability.
pub fn default_fuels(wind_pct: f64) -> FuelPrices {
    FuelPrices {
        gas_euro_per_mwh: 13.4,
        kerosine_euro_per_mwh: 50.8,
        co2_euro_per_ton: 20.0,
        wind_pct,
    }
}

/// Path of a payload under `demos/`.
pub fn demo_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("demos")
        .join(name)
}

/// Loads a payload under `demos/`.
pub fn demo_request(name: &str) -> LoadRequest {
    LoadRequest::from_json_file(&demo_path(name))
        .unwrap_or_else(|e| panic!("demo payload {name} should parse: {e}"))
}

/// Sum of allocated power across a plan (MW).
pub fn total_power(plan: &[PlantOutput]) -> f64 {
    plan.iter().map(|o| o.p).sum()
}

/// Allocated power of the named plant.
pub fn power_of(plan: &[PlantOutput], name: &str) -> f64 {
    plan.iter()
        .find(|o| o.name == name)
        .map(|o| o.p)
        .unwrap_or_else(|| panic!("plant {name} missing from plan"))
}
