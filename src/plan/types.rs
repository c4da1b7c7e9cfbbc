//! Request-level data types: fuel prices, plant records, and plan output.
//!
//! Wire field names follow the production-plan payload format
//! (`gas(euro/MWh)`, `pmin`, `p`, ...).

use serde::{Deserialize, Serialize};

use super::error::PlantRecordError;

/// Fuel and energy prices for one planning request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuelPrices {
    /// Gas price (€/MWh).
    #[serde(rename = "gas(euro/MWh)")]
    pub gas_euro_per_mwh: f64,
    /// Kerosine price (€/MWh).
    #[serde(rename = "kerosine(euro/MWh)")]
    pub kerosine_euro_per_mwh: f64,
    /// CO2 emission allowance price (€/ton).
    #[serde(rename = "co2(euro/ton)")]
    pub co2_euro_per_ton: f64,
    /// Wind availability (percent, 0–100).
    #[serde(rename = "wind(%)")]
    pub wind_pct: f64,
}

/// Plant technology, carrying only the fields its cost depends on.
#[derive(Debug, Clone, PartialEq)]
pub enum PlantKind {
    /// Gas-fired thermal unit; pays for gas and CO2.
    GasFired { efficiency: f64 },
    /// Kerosine turbojet.
    Turbojet { efficiency: f64 },
    /// Wind park; output scales with wind availability.
    WindTurbine,
    /// Any other type tag. Dispatched last at infinite cost.
    Unrecognized { type_tag: String },
}

impl PlantKind {
    pub const GAS_FIRED: &'static str = "gasfired";
    pub const TURBOJET: &'static str = "turbojet";
    pub const WIND_TURBINE: &'static str = "windturbine";

    /// Wire type tag for this kind.
    pub fn type_tag(&self) -> &str {
        match self {
            Self::GasFired { .. } => Self::GAS_FIRED,
            Self::Turbojet { .. } => Self::TURBOJET,
            Self::WindTurbine => Self::WIND_TURBINE,
            Self::Unrecognized { type_tag } => type_tag,
        }
    }

    pub fn is_wind(&self) -> bool {
        matches!(self, Self::WindTurbine)
    }

    fn efficiency(&self) -> Option<f64> {
        match self {
            Self::GasFired { efficiency } | Self::Turbojet { efficiency } => Some(*efficiency),
            Self::WindTurbine | Self::Unrecognized { .. } => None,
        }
    }
}

/// One power plant as submitted in a request.
///
/// `pmin` is forced to zero for wind turbines regardless of the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PlantRecord", into = "PlantRecord")]
pub struct PlantSpec {
    /// Unique plant name, used as the allocation key.
    pub name: String,
    /// Technology and cost-relevant parameters.
    pub kind: PlantKind,
    /// Minimum stable output once committed (MW).
    pub pmin: f64,
    /// Nameplate maximum output (MW).
    pub pmax: f64,
}

impl PlantSpec {
    pub fn gas_fired(name: &str, efficiency: f64, pmin: f64, pmax: f64) -> Self {
        Self {
            name: name.to_string(),
            kind: PlantKind::GasFired { efficiency },
            pmin,
            pmax,
        }
    }

    pub fn turbojet(name: &str, efficiency: f64, pmin: f64, pmax: f64) -> Self {
        Self {
            name: name.to_string(),
            kind: PlantKind::Turbojet { efficiency },
            pmin,
            pmax,
        }
    }

    pub fn wind_turbine(name: &str, pmax: f64) -> Self {
        Self {
            name: name.to_string(),
            kind: PlantKind::WindTurbine,
            pmin: 0.0,
            pmax,
        }
    }
}

/// Flat wire form of a plant record (`{"name", "type", "efficiency", "pmin", "pmax"}`).
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PlantRecord {
    name: String,
    #[serde(rename = "type")]
    plant_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    efficiency: Option<f64>,
    #[serde(default)]
    pmin: Option<f64>,
    pmax: f64,
}

impl TryFrom<PlantRecord> for PlantSpec {
    type Error = PlantRecordError;

    fn try_from(record: PlantRecord) -> Result<Self, Self::Error> {
        let missing = |field| PlantRecordError::MissingField {
            plant: record.name.clone(),
            plant_type: record.plant_type.clone(),
            field,
        };

        let kind = match record.plant_type.as_str() {
            PlantKind::GAS_FIRED => PlantKind::GasFired {
                efficiency: record.efficiency.ok_or_else(|| missing("efficiency"))?,
            },
            PlantKind::TURBOJET => PlantKind::Turbojet {
                efficiency: record.efficiency.ok_or_else(|| missing("efficiency"))?,
            },
            PlantKind::WIND_TURBINE => PlantKind::WindTurbine,
            other => PlantKind::Unrecognized {
                type_tag: other.to_string(),
            },
        };

        let pmin = if kind.is_wind() {
            0.0
        } else {
            record.pmin.ok_or_else(|| missing("pmin"))?
        };

        Ok(Self {
            name: record.name,
            kind,
            pmin,
            pmax: record.pmax,
        })
    }
}

impl From<PlantSpec> for PlantRecord {
    fn from(spec: PlantSpec) -> Self {
        Self {
            plant_type: spec.kind.type_tag().to_string(),
            efficiency: spec.kind.efficiency(),
            name: spec.name,
            pmin: Some(spec.pmin),
            pmax: spec.pmax,
        }
    }
}

/// A complete planning request: target load, prices, and the fleet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadRequest {
    /// Target total output (MW).
    pub load: f64,
    pub fuels: FuelPrices,
    /// Fleet in submission order; the order breaks merit-order ties.
    pub powerplants: Vec<PlantSpec>,
}

/// Allocated output for one plant, as returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantOutput {
    /// Plant name.
    pub name: String,
    /// Allocated power (MW, one decimal).
    pub p: f64,
}
