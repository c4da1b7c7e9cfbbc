//! Marginal cost model and per-request plant derivation.

use super::quantize::round1;
use super::types::{FuelPrices, PlantKind, PlantSpec};

/// CO2 emitted per MWh of electricity from a gas-fired unit (ton/MWh).
pub const GAS_CO2_INTENSITY_T_PER_MWH: f64 = 0.3;

/// Marginal cost of one MWh of output (€/MWh).
///
/// Wind is free, thermal units pay fuel divided by efficiency (plus CO2 for
/// gas), and unrecognised types cost `+∞` so they are dispatched last.
///
/// # Examples
///
/// ```
/// use production_plan::plan::cost::cost_per_mwh;
/// use production_plan::plan::types::{FuelPrices, PlantKind};
///
/// let fuels = FuelPrices {
///     gas_euro_per_mwh: 13.4,
///     kerosine_euro_per_mwh: 50.8,
///     co2_euro_per_ton: 20.0,
///     wind_pct: 60.0,
/// };
/// let cost = cost_per_mwh(&PlantKind::GasFired { efficiency: 0.5 }, &fuels);
/// assert!((cost - 38.8).abs() < 1e-9);
/// ```
pub fn cost_per_mwh(kind: &PlantKind, fuels: &FuelPrices) -> f64 {
    match kind {
        PlantKind::GasFired { efficiency } => {
            fuels.gas_euro_per_mwh / efficiency
                + GAS_CO2_INTENSITY_T_PER_MWH * fuels.co2_euro_per_ton / efficiency
        }
        PlantKind::Turbojet { efficiency } => fuels.kerosine_euro_per_mwh / efficiency,
        PlantKind::WindTurbine => 0.0,
        PlantKind::Unrecognized { .. } => f64::INFINITY,
    }
}

/// A plant with its request-specific cost and effective output limits.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedPlant {
    pub name: String,
    pub kind: PlantKind,
    /// Marginal cost (€/MWh).
    pub cost: f64,
    /// Effective minimum output (MW); zero for wind.
    pub pmin: f64,
    /// Effective maximum output (MW); wind is scaled by availability.
    pub pmax: f64,
}

impl ProcessedPlant {
    /// Derives the effective plant for the given prices.
    pub fn derive(spec: &PlantSpec, fuels: &FuelPrices) -> Self {
        let (pmin, pmax) = if spec.kind.is_wind() {
            (0.0, round1(spec.pmax * fuels.wind_pct / 100.0))
        } else {
            (spec.pmin, spec.pmax)
        };

        Self {
            name: spec.name.clone(),
            kind: spec.kind.clone(),
            cost: cost_per_mwh(&spec.kind, fuels),
            pmin,
            pmax,
        }
    }

    pub fn is_wind(&self) -> bool {
        self.kind.is_wind()
    }
}
