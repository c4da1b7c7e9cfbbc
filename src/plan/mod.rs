//! Production planning core: cost model, merit order, dispatch, and repair.
//!
//! [`compute_plan`] runs the whole pipeline for one request. Every call is
//! independent; nothing is cached or shared between requests.

pub mod adjust;
pub mod allocator;
pub mod cost;
pub mod error;
pub mod merit;
/// One-decimal rounding helper.
pub mod quantize;
pub mod types;

use std::cmp::Ordering;

use tracing::{debug, info};

pub use error::PlanError;
pub use types::{FuelPrices, LoadRequest, PlantKind, PlantOutput, PlantSpec};

use adjust::adjust_allocation;
use allocator::dispatch;
use cost::ProcessedPlant;
use merit::merit_order;

/// Residual load (MW) tolerated before the adjuster is invoked.
pub const LOAD_TOLERANCE_MW: f64 = 0.1;

/// Computes the production plan for `load` across `powerplants`.
///
/// Returns one entry per plant: wind turbines first, then every other plant,
/// each group sorted by name.
///
/// # Errors
///
/// Returns [`PlanError::Infeasible`] when the allocation cannot be brought
/// within [`LOAD_TOLERANCE_MW`] of `load`.
///
/// # Examples
///
/// ```
/// use production_plan::plan::{compute_plan, FuelPrices, PlantSpec};
///
/// let fuels = FuelPrices {
///     gas_euro_per_mwh: 13.4,
///     kerosine_euro_per_mwh: 50.8,
///     co2_euro_per_ton: 20.0,
///     wind_pct: 60.0,
/// };
/// let plants = vec![
///     PlantSpec::gas_fired("gas", 0.5, 100.0, 400.0),
///     PlantSpec::turbojet("tj", 0.3, 0.0, 100.0),
///     PlantSpec::wind_turbine("wind", 200.0),
/// ];
/// let plan = compute_plan(480.0, &fuels, &plants).unwrap();
/// let p: Vec<f64> = plan.iter().map(|o| o.p).collect();
/// assert_eq!(p, vec![120.0, 360.0, 0.0]);
/// ```
pub fn compute_plan(
    load: f64,
    fuels: &FuelPrices,
    powerplants: &[PlantSpec],
) -> Result<Vec<PlantOutput>, PlanError> {
    let plants: Vec<ProcessedPlant> = powerplants
        .iter()
        .map(|spec| ProcessedPlant::derive(spec, fuels))
        .collect();
    let order = merit_order(&plants);
    debug!(
        merit_order = ?order.iter().map(|&i| plants[i].name.as_str()).collect::<Vec<_>>(),
        "merit order computed"
    );

    let mut result = dispatch(&plants, &order, load);

    if result.remaining_load.abs() > LOAD_TOLERANCE_MW {
        debug!(
            remaining_load = result.remaining_load,
            "dispatch left a gap, adjusting"
        );
        if !adjust_allocation(&mut result.allocation, &plants, &order, load) {
            let allocated: f64 = result.allocation.iter().sum();
            return Err(PlanError::Infeasible {
                load,
                residual: quantize::round1(load - allocated),
            });
        }
    }

    let mut plan: Vec<(bool, PlantOutput)> = plants
        .into_iter()
        .zip(result.allocation)
        .map(|(plant, p)| {
            (
                plant.is_wind(),
                PlantOutput {
                    name: plant.name,
                    p,
                },
            )
        })
        .collect();
    plan.sort_by(|(wind_a, a), (wind_b, b)| output_order(*wind_a, a, *wind_b, b));

    info!(load, plants = plan.len(), "production plan computed");
    Ok(plan.into_iter().map(|(_, output)| output).collect())
}

fn output_order(wind_a: bool, a: &PlantOutput, wind_b: bool, b: &PlantOutput) -> Ordering {
    wind_b.cmp(&wind_a).then_with(|| a.name.cmp(&b.name))
}

impl LoadRequest {
    /// Computes the production plan for this request.
    ///
    /// # Errors
    ///
    /// See [`compute_plan`].
    pub fn plan(&self) -> Result<Vec<PlantOutput>, PlanError> {
        compute_plan(self.load, &self.fuels, &self.powerplants)
    }
}
