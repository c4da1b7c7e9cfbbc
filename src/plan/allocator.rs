//! Two-pass merit-order dispatch.
//!
//! Wind is allocated first since it is free, then dispatchable plants are
//! committed in merit order. Before committing a plant that cannot cover the
//! rest of the load on its own, a lookahead checks that enough load remains
//! for the other dispatchable plants' minimum outputs.

use tracing::debug;

use super::cost::ProcessedPlant;
use super::quantize::round1;

/// Result of a dispatch run.
#[derive(Debug, Clone, PartialEq)]
pub struct Dispatch {
    /// Allocated power per plant, indexed like the processed plants (MW).
    pub allocation: Vec<f64>,
    /// Load not yet covered (MW). Ideally zero.
    pub remaining_load: f64,
}

/// Allocates `load` across `plants`, visiting them in `order`.
///
/// Every plant gets an entry in the allocation; plants that are not
/// dispatched stay at zero.
pub fn dispatch(plants: &[ProcessedPlant], order: &[usize], load: f64) -> Dispatch {
    let mut allocation = vec![0.0; plants.len()];
    let mut remaining_load = load;

    for &idx in order {
        let plant = &plants[idx];
        if !plant.is_wind() {
            continue;
        }
        let power = round1(plant.pmax.min(remaining_load));
        if power > 0.0 {
            debug!(plant = %plant.name, power, "wind dispatched");
            allocation[idx] = power;
            remaining_load = round1(remaining_load - power);
        }
    }

    for &idx in order {
        let plant = &plants[idx];
        if plant.is_wind() {
            continue;
        }
        if remaining_load <= 0.0 {
            break;
        }
        if remaining_load < plant.pmin {
            debug!(plant = %plant.name, remaining_load, pmin = plant.pmin, "below pmin, left idle");
            continue;
        }

        let mut power = plant.pmax.min(remaining_load);
        if power < remaining_load {
            let min_next_p = pmin_of_other_dispatchables(plants, idx);
            if remaining_load - power < min_next_p {
                power = plant.pmin.max(remaining_load - min_next_p);
                debug!(plant = %plant.name, min_next_p, power, "output held back for later plants");
            }
        }

        let power = round1(power);
        debug!(plant = %plant.name, power, cost = plant.cost, "dispatched");
        allocation[idx] = power;
        remaining_load = round1(remaining_load - power);
    }

    Dispatch {
        allocation,
        remaining_load,
    }
}

/// Sum of `pmin` over every non-wind plant except `idx`.
///
/// Plants earlier in merit order (already committed or left idle) are
/// included too, which makes the lookahead stricter than a sum over the
/// plants still to visit.
fn pmin_of_other_dispatchables(plants: &[ProcessedPlant], idx: usize) -> f64 {
    plants
        .iter()
        .enumerate()
        .filter(|&(other, p)| other != idx && !p.is_wind())
        .map(|(_, p)| p.pmin)
        .sum()
}
