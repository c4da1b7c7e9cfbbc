//! Repair step that closes the gap left by dispatch.

use tracing::debug;

use super::cost::ProcessedPlant;
use super::quantize::round1;

/// Nudges allocations in merit order until their total equals `target_load`.
///
/// A plant can absorb a positive gap while below its `pmax` and shed a
/// negative gap while above its `pmin`; each move is clamped to keep the
/// plant within `[pmin, pmax]`. An idle plant raised to cover a gap is
/// committed at least at its `pmin`, which can flip the sign of the gap for
/// the plants after it.
///
/// Returns `true` once the gap is exactly zero at one decimal, `false` if
/// the plants run out first. The allocation is left as modified either way.
pub fn adjust_allocation(
    allocation: &mut [f64],
    plants: &[ProcessedPlant],
    order: &[usize],
    target_load: f64,
) -> bool {
    let current_total: f64 = allocation.iter().sum();
    let mut difference = round1(target_load - current_total);
    if difference == 0.0 {
        return true;
    }

    for &idx in order {
        let plant = &plants[idx];
        let current = allocation[idx];
        let eligible = (difference > 0.0 && current < plant.pmax)
            || (difference < 0.0 && current > plant.pmin);
        if !eligible {
            continue;
        }

        let adjustment = round1(
            difference
                .max(plant.pmin - current)
                .min(plant.pmax - current),
        );
        allocation[idx] = round1(current + adjustment);
        difference = round1(difference - adjustment);
        debug!(plant = %plant.name, adjustment, difference, "allocation adjusted");

        if difference == 0.0 {
            return true;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::types::PlantKind;

    fn plant(name: &str, pmin: f64, pmax: f64) -> ProcessedPlant {
        ProcessedPlant {
            name: name.to_string(),
            kind: PlantKind::Turbojet { efficiency: 0.3 },
            cost: 100.0,
            pmin,
            pmax,
        }
    }

    #[test]
    fn exact_total_needs_no_change() {
        let plants = vec![plant("a", 0.0, 100.0)];
        let mut alloc = vec![50.0];
        assert!(adjust_allocation(&mut alloc, &plants, &[0], 50.0));
        assert_eq!(alloc, vec![50.0]);
    }

    #[test]
    fn raises_plant_with_headroom() {
        let plants = vec![
            plant("a", 0.0, 100.0),
            plant("b", 40.0, 100.0),
            plant("c", 100.0, 100.0),
        ];
        let mut alloc = vec![0.0, 40.0, 0.0];
        assert!(adjust_allocation(&mut alloc, &plants, &[0, 1, 2], 120.0));
        assert_eq!(alloc, vec![80.0, 40.0, 0.0]);
    }

    #[test]
    fn spreads_gap_in_merit_order() {
        let plants = vec![plant("a", 0.0, 50.0), plant("b", 0.0, 50.0)];
        let mut alloc = vec![40.0, 10.0];
        // b is cheaper here, so it fills first
        assert!(adjust_allocation(&mut alloc, &plants, &[1, 0], 90.0));
        assert_eq!(alloc, vec![40.0, 50.0]);
    }

    #[test]
    fn committing_idle_plant_then_shedding_later_plant() {
        let plants = vec![plant("idle", 60.0, 100.0), plant("flex", 0.0, 100.0)];
        let mut alloc = vec![0.0, 0.0];
        // idle must start at 60, overshooting by 30, which flex cannot shed
        // from zero; with flex already running it can.
        assert!(!adjust_allocation(&mut alloc, &plants, &[0, 1], 30.0));

        let mut alloc = vec![0.0, 50.0];
        assert!(adjust_allocation(&mut alloc, &plants, &[0, 1], 80.0));
        assert_eq!(alloc, vec![60.0, 20.0]);
    }

    #[test]
    fn surplus_is_shed_down_to_pmin() {
        let plants = vec![plant("a", 20.0, 100.0), plant("b", 0.0, 100.0)];
        let mut alloc = vec![50.0, 30.0];
        assert!(adjust_allocation(&mut alloc, &plants, &[0, 1], 40.0));
        assert_eq!(alloc, vec![20.0, 20.0]);
    }

    #[test]
    fn fails_when_fleet_is_exhausted() {
        let plants = vec![plant("a", 0.0, 50.0), plant("b", 0.0, 30.0)];
        let mut alloc = vec![50.0, 20.0];
        assert!(!adjust_allocation(&mut alloc, &plants, &[0, 1], 100.0));
        assert_eq!(alloc, vec![50.0, 30.0]);
    }
}
