//! Merit-order ranking.

use super::cost::ProcessedPlant;

/// Returns plant indices sorted by ascending cost.
///
/// The sort is stable: plants with equal cost keep their input order, so
/// identical requests always produce the identical ranking.
pub fn merit_order(plants: &[ProcessedPlant]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..plants.len()).collect();
    order.sort_by(|&a, &b| plants[a].cost.total_cmp(&plants[b].cost));
    order
}
