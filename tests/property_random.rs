//! Randomized fleets checked against the planning invariants.

mod common;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use common::{power_of, total_power};
use production_plan::plan::{FuelPrices, PlanError, PlantKind, PlantSpec, compute_plan};

const CASES: u64 = 500;
const EPS: f64 = 1e-6;

fn random_fuels(rng: &mut StdRng) -> FuelPrices {
    FuelPrices {
        gas_euro_per_mwh: rng.random_range(50..600) as f64 / 10.0,
        kerosine_euro_per_mwh: rng.random_range(200..1200) as f64 / 10.0,
        co2_euro_per_ton: rng.random_range(0..80) as f64,
        wind_pct: rng.random_range(0..=100) as f64,
    }
}

fn random_fleet(rng: &mut StdRng) -> Vec<PlantSpec> {
    let n = rng.random_range(1..=8);
    (0..n)
        .map(|i| {
            let name = format!("p{i}");
            let pmax = rng.random_range(10..=500) as f64;
            let pmin = rng.random_range(0..=pmax as u32) as f64;
            match rng.random_range(0..3) {
                0 => PlantSpec::gas_fired(&name, rng.random_range(30..=60) as f64 / 100.0, pmin, pmax),
                1 => PlantSpec::turbojet(&name, rng.random_range(20..=40) as f64 / 100.0, pmin, pmax),
                _ => PlantSpec::wind_turbine(&name, pmax),
            }
        })
        .collect()
}

fn effective_pmax(plant: &PlantSpec, fuels: &FuelPrices) -> f64 {
    match plant.kind {
        PlantKind::WindTurbine => plant.pmax * fuels.wind_pct / 100.0,
        _ => plant.pmax,
    }
}

#[test]
fn feasible_plans_conserve_load_and_respect_bounds() {
    let mut feasible = 0;
    for seed in 0..CASES {
        let mut rng = StdRng::seed_from_u64(seed);
        let fuels = random_fuels(&mut rng);
        let plants = random_fleet(&mut rng);
        let load = rng.random_range(0..=2000) as f64;

        let Ok(plan) = compute_plan(load, &fuels, &plants) else {
            continue;
        };
        feasible += 1;

        assert_eq!(plan.len(), plants.len(), "seed {seed}");
        assert!(
            (total_power(&plan) - load).abs() <= 0.1 + EPS,
            "seed {seed}: total {} vs load {load}",
            total_power(&plan)
        );

        for plant in &plants {
            let p = power_of(&plan, &plant.name);
            let pmax = effective_pmax(plant, &fuels);
            assert!(p >= -EPS, "seed {seed}: {} negative", plant.name);
            assert!(p <= pmax + 0.05 + EPS, "seed {seed}: {} above pmax", plant.name);
            if p > EPS && !plant.kind.is_wind() {
                assert!(p >= plant.pmin - EPS, "seed {seed}: {} below pmin", plant.name);
            }
        }
    }
    assert!(feasible > 0, "no feasible case generated");
}

#[test]
fn loads_above_capacity_are_always_infeasible() {
    for seed in 0..CASES {
        let mut rng = StdRng::seed_from_u64(seed);
        let fuels = random_fuels(&mut rng);
        let plants = random_fleet(&mut rng);
        let capacity: f64 = plants.iter().map(|p| effective_pmax(p, &fuels)).sum();
        let load = (capacity + 1.0 + rng.random_range(0..500) as f64).ceil();

        assert!(
            matches!(
                compute_plan(load, &fuels, &plants),
                Err(PlanError::Infeasible { .. })
            ),
            "seed {seed}: load {load} above capacity {capacity}"
        );
    }
}

#[test]
fn identical_input_gives_identical_plan() {
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let fuels = random_fuels(&mut rng);
        let plants = random_fleet(&mut rng);
        let load = rng.random_range(0..=1000) as f64;

        assert_eq!(
            compute_plan(load, &fuels, &plants),
            compute_plan(load, &fuels, &plants),
            "seed {seed}"
        );
    }
}
