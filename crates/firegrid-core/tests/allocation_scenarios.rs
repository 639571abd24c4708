//! End-to-end allocation tests through the public `firegrid-core` API.
//!
//! Covers the canonical dispatch scenarios and the structural guarantees of
//! the greedy optimizer (completeness, exclusivity, quota bound,
//! determinism) over a batch of pseudo-random fixtures.

use std::collections::{BTreeMap, BTreeSet};

use firegrid_core::ordering::descending_nan_last;
use firegrid_core::{assign, build_graph, priority_scores};
use firegrid_types::{
    AssignmentMap, Coordinate, FireZone, Resource, ResourceId, ResourceKind, ResourceStatus,
    WeatherSnapshot, ZoneId,
};

fn zone(id: &str, at: Coordinate) -> FireZone {
    FireZone {
        id: ZoneId::new(id),
        name: id.to_owned(),
        coordinates: at,
        current_weather: None,
        resource_need_score: None,
    }
}

fn resource(id: &str, at: Coordinate) -> Resource {
    Resource {
        id: ResourceId::new(id),
        kind: ResourceKind::Truck,
        name: id.to_owned(),
        status: ResourceStatus::Available,
        current_location: at,
        capabilities: BTreeSet::new(),
        assigned_zone: None,
    }
}

fn scores(pairs: &[(&str, f64)]) -> BTreeMap<ZoneId, f64> {
    pairs.iter().map(|(id, s)| (ZoneId::new(*id), *s)).collect()
}

fn assigned<'m>(map: &'m AssignmentMap, zone: &str) -> Vec<&'m str> {
    map.get(&ZoneId::new(zone))
        .unwrap_or_default()
        .iter()
        .map(ResourceId::as_str)
        .collect()
}

/// Small deterministic generator so fixtures are reproducible without
/// pulling in a randomness crate.
struct Lcg(u64);

impl Lcg {
    fn next_unit(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        f64::from(u32::try_from(self.0 >> 40).unwrap_or(0)) / f64::from(1_u32 << 24)
    }

    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        (hi - lo).mul_add(self.next_unit(), lo)
    }

    fn coordinate(&mut self) -> Coordinate {
        Coordinate::new(self.range(38.0, 39.0), self.range(-122.5, -121.0))
    }
}

struct Fixture {
    zones: Vec<FireZone>,
    resources: Vec<Resource>,
    scores: BTreeMap<ZoneId, f64>,
    wind: f64,
}

fn fixture(seed: u64) -> Fixture {
    let mut rng = Lcg(seed);
    let zone_count = 1 + usize::try_from(seed % 5).unwrap_or(0);
    let resource_count = usize::try_from(seed % 9).unwrap_or(0);

    let zones: Vec<FireZone> = (0..zone_count)
        .map(|i| {
            let mut z = zone(&format!("zone-{i}"), rng.coordinate());
            z.current_weather = Some(WeatherSnapshot {
                observed_at: None,
                max_temp: rng.range(55.0, 110.0),
                avg_wind_speed: rng.range(0.0, 30.0),
                lagged_precipitation: rng.range(0.0, 1.5),
                wind_temp_ratio: 0.2,
            });
            z
        })
        .collect();
    let resources = (0..resource_count)
        .map(|i| resource(&format!("res-{i}"), rng.coordinate()))
        .collect();
    let scores = priority_scores(&zones);

    Fixture {
        zones,
        resources,
        scores,
        wind: rng.range(0.0, 40.0),
    }
}

// ---------------------------------------------------------------------------
// Canonical scenarios
// ---------------------------------------------------------------------------

#[test]
fn single_zone_with_colocated_resources_takes_first_three() {
    let here = Coordinate::new(38.5449, -121.7405);
    let zones = vec![zone("davis-1", here)];
    let resources: Vec<Resource> = (1..=5).map(|i| resource(&format!("r{i}"), here)).collect();

    let graph = build_graph(&zones, &resources, 0.0);
    assert!(graph.edges().iter().all(|e| e.weight.abs() < 1e-12));

    let map = assign(&graph, &scores(&[("davis-1", 10.0)]));
    assert_eq!(assigned(&map, "davis-1"), vec!["r1", "r2", "r3"]);
}

#[test]
fn top_zone_claims_everything_and_zero_priority_gets_none() {
    let zones = vec![
        zone("A", Coordinate::new(38.5449, -121.7405)),
        zone("B", Coordinate::new(38.5816, -121.4944)),
    ];
    let resources = vec![
        resource("r1", Coordinate::new(38.6785, -121.7732)),
        resource("r2", Coordinate::new(38.5816, -121.4944)),
    ];
    let graph = build_graph(&zones, &resources, 5.0);
    let map = assign(&graph, &scores(&[("A", 10.0), ("B", 0.0)]));

    // r1 (Woodland) is closer to Davis than r2 (Sacramento).
    assert_eq!(assigned(&map, "A"), vec!["r1", "r2"]);
    assert!(assigned(&map, "B").is_empty());
}

#[test]
fn no_resources_leaves_every_zone_empty() {
    let zones = vec![
        zone("davis-1", Coordinate::new(38.5449, -121.7405)),
        zone("woodland-1", Coordinate::new(38.6785, -121.7732)),
    ];
    let graph = build_graph(&zones, &[], 12.0);
    let map = assign(&graph, &scores(&[("davis-1", 4.0), ("woodland-1", 9.0)]));

    assert_eq!(map.zone_count(), 2);
    assert_eq!(map.assigned_count(), 0);
}

#[test]
fn empty_priority_map_seeds_zones_with_nothing() {
    let here = Coordinate::new(38.5449, -121.7405);
    let zones = vec![zone("davis-1", here), zone("woodland-1", here)];
    let resources = vec![resource("r1", here), resource("r2", here)];
    let graph = build_graph(&zones, &resources, 0.0);
    let map = assign(&graph, &BTreeMap::new());

    assert_eq!(map.zone_count(), 2);
    assert!(assigned(&map, "davis-1").is_empty());
    assert!(assigned(&map, "woodland-1").is_empty());
}

#[test]
fn no_zones_yields_empty_map() {
    let resources = vec![resource("r1", Coordinate::new(38.0, -121.0))];
    let graph = build_graph(&[], &resources, 0.0);
    let map = assign(&graph, &scores(&[("ghost", 5.0)]));
    assert_eq!(map.zone_count(), 0);
}

// ---------------------------------------------------------------------------
// Structural guarantees
// ---------------------------------------------------------------------------

#[test]
fn graph_is_complete_for_every_fixture() {
    for seed in 1..200 {
        let f = fixture(seed);
        let graph = build_graph(&f.zones, &f.resources, f.wind);
        assert_eq!(graph.edge_count(), f.zones.len() * f.resources.len());
        assert_eq!(graph.node_count(), f.zones.len() + f.resources.len());
        assert!(graph.edges().iter().all(|e| e.weight >= 0.0 && e.weight.is_finite()));
    }
}

#[test]
fn each_resource_is_assigned_at_most_once() {
    for seed in 1..200 {
        let f = fixture(seed);
        let graph = build_graph(&f.zones, &f.resources, f.wind);
        let map = assign(&graph, &f.scores);

        let mut seen = BTreeSet::new();
        for (_, resources) in map.iter() {
            for id in resources {
                assert!(seen.insert(id.clone()), "seed {seed}: {id} assigned twice");
            }
        }
        assert!(seen.len() <= f.resources.len());
    }
}

#[test]
fn no_zone_exceeds_its_quota_bound() {
    for seed in 1..200 {
        let f = fixture(seed);
        let graph = build_graph(&f.zones, &f.resources, f.wind);
        let map = assign(&graph, &f.scores);
        assert_eq!(map.zone_count(), f.zones.len());

        // Replay the visiting order: descending priority, ties in input order.
        let mut order: Vec<(&ZoneId, f64)> = f
            .zones
            .iter()
            .map(|z| (&z.id, f.scores.get(&z.id).copied().unwrap_or(f64::NAN)))
            .collect();
        order.sort_by(|a, b| descending_nan_last(a.1, b.1));

        let mut remaining = f.resources.len();
        for (zone, _) in order {
            let got = map.get(zone).unwrap_or_default().len();
            let bound = remaining.min(3);
            assert!(got <= bound, "seed {seed}: {zone} got {got}, bound {bound}");
            remaining = remaining.saturating_sub(got);
        }
    }
}

#[test]
fn top_priority_zone_gets_its_closest_resources() {
    for seed in 1..200 {
        let f = fixture(seed);
        if f.resources.is_empty() {
            continue;
        }
        let graph = build_graph(&f.zones, &f.resources, f.wind);
        let map = assign(&graph, &f.scores);

        let top = f
            .scores
            .iter()
            .fold(None::<(&ZoneId, f64)>, |best, (id, s)| match best {
                Some((_, b)) if b >= *s => best,
                _ => Some((id, *s)),
            });
        let Some((top_zone, top_score)) = top else { continue };
        if top_score <= 0.0 {
            continue;
        }
        // Skip ties for the top spot; graph order decides those.
        if f.scores.values().filter(|s| (**s - top_score).abs() < 1e-12).count() > 1 {
            continue;
        }

        let got = map.get(top_zone).unwrap_or_default();
        assert_eq!(got.len(), f.resources.len().min(3), "seed {seed}");

        let claimed_max = got
            .iter()
            .filter_map(|r| graph.edge_weight(r, top_zone))
            .fold(f64::NEG_INFINITY, f64::max);
        for other in &f.resources {
            if !got.contains(&other.id) {
                let w = graph.edge_weight(&other.id, top_zone).unwrap_or(f64::INFINITY);
                assert!(w >= claimed_max, "seed {seed}: skipped a closer resource");
            }
        }
    }
}

#[test]
fn identical_inputs_give_identical_output() {
    for seed in 1..100 {
        let f = fixture(seed);
        let first = assign(&build_graph(&f.zones, &f.resources, f.wind), &f.scores);
        let second = assign(&build_graph(&f.zones, &f.resources, f.wind), &f.scores);
        assert_eq!(first, second, "seed {seed}");
    }
}

#[test]
fn concurrent_runs_agree() {
    let f = fixture(7);
    let expected = assign(&build_graph(&f.zones, &f.resources, f.wind), &f.scores);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| assign(&build_graph(&f.zones, &f.resources, f.wind), &f.scores)))
            .collect();
        for handle in handles {
            assert!(handle.join().is_ok_and(|map| map == expected));
        }
    });
}
