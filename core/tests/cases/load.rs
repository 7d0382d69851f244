use crate::common::{converge, seeded_scaling};
use sdex_core::{Infrastructure, LoadHistory, TrafficLevel, LOAD_STEP, LOAD_TICK_MS};

#[test]
fn low_traffic_settles_at_20_regardless_of_toggles() {
    let mut sim = seeded_scaling(7);
    sim.set_balanced(true);
    sim.set_caching(true);
    assert_eq!(converge(&mut sim), 20);
}

#[test]
fn high_traffic_with_both_mitigations_settles_at_25() {
    let mut sim = seeded_scaling(7);
    sim.set_traffic(TrafficLevel::High);
    sim.set_balanced(true);
    sim.set_caching(true);
    assert_eq!(converge(&mut sim), 25);
}

#[test]
fn mitigations_subtract_independently() {
    let infra = |traffic, balanced, caching| Infrastructure {
        traffic,
        balanced,
        caching,
    };
    assert_eq!(infra(TrafficLevel::High, false, false).target_load(), 95);
    assert_eq!(infra(TrafficLevel::High, true, false).target_load(), 55);
    assert_eq!(infra(TrafficLevel::High, false, true).target_load(), 65);
    assert_eq!(infra(TrafficLevel::High, true, true).target_load(), 25);
    assert_eq!(infra(TrafficLevel::Low, true, true).target_load(), 20);
    assert_eq!(infra(TrafficLevel::Low, false, false).target_load(), 20);
}

#[test]
fn gauge_moves_at_most_one_step_per_tick_and_never_overshoots() {
    let mut sim = seeded_scaling(11);
    sim.set_traffic(TrafficLevel::High);

    // Climbing from 0 toward 95: bounded steps, never past the target.
    let mut prev = sim.load();
    for _ in 0..100 {
        sim.advance(LOAD_TICK_MS);
        let cur = sim.load();
        assert!(cur.abs_diff(prev) <= LOAD_STEP);
        assert!(cur <= 95);
        prev = cur;
    }
    assert_eq!(sim.load(), 95);

    // Decaying toward 20 after the spike ends: same discipline downward.
    sim.set_traffic(TrafficLevel::Low);
    let mut prev = sim.load();
    for _ in 0..100 {
        sim.advance(LOAD_TICK_MS);
        let cur = sim.load();
        assert!(prev.abs_diff(cur) <= LOAD_STEP);
        assert!(cur >= 20);
        prev = cur;
    }
    assert_eq!(sim.load(), 20);
}

#[test]
fn health_label_tracks_thresholds() {
    let mut sim = seeded_scaling(17);
    sim.set_traffic(TrafficLevel::High);
    converge(&mut sim);
    assert_eq!(sim.health_label(), "System Failing!");

    sim.set_balanced(true);
    converge(&mut sim);
    assert_eq!(sim.health_label(), "Stressed");

    sim.set_traffic(TrafficLevel::Low);
    converge(&mut sim);
    assert_eq!(sim.health_label(), "Healthy");
}

#[test]
fn load_history_samples_on_a_cadence_and_stays_bounded() {
    let mut history = LoadHistory::new(10);
    for step in 0..30u64 {
        history.update(step * 100, step as u32);
    }

    assert!(history.history.len() <= 10);
    let times: Vec<u64> = history.history.iter().map(|s| s.at_ms).collect();
    assert!(times.windows(2).all(|w| w[1] - w[0] >= 200));

    history.reset();
    assert!(history.history.is_empty());
}
