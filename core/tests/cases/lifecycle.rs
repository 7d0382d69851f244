use sdex_core::{LifecycleSim, Phase};

#[test]
fn walks_the_full_sequence_on_schedule() {
    let mut sim = LifecycleSim::new();
    assert_eq!(sim.phase(), Phase::Idle);

    assert!(sim.start());
    assert_eq!(sim.phase(), Phase::Request);

    sim.advance(1_499);
    assert_eq!(sim.phase(), Phase::Request);
    sim.advance(1);
    assert_eq!(sim.phase(), Phase::Processing);

    sim.advance(1_999);
    assert_eq!(sim.phase(), Phase::Processing);
    sim.advance(1);
    assert_eq!(sim.phase(), Phase::Response);

    sim.advance(1_499);
    assert_eq!(sim.phase(), Phase::Response);
    sim.advance(1);
    assert_eq!(sim.phase(), Phase::Rendered);

    assert_eq!(sim.now_ms(), 5_000);
}

#[test]
fn one_large_step_lands_on_rendered_at_exactly_5000() {
    let mut sim = LifecycleSim::new();
    sim.start();
    sim.advance(4_999);
    assert_eq!(sim.phase(), Phase::Response);

    let mut sim = LifecycleSim::new();
    sim.start();
    sim.advance(5_000);
    assert_eq!(sim.phase(), Phase::Rendered);
}

#[test]
fn start_mid_flight_is_a_no_op() {
    let mut sim = LifecycleSim::new();
    assert!(sim.start());

    sim.advance(100);
    assert!(!sim.start());
    assert_eq!(sim.phase(), Phase::Request);

    sim.advance(1_400);
    assert!(!sim.start());
    assert_eq!(sim.phase(), Phase::Processing);

    sim.advance(2_000);
    assert!(!sim.start());
    assert_eq!(sim.phase(), Phase::Response);

    // The ignored starts did not stretch or duplicate the schedule.
    sim.advance(1_500);
    assert_eq!(sim.phase(), Phase::Rendered);
    assert_eq!(sim.now_ms(), 5_000);
}

#[test]
fn restartable_from_rendered() {
    let mut sim = LifecycleSim::new();
    sim.start();
    sim.advance(5_000);
    assert_eq!(sim.phase(), Phase::Rendered);

    assert!(sim.start());
    assert_eq!(sim.phase(), Phase::Request);
    sim.advance(5_000);
    assert_eq!(sim.phase(), Phase::Rendered);
    assert_eq!(sim.now_ms(), 10_000);
}

#[test]
fn reset_cancels_the_pending_transition() {
    let mut sim = LifecycleSim::new();
    sim.start();
    sim.advance(1_000);
    assert_eq!(sim.phase(), Phase::Request);

    sim.reset();
    assert_eq!(sim.phase(), Phase::Idle);

    // The cancelled phase-end never fires against the reset state.
    sim.advance(10_000);
    assert_eq!(sim.phase(), Phase::Idle);
}

#[test]
fn idle_does_not_advance_on_its_own() {
    let mut sim = LifecycleSim::new();
    sim.advance(10_000);
    assert_eq!(sim.phase(), Phase::Idle);
    assert!(sim.transit_progress().is_none());
}

#[test]
fn transit_progress_follows_the_clock() {
    let mut sim = LifecycleSim::new();
    sim.start();

    sim.advance(750);
    let p = sim.transit_progress().expect("request is a transit phase");
    assert!((p - 0.5).abs() < 1e-6);

    sim.advance(750);
    assert_eq!(sim.phase(), Phase::Processing);
    assert!(sim.transit_progress().is_none());

    sim.advance(2_000);
    assert_eq!(sim.phase(), Phase::Response);
    let p = sim.transit_progress().expect("response is a transit phase");
    assert!(p.abs() < 1e-6);

    sim.advance(375);
    let p = sim.transit_progress().unwrap();
    assert!((p - 0.25).abs() < 1e-6);
}

#[test]
fn every_timed_phase_has_a_successor() {
    for phase in [Phase::Request, Phase::Processing, Phase::Response] {
        assert!(phase.duration_ms().is_some());
        assert!(phase.successor().is_some());
        assert!(!phase.accepts_start());
    }
    for phase in [Phase::Idle, Phase::Rendered] {
        assert!(phase.duration_ms().is_none());
        assert!(phase.accepts_start());
    }
}
