use rand::rngs::StdRng;
use rand::SeedableRng;
use sdex_core::{ScalingSim, LOAD_TICK_MS};

pub fn seeded_scaling(seed: u64) -> ScalingSim<StdRng> {
    ScalingSim::with_rng(StdRng::seed_from_u64(seed))
}

/// Drive the sim one gauge tick at a time until the load sits on its
/// target, with a hard cap so a broken convergence cannot hang the suite.
pub fn converge(sim: &mut ScalingSim<StdRng>) -> u32 {
    for _ in 0..10_000 {
        sim.advance(LOAD_TICK_MS);
        if sim.load() == sim.infrastructure().target_load() {
            return sim.load();
        }
    }
    panic!("gauge never reached its target");
}
