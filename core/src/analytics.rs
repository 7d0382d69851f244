use std::collections::VecDeque;

/// One sampled gauge reading.
#[derive(Debug, Clone, Copy)]
pub struct LoadSample {
    pub at_ms: u64,
    pub load: u32,
}

pub const SAMPLE_INTERVAL_MS: u64 = 200;

/// Bounded history of gauge readings, feeding the sparkline under the
/// load bar.
pub struct LoadHistory {
    pub history: VecDeque<LoadSample>,
    pub max_points: usize,
    last_sample_ms: u64,
}

impl LoadHistory {
    pub fn new(max_points: usize) -> Self {
        Self {
            history: VecDeque::with_capacity(max_points),
            max_points,
            last_sample_ms: 0,
        }
    }

    pub fn update(&mut self, now_ms: u64, load: u32) {
        if now_ms < self.last_sample_ms + SAMPLE_INTERVAL_MS {
            return;
        }
        self.history.push_back(LoadSample { at_ms: now_ms, load });
        if self.history.len() > self.max_points {
            self.history.pop_front();
        }
        self.last_sample_ms = now_ms;
    }

    pub fn reset(&mut self) {
        self.history.clear();
        self.last_sample_ms = 0;
    }
}
