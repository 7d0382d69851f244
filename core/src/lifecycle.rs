use crate::timer::{Timeline, TimerToken};
use crate::{REQUEST_TRANSIT_MS, RESPONSE_TRANSIT_MS, SERVER_PROCESS_MS};

/// One step of the simulated HTTP round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Request,
    Processing,
    Response,
    Rendered,
}

impl Phase {
    /// How long the phase runs before handing off, if it is timed.
    pub fn duration_ms(self) -> Option<u64> {
        match self {
            Phase::Request => Some(REQUEST_TRANSIT_MS),
            Phase::Processing => Some(SERVER_PROCESS_MS),
            Phase::Response => Some(RESPONSE_TRANSIT_MS),
            Phase::Idle | Phase::Rendered => None,
        }
    }

    pub fn successor(self) -> Option<Phase> {
        match self {
            Phase::Request => Some(Phase::Processing),
            Phase::Processing => Some(Phase::Response),
            Phase::Response => Some(Phase::Rendered),
            Phase::Idle | Phase::Rendered => None,
        }
    }

    /// A new round trip may only begin from the resting states.
    pub fn accepts_start(self) -> bool {
        matches!(self, Phase::Idle | Phase::Rendered)
    }

    pub fn status_line(self) -> &'static str {
        match self {
            Phase::Idle => "Ready to simulate. Press the button to start.",
            Phase::Request => "Sending HTTP request over the network...",
            Phase::Processing => {
                "Server is processing the request, checking the DB, and preparing the JSON payload..."
            }
            Phase::Response => "Sending JSON response back to the client...",
            Phase::Rendered => "Response received! Client is rendering the data to the UI.",
        }
    }
}

/// Drives one request-response round trip on a virtual clock.
///
/// Exactly one timer is ever pending: the end of the current phase. The
/// stored token is checked when a timer fires, so a transition raced by a
/// restart or reset can never act on a phase it no longer belongs to.
pub struct LifecycleSim {
    timeline: Timeline<()>,
    phase: Phase,
    entered_at_ms: u64,
    pending: Option<TimerToken>,
}

impl LifecycleSim {
    pub fn new() -> Self {
        Self {
            timeline: Timeline::new(),
            phase: Phase::Idle,
            entered_at_ms: 0,
            pending: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn now_ms(&self) -> u64 {
        self.timeline.now_ms
    }

    /// Begin a round trip. Ignored while one is already in flight.
    pub fn start(&mut self) -> bool {
        if !self.phase.accepts_start() {
            return false;
        }
        self.enter(Phase::Request);
        true
    }

    fn enter(&mut self, phase: Phase) {
        if let Some(token) = self.pending.take() {
            self.timeline.cancel(token);
        }
        self.phase = phase;
        self.entered_at_ms = self.timeline.now_ms;
        if let Some(duration) = phase.duration_ms() {
            self.pending = Some(self.timeline.schedule(duration, ()));
        }
    }

    pub fn advance(&mut self, dt_ms: u64) {
        let deadline = self.timeline.now_ms + dt_ms;
        while let Some((token, ())) = self.timeline.poll(deadline) {
            if self.pending != Some(token) {
                // Stale: the phase moved on before this fired.
                continue;
            }
            self.pending = None;
            if let Some(next) = self.phase.successor() {
                self.enter(next);
            }
        }
        self.timeline.settle(deadline);
    }

    /// Position of the moving indicator within a transit phase, 0..=1.
    pub fn transit_progress(&self) -> Option<f32> {
        let duration = match self.phase {
            Phase::Request => REQUEST_TRANSIT_MS,
            Phase::Response => RESPONSE_TRANSIT_MS,
            _ => return None,
        };
        let elapsed = self.timeline.now_ms.saturating_sub(self.entered_at_ms);
        Some((elapsed as f32 / duration as f32).min(1.0))
    }

    /// Abort the cycle and drop the pending transition (panel teardown).
    pub fn reset(&mut self) {
        if let Some(token) = self.pending.take() {
            self.timeline.cancel(token);
        }
        self.timeline.clear();
        self.phase = Phase::Idle;
        self.entered_at_ms = self.timeline.now_ms;
    }
}

impl Default for LifecycleSim {
    fn default() -> Self {
        Self::new()
    }
}
