use rand::prelude::*;
use std::collections::VecDeque;

use crate::timer::{Timeline, TimerToken};
use crate::{
    CACHE_HIT_RATE, EMIT_INTERVAL_HIGH_MS, EMIT_INTERVAL_LOW_MS, LOAD_STEP, LOAD_TICK_MS,
    MAX_LIVE_PACKETS, PACKET_TTL_MS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrafficLevel {
    Low,
    High,
}

impl TrafficLevel {
    pub fn emit_interval_ms(self) -> u64 {
        match self {
            TrafficLevel::Low => EMIT_INTERVAL_LOW_MS,
            TrafficLevel::High => EMIT_INTERVAL_HIGH_MS,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            TrafficLevel::Low => TrafficLevel::High,
            TrafficLevel::High => TrafficLevel::Low,
        }
    }
}

/// Which simulated backend a packet is flying toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerTarget {
    A,
    B,
}

/// The toggleable options feeding the load model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Infrastructure {
    pub traffic: TrafficLevel,
    pub balanced: bool,
    pub caching: bool,
}

impl Default for Infrastructure {
    fn default() -> Self {
        Self {
            traffic: TrafficLevel::Low,
            balanced: false,
            caching: false,
        }
    }
}

impl Infrastructure {
    /// Steady-state utilization the gauge converges toward. Each mitigation
    /// subtracts independently under high traffic; the result is clamped so
    /// no combination of options can leave the 0..=100 gauge range.
    pub fn target_load(self) -> u32 {
        let mut target: i32 = match self.traffic {
            TrafficLevel::Low => 20,
            TrafficLevel::High => 95,
        };
        if self.traffic == TrafficLevel::High {
            if self.balanced {
                target -= 40;
            }
            if self.caching {
                target -= 30;
            }
        }
        target.clamp(0, 100) as u32
    }
}

/// A purely visual token for one in-flight unit of simulated traffic.
#[derive(Debug, Clone, Copy)]
pub struct Packet {
    pub id: u64,
    pub target: ServerTarget,
    pub cached: bool,
    pub via_balancer: bool,
    pub spawned_at_ms: u64,
    expiry: TimerToken,
}

impl Packet {
    /// Fraction of the packet's on-screen life spent, 0..=1.
    pub fn progress(&self, now_ms: u64) -> f32 {
        let age = now_ms.saturating_sub(self.spawned_at_ms);
        (age as f32 / PACKET_TTL_MS as f32).min(1.0)
    }
}

enum Pulse {
    LoadTick,
    Emit,
    Expire(u64),
}

/// Load gauge plus packet flow, reacting to the infrastructure toggles.
///
/// The emit timer is retimed when the traffic level changes; expiry timers
/// belong to individual packets and are cancelled when the live-set cap
/// evicts their packet early. An expiry surfacing for a packet already gone
/// is a no-op.
pub struct ScalingSim<R = StdRng> {
    timeline: Timeline<Pulse>,
    infra: Infrastructure,
    load: u32,
    packets: VecDeque<Packet>,
    next_packet_id: u64,
    emit_timer: TimerToken,
    rng: R,
}

impl ScalingSim<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl Default for ScalingSim<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> ScalingSim<R> {
    /// Seedable constructor so tests can pin the routing and cache draws.
    pub fn with_rng(rng: R) -> Self {
        let mut timeline = Timeline::new();
        let emit_timer = timeline.schedule(EMIT_INTERVAL_LOW_MS, Pulse::Emit);
        timeline.schedule(LOAD_TICK_MS, Pulse::LoadTick);
        Self {
            timeline,
            infra: Infrastructure::default(),
            load: 0,
            packets: VecDeque::new(),
            next_packet_id: 0,
            emit_timer,
            rng,
        }
    }

    pub fn infrastructure(&self) -> Infrastructure {
        self.infra
    }

    pub fn load(&self) -> u32 {
        self.load
    }

    pub fn now_ms(&self) -> u64 {
        self.timeline.now_ms
    }

    pub fn packets(&self) -> impl Iterator<Item = &Packet> {
        self.packets.iter()
    }

    /// Cosmetic status shown beside the gauge. Not a fault condition.
    pub fn health_label(&self) -> &'static str {
        if self.load > 85 {
            "System Failing!"
        } else if self.load > 50 {
            "Stressed"
        } else {
            "Healthy"
        }
    }

    pub fn set_traffic(&mut self, traffic: TrafficLevel) {
        if self.infra.traffic == traffic {
            return;
        }
        self.infra.traffic = traffic;
        // Emission cadence changed: retime the emit timer from now.
        self.timeline.cancel(self.emit_timer);
        self.emit_timer = self
            .timeline
            .schedule(traffic.emit_interval_ms(), Pulse::Emit);
    }

    pub fn toggle_traffic(&mut self) {
        self.set_traffic(self.infra.traffic.toggled());
    }

    pub fn set_balanced(&mut self, on: bool) {
        self.infra.balanced = on;
    }

    pub fn set_caching(&mut self, on: bool) {
        self.infra.caching = on;
    }

    pub fn advance(&mut self, dt_ms: u64) {
        let deadline = self.timeline.now_ms + dt_ms;
        while let Some((_token, pulse)) = self.timeline.poll(deadline) {
            match pulse {
                Pulse::LoadTick => {
                    self.step_load();
                    self.timeline.schedule(LOAD_TICK_MS, Pulse::LoadTick);
                }
                Pulse::Emit => {
                    self.emit_packet();
                    self.emit_timer = self
                        .timeline
                        .schedule(self.infra.traffic.emit_interval_ms(), Pulse::Emit);
                }
                Pulse::Expire(id) => {
                    self.packets.retain(|p| p.id != id);
                }
            }
        }
        self.timeline.settle(deadline);
    }

    /// Emit one packet — the step the interval timer drives.
    pub fn emit_packet(&mut self) {
        let id = self.next_packet_id;
        self.next_packet_id += 1;
        let target = if self.infra.balanced {
            if self.rng.gen_bool(0.5) {
                ServerTarget::B
            } else {
                ServerTarget::A
            }
        } else {
            ServerTarget::A
        };
        let cached = self.infra.caching && self.rng.gen_bool(CACHE_HIT_RATE);
        let expiry = self.timeline.schedule(PACKET_TTL_MS, Pulse::Expire(id));
        self.packets.push_back(Packet {
            id,
            target,
            cached,
            via_balancer: self.infra.balanced,
            spawned_at_ms: self.timeline.now_ms,
            expiry,
        });
        if self.packets.len() > MAX_LIVE_PACKETS {
            if let Some(evicted) = self.packets.pop_front() {
                self.timeline.cancel(evicted.expiry);
            }
        }
    }

    /// One 50ms convergence step: move toward the target, never past it.
    fn step_load(&mut self) {
        let target = self.infra.target_load();
        if self.load < target {
            self.load = (self.load + LOAD_STEP).min(target);
        } else if self.load > target {
            self.load = self.load.saturating_sub(LOAD_STEP).max(target);
        }
    }
}
