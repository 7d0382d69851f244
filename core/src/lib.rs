pub mod analytics;
pub mod content;
pub mod lifecycle;
pub mod scaling;
pub mod timer;

pub use analytics::{LoadHistory, LoadSample};
pub use content::{CaseStudy, Role, Tab, Tier, TradeOff, TradeOffKind};
pub use lifecycle::{LifecycleSim, Phase};
pub use scaling::{Infrastructure, Packet, ScalingSim, ServerTarget, TrafficLevel};
pub use timer::{Timeline, TimerToken};

/// Animation timing constants (in virtual milliseconds)
pub const REQUEST_TRANSIT_MS: u64 = 1_500;
pub const SERVER_PROCESS_MS: u64 = 2_000;
pub const RESPONSE_TRANSIT_MS: u64 = 1_500;

pub const LOAD_TICK_MS: u64 = 50;
pub const LOAD_STEP: u32 = 2;

pub const EMIT_INTERVAL_LOW_MS: u64 = 800;
pub const EMIT_INTERVAL_HIGH_MS: u64 = 200;
pub const PACKET_TTL_MS: u64 = 2_000;
pub const MAX_LIVE_PACKETS: usize = 30;
pub const CACHE_HIT_RATE: f64 = 0.4;
