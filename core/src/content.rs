use serde::{Deserialize, Serialize};

/// Top-level navigation. Exactly one tab is active at a time; the active
/// value is owned by the app shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tab {
    Basics,
    Lifecycle,
    Tiers,
    Scaling,
    ProsCons,
    Examples,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::Basics,
        Tab::Lifecycle,
        Tab::Tiers,
        Tab::Scaling,
        Tab::ProsCons,
        Tab::Examples,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Basics => "The Basics",
            Tab::Lifecycle => "Lifecycle",
            Tab::Tiers => "Tiers",
            Tab::Scaling => "Scaling",
            Tab::ProsCons => "Pros & Cons",
            Tab::Examples => "Examples",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Tab::Basics => "Understanding the Core",
            Tab::Lifecycle => "The Request-Response Cycle",
            Tab::Tiers => "System Evolution",
            Tab::Scaling => "Handling the Load",
            Tab::ProsCons => "Trade-offs & Realities",
            Tab::Examples => "Real-World Application",
        }
    }

    pub fn intro(self) -> &'static str {
        match self {
            Tab::Basics => {
                "The client-server model is a distributed application structure that \
                 partitions tasks between the providers of a resource or service \
                 (servers) and service requesters (clients)."
            }
            Tab::Lifecycle => {
                "The heartbeat of the internet. Watch how a simple click turns into \
                 visible data on your screen."
            }
            Tab::Tiers => {
                "Systems grow in complexity to handle scale, security, and \
                 maintainability. Choose a tier to see its structure."
            }
            Tab::Scaling => {
                "Scaling is the ability of a system to handle growing amounts of work. \
                 Experiment with traffic spikes and infrastructure improvements."
            }
            Tab::ProsCons => {
                "No architecture is perfect. System design is about making the right \
                 trade-offs for your specific use case."
            }
            Tab::Examples => {
                "Client-server architecture is everywhere. See how different domains \
                 implement the same basic pattern."
            }
        }
    }
}

/// One of the three actors in the client-server model.
pub struct Role {
    pub title: &'static str,
    pub role: &'static str,
    pub glyph: &'static str,
    pub description: &'static str,
    pub examples: [&'static str; 4],
}

pub const ROLES: [Role; 3] = [
    Role {
        title: "The Client",
        role: "Requester",
        glyph: "💻",
        description: "The endpoint where users interact with the system. It initiates \
                      the communication by sending requests.",
        examples: ["Web Browser", "Mobile App", "Smart TV", "CLI Tool"],
    },
    Role {
        title: "The Network",
        role: "Mediator",
        glyph: "☁",
        description: "The medium through which messages are transported using \
                      protocols like HTTP, TCP/IP, or WebSockets.",
        examples: ["Internet", "LAN", "5G / Wi-Fi", "Fiber Optics"],
    },
    Role {
        title: "The Server",
        role: "Provider",
        glyph: "🗄",
        description: "A powerful central machine that listens for requests, processes \
                      logic, manages data, and sends back responses.",
        examples: ["Web Server", "API Gateway", "Database Server", "Auth Server"],
    },
];

pub const KEY_INSIGHT: &str =
    "Unlike peer-to-peer (P2P), where nodes are equal, the client-server model creates \
     a hierarchy. One server typically serves many clients, allowing for centralized \
     security, data management, and updates.";

/// An architectural layering step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    One,
    Two,
    Three,
    N,
}

/// A box in the tier diagram.
pub struct TierLayer {
    pub name: &'static str,
    pub glyph: &'static str,
}

impl Tier {
    pub const ALL: [Tier; 4] = [Tier::One, Tier::Two, Tier::Three, Tier::N];

    pub fn label(self) -> &'static str {
        match self {
            Tier::One => "1-Tier",
            Tier::Two => "2-Tier",
            Tier::Three => "3-Tier",
            Tier::N => "N-Tier",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Tier::One => {
                "Monolithic application where UI, logic, and data storage reside on a \
                 single machine."
            }
            Tier::Two => {
                "Separates the UI (client) from the database (server). Common in \
                 legacy systems."
            }
            Tier::Three => {
                "Introduces a middleware (app server) to handle business logic \
                 separately from data and UI."
            }
            Tier::N => {
                "Distributed architecture with extra layers like load balancers, \
                 caching, and microservices."
            }
        }
    }

    pub fn layers(self) -> &'static [TierLayer] {
        match self {
            Tier::One => &[
                TierLayer { name: "Interface", glyph: "💻" },
                TierLayer { name: "Logic", glyph: "⚡" },
                TierLayer { name: "Storage", glyph: "🗄" },
            ],
            Tier::Two => &[
                TierLayer { name: "Client Tier", glyph: "💻" },
                TierLayer { name: "Data Tier", glyph: "🗄" },
            ],
            Tier::Three => &[
                TierLayer { name: "Presentation", glyph: "💻" },
                TierLayer { name: "Application", glyph: "⚡" },
                TierLayer { name: "Database", glyph: "🗄" },
            ],
            Tier::N => &[
                TierLayer { name: "Clients", glyph: "💻" },
                TierLayer { name: "Proxy / LB", glyph: "🛡" },
                TierLayer { name: "Cache", glyph: "⚡" },
                TierLayer { name: "Apps", glyph: "🌐" },
                TierLayer { name: "Sharded DB", glyph: "🗄" },
            ],
        }
    }

    /// Caption under the single-box diagram; only 1-Tier has one.
    pub fn caption(self) -> Option<&'static str> {
        match self {
            Tier::One => Some("Everything in one box"),
            _ => None,
        }
    }
}

pub struct Footnote {
    pub title: &'static str,
    pub body: &'static str,
}

pub const TIER_NOTES: [Footnote; 2] = [
    Footnote {
        title: "Decoupling",
        body: "Separating tiers allows teams to work on the UI independently of the \
               database logic, improving development velocity.",
    },
    Footnote {
        title: "Scalability",
        body: "In a 3-tier system, you can scale the application tier (add more \
               servers) without needing to change the database configuration.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeOffKind {
    Pro,
    Con,
}

/// A flip card: prompt on the front, answer on the back. The revealed flag
/// lives in the view and toggles per card.
pub struct TradeOff {
    pub title: &'static str,
    pub kind: TradeOffKind,
    pub glyph: &'static str,
    pub prompt: &'static str,
    pub answer: &'static str,
}

pub const TRADE_OFFS: [TradeOff; 4] = [
    TradeOff {
        title: "Centralized Control",
        kind: TradeOffKind::Pro,
        glyph: "🛡",
        prompt: "Why is it good for management?",
        answer: "Security, data integrity, and software updates are handled at the \
                 server. No need to update thousands of clients individually.",
    },
    TradeOff {
        title: "Single Point of Failure",
        kind: TradeOffKind::Con,
        glyph: "⚠",
        prompt: "What happens if the server dies?",
        answer: "If the central server goes offline, all connected clients lose \
                 access to the service. This is why high-availability clusters are \
                 vital.",
    },
    TradeOff {
        title: "Horizontal Scalability",
        kind: TradeOffKind::Pro,
        glyph: "📈",
        prompt: "How do we handle 1M users?",
        answer: "We can add more servers behind a load balancer to distribute the \
                 load, allowing the system to grow with demand.",
    },
    TradeOff {
        title: "Network Dependency",
        kind: TradeOffKind::Con,
        glyph: "🌐",
        prompt: "Can it work offline?",
        answer: "The architecture heavily relies on network performance. High latency \
                 or congestion directly impacts the user experience.",
    },
];

/// A real-world deployment of the pattern.
pub struct CaseStudy {
    pub title: &'static str,
    pub glyph: &'static str,
    pub blurb: &'static str,
    pub protocol: &'static str,
    pub details: &'static str,
    pub highlights: &'static [&'static str],
}

pub const CASE_STUDIES: [CaseStudy; 3] = [
    CaseStudy {
        title: "Web Browsing",
        glyph: "🌐",
        blurb: "The classic example. Your browser (client) requests HTML/CSS/JS from \
                a server via HTTP.",
        protocol: "HTTP / HTTPS",
        details: "The server returns static assets or dynamic data that the browser \
                  then renders for the user.",
        highlights: &["Encrypted Transport Layer", "Distributed Logic Processing"],
    },
    CaseStudy {
        title: "Email Systems",
        glyph: "✉",
        blurb: "Sending and receiving mail involves specialized servers handling \
                transport and storage.",
        protocol: "SMTP / IMAP / POP3",
        details: "SMTP is used for sending, while IMAP/POP3 allows the client to \
                  fetch messages from the server storage.",
        highlights: &["Encrypted Transport Layer", "Distributed Logic Processing"],
    },
    CaseStudy {
        title: "Digital Banking",
        glyph: "🏦",
        blurb: "High-security environments where transaction integrity and \
                encryption are paramount.",
        protocol: "Mutual TLS / RPC",
        details: "Heavy focus on ACID compliance (Atomicity, Consistency, Isolation, \
                  Durability) at the server database level.",
        highlights: &[
            "Encrypted Transport Layer",
            "Distributed Logic Processing",
            "Two-Factor Authentication (MFA) Integration",
        ],
    },
];
