// One observation per qualifying log line

/// Cumulative per-process network counters from one nethogs line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetworkSample {
    /// Seconds since midnight of the sample's time-of-day field.
    pub timestamp: f64,
    pub sent: f64,
    pub received: f64,
}

/// CPU and memory utilization of the process from one top line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResourceSample {
    pub timestamp: f64,
    pub cpu_percent: f64,
    pub mem_percent: f64,
}

/// Which application part a refresh-time marker belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Liveboard,
    Planner,
}

impl Component {
    /// Classify a component-name field by substring. "router" and "planner" are synonyms.
    pub fn from_tag(name: &str) -> Option<Self> {
        if name.contains("liveboard") {
            Some(Self::Liveboard)
        } else if name.contains("router") || name.contains("planner") {
            Some(Self::Planner)
        } else {
            None
        }
    }
}

/// A user-perceived refresh-time marker; magnitude is already sign-normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyEvent {
    pub component: Component,
    pub magnitude: u64,
}
