use chrono::{DateTime, Utc};

// ============================================================================
// Domain Event Contract & Clock Capability
// ============================================================================
//
// Domain events are immutable facts: an aggregate snapshot plus the UTC
// instant the transition happened. Publishing them to a broker is the
// caller's responsibility; this layer only produces the values.
//
// The current instant is injected through the `Clock` trait rather than read
// from a global time source, so event timestamps are deterministic in tests
// and comparable across distributed consumers (always UTC).
//
// ============================================================================

/// Contract every emitted domain event satisfies.
pub trait DomainEvent {
    /// Stable event type name, e.g. `"OrderCreated"`.
    fn event_type(&self) -> &'static str;

    /// UTC instant the transition was recorded.
    fn occurred_at(&self) -> DateTime<Utc>;
}

/// Source of the current instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time, in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
