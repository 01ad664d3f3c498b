//! Source of "now" for the analyzer. Temporal orientation depends on the
//! current weekday, so tests inject a [`FixedClock`].

use jiff::Zoned;

pub trait Clock: Send + Sync {
    fn now(&self) -> Zoned;
}

/// The system clock in the system time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Zoned {
        Zoned::now()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone)]
pub struct FixedClock(pub Zoned);

impl FixedClock {
    pub fn new(now: Zoned) -> Self {
        Self(now)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Zoned {
        self.0.clone()
    }
}
