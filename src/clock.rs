//! Wall clock access, replaceable in tests

use time::{self, Timespec, Tm};

pub trait Clock {
    fn now(&self) -> Tm;
}

/// Local time of the machine
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Tm {
        time::now()
    }
}

/// Always returns the same UTC instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    at: Timespec,
}

impl FixedClock {
    /// `secs` seconds after the unix epoch
    pub fn at_unix(secs: i64) -> Self {
        FixedClock {
            at: Timespec::new(secs, 0),
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Tm {
        time::at_utc(self.at)
    }
}

#[test]
fn fixed_clock_is_fixed() {
    let clock = FixedClock::at_unix(86400);
    assert_eq!(clock.now(), clock.now());
    assert_eq!(clock.now().tm_mday, 2);
}
