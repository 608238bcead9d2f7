use chrono::{Local, NaiveDateTime, SubsecRound};

/// Source of the timestamp given to newly added rides.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Wall clock in local time, truncated to whole seconds.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local().trunc_subsecs(0)
    }
}

/// Always returns the same instant. Used by tests and by `import`, where
/// the ride time comes from the imported file.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0.trunc_subsecs(0)
    }
}
