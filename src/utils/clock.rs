//! Wall-clock access for the timestamp line printed after each report.

use chrono::{DateTime, Local};

/// Source of the current time
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// Reads the system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Always reports the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

/// Remembers when the run started and renders the finishing line
#[derive(Debug, Clone)]
pub struct RunTimer<C: Clock = SystemClock> {
    clock: C,
    started: DateTime<Local>,
}

impl RunTimer<SystemClock> {
    #[must_use]
    pub fn start() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<C: Clock> RunTimer<C> {
    pub fn with_clock(clock: C) -> Self {
        let started = clock.now();
        Self { clock, started }
    }

    #[must_use]
    pub fn started(&self) -> DateTime<Local> {
        self.started
    }

    /// e.g. `Finished at 2018-05-23 14:02:11 (elapsed 0:03:27)`
    #[must_use]
    pub fn report_time(&self) -> String {
        let now = self.clock.now();
        let secs = (now - self.started).num_seconds().max(0);
        format!(
            "Finished at {} (elapsed {}:{:02}:{:02})",
            now.format("%Y-%m-%d %H:%M:%S"),
            secs / 3600,
            (secs % 3600) / 60,
            secs % 60
        )
    }
}

/// Clock whose reading can be moved forward; for tests
#[cfg(test)]
#[derive(Debug)]
pub struct SteppedClock(pub std::cell::Cell<DateTime<Local>>);

#[cfg(test)]
impl Clock for SteppedClock {
    fn now(&self) -> DateTime<Local> {
        self.0.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_report_time_elapsed() {
        let start = Local.with_ymd_and_hms(2018, 5, 23, 14, 0, 0).unwrap();
        let clock = SteppedClock(std::cell::Cell::new(start));
        let timer = RunTimer::with_clock(clock);
        timer.clock.0.set(start + Duration::seconds(3 * 3600 + 62));

        assert_eq!(
            timer.report_time(),
            "Finished at 2018-05-23 17:01:02 (elapsed 3:01:02)"
        );
    }

    #[test]
    fn test_fixed_clock_zero_elapsed() {
        let at = Local.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap();
        let timer = RunTimer::with_clock(FixedClock(at));
        assert_eq!(timer.started(), at);
        assert!(timer.report_time().ends_with("(elapsed 0:00:00)"));
    }
}
