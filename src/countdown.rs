//! Countdown arithmetic. Times are epoch milliseconds as `f64`, the unit the
//! browser clock reports.

const MS_PER_DAY: i64 = 86_400_000;
const MS_PER_HOUR: i64 = 3_600_000;
const MS_PER_MINUTE: i64 = 60_000;
const MS_PER_SECOND: i64 = 1_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Remaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Remaining {
    /// Split a positive millisecond difference by successive division/modulo.
    pub fn from_millis(diff: i64) -> Self {
        let diff = diff.max(0);
        let days = diff / MS_PER_DAY;
        let rest = diff % MS_PER_DAY;
        let hours = rest / MS_PER_HOUR;
        let rest = rest % MS_PER_HOUR;
        let minutes = rest / MS_PER_MINUTE;
        let rest = rest % MS_PER_MINUTE;
        Self {
            days,
            hours,
            minutes,
            seconds: rest / MS_PER_SECOND,
        }
    }

    /// Days, hours, minutes, seconds as zero-padded strings.
    pub fn fields(&self) -> [String; 4] {
        [
            pad2(self.days),
            pad2(self.hours),
            pad2(self.minutes),
            pad2(self.seconds),
        ]
    }
}

/// At least two digits; wider values are left intact.
pub fn pad2(n: i64) -> String {
    format!("{n:02}")
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tick {
    /// Still counting: render these fields.
    Render([String; 4]),
    /// Target reached on this tick: render zeros and cancel the schedule.
    Finished([String; 4]),
    /// Already finished; nothing changes.
    Stopped,
}

/// Countdown state owned by the per-second timer callback.
#[derive(Clone, Debug)]
pub struct Countdown {
    target_ms: f64,
    finished: bool,
}

impl Countdown {
    pub fn new(target_ms: f64) -> Self {
        Self {
            target_ms,
            finished: false,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn tick(&mut self, now_ms: f64) -> Tick {
        if self.finished {
            return Tick::Stopped;
        }
        let diff = (self.target_ms - now_ms).floor() as i64;
        if diff <= 0 {
            self.finished = true;
            return Tick::Finished(Remaining::default().fields());
        }
        Tick::Render(Remaining::from_millis(diff).fields())
    }
}
