// File: crates/arcstrip-core/src/time_axis.rs
// Summary: Adaptive time-axis ticks: span -> step table, epoch-anchored alignment, step-driven labels.

use chrono::{DateTime, FixedOffset, Offset, Utc};
use log::{debug, warn};

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3600.0;
const DAY: f64 = 86_400.0;

/// Upper bound on ticks per query.
pub const MAX_TICKS: usize = 10_000;

/// Tick spacing classes, coarsest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TickStep {
    ThirtyDays,
    SevenDays,
    TwoDays,
    OneDay,
    TwelveHours,
    TwoHours,
    OneHour,
    FifteenMinutes,
    FiveMinutes,
    OneMinute,
}

impl TickStep {
    pub const fn seconds(self) -> f64 {
        match self {
            TickStep::ThirtyDays => 30.0 * DAY,
            TickStep::SevenDays => 7.0 * DAY,
            TickStep::TwoDays => 2.0 * DAY,
            TickStep::OneDay => DAY,
            TickStep::TwelveHours => 12.0 * HOUR,
            TickStep::TwoHours => 2.0 * HOUR,
            TickStep::OneHour => HOUR,
            TickStep::FifteenMinutes => 15.0 * MINUTE,
            TickStep::FiveMinutes => 5.0 * MINUTE,
            TickStep::OneMinute => MINUTE,
        }
    }

    /// Step for a visible span of `span` seconds (strict `>` thresholds).
    pub fn for_span(span: f64) -> Self {
        const TABLE: [(f64, TickStep); 9] = [
            (60.0 * DAY, TickStep::ThirtyDays),
            (30.0 * DAY, TickStep::SevenDays),
            (15.0 * DAY, TickStep::TwoDays),
            (6.0 * DAY, TickStep::OneDay),
            (DAY, TickStep::TwelveHours),
            (12.0 * HOUR, TickStep::TwoHours),
            (6.0 * HOUR, TickStep::OneHour),
            (HOUR, TickStep::FifteenMinutes),
            (10.0 * MINUTE, TickStep::FiveMinutes),
        ];
        TABLE
            .iter()
            .find(|(threshold, _)| span > *threshold)
            .map(|&(_, step)| step)
            .unwrap_or(TickStep::OneMinute)
    }

    pub fn granularity(self) -> LabelGranularity {
        LabelGranularity::for_spacing(self.seconds())
    }
}

/// Coarsest calendar unit shown in tick labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LabelGranularity {
    /// `Mar 2025`
    MonthYear,
    /// `04.03.2025`
    DayMonthYear,
    /// `04.03 13:45`
    DayHourMinute,
    /// `13:45`
    HourMinute,
}

impl LabelGranularity {
    pub fn for_spacing(seconds: f64) -> Self {
        if seconds >= 30.0 * DAY {
            LabelGranularity::MonthYear
        } else if seconds >= DAY {
            LabelGranularity::DayMonthYear
        } else if seconds >= HOUR {
            LabelGranularity::DayHourMinute
        } else {
            LabelGranularity::HourMinute
        }
    }

    pub const fn pattern(self) -> &'static str {
        match self {
            LabelGranularity::MonthYear => "%b %Y",
            LabelGranularity::DayMonthYear => "%d.%m.%Y",
            LabelGranularity::DayHourMinute => "%d.%m %H:%M",
            LabelGranularity::HourMinute => "%H:%M",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TickSet {
    pub step: TickStep,
    /// Ascending tick positions, seconds since epoch.
    pub positions: Vec<f64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

/// Tick generator bound to a wall-clock offset. Alignment and labels both use
/// that offset, so day ticks land on local midnight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeAxis {
    offset: FixedOffset,
}

impl Default for TimeAxis {
    fn default() -> Self { Self::utc() }
}

impl TimeAxis {
    pub fn utc() -> Self {
        Self { offset: Utc.fix() }
    }

    pub fn with_offset(offset: FixedOffset) -> Self {
        Self { offset }
    }

    pub fn offset(&self) -> FixedOffset { self.offset }

    fn offset_seconds(&self) -> f64 {
        f64::from(self.offset.local_minus_utc())
    }

    /// Ticks covering `[min_val, max_val]`: multiples of the step (in wall-clock
    /// seconds) that fall inside the range, endpoints included. At most `MAX_TICKS`
    /// come back, starting from `min_val`; a truncated run is logged.
    pub fn generate_ticks(&self, mut min_val: f64, mut max_val: f64) -> TickSet {
        if !min_val.is_finite() || !max_val.is_finite() {
            return TickSet { step: TickStep::OneMinute, positions: Vec::new() };
        }
        if min_val > max_val {
            std::mem::swap(&mut min_val, &mut max_val);
        }
        let step = TickStep::for_span(max_val - min_val);
        let s = step.seconds();
        let off = self.offset_seconds();

        let k_first = ((min_val + off) / s).ceil();
        let k_last = ((max_val + off) / s).floor();
        let wanted = if k_last >= k_first { k_last - k_first + 1.0 } else { 0.0 };
        if wanted > MAX_TICKS as f64 {
            warn!(
                "ticks [{min_val}, {max_val}] need {wanted} at step {step:?}; keeping the first {MAX_TICKS}"
            );
        }
        let count = wanted.min(MAX_TICKS as f64) as usize;

        let positions: Vec<f64> = (0..count)
            .map(|i| (k_first + i as f64) * s - off)
            .collect();
        debug!("ticks [{min_val}, {max_val}] -> step {step:?}, {} ticks", positions.len());
        TickSet { step, positions }
    }

    /// Labels for `positions` at the granularity implied by `step`.
    pub fn format_ticks(&self, positions: &[f64], step: TickStep) -> Vec<String> {
        self.format_with_spacing(positions, step.seconds())
    }

    /// Labels for `positions` given the raw tick spacing in seconds.
    pub fn format_with_spacing(&self, positions: &[f64], spacing: f64) -> Vec<String> {
        let pattern = LabelGranularity::for_spacing(spacing).pattern();
        positions.iter().map(|&v| self.format_one(v, pattern)).collect()
    }

    fn format_one(&self, v: f64, pattern: &str) -> String {
        match to_datetime(v) {
            Some(dt) => dt.with_timezone(&self.offset).format(pattern).to_string(),
            None => String::new(),
        }
    }

    pub fn ticks(&self, min_val: f64, max_val: f64) -> Vec<Tick> {
        let set = self.generate_ticks(min_val, max_val);
        let labels = self.format_ticks(&set.positions, set.step);
        set.positions
            .into_iter()
            .zip(labels)
            .map(|(position, label)| Tick { position, label })
            .collect()
    }
}

/// `None` for non-finite or unrepresentable timestamps.
fn to_datetime(v: f64) -> Option<DateTime<Utc>> {
    if !v.is_finite() {
        return None;
    }
    let secs = v.floor();
    if secs < i64::MIN as f64 || secs >= i64::MAX as f64 {
        return None;
    }
    let nanos = ((v - secs) * 1e9).clamp(0.0, 999_999_999.0) as u32;
    DateTime::from_timestamp(secs as i64, nanos)
}

/// UTC tick generation.
pub fn generate_ticks(min_val: f64, max_val: f64) -> TickSet {
    TimeAxis::utc().generate_ticks(min_val, max_val)
}

/// UTC tick labels.
pub fn format_ticks(positions: &[f64], step: TickStep) -> Vec<String> {
    TimeAxis::utc().format_ticks(positions, step)
}
