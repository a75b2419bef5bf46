use crate::domain::coin_data::{date_from_millis, epoch_millis};
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Value Object - space reserved around the plot for axes and titles
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margin {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self { left: 90.0, right: 100.0, top: 50.0, bottom: 100.0 }
    }
}

/// Value Object - outer SVG size and margins
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartLayout {
    pub outer_width: f64,
    pub outer_height: f64,
    pub margin: Margin,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self { outer_width: 860.0, outer_height: 500.0, margin: Margin::default() }
    }
}

impl ChartLayout {
    /// Plot width, the x range is `[0, width]`
    pub fn width(&self) -> f64 {
        (self.outer_width - self.margin.left - self.margin.right).max(0.0)
    }

    /// Plot height, the y range is `[height, 0]`
    pub fn height(&self) -> f64 {
        (self.outer_height - self.margin.top - self.margin.bottom).max(0.0)
    }
}

/// Value Object - continuous linear mapping from a domain onto a pixel range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// A collapsed domain maps everything to the middle of the range.
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span == 0.0 || !span.is_finite() {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / span * (r1 - r0)
    }

    pub fn invert(&self, pixel: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = r1 - r0;
        if span == 0.0 {
            return d0;
        }
        d0 + (pixel - r0) / span * (d1 - d0)
    }

    /// Round values inside the domain, spaced 1, 2 or 5 times a power of
    /// ten so that roughly `count` of them fit.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (mut lo, mut hi) = self.domain;
        if count == 0 || !lo.is_finite() || !hi.is_finite() {
            return Vec::new();
        }
        if lo == hi {
            return vec![lo];
        }
        let reversed = hi < lo;
        if reversed {
            std::mem::swap(&mut lo, &mut hi);
        }

        let raw_step = (hi - lo) / count as f64;
        let power = raw_step.log10().floor();
        let error = raw_step / 10f64.powf(power);
        let factor = if error >= 50f64.sqrt() {
            10.0
        } else if error >= 10f64.sqrt() {
            5.0
        } else if error >= 2f64.sqrt() {
            2.0
        } else {
            1.0
        };

        let mut ticks: Vec<f64> = if power >= 0.0 {
            let step = factor * 10f64.powf(power);
            let first = (lo / step).ceil() as i64;
            let last = (hi / step).floor() as i64;
            (first..=last).map(|i| i as f64 * step).collect()
        } else {
            // divide by the inverse step to keep decimals exact
            let inverse = 10f64.powf(-power) / factor;
            let first = (lo * inverse).ceil() as i64;
            let last = (hi * inverse).floor() as i64;
            (first..=last).map(|i| i as f64 / inverse).collect()
        };
        if reversed {
            ticks.reverse();
        }
        ticks
    }
}

/// Calendar step between two time ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickInterval {
    Days(u32),
    Weeks,
    Months(u32),
    Years(i32),
}

impl TickInterval {
    const CANDIDATES: [TickInterval; 10] = [
        TickInterval::Days(1),
        TickInterval::Days(2),
        TickInterval::Weeks,
        TickInterval::Months(1),
        TickInterval::Months(3),
        TickInterval::Months(6),
        TickInterval::Years(1),
        TickInterval::Years(2),
        TickInterval::Years(5),
        TickInterval::Years(10),
    ];

    /// Approximate length, only used to pick an interval
    pub fn approx_days(&self) -> f64 {
        match self {
            Self::Days(n) => *n as f64,
            Self::Weeks => 7.0,
            Self::Months(n) => *n as f64 * 30.0,
            Self::Years(n) => *n as f64 * 365.0,
        }
    }

    /// The finest interval giving at most `count` ticks over `span_days`
    pub fn for_span(span_days: f64, count: usize) -> Self {
        let count = count.max(1) as f64;
        Self::CANDIDATES
            .iter()
            .copied()
            .find(|interval| span_days / interval.approx_days() <= count)
            .unwrap_or_else(|| {
                let years =
                    LinearScale::new((0.0, span_days / 365.0), (0.0, 1.0)).ticks(count as usize);
                let step = match years.as_slice() {
                    [first, second, ..] => (second - first).round().max(1.0),
                    _ => 10.0,
                };
                Self::Years(step as i32)
            })
    }

    fn accepts(&self, date: NaiveDate) -> bool {
        match self {
            Self::Days(n) => (date.day() - 1) % n == 0 && (*n == 1 || date.day() < 31),
            Self::Weeks => date.weekday() == Weekday::Sun,
            Self::Months(n) => date.day() == 1 && date.month0() % n == 0,
            Self::Years(n) => date.ordinal() == 1 && date.year().rem_euclid(*n) == 0,
        }
    }

    fn next_candidate(&self, date: NaiveDate) -> Option<NaiveDate> {
        match self {
            Self::Days(_) | Self::Weeks => date.succ_opt(),
            Self::Months(_) => {
                let (year, month) = if date.month() == 12 {
                    (date.year() + 1, 1)
                } else {
                    (date.year(), date.month() + 1)
                };
                NaiveDate::from_ymd_opt(year, month, 1)
            }
            Self::Years(_) => NaiveDate::from_ymd_opt(date.year() + 1, 1, 1),
        }
    }

    fn first_candidate(&self, date: NaiveDate) -> Option<NaiveDate> {
        match self {
            Self::Days(_) | Self::Weeks => Some(date),
            Self::Months(_) if date.day() == 1 => Some(date),
            Self::Years(_) if date.ordinal() == 1 => Some(date),
            _ => self.next_candidate(date),
        }
    }
}

/// Value Object - time axis: a linear scale over epoch milliseconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    pub linear: LinearScale,
}

impl TimeScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { linear: LinearScale::new(domain, range) }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.linear.domain
    }

    pub fn map(&self, time_ms: f64) -> f64 {
        self.linear.map(time_ms)
    }

    pub fn map_date(&self, date: NaiveDate) -> f64 {
        self.linear.map(epoch_millis(date))
    }

    /// Pixel → epoch milliseconds
    pub fn invert(&self, pixel: f64) -> f64 {
        self.linear.invert(pixel)
    }

    /// Dates on calendar boundaries inside the domain
    pub fn ticks(&self, count: usize) -> Vec<NaiveDate> {
        let (lo, hi) = self.domain();
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        let (Some(start), Some(end)) = (date_from_millis(lo), date_from_millis(hi)) else {
            return Vec::new();
        };
        let interval = TickInterval::for_span((hi - lo) / 86_400_000.0, count);

        let mut ticks = Vec::new();
        let mut cursor = interval.first_candidate(start);
        while let Some(date) = cursor {
            if date > end {
                break;
            }
            if epoch_millis(date) >= lo && interval.accepts(date) {
                ticks.push(date);
            }
            cursor = interval.next_candidate(date);
        }
        ticks
    }
}

/// Value Object - one labelled tick of an axis
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    /// Pixel offset along the axis
    pub position: f64,
    pub label: String,
}
