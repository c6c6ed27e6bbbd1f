//! Filter histogram
//!
//! Values are binned at "nice" tick steps (1, 2 or 5 times a power of ten)
//! and drawn into a fixed 308×120 box.

use crate::theme::Theme;

pub const WIDTH: f64 = 308.0;
pub const HEIGHT: f64 = 120.0;
pub const MAX_BIN_COUNT: usize = 50;

/// A tick step `factor × 10^power`, kept exact for negative powers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TickStep {
    factor: u32,
    power: i32,
}

impl TickStep {
    /// Step for roughly `count` ticks over `[start, stop]`. `None` when the
    /// span is too small (or too large) to express as a tick step.
    fn for_span(start: f64, stop: f64, count: usize) -> Option<Self> {
        let raw = (stop - start) / count.max(1) as f64;
        if !raw.is_normal() {
            return None;
        }
        let power = raw.log10().floor() as i32;
        let error = raw / 10f64.powi(power);
        let factor = if error >= 50f64.sqrt() {
            10
        } else if error >= 10f64.sqrt() {
            5
        } else if error >= 2f64.sqrt() {
            2
        } else {
            1
        };
        Some(Self { factor, power }.normalized())
    }

    fn normalized(self) -> Self {
        if self.factor == 10 {
            Self {
                factor: 1,
                power: self.power.saturating_add(1),
            }
        } else {
            self
        }
    }

    /// Next coarser nice step.
    fn coarser(self) -> Self {
        match self.factor {
            1 => Self { factor: 2, ..self },
            2 => Self { factor: 5, ..self },
            _ => Self {
                factor: 1,
                power: self.power.saturating_add(1),
            },
        }
    }

    /// `x / step`, computed without inexact fractional steps.
    fn ratio(self, x: f64) -> f64 {
        match self.power.checked_neg() {
            Some(inverse) if self.power < 0 => x * 10f64.powi(inverse) / f64::from(self.factor),
            _ => x / (f64::from(self.factor) * 10f64.powi(self.power)),
        }
    }

    /// `k × step`.
    fn edge(self, k: i64) -> f64 {
        match self.power.checked_neg() {
            Some(inverse) if self.power < 0 => {
                k as f64 * f64::from(self.factor) / 10f64.powi(inverse)
            }
            _ => k as f64 * f64::from(self.factor) * 10f64.powi(self.power),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bin {
    pub x0: f64,
    pub x1: f64,
    pub count: usize,
}

/// One drawn bar.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub included: bool,
    pub fill: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    bins: Vec<Bin>,
    y_max: f64,
}

impl Histogram {
    pub fn new(data: &[f64]) -> Self {
        let values: Vec<f64> = data.iter().copied().filter(|v| v.is_finite()).collect();
        let bins = bin_values(&values);
        let tallest = bins.iter().map(|b| b.count).max().unwrap_or(0);
        Self {
            y_max: nice_max(tallest as f64),
            bins,
        }
    }

    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    /// Upper end of the count axis after rounding up to a nice value.
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    fn x(&self, value: f64) -> f64 {
        let (Some(first), Some(last)) = (self.bins.first(), self.bins.last()) else {
            return 0.0;
        };
        let span = last.x1 - first.x0;
        if span <= 0.0 {
            return 0.0;
        }
        ((value - first.x0) / span * WIDTH).clamp(0.0, WIDTH)
    }

    fn y(&self, count: usize) -> f64 {
        if self.y_max <= 0.0 {
            return HEIGHT;
        }
        HEIGHT - count as f64 / self.y_max * HEIGHT
    }

    /// Index of the bin whose start is nearest to `value`.
    pub fn bisect_center(&self, value: f64) -> Option<usize> {
        bisect_center(&self.bins, value)
    }

    /// Bars for the current filter. In single mode only the nearest bin is
    /// included; in range mode bins overlapping `(lower, upper]` are.
    pub fn bars(
        &self,
        lower: f64,
        upper: f64,
        is_range: bool,
        exclude: bool,
        theme: &Theme,
    ) -> Vec<Bar> {
        let nearest = if is_range {
            None
        } else {
            self.bisect_center(lower)
        };
        let on = theme.color("primary").unwrap_or("#000000");
        let off = theme.color("mono400").unwrap_or("#CBCBCB");

        self.bins
            .iter()
            .enumerate()
            .map(|(index, bin)| {
                let mut included = match nearest {
                    Some(n) => index == n,
                    None => bin.x1 > lower && bin.x0 <= upper,
                };
                if exclude {
                    included = !included;
                }
                Bar {
                    x: self.x(bin.x0) + 1.0,
                    y: self.y(bin.count),
                    width: (self.x(bin.x1) - self.x(bin.x0) - 1.0).max(0.0),
                    height: self.y(0) - self.y(bin.count),
                    included,
                    fill: if included { on } else { off }.to_string(),
                }
            })
            .collect()
    }
}

fn bin_values(values: &[f64]) -> Vec<Bin> {
    let Some((lo, hi)) = super::numerical::extent(values) else {
        return Vec::new();
    };
    let single = || {
        vec![Bin {
            x0: lo,
            x1: hi,
            count: values.len(),
        }]
    };
    if lo == hi {
        return single();
    }

    let Some(mut step) = TickStep::for_span(lo, hi, values.len().min(MAX_BIN_COUNT)) else {
        tracing::debug!(lo, hi, "span too narrow to bin, using one bin");
        return single();
    };
    let (first, n) = loop {
        let first = step.ratio(lo).floor() as i64;
        // One past the bin holding the maximum keeps every bin the same width.
        let last = step.ratio(hi).floor() as i64 + 1;
        let n = (last - first) as usize;
        if n <= MAX_BIN_COUNT {
            break (first, n);
        }
        step = step.coarser();
    };
    tracing::trace!(bins = n, factor = step.factor, power = step.power, "histogram bins");

    let mut bins: Vec<Bin> = (0..n as i64)
        .map(|i| Bin {
            x0: step.edge(first + i),
            x1: step.edge(first + i + 1),
            count: 0,
        })
        .collect();
    for v in values {
        let index = (step.ratio(*v).floor() as i64 - first).clamp(0, n as i64 - 1);
        bins[index as usize].count += 1;
    }
    bins
}

/// `max` rounded up to a nice tick for a ten-tick axis.
fn nice_max(max: f64) -> f64 {
    if max <= 0.0 {
        return 0.0;
    }
    match TickStep::for_span(0.0, max, 10) {
        Some(step) => step.edge(step.ratio(max).ceil() as i64),
        None => max,
    }
}

/// Bin index whose `x0` is closest to `value`; ties go to the later bin.
pub fn bisect_center(bins: &[Bin], value: f64) -> Option<usize> {
    if bins.is_empty() {
        return None;
    }
    // Leftmost insertion point among all but the last bin.
    let i = bins[..bins.len() - 1].partition_point(|b| b.x0 < value);
    if i > 0 && bins[i - 1].x0 - value > -(bins[i].x0 - value) {
        Some(i - 1)
    } else {
        Some(i)
    }
}
