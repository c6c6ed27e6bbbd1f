//! Numerical column filter
//!
//! Filter modes: RANGE ⇄ SINGLE, toggled by the comparator buttons.
//! Text inputs are stored verbatim while focused so partial numbers like
//! `-` or `3.` can be typed; on blur they are coerced and rounded.

use serde::{Deserialize, Serialize};

/// Round to `precision` decimals, halves toward positive infinity.
pub fn round_to_fixed(value: f64, precision: u32) -> f64 {
    let k = 10f64.powi(precision as i32);
    (value * k + 0.5).floor() / k
}

/// Shortest display form of a number (`2`, `1.5`, `-3`; never `-0`).
pub fn js_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

/// Parse the longest numeric prefix of `input`, as a browser's
/// `parseFloat` does. Leading whitespace is skipped.
pub fn parse_float(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut i = 0;
    let negative = match bytes.first() {
        Some(b'-') => {
            i += 1;
            true
        }
        Some(b'+') => {
            i += 1;
            false
        }
        _ => false,
    };
    let sign = if negative { -1.0 } else { 1.0 };

    if s[i..].starts_with("Infinity") {
        return Some(sign * f64::INFINITY);
    }

    let digits = |from: usize| {
        bytes[from..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let int_len = digits(i);
    let int_part = &s[i..i + int_len];
    i += int_len;

    let mut frac_part = "";
    if bytes.get(i) == Some(&b'.') {
        let frac_len = digits(i + 1);
        frac_part = &s[i + 1..i + 1 + frac_len];
        i += 1 + frac_len;
    }

    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }

    let mut exponent = String::new();
    if matches!(bytes.get(i), Some(b'e') | Some(b'E')) {
        let mut j = i + 1;
        let exp_sign = match bytes.get(j) {
            Some(b'-') => {
                j += 1;
                "-"
            }
            Some(b'+') => {
                j += 1;
                ""
            }
            _ => "",
        };
        let exp_len = digits(j);
        if exp_len > 0 {
            exponent = format!("e{}{}", exp_sign, &s[j..j + exp_len]);
        }
    }

    let canonical = format!(
        "{}.{}{}",
        if int_part.is_empty() { "0" } else { int_part },
        if frac_part.is_empty() { "0" } else { frac_part },
        exponent
    );
    canonical.parse::<f64>().ok().map(|v| sign * v)
}

/// Whether text may be stored in a filter input.
///
/// Anything with a numeric prefix is accepted, plus the empty string and
/// a lone minus sign so a value can be cleared or negated.
pub fn validate_input(input: &str) -> bool {
    input.is_empty() || input == "-" || parse_float(input).is_some()
}

/// `(min, max)` of the finite values.
pub fn extent(data: &[f64]) -> Option<(f64, f64)> {
    data.iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

pub fn median(data: &[f64]) -> Option<f64> {
    let mut values: Vec<f64> = data.iter().copied().filter(|v| v.is_finite()).collect();
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        Some((values[mid - 1] + values[mid]) / 2.0)
    } else {
        Some(values[mid])
    }
}

/// Parameters produced by the filter and consumed by the column predicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterParameters {
    pub description: String,
    pub exclude: bool,
    pub lower_value: f64,
    pub upper_value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Comparator {
    #[default]
    Range,
    Single,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSlot {
    /// Lower bound in range mode, the value in single mode.
    Lower,
    Upper,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FilterEvent {
    SetComparator(Comparator),
    ToggleExclude,
    Focus,
    Blur,
    Input { slot: InputSlot, text: String },
    Slider(Vec<f64>),
}

/// Filter popover state.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericalFilter {
    min: f64,
    max: f64,
    precision: u32,
    exclude: bool,
    comparator: Comparator,
    focused: bool,
    lower: String,
    upper: String,
    /// Kept apart from `lower` so toggling modes keeps both entries.
    single: String,
}

impl NumericalFilter {
    /// Seed from the column data and any previously applied parameters.
    pub fn new(data: &[f64], precision: u32, applied: Option<&FilterParameters>) -> Self {
        let (min, max) = extent(data).unwrap_or_else(|| {
            tracing::warn!("numerical filter opened without finite data");
            (0.0, 0.0)
        });
        let seeded = |v: f64| js_number(round_to_fixed(v, precision));
        let lower = applied.map(|p| p.lower_value).unwrap_or(min);
        let upper = applied.map(|p| p.upper_value).unwrap_or(max);
        let single = applied
            .map(|p| p.lower_value)
            .or_else(|| median(data))
            .unwrap_or(min);

        Self {
            min,
            max,
            precision,
            exclude: applied.map(|p| p.exclude).unwrap_or(false),
            comparator: Comparator::Range,
            focused: false,
            lower: seeded(lower),
            upper: seeded(upper),
            single: seeded(single),
        }
    }

    pub fn bounds(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    pub fn is_range(&self) -> bool {
        self.comparator == Comparator::Range
    }

    pub fn exclude(&self) -> bool {
        self.exclude
    }

    pub fn comparator(&self) -> Comparator {
        self.comparator
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    fn lower_text(&self) -> &str {
        if self.is_range() {
            &self.lower
        } else {
            &self.single
        }
    }

    /// Apply one event. Returns false when the event was rejected
    /// (input text that fails validation).
    pub fn handle(&mut self, event: FilterEvent) -> bool {
        match event {
            FilterEvent::SetComparator(c) => self.comparator = c,
            FilterEvent::ToggleExclude => self.exclude = !self.exclude,
            FilterEvent::Focus => self.focused = true,
            FilterEvent::Blur => self.focused = false,
            FilterEvent::Input { slot, text } => {
                if !validate_input(&text) {
                    tracing::debug!(%text, "rejected filter input");
                    return false;
                }
                match (slot, self.comparator) {
                    (InputSlot::Lower, Comparator::Range) => self.lower = text,
                    (InputSlot::Lower, Comparator::Single) => self.single = text,
                    (InputSlot::Upper, _) => self.upper = text,
                }
            }
            FilterEvent::Slider(values) => match (self.comparator, values.as_slice()) {
                (Comparator::Range, [lo, hi, ..]) => {
                    self.lower = js_number(*lo);
                    self.upper = js_number(*hi);
                }
                (Comparator::Single, [value, ..]) => self.single = js_number(*value),
                _ => return false,
            },
        }
        true
    }

    fn coerce(&self, text: &str, fallback: f64) -> f64 {
        match parse_float(text) {
            Some(v) if v.is_finite() => v,
            _ => fallback,
        }
    }

    /// Text shown in the two inputs: verbatim while focused, otherwise
    /// validated and rounded.
    pub fn input_values(&self) -> (String, String) {
        if self.focused {
            return (self.lower_text().to_string(), self.upper.clone());
        }
        let (lo, hi) = self.values();
        (js_number(lo), js_number(hi))
    }

    /// Numeric lower (or single) and upper values, rounded to precision.
    /// Unusable entries fall back to the data bounds.
    pub fn values(&self) -> (f64, f64) {
        let lo = self.coerce(self.lower_text(), self.min);
        let hi = self.coerce(&self.upper, self.max);
        (
            round_to_fixed(lo, self.precision),
            round_to_fixed(hi, self.precision),
        )
    }

    /// Slider thumbs, clamped to the data bounds. Range thumbs are sorted.
    pub fn slider_value(&self) -> Vec<f64> {
        let (lo, hi) = self.values();
        let clamp = |v: f64| v.max(self.min).min(self.max);
        if self.is_range() {
            let (lo, hi) = (clamp(lo), clamp(hi));
            if lo > hi {
                vec![hi, lo]
            } else {
                vec![lo, hi]
            }
        } else {
            vec![clamp(lo)]
        }
    }

    /// Parameters for the column predicate.
    pub fn apply(&self) -> FilterParameters {
        let (lo, hi) = self.values();
        let params = if self.is_range() {
            FilterParameters {
                description: format!("≥ {} and ≤ {}", js_number(lo), js_number(hi)),
                exclude: self.exclude,
                lower_value: lo,
                upper_value: hi,
            }
        } else {
            FilterParameters {
                description: format!("= {}", js_number(lo)),
                exclude: self.exclude,
                lower_value: lo,
                upper_value: lo,
            }
        };
        tracing::info!(
            description = %params.description,
            exclude = params.exclude,
            "numerical filter applied"
        );
        params
    }
}
