//! Data table numerical column
//!
//! Cell formatting, the filter popover model and the filter/sort functions
//! a table applies to a numerical column.

pub mod histogram;
pub mod numerical;

pub use histogram::{Bar, Bin, Histogram};
pub use numerical::{
    round_to_fixed, validate_input, Comparator, FilterEvent, FilterParameters, InputSlot,
    NumericalFilter,
};

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::locale::DatatableLocale;
use crate::style::StyleObject;
use crate::theme::Theme;
use numerical::js_number;

pub type FormatFn = Arc<dyn Fn(f64) -> String + Send + Sync>;
pub type HighlightFn = Arc<dyn Fn(f64) -> bool + Send + Sync>;

#[derive(Clone, Default)]
pub enum NumericalFormat {
    #[default]
    Default,
    /// `$1.50`, negatives in parentheses: `($1.50)`.
    Accounting,
    /// `12.5%`
    Percentage,
    Custom(FormatFn),
}

impl fmt::Debug for NumericalFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericalFormat::Default => f.write_str("Default"),
            NumericalFormat::Accounting => f.write_str("Accounting"),
            NumericalFormat::Percentage => f.write_str("Percentage"),
            NumericalFormat::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Column options as given by the consumer.
#[derive(Clone, Default)]
pub struct NumericalOptions {
    pub title: String,
    pub sortable: Option<bool>,
    pub filterable: Option<bool>,
    pub format: NumericalFormat,
    pub highlight: Option<HighlightFn>,
    pub precision: Option<u32>,
}

/// A numerical column with defaults applied.
#[derive(Clone)]
pub struct NumericalColumn {
    pub title: String,
    pub sortable: bool,
    pub filterable: bool,
    pub format: NumericalFormat,
    pub precision: u32,
    highlight: HighlightFn,
}

impl fmt::Debug for NumericalColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumericalColumn")
            .field("title", &self.title)
            .field("sortable", &self.sortable)
            .field("filterable", &self.filterable)
            .field("format", &self.format)
            .field("precision", &self.precision)
            .finish()
    }
}

/// Rendered cell text plus its style.
#[derive(Debug, Clone, PartialEq)]
pub struct CellView {
    pub text: String,
    pub style: StyleObject,
}

impl NumericalColumn {
    /// Apply defaults. Non-default formats get two decimals unless a
    /// precision is given; accounting highlights negatives unless a
    /// highlight is given.
    pub fn new(options: NumericalOptions) -> Self {
        let is_default = matches!(options.format, NumericalFormat::Default);
        let precision = options
            .precision
            .unwrap_or(if is_default { 0 } else { 2 });
        let highlight = options.highlight.unwrap_or_else(|| {
            if matches!(options.format, NumericalFormat::Accounting) {
                Arc::new(|n: f64| n < 0.0) as HighlightFn
            } else {
                Arc::new(|_: f64| false)
            }
        });
        Self {
            title: options.title,
            sortable: options.sortable.unwrap_or(true),
            filterable: options.filterable.unwrap_or(true),
            format: options.format,
            precision,
            highlight,
        }
    }

    pub fn is_highlighted(&self, value: f64) -> bool {
        (self.highlight)(value)
    }

    pub fn format(&self, value: f64) -> String {
        let rounded = |v: f64| js_number(round_to_fixed(v, self.precision));
        match &self.format {
            NumericalFormat::Custom(f) => f(value),
            NumericalFormat::Accounting if value < 0.0 => format!("(${})", rounded(value.abs())),
            NumericalFormat::Accounting => format!("${}", rounded(value.abs())),
            NumericalFormat::Percentage => format!("{}%", rounded(value)),
            NumericalFormat::Default => rounded(value),
        }
    }

    /// Monospace, aligned to the trailing edge, negative colour when
    /// highlighted.
    pub fn render_cell(&self, value: f64, theme: &Theme) -> CellView {
        let mut style = theme
            .font("MonoParagraphXSmall")
            .map(|font| font.to_style())
            .unwrap_or_default();
        style.insert("display".into(), "flex".into());
        let justify = if theme.is_rtl() { "flex-start" } else { "flex-end" };
        style.insert("justifyContent".into(), justify.into());
        let color = if self.is_highlighted(value) {
            theme
                .color("contentNegative")
                .map(|c| Value::String(c.to_string()))
                .unwrap_or(Value::Null)
        } else {
            Value::Null
        };
        style.insert("color".into(), color);
        style.insert("width".into(), "100%".into());
        CellView {
            text: self.format(value),
            style,
        }
    }

    /// Row predicate for applied filter parameters. Values are compared
    /// after rounding to the column precision.
    pub fn build_filter(&self, params: &FilterParameters) -> impl Fn(f64) -> bool {
        let precision = self.precision;
        let (lower, upper, exclude) = (params.lower_value, params.upper_value, params.exclude);
        move |data| {
            let value = round_to_fixed(data, precision);
            let included = value >= lower && value <= upper;
            included != exclude
        }
    }

    /// Ascending order; NaN sorts last.
    pub fn sort(&self, a: f64, b: f64) -> Ordering {
        match (a.is_nan(), b.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => a.total_cmp(&b),
        }
    }

    /// Filter popover state for this column's data.
    pub fn filter(&self, data: &[f64], applied: Option<&FilterParameters>) -> NumericalFilter {
        NumericalFilter::new(data, self.precision, applied)
    }
}

/// Labels for the range/single comparator buttons, in button order.
pub fn comparator_labels(locale: &DatatableLocale) -> [(Comparator, &str); 2] {
    [
        (Comparator::Range, locale.numerical_filter_range.as_str()),
        (Comparator::Single, locale.numerical_filter_single_value.as_str()),
    ]
}
