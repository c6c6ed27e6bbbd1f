//! Date handling for calendar widgets.
//!
//! Calendar code is generic over a [`DateAdapter`]; [`ChronoAdapter`] is the
//! bundled implementation over `chrono::NaiveDateTime`. The range selection
//! state machine lives in [`range`], the hover/focus previews in [`preview`].

mod adapter;
mod chrono_adapter;
mod error;
mod helpers;
pub mod preview;
pub mod range;

pub use adapter::{DateAdapter, FormatKey};
pub use chrono_adapter::ChronoAdapter;
pub use error::DateError;
pub use helpers::DateHelpers;
pub use preview::RangePreview;
pub use range::{DateValue, InputRole, RangePhase, RangeValue, SelectionMode};
