//! Date adapter errors

/// Errors raised by date adapters
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("Cannot parse '{input}' with format {format}")]
    Parse { input: String, format: String },

    #[error("Invalid calendar month {year}-{month}")]
    InvalidMonth { year: i32, month: u32 },
}
