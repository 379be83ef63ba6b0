//! Core conversion logic and abstractions

pub mod config;
pub mod convert;
pub mod currency;
pub mod log;
pub mod trend;

// Re-export main types for cleaner imports
pub use currency::{
    ConversionError, ConversionRequest, ConversionResult, CurrencyCode, RateTable,
    RateTableProvider,
};
