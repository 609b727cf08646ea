//! Core business logic abstractions

pub mod currency;
pub mod log;

// Re-export main types for cleaner imports
pub use currency::{RateProvider, RateTable};
