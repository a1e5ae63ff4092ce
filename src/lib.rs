//! Shaho Social Insurance Quote Service Library
//!
//! This library computes Japanese monthly payroll deductions: health,
//! care and pension premiums from the standard-remuneration table,
//! withholding tax on the net salary, and employment insurance.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::employment;
pub use modules::premiums;
pub use modules::quotes;
pub use modules::withholding;
