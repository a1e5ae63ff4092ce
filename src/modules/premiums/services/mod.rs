pub mod premium_bracket_service;
pub mod premium_calculator;

pub use premium_bracket_service::PremiumBracketService;
pub use premium_calculator::{PremiumCalculator, PremiumTotals, CARE_MINIMUM_AGE};
