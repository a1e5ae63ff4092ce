mod social_insurance_quote;

pub use social_insurance_quote::{CostDetail, SocialInsuranceQuote};
