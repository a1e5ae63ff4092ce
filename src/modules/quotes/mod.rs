// Social insurance quote module

pub mod controllers;
pub mod models;
pub mod services;

pub use models::{CostDetail, SocialInsuranceQuote};
pub use services::{QuotePolicy, SocialInsuranceQueryService};
